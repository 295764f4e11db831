//! # 载荷打包
//!
//! 载荷字节按顺序写入像素的 R、G、B 通道，每像素 3 字节；
//! 最后一个像素不足 3 字节的部分补零。

use crate::canvas::Canvas;
use crate::constants::BYTES_PER_PIXEL;
use crate::error::CodecError;

/// 容纳 `len` 字节所需的像素数。
pub fn pixels_for(len: usize) -> usize {
    len.div_ceil(BYTES_PER_PIXEL)
}

/// 从位置 `offset` 起写入 `payload`，返回载荷之后的第一个像素位置。
///
/// # Errors
///
/// 画布放不下时返回 [`CodecError::CanvasTooSmall`]，画布保持不变。
pub fn pack(payload: &[u8], canvas: &mut Canvas, offset: usize) -> Result<usize, CodecError> {
    let pixels = pixels_for(payload.len());
    let required = offset + pixels;
    if required > canvas.capacity() {
        return Err(CodecError::CanvasTooSmall {
            required,
            available: canvas.capacity(),
        });
    }

    let region = canvas.bytes_from_mut(offset, pixels * BYTES_PER_PIXEL);
    let (data, padding) = region.split_at_mut(payload.len());
    data.copy_from_slice(payload);
    padding.fill(0);

    Ok(required)
}

/// 从位置 `offset` 起读出 `len` 字节，忽略末尾的填充。
///
/// # Errors
///
/// 区间超出画布时返回 [`CodecError::CanvasTooSmall`]。
pub fn unpack(canvas: &Canvas, offset: usize, len: usize) -> Result<Vec<u8>, CodecError> {
    let required = offset + pixels_for(len);
    if required > canvas.capacity() {
        return Err(CodecError::CanvasTooSmall {
            required,
            available: canvas.capacity(),
        });
    }

    Ok(canvas.bytes_from(offset, len).to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_triple_is_zero_padded() {
        let mut canvas = Canvas::filled(4, 1, [7, 7, 7]);
        assert_eq!(pack(b"abcd", &mut canvas, 1).unwrap(), 3);
        assert_eq!(canvas.rgb(1), [b'a', b'b', b'c']);
        assert_eq!(canvas.rgb(2), [b'd', 0, 0]);
        assert_eq!(canvas.rgb(3), [7, 7, 7]);
        assert_eq!(unpack(&canvas, 1, 4).unwrap(), b"abcd");
    }

    #[test]
    fn out_of_bounds() {
        let mut canvas = Canvas::new(2, 1);
        assert!(matches!(
            pack(b"abcdefg", &mut canvas, 0),
            Err(CodecError::CanvasTooSmall { required: 3, .. })
        ));
        assert!(unpack(&canvas, 1, 6).is_err());
    }
}
