//! # 画布与像素寻址
//!
//! [`Canvas`] 是一块连续的 RGB 字节缓冲区 (行优先，每像素 3 字节)。
//! 线性位置 `p` 与坐标 `(x, y)` 的换算，以及像素与 24 位整数之间的换算，
//! 在编码、解码和自动裁剪中完全一致，全部定义在本模块。

use crate::constants::BYTES_PER_PIXEL;
use crate::error::CodecError;

/// 将线性位置转换为行优先坐标 `(x, y)`。
///
/// `width` 必须大于 0。
pub fn position_to_xy(p: usize, width: u32) -> (u32, u32) {
    let width = width as usize;
    ((p % width) as u32, (p / width) as u32)
}

/// [`position_to_xy`] 的逆运算。
pub fn xy_to_position(x: u32, y: u32, width: u32) -> usize {
    x as usize + y as usize * width as usize
}

/// 将一个像素解释为 24 位整数：`r + g * 256 + b * 65536`。
pub fn pixel_value(rgb: [u8; 3]) -> u32 {
    u32::from(rgb[0]) | u32::from(rgb[1]) << 8 | u32::from(rgb[2]) << 16
}

/// [`pixel_value`] 的逆运算。高于 24 位的部分被丢弃。
pub fn integer_to_rgb(value: u32) -> [u8; 3] {
    [value as u8, (value >> 8) as u8, (value >> 16) as u8]
}

/// 一块宽 `width`、高 `height` 的 RGB 画布。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// 创建一块全黑 (全零) 的画布。
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, [0, 0, 0])
    }

    /// 创建一块以单一颜色填充的画布。
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let capacity = width as usize * height as usize;
        let pixels = rgb.repeat(capacity);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// 由现成的 RGB 缓冲区构造画布。
    ///
    /// # Errors
    ///
    /// 缓冲区长度不等于 `width * height * 3` 时返回 [`CodecError::InvalidSource`]。
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, CodecError> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(CodecError::InvalidSource {
                reason: format!(
                    "{width}x{height} RGB buffer needs {expected} bytes, got {}",
                    pixels.len()
                ),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// 画布的像素总数。
    pub fn capacity(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// 位置 `p` 处像素的 RGB 字节。调用方需保证 `p < capacity()`。
    pub fn rgb(&self, p: usize) -> [u8; 3] {
        let i = p * BYTES_PER_PIXEL;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    /// 位置 `p` 处像素的 24 位整数值。
    pub fn get(&self, p: usize) -> u32 {
        pixel_value(self.rgb(p))
    }

    /// 将位置 `p` 处像素设为 24 位整数 `value`。
    pub fn set(&mut self, p: usize, value: u32) {
        let i = p * BYTES_PER_PIXEL;
        self.pixels[i..i + BYTES_PER_PIXEL].copy_from_slice(&integer_to_rgb(value));
    }

    /// 位置 `p` 起的连续像素对应的原始字节区间。
    pub(crate) fn bytes_from(&self, p: usize, len: usize) -> &[u8] {
        let start = p * BYTES_PER_PIXEL;
        &self.pixels[start..start + len]
    }

    pub(crate) fn bytes_from_mut(&mut self, p: usize, len: usize) -> &mut [u8] {
        let start = p * BYTES_PER_PIXEL;
        &mut self.pixels[start..start + len]
    }

    /// 复制出矩形区域 `(x, y, x + width, y + height)`。
    ///
    /// # Errors
    ///
    /// 矩形超出画布边界时返回 [`CodecError::CanvasTooSmall`]。
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Result<Canvas, CodecError> {
        let fits = x as u64 + width as u64 <= self.width as u64
            && y as u64 + height as u64 <= self.height as u64;
        if !fits {
            return Err(CodecError::CanvasTooSmall {
                required: xy_to_position(
                    x.saturating_add(width),
                    y.saturating_add(height),
                    self.width,
                ),
                available: self.capacity(),
            });
        }

        let row_bytes = width as usize * BYTES_PER_PIXEL;
        let mut pixels = Vec::with_capacity(row_bytes * height as usize);
        for row in y..y + height {
            let start = xy_to_position(x, row, self.width) * BYTES_PER_PIXEL;
            pixels.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }

        Ok(Canvas {
            width,
            height,
            pixels,
        })
    }

    /// 将 `other` 贴到本画布的 `(x, y)` 处，超出边界的部分被裁掉。
    pub fn paste(&mut self, other: &Canvas, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let cols = other.width.min(self.width - x) as usize;
        let rows = other.height.min(self.height - y);
        let row_bytes = cols * BYTES_PER_PIXEL;

        for row in 0..rows {
            let src = xy_to_position(0, row, other.width) * BYTES_PER_PIXEL;
            let dst = xy_to_position(x, y + row, self.width) * BYTES_PER_PIXEL;
            self.pixels[dst..dst + row_bytes]
                .copy_from_slice(&other.pixels[src..src + row_bytes]);
        }
    }
}
