//! # 同步标记
//!
//! 画布最前面的 [`BOOTSTRAP_SIZE`] 个像素是一段循环重复的固定图案，
//! 解码时用它确认对齐，自动裁剪时用它在大画布中定位载荷。

use crate::canvas::Canvas;
use crate::constants::{BOOTSTRAP, BOOTSTRAP_SIZE};
use crate::error::CodecError;

/// 标记中第 `index` 个像素的预期值。
pub fn expected(index: usize) -> u32 {
    BOOTSTRAP[index % BOOTSTRAP.len()]
}

/// 在位置 `0..BOOTSTRAP_SIZE` 写入同步标记，返回下一个可写位置。
pub fn write(canvas: &mut Canvas) -> usize {
    for p in 0..BOOTSTRAP_SIZE {
        canvas.set(p, expected(p));
    }
    BOOTSTRAP_SIZE
}

/// 校验画布开头的同步标记。
///
/// # Errors
///
/// 画布小于标记本身时返回 [`CodecError::CanvasTooSmall`]；
/// 任一像素不符时返回 [`CodecError::InvalidBootstrap`]。
pub fn check(canvas: &Canvas) -> Result<(), CodecError> {
    if canvas.capacity() < BOOTSTRAP_SIZE {
        return Err(CodecError::CanvasTooSmall {
            required: BOOTSTRAP_SIZE,
            available: canvas.capacity(),
        });
    }

    (0..BOOTSTRAP_SIZE).try_for_each(|position| {
        let found = canvas.get(position);
        let expected = expected(position);
        if found == expected {
            Ok(())
        } else {
            Err(CodecError::InvalidBootstrap {
                position,
                found,
                expected,
            })
        }
    })
}

/// 按行优先顺序扫描整块画布，返回第一个完整标记的起始位置。
///
/// 像素不匹配时计数器清零，并立即用该像素重新尝试匹配标记的第一个值；
/// 除此之外不复用任何部分匹配。
pub fn find(canvas: &Canvas) -> Option<usize> {
    let mut matched = 0;
    for p in 0..canvas.capacity() {
        let value = canvas.get(p);
        if value == expected(matched) {
            matched += 1;
        } else {
            matched = usize::from(value == expected(0));
        }

        if matched == BOOTSTRAP_SIZE {
            return Some(p + 1 - BOOTSTRAP_SIZE);
        }
    }
    None
}
