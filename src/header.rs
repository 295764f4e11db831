//! # 头部编解码
//!
//! 头部紧跟在同步标记之后，共 [`HEADER_SIZE`] 个像素：
//!
//! | 偏移 | 像素数 | 内容 |
//! |---|---|---|
//! | 41 | 1 | 版本 |
//! | 42 | 1 | 宽度 |
//! | 43 | 1 | 高度 (内容行数，不含末尾的余量行) |
//! | 44 | 1 | 载荷长度 (字节) |
//! | 45 | 1 | 校验和 |
//! | 46 | 64 | 名称，每像素一个 UTF-8 字节，以零结尾/补齐 |

use crate::canvas::Canvas;
use crate::constants::{BOOTSTRAP_SIZE, HEADER_SIZE, NAME_SIZE};
use crate::error::CodecError;

/// 头部的全部字段。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub version: u32,
    pub width: u32,
    pub height: u32,
    pub payload_len: u32,
    pub checksum: u32,
    pub name: String,
}

/// 头部中版本、宽度、高度三个字段，自动裁剪只需要它们。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub version: u32,
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// 从任意位置 `p` 读取连续的三个像素。
    ///
    /// # Errors
    ///
    /// 画布在 `p + 3` 之前结束时返回 [`CodecError::CanvasTooSmall`]。
    pub fn read_at(canvas: &Canvas, p: usize) -> Result<Self, CodecError> {
        let required = p + 3;
        if required > canvas.capacity() {
            return Err(CodecError::CanvasTooSmall {
                required,
                available: canvas.capacity(),
            });
        }
        Ok(Self {
            version: canvas.get(p),
            width: canvas.get(p + 1),
            height: canvas.get(p + 2),
        })
    }
}

/// 把名称编码为至多 [`NAME_SIZE`] 个字节。
///
/// 过长的名称在字符边界处被静默截断，保证截断后仍是合法的 UTF-8。
pub fn encode_name(name: &str) -> &[u8] {
    if name.len() <= NAME_SIZE {
        return name.as_bytes();
    }
    let end = (0..=NAME_SIZE)
        .rev()
        .find(|&i| name.is_char_boundary(i))
        .unwrap_or(0);
    log::warn!(
        "name `{name}` is longer than {NAME_SIZE} bytes, truncated to `{}`",
        &name[..end]
    );
    &name.as_bytes()[..end]
}

impl Header {
    /// 在 [`BOOTSTRAP_SIZE`] 处写入头部，返回载荷的起始位置。
    ///
    /// 调用方需保证画布至少有 `BOOTSTRAP_SIZE + HEADER_SIZE` 个像素。
    pub fn write(&self, canvas: &mut Canvas) -> usize {
        let mut p = BOOTSTRAP_SIZE;
        for value in [
            self.version,
            self.width,
            self.height,
            self.payload_len,
            self.checksum,
        ] {
            canvas.set(p, value);
            p += 1;
        }

        let name = encode_name(&self.name);
        for i in 0..NAME_SIZE {
            canvas.set(p, name.get(i).copied().map_or(0, u32::from));
            p += 1;
        }

        p
    }

    /// 读取头部的全部字段，不做语义校验。
    ///
    /// # Errors
    ///
    /// * 画布容纳不下完整头部时返回 [`CodecError::CanvasTooSmall`]。
    /// * 名称像素大于 255 时返回 [`CodecError::InvalidName`]。
    pub fn read(canvas: &Canvas) -> Result<Self, CodecError> {
        let required = BOOTSTRAP_SIZE + HEADER_SIZE;
        if canvas.capacity() < required {
            return Err(CodecError::CanvasTooSmall {
                required,
                available: canvas.capacity(),
            });
        }

        let Dimensions {
            version,
            width,
            height,
        } = Dimensions::read_at(canvas, BOOTSTRAP_SIZE)?;
        let payload_len = canvas.get(BOOTSTRAP_SIZE + 3);
        let checksum = canvas.get(BOOTSTRAP_SIZE + 4);

        let name_start = BOOTSTRAP_SIZE + 5;
        let mut name = Vec::with_capacity(NAME_SIZE);
        for index in 0..NAME_SIZE {
            let value = canvas.get(name_start + index);
            if value == 0 {
                break;
            }
            let byte =
                u8::try_from(value).map_err(|_| CodecError::InvalidName { index, value })?;
            name.push(byte);
        }

        Ok(Self {
            version,
            width,
            height,
            payload_len,
            checksum,
            name: String::from_utf8_lossy(&name).into_owned(),
        })
    }
}
