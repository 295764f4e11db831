//! # 错误类型
//!
//! 编码、解码、自动裁剪以及图像容器读写过程中可能出现的全部错误。
//! 所有错误都是终止性的：一旦返回，当前操作不会产生任何部分结果。

use thiserror::Error;

/// 库内所有操作共用的错误枚举。
#[derive(Debug, Error)]
pub enum CodecError {
    /// 同步标记区域内的某个像素与预期值不符。
    #[error("invalid bootstrap data at pixel {position}: {found:#08X} != {expected:#08X}")]
    InvalidBootstrap {
        position: usize,
        found: u32,
        expected: u32,
    },

    #[error("invalid version: {found} != {expected}")]
    InvalidVersion { found: u32, expected: u32 },

    #[error("invalid width: {found} != {expected}")]
    InvalidWidth { found: u32, expected: u32 },

    #[error("invalid height: {found} > {max}")]
    InvalidHeight { found: u32, max: u32 },

    #[error("invalid checksum: {computed:#08X} != {stored:#08X}")]
    ChecksumMismatch { computed: u32, stored: u32 },

    #[error("no bootstrap found")]
    BootstrapNotFound,

    #[error("payload of {len} bytes exceeds the maximum of {max} bytes per image")]
    PayloadTooLarge { len: usize, max: usize },

    /// 画布尺寸无法用一个 24 位像素表示。
    #[error("canvas of {width}x{height} cannot be described by the header")]
    CanvasTooLarge { width: u64, height: u64 },

    /// 画布的像素数不足以容纳要读取或裁剪的区域。
    #[error("canvas holds {available} pixels, {required} required")]
    CanvasTooSmall { required: usize, available: usize },

    #[error("invalid name byte {value:#08X} at name index {index}")]
    InvalidName { index: usize, value: u32 },

    #[error("chunk {index} is named `{found}`, expected `{expected}`")]
    InconsistentChunks {
        index: usize,
        expected: String,
        found: String,
    },

    #[error("invalid image source: {reason}")]
    InvalidSource { reason: String },

    #[error("image container error: {0}")]
    Container(#[from] image::ImageError),
}
