//! # 配置
//!
//! 编码与解码所需的全部可调参数集中在 [`Config`] 中，显式传给调用方，
//! 不使用任何进程级全局状态。

use crate::cli::{DecodeArgs, EncodeArgs};
use crate::constants::DEFAULT_SPLIT_SIZE;
use crate::xor::XorKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 宽度提示；`None` 时自动选择接近正方形的宽度。
    pub width: Option<u32>,
    /// 每张图像的最大载荷字节数；`None` 表示不分块。
    pub split_size: Option<usize>,
    pub key: XorKey,
    /// 解码前先在画布中定位并裁剪出载荷区域。
    pub autocrop: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: None,
            split_size: Some(DEFAULT_SPLIT_SIZE),
            key: XorKey::None,
            autocrop: false,
        }
    }
}

fn key_from_args(key: Option<&str>, magic: bool) -> XorKey {
    match (key, magic) {
        (_, true) => XorKey::Magic,
        (Some(key), false) => XorKey::Bytes(key.as_bytes().to_vec()),
        (None, false) => XorKey::None,
    }
}

impl From<&EncodeArgs> for Config {
    fn from(args: &EncodeArgs) -> Self {
        Self {
            width: args.width,
            split_size: (args.split_size > 0).then_some(args.split_size),
            key: key_from_args(args.key.as_deref(), args.magic),
            autocrop: false,
        }
    }
}

impl From<&DecodeArgs> for Config {
    fn from(args: &DecodeArgs) -> Self {
        Self {
            key: key_from_args(args.key.as_deref(), args.magic),
            autocrop: args.autocrop,
            ..Self::default()
        }
    }
}
