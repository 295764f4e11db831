//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::constants::DEFAULT_SPLIT_SIZE;
use crate::container::ContainerFormat;
use clap::Parser;
use std::path::PathBuf;

/// 把任意文件打包成无损格式图像 (如 PNG, BMP)，或从这样的图像中恢复原文件。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "把任意文件逐字节打包进无损格式图像 (如 PNG, BMP)，或从这样的图像中恢复原文件。\n图像即使被补边或贴进更大的画布，也能通过 --autocrop 找回。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：encode (编码) 和 decode (解码)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将文件编码为一张或多张图像。
    Encode(EncodeArgs),

    /// 从一张或多张图像中解码出原文件。
    Decode(DecodeArgs),
}

/// 'encode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// 要编码的文件路径。
    pub input: PathBuf,

    /// 输出图像路径。默认为 `<INPUT>.<扩展名>`；分成多块时会在扩展名前插入序号。
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 图像宽度 (像素)，最小 110。省略时自动选择接近正方形的宽度。
    #[arg(short, long)]
    pub width: Option<u32>,

    /// 每张图像最多容纳的字节数，0 表示不分块。
    #[arg(short, long, default_value_t = DEFAULT_SPLIT_SIZE)]
    pub split_size: usize,

    /// 对载荷做 XOR 变换所用的密钥。
    #[arg(short, long, conflicts_with = "magic")]
    pub key: Option<String>,

    /// 使用固定密钥 [0, 1, ..., 255] 做 XOR 变换。
    #[arg(short, long)]
    pub magic: bool,

    /// 输出图像的容器格式。
    #[arg(short, long, value_enum, default_value_t = ContainerFormat::Png)]
    pub format: ContainerFormat,

    /// 写入图像的文件名，默认取输入文件的文件名。
    #[arg(short, long)]
    pub name: Option<String>,

    /// 按原样记录输入路径，而不只是文件名。
    #[arg(long)]
    pub keep_path: bool,

    /// 覆盖已存在的输出文件。
    #[arg(long)]
    pub force: bool,
}

/// 'decode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// 待解码的图像路径；多块时按序号顺序给出。
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// 恢复出的文件路径。默认使用图像中记录的文件名，相对于第一张图像所在目录。
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 先在图像中定位并裁剪出载荷区域 (用于被补边或嵌入更大画布的图像)。
    #[arg(short, long)]
    pub autocrop: bool,

    /// 编码时使用的 XOR 密钥。
    #[arg(short, long, conflicts_with = "magic")]
    pub key: Option<String>,

    /// 编码时使用了固定密钥。
    #[arg(short, long)]
    pub magic: bool,

    /// 只保留记录文件名的最后一段，丢弃其中的目录部分。
    #[arg(long)]
    pub flatten: bool,

    /// 覆盖已存在的输出文件。
    #[arg(long)]
    pub force: bool,
}
