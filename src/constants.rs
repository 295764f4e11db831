//! # 格式常量
//!
//! 图像帧格式 (版本 1) 的全部固定参数。所有偏移量均以像素为单位。

/// 当前格式版本号，写入头部的第一个像素。
pub const VERSION: u32 = 1;

/// 同步标记的循环图案。标记区域的第 `i` 个像素为 `BOOTSTRAP[i % BOOTSTRAP.len()]`。
pub const BOOTSTRAP: [u32; 4] = [0x01_0203, 0xFE_FDFC, 0x81_0079, 0x01_CDEF];

/// 同步标记占用的像素数。
pub const BOOTSTRAP_SIZE: usize = 41;

/// 头部占用的像素数：版本、宽、高、长度、校验和各 1 个，名称 64 个。
pub const HEADER_SIZE: usize = 69;

/// 名称字段的像素数 (每像素一个字节)。
pub const NAME_SIZE: usize = 64;

/// 载荷数据的起始位置。
pub const PAYLOAD_OFFSET: usize = BOOTSTRAP_SIZE + HEADER_SIZE;

/// 每个像素承载的载荷字节数 (R, G, B)。
pub const BYTES_PER_PIXEL: usize = 3;

/// 单个像素能表示的最大整数值 (24 位)。
pub const MAX_PIXEL_VALUE: u32 = 0xFF_FFFF;

/// 单张画布可容纳的最大载荷长度。长度字段只有 24 位，2^24 本身会让长度像素回绕为 0。
pub const MAX_PAYLOAD_LEN: usize = MAX_PIXEL_VALUE as usize;

/// 校验和的模数 2^24。
pub const CHECKSUM_MASK: u32 = MAX_PIXEL_VALUE;

/// 自动尺寸的最小宽度。同步标记与紧随其后的三个头部像素必须落在同一行，
/// 自动裁剪才能在大画布中找到它们。
pub const MIN_AUTO_WIDTH: u32 = 64;

/// 默认分块大小：5 MiB。
pub const DEFAULT_SPLIT_SIZE: usize = 5 * 1024 * 1024;
