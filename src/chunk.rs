//! # 分块
//!
//! 把字节流切成大小受限的块，每块各自编码成一张独立的图像。

use std::path::{Path, PathBuf};

/// 按 `max_chunk_bytes` 切分 `stream`，保持原有顺序，最后一块可以较短。
///
/// `max_chunk_bytes` 为 0 表示不限制。空流仍产生一个空块，
/// 这样空文件也能编码成一张图像。
pub fn split(stream: &[u8], max_chunk_bytes: usize) -> Vec<&[u8]> {
    if stream.is_empty() || max_chunk_bytes == 0 {
        return vec![stream];
    }
    stream.chunks(max_chunk_bytes).collect()
}

/// 第 `index` 块 (共 `count` 块) 的输出路径。
///
/// 只有一块时原样返回 `base`；否则在扩展名前插入补零的序号，
/// 例如 `data.png` -> `data.003.png`。序号至少 3 位，且足以容纳 `count - 1`。
pub fn chunk_path(base: &Path, index: usize, count: usize) -> PathBuf {
    if count <= 1 {
        return base.to_path_buf();
    }

    let digits = (count - 1).to_string().len().max(3);
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match base.extension() {
        Some(ext) => format!("{stem}.{index:0digits$}.{}", ext.to_string_lossy()),
        None => format!("{stem}.{index:0digits$}"),
    };
    base.with_file_name(file_name)
}
