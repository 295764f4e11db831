//! # 校验和
//!
//! 载荷字节之和对 2^24 取模。写入头部时使用变换后 (实际存储) 的字节，
//! 因此校验不依赖 XOR 密钥。

use crate::constants::CHECKSUM_MASK;
use crate::error::CodecError;

/// 计算 `data` 的加法校验和。
pub fn checksum(data: &[u8]) -> u32 {
    // 2^24 整除 2^32，先按 u32 回绕求和再取低 24 位即可
    data.iter()
        .fold(0u32, |sum, &byte| sum.wrapping_add(u32::from(byte)))
        & CHECKSUM_MASK
}

/// 重新计算并与头部中存储的值比较。
///
/// # Errors
///
/// 不一致时返回 [`CodecError::ChecksumMismatch`]。
pub fn verify(data: &[u8], stored: u32) -> Result<(), CodecError> {
    let computed = checksum(data);
    if computed == stored {
        Ok(())
    } else {
        Err(CodecError::ChecksumMismatch { computed, stored })
    }
}
