//! # 多块流水线
//!
//! 写入：整个流先做 XOR，再分块，每块编码为独立画布。
//! 读取：逐块 (可选自动裁剪后) 解码，按顺序拼接，最后做 XOR 还原。
//! XOR 的密钥下标跨块连续，因此必须作用于整个流而不是单个块。

use crate::autocrop::autocrop;
use crate::canvas::Canvas;
use crate::chunk;
use crate::codec::{self, Decoded, Encode, encoder_for};
use crate::config::Config;
use crate::constants::VERSION;
use crate::error::CodecError;

/// 把 `data` 编码为一张或多张画布，顺序与块顺序一致。
///
/// 每块都记录同一个 `name`。
pub fn encode_stream(
    data: &[u8],
    name: &str,
    config: &Config,
) -> Result<Vec<Canvas>, CodecError> {
    let mut stored = data.to_vec();
    if !config.key.is_none() {
        log::debug!(
            "applying XOR transform with a {}-byte key",
            config.key.bytes().len()
        );
        config.key.apply_in_place(&mut stored);
    }

    let encoder = encoder_for(VERSION, config)?;
    let chunks = chunk::split(&stored, config.split_size.unwrap_or(0));
    log::debug!(
        "encoding {} bytes as {} chunk(s), format version {}",
        stored.len(),
        chunks.len(),
        encoder.version()
    );

    encode_chunks(encoder.as_ref(), &chunks, name)
}

#[cfg(feature = "parallel")]
fn encode_chunks(
    encoder: &dyn Encode,
    chunks: &[&[u8]],
    name: &str,
) -> Result<Vec<Canvas>, CodecError> {
    use rayon::prelude::*;

    chunks
        .par_iter()
        .map(|chunk| encoder.encode(chunk, name))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn encode_chunks(
    encoder: &dyn Encode,
    chunks: &[&[u8]],
    name: &str,
) -> Result<Vec<Canvas>, CodecError> {
    chunks
        .iter()
        .map(|chunk| encoder.encode(chunk, name))
        .collect()
}

/// 解码按顺序给出的全部块并还原原始数据。
///
/// # Errors
///
/// 任一块解码失败即整体失败；各块名称不一致时返回
/// [`CodecError::InconsistentChunks`]。
pub fn decode_stream(canvases: &[Canvas], config: &Config) -> Result<Decoded, CodecError> {
    if canvases.is_empty() {
        return Err(CodecError::InvalidSource {
            reason: "no images to decode".to_string(),
        });
    }

    let mut payload = Vec::new();
    let mut name: Option<String> = None;

    for (index, canvas) in canvases.iter().enumerate() {
        let decoded = if config.autocrop {
            codec::decode(&autocrop(canvas)?)?
        } else {
            codec::decode(canvas)?
        };

        let expected = name.get_or_insert_with(|| decoded.name.clone());
        if *expected != decoded.name {
            return Err(CodecError::InconsistentChunks {
                index,
                expected: expected.clone(),
                found: decoded.name,
            });
        }
        payload.extend_from_slice(&decoded.payload);
    }

    config.key.apply_in_place(&mut payload);

    Ok(Decoded {
        payload,
        name: name.unwrap_or_default(),
    })
}
