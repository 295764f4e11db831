//! # 编解码接口
//!
//! 编码器和解码器分别实现 [`Encode`] 与 [`Decode`] 两个小接口，并按格式版本号选取。
//! 新增格式版本只需增加实现并在 [`encoder_for`] / [`decoder_for`] 中登记，
//! 调用方无需改动。

use crate::bootstrap;
use crate::canvas::Canvas;
use crate::config::Config;
use crate::constants::{BOOTSTRAP_SIZE, VERSION};
use crate::decoder::DecoderV1;
use crate::encoder::EncoderV1;
use crate::error::CodecError;
use crate::header::Dimensions;

/// 解码结果：原始载荷与头部中记录的名称。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub payload: Vec<u8>,
    pub name: String,
}

pub trait Encode: Send + Sync {
    /// 本编码器写出的格式版本。
    fn version(&self) -> u32;

    /// 把 `payload` 与 `name` 编码为一块新画布。
    fn encode(&self, payload: &[u8], name: &str) -> Result<Canvas, CodecError>;
}

pub trait Decode: Send + Sync {
    /// 本解码器能读取的格式版本。
    fn version(&self) -> u32;

    /// 从恰好等于载荷矩形的画布中恢复载荷与名称。
    fn decode(&self, canvas: &Canvas) -> Result<Decoded, CodecError>;
}

/// 按版本号选取编码器。
///
/// # Errors
///
/// 未知版本返回 [`CodecError::InvalidVersion`]。
pub fn encoder_for(version: u32, config: &Config) -> Result<Box<dyn Encode>, CodecError> {
    match version {
        VERSION => Ok(Box::new(EncoderV1::new(config))),
        found => Err(CodecError::InvalidVersion {
            found,
            expected: VERSION,
        }),
    }
}

/// 按版本号选取解码器。
///
/// # Errors
///
/// 未知版本返回 [`CodecError::InvalidVersion`]。
pub fn decoder_for(version: u32) -> Result<Box<dyn Decode>, CodecError> {
    match version {
        VERSION => Ok(Box::new(DecoderV1)),
        found => Err(CodecError::InvalidVersion {
            found,
            expected: VERSION,
        }),
    }
}

/// 以当前版本编码单块载荷。
pub fn encode(payload: &[u8], name: &str, width: Option<u32>) -> Result<Canvas, CodecError> {
    let config = Config {
        width,
        ..Config::default()
    };
    encoder_for(VERSION, &config)?.encode(payload, name)
}

/// 校验同步标记后按画布中记录的版本选择解码器。
pub fn decode(canvas: &Canvas) -> Result<Decoded, CodecError> {
    bootstrap::check(canvas)?;
    let Dimensions { version, .. } = Dimensions::read_at(canvas, BOOTSTRAP_SIZE)?;
    decoder_for(version)?.decode(canvas)
}
