//! # 解码器 (格式版本 1)

use crate::bootstrap;
use crate::canvas::Canvas;
use crate::checksum;
use crate::codec::{Decode, Decoded};
use crate::constants::{PAYLOAD_OFFSET, VERSION};
use crate::error::CodecError;
use crate::header::Header;
use crate::packing;

#[derive(Debug, Clone, Copy, Default)]
pub struct DecoderV1;

impl DecoderV1 {
    fn validate(header: &Header, canvas: &Canvas) -> Result<(), CodecError> {
        if header.version != VERSION {
            return Err(CodecError::InvalidVersion {
                found: header.version,
                expected: VERSION,
            });
        }
        if header.width != canvas.width() {
            return Err(CodecError::InvalidWidth {
                found: header.width,
                expected: canvas.width(),
            });
        }
        if header.height > canvas.height() {
            return Err(CodecError::InvalidHeight {
                found: header.height,
                max: canvas.height(),
            });
        }
        Ok(())
    }
}

impl Decode for DecoderV1 {
    fn version(&self) -> u32 {
        VERSION
    }

    /// 依次校验同步标记、头部、校验和；任一步失败即整体失败，不返回部分载荷。
    fn decode(&self, canvas: &Canvas) -> Result<Decoded, CodecError> {
        bootstrap::check(canvas)?;

        let header = Header::read(canvas)?;
        Self::validate(&header, canvas)?;
        log::debug!(
            "header: {} bytes, name: `{}`, checksum: {:#08X}",
            header.payload_len,
            header.name,
            header.checksum
        );

        let payload = packing::unpack(canvas, PAYLOAD_OFFSET, header.payload_len as usize)?;
        checksum::verify(&payload, header.checksum)?;

        Ok(Decoded {
            payload,
            name: header.name,
        })
    }
}
