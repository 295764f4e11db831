//! # 编码器 (格式版本 1)
//!
//! 画布依次写入同步标记、头部和载荷。尺寸规则：
//!
//! * 给定宽度提示时 `width = max(hint, BOOTSTRAP_SIZE + HEADER_SIZE)`；
//! * 否则 `width = max(2^ceil(log2(sqrt(total_cells) + 1)), MIN_AUTO_WIDTH)`；
//! * `rows = ceil(total_cells / width)`，画布高度为 `rows + 1` (多一行余量)。
//!
//! 头部高度字段记录 `rows`，自动裁剪时再加回余量行。

use crate::bootstrap;
use crate::canvas::Canvas;
use crate::checksum::checksum;
use crate::codec::Encode;
use crate::config::Config;
use crate::constants::{
    MAX_PAYLOAD_LEN, MAX_PIXEL_VALUE, MIN_AUTO_WIDTH, PAYLOAD_OFFSET, VERSION,
};
use crate::error::CodecError;
use crate::header::Header;
use crate::packing::{self, pixels_for};

/// 一块画布的几何尺寸。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    /// 容纳标记、头部和载荷所需的行数。
    pub rows: u32,
}

impl Layout {
    /// 计算长度为 `payload_len` 的载荷所需的画布尺寸。
    ///
    /// # Errors
    ///
    /// * 载荷超过 [`MAX_PAYLOAD_LEN`] 时返回 [`CodecError::PayloadTooLarge`]。
    /// * 宽或高无法写入 24 位像素时返回 [`CodecError::CanvasTooLarge`]。
    pub fn for_payload(payload_len: usize, width_hint: Option<u32>) -> Result<Self, CodecError> {
        if payload_len > MAX_PAYLOAD_LEN {
            return Err(CodecError::PayloadTooLarge {
                len: payload_len,
                max: MAX_PAYLOAD_LEN,
            });
        }

        let total_cells = pixels_for(payload_len) + PAYLOAD_OFFSET;
        let width = match width_hint {
            Some(hint) => hint.max(PAYLOAD_OFFSET as u32),
            None => auto_width(total_cells),
        };
        let rows = total_cells.div_ceil(width as usize);

        if width > MAX_PIXEL_VALUE || rows >= MAX_PIXEL_VALUE as usize {
            return Err(CodecError::CanvasTooLarge {
                width: u64::from(width),
                height: rows as u64 + 1,
            });
        }

        Ok(Self {
            width,
            rows: rows as u32,
        })
    }

    pub fn canvas_height(&self) -> u32 {
        self.rows + 1
    }
}

/// 不小于 `sqrt(total_cells) + 1` 的最小 2 的幂，且不低于 [`MIN_AUTO_WIDTH`]。
fn auto_width(total_cells: usize) -> u32 {
    let side = (total_cells as f64).sqrt() + 1.0;
    (side.ceil() as u32).next_power_of_two().max(MIN_AUTO_WIDTH)
}

#[derive(Debug, Clone, Default)]
pub struct EncoderV1 {
    width_hint: Option<u32>,
}

impl EncoderV1 {
    pub fn new(config: &Config) -> Self {
        Self {
            width_hint: config.width,
        }
    }
}

impl Encode for EncoderV1 {
    fn version(&self) -> u32 {
        VERSION
    }

    fn encode(&self, payload: &[u8], name: &str) -> Result<Canvas, CodecError> {
        let layout = Layout::for_payload(payload.len(), self.width_hint)?;
        let mut canvas = Canvas::new(layout.width, layout.canvas_height());

        bootstrap::write(&mut canvas);
        let header = Header {
            version: VERSION,
            width: layout.width,
            height: layout.rows,
            payload_len: payload.len() as u32,
            checksum: checksum(payload),
            name: name.to_string(),
        };
        let p = header.write(&mut canvas);
        packing::pack(payload, &mut canvas, p)?;

        log::debug!(
            "encoded {} bytes as `{}` into {}x{} canvas, checksum {:#08X}",
            payload.len(),
            header.name,
            canvas.width(),
            canvas.height(),
            header.checksum
        );

        Ok(canvas)
    }
}
