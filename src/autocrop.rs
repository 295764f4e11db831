//! # 自动裁剪
//!
//! 载荷图像被补边或贴进更大的画布后，位置未知。这里按行优先顺序扫描同步标记，
//! 读出标记后的宽高，再裁剪出原始的载荷矩形。
//!
//! 扫描顺序与 [`position_to_xy`] 的行优先寻址一致，标记在大画布中同样是
//! 同一行上连续的 [`BOOTSTRAP_SIZE`] 个像素。

use crate::bootstrap;
use crate::canvas::{Canvas, position_to_xy};
use crate::constants::{BOOTSTRAP_SIZE, VERSION};
use crate::error::CodecError;
use crate::header::Dimensions;

/// 大画布中载荷所在的矩形。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// 定位载荷矩形。
///
/// 高度为头部记录的行数加一行余量；若载荷贴在画布底边、余量行被截掉，
/// 则以画布底边为界。
///
/// # Errors
///
/// * 找不到完整标记时返回 [`CodecError::BootstrapNotFound`]。
/// * 标记后的版本号不符时返回 [`CodecError::InvalidVersion`]。
/// * 标记紧贴画布末尾、读不到头部时返回 [`CodecError::CanvasTooSmall`]。
pub fn locate(canvas: &Canvas) -> Result<Region, CodecError> {
    let start = bootstrap::find(canvas).ok_or(CodecError::BootstrapNotFound)?;
    let (x, y) = position_to_xy(start, canvas.width());
    log::info!("found bootstrap at ({x}, {y}) ({start})");

    let dims = Dimensions::read_at(canvas, start + BOOTSTRAP_SIZE)?;
    log::debug!("header data: {dims:?}");
    if dims.version != VERSION {
        return Err(CodecError::InvalidVersion {
            found: dims.version,
            expected: VERSION,
        });
    }

    Ok(Region {
        x,
        y,
        width: dims.width,
        height: dims.height.saturating_add(1).min(canvas.height() - y),
    })
}

/// 定位并裁剪出载荷矩形。
pub fn autocrop(canvas: &Canvas) -> Result<Canvas, CodecError> {
    let Region {
        x,
        y,
        width,
        height,
    } = locate(canvas)?;
    log::info!(
        "cropping {}x{} -> {width}x{height}+({x},{y})",
        canvas.width(),
        canvas.height()
    );
    canvas.crop(x, y, width, height)
}
