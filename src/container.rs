//! # 图像容器读写
//!
//! 通过 `image` crate 把 [`Canvas`] 存成无损格式的文件，或从文件读回。
//! 只支持无损格式，否则像素值会被改写、校验必然失败。

use crate::canvas::Canvas;
use crate::error::CodecError;
use clap::ValueEnum;
use image::{DynamicImage, ImageFormat, ImageReader, RgbImage};
use std::path::Path;

/// 可选的无损容器格式。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ContainerFormat {
    #[default]
    Png,
    Bmp,
    Tiff,
    Webp,
    Qoi,
}

impl ContainerFormat {
    /// 默认输出文件使用的扩展名。
    pub fn extension(self) -> &'static str {
        match self {
            ContainerFormat::Png => "png",
            ContainerFormat::Bmp => "bmp",
            ContainerFormat::Tiff => "tiff",
            ContainerFormat::Webp => "webp",
            ContainerFormat::Qoi => "qoi",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            ContainerFormat::Png => ImageFormat::Png,
            ContainerFormat::Bmp => ImageFormat::Bmp,
            ContainerFormat::Tiff => ImageFormat::Tiff,
            ContainerFormat::Webp => ImageFormat::WebP,
            ContainerFormat::Qoi => ImageFormat::Qoi,
        }
    }
}

impl TryFrom<&Canvas> for RgbImage {
    type Error = CodecError;

    fn try_from(canvas: &Canvas) -> Result<Self, Self::Error> {
        RgbImage::from_raw(canvas.width(), canvas.height(), canvas.as_raw().to_vec()).ok_or_else(
            || CodecError::InvalidSource {
                reason: format!(
                    "pixel buffer does not match {}x{}",
                    canvas.width(),
                    canvas.height()
                ),
            },
        )
    }
}

impl TryFrom<DynamicImage> for Canvas {
    type Error = CodecError;

    /// RGB8 原样使用，RGBA8 丢弃 alpha 通道，其余颜色类型一律拒绝。
    fn try_from(image: DynamicImage) -> Result<Self, Self::Error> {
        let rgb = match image {
            DynamicImage::ImageRgb8(rgb) => rgb,
            rgba @ DynamicImage::ImageRgba8(_) => rgba.to_rgb8(),
            other => {
                return Err(CodecError::InvalidSource {
                    reason: format!("unsupported color type {:?}", other.color()),
                });
            }
        };
        let (width, height) = rgb.dimensions();
        Canvas::from_raw(width, height, rgb.into_raw())
    }
}

/// 以 `format` 格式把画布保存到 `path`。
///
/// # Errors
///
/// 编码或写文件失败时返回 [`CodecError::Container`]。
pub fn save_canvas(
    canvas: &Canvas,
    path: &Path,
    format: ContainerFormat,
) -> Result<(), CodecError> {
    let image = RgbImage::try_from(canvas)?;
    image.save_with_format(path, format.image_format())?;
    Ok(())
}

/// 从 `path` 读取图像，格式按文件内容识别。
///
/// # Errors
///
/// 文件无法读取、无法识别或颜色类型不受支持时返回 [`CodecError::InvalidSource`]。
pub fn load_canvas(path: &Path) -> Result<Canvas, CodecError> {
    let invalid = |reason: String| CodecError::InvalidSource {
        reason: format!("{}: {reason}", path.display()),
    };

    let image = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| invalid(e.to_string()))?
        .decode()
        .map_err(|e| invalid(e.to_string()))?;

    Canvas::try_from(image)
}
