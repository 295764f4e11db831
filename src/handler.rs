//! # 命令处理逻辑模块
//!
//! 包含处理 `encode` 和 `decode` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心编解码流水线以及向用户报告结果。

use crate::chunk::chunk_path;
use crate::cli::{DecodeArgs, EncodeArgs};
use crate::config::Config;
use crate::container::{ContainerFormat, load_canvas, save_canvas};
use crate::pipeline::{decode_stream, encode_stream};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// 输出文件已存在且未指定 `--force` 时拒绝继续。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 写入图像头部的名称。
fn stored_name(args: &EncodeArgs) -> String {
    if let Some(name) = &args.name {
        return name.clone();
    }
    match args.input.file_name() {
        Some(file_name) if !args.keep_path => file_name.to_string_lossy().into_owned(),
        _ => args.input.to_string_lossy().into_owned(),
    }
}

/// `<INPUT>.<扩展名>`，例如 `report.pdf` -> `report.pdf.png`。
fn default_image_path(input: &Path, format: ContainerFormat) -> PathBuf {
    let mut path = input.as_os_str().to_owned();
    path.push(".");
    path.push(format.extension());
    PathBuf::from(path)
}

/// 由图像中记录的名称推出默认输出路径，相对于第一张输入图像所在目录。
fn default_output_path(first_input: &Path, name: &str, flatten: bool) -> Result<PathBuf> {
    let stored = Path::new(name);
    let relative = if flatten {
        stored.file_name().map(PathBuf::from)
    } else {
        Some(stored.to_path_buf())
    }
    .filter(|path| !path.as_os_str().is_empty())
    .with_context(|| {
        format!(
            "The image carries no usable file name ({}). \nUse --output to choose one.",
            format!("`{name}`").red().bold()
        )
    })?;

    anyhow::ensure!(
        relative
            .components()
            .all(|component| matches!(component, Component::Normal(_))),
        "The stored file name {} is not a plain relative path. \nUse --flatten or --output.",
        name.red().bold()
    );

    let dir = first_input.parent().unwrap_or_else(|| Path::new(""));
    Ok(dir.join(relative))
}

/// 处理 'Encode' 命令的执行逻辑。
///
/// 负责读取输入文件、按配置做 XOR 与分块、把每块编码为图像，
/// 最后把全部图像写入目标路径。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径及编码选项的 `EncodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入文件。
/// * 任一块超出单张图像的容量，或图像尺寸无法写入头部。
/// * 目标文件已存在且未指定 `--force`。
/// * 无法写入目标图像文件。
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    let data = fs::read(&args.input).with_context(|| {
        format!(
            "Unable to read input file: {}",
            args.input.to_string_lossy().red().bold()
        )
    })?;

    let name = stored_name(&args);
    let config = Config::from(&args);

    let canvases = encode_stream(&data, &name, &config).with_context(|| {
        format!(
            "Failed to encode {} bytes from {}. \nTry a smaller --split-size.",
            data.len().to_string().red().bold(),
            args.input.to_string_lossy().red().bold()
        )
    })?;

    let base = args
        .output
        .clone()
        .unwrap_or_else(|| default_image_path(&args.input, args.format));
    let paths: Vec<PathBuf> = (0..canvases.len())
        .map(|index| chunk_path(&base, index, canvases.len()))
        .collect();

    // 写入任何文件之前先检查全部目标路径
    paths
        .iter()
        .try_for_each(|path| ensure_writable(path, args.force))?;

    canvases
        .iter()
        .zip(&paths)
        .try_for_each(|(canvas, path)| {
            save_canvas(canvas, path, args.format).with_context(|| {
                format!(
                    "Unable to write to target image file: {}",
                    path.to_string_lossy().red().bold()
                )
            })?;
            println!(
                "encoded: {} ({}x{})",
                path.to_string_lossy().green().bold(),
                canvas.width(),
                canvas.height()
            );
            Ok::<_, anyhow::Error>(())
        })?;

    println!(
        "The file has been successfully encoded: {} bytes into {} image(s)",
        data.len().to_string().green().bold(),
        canvases.len().to_string().green().bold()
    );

    Ok(())
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// 负责读取全部输入图像、(可选) 自动裁剪、逐块解码并校验，
/// 最后把还原出的数据写入目标文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径及解码选项的 `DecodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取任一输入图像，或其颜色类型不受支持。
/// * 同步标记、头部或校验和校验失败。
/// * 无法确定输出路径，或目标文件已存在且未指定 `--force`。
/// * 无法写入目标文件。
pub fn handle_decode(args: DecodeArgs) -> Result<()> {
    let canvases = args
        .inputs
        .iter()
        .map(|path| {
            load_canvas(path).with_context(|| {
                format!(
                    "Unable to read image file: {}",
                    path.to_string_lossy().red().bold()
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let config = Config::from(&args);
    let decoded = decode_stream(&canvases, &config).with_context(|| {
        let hint = if args.autocrop {
            ""
        } else {
            " \nIf the image was padded or pasted into a larger one, try --autocrop."
        };
        format!(
            "Failed to decode {} image(s). \nThe image may not contain packed data or is corrupted.{hint}",
            canvases.len().to_string().red().bold()
        )
    })?;

    let output = match &args.output {
        Some(path) => path.clone(),
        None => default_output_path(&args.inputs[0], &decoded.name, args.flatten)?,
    };
    ensure_writable(&output, args.force)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!(
                    "Unable to create output directory: {}",
                    parent.to_string_lossy().red().bold()
                )
            })?;
        }
    }

    fs::write(&output, &decoded.payload).with_context(|| {
        format!(
            "Unable to write to target file: {}",
            output.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The file has been successfully decoded: {} bytes to {}",
        decoded.payload.len().to_string().green().bold(),
        output.to_string_lossy().green().bold()
    );

    Ok(())
}
