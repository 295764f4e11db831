use image::{Rgb, RgbImage, imageops};
use pixel_pack::{
    cli::{DecodeArgs, EncodeArgs},
    constants::DEFAULT_SPLIT_SIZE,
    container::ContainerFormat,
    handler::{handle_decode, handle_encode},
};
use rand::RngCore;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// 一个辅助函数，用于创建一个带有随机内容的测试文件
fn create_test_file(path: &Path, len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    rand::rng().fill_bytes(&mut data);
    fs::write(path, &data).expect("Failed to create test file.");
    data
}

fn encode_args(input: &Path, output: Option<PathBuf>) -> EncodeArgs {
    EncodeArgs {
        input: input.to_path_buf(),
        output,
        width: None,
        split_size: DEFAULT_SPLIT_SIZE,
        key: None,
        magic: false,
        format: ContainerFormat::Png,
        name: None,
        keep_path: false,
        force: false,
    }
}

fn decode_args(inputs: Vec<PathBuf>, output: Option<PathBuf>) -> DecodeArgs {
    DecodeArgs {
        inputs,
        output,
        autocrop: false,
        key: None,
        magic: false,
        flatten: false,
        force: false,
    }
}

/// 验证从编码到解码的完整流程
#[test]
fn test_handle_encode_and_decode_integration() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let source_path = dir.path().join("source.bin");
    let image_path = dir.path().join("encoded.png");
    let recovered_path = dir.path().join("recovered.bin");
    let original = create_test_file(&source_path, 10_000);

    // 2. 测试 handle_encode
    handle_encode(EncodeArgs {
        width: Some(256),
        ..encode_args(&source_path, Some(image_path.clone()))
    })?;
    assert!(image_path.exists(), "Encoded image should be created.");
    let (width, _) = image::image_dimensions(&image_path)?;
    assert_eq!(width, 256);

    // 3. 测试 handle_decode
    handle_decode(decode_args(
        vec![image_path.clone()],
        Some(recovered_path.clone()),
    ))?;

    // 4. 验证结果
    assert_eq!(
        fs::read(&recovered_path)?,
        original,
        "Recovered file must match the original."
    );

    Ok(())
}

/// 验证当用户不提供输出路径时，是否能正确生成默认路径并完成操作
#[test]
fn test_handle_encode_and_decode_with_defaults() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let source_path = dir.path().join("notes.txt");
    let original = create_test_file(&source_path, 777);

    // 2. 测试 handle_encode，不提供输出路径
    handle_encode(encode_args(&source_path, None))?;
    let expected_image_path = dir.path().join("notes.txt.png");
    assert!(
        expected_image_path.exists(),
        "Default encoded image should be created at: {:?}",
        expected_image_path
    );

    // 3. 默认输出路径正是原文件，未指定 --force 时必须拒绝覆盖
    let result = handle_decode(decode_args(vec![expected_image_path.clone()], None));
    assert!(result.is_err(), "Decoding over the original should fail.");
    if let Err(e) = result {
        assert!(e.to_string().contains("Output file already exists"));
    }

    // 4. 删除原文件后，按图像中记录的名称恢复
    fs::remove_file(&source_path)?;
    handle_decode(decode_args(vec![expected_image_path], None))?;
    assert_eq!(
        fs::read(&source_path)?,
        original,
        "Recovered file from default path must match the original."
    );

    Ok(())
}

/// 验证覆盖保护机制以及 `--force` 标志是否按预期工作
#[test]
fn test_overwrite_protection_and_force_flag() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let source_path = dir.path().join("data.bin");
    let dest_path = dir.path().join("dest.png");
    create_test_file(&source_path, 100);

    // 2. 场景一：测试覆盖保护
    fs::write(&dest_path, "this is a dummy file to be overwritten")?;

    let result = handle_encode(encode_args(&source_path, Some(dest_path.clone())));
    assert!(
        result.is_err(),
        "Execution should fail without --force when file exists."
    );
    if let Err(e) = result {
        assert!(e.to_string().contains("Output file already exists"));
    }

    // 3. 场景二：测试强制覆盖
    let result = handle_encode(EncodeArgs {
        force: true,
        ..encode_args(&source_path, Some(dest_path.clone()))
    });
    assert!(
        result.is_ok(),
        "Execution should succeed with --force when file exists."
    );

    let content = fs::read(&dest_path)?;
    assert_ne!(content, b"this is a dummy file to be overwritten");

    Ok(())
}

/// 验证分块输出的命名以及多图按序解码
#[test]
fn test_chunked_encode_and_decode() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let source_path = dir.path().join("big.bin");
    let base_path = dir.path().join("big.png");
    let recovered_path = dir.path().join("big.out");
    let original = create_test_file(&source_path, 2_500);

    handle_encode(EncodeArgs {
        split_size: 1_000,
        magic: true,
        ..encode_args(&source_path, Some(base_path.clone()))
    })?;

    let chunks: Vec<PathBuf> = ["big.000.png", "big.001.png", "big.002.png"]
        .iter()
        .map(|name| dir.path().join(name))
        .collect();
    for chunk in &chunks {
        assert!(chunk.exists(), "Chunk should be created at: {:?}", chunk);
    }
    assert!(!base_path.exists());
    assert!(!dir.path().join("big.003.png").exists());

    handle_decode(DecodeArgs {
        magic: true,
        ..decode_args(chunks, Some(recovered_path.clone()))
    })?;
    assert_eq!(fs::read(&recovered_path)?, original);

    Ok(())
}

/// 验证 XOR 密钥：校验和基于存储的字节，错误的密钥不会导致校验失败，只会得到不同的数据
#[test]
fn test_xor_key_round_trip() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let source_path = dir.path().join("secret.txt");
    let image_path = dir.path().join("secret.bmp");
    let right_path = dir.path().join("right.txt");
    let wrong_path = dir.path().join("wrong.txt");
    fs::write(&source_path, "attack at dawn")?;

    handle_encode(EncodeArgs {
        key: Some("k3y".to_string()),
        format: ContainerFormat::Bmp,
        ..encode_args(&source_path, Some(image_path.clone()))
    })?;

    handle_decode(DecodeArgs {
        key: Some("k3y".to_string()),
        ..decode_args(vec![image_path.clone()], Some(right_path.clone()))
    })?;
    assert_eq!(fs::read_to_string(&right_path)?, "attack at dawn");

    handle_decode(decode_args(vec![image_path], Some(wrong_path.clone())))?;
    assert_ne!(fs::read(&wrong_path)?, b"attack at dawn");

    Ok(())
}

/// 验证被补边的图像：直接解码失败，开启 --autocrop 后成功
#[test]
fn test_decode_padded_image_with_autocrop() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let source_path = dir.path().join("payload.bin");
    let image_path = dir.path().join("payload.png");
    let padded_path = dir.path().join("padded.png");
    let recovered_path = dir.path().join("recovered.bin");
    let original = create_test_file(&source_path, 5_000);

    handle_encode(EncodeArgs {
        width: Some(128),
        ..encode_args(&source_path, Some(image_path.clone()))
    })?;

    let encoded = image::open(&image_path)?.to_rgb8();
    let mut padded = RgbImage::from_pixel(
        encoded.width() + 89,
        encoded.height() + 123,
        Rgb([12, 34, 56]),
    );
    imageops::overlay(&mut padded, &encoded, 44, 61);
    padded.save(&padded_path)?;

    let result = handle_decode(decode_args(
        vec![padded_path.clone()],
        Some(recovered_path.clone()),
    ));
    assert!(result.is_err(), "Decoding a padded image should fail.");
    if let Err(e) = result {
        assert!(e.to_string().contains("Failed to decode"));
        assert!(
            format!("{e:#}").contains("invalid bootstrap"),
            "unexpected error: {e:#}"
        );
    }
    assert!(!recovered_path.exists());

    handle_decode(DecodeArgs {
        autocrop: true,
        ..decode_args(vec![padded_path], Some(recovered_path.clone()))
    })?;
    assert_eq!(fs::read(&recovered_path)?, original);

    Ok(())
}

/// 验证非图像输入的错误处理
#[test]
fn test_handle_decode_not_an_image() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let fake_path = dir.path().join("fake.png");
    fs::write(&fake_path, "definitely not a png")?;

    let result = handle_decode(decode_args(vec![fake_path], None));

    assert!(result.is_err());
    if let Err(e) = result {
        assert!(e.to_string().contains("Unable to read image file"));
    }

    Ok(())
}
