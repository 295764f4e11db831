//! # pixel_pack 库
//!
//! 把任意字节流打包成 RGB 图像并还原。每个像素存放 3 个载荷字节，
//! 图像开头是一段同步标记和固定格式的头部 (版本、宽高、长度、校验和、名称)，
//! 因此即使图像被补边或贴进更大的画布，也能重新定位并完整恢复。
//!
//! ```
//! use pixel_pack::{decode, encode};
//!
//! let canvas = encode(b"hello", "hello.txt", None)?;
//! let decoded = decode(&canvas)?;
//! assert_eq!(decoded.payload, b"hello");
//! assert_eq!(decoded.name, "hello.txt");
//! # Ok::<(), pixel_pack::CodecError>(())
//! ```

// 声明库包含的所有模块。

pub mod autocrop;
pub mod bootstrap;
pub mod canvas;
pub mod checksum;
pub mod chunk;
pub mod cli;
pub mod codec;
pub mod config;
pub mod constants;
pub mod container;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod handler;
pub mod header;
pub mod packing;
pub mod pipeline;
pub mod xor;

pub use canvas::Canvas;
pub use codec::{Decode, Decoded, Encode, decode, decoder_for, encode, encoder_for};
pub use config::Config;
pub use error::CodecError;
pub use xor::XorKey;
