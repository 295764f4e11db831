//! # XOR 变换
//!
//! 按字节与循环密钥异或。变换是自反的：对同一数据以同一密钥再做一次即复原。

use std::borrow::Cow;

/// 载荷使用的密钥。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum XorKey {
    /// 不做变换。
    #[default]
    None,
    /// 用户提供的密钥字节。
    Bytes(Vec<u8>),
    /// 固定密钥 `[0, 1, ..., 255]`。
    Magic,
}

impl XorKey {
    /// 密钥的实际字节。[`XorKey::None`] 对应空密钥。
    pub fn bytes(&self) -> Cow<'_, [u8]> {
        match self {
            XorKey::None => Cow::Borrowed(&[][..]),
            XorKey::Bytes(key) => Cow::Borrowed(key.as_slice()),
            XorKey::Magic => Cow::Owned((0..=u8::MAX).collect()),
        }
    }

    pub fn is_none(&self) -> bool {
        self.bytes().is_empty()
    }

    pub fn apply_in_place(&self, data: &mut [u8]) {
        apply_in_place(data, &self.bytes());
    }
}

/// `result[i] = data[i] ^ key[i % key.len()]`。空密钥时原样返回。
pub fn apply(data: &[u8], key: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    apply_in_place(&mut out, key);
    out
}

pub fn apply_in_place(data: &mut [u8], key: &[u8]) {
    if key.is_empty() {
        return;
    }
    data.iter_mut()
        .zip(key.iter().cycle())
        .for_each(|(byte, k)| *byte ^= k);
}
