//! Defines the capability interface shared by all key material.
//!
//! 定义所有密钥材料共享的能力接口。

use crate::common::RAW_FORMAT;

/// Key material consumable by a cipher engine: raw bytes plus the name of
/// the algorithm they are meant for.
///
/// 可被密码引擎使用的密钥材料：原始字节加上其所属算法的名称。
pub trait KeyMaterial {
    /// The algorithm name the key is tagged with.
    ///
    /// 密钥所标记的算法名称。
    fn algorithm(&self) -> &str;

    /// The name of the encoding returned by [`KeyMaterial::encoded`].
    ///
    /// [`KeyMaterial::encoded`] 返回的编码名称。
    fn format(&self) -> &str {
        RAW_FORMAT
    }

    /// The raw key bytes.
    ///
    /// 原始密钥字节。
    fn encoded(&self) -> &[u8];
}

impl<T: KeyMaterial + ?Sized> KeyMaterial for &T {
    fn algorithm(&self) -> &str {
        (**self).algorithm()
    }

    fn format(&self) -> &str {
        (**self).format()
    }

    fn encoded(&self) -> &[u8] {
        (**self).encoded()
    }
}
