use crate::error::{Error, Result};
use bincode::{Decode, Encode};
use std::fmt;
use std::str::FromStr;

/// Canonical name of the SM4 block cipher.
///
/// SM4 分组密码的规范名称。
pub const SM4: &str = "SM4";

/// 对称加密算法枚举
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Decode, Encode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymmetricAlgorithm {
    Sm4,
}

impl SymmetricAlgorithm {
    /// Returns the canonical algorithm name used to tag key material.
    ///
    /// 返回用于标记密钥材料的规范算法名称。
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sm4 => SM4,
        }
    }

    /// Nominal key size in bytes.
    ///
    /// 名义密钥长度（字节）。
    pub const fn key_size(&self) -> usize {
        match self {
            Self::Sm4 => 16,
        }
    }

    /// Block size in bytes.
    ///
    /// 分组长度（字节）。
    pub const fn block_size(&self) -> usize {
        match self {
            Self::Sm4 => 16,
        }
    }

    /// Looks up an algorithm by name, ignoring ASCII case.
    ///
    /// 按名称查找算法（忽略 ASCII 大小写）。
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Sm4]
            .into_iter()
            .find(|alg| alg.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for SymmetricAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SymmetricAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::UnsupportedAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sm4_sizes() {
        assert_eq!(SymmetricAlgorithm::Sm4.name(), "SM4");
        assert_eq!(SymmetricAlgorithm::Sm4.key_size(), 16);
        assert_eq!(SymmetricAlgorithm::Sm4.block_size(), 16);
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("sm4".parse::<SymmetricAlgorithm>().unwrap(), SymmetricAlgorithm::Sm4);
        assert_eq!("Sm4".parse::<SymmetricAlgorithm>().unwrap(), SymmetricAlgorithm::Sm4);
        assert_eq!(SymmetricAlgorithm::Sm4.to_string(), SM4);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "AES".parse::<SymmetricAlgorithm>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedAlgorithm(name) if name == "AES"));
    }
}
