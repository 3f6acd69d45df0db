#![allow(deprecated)]

use crate::common::algorithms::SM4;
use crate::error::{Error, Result};
use crate::keys::{KeyMaterial, SecretKeySpec};
use std::ops::Deref;

/// SM4 key material.
///
/// A thin wrapper that always tags the key bytes with `"SM4"`. All range
/// checks and copying are done by [`SecretKeySpec`]; errors are passed
/// through unchanged.
///
/// SM4 密钥材料。一个总是以 `"SM4"` 标记密钥字节的薄包装器。
#[deprecated(note = "use `SecretKeySpec::new(key, SM4)` instead")]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sm4KeySpec(SecretKeySpec);

impl Sm4KeySpec {
    /// Uses the whole of `key` as SM4 key material.
    ///
    /// 使用整个 `key` 作为 SM4 密钥材料。
    pub fn new(key: &[u8]) -> Result<Self> {
        Self::with_range(key, 0, key.len())
    }

    /// Uses `key[offset..]` as SM4 key material.
    ///
    /// 使用 `key[offset..]` 作为 SM4 密钥材料。
    pub fn with_offset(key: &[u8], offset: usize) -> Result<Self> {
        SecretKeySpec::from_offset(key, offset, SM4).map(Self)
    }

    /// Uses `key[offset..offset + len]` as SM4 key material.
    ///
    /// 使用 `key[offset..offset + len]` 作为 SM4 密钥材料。
    pub fn with_range(key: &[u8], offset: usize, len: usize) -> Result<Self> {
        SecretKeySpec::from_range(key, offset, len, SM4).map(Self)
    }

    pub fn as_spec(&self) -> &SecretKeySpec {
        &self.0
    }

    pub fn into_inner(self) -> SecretKeySpec {
        self.0
    }
}

impl Deref for Sm4KeySpec {
    type Target = SecretKeySpec;

    fn deref(&self) -> &SecretKeySpec {
        &self.0
    }
}

impl AsRef<[u8]> for Sm4KeySpec {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl KeyMaterial for Sm4KeySpec {
    fn algorithm(&self) -> &str {
        SM4
    }

    fn encoded(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<Sm4KeySpec> for SecretKeySpec {
    fn from(spec: Sm4KeySpec) -> Self {
        spec.0
    }
}

impl TryFrom<SecretKeySpec> for Sm4KeySpec {
    type Error = Error;

    fn try_from(spec: SecretKeySpec) -> Result<Self> {
        if !spec.algorithm().eq_ignore_ascii_case(SM4) {
            return Err(Error::AlgorithmMismatch {
                expected: SM4,
                found: spec.algorithm().to_string(),
            });
        }
        // Re-tag so the stored name is exactly "SM4".
        SecretKeySpec::from_key_bytes(spec.into_bytes(), SM4).map(Self)
    }
}
