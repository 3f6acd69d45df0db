//! This module defines algorithm-tagged secret key material.
//!
//! 这个模块定义了带算法标记的密钥材料。
use crate::common::algorithms::SymmetricAlgorithm;
use crate::common::RAW_FORMAT;
use crate::error::{Error, Result};
use std::fmt;
use std::hash::{Hash, Hasher};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

pub(crate) mod encoded;
pub mod traits;

pub use traits::KeyMaterial;

/// Raw secret key bytes paired with the name of the algorithm they belong to.
///
/// The key bytes are copied out of the caller's buffer on construction and
/// wiped when the value is dropped. The value is immutable once built.
///
/// 原始密钥字节与其所属算法名称的组合。
///
/// 构造时从调用者的缓冲区复制密钥字节，并在值被释放时擦除。构造后不可变。
#[derive(Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "encoded::EncodedKeySpec", into = "encoded::EncodedKeySpec")
)]
pub struct SecretKeySpec {
    key: Zeroizing<Vec<u8>>,
    algorithm: String,
}

impl SecretKeySpec {
    /// Creates key material from the whole of `key`.
    ///
    /// 使用整个 `key` 创建密钥材料。
    pub fn new(key: &[u8], algorithm: &str) -> Result<Self> {
        Self::from_range(key, 0, key.len(), algorithm)
    }

    /// Creates key material from `key[offset..offset + len]`.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingArgument`] if `algorithm` is empty.
    /// * [`Error::EmptyKey`] if `key` is empty.
    /// * [`Error::InvalidRange`] if the range does not fit inside `key`.
    ///
    /// 使用 `key[offset..offset + len]` 创建密钥材料。
    pub fn from_range(key: &[u8], offset: usize, len: usize, algorithm: &str) -> Result<Self> {
        check_inputs(key, algorithm)?;
        let end = offset
            .checked_add(len)
            .filter(|&end| end <= key.len())
            .ok_or_else(|| invalid_range(offset, len, key.len()))?;
        tracing::trace!(algorithm, len, "created secret key spec");
        Ok(Self {
            key: Zeroizing::new(key[offset..end].to_vec()),
            algorithm: algorithm.to_string(),
        })
    }

    /// Creates key material from `key[offset..]`.
    ///
    /// An `offset` equal to `key.len()` yields empty key material; an
    /// `offset` past the end fails with [`Error::InvalidRange`].
    ///
    /// 使用 `key[offset..]` 创建密钥材料。
    pub fn from_offset(key: &[u8], offset: usize, algorithm: &str) -> Result<Self> {
        check_inputs(key, algorithm)?;
        let len = key
            .len()
            .checked_sub(offset)
            .ok_or_else(|| invalid_range(offset, 0, key.len()))?;
        Self::from_range(key, offset, len, algorithm)
    }

    /// Creates key material tagged with the canonical name of `algorithm`.
    ///
    /// The key size is not checked; see [`SecretKeySpec::check_key_size`].
    ///
    /// 创建以 `algorithm` 规范名称标记的密钥材料。
    pub fn for_algorithm(key: &[u8], algorithm: SymmetricAlgorithm) -> Result<Self> {
        Self::new(key, algorithm.name())
    }

    /// Wraps bytes that were already copied out of a caller buffer.
    /// Only the algorithm name is checked; `key` may be empty.
    pub(crate) fn from_key_bytes(key: Zeroizing<Vec<u8>>, algorithm: &str) -> Result<Self> {
        check_algorithm(algorithm)?;
        Ok(Self {
            key,
            algorithm: algorithm.to_string(),
        })
    }

    /// Get a reference to the raw bytes of the key
    ///
    /// 获取密钥原始字节的引用
    pub fn as_bytes(&self) -> &[u8] {
        &self.key
    }

    /// Consume the key and return the inner bytes
    ///
    /// 消耗密钥并返回内部字节
    pub fn into_bytes(self) -> Zeroizing<Vec<u8>> {
        self.key
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn format(&self) -> &'static str {
        RAW_FORMAT
    }

    pub fn len(&self) -> usize {
        self.key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }

    /// Returns the catalogued algorithm matching this key's algorithm name, if any.
    ///
    /// 返回与此密钥算法名称匹配的已知算法（如有）。
    pub fn symmetric_algorithm(&self) -> Option<SymmetricAlgorithm> {
        SymmetricAlgorithm::from_name(&self.algorithm)
    }

    /// Checks the key length against the nominal key size of a catalogued
    /// algorithm. Key material for unknown algorithms always passes.
    ///
    /// 根据已知算法的名义密钥长度检查密钥长度。未知算法的密钥材料总是通过。
    pub fn check_key_size(&self) -> Result<()> {
        match self.symmetric_algorithm() {
            Some(alg) if alg.key_size() != self.len() => Err(Error::InvalidKeySize {
                algorithm: alg.name(),
                expected: alg.key_size(),
                found: self.len(),
            }),
            _ => Ok(()),
        }
    }
}

fn check_algorithm(algorithm: &str) -> Result<()> {
    if algorithm.is_empty() {
        tracing::debug!("rejected secret key spec without an algorithm name");
        return Err(Error::MissingArgument("algorithm"));
    }
    Ok(())
}

fn check_inputs(key: &[u8], algorithm: &str) -> Result<()> {
    check_algorithm(algorithm)?;
    if key.is_empty() {
        tracing::debug!(algorithm, "rejected empty secret key");
        return Err(Error::EmptyKey);
    }
    Ok(())
}

fn invalid_range(offset: usize, len: usize, available: usize) -> Error {
    tracing::debug!(offset, len, available, "rejected key range");
    Error::InvalidRange {
        offset,
        len,
        available,
    }
}

impl PartialEq for SecretKeySpec {
    fn eq(&self, other: &Self) -> bool {
        self.algorithm.eq_ignore_ascii_case(&other.algorithm)
            && bool::from(self.key.as_slice().ct_eq(other.key.as_slice()))
    }
}

impl Eq for SecretKeySpec {}

impl Hash for SecretKeySpec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with the case-insensitive equality above.
        for b in self.algorithm.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
        state.write_usize(self.algorithm.len());
        self.key.as_slice().hash(state);
    }
}

impl fmt::Debug for SecretKeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKeySpec")
            .field("algorithm", &self.algorithm)
            .field("len", &self.key.len())
            .finish_non_exhaustive()
    }
}

impl AsRef<[u8]> for SecretKeySpec {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl KeyMaterial for SecretKeySpec {
    fn algorithm(&self) -> &str {
        SecretKeySpec::algorithm(self)
    }

    fn encoded(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(spec: &SecretKeySpec) -> u64 {
        let mut hasher = DefaultHasher::new();
        spec.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_new_copies_whole_buffer() {
        let bytes = [7u8; 16];
        let spec = SecretKeySpec::new(&bytes, "SM4").unwrap();

        assert_eq!(spec.as_bytes(), &bytes);
        assert_eq!(spec.algorithm(), "SM4");
        assert_eq!(spec.format(), "RAW");
        assert_eq!(spec.len(), 16);
    }

    #[test]
    fn test_from_range_copies_sub_slice() {
        let spec = SecretKeySpec::from_range(&[1, 2, 3, 4], 1, 2, "SM4").unwrap();
        assert_eq!(spec.as_bytes(), &[2, 3]);
    }

    #[test]
    fn test_from_range_rejects_overflowing_range() {
        let err = SecretKeySpec::from_range(&[1, 2, 3], 2, usize::MAX, "SM4").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidRange {
                offset: 2,
                len: usize::MAX,
                available: 3
            }
        ));
    }

    #[test]
    fn test_from_offset_at_end_is_empty() {
        let spec = SecretKeySpec::from_offset(&[0xAA, 0xBB], 2, "SM4").unwrap();
        assert!(spec.is_empty());
        assert_eq!(spec.algorithm(), "SM4");
    }

    #[test]
    fn test_from_offset_past_end_fails() {
        let err = SecretKeySpec::from_offset(&[0xAA, 0xBB], 3, "SM4").unwrap_err();
        assert!(matches!(err, Error::InvalidRange { offset: 3, .. }));
    }

    #[test]
    fn test_missing_argument_checked_before_empty_key() {
        let err = SecretKeySpec::new(&[], "").unwrap_err();
        assert!(matches!(err, Error::MissingArgument("algorithm")));

        let err = SecretKeySpec::new(&[], "SM4").unwrap_err();
        assert!(matches!(err, Error::EmptyKey));
    }

    #[test]
    fn test_from_key_bytes_accepts_empty_content() {
        let spec = SecretKeySpec::from_key_bytes(Zeroizing::new(Vec::new()), "SM4").unwrap();
        assert!(spec.is_empty());
        assert_eq!(spec, SecretKeySpec::from_offset(&[0xAA, 0xBB], 2, "SM4").unwrap());

        let err = SecretKeySpec::from_key_bytes(Zeroizing::new(vec![1]), "").unwrap_err();
        assert!(matches!(err, Error::MissingArgument("algorithm")));
    }

    #[test]
    fn test_copy_is_independent_of_source() {
        let mut bytes = vec![1u8, 2, 3];
        let spec = SecretKeySpec::new(&bytes, "SM4").unwrap();
        bytes[0] = 0xFF;
        assert_eq!(spec.as_bytes(), &[1, 2, 3]);
    }

    #[test]
    fn test_equality_ignores_algorithm_case() {
        let a = SecretKeySpec::new(&[1, 2, 3], "SM4").unwrap();
        let b = SecretKeySpec::new(&[1, 2, 3], "sm4").unwrap();
        let c = SecretKeySpec::new(&[1, 2, 4], "SM4").unwrap();
        let d = SecretKeySpec::new(&[1, 2, 3], "AES").unwrap();

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_debug_hides_key_bytes() {
        let spec = SecretKeySpec::new(&[0xDE, 0xAD, 0xBE, 0xEF], "SM4").unwrap();
        let rendered = format!("{spec:?}");

        assert!(rendered.contains("SM4"));
        assert!(rendered.contains("len: 4"));
        assert!(!rendered.contains("222"));
        assert!(!rendered.contains("173"));
    }

    #[test]
    fn test_check_key_size() {
        let ok = SecretKeySpec::for_algorithm(&[0u8; 16], SymmetricAlgorithm::Sm4).unwrap();
        assert_eq!(ok.symmetric_algorithm(), Some(SymmetricAlgorithm::Sm4));
        assert!(ok.check_key_size().is_ok());

        let short = SecretKeySpec::new(&[0u8; 8], "sm4").unwrap();
        assert!(matches!(
            short.check_key_size(),
            Err(Error::InvalidKeySize {
                expected: 16,
                found: 8,
                ..
            })
        ));

        let unknown = SecretKeySpec::new(&[0u8; 3], "HmacSM3").unwrap();
        assert_eq!(unknown.symmetric_algorithm(), None);
        assert!(unknown.check_key_size().is_ok());
    }

    #[test]
    fn test_into_bytes() {
        let spec = SecretKeySpec::new(&[9, 8, 7], "SM4").unwrap();
        let bytes = spec.into_bytes();
        assert_eq!(bytes.as_slice(), &[9, 8, 7]);
    }
}
