use crate::common::config::DecodeConfig;
use crate::common::RAW_FORMAT;
use crate::error::{Error, Result};
use crate::keys::SecretKeySpec;
use bincode::{BorrowDecode, Encode};
use zeroize::Zeroizing;

/// Wire form of a [`SecretKeySpec`], borrowing from the encoded bytes.
///
/// Decoding borrows the fields straight out of the input slice, so nothing is
/// allocated until the lengths have been checked against [`DecodeConfig`].
///
/// [`SecretKeySpec`] 的传输形式，直接借用编码字节。
#[derive(Encode, BorrowDecode)]
struct KeySpecRecord<'a> {
    algorithm: &'a str,
    format: &'a str,
    key: &'a [u8],
}

impl KeySpecRecord<'_> {
    fn into_spec(self, config: &DecodeConfig) -> Result<SecretKeySpec> {
        build_spec(self.algorithm, self.format, self.key, config)
    }
}

fn build_spec(
    algorithm: &str,
    format: &str,
    key: &[u8],
    config: &DecodeConfig,
) -> Result<SecretKeySpec> {
    check_limit("algorithm", algorithm.len(), config.max_algorithm_len())?;
    check_limit("key", key.len(), config.max_key_len())?;
    if format != RAW_FORMAT {
        tracing::debug!(format, "rejected key spec encoding format");
        return Err(Error::UnsupportedFormat(format.to_string()));
    }
    SecretKeySpec::from_key_bytes(Zeroizing::new(key.to_vec()), algorithm)
}

fn check_limit(field: &'static str, found: usize, limit: usize) -> Result<()> {
    if found > limit {
        tracing::debug!(field, found, limit, "encoded key spec exceeds limit");
        return Err(Error::LimitExceeded {
            field,
            limit,
            found,
        });
    }
    Ok(())
}

/// Owned wire form used by the `serde` feature.
///
/// `serde` 特性使用的自有传输形式。
#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
pub(crate) struct EncodedKeySpec {
    algorithm: String,
    format: String,
    key: Vec<u8>,
}

#[cfg(feature = "serde")]
impl Drop for EncodedKeySpec {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.key.zeroize();
    }
}

#[cfg(feature = "serde")]
impl From<SecretKeySpec> for EncodedKeySpec {
    fn from(spec: SecretKeySpec) -> Self {
        Self {
            algorithm: spec.algorithm().to_string(),
            format: RAW_FORMAT.to_string(),
            key: spec.as_bytes().to_vec(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<EncodedKeySpec> for SecretKeySpec {
    type Error = Error;

    fn try_from(encoded: EncodedKeySpec) -> Result<Self> {
        build_spec(
            &encoded.algorithm,
            &encoded.format,
            &encoded.key,
            &DecodeConfig::default(),
        )
    }
}

impl SecretKeySpec {
    /// Encodes the key spec into a byte vector.
    ///
    /// The returned buffer contains the raw key bytes and should be treated as
    /// secret by the caller. Keys longer than
    /// [`DEFAULT_MAX_KEY_LEN`](crate::common::DEFAULT_MAX_KEY_LEN) encode fine
    /// but must be decoded with [`SecretKeySpec::decode_with_config`] and a
    /// raised `max_key_len`; [`SecretKeySpec::decode_from_slice`] refuses them.
    ///
    /// 将密钥规范编码为字节向量。返回的缓冲区包含原始密钥字节，调用者应将其视为机密。
    /// 超过 `DEFAULT_MAX_KEY_LEN` 的密钥需要使用提高了 `max_key_len` 的配置解码。
    pub fn encode_to_vec(&self) -> Result<Zeroizing<Vec<u8>>> {
        static CONFIG: bincode::config::Configuration = bincode::config::standard();
        let record = KeySpecRecord {
            algorithm: self.algorithm(),
            format: RAW_FORMAT,
            key: self.as_bytes(),
        };
        bincode::encode_to_vec(&record, CONFIG)
            .map(Zeroizing::new)
            .map_err(Error::from)
    }

    /// Decodes a key spec from a byte slice using the default limits.
    ///
    /// Returns the spec and the number of bytes consumed.
    ///
    /// 使用默认限制从字节切片解码密钥规范，返回密钥规范和已读取的字节数。
    pub fn decode_from_slice(data: &[u8]) -> Result<(Self, usize)> {
        Self::decode_with_config(data, &DecodeConfig::default())
    }

    /// Decodes a key spec from a byte slice, enforcing the limits in `config`.
    ///
    /// 从字节切片解码密钥规范，并执行 `config` 中的限制。
    pub fn decode_with_config(data: &[u8], config: &DecodeConfig) -> Result<(Self, usize)> {
        static CONFIG: bincode::config::Configuration = bincode::config::standard();
        let (record, read): (KeySpecRecord<'_>, usize) =
            bincode::borrow_decode_from_slice(data, CONFIG).map_err(|err| {
                tracing::debug!(error = %err, "failed to decode key spec");
                Error::from(err)
            })?;
        Ok((record.into_spec(config)?, read))
    }
}
