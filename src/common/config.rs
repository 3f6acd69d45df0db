use crate::common::{DEFAULT_MAX_ALGORITHM_LEN, DEFAULT_MAX_KEY_LEN};

/// Limits applied when decoding key material from untrusted bytes.
///
/// 从不可信字节解码密钥材料时应用的限制。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeConfig {
    max_key_len: usize,
    max_algorithm_len: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        ConfigBuilder::new().build()
    }
}

impl DecodeConfig {
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    pub fn max_algorithm_len(&self) -> usize {
        self.max_algorithm_len
    }
}

pub struct ConfigBuilder {
    pub max_key_len: usize,
    pub max_algorithm_len: usize,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            max_key_len: DEFAULT_MAX_KEY_LEN,
            max_algorithm_len: DEFAULT_MAX_ALGORITHM_LEN,
        }
    }

    pub fn set_max_key_len(mut self, max_key_len: usize) -> Self {
        self.max_key_len = max_key_len;
        self
    }

    pub fn set_max_algorithm_len(mut self, max_algorithm_len: usize) -> Self {
        self.max_algorithm_len = max_algorithm_len;
        self
    }

    pub fn build(self) -> DecodeConfig {
        DecodeConfig {
            max_key_len: self.max_key_len,
            max_algorithm_len: self.max_algorithm_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = DecodeConfig::default();
        assert_eq!(config.max_key_len(), DEFAULT_MAX_KEY_LEN);
        assert_eq!(config.max_algorithm_len(), DEFAULT_MAX_ALGORITHM_LEN);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigBuilder::new()
            .set_max_key_len(32)
            .set_max_algorithm_len(8)
            .build();
        assert_eq!(config.max_key_len(), 32);
        assert_eq!(config.max_algorithm_len(), 8);
    }
}
