pub mod algorithms;
pub mod config;

/// Encoding format reported by all key material in this crate.
///
/// 本库中所有密钥材料报告的编码格式。
pub const RAW_FORMAT: &str = "RAW";

pub const DEFAULT_MAX_KEY_LEN: usize = 8192;
pub const DEFAULT_MAX_ALGORITHM_LEN: usize = 64;
