use thiserror::Error;

#[derive(Error, Debug)]
pub enum BincodeError {
    #[error("Encode error: {0}")]
    Enc(#[source] Box<bincode::error::EncodeError>),
    #[error("Decode error: {0}")]
    Dec(#[source] Box<bincode::error::DecodeError>),
}

impl From<bincode::error::EncodeError> for BincodeError {
    fn from(err: bincode::error::EncodeError) -> Self {
        BincodeError::Enc(Box::from(err))
    }
}

impl From<bincode::error::DecodeError> for BincodeError {
    fn from(err: bincode::error::DecodeError) -> Self {
        BincodeError::Dec(Box::from(err))
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("密钥规范序列化或反序列化失败: {0}")]
    Bincode(#[from] BincodeError),

    #[error("偏移量/长度组合无效: offset={offset}, len={len}, 可用字节={available}")]
    InvalidRange {
        offset: usize,
        len: usize,
        available: usize,
    },

    #[error("密钥为空")]
    EmptyKey,

    #[error("缺少参数: {0}")]
    MissingArgument(&'static str),

    #[error("密钥算法不匹配: 需要 {expected}，实际为 {found}")]
    AlgorithmMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("{algorithm} 密钥长度无效: 需要 {expected} 字节，实际为 {found} 字节")]
    InvalidKeySize {
        algorithm: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("不支持的算法: {0}")]
    UnsupportedAlgorithm(String),

    #[error("不支持的密钥编码格式: {0}")]
    UnsupportedFormat(String),

    #[error("{field} 超出长度限制: 最大 {limit}，实际为 {found}")]
    LimitExceeded {
        field: &'static str,
        limit: usize,
        found: usize,
    },
}

impl From<bincode::error::EncodeError> for Error {
    fn from(err: bincode::error::EncodeError) -> Self {
        Error::from(BincodeError::Enc(Box::from(err)))
    }
}

impl From<bincode::error::DecodeError> for Error {
    fn from(err: bincode::error::DecodeError) -> Self {
        Error::from(BincodeError::Dec(Box::from(err)))
    }
}

// 定义一个统一的 Result 类型
pub type Result<T> = std::result::Result<T, Error>;
