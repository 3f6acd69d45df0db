//! Compatibility shims kept for callers of older APIs.
//!
//! New code should construct [`crate::keys::SecretKeySpec`] directly.
//!
//! 为旧 API 调用者保留的兼容层。新代码应直接构造 [`crate::keys::SecretKeySpec`]。

pub mod sm4;

#[allow(deprecated)]
pub use sm4::Sm4KeySpec;
