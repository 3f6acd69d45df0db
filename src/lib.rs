//! `seal-keyspec` provides algorithm-tagged secret key material: raw key
//! bytes paired with the name of the algorithm they belong to, ready to be
//! handed to a cipher engine. It performs no cryptographic computation.
//!
//! The SM4-specific [`legacy::Sm4KeySpec`] is kept only for compatibility;
//! new code should use [`keys::SecretKeySpec`] with [`common::algorithms::SM4`].
//!
//! `seal-keyspec` 提供带算法标记的密钥材料：原始密钥字节与其所属算法的名称，
//! 可直接交给密码引擎使用。本库不执行任何密码学运算。

pub mod common;
pub mod error;
pub mod keys;
pub mod legacy;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::common::algorithms::{SymmetricAlgorithm, SM4};
    pub use crate::common::config::{ConfigBuilder, DecodeConfig};
    pub use crate::error::{Error, Result};
    pub use crate::keys::{KeyMaterial, SecretKeySpec};
}
