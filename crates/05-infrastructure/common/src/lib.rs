//! # Infrastructure Common
//!
//! 这个 crate 提供了 Lorn ADSP 配置加载链路共享的错误类型和工具函数。
//!
//! ## 核心内容
//!
//! - [`ConfigError`] - 配置加载过程中的统一错误类型
//! - [`ConfigResult`] - 配置结果类型别名
//! - [`random_hex`] - 随机十六进制标识符生成

pub mod errors;
pub mod identifiers;

pub use errors::*;
pub use identifiers::*;
