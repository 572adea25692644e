//! # Configuration Loader
//!
//! 配置值加载的具体实现：从对象存储、URL 或本地文件获取 JSON 编码的
//! 字符串映射，并存入命名空间配置注册表。
//!
//! ## 主要组件
//!
//! - [`ConfigRegistry`] - 命名空间配置注册表
//! - [`SourceLoader`] - 按数据源类型分派的配置值加载器
//! - [`ObjectFetcher`] - 经由临时文件获取对象内容
//! - [`S3ObjectDownloader`] - 基于 AWS SDK 的对象下载器
//! - [`parse_values`] - 配置值解析
//! - [`LoaderSettings`] - 加载器设置

pub mod fetcher;
pub mod loader;
pub mod parser;
pub mod registry;
pub mod s3;
pub mod settings;

pub use fetcher::*;
pub use loader::*;
pub use parser::*;
pub use registry::*;
pub use s3::*;
pub use settings::*;
