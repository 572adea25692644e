//! # Configuration Abstractions
//!
//! 配置加载抽象层，定义配置数据源、对象下载、值集合加载和配置注册表的核心接口。
//!
//! ## 核心接口
//!
//! - [`ConfigSource`] - 配置数据源（对象存储、URL、本地路径）
//! - [`SourceDescriptor`] - 配置文件中使用的扁平数据源描述
//! - [`ObjectDownloader`] - 对象存储下载接口
//! - [`ValueSetLoader`] - 配置值集合加载接口
//! - [`ValuesRegistry`] - 命名空间配置注册表接口

pub mod loader;
pub mod registry;
pub mod source;
pub mod storage;

pub use loader::*;
pub use registry::*;
pub use source::*;
pub use storage::*;
