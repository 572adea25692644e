//! 错误类型定义

use std::path::PathBuf;
use thiserror::Error;

/// 配置加载错误类型
///
/// 分为三类：数据源描述错误、传输错误（会话、下载、本地文件读写）和解析错误。
/// 所有错误都直接返回给调用方，不做重试。
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("未知的数据源")]
    UnknownDataSource,

    #[error("数据源描述不完整: {message}")]
    IncompleteSource { message: String },

    #[error("存储会话建立失败: {message}")]
    Session { message: String },

    #[error("临时文件创建失败: {}, 原因: {source}", .path.display())]
    TempFileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("对象下载失败: bucket={bucket}, key={key}, 原因: {source}")]
    Download {
        bucket: String,
        key: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("HTTP 下载失败: {url}, 原因: {source}")]
    Http {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("配置文件读取失败: {}, 原因: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// 解析失败时同时保留底层错误和原始内容，便于排查
    #[error("配置内容解析失败: {source}, 原始内容: {content}")]
    Parse {
        source: serde_json::Error,
        content: String,
    },

    #[error("加载器设置无效: {source}")]
    Settings {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ConfigError {
    /// 创建下载错误
    pub fn download(
        bucket: impl Into<String>,
        key: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Download {
            bucket: bucket.into(),
            key: key.into(),
            source: source.into(),
        }
    }

    /// 创建 HTTP 下载错误
    pub fn http(
        url: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Http {
            url: url.into(),
            source: source.into(),
        }
    }

    /// 是否为传输类错误
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Session { .. }
                | Self::TempFileCreate { .. }
                | Self::Download { .. }
                | Self::Http { .. }
                | Self::FileRead { .. }
        )
    }
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
