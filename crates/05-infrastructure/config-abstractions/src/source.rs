//! 配置数据源定义

use infrastructure_common::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// 配置数据源
///
/// 每种数据源只携带自身需要的字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConfigSource {
    /// 对象存储（S3）中的对象
    ObjectStorage {
        /// 存储桶名称
        bucket: String,
        /// 对象路径
        path: String,
    },
    /// 直接下载地址
    Url {
        /// 下载地址
        url: String,
    },
    /// 本地文件
    LocalPath {
        /// 文件路径
        path: PathBuf,
    },
}

impl ConfigSource {
    /// 创建对象存储数据源
    pub fn object_storage(bucket: impl Into<String>, path: impl Into<String>) -> Self {
        Self::ObjectStorage {
            bucket: bucket.into(),
            path: path.into(),
        }
    }

    /// 创建 URL 数据源
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url { url: url.into() }
    }

    /// 创建本地文件数据源
    pub fn local_path(path: impl Into<PathBuf>) -> Self {
        Self::LocalPath { path: path.into() }
    }

    /// 数据源类型名称
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ObjectStorage { .. } => "object_storage",
            Self::Url { .. } => "url",
            Self::LocalPath { .. } => "local_path",
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObjectStorage { bucket, path } => write!(f, "s3://{}/{}", bucket, path),
            Self::Url { url } => f.write_str(url),
            Self::LocalPath { path } => write!(f, "file://{}", path.display()),
        }
    }
}

/// 扁平数据源描述
///
/// 配置文件中的数据源写法，所有字段均可选。通过 [`TryFrom`] 转换为
/// [`ConfigSource`]，优先级依次为存储桶、URL、本地路径；空字符串视为未设置。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceDescriptor {
    /// 直接下载地址
    pub url: Option<String>,
    /// S3 存储桶
    pub s3_bucket: Option<String>,
    /// S3 对象路径
    pub s3_path: Option<String>,
    /// 本地路径，未设置 `s3_path` 时也作为对象路径使用
    pub path: Option<String>,
}

impl SourceDescriptor {
    /// 创建空的数据源描述
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置 S3 存储桶和对象路径
    pub fn with_s3(mut self, bucket: impl Into<String>, path: impl Into<String>) -> Self {
        self.s3_bucket = Some(bucket.into());
        self.s3_path = Some(path.into());
        self
    }

    /// 设置下载地址
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// 设置本地路径
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

impl TryFrom<&SourceDescriptor> for ConfigSource {
    type Error = ConfigError;

    fn try_from(descriptor: &SourceDescriptor) -> Result<Self, Self::Error> {
        if let Some(bucket) = non_empty(descriptor.s3_bucket.as_ref()) {
            let path = non_empty(descriptor.s3_path.as_ref())
                .or_else(|| non_empty(descriptor.path.as_ref()))
                .ok_or_else(|| ConfigError::IncompleteSource {
                    message: format!("存储桶 {} 缺少对象路径", bucket),
                })?;
            return Ok(Self::object_storage(bucket, path));
        }

        if let Some(url) = non_empty(descriptor.url.as_ref()) {
            return Ok(Self::url(url));
        }

        if let Some(path) = non_empty(descriptor.path.as_ref()) {
            return Ok(Self::local_path(path));
        }

        Err(ConfigError::UnknownDataSource)
    }
}

impl TryFrom<SourceDescriptor> for ConfigSource {
    type Error = ConfigError;

    fn try_from(descriptor: SourceDescriptor) -> Result<Self, Self::Error> {
        Self::try_from(&descriptor)
    }
}
