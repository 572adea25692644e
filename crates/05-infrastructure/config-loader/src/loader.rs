//! 按数据源类型分派的配置值加载器

use crate::fetcher::ObjectFetcher;
use crate::parser::parse_values;
use crate::s3::S3ObjectDownloader;
use crate::settings::LoaderSettings;
use async_trait::async_trait;
use config_abstractions::{ConfigSource, ObjectDownloader, ValueSet, ValueSetLoader};
use infrastructure_common::{ConfigError, ConfigResult};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// 数据源加载器
///
/// 对象存储走 [`ObjectFetcher`]，URL 走 HTTP GET，本地路径直接读取文件；
/// 获取到的内容统一交给 [`parse_values`] 解析。
#[derive(Debug)]
pub struct SourceLoader {
    fetcher: ObjectFetcher,
    http: reqwest::Client,
}

impl SourceLoader {
    /// 使用指定的对象下载器创建加载器
    pub fn new(
        downloader: Arc<dyn ObjectDownloader>,
        settings: &LoaderSettings,
    ) -> ConfigResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.http_timeout())
            .build()
            .map_err(|e| ConfigError::Settings {
                source: Box::new(e),
            })?;

        Ok(Self {
            fetcher: ObjectFetcher::new(downloader, settings.temp_dir.clone()),
            http,
        })
    }

    /// 根据设置创建使用 S3 下载器的加载器
    pub fn from_settings(settings: &LoaderSettings) -> ConfigResult<Self> {
        Self::new(Arc::new(S3ObjectDownloader::new(&settings.region)), settings)
    }

    /// 获取数据源的原始内容
    pub async fn fetch_bytes(&self, source: &ConfigSource) -> ConfigResult<Vec<u8>> {
        debug!("获取数据源内容: {}", source);

        match source {
            ConfigSource::ObjectStorage { bucket, path } => self.fetcher.fetch(bucket, path).await,
            ConfigSource::Url { url } => self.fetch_url(url).await,
            ConfigSource::LocalPath { path } => Self::read_local(path).await,
        }
    }

    async fn fetch_url(&self, url: &str) -> ConfigResult<Vec<u8>> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| ConfigError::http(url, e))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| ConfigError::http(url, e))?;

        Ok(body.to_vec())
    }

    async fn read_local(path: &Path) -> ConfigResult<Vec<u8>> {
        tokio::fs::read(path)
            .await
            .map_err(|source| ConfigError::FileRead {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[async_trait]
impl ValueSetLoader for SourceLoader {
    async fn load(&self, source: &ConfigSource) -> ConfigResult<ValueSet> {
        let content = self.fetch_bytes(source).await?;
        parse_values(&content)
    }
}
