//! 基于 AWS SDK 的对象下载器

use async_trait::async_trait;
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::Client as S3Client;
use config_abstractions::ObjectDownloader;
use infrastructure_common::{ConfigError, ConfigResult};
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tokio::sync::OnceCell;
use tracing::{debug, info};

/// S3 对象下载器
///
/// 首次下载时在固定区域建立会话（凭证从环境中解析），之后复用同一客户端
pub struct S3ObjectDownloader {
    region: String,
    client: OnceCell<S3Client>,
}

impl std::fmt::Debug for S3ObjectDownloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3ObjectDownloader")
            .field("region", &self.region)
            .field("connected", &self.client.initialized())
            .finish()
    }
}

impl S3ObjectDownloader {
    /// 创建指定区域的下载器
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            client: OnceCell::new(),
        }
    }

    /// 使用已有的 S3 客户端创建下载器
    pub fn with_client(client: S3Client) -> Self {
        let region = client
            .config()
            .region()
            .map(ToString::to_string)
            .unwrap_or_default();

        Self {
            region,
            client: OnceCell::new_with(Some(client)),
        }
    }

    /// 获取区域
    pub fn region(&self) -> &str {
        &self.region
    }

    /// 获取或建立 S3 会话
    async fn client(&self) -> ConfigResult<&S3Client> {
        self.client
            .get_or_try_init(|| async {
                debug!("建立 S3 会话: region={}", self.region);

                let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
                    .region(aws_config::Region::new(self.region.clone()))
                    .load()
                    .await;

                resolve_credentials(&self.region, sdk_config.credentials_provider().as_ref())
                    .await?;

                info!("S3 会话已建立: region={}", self.region);
                Ok(S3Client::new(&sdk_config))
            })
            .await
    }
}

/// 通过凭证链实际解析一次凭证，解析失败视为会话建立失败
async fn resolve_credentials(
    region: &str,
    provider: Option<&SharedCredentialsProvider>,
) -> ConfigResult<()> {
    let provider = provider.ok_or_else(|| ConfigError::Session {
        message: format!("区域 {} 没有可用的凭证提供者", region),
    })?;

    provider
        .provide_credentials()
        .await
        .map_err(|e| ConfigError::Session {
            message: format!("区域 {} 凭证解析失败: {}", region, DisplayErrorContext(&e)),
        })?;

    Ok(())
}

#[async_trait]
impl ObjectDownloader for S3ObjectDownloader {
    async fn download(&self, bucket: &str, key: &str, destination: &Path) -> ConfigResult<u64> {
        let client = self.client().await?;

        debug!("下载对象: s3://{}/{} -> {}", bucket, key, destination.display());

        let output = client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| ConfigError::download(bucket, key, DisplayErrorContext(e).to_string()))?;

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(destination)
            .await
            .map_err(|source| ConfigError::TempFileCreate {
                path: destination.to_path_buf(),
                source,
            })?;

        let mut body = output.body.into_async_read();
        let written = tokio::io::copy(&mut body, &mut file)
            .await
            .map_err(|e| ConfigError::download(bucket, key, e))?;
        file.flush()
            .await
            .map_err(|e| ConfigError::download(bucket, key, e))?;

        debug!("对象下载完成: s3://{}/{}, {} 字节", bucket, key, written);
        Ok(written)
    }
}
