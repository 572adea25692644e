//! 加载器设置

use infrastructure_common::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// 默认对象存储区域
pub const DEFAULT_REGION: &str = "eu-west-3";

/// 默认临时目录
pub const DEFAULT_TEMP_DIR: &str = "/tmp";

/// 默认 HTTP 超时（秒）
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// 环境变量前缀
pub const ENV_PREFIX: &str = "ADSP_CONFIG";

/// 配置加载器设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderSettings {
    /// 对象存储区域
    pub region: String,
    /// 下载临时文件存放目录
    pub temp_dir: PathBuf,
    /// URL 数据源的请求超时（秒）
    pub http_timeout_secs: u64,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            temp_dir: PathBuf::from(DEFAULT_TEMP_DIR),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl LoaderSettings {
    /// 从默认前缀的环境变量加载设置
    pub fn from_env() -> ConfigResult<Self> {
        Self::load(None, ENV_PREFIX)
    }

    /// 从可选的设置文件和环境变量加载设置
    ///
    /// 环境变量覆盖文件中的值，未设置的字段使用默认值
    pub fn load(file: Option<&Path>, env_prefix: &str) -> ConfigResult<Self> {
        let mut builder = config::Config::builder();

        if let Some(file) = file {
            debug!("加载设置文件: {}", file.display());
            builder = builder.add_source(config::File::from(file).required(true));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix(env_prefix).try_parsing(true))
            .build()
            .and_then(|built| built.try_deserialize::<Self>())
            .map_err(|e| ConfigError::Settings {
                source: Box::new(e),
            })?;

        debug!(
            "加载器设置: region={}, temp_dir={}, http_timeout_secs={}",
            settings.region,
            settings.temp_dir.display(),
            settings.http_timeout_secs
        );
        Ok(settings)
    }

    /// 设置对象存储区域
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// 设置临时目录
    pub fn with_temp_dir(mut self, temp_dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = temp_dir.into();
        self
    }

    /// HTTP 请求超时
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
