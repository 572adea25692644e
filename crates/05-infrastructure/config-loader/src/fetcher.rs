//! 对象内容获取

use config_abstractions::ObjectDownloader;
use infrastructure_common::{random_hex, ConfigError, ConfigResult, TEMP_FILE_ID_LEN};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// 对象获取器
///
/// 先把对象下载到随机命名的临时文件，再读入内存。临时文件在任何退出路径上都会被删除。
pub struct ObjectFetcher {
    downloader: Arc<dyn ObjectDownloader>,
    temp_dir: PathBuf,
}

impl std::fmt::Debug for ObjectFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectFetcher")
            .field("temp_dir", &self.temp_dir)
            .finish()
    }
}

impl ObjectFetcher {
    /// 创建新的对象获取器
    pub fn new(downloader: Arc<dyn ObjectDownloader>, temp_dir: impl Into<PathBuf>) -> Self {
        Self {
            downloader,
            temp_dir: temp_dir.into(),
        }
    }

    /// 获取临时目录
    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    /// 为对象生成临时文件路径：随机标识符加上对象的扩展名
    pub fn temp_path_for(&self, object_key: &str) -> PathBuf {
        let mut file_name = random_hex(TEMP_FILE_ID_LEN);
        if let Some(extension) = Path::new(object_key).extension() {
            file_name.push('.');
            file_name.push_str(&extension.to_string_lossy());
        }
        self.temp_dir.join(file_name)
    }

    /// 获取对象内容
    pub async fn fetch(&self, bucket: &str, object_key: &str) -> ConfigResult<Vec<u8>> {
        let local_path = self.temp_path_for(object_key);

        tokio::fs::File::create(&local_path)
            .await
            .map_err(|source| ConfigError::TempFileCreate {
                path: local_path.clone(),
                source,
            })?;
        let _guard = TempFileGuard::new(local_path.clone());

        self.downloader
            .download(bucket, object_key, &local_path)
            .await?;

        let content = tokio::fs::read(&local_path)
            .await
            .map_err(|source| ConfigError::FileRead {
                path: local_path.clone(),
                source,
            })?;

        debug!(
            "获取对象完成: s3://{}/{}, {} 字节",
            bucket,
            object_key,
            content.len()
        );
        Ok(content)
    }
}

/// 临时文件守卫，离开作用域时删除文件
#[derive(Debug)]
struct TempFileGuard {
    path: PathBuf,
}

impl TempFileGuard {
    fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!("已删除临时文件: {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("临时文件删除失败: {}, 原因: {}", self.path.display(), e),
        }
    }
}
