//! 对象存储下载抽象接口

use async_trait::async_trait;
use infrastructure_common::ConfigResult;
use std::path::Path;

/// 对象下载器 trait
///
/// 将存储桶中的对象完整写入本地文件。目标文件由调用方预先创建，
/// 下载器负责覆盖写入并返回写入的字节数。
#[async_trait]
pub trait ObjectDownloader: Send + Sync {
    /// 下载对象到本地文件
    async fn download(&self, bucket: &str, key: &str, destination: &Path) -> ConfigResult<u64>;
}
