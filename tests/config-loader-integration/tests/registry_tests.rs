//! 对象存储数据源与配置注册表的集成测试

use async_trait::async_trait;
use config_abstractions::{ConfigSource, ObjectDownloader, SourceDescriptor, ValuesRegistry};
use config_loader::{ConfigRegistry, LoaderSettings, SourceLoader};
use infrastructure_common::{ConfigError, ConfigResult};
use mockall::mock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

mock! {
    pub Downloader {}

    #[async_trait]
    impl ObjectDownloader for Downloader {
        async fn download(&self, bucket: &str, key: &str, destination: &Path) -> ConfigResult<u64>;
    }
}

/// 辅助函数：下载器把固定内容写入目标文件
fn serving(content: impl Into<String>) -> MockDownloader {
    let content = content.into();
    let mut downloader = MockDownloader::new();
    downloader
        .expect_download()
        .returning(move |_, _, destination| {
            std::fs::write(destination, &content).unwrap();
            Ok(content.len() as u64)
        });
    downloader
}

/// 辅助函数：创建使用模拟下载器的注册表
fn registry_with(downloader: MockDownloader, temp_dir: &TempDir) -> ConfigRegistry {
    let settings = LoaderSettings::default().with_temp_dir(temp_dir.path());
    let loader = SourceLoader::new(Arc::new(downloader), &settings).unwrap();
    ConfigRegistry::new(Arc::new(loader))
}

fn string_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[tokio::test]
async fn test_add_values_from_bucket() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut downloader = MockDownloader::new();
    downloader
        .expect_download()
        .withf(|bucket, key, _| bucket == "cfg-bucket" && key == "db.json")
        .times(1)
        .returning(|_, _, destination| {
            let content = r#"{"host":"localhost","port":"5432"}"#;
            std::fs::write(destination, content).unwrap();
            Ok(content.len() as u64)
        });
    let mut registry = registry_with(downloader, &temp_dir);

    assert!(registry.get("db").is_none());

    registry
        .add_values("db", &ConfigSource::object_storage("cfg-bucket", "db.json"))
        .await
        .unwrap();

    assert_eq!(
        registry.get("db"),
        Some(&string_map(&[("host", "localhost"), ("port", "5432")]))
    );
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_fetched_map_equals_uploaded_map() {
    let uploaded = string_map(&[
        ("endpoint", "https://bid.example.com/openrtb"),
        ("timeout_ms", "120"),
        ("note", "含有中文和 \"引号\" 的值"),
        ("empty", ""),
    ]);
    let content = serde_json::to_string(&uploaded).unwrap();

    let temp_dir = tempfile::tempdir().unwrap();
    let mut registry = registry_with(serving(content), &temp_dir);

    registry
        .add_values("bidding", &ConfigSource::object_storage("cfg-bucket", "bidding.json"))
        .await
        .unwrap();

    assert_eq!(registry.get("bidding"), Some(&uploaded));
}

#[tokio::test]
async fn test_second_add_replaces_first() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut downloader = MockDownloader::new();
    downloader
        .expect_download()
        .withf(|_, key, _| key == "v1.json")
        .returning(|_, _, destination| {
            std::fs::write(destination, r#"{"host":"a","user":"admin"}"#).unwrap();
            Ok(0)
        });
    downloader
        .expect_download()
        .withf(|_, key, _| key == "v2.json")
        .returning(|_, _, destination| {
            std::fs::write(destination, r#"{"host":"b"}"#).unwrap();
            Ok(0)
        });
    let mut registry = registry_with(downloader, &temp_dir);

    registry
        .add_values("db", &ConfigSource::object_storage("cfg-bucket", "v1.json"))
        .await
        .unwrap();
    registry
        .add_values("db", &ConfigSource::object_storage("cfg-bucket", "v2.json"))
        .await
        .unwrap();

    assert_eq!(registry.get("db"), Some(&string_map(&[("host", "b")])));
    assert!(registry.get_value("db", "user").is_none());
}

#[tokio::test]
async fn test_empty_descriptor_is_unknown_source_without_fetch() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut downloader = MockDownloader::new();
    downloader.expect_download().never();
    let mut registry = registry_with(downloader, &temp_dir);

    let result = registry
        .add_values_from_descriptor("db", &SourceDescriptor::new())
        .await;

    assert!(matches!(result, Err(ConfigError::UnknownDataSource)));
    assert!(registry.is_empty());
    assert!(registry.get("db").is_none());
}

#[tokio::test]
async fn test_descriptor_with_bucket_uses_s3_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut downloader = MockDownloader::new();
    downloader
        .expect_download()
        .withf(|bucket, key, _| bucket == "cfg-bucket" && key == "conf/cache.json")
        .times(1)
        .returning(|_, _, destination| {
            std::fs::write(destination, r#"{"ttl":"60"}"#).unwrap();
            Ok(12)
        });
    let mut registry = registry_with(downloader, &temp_dir);

    let descriptor = SourceDescriptor::new().with_s3("cfg-bucket", "conf/cache.json");
    registry
        .add_values_from_descriptor("cache", &descriptor)
        .await
        .unwrap();

    assert_eq!(registry.get_value("cache", "ttl"), Some("60"));
}

#[tokio::test]
async fn test_failed_download_removes_temp_file_and_keeps_registry() {
    let temp_dir = tempfile::tempdir().unwrap();
    let seen: Arc<Mutex<Option<PathBuf>>> = Arc::new(Mutex::new(None));
    let recorded = seen.clone();

    let mut downloader = MockDownloader::new();
    downloader
        .expect_download()
        .returning(move |bucket, key, destination| {
            std::fs::write(destination, b"{\"host\":").unwrap();
            *recorded.lock().unwrap() = Some(destination.to_path_buf());
            Err(ConfigError::download(bucket, key, "AccessDenied"))
        });
    let mut registry = registry_with(downloader, &temp_dir);
    registry.set_values("db", string_map(&[("host", "previous")]));

    let error = registry
        .add_values("db", &ConfigSource::object_storage("cfg-bucket", "db.json"))
        .await
        .unwrap_err();

    assert!(matches!(error, ConfigError::Download { .. }));
    assert!(error.to_string().contains("AccessDenied"));

    let temp_path = seen.lock().unwrap().clone().unwrap();
    assert_eq!(temp_path.parent(), Some(temp_dir.path()));
    assert_eq!(temp_path.extension().and_then(|e| e.to_str()), Some("json"));
    assert!(!temp_path.exists());

    assert_eq!(registry.get_value("db", "host"), Some("previous"));
}

#[tokio::test]
async fn test_malformed_object_reports_payload() {
    let temp_dir = tempfile::tempdir().unwrap();
    let payload = "host: localhost\nport: 5432";
    let mut registry = registry_with(serving(payload), &temp_dir);

    let error = registry
        .add_values("db", &ConfigSource::object_storage("cfg-bucket", "db.yaml"))
        .await
        .unwrap_err();

    assert!(matches!(error, ConfigError::Parse { .. }));
    assert!(error.to_string().contains(payload));
    assert!(registry.get("db").is_none());
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}
