//! 配置注册表抽象接口

use crate::loader::ValueSet;
use crate::source::{ConfigSource, SourceDescriptor};
use async_trait::async_trait;
use infrastructure_common::ConfigResult;

/// 命名空间配置注册表 trait
///
/// 每个命名空间键对应一个扁平的配置值集合。写入总是整体替换，不做合并；
/// 加载失败时注册表保持原状。
#[async_trait]
pub trait ValuesRegistry: Send + Sync {
    /// 从数据源加载配置值并存入指定键
    async fn add_values(&mut self, key: &str, source: &ConfigSource) -> ConfigResult<()>;

    /// 从扁平数据源描述加载配置值
    ///
    /// 描述无法转换为有效数据源时立即失败，不会发起任何下载
    async fn add_values_from_descriptor(
        &mut self,
        key: &str,
        descriptor: &SourceDescriptor,
    ) -> ConfigResult<()> {
        let source = ConfigSource::try_from(descriptor)?;
        self.add_values(key, &source).await
    }

    /// 获取指定键的配置值集合
    fn get(&self, key: &str) -> Option<&ValueSet>;

    /// 直接设置指定键的配置值集合
    fn set_values(&mut self, key: &str, values: ValueSet);

    /// 检查键是否存在
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// 获取单个配置值
    fn get_value(&self, key: &str, name: &str) -> Option<&str> {
        self.get(key)
            .and_then(|values| values.get(name))
            .map(String::as_str)
    }

    /// 获取所有已注册的键（已排序）
    fn keys(&self) -> Vec<String>;
}
