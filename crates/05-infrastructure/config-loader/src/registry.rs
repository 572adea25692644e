//! 命名空间配置注册表实现

use crate::loader::SourceLoader;
use crate::settings::LoaderSettings;
use async_trait::async_trait;
use config_abstractions::{ConfigSource, ValueSet, ValueSetLoader, ValuesRegistry};
use infrastructure_common::ConfigResult;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info};

/// 配置注册表
///
/// 命名空间键到扁平配置值集合的映射。内部映射在首次写入时才真正分配，
/// 读取不存在的键返回 `None`。写操作需要 `&mut self`，并发使用由调用方负责串行化。
pub struct ConfigRegistry {
    /// 配置值集合加载器
    loader: Arc<dyn ValueSetLoader>,
    /// 已加载的配置值
    values: HashMap<String, ValueSet>,
}

impl std::fmt::Debug for ConfigRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}

impl ConfigRegistry {
    /// 使用指定加载器创建空注册表
    pub fn new(loader: Arc<dyn ValueSetLoader>) -> Self {
        Self {
            loader,
            values: HashMap::new(),
        }
    }

    /// 根据设置创建使用默认数据源加载器的注册表
    pub fn from_settings(settings: &LoaderSettings) -> ConfigResult<Self> {
        Ok(Self::new(Arc::new(SourceLoader::from_settings(settings)?)))
    }

    /// 已注册的键数量
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 遍历所有键和值集合
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValueSet)> {
        self.values.iter().map(|(key, values)| (key.as_str(), values))
    }
}

#[async_trait]
impl ValuesRegistry for ConfigRegistry {
    async fn add_values(&mut self, key: &str, source: &ConfigSource) -> ConfigResult<()> {
        debug!("加载配置值: key={}, source={}", key, source);

        let values = self.loader.load(source).await.map_err(|e| {
            error!("配置值加载失败: key={}, source={}, 原因: {}", key, source, e);
            e
        })?;

        info!(
            "配置值已加载: key={}, source={}, 共 {} 项",
            key,
            source.kind(),
            values.len()
        );
        self.set_values(key, values);
        Ok(())
    }

    fn get(&self, key: &str) -> Option<&ValueSet> {
        self.values.get(key)
    }

    fn set_values(&mut self, key: &str, values: ValueSet) {
        if self.values.insert(key.to_string(), values).is_some() {
            debug!("替换已有配置值: key={}", key);
        }
    }

    fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.values.keys().cloned().collect();
        keys.sort();
        keys
    }
}
