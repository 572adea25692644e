//! 配置值集合加载抽象接口

use crate::source::ConfigSource;
use async_trait::async_trait;
use infrastructure_common::ConfigResult;
use std::collections::HashMap;

/// 扁平的配置值集合（字符串到字符串）
pub type ValueSet = HashMap<String, String>;

/// 配置值集合加载器 trait
///
/// 根据数据源获取原始内容并解析为 [`ValueSet`]
#[async_trait]
pub trait ValueSetLoader: Send + Sync {
    /// 从数据源加载配置值集合
    async fn load(&self, source: &ConfigSource) -> ConfigResult<ValueSet>;
}
