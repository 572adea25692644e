//! 配置值解析

use config_abstractions::ValueSet;
use infrastructure_common::{ConfigError, ConfigResult};
use tracing::debug;

/// 将原始内容解析为配置值集合
///
/// 内容必须是键和值都为字符串的 JSON 对象。解析失败时错误中保留原始内容，
/// 因此错误信息的长度取决于内容大小。
pub fn parse_values(content: &[u8]) -> ConfigResult<ValueSet> {
    match serde_json::from_slice::<ValueSet>(content) {
        Ok(values) => {
            debug!("解析配置值完成，共 {} 项", values.len());
            Ok(values)
        }
        Err(source) => Err(ConfigError::Parse {
            source,
            content: String::from_utf8_lossy(content).into_owned(),
        }),
    }
}
