//! 随机标识符工具

use uuid::Uuid;

/// 临时文件名使用的随机标识符长度
pub const TEMP_FILE_ID_LEN: usize = 30;

/// 生成指定长度的随机十六进制字符串（小写）
pub fn random_hex(len: usize) -> String {
    let mut id = String::with_capacity(len + 32);
    while id.len() < len {
        id.push_str(&Uuid::new_v4().simple().to_string());
    }
    id.truncate(len);
    id
}
