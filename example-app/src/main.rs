//! # 示例应用程序
//!
//! 演示如何从对象存储、URL 或本地文件加载配置值并存入配置注册表

use anyhow::Context;
use clap::Parser;
use config_abstractions::{SourceDescriptor, ValuesRegistry};
use config_loader::{ConfigRegistry, LoaderSettings, ENV_PREFIX};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "Lorn ADSP 配置值加载示例")]
struct Args {
    /// 注册表中的命名空间键
    #[arg(short, long, default_value = "app")]
    key: String,

    /// S3 存储桶
    #[arg(long)]
    s3_bucket: Option<String>,

    /// S3 对象路径
    #[arg(long)]
    s3_path: Option<String>,

    /// 直接下载地址
    #[arg(long)]
    url: Option<String>,

    /// 本地文件路径
    #[arg(long)]
    path: Option<String>,

    /// 加载器设置文件（可选，环境变量优先）
    #[arg(long)]
    settings: Option<PathBuf>,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    info!("启动 Lorn ADSP 配置加载示例");

    let settings = LoaderSettings::load(args.settings.as_deref(), ENV_PREFIX)
        .context("加载器设置加载失败")?;
    let mut registry = ConfigRegistry::from_settings(&settings).context("配置注册表创建失败")?;

    let descriptor = SourceDescriptor {
        url: args.url,
        s3_bucket: args.s3_bucket,
        s3_path: args.s3_path,
        path: args.path,
    };

    if let Err(e) = registry
        .add_values_from_descriptor(&args.key, &descriptor)
        .await
    {
        error!("配置值加载失败: {}", e);
        return Err(e).context(format!("无法加载配置键 {}", args.key));
    }

    let values = registry.get(&args.key).cloned().unwrap_or_default();
    println!("{}", serde_json::to_string_pretty(&values)?);

    info!("示例应用结束");
    Ok(())
}
