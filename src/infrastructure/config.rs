//! 服务配置
//!
//! 先加载 `.env`，再从命令行参数和环境变量解析，命令行优先。

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "product_catalog", about = "Product CRUD API", long_about = None)]
pub struct AppConfig {
    /// MongoDB 连接串
    #[arg(long, env = "MONGODB_CONNECTION_URI", hide_env_values = true)]
    pub mongodb_connection_uri: String,

    /// 监听地址
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// 监听端口
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// 数据库名
    #[arg(long = "database", env = "MONGODB_DATABASE", default_value = "defaultDatabase")]
    pub database: String,

    /// 产品集合名
    #[arg(long = "collection", env = "MONGODB_COLLECTION", default_value = "products")]
    pub collection: String,

    /// 日志级别或 EnvFilter 表达式
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl AppConfig {
    /// 从命令行和环境变量解析，调用前先执行 [`load_env_file`]
    pub fn load() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 加载 `.env`，文件不存在时忽略，其他错误交给调用方在日志初始化后记录
pub fn load_env_file() -> Option<dotenvy::Error> {
    ignore_missing(dotenvy::dotenv())
}

fn ignore_missing(result: Result<PathBuf, dotenvy::Error>) -> Option<dotenvy::Error> {
    match result {
        Ok(_) => None,
        Err(err) if err.not_found() => None,
        Err(err) => Some(err),
    }
}
