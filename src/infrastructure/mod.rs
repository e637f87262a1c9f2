//! 基础设施层：配置、日志、数据库连接和存储实现

pub mod config;
pub mod database;
pub mod logger;
pub mod memory_store;
pub mod mongo_store;
pub mod shutdown;
