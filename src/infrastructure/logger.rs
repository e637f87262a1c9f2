//! 日志基础设施

use tracing_subscriber::{fmt, EnvFilter};

pub struct Logger;

impl Logger {
    /// 初始化全局日志订阅者，`RUST_LOG` 优先于传入的默认级别
    ///
    /// 重复调用时保留第一次的设置。
    pub fn init(default_level: &str) {
        let filter = EnvFilter::try_from_default_env()
            .ok()
            .or_else(|| EnvFilter::try_new(default_level).ok())
            .unwrap_or_else(|| EnvFilter::new("info"));

        let _ = fmt().with_env_filter(filter).with_target(false).try_init();
    }
}
