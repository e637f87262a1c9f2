//! 数据库基础设施

use bson::doc;
use mongodb::{error::Error, options::ClientOptions, Client, Collection, Database};
use std::time::Duration;
use tracing::info;

/// 进程内唯一的 MongoDB 连接，启动时建立，所有请求共享
pub struct DatabaseManager {
    client: Client,
    database: Database,
}

impl DatabaseManager {
    /// 连接并 ping 一次，服务器不可达时立即失败
    pub async fn connect(uri: &str, database: &str) -> Result<Self, Error> {
        let mut options = ClientOptions::parse(uri).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.connect_timeout.get_or_insert(Duration::from_secs(8));
        options.server_selection_timeout.get_or_insert(Duration::from_secs(8));

        let client = Client::with_options(options)?;
        let database = client.database(database);
        database.run_command(doc! { "ping": 1 }).await?;

        info!(database = database.name(), "connected to MongoDB");
        Ok(Self { client, database })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("MongoDB client shut down");
    }
}
