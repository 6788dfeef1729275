//! MongoDB 연결 관리

use log::info;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;

use crate::config::DatabaseConfig;

#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 클라이언트를 만들고 `ping`으로 연결을 확인합니다.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;

        // 모니터링 및 로깅에서 구분하기 위한 애플리케이션 이름
        client_options.app_name = Some("sales_manager".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&config.name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.name);

        Ok(Self {
            client,
            database_name: config.name.clone(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
