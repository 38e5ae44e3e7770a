use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::core::AppConfig;

#[derive(Clone)]
pub struct ApiState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
}

impl ApiState {
    pub async fn new(config: AppConfig) -> anyhow::Result<Self> {
        let db = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect(&config.database_url)
            .await?;

        Ok(ApiState {
            db,
            config: Arc::new(config),
        })
    }
}
