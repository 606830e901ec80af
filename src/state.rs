use std::sync::Arc;

use anyhow::Context;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

use crate::auth::jwt::JwtKeys;
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
    pub jwt: JwtKeys,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = SqlitePoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;
        let jwt = JwtKeys::new(&config.jwt);
        Ok(Self { db, config, jwt })
    }

    pub fn from_parts(db: SqlitePool, config: Arc<AppConfig>) -> Self {
        let jwt = JwtKeys::new(&config.jwt);
        Self { db, config, jwt }
    }
}
