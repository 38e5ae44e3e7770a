use std::env;

use anyhow::Result;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/weddings".to_string(),
            db_max_connections: 10,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let config = AppConfig {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/weddings".to_string()),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()?,
        };

        Ok(config)
    }
}

/// Fixed page geometry for the paginated target, in millimeters.
#[derive(Debug, Clone)]
pub struct PageSetup {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    /// Remaining vertical space below which a section starts on a new page
    /// instead of splitting its heading from the first rows.
    pub break_threshold: f32,
}

impl Default for PageSetup {
    fn default() -> Self {
        // A4 portrait
        PageSetup {
            width: 210.0,
            height: 297.0,
            margin_top: 18.0,
            margin_bottom: 18.0,
            margin_left: 18.0,
            margin_right: 18.0,
            break_threshold: 28.0,
        }
    }
}

impl PageSetup {
    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }
}
