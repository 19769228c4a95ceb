use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub admin_username: String,
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            jwt_secret: std::env::var("JWT_SECRET")
                .context("Cannot load JWT_SECRET env variable")?,
            jwt_expiration_hours: std::env::var("JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .context("JWT_EXPIRATION_HOURS must be a number")?,
            admin_username: std::env::var("ADMIN_USERNAME")
                .context("Cannot load ADMIN_USERNAME env variable")?,
            admin_password: std::env::var("ADMIN_PASSWORD")
                .context("Cannot load ADMIN_PASSWORD env variable")?,
        })
    }
}
