use clap::Parser;

use crate::config::AppConfig;

/// Command-line overrides for the server; anything omitted comes from the environment
#[derive(Parser, Debug)]
#[command(name = "authorship-api")]
#[command(about = "Authorship API - author and article management server")]
#[command(version)]
pub struct Cli {
    #[arg(long, help = "Port to listen on (overrides API_PORT / PORT)")]
    pub port: Option<u16>,

    #[arg(long, help = "Address to bind (overrides API_BIND)")]
    pub bind: Option<String>,

    #[arg(long, help = "Database URL, e.g. sqlite://authorship.db?mode=rwc (overrides DATABASE_URL)")]
    pub database_url: Option<String>,
}

impl Cli {
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(port) = self.port {
            config.api.port = port;
        }
        if let Some(bind) = &self.bind {
            config.api.bind = bind.clone();
        }
        if let Some(url) = &self.database_url {
            config.database.url = url.clone();
        }
        config
    }
}
