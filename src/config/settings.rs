pub const DEFAULT_DATABASE_PATH: &str = "tennis.db";

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string()),
            pool_size: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            database: DatabaseSettings::default(),
            server: ServerSettings::default(),
        }
    }

    /// Command-line values take precedence over the environment.
    pub fn with_overrides(mut self, database_path: Option<&str>, port: Option<u16>) -> Self {
        if let Some(path) = database_path {
            self.database.path = path.to_string();
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }
}
