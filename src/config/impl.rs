use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// 常用环境变量到配置键的映射，优先级高于 `PORTAL_*`
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("APP_ENV", "app.environment"),
    ("RUST_LOG", "app.log_level"),
    ("SERVER_HOST", "server.host"),
    ("SERVER_PORT", "server.port"),
    ("UNIX_SOCKET", "server.unix_socket_path"),
    ("CPU_COUNT", "server.workers"),
    ("JWT_SECRET", "jwt.secret"),
    ("DATABASE_URL", "database.url"),
    ("REDIS_URL", "cache.redis.url"),
    ("REDIS_KEY_PREFIX", "cache.redis.key_prefix"),
    ("CACHE_TTL", "cache.default_ttl"),
    ("UPLOAD_DIR", "upload.dir"),
    ("PUBLIC_BASE_URL", "upload.public_base_url"),
    ("SCHOOL_YEAR", "school.current_school_year"),
];

/// 0 表示按 CPU 核数，且不超过上限
fn resolve_workers(configured: usize, max_workers: usize, cpus: usize) -> usize {
    if configured == 0 {
        cpus.min(max_workers).max(1)
    } else {
        configured
    }
}

impl AppConfig {
    /// 加载配置：config.toml -> config.{APP_ENV}.toml -> PORTAL_* -> 常用环境变量
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name(&format!("config.{app_env}")).required(false))
            .add_source(
                Environment::with_prefix("PORTAL")
                    .separator("_")
                    .try_parsing(true),
            );

        for (var, key) in ENV_OVERRIDES {
            builder = builder.set_override_option(*key, std::env::var(var).ok())?;
        }

        let mut app_config: AppConfig = builder.build()?.try_deserialize()?;
        app_config.server.workers = resolve_workers(
            app_config.server.workers,
            app_config.server.max_workers,
            num_cpus::get(),
        );
        app_config.validate()?;

        Ok(app_config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=12).contains(&self.school.school_year_start_month) {
            return Err(ConfigError::Message(format!(
                "school.school_year_start_month must be 1-12, got {}",
                self.school.school_year_start_month
            )));
        }
        if self.is_production() && self.jwt.secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "jwt.secret must be set in production".to_string(),
            ));
        }
        Ok(())
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 启动时调用一次
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))
    }

    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        Some(self.server.unix_socket_path.as_str()).filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workers_default_to_cpus_capped() {
        assert_eq!(resolve_workers(0, 8, 4), 4);
        assert_eq!(resolve_workers(0, 8, 32), 8);
        assert_eq!(resolve_workers(0, 0, 4), 1);
        assert_eq!(resolve_workers(3, 8, 32), 3);
    }

    #[test]
    fn test_override_keys_are_unique() {
        let mut keys: Vec<&str> = ENV_OVERRIDES.iter().map(|(_, key)| *key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), ENV_OVERRIDES.len());
    }
}
