use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StaticFilesConfig {
    /// Каталог со сборкой фронтенда (index.html, wasm, assets)
    pub dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[static_files]
dir = "dist"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (copied there by build.rs)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(exe_dir) = exe_dir() {
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        }
        tracing::warn!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

impl Config {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("invalid server address '{}': {}", addr, e))
    }

    /// Resolve the static directory.
    /// Relative paths are taken relative to the current directory when it
    /// exists there, otherwise relative to the executable.
    pub fn static_dir(&self) -> PathBuf {
        let dir = Path::new(&self.static_files.dir);
        if dir.is_absolute() || dir.exists() {
            return dir.to_path_buf();
        }
        match exe_dir() {
            Some(exe_dir) => exe_dir.join(dir),
            None => dir.to_path_buf(),
        }
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.static_files.dir, "dist");
        assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_custom_config() {
        let config = parse_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [static_files]
            dir = "/srv/kitchen"
            "#,
        )
        .unwrap();
        assert_eq!(config.bind_addr().unwrap().port(), 8080);
        assert_eq!(config.static_dir(), PathBuf::from("/srv/kitchen"));
    }

    #[test]
    fn test_missing_section_is_error() {
        assert!(parse_config("[server]\nhost = \"0.0.0.0\"\nport = 1\n").is_err());
    }

    #[test]
    fn test_bad_host_is_error() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        config.server.host = "not a host".to_string();
        assert!(config.bind_addr().is_err());
    }
}
