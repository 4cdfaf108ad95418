use serde::Deserialize;
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
    /// Directory with the compiled frontend (trunk output)
    pub dir: String,
}

/// Environment variable overriding `server.port`
pub const PORT_ENV: &str = "POLYROLL_PORT";

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
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `POLYROLL_PORT` overrides the port in both cases.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = match find_config_file() {
        Some(config_path) => {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            parse_config(&contents)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            parse_config(DEFAULT_CONFIG)?
        }
    };

    if let Ok(port) = std::env::var(PORT_ENV) {
        apply_port_override(&mut config, &port)?;
    }

    Ok(config)
}

fn find_config_file() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let config_path = exe_path.parent()?.join("config.toml");
    if config_path.exists() {
        Some(config_path)
    } else {
        tracing::warn!("config.toml not found at: {}", config_path.display());
        None
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

fn apply_port_override(config: &mut Config, raw: &str) -> anyhow::Result<()> {
    config.server.port = raw
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("{PORT_ENV}='{raw}' is not a valid port: {e}"))?;
    Ok(())
}

/// Get the static files directory from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.static_files.dir);

    // If absolute path, use as is
    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    // If relative path, resolve it relative to the executable directory
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dir);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    // Fallback: use relative to current directory
    dir.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.static_files.dir, "dist");
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_config("[server]\nhost = \"127.0.0.1\"\nport = 8080\n").is_err());
    }

    #[test]
    fn test_port_override() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        apply_port_override(&mut config, " 8081 ").unwrap();
        assert_eq!(config.server.port, 8081);
        assert!(apply_port_override(&mut config, "http").is_err());
        assert_eq!(config.server.port, 8081);
    }

    #[test]
    fn test_absolute_static_dir_is_kept() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        let abs = std::env::temp_dir().join("polyroll-dist");
        config.static_files.dir = abs.display().to_string();
        assert_eq!(get_static_dir(&config), abs);
    }
}
