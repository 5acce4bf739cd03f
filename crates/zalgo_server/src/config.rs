//! Server command-line and environment configuration.

use clap::Parser;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Runtime settings for `zalgo_server`. Every flag can also be set through
/// its `ZALGO_*` environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "zalgo_server",
    version,
    about = "Serve the zalgo text form and JSON API"
)]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "ZALGO_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// TCP port to bind.
    #[arg(long, env = "ZALGO_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// trace|debug|info|warn|error. Defaults to the build-mode level.
    #[arg(long, env = "ZALGO_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rotated log files. Stderr only when unset.
    #[arg(long, env = "ZALGO_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Largest accepted form or JSON body, in bytes.
    #[arg(long, env = "ZALGO_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,
}

impl ServerConfig {
    pub fn effective_log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or_else(|| zalgo_core::default_log_level())
    }

    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::{ServerConfig, DEFAULT_HOST, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT};
    use clap::Parser;

    #[test]
    fn defaults_bind_localhost_5000() {
        let config = ServerConfig::try_parse_from(["zalgo_server"]).unwrap();
        assert_eq!(config.bind_addr(), (DEFAULT_HOST, DEFAULT_PORT));
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
        assert_eq!(config.effective_log_level(), zalgo_core::default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "zalgo_server",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--log-level",
            "warn",
            "--log-dir",
            "/var/log/zalgo",
        ])
        .unwrap();
        assert_eq!(config.bind_addr(), ("0.0.0.0", 8080));
        assert_eq!(config.effective_log_level(), "warn");
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/zalgo"));
    }

    #[test]
    fn log_level_flag_wins_over_build_default() {
        let config = ServerConfig::try_parse_from(["zalgo_server", "--log-level", "error"]).unwrap();
        let level: &str = config.effective_log_level();
        assert_eq!(level, "error");

        let fallback = ServerConfig::try_parse_from(["zalgo_server"]).unwrap();
        assert_eq!(fallback.effective_log_level(), zalgo_core::default_log_level());
    }

    #[test]
    fn rejects_out_of_range_port() {
        assert!(ServerConfig::try_parse_from(["zalgo_server", "--port", "70000"]).is_err());
    }
}
