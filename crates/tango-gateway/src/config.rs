//! Configuration loading and gateway factory.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use tango_core::engine::GameEngineConfig;
use tango_core::session::GameRules;
use tango_core::traits::HighScoreGateway;
use tango_core::QuizSettings;

use crate::http::{HttpGateway, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::memory::MemoryGateway;

/// Environment variable that forces an HTTP gateway at the given URL.
pub const HIGHSCORE_URL_ENV: &str = "TANGO_HIGHSCORE_URL";

/// Which high-score backend to use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GatewayConfig {
    Http {
        #[serde(default = "default_base_url")]
        base_url: String,
        #[serde(default = "default_timeout")]
        timeout_secs: u64,
    },
    Memory {
        /// Best score to start from.
        #[serde(default)]
        best: u64,
    },
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig::Http {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// `[words]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordsConfig {
    /// Word-list file used when `--words` is not given.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// `[game]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_duration")]
    pub duration_secs: u32,
    #[serde(default = "default_feedback_delay")]
    pub feedback_delay_ms: u64,
}

fn default_duration() -> u32 {
    120
}
fn default_feedback_delay() -> u64 {
    80
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_duration(),
            feedback_delay_ms: default_feedback_delay(),
        }
    }
}

impl GameConfig {
    pub fn engine_config(&self) -> GameEngineConfig {
        GameEngineConfig {
            rules: GameRules::with_duration_secs(self.duration_secs),
            feedback_delay: Duration::from_millis(self.feedback_delay_ms),
        }
    }
}

/// Top-level tango configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TangoConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub words: WordsConfig,
    #[serde(default)]
    pub quiz: QuizSettings,
    #[serde(default)]
    pub game: GameConfig,
}

/// Expand `${VAR}` references in a string. Missing variables expand to "".
///
/// Substituted values are copied verbatim and never expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + len];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + len + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_gateway_config(config: &GatewayConfig) -> GatewayConfig {
    match config {
        GatewayConfig::Http {
            base_url,
            timeout_secs,
        } => GatewayConfig::Http {
            base_url: resolve_env_vars(base_url),
            timeout_secs: *timeout_secs,
        },
        GatewayConfig::Memory { best } => GatewayConfig::Memory { best: *best },
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `tango.toml` in the current directory
/// 2. `~/.config/tango/config.toml`
///
/// Environment variable override: `TANGO_HIGHSCORE_URL`.
pub fn load_config() -> Result<TangoConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<TangoConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("tango.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loading config");
            toml::from_str::<TangoConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => TangoConfig::default(),
    };

    if let Ok(url) = std::env::var(HIGHSCORE_URL_ENV) {
        let timeout_secs = match config.gateway {
            GatewayConfig::Http { timeout_secs, .. } => timeout_secs,
            GatewayConfig::Memory { .. } => default_timeout(),
        };
        config.gateway = GatewayConfig::Http {
            base_url: url,
            timeout_secs,
        };
    }

    config.gateway = resolve_gateway_config(&config.gateway);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("tango"))
}

/// Create a gateway instance from its configuration.
pub fn create_gateway(config: &GatewayConfig) -> Result<Arc<dyn HighScoreGateway>> {
    match config {
        GatewayConfig::Http {
            base_url,
            timeout_secs,
        } => {
            let gateway = HttpGateway::new(base_url, *timeout_secs)
                .context("failed to create HTTP gateway")?;
            Ok(Arc::new(gateway))
        }
        GatewayConfig::Memory { best } => Ok(Arc::new(MemoryGateway::with_best(*best))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tango_core::Direction;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_TANGO_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_TANGO_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_TANGO_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        std::env::remove_var("_TANGO_TEST_VAR");
    }

    #[test]
    fn resolve_env_vars_does_not_reexpand_values() {
        std::env::set_var("_TANGO_SELF_REF", "${_TANGO_SELF_REF}");
        assert_eq!(
            resolve_env_vars("http://${_TANGO_SELF_REF}/x"),
            "http://${_TANGO_SELF_REF}/x"
        );
        std::env::remove_var("_TANGO_SELF_REF");

        assert_eq!(resolve_env_vars("a${_TANGO_UNSET_VAR}b"), "ab");
        assert_eq!(resolve_env_vars("open ${brace"), "open ${brace");
    }

    #[test]
    fn default_config() {
        let config = TangoConfig::default();
        assert_eq!(config.game.duration_secs, 120);
        assert_eq!(config.game.feedback_delay_ms, 80);
        assert_eq!(config.quiz.choices, 8);
        assert!(matches!(config.gateway, GatewayConfig::Http { .. }));
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[gateway]
type = "http"
base_url = "http://scores.local:8000"
timeout_secs = 3

[words]
path = "words/target1900.toml"

[quiz]
count = 20
allow_duplicates = true
direction = "en2jp"

[game]
duration_secs = 60
"#;
        let config: TangoConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.gateway,
            GatewayConfig::Http {
                base_url: "http://scores.local:8000".into(),
                timeout_secs: 3
            }
        );
        assert_eq!(config.words.path, Some(PathBuf::from("words/target1900.toml")));
        assert_eq!(config.quiz.count, 20);
        assert!(config.quiz.allow_duplicates);
        assert!(config.quiz.shuffle);
        assert_eq!(config.quiz.direction, Direction::EnToJp);
        assert_eq!(config.game.duration_secs, 60);
        assert_eq!(config.game.feedback_delay_ms, 80);

        let engine = config.game.engine_config();
        assert_eq!(engine.rules.start_tenths, 600);
        assert_eq!(engine.feedback_delay, Duration::from_millis(80));
    }

    #[test]
    fn parse_memory_gateway() {
        let config: TangoConfig = toml::from_str("[gateway]\ntype = \"memory\"\n").unwrap();
        assert_eq!(config.gateway, GatewayConfig::Memory { best: 0 });
    }

    #[test]
    fn explicit_missing_path_is_error() {
        let err = load_config_from(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tango.toml");
        std::fs::write(&path, "[gateway]\ntype = \"memory\"\nbest = 90\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        if std::env::var(HIGHSCORE_URL_ENV).is_err() {
            assert_eq!(config.gateway, GatewayConfig::Memory { best: 90 });
        }
    }

    #[test]
    fn malformed_config_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[game\nduration_secs = ").unwrap();
        let err = load_config_from(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[tokio::test]
    async fn factory_builds_memory_gateway() {
        let gateway = create_gateway(&GatewayConfig::Memory { best: 15 }).unwrap();
        assert_eq!(gateway.name(), "memory");
        assert_eq!(gateway.fetch_best().await.unwrap().best, 15);
    }

    #[test]
    fn factory_builds_http_gateway() {
        let gateway = create_gateway(&GatewayConfig::default()).unwrap();
        assert_eq!(gateway.name(), "http");
    }
}
