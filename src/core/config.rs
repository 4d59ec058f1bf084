//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.lifeterm/config.toml`. It is optional and never
//! written: a missing file simply means defaults.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::frame::DEFAULT_LIVE_GLYPH;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LifeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub tick_ms: Option<u64>,
    pub live_glyph: Option<char>,
    pub status_line: Option<bool>,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub tick_ms: Option<u64>,
    pub live_glyph: Option<char>,
    pub no_status: bool,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TICK_MS: u64 = 200;

pub const ENV_TICK_MS: &str = "LIFETERM_TICK_MS";
pub const ENV_LIVE_GLYPH: &str = "LIFETERM_LIVE_GLYPH";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub tick: Duration,
    pub live_glyph: char,
    pub status_line: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            live_glyph: DEFAULT_LIVE_GLYPH,
            status_line: true,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.lifeterm/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lifeterm").join("config.toml"))
}

/// Load config from `path`, or from `~/.lifeterm/config.toml` when `None`.
///
/// A missing file yields `LifeConfig::default()`. A file that exists but is
/// malformed returns `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<LifeConfig, ConfigError> {
    let path = match path.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LifeConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file at {}, using defaults", path.display());
        return Ok(LifeConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: LifeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &LifeConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment supplied by the caller.
pub fn resolve_with_env<F>(config: &LifeConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = ResolvedConfig::default();

    // Tick: CLI → env → config → default
    let env_tick = env(ENV_TICK_MS).and_then(|raw| match raw.trim().parse::<u64>() {
        Ok(ms) => Some(ms),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", ENV_TICK_MS, raw, e);
            None
        }
    });
    let tick_ms = cli
        .tick_ms
        .or(env_tick)
        .or(config.general.tick_ms)
        .filter(|&ms| {
            if ms == 0 {
                warn!("Tick interval must be positive, using {}ms", DEFAULT_TICK_MS);
            }
            ms > 0
        });
    let tick = tick_ms.map(Duration::from_millis).unwrap_or(defaults.tick);

    // Live glyph: CLI → env → config → default
    let env_glyph = env(ENV_LIVE_GLYPH).and_then(|raw| {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => {
                warn!("Ignoring {}={:?}: expected one character", ENV_LIVE_GLYPH, raw);
                None
            }
        }
    });
    let live_glyph = cli
        .live_glyph
        .or(env_glyph)
        .or(config.general.live_glyph)
        .filter(|&c| {
            let ok = is_valid_glyph(c);
            if !ok {
                warn!(
                    "Live glyph {:?} is not printable ASCII, using {:?}",
                    c, DEFAULT_LIVE_GLYPH
                );
            }
            ok
        })
        .unwrap_or(defaults.live_glyph);

    let status_line = !cli.no_status && config.general.status_line.unwrap_or(defaults.status_line);

    ResolvedConfig {
        tick,
        live_glyph,
        status_line,
    }
}

/// Printable ASCII that doesn't collide with blank space.
fn is_valid_glyph(c: char) -> bool {
    c.is_ascii_graphic()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = LifeConfig::default();
        assert!(config.general.tick_ms.is_none());
        assert!(config.general.live_glyph.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&LifeConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved, ResolvedConfig::default());
        assert_eq!(resolved.tick, Duration::from_millis(200));
        assert_eq!(resolved.live_glyph, '#');
        assert!(resolved.status_line);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = LifeConfig {
            general: GeneralConfig {
                tick_ms: Some(50),
                live_glyph: Some('o'),
                status_line: Some(false),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.tick, Duration::from_millis(50));
        assert_eq!(resolved.live_glyph, 'o');
        assert!(!resolved.status_line);
    }

    #[test]
    fn test_env_overrides_config_and_cli_overrides_env() {
        let config = LifeConfig {
            general: GeneralConfig {
                tick_ms: Some(50),
                live_glyph: Some('o'),
                status_line: None,
            },
        };
        let env = |key: &str| match key {
            ENV_TICK_MS => Some("75".to_string()),
            ENV_LIVE_GLYPH => Some("*".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.tick, Duration::from_millis(75));
        assert_eq!(resolved.live_glyph, '*');

        let cli = CliOverrides {
            tick_ms: Some(10),
            live_glyph: Some('X'),
            no_status: true,
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.tick, Duration::from_millis(10));
        assert_eq!(resolved.live_glyph, 'X');
        assert!(!resolved.status_line);
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let env = |key: &str| match key {
            ENV_TICK_MS => Some("soon".to_string()),
            ENV_LIVE_GLYPH => Some("ab".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&LifeConfig::default(), &CliOverrides::default(), env);
        assert_eq!(resolved, ResolvedConfig::default());

        let cli = CliOverrides {
            tick_ms: Some(0),
            live_glyph: Some('█'),
            no_status: false,
        };
        let resolved = resolve_with_env(&LifeConfig::default(), &cli, no_env);
        assert_eq!(resolved, ResolvedConfig::default());
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[general]
tick_ms = 120
"#;
        let config: LifeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.tick_ms, Some(120));
        assert!(config.general.live_glyph.is_none());
        assert!(config.general.status_line.is_none());
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: LifeConfig = toml::from_str("").unwrap();
        assert!(config.general.tick_ms.is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[general]\nlive_glyph = \"@\"\nstatus_line = false").unwrap();
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.general.live_glyph, Some('@'));
        assert_eq!(config.general.status_line, Some(false));
    }

    #[test]
    fn test_load_config_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("absent.toml"))).unwrap();
        assert!(config.general.tick_ms.is_none());
    }

    #[test]
    fn test_load_config_malformed_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[general]\ntick_ms = \"fast\"").unwrap();
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }
}
