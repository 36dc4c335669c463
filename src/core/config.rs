//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.billsplit/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The config file only seeds the roster. Balances changed during a run are
//! not written back.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::composer::DEFAULT_PLACEHOLDER_IMAGE;
use crate::core::friend::{Friend, FriendId};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BillsplitConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    /// Seed roster. `None` means "use the built-in friends".
    pub friends: Option<Vec<FriendEntry>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub currency: Option<String>,
    pub placeholder_image: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FriendEntry {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
    #[serde(default)]
    pub balance: f64,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CURRENCY: &str = "€";

fn default_friends() -> Vec<Friend> {
    vec![
        Friend::new(FriendId::new("118836"), "Suzan", "https://i.pravatar.cc/48?u=118836")
            .with_balance(27.0),
        Friend::new(FriendId::new("933372"), "Sofia", "https://i.pravatar.cc/48?u=933372")
            .with_balance(-20.0),
        Friend::new(FriendId::new("499476"), "Mike", "https://i.pravatar.cc/48?u=499476"),
    ]
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub currency: String,
    pub placeholder_image: String,
    pub friends: Vec<Friend>,
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

/// Returns the path to `~/.billsplit/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".billsplit").join("config.toml"))
}

/// Load config from `override_path`, or `~/.billsplit/config.toml` if none.
///
/// A missing default file is generated (commented out) and treated as empty.
/// A missing explicit path is an error. Malformed TOML returns
/// `ConfigError::Parse`.
pub fn load_config(override_path: Option<&Path>) -> Result<BillsplitConfig, ConfigError> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(BillsplitConfig::default());
            }
        },
    };

    if override_path.is_none() && !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(BillsplitConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<BillsplitConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# billsplit configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# currency = "€"                                # Or set BILLSPLIT_CURRENCY
# placeholder_image = "https://i.pravatar.cc/48" # Or set BILLSPLIT_PLACEHOLDER_IMAGE

# Seed roster. Leave out to start with the built-in friends.
# [[friends]]
# id = "118836"
# name = "Suzan"
# image = "https://i.pravatar.cc/48?u=118836"
# balance = 27

# [[friends]]
# id = "933372"
# name = "Sofia"
# balance = -20
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_currency` is from the `--currency` flag (None = not specified).
pub fn resolve(config: &BillsplitConfig, cli_currency: Option<&str>) -> ResolvedConfig {
    // Currency: CLI → env → config → default
    let currency = cli_currency
        .map(|s| s.to_string())
        .or_else(|| std::env::var("BILLSPLIT_CURRENCY").ok())
        .or_else(|| config.general.currency.clone())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    // Placeholder avatar: env → config → default
    let placeholder_image = std::env::var("BILLSPLIT_PLACEHOLDER_IMAGE")
        .ok()
        .or_else(|| config.general.placeholder_image.clone())
        .unwrap_or_else(|| DEFAULT_PLACEHOLDER_IMAGE.to_string());

    let friends = match &config.friends {
        Some(entries) => seed_roster(entries, &placeholder_image),
        None => default_friends(),
    };

    ResolvedConfig {
        currency,
        placeholder_image,
        friends,
    }
}

/// Turn config entries into friends, skipping blank names and repeated ids.
fn seed_roster(entries: &[FriendEntry], placeholder_image: &str) -> Vec<Friend> {
    let mut friends: Vec<Friend> = Vec::with_capacity(entries.len());
    for entry in entries {
        let name = entry.name.trim();
        if name.is_empty() {
            warn!("Skipping configured friend with empty name (id {})", entry.id);
            continue;
        }
        let id = FriendId::new(entry.id.trim());
        if friends.iter().any(|f| f.id == id) {
            warn!("Skipping configured friend '{}': duplicate id {}", name, id);
            continue;
        }
        let image = entry
            .image
            .clone()
            .filter(|i| !i.trim().is_empty())
            .unwrap_or_else(|| format!("{placeholder_image}?u={id}"));
        friends.push(Friend::new(id, name, image).with_balance(entry.balance));
    }
    friends
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = BillsplitConfig::default();
        assert!(config.friends.is_none());
        assert!(config.general.currency.is_none());
    }

    #[test]
    fn test_resolve_uses_default_friends() {
        let resolved = resolve(&BillsplitConfig::default(), Some("€"));
        let names: Vec<&str> = resolved.friends.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Suzan", "Sofia", "Mike"]);
        assert_eq!(resolved.friends[1].balance, -20.0);
    }

    #[test]
    fn test_resolve_cli_currency_wins() {
        let config = BillsplitConfig {
            general: GeneralConfig {
                currency: Some("£".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("$"));
        assert_eq!(resolved.currency, "$");
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
currency = "$"
placeholder_image = "https://avatars.test/48"

[[friends]]
id = "1"
name = "Ana"
image = "https://avatars.test/ana"
balance = 12.5

[[friends]]
id = "2"
name = "Ben"
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.general.currency.as_deref(), Some("$"));
        let friends = config.friends.as_ref().unwrap();
        assert_eq!(friends.len(), 2);
        assert_eq!(friends[0].balance, 12.5);
        assert_eq!(friends[1].image, None);
        assert_eq!(friends[1].balance, 0.0);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config = parse_config("[general]\ncurrency = \"CHF\"\n").unwrap();
        assert_eq!(config.general.currency.as_deref(), Some("CHF"));
        assert!(config.general.placeholder_image.is_none());
        assert!(config.friends.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[general\ncurrency = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_seed_roster_skips_bad_entries() {
        let entries = vec![
            FriendEntry {
                id: "1".to_string(),
                name: "Ana".to_string(),
                image: None,
                balance: 5.0,
            },
            FriendEntry {
                id: "1".to_string(),
                name: "Duplicate".to_string(),
                image: None,
                balance: 0.0,
            },
            FriendEntry {
                id: "2".to_string(),
                name: "  ".to_string(),
                image: None,
                balance: 0.0,
            },
        ];
        let friends = seed_roster(&entries, "https://avatars.test/48");
        assert_eq!(friends.len(), 1);
        assert_eq!(friends[0].image, "https://avatars.test/48?u=1");
    }

    #[test]
    fn test_missing_explicit_path_is_io_error() {
        let err = load_config(Some(Path::new("/definitely/not/here/billsplit.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
