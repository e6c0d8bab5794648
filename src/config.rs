use crate::error::{AutofillError, Result};
use autofill_common::{build_aliases, AliasConfig, FieldMatcher, MatchOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// プロフィールパスを上書きする環境変数
pub const PROFILE_ENV: &str = "AUTOFILL_PROFILE";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub profile_path: Option<PathBuf>,
    pub preset: Option<String>,
    pub alias_path: Option<PathBuf>,
    pub default_format: String,
    pub fuzzy_on_empty_exact: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile_path: None,
            preset: None,
            alias_path: None,
            default_format: "table".into(),
            fuzzy_on_empty_exact: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "設定を読み込み");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AutofillError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("autofill").join("config.json"))
    }

    /// プロフィールパスを決定（引数 → 環境変数 → 設定ファイル）
    pub fn resolve_profile_path(&self, cli_path: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = cli_path {
            return Ok(path);
        }

        if let Ok(path) = std::env::var(PROFILE_ENV) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        self.profile_path.clone().ok_or(AutofillError::MissingProfile)
    }

    pub fn set_profile_path(&mut self, path: PathBuf) -> Result<()> {
        if !path.exists() {
            return Err(AutofillError::FileNotFound(path.display().to_string()));
        }
        self.profile_path = Some(path);
        self.save()
    }

    pub fn set_preset(&mut self, preset: String) -> Result<()> {
        if AliasConfig::from_preset(&preset).is_none() {
            return Err(AutofillError::UnknownPreset(preset));
        }
        self.preset = Some(preset);
        self.save()
    }

    /// 照合器を構築（引数の指定が設定ファイルより優先）
    pub fn build_matcher(
        &self,
        preset: Option<&str>,
        alias_path: Option<&Path>,
        fuzzy_on_empty_exact: bool,
    ) -> Result<FieldMatcher> {
        let preset = preset.or(self.preset.as_deref());
        if let Some(name) = preset {
            if AliasConfig::from_preset(name).is_none() {
                return Err(AutofillError::UnknownPreset(name.to_string()));
            }
        }

        let alias_path = alias_path.or(self.alias_path.as_deref());
        let alias_json = match alias_path {
            Some(path) => {
                if !path.exists() {
                    return Err(AutofillError::FileNotFound(path.display().to_string()));
                }
                Some(std::fs::read_to_string(path)?)
            }
            None => None,
        };

        let presets: Vec<&str> = preset.into_iter().collect();
        let aliases = build_aliases(&presets, alias_json.as_deref())?;

        let options = MatchOptions {
            fuzzy_on_empty_exact: fuzzy_on_empty_exact || self.fuzzy_on_empty_exact,
        };
        Ok(FieldMatcher::new(options).with_aliases(aliases))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_format, "table");
        assert!(config.profile_path.is_none());
        assert!(!config.fuzzy_on_empty_exact);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"preset": "web"}"#).unwrap();
        assert_eq!(config.preset.as_deref(), Some("web"));
        assert_eq!(config.default_format, "table");
    }

    #[test]
    fn test_cli_path_wins() {
        let config = Config {
            profile_path: Some(PathBuf::from("/from/config.json")),
            ..Default::default()
        };
        let path = config
            .resolve_profile_path(Some(PathBuf::from("/from/cli.json")))
            .unwrap();
        assert_eq!(path, PathBuf::from("/from/cli.json"));
    }

    #[test]
    fn test_build_matcher_unknown_preset() {
        let config = Config::default();
        let err = config.build_matcher(Some("nope"), None, false).unwrap_err();
        assert!(matches!(err, AutofillError::UnknownPreset(_)));
    }

    #[test]
    fn test_build_matcher_merges_options() {
        let config = Config {
            fuzzy_on_empty_exact: true,
            preset: Some("web".into()),
            ..Default::default()
        };
        let matcher = config.build_matcher(None, None, false).unwrap();
        assert!(matcher.options().fuzzy_on_empty_exact);
    }
}
