//! エイリアス変換モジュール
//!
//! 対応表にないラベル表記を、対応表のキーへ読み替える。

use crate::error::{Error, Result};
use crate::mapping;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// エイリアス定義
///
/// キー・値ともに正規化（前後空白除去 + 小文字化）して保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasConfig {
    /// ラベル → 対応表キー
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

impl AliasConfig {
    /// 組み込みプリセットを取得
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "web" | "browser" => Some(Self::web_preset()),
            "academic" | "education" => Some(Self::academic_preset()),
            _ => None,
        }
    }

    /// プリセット名の一覧
    pub fn preset_names() -> &'static [&'static str] {
        &["web", "academic"]
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON文字列から読み込み
    ///
    /// 対応表に存在しないキーを指すエイリアスはエラー
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Self = serde_json::from_str(json)?;
        let mut config = Self::default();
        for (alias, target) in raw.aliases {
            config.insert(&alias, &target)?;
        }
        Ok(config)
    }

    /// エイリアスを追加
    pub fn insert(&mut self, alias: &str, target: &str) -> Result<()> {
        let target = normalize(target);
        if mapping::lookup(&target).is_none() {
            return Err(Error::Config(format!(
                "エイリアス '{}' の参照先 '{}' は対応表にありません",
                alias, target
            )));
        }
        self.aliases.insert(normalize(alias), target);
        Ok(())
    }

    /// ブラウザのinput名・id向けプリセット
    fn web_preset() -> Self {
        Self::from_pairs(&[
            ("useremail", "email"),
            ("user email", "email"),
            ("e-mail", "email"),
            ("mail", "email"),
            ("tel", "phone"),
            ("telephone", "phone"),
            ("githublink", "github"),
            ("github link", "github"),
            ("linkedinprofile", "linkedin profile"),
            ("linkedin link", "linkedin"),
            ("given name", "first name"),
            ("family name", "last name"),
            ("surname", "last name"),
        ])
    }

    /// 学校・奨学金フォーム向けプリセット
    fn academic_preset() -> Self {
        Self::from_pairs(&[
            ("college name", "college"),
            ("university name", "university"),
            ("course", "degree"),
            ("program", "degree"),
            ("stream", "branch"),
            ("department", "branch"),
            ("year of passing", "passing year"),
            ("batch", "graduation year"),
        ])
    }

    fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let aliases = pairs
            .iter()
            .map(|(alias, target)| (alias.to_string(), target.to_string()))
            .collect();
        Self { aliases }
    }

    /// 正規化済みラベルを対応表キーへ読み替え
    pub fn resolve(&self, normalized_label: &str) -> Option<&str> {
        self.aliases.get(normalized_label).map(String::as_str)
    }

    /// 設定をマージ（後から追加した設定が優先）
    pub fn merge(&mut self, other: &AliasConfig) {
        self.aliases.extend(other.aliases.clone());
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// プリセットとカスタムJSONからエイリアス設定を構築
pub fn build_aliases(presets: &[&str], alias_json: Option<&str>) -> Result<AliasConfig> {
    let mut config = AliasConfig::default();

    for preset_name in presets {
        let preset = AliasConfig::from_preset(preset_name).ok_or_else(|| {
            Error::Config(format!(
                "不明なプリセット '{}' ({})",
                preset_name,
                AliasConfig::preset_names().join("/")
            ))
        })?;
        config.merge(&preset);
    }

    // カスタムエイリアスJSONを適用（プリセットを上書き）
    if let Some(json) = alias_json {
        let custom = AliasConfig::from_json(json)?;
        config.merge(&custom);
    }

    Ok(config)
}
