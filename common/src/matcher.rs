//! ラベル照合
//!
//! 各ラベルを対応表で引き、プロフィールの値を割り当てる。
//!
//! ## 照合順序
//! 1. 完全一致（対応表のキー）
//! 2. エイリアス（設定時のみ）
//! 3. 部分一致（対応表を宣言順に走査し、値が空でない最初のエントリ）

use crate::alias::AliasConfig;
use crate::mapping::{self, FIELD_MAPPINGS};
use crate::types::{FormField, Profile};
use serde::{Deserialize, Serialize};

/// 照合オプション
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// 完全一致のキーが空値を返したときも部分一致を試す
    pub fuzzy_on_empty_exact: bool,
}

/// 照合件数の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub total: usize,
    pub matched: usize,
}

impl MatchSummary {
    pub fn unmatched(&self) -> usize {
        self.total - self.matched
    }
}

/// 照合結果を集計
pub fn summarize(fields: &[FormField]) -> MatchSummary {
    MatchSummary {
        total: fields.len(),
        matched: fields.iter().filter(|f| f.matched).count(),
    }
}

/// ラベル照合器
///
/// 状態を持たないため、複数スレッドから同時に使える。
#[derive(Debug, Clone, Default)]
pub struct FieldMatcher {
    aliases: AliasConfig,
    options: MatchOptions,
}

impl FieldMatcher {
    pub fn new(options: MatchOptions) -> Self {
        Self {
            aliases: AliasConfig::default(),
            options,
        }
    }

    /// エイリアスを設定
    pub fn with_aliases(mut self, aliases: AliasConfig) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// ラベル列を照合（入力と同じ順・同じ件数で返す）
    pub fn match_fields<S: AsRef<str>>(&self, profile: &Profile, labels: &[S]) -> Vec<FormField> {
        labels
            .iter()
            .map(|label| self.match_label(profile, label.as_ref()))
            .collect()
    }

    /// ラベル1件を照合
    pub fn match_label(&self, profile: &Profile, label: &str) -> FormField {
        let normalized = label.trim().to_lowercase();

        let exact = mapping::lookup(&normalized).or_else(|| {
            self.aliases
                .resolve(&normalized)
                .and_then(mapping::lookup)
        });

        if let Some(entry) = exact {
            let value = entry.apply(profile);
            if !value.is_empty() || !self.options.fuzzy_on_empty_exact {
                return FormField::new(label, value);
            }
        }

        match fuzzy_match(profile, &normalized) {
            Some(value) => FormField::new(label, value),
            None => FormField::unmatched(label),
        }
    }
}

/// 部分一致で値を探す
///
/// ラベルがキーを含む、またはキーがラベルを含むエントリを宣言順に試し、
/// 値が空でない最初のものを返す。
fn fuzzy_match(profile: &Profile, normalized: &str) -> Option<String> {
    for entry in FIELD_MAPPINGS {
        if !(normalized.contains(entry.key) || entry.key.contains(normalized)) {
            continue;
        }
        let value = entry.apply(profile);
        if !value.is_empty() {
            tracing::debug!(label = normalized, key = entry.key, "部分一致");
            return Some(value);
        }
    }
    None
}

/// 既定設定でラベル列を照合
pub fn match_fields<S: AsRef<str>>(profile: &Profile, labels: &[S]) -> Vec<FormField> {
    FieldMatcher::default().match_fields(profile, labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WorkExperience;

    fn alice() -> Profile {
        Profile {
            name: "Alice Example".into(),
            email: "alice@example.com".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_exact_match() {
        let fields = match_fields(&alice(), &["full name", "email address"]);
        assert_eq!(fields[0].value, "Alice Example");
        assert!(fields[0].matched);
        assert_eq!(fields[1].value, "alice@example.com");
    }

    #[test]
    fn test_label_kept_verbatim() {
        let fields = match_fields(&alice(), &["  Full Name "]);
        assert_eq!(fields[0].label, "  Full Name ");
        assert_eq!(fields[0].value, "Alice Example");
    }

    #[test]
    fn test_fuzzy_label_contains_key() {
        let fields = match_fields(&alice(), &["your email please"]);
        assert_eq!(fields[0].value, "alice@example.com");
        assert!(fields[0].matched);
    }

    #[test]
    fn test_fuzzy_key_contains_label() {
        // "mai" は "email" に含まれる
        let fields = match_fields(&alice(), &["mai"]);
        assert_eq!(fields[0].value, "alice@example.com");
    }

    #[test]
    fn test_fuzzy_skips_empty_values() {
        // "phone" は空なので次の候補へ進むが、候補がなければ未照合
        let fields = match_fields(&alice(), &["phone or mobile"]);
        assert_eq!(fields[0], FormField::unmatched("phone or mobile"));
    }

    #[test]
    fn test_fuzzy_first_declared_wins() {
        let profile = Profile {
            name: "Alice Example".into(),
            college: "MIT".into(),
            ..Default::default()
        };
        // "name" も "college" も含むが、宣言順で "name" が先
        let fields = match_fields(&profile, &["college name"]);
        assert_eq!(fields[0].value, "Alice Example");
    }

    #[test]
    fn test_exact_empty_is_final_by_default() {
        let profile = Profile {
            name: "Madonna".into(),
            ..Default::default()
        };
        let fields = match_fields(&profile, &["last name"]);
        assert_eq!(fields[0], FormField::unmatched("last name"));
    }

    #[test]
    fn test_fuzzy_on_empty_exact_option() {
        let profile = Profile {
            name: "Madonna".into(),
            ..Default::default()
        };
        let matcher = FieldMatcher::new(MatchOptions {
            fuzzy_on_empty_exact: true,
        });
        let fields = matcher.match_fields(&profile, &["last name"]);
        assert_eq!(fields[0].value, "Madonna");
        assert!(fields[0].matched);
    }

    #[test]
    fn test_alias_before_fuzzy() {
        let profile = Profile {
            name: "Alice Example".into(),
            github: "https://github.com/alice".into(),
            ..Default::default()
        };
        let aliases = AliasConfig::from_json(r#"{"aliases": {"username": "github"}}"#).unwrap();

        // エイリアスなしでは "name" に部分一致する
        assert_eq!(match_fields(&profile, &["username"])[0].value, "Alice Example");

        let matcher = FieldMatcher::default().with_aliases(aliases);
        assert_eq!(
            matcher.match_fields(&profile, &["username"])[0].value,
            "https://github.com/alice"
        );
    }

    #[test]
    fn test_duplicates_matched_independently() {
        let fields = match_fields(&alice(), &["email", "email"]);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0], fields[1]);
    }

    #[test]
    fn test_previous_company() {
        let mut profile = alice();
        assert!(!match_fields(&profile, &["previous company"])[0].matched);

        profile.work_experience.push(WorkExperience {
            company: "Acme".into(),
            position: "Engineer".into(),
            ..Default::default()
        });
        assert_eq!(match_fields(&profile, &["previous company"])[0].value, "Acme");
    }

    #[test]
    fn test_summarize() {
        let fields = match_fields(&alice(), &["name", "phone", "email"]);
        let summary = summarize(&fields);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.matched, 2);
        assert_eq!(summary.unmatched(), 1);
    }
}
