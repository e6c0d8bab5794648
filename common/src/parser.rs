//! フォームラベル抽出
//!
//! HTML断片や貼り付けられたフォーム文面から、入力項目のラベル候補を抽出する。
//!
//! 抽出ルール（この順で適用）:
//! 1. `:` または `*` で終わる語の並び（`Full Name:` など）
//! 2. `label="..."` 属性
//! 3. `placeholder="..."` 属性
//! 4. `<label>...</label>` タグの中身

use regex::Regex;
use std::collections::HashSet;

/// ラベル候補の最短長（これより長いもののみ採用）
const MIN_LABEL_LEN: usize = 2;
/// ラベル候補の最長長（これより短いもののみ採用）
const MAX_LABEL_LEN: usize = 50;

lazy_static::lazy_static! {
    static ref PROMPT_RE: Regex = Regex::new(r"(\w+(?:\s+\w+)*)\s*[:*]").unwrap();
    static ref LABEL_ATTR_RE: Regex = Regex::new(r#"(?i)label\s*=\s*["']([^"']+)["']"#).unwrap();
    static ref PLACEHOLDER_ATTR_RE: Regex =
        Regex::new(r#"(?i)placeholder\s*=\s*["']([^"']+)["']"#).unwrap();
    static ref LABEL_TAG_RE: Regex = Regex::new(r"(?i)<label[^>]*>([^<]+)</label>").unwrap();
}

/// 抽出ルール
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRule {
    /// `Full Name:` / `Email *`
    Prompt,
    /// `label="..."`
    LabelAttribute,
    /// `placeholder="..."`
    PlaceholderAttribute,
    /// `<label>...</label>`
    LabelTag,
}

impl LabelRule {
    /// 既定の適用順
    pub const ALL: [LabelRule; 4] = [
        LabelRule::Prompt,
        LabelRule::LabelAttribute,
        LabelRule::PlaceholderAttribute,
        LabelRule::LabelTag,
    ];

    fn regex(self) -> &'static Regex {
        match self {
            LabelRule::Prompt => &PROMPT_RE,
            LabelRule::LabelAttribute => &LABEL_ATTR_RE,
            LabelRule::PlaceholderAttribute => &PLACEHOLDER_ATTR_RE,
            LabelRule::LabelTag => &LABEL_TAG_RE,
        }
    }

    /// テキストからこのルールの生キャプチャを左から順に返す
    pub fn captures<'t>(self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        self.regex()
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// キャプチャを正規化（前後空白除去 + 小文字化）
///
/// 長さが範囲外なら `None`
fn normalize_candidate(raw: &str) -> Option<String> {
    let field = raw.trim().to_lowercase();
    let len = field.chars().count();
    if len > MIN_LABEL_LEN && len < MAX_LABEL_LEN {
        Some(field)
    } else {
        None
    }
}

/// 全ルールでラベル候補を抽出
///
/// 重複は除去され、最初に現れた順（ルール順 → 左から右）で並ぶ。
/// 不正なマークアップでも失敗せず、候補が減るだけ。
///
/// # Examples
/// ```
/// use autofill_common::extract_labels;
///
/// let labels = extract_labels(r#"Email: <input placeholder="Phone Number">"#);
/// assert_eq!(labels, vec!["email", "phone number"]);
/// ```
pub fn extract_labels(text: &str) -> Vec<String> {
    extract_labels_with_rules(text, &LabelRule::ALL)
}

/// 指定したルールのみでラベル候補を抽出
///
/// `rules` の並びがそのまま走査順になる。
pub fn extract_labels_with_rules(text: &str, rules: &[LabelRule]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut labels = Vec::new();

    for rule in rules {
        for raw in rule.captures(text) {
            let Some(field) = normalize_candidate(raw) else {
                tracing::trace!(?rule, raw, "ラベル候補を長さで除外");
                continue;
            };
            if seen.insert(field.clone()) {
                labels.push(field);
            }
        }
    }

    tracing::debug!(count = labels.len(), "ラベル抽出完了");
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colon_and_placeholder_order() {
        let labels = extract_labels(r#"Email: <input placeholder="Phone Number">"#);
        assert_eq!(labels, vec!["email", "phone number"]);
    }

    #[test]
    fn test_prompt_rule_with_asterisk() {
        let labels = extract_labels("Full Name *\nGraduation Year:");
        assert_eq!(labels, vec!["full name", "graduation year"]);
    }

    #[test]
    fn test_prompt_rule_spans_newline() {
        // 改行も \s に含まれるため1つのラベルになる
        let labels = extract_labels("Full Name\nEmail:");
        assert_eq!(labels, vec!["full name\nemail"]);
    }

    #[test]
    fn test_label_attribute_case_insensitive() {
        let labels = extract_labels(r#"<input LABEL='GitHub Profile'> <input aria-label="LinkedIn URL">"#);
        assert_eq!(labels, vec!["github profile", "linkedin url"]);
    }

    #[test]
    fn test_label_tag() {
        let html = r#"<LABEL for="c">  College  </LABEL><label>Degree</label>"#;
        let labels = extract_labels(html);
        assert_eq!(labels, vec!["college", "degree"]);
    }

    #[test]
    fn test_length_bounds() {
        // 2文字以下と50文字以上は除外
        let long = "a".repeat(50);
        let just_under = "b".repeat(49);
        let text = format!("ab: abc: {}: {}:", long, just_under);
        let labels = extract_labels(&text);
        assert_eq!(labels, vec!["abc".to_string(), just_under]);
    }

    #[test]
    fn test_deduplicates_across_rules() {
        let html = r#"Email: <input placeholder="email"><label>EMAIL</label>"#;
        assert_eq!(extract_labels(html), vec!["email"]);
    }

    #[test]
    fn test_rule_order_over_page_order() {
        // placeholder は label タグより先に走査される
        let html = r#"<label>Phone</label><input placeholder="Email Address">"#;
        assert_eq!(extract_labels(html), vec!["email address", "phone"]);
    }

    #[test]
    fn test_empty_and_malformed_input() {
        assert!(extract_labels("").is_empty());
        assert!(extract_labels("<label>unterminated <input placeholder=\"x").is_empty());
    }

    #[test]
    fn test_restricted_rules() {
        let html = r#"Email: <input placeholder="Phone Number">"#;
        let labels = extract_labels_with_rules(html, &[LabelRule::PlaceholderAttribute]);
        assert_eq!(labels, vec!["phone number"]);
    }

    #[test]
    fn test_captures_are_raw() {
        let caps: Vec<&str> = LabelRule::LabelTag.captures("<label> Year </label>").collect();
        assert_eq!(caps, vec![" Year "]);
    }
}
