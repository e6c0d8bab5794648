//! キーワード → プロフィール値 の対応表
//!
//! 宣言順が部分一致照合の優先順位になるため、並びを変えないこと。

use crate::types::{Profile, WorkExperience};
use std::collections::HashMap;

/// プロフィールから表示値を取り出す関数
pub type Mapper = fn(&Profile) -> String;

/// 対応表の1エントリ
#[derive(Clone, Copy)]
pub struct FieldMapping {
    /// 正規化済みキーワード（小文字）
    pub key: &'static str,
    pub mapper: Mapper,
}

impl FieldMapping {
    const fn new(key: &'static str, mapper: Mapper) -> Self {
        Self { key, mapper }
    }

    /// プロフィールに適用
    pub fn apply(&self, profile: &Profile) -> String {
        (self.mapper)(profile)
    }
}

impl std::fmt::Debug for FieldMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldMapping").field("key", &self.key).finish()
    }
}

fn name(p: &Profile) -> String {
    p.name.clone()
}

fn first_name(p: &Profile) -> String {
    p.name
        .split_once(' ')
        .map(|(first, _)| first.to_string())
        .unwrap_or_default()
}

fn last_name(p: &Profile) -> String {
    p.name
        .split_once(' ')
        .map(|(_, rest)| rest.to_string())
        .unwrap_or_default()
}

fn email(p: &Profile) -> String {
    p.email.clone()
}

fn phone(p: &Profile) -> String {
    p.phone.clone()
}

fn github(p: &Profile) -> String {
    p.github.clone()
}

fn linkedin(p: &Profile) -> String {
    p.linkedin.clone()
}

fn college(p: &Profile) -> String {
    p.college.clone()
}

fn degree(p: &Profile) -> String {
    p.degree.clone()
}

fn branch(p: &Profile) -> String {
    p.branch.clone()
}

fn year(p: &Profile) -> String {
    p.year.clone()
}

fn experience(p: &Profile) -> String {
    p.work_experience
        .iter()
        .map(|w| format!("{} at {}", w.position, w.company))
        .collect::<Vec<_>>()
        .join(", ")
}

fn latest_work(p: &Profile) -> Option<&WorkExperience> {
    p.work_experience.first()
}

fn previous_company(p: &Profile) -> String {
    latest_work(p).map(|w| w.company.clone()).unwrap_or_default()
}

fn current_position(p: &Profile) -> String {
    latest_work(p).map(|w| w.position.clone()).unwrap_or_default()
}

fn projects(p: &Profile) -> String {
    p.projects
        .iter()
        .map(|proj| proj.title.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn achievements(p: &Profile) -> String {
    p.achievements.join(", ")
}

fn skills(p: &Profile) -> String {
    p.projects
        .iter()
        .map(|proj| proj.tech_stack.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// 対応表（宣言順）
pub static FIELD_MAPPINGS: &[FieldMapping] = &[
    // 氏名
    FieldMapping::new("name", name),
    FieldMapping::new("full name", name),
    FieldMapping::new("fullname", name),
    FieldMapping::new("first name", first_name),
    FieldMapping::new("last name", last_name),
    FieldMapping::new("firstname", first_name),
    FieldMapping::new("lastname", last_name),
    // 連絡先
    FieldMapping::new("email", email),
    FieldMapping::new("email address", email),
    FieldMapping::new("phone", phone),
    FieldMapping::new("phone number", phone),
    FieldMapping::new("mobile", phone),
    FieldMapping::new("contact", phone),
    // SNS
    FieldMapping::new("github", github),
    FieldMapping::new("github profile", github),
    FieldMapping::new("github url", github),
    FieldMapping::new("linkedin", linkedin),
    FieldMapping::new("linkedin profile", linkedin),
    FieldMapping::new("linkedin url", linkedin),
    // 学歴
    FieldMapping::new("college", college),
    FieldMapping::new("university", college),
    FieldMapping::new("school", college),
    FieldMapping::new("institution", college),
    FieldMapping::new("degree", degree),
    FieldMapping::new("qualification", degree),
    FieldMapping::new("branch", branch),
    FieldMapping::new("major", branch),
    FieldMapping::new("specialization", branch),
    FieldMapping::new("field of study", branch),
    FieldMapping::new("year", year),
    FieldMapping::new("graduation year", year),
    FieldMapping::new("passing year", year),
    // 職歴
    FieldMapping::new("experience", experience),
    FieldMapping::new("work experience", experience),
    FieldMapping::new("previous company", previous_company),
    FieldMapping::new("current position", current_position),
    // プロジェクト・実績
    FieldMapping::new("projects", projects),
    FieldMapping::new("achievements", achievements),
    FieldMapping::new("skills", skills),
    FieldMapping::new("technologies", skills),
];

lazy_static::lazy_static! {
    static ref KEY_INDEX: HashMap<&'static str, usize> = FIELD_MAPPINGS
        .iter()
        .enumerate()
        .map(|(i, m)| (m.key, i))
        .collect();
}

/// キーワードの完全一致で対応表を引く
pub fn lookup(key: &str) -> Option<&'static FieldMapping> {
    KEY_INDEX.get(key).map(|&i| &FIELD_MAPPINGS[i])
}

/// 対応表のキー一覧（宣言順）
pub fn keys() -> impl Iterator<Item = &'static str> {
    FIELD_MAPPINGS.iter().map(|m| m.key)
}
