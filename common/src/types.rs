//! プロフィールと照合結果の型定義
//!
//! - Profile: 照合の入力となる個人・職歴データ
//! - FormField: ラベルごとの照合結果

use serde::{Deserialize, Serialize};

/// プロジェクト
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech_stack: String,
    pub link: String,
}

/// 職歴
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}

/// プロフィール
///
/// 欠けているフィールドは空文字列・空リストとして読み込む。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub github: String,
    pub linkedin: String,
    pub college: String,
    pub degree: String,
    pub branch: String,
    pub year: String,
    pub projects: Vec<Project>,
    pub achievements: Vec<String>,
    pub work_experience: Vec<WorkExperience>,

    /// 作成日時（照合には使わない）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    /// 更新日時（照合には使わない）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Profile {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let profile: Self = serde_json::from_str(json)?;
        Ok(profile)
    }
}

/// ラベル1件の照合結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// 抽出されたラベル（入力のまま）
    pub label: String,
    /// 照合された値（見つからなければ空）
    pub value: String,
    /// 値が見つかったか
    pub matched: bool,
}

impl FormField {
    /// 値から照合結果を作る（空なら未照合）
    pub fn new(label: impl Into<String>, value: String) -> Self {
        let matched = !value.is_empty();
        Self {
            label: label.into(),
            value,
            matched,
        }
    }

    /// 未照合の結果
    pub fn unmatched(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            matched: false,
        }
    }
}
