//! Autofill Common Library
//!
//! フォームラベル抽出・プロフィール照合・JSON/CSV出力のエンジン部分

pub mod types;
pub mod alias;
pub mod error;
pub mod export;
pub mod mapping;
pub mod matcher;
pub mod parser;

pub use types::{FormField, Profile, Project, WorkExperience};
pub use alias::{AliasConfig, build_aliases};
pub use error::{Error, Result};
pub use export::{generate_csv, generate_json};
pub use mapping::{FieldMapping, FIELD_MAPPINGS};
pub use matcher::{match_fields, summarize, FieldMatcher, MatchOptions, MatchSummary};
pub use parser::{extract_labels, extract_labels_with_rules, LabelRule};
