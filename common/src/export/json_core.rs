//! JSON出力（共通ライブラリ）
//!
//! 照合できた項目のみを `ラベル → 値` のオブジェクトとして出力する。

use crate::error::Result;
use crate::types::FormField;
use serde_json::{Map, Value};

/// 照合結果をJSONオブジェクト文字列に変換
///
/// - 未照合・空値の項目は出力しない
/// - キーは最初に現れた順（同じラベルは後の値で上書き）
/// - インデントは2スペース
pub fn generate_json(fields: &[FormField]) -> Result<String> {
    let mut object = Map::new();
    for field in fields.iter().filter(|f| f.matched && !f.value.is_empty()) {
        object.insert(field.label.clone(), Value::String(field.value.clone()));
    }
    Ok(serde_json::to_string_pretty(&Value::Object(object))?)
}
