//! CSV出力（共通ライブラリ）
//!
//! 列: Field, Value, Status
//!
//! 各セルを `"` で囲むのみで、値中の `"` や `,` はエスケープしない。
//! そのような値を含む行は厳密なCSVリーダーでは壊れた行になる。

use crate::types::FormField;

const HEADERS: [&str; 3] = ["Field", "Value", "Status"];
const NOT_FOUND: &str = "Not Found";
const STATUS_MATCHED: &str = "Matched";
const STATUS_NO_MATCH: &str = "No Match";

fn quote_row(cells: &[&str]) -> String {
    cells
        .iter()
        .map(|cell| format!("\"{}\"", cell))
        .collect::<Vec<_>>()
        .join(",")
}

/// 照合結果1件をCSV行に変換
pub fn csv_row(field: &FormField) -> String {
    let value = if field.value.is_empty() {
        NOT_FOUND
    } else {
        field.value.as_str()
    };
    let status = if field.matched {
        STATUS_MATCHED
    } else {
        STATUS_NO_MATCH
    };
    quote_row(&[field.label.as_str(), value, status])
}

/// 照合結果をCSV文字列に変換（入力順、末尾改行なし）
pub fn generate_csv(fields: &[FormField]) -> String {
    std::iter::once(quote_row(&HEADERS))
        .chain(fields.iter().map(csv_row))
        .collect::<Vec<_>>()
        .join("\n")
}
