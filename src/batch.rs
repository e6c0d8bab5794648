//! 複数フォームの一括照合
//!
//! フォームごとの照合は独立しているため rayon で並列に処理する。

use crate::cli::ExportFormat;
use crate::error::Result;
use crate::export;
use crate::scanner::FormFile;
use autofill_common::{extract_labels, summarize, FieldMatcher, FormField, MatchSummary, Profile};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// フォーム1件の処理結果
#[derive(Debug, Clone)]
pub struct FormReport {
    pub path: PathBuf,
    pub file_name: String,
    pub fields: Vec<FormField>,
    pub summary: MatchSummary,
    /// 読み込みに失敗した場合のエラーメッセージ
    pub error: Option<String>,
}

impl FormReport {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// フォームテキストを照合
pub fn process_text(profile: &Profile, text: &str, matcher: &FieldMatcher) -> Vec<FormField> {
    let labels = extract_labels(text);
    matcher.match_fields(profile, &labels)
}

fn process_form(profile: &Profile, form: &FormFile, matcher: &FieldMatcher) -> FormReport {
    match std::fs::read_to_string(&form.path) {
        Ok(text) => {
            let fields = process_text(profile, &text, matcher);
            let summary = summarize(&fields);
            tracing::debug!(
                file = %form.file_name,
                total = summary.total,
                matched = summary.matched,
                "フォーム照合完了"
            );
            FormReport {
                path: form.path.clone(),
                file_name: form.file_name.clone(),
                fields,
                summary,
                error: None,
            }
        }
        Err(e) => {
            tracing::warn!(file = %form.file_name, error = %e, "フォーム読み込み失敗");
            FormReport {
                path: form.path.clone(),
                file_name: form.file_name.clone(),
                fields: Vec::new(),
                summary: MatchSummary::default(),
                error: Some(e.to_string()),
            }
        }
    }
}

/// 複数フォームを並列に照合（入力と同じ順で返す）
pub fn process_forms(
    profile: &Profile,
    forms: &[FormFile],
    matcher: &FieldMatcher,
    show_progress: bool,
) -> Vec<FormReport> {
    let progress = if show_progress {
        let pb = ProgressBar::new(forms.len() as u64);
        if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}") {
            pb.set_style(style);
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let reports: Vec<FormReport> = forms
        .par_iter()
        .map(|form| {
            let report = process_form(profile, form, matcher);
            progress.inc(1);
            report
        })
        .collect();

    progress.finish_and_clear();
    reports
}

/// 出力先ディレクトリとファイル名の元を決める
///
/// 入力フォルダからの相対パスを出力先にも再現し、拡張子を含むファイル名を
/// そのまま使う（`a/apply.html` → `<output>/a/apply.html.json`）。
fn output_location(report: &FormReport, folder: &Path, output_dir: &Path) -> (PathBuf, String) {
    let dir = match report.path.strip_prefix(folder).ok().and_then(Path::parent) {
        Some(parent) if parent.as_os_str().is_empty() => output_dir.to_path_buf(),
        Some(parent) => output_dir.join(parent),
        None => output_dir.to_path_buf(),
    };
    (dir, report.file_name.clone())
}

/// 成功したフォームの照合結果をファイルへ出力し、書き出したパスを返す
///
/// 読み込みに失敗したフォームは飛ばす。
pub fn export_reports(
    reports: &[FormReport],
    format: &ExportFormat,
    folder: &Path,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for report in reports.iter().filter(|r| r.is_ok()) {
        let (dir, stem) = output_location(report, folder, output_dir);
        // 拡張子付きの名前でもディレクトリとして扱われるよう先に作成する
        std::fs::create_dir_all(&dir)?;
        written.extend(export::export_results(&report.fields, format, &dir, &stem)?);
    }

    Ok(written)
}
