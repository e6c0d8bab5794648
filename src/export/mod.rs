use crate::cli::ExportFormat;
use crate::error::{AutofillError, Result};
use autofill_common::{generate_csv, generate_json, FormField};
use std::path::{Path, PathBuf};

fn output_path_for_format(output: &Path, stem: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", stem, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path, stem: &str) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        (
            output.join(format!("{}.json", stem)),
            output.join(format!("{}.csv", stem)),
        )
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(stem);
        (
            parent.join(format!("{}.json", stem)),
            parent.join(format!("{}.csv", stem)),
        )
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), "出力");
    Ok(())
}

/// 照合結果を標準出力向けの文字列にする
pub fn render(fields: &[FormField], format: &ExportFormat) -> Result<String> {
    let rendered = match format {
        ExportFormat::Json => generate_json(fields)?,
        ExportFormat::Csv => generate_csv(fields),
        ExportFormat::Both => format!("{}\n\n{}", generate_json(fields)?, generate_csv(fields)),
        ExportFormat::Table => render_table(fields),
    };
    Ok(rendered)
}

/// 端末表示用の表
pub fn render_table(fields: &[FormField]) -> String {
    let width = fields
        .iter()
        .map(|f| f.label.chars().count())
        .max()
        .unwrap_or(0)
        .max("Field".len());

    let mut lines = vec![format!("{:<width$}  {}", "Field", "Value", width = width)];
    for field in fields {
        let (mark, value) = if field.matched {
            ("✔", field.value.as_str())
        } else {
            ("✘", "-")
        };
        lines.push(format!(
            "{:<width$}  {} {}",
            field.label,
            mark,
            value,
            width = width
        ));
    }
    lines.join("\n")
}

/// 照合結果をファイルへ出力し、書き出したパスを返す
pub fn export_results(
    fields: &[FormField],
    format: &ExportFormat,
    output: &Path,
    stem: &str,
) -> Result<Vec<PathBuf>> {
    let written = match format {
        ExportFormat::Json => {
            let path = output_path_for_format(output, stem, "json");
            write_file(&path, &generate_json(fields)?)?;
            vec![path]
        }
        ExportFormat::Csv => {
            let path = output_path_for_format(output, stem, "csv");
            write_file(&path, &generate_csv(fields))?;
            vec![path]
        }
        ExportFormat::Both => {
            let (json_path, csv_path) = output_paths_for_both(output, stem);
            write_file(&json_path, &generate_json(fields)?)?;
            write_file(&csv_path, &generate_csv(fields))?;
            vec![json_path, csv_path]
        }
        ExportFormat::Table => {
            return Err(AutofillError::Export(
                "table形式はファイル出力できません (json/csv/both)".into(),
            ));
        }
    };

    Ok(written)
}
