use crate::error::{AutofillError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct FormFile {
    pub path: PathBuf,
    pub file_name: String,
}

const FORM_EXTENSIONS: &[&str] = &["html", "htm", "txt"];

/// Check if a file extension is a supported form format
fn is_form_extension(ext: &str) -> bool {
    let ext = ext.to_lowercase();
    FORM_EXTENSIONS.contains(&ext.as_str())
}

pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<FormFile>> {
    if !folder.is_dir() {
        return Err(AutofillError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut forms = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Some(ext) = path.extension() else {
            continue;
        };
        if !is_form_extension(&ext.to_string_lossy()) {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        forms.push(FormFile {
            path: path.to_path_buf(),
            file_name,
        });
    }

    // ファイル名でソート
    forms.sort_by(|a, b| a.file_name.cmp(&b.file_name).then_with(|| a.path.cmp(&b.path)));
    tracing::debug!(folder = %folder.display(), count = forms.len(), "フォームをスキャン");

    Ok(forms)
}
