//! プロフィール・フォーム入力の読み込み

use crate::error::{AutofillError, Result};
use autofill_common::Profile;
use std::io::Read;
use std::path::Path;

/// プロフィールJSONを読み込む
pub fn load_profile(path: &Path) -> Result<Profile> {
    if !path.exists() {
        return Err(AutofillError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&content)
        .map_err(|e| AutofillError::InvalidProfile(format!("{}: {}", path.display(), e)))?;
    tracing::debug!(path = %path.display(), "プロフィールを読み込み");
    Ok(profile)
}

/// フォームテキストを読み込む（`-` は標準入力）
pub fn read_form_text(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    if !input.exists() {
        return Err(AutofillError::FileNotFound(input.display().to_string()));
    }
    Ok(std::fs::read_to_string(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_profile() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, r#"{"name": "Alice Example", "workExperience": []}"#).unwrap();

        let profile = load_profile(&path).unwrap();
        assert_eq!(profile.name, "Alice Example");
    }

    #[test]
    fn test_load_profile_missing() {
        let err = load_profile(Path::new("/nonexistent/profile.json")).unwrap_err();
        assert!(matches!(err, AutofillError::FileNotFound(_)));
    }

    #[test]
    fn test_load_profile_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, r#"{"name": 42}"#).unwrap();

        let err = load_profile(&path).unwrap_err();
        assert!(matches!(err, AutofillError::InvalidProfile(_)));
    }
}
