use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutofillError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("プロフィールが指定されていません。`autofill config --set-profile PATH` か AUTOFILL_PROFILE で設定してください")]
    MissingProfile,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("プロフィールが不正: {0}")]
    InvalidProfile(String),

    #[error("不明なプリセット: {0}")]
    UnknownPreset(String),

    #[error("フォームファイルが見つかりません: {0}")]
    NoFormsFound(String),

    #[error("出力エラー: {0}")]
    Export(String),

    #[error("{failed}/{total}件のフォームを処理できませんでした")]
    BatchFailed { failed: usize, total: usize },

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] autofill_common::Error),
}

pub type Result<T> = std::result::Result<T, AutofillError>;
