use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "autofill")]
#[command(about = "フォーム項目をプロフィールと照合するオートフィルツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// フォームからラベル候補を抽出して表示
    Extract {
        /// フォームファイル（`-` で標準入力）
        #[arg(required = true)]
        input: PathBuf,
    },

    /// フォームのラベルをプロフィールと照合
    Match {
        /// フォームファイル（`-` で標準入力）
        #[arg(required = true)]
        input: PathBuf,

        /// プロフィールJSON（省略時は AUTOFILL_PROFILE / 設定ファイル）
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// 出力形式 (json/csv/both/table)
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// 出力ファイル/ディレクトリ（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// エイリアスプリセット (web/academic)
        #[arg(long)]
        preset: Option<String>,

        /// カスタムエイリアスファイル（JSON）
        #[arg(long)]
        alias: Option<PathBuf>,

        /// 完全一致の値が空でも部分一致を試す
        #[arg(long)]
        fuzzy_on_empty: bool,
    },

    /// フォルダ内のフォームを一括照合
    Batch {
        /// フォームフォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// プロフィールJSON
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// 出力ディレクトリ（デフォルト: 入力フォルダ）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (json/csv/both)
        #[arg(short, long, default_value = "both")]
        format: ExportFormat,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,

        /// エイリアスプリセット (web/academic)
        #[arg(long)]
        preset: Option<String>,

        /// カスタムエイリアスファイル（JSON）
        #[arg(long)]
        alias: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定のプロフィールJSONを設定
        #[arg(long)]
        set_profile: Option<PathBuf>,

        /// 既定のエイリアスプリセットを設定
        #[arg(long)]
        set_preset: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Both,
    #[default]
    Table,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "both" => Ok(ExportFormat::Both),
            "table" | "text" => Ok(ExportFormat::Table),
            _ => Err(format!("Unknown format: {}. Use json, csv, both, or table", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Both => write!(f, "both"),
            ExportFormat::Table => write!(f, "table"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("JSON".parse::<ExportFormat>(), Ok(ExportFormat::Json));
        assert_eq!("csv".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!("text".parse::<ExportFormat>(), Ok(ExportFormat::Table));
        assert!("xlsx".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_cli_parses_match() {
        let cli = Cli::try_parse_from([
            "autofill", "match", "form.html", "-p", "me.json", "-f", "csv", "--preset", "web",
        ])
        .unwrap();
        match cli.command {
            Commands::Match { input, profile, format, preset, .. } => {
                assert_eq!(input, PathBuf::from("form.html"));
                assert_eq!(profile, Some(PathBuf::from("me.json")));
                assert_eq!(format, Some(ExportFormat::Csv));
                assert_eq!(preset.as_deref(), Some("web"));
            }
            _ => panic!("match サブコマンドとして解析されていない"),
        }
    }
}
