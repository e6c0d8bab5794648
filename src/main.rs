use autofill_common::{extract_labels, summarize};
use autofill_rust::{batch, cli, config, error, export, logging, profile, scanner};
use clap::Parser;
use cli::{Cli, Commands, ExportFormat};
use config::Config;
use error::Result;
use std::io::IsTerminal;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Extract { input } => {
            let text = profile::read_form_text(&input)?;
            for label in extract_labels(&text) {
                println!("{}", label);
            }
        }

        Commands::Match { input, profile: profile_path, format, output, preset, alias, fuzzy_on_empty } => {
            let profile_path = config.resolve_profile_path(profile_path)?;
            let profile = profile::load_profile(&profile_path)?;
            let matcher = config.build_matcher(preset.as_deref(), alias.as_deref(), fuzzy_on_empty)?;

            let text = profile::read_form_text(&input)?;
            let fields = batch::process_text(&profile, &text, &matcher);
            let summary = summarize(&fields);
            tracing::info!(total = summary.total, matched = summary.matched, "照合完了");

            let format = match format {
                Some(format) => format,
                None => config.default_format.parse().map_err(error::AutofillError::Config)?,
            };

            match output {
                Some(output) => {
                    let stem = input
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .filter(|s| *s != "-")
                        .unwrap_or("autofill");
                    for path in export::export_results(&fields, &format, &output, stem)? {
                        println!("✔ 出力: {}", path.display());
                    }
                }
                None => println!("{}", export::render(&fields, &format)?),
            }
        }

        Commands::Batch { folder, profile: profile_path, output, format, recursive, preset, alias } => {
            if format == ExportFormat::Table {
                return Err(error::AutofillError::Export("batch は json/csv/both のみ対応".into()));
            }

            let profile_path = config.resolve_profile_path(profile_path)?;
            let profile = profile::load_profile(&profile_path)?;
            let matcher = config.build_matcher(preset.as_deref(), alias.as_deref(), false)?;

            println!("[1/3] フォームをスキャン中...");
            let forms = scanner::scan_folder(&folder, recursive)?;
            if forms.is_empty() {
                return Err(error::AutofillError::NoFormsFound(folder.display().to_string()));
            }
            println!("✔ {}件のフォームを検出\n", forms.len());

            println!("[2/3] 照合中...");
            let reports = batch::process_forms(&profile, &forms, &matcher, std::io::stderr().is_terminal());
            println!("✔ 照合完了\n");

            println!("[3/3] 出力中...");
            let output_dir = output.unwrap_or_else(|| folder.clone());
            batch::export_reports(&reports, &format, &folder, &output_dir)?;

            let mut failed = 0;
            for report in &reports {
                match &report.error {
                    Some(err) => {
                        failed += 1;
                        println!("✘ {}: {}", report.path.display(), err);
                    }
                    None => println!(
                        "✔ {}: {}/{} 項目を照合",
                        report.path.display(),
                        report.summary.matched,
                        report.summary.total
                    ),
                }
            }

            if failed > 0 {
                return Err(error::AutofillError::BatchFailed {
                    failed,
                    total: reports.len(),
                });
            }
            println!("\n✅ 完了 ({}件)", reports.len());
        }

        Commands::Config { set_profile, set_preset, show } => {
            let mut config = config;

            if let Some(path) = set_profile {
                config.set_profile_path(path)?;
                println!("✔ プロフィールを設定しました");
            }

            if let Some(preset) = set_preset {
                config.set_preset(preset)?;
                println!("✔ プリセットを設定しました");
            }

            if show {
                println!("設定:");
                println!(
                    "  プロフィール: {}",
                    config.profile_path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "未設定".into())
                );
                println!("  プリセット: {}", config.preset.as_deref().unwrap_or("なし"));
                println!(
                    "  エイリアス: {}",
                    config.alias_path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "なし".into())
                );
                println!("  出力形式: {}", config.default_format);
                println!("  空値時の部分一致: {}", if config.fuzzy_on_empty_exact { "有効" } else { "無効" });
            }
        }
    }

    Ok(())
}
