use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use inspection_report::{cli, config, export, review, session};
use inspection_report_common::{location_label, parse_filename, report_file_name};
use cli::{Cli, Commands};
use config::Config;
use export::docx::ReportTemplate;
use review::ReviewOutcome;
use session::Session;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::default_bar().template("{bar:40.cyan/blue} {pos}/{len} {msg}") {
        pb.set_style(style);
    }
    pb
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    // config サブコマンドは壊れた設定ファイルを直すためにも使うので失敗させない
    let config = match cli.command {
        Commands::Config { .. } => Config::load_or_default(),
        _ => Config::load()?,
    };

    match cli.command {
        Commands::Run { archive, output, policy, review, title, image_width, table_out } => {
            println!("📝 inspection-report - 点検記録生成\n");

            // フラグで上書きした設定で検証
            let run_config = Config {
                parse_policy: policy.unwrap_or(config.parse_policy),
                report_title: title.unwrap_or_else(|| config.report_title.clone()),
                image_width_inches: image_width.unwrap_or(config.image_width_inches),
                output_name: config.output_name.clone(),
            };
            run_config.validate()?;
            let policy = run_config.parse_policy;
            let template = ReportTemplate::new(run_config.report_title, run_config.image_width_inches);

            // 1. 展開・解析
            println!("[1/3] ZIPを展開中... (解析ルール: {})", policy);
            let mut session = Session::open(&archive, policy)?;
            println!("✔ {}枚の写真を検出\n", session.table().len());

            // 2. レビュー
            if review {
                println!("[2/3] レビュー");
                if review::run_interactive_review(&mut session)? == ReviewOutcome::Abort {
                    println!("中止しました");
                    return Ok(());
                }
            } else {
                println!("[2/3] レビューをスキップ（--review で編集可能）");
            }

            if let Some(path) = table_out {
                std::fs::write(&path, session.table().to_json_pretty()?)
                    .with_context(|| format!("write {}", path.display()))?;
                println!("✔ 表を保存: {}", path.display());
            }

            // 3. 生成
            let groups = session.groups();
            println!("\n[3/3] {}件の住戸について点検記録を生成中...", groups.len());
            let pb = progress_bar(groups.len());
            let outcome = session.generate(&template, |done, _total| pb.set_position(done as u64))?;
            pb.finish_and_clear();

            for warning in &outcome.warnings {
                eprintln!("⚠ [{}] {}", warning.group, warning);
            }
            for failure in &outcome.failures {
                eprintln!("✖ {} の生成に失敗: {}", failure.group, failure.reason);
            }
            println!("✔ {}件を生成", outcome.written.len());

            println!("- ZIPにまとめています...");
            let bytes = session.package()?;
            let output = output.unwrap_or_else(|| PathBuf::from(&config.output_name));
            std::fs::write(&output, bytes).with_context(|| format!("write {}", output.display()))?;
            println!("✔ 出力: {}", output.display());

            println!("\n✅ 完了");
        }

        Commands::Parse { filenames, policy, json } => {
            let policy = policy.unwrap_or(config.parse_policy);
            let parsed: Vec<_> = filenames
                .iter()
                .map(|name| (name, parse_filename(name, policy)))
                .collect();

            if json {
                let rows: Vec<serde_json::Value> = parsed
                    .iter()
                    .map(|(name, fields)| {
                        serde_json::json!({ "filename": name, "fields": fields })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for (name, f) in &parsed {
                    println!("{}", name);
                    println!("  Project:   {}", f.project);
                    println!("  Flat:      {}", location_label(&f.tower, &f.flat));
                    println!("  Inspector: {}", f.inspector);
                    println!("  Date:      {}", f.date);
                    println!("  → {}", report_file_name(f.project.trim(), f.tower.trim(), f.flat.trim()));
                }
            }
        }

        Commands::Template { output, title } => {
            let template = ReportTemplate::new(
                title.unwrap_or_else(|| config.report_title.clone()),
                config.image_width_inches,
            );
            template.save_blank(&output)?;
            println!("✔ テンプレートを出力: {}", output.display());
        }

        Commands::Config { set_policy, show } => {
            let mut config = config;

            if let Some(policy) = set_policy {
                config.set_parse_policy(policy)?;
                println!("✔ 解析ルールを設定しました: {}", policy);
            }

            if show || set_policy.is_none() {
                println!("設定:");
                println!("  解析ルール: {}", config.parse_policy);
                println!("  タイトル: {}", config.report_title);
                println!("  写真幅: {}inch", config.image_width_inches);
                println!("  出力ファイル名: {}", config.output_name);
                if let Ok(path) = Config::config_path() {
                    println!("  設定ファイル: {}", path.display());
                }
            }
        }
    }

    Ok(())
}
