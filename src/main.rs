use anyhow::Context;
use clap::Parser;
use company_matcher::{catalog, cli, config, export, lookup, matcher, normalizer};
use company_matcher_common::{MatchQuery, MatchResult};
use cli::{CatalogAction, Cli, Commands};
use config::Config;
use indicatif::{ProgressBar, ProgressStyle};
use matcher::{Matcher, TopK};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load().context("設定ファイルの読み込みに失敗しました")?;

    match cli.command {
        Commands::Match { input, output, topk, catalog: catalog_flag, format } => {
            println!("🏢 company-matcher - 一括照合\n");
            let top_k = config.resolve_top_k(topk)?;

            // 1. カタログ読み込み
            println!("[1/3] カタログを読み込み中...");
            let catalog = load_configured_catalog(&config, catalog_flag.as_deref())?;
            println!(
                "✔ {}件の別名 / {}件の正式名称\n",
                catalog.len(),
                catalog.canonical_name_count()
            );

            // 2. 照合
            println!("[2/3] 照合中... (topk={})", top_k);
            let content = std::fs::read_to_string(&input)
                .with_context(|| format!("入力ファイルを読み込めません: {}", input.display()))?;
            let queries: Vec<MatchQuery> = serde_json::from_str(&content)
                .with_context(|| format!("入力JSONが不正です: {}", input.display()))?;

            let matcher = Matcher::new(Arc::new(catalog));
            let started = std::time::Instant::now();
            let results = match_with_progress(&matcher, &queries, top_k, config.chunk_size());
            let not_found = results.iter().filter(|r| r.is_not_found()).count();
            tracing::info!(
                queries = results.len(),
                not_found,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Batch complete"
            );
            println!("✔ {}件を照合（候補なし {}件）\n", results.len(), not_found);

            // 3. 結果保存
            println!("[3/3] 結果を保存中...");
            let output = output.unwrap_or_else(|| export::default_output_path(&input));
            export::export_results(&results, &format, &output, top_k.get())?;

            println!("\n✅ 照合完了");
        }

        Commands::Lookup { topk, catalog: catalog_flag } => {
            println!("🔎 company-matcher - 対話照合\n");
            let top_k = config.resolve_top_k(topk)?;
            let catalog = load_configured_catalog(&config, catalog_flag.as_deref())?;
            println!("✔ カタログ: {}件\n", catalog.len());

            let matcher = Matcher::new(Arc::new(catalog));
            lookup::run_interactive_lookup(&matcher, top_k)?;
        }

        Commands::Normalize { names } => {
            for name in &names {
                let key = normalizer::normalize(name);
                let tokens: Vec<&str> = normalizer::tokens(&key).collect();
                println!("{:?} → {:?}  (トークン: {})", name, key, tokens.join(" | "));
            }
        }

        Commands::Catalog { action } => match action {
            CatalogAction::Info { catalog: catalog_flag } => {
                let catalog_path = resolve_catalog_path(&config, catalog_flag.as_deref())?;
                let catalog = catalog::load_catalog(&catalog_path, config.excel_sheet.as_deref())?;

                println!("カタログ情報:");
                println!("  パス: {}", catalog_path.display());
                println!("  別名: {}件", catalog.len());
                println!("  正式名称: {}件", catalog.canonical_name_count());
                println!("  照合キー: {}件", catalog.indexed_key_count());
                println!("  フィンガープリント: {}", catalog.fingerprint());
            }
            CatalogAction::List { dir } => {
                let dir = dir.unwrap_or_else(|| PathBuf::from(catalog::selector::DEFAULT_CATALOG_DIR));
                let catalogs = catalog::list_available_catalogs(&dir);

                if catalogs.is_empty() {
                    println!("カタログファイルが存在しません: {}", dir.display());
                } else {
                    println!("📋 {} のカタログ:\n", dir.display());
                    for (name, path) in &catalogs {
                        match catalog::selector::count_csv_rows(path) {
                            Some(count) => println!("  {} ({}件)", name, count),
                            None => println!("  {}", name),
                        }
                    }
                }
            }
        },

        Commands::Config { set_catalog, set_topk, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(path) = set_catalog {
                config.set_catalog_path(path);
                changed = true;
            }

            if let Some(k) = set_topk {
                config.set_default_topk(k)?;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!(
                    "  カタログ: {}",
                    config
                        .catalog_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".into())
                );
                println!("  シート: {}", config.excel_sheet.as_deref().unwrap_or("(先頭)"));
                println!("  既定の候補数: {}", config.default_topk);
                println!("  分割件数: {}", config.chunk_size());
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "company_matcher=debug"
    } else {
        "company_matcher=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// カタログパスを決定（引数 → 環境変数 → 設定 → 対話選択 → 既定パス）
fn resolve_catalog_path(config: &Config, flag: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(path) = config.resolve_catalog_path(flag) {
        return Ok(path);
    }

    if std::io::stdin().is_terminal() {
        let dir = Path::new(catalog::selector::DEFAULT_CATALOG_DIR);
        if let Some(path) = catalog::select_catalog_interactive(dir)? {
            return Ok(path);
        }
    }

    Ok(PathBuf::from(config::DEFAULT_CATALOG_PATH))
}

fn load_configured_catalog(config: &Config, flag: Option<&Path>) -> anyhow::Result<catalog::Catalog> {
    let path = resolve_catalog_path(config, flag)?;
    tracing::debug!(path = %path.display(), "Loading catalog");

    let catalog = catalog::load_catalog(&path, config.excel_sheet.as_deref())
        .with_context(|| format!("カタログを読み込めません: {}", path.display()))?;
    tracing::info!(fingerprint = %catalog.fingerprint(), "Catalog ready");
    Ok(catalog)
}

/// 分割して照合し、進捗バーを進める（結果は入力順）
fn match_with_progress(
    matcher: &Matcher,
    queries: &[MatchQuery],
    top_k: TopK,
    chunk_size: usize,
) -> Vec<MatchResult> {
    let pb = ProgressBar::new(queries.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("  {bar:40.cyan/blue} {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut results = Vec::with_capacity(queries.len());
    for chunk in queries.chunks(chunk_size) {
        results.extend(matcher.match_batch(chunk, top_k));
        pb.inc(chunk.len() as u64);
    }
    pb.finish_and_clear();

    results
}
