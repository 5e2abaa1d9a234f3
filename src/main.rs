use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sealscan::{
    DocumentAnalyzer, DocumentReport, MatchType, RecordFilter, SealscanConfig, SortDirection,
    SortField, sort_records, split_pages,
};

#[derive(Parser, Debug)]
#[command(
    name = "sealscan",
    version,
    about = "Find engineer seal and stamp requirements in specification text"
)]
struct Cli {
    /// Extracted text files; pages separated by form feeds
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// YAML configuration file (defaults are used when omitted)
    #[arg(long, env = "SEALSCAN_CONFIG")]
    config: Option<PathBuf>,

    /// Print the reports as JSON instead of one line per match
    #[arg(long)]
    json: bool,

    /// Keep records whose keyword or snippet contains this text
    #[arg(long)]
    keyword: Option<String>,

    /// Keep records from this page only
    #[arg(long)]
    page: Option<u32>,

    /// Keep records of this match type (exact or regex)
    #[arg(long)]
    match_type: Option<MatchType>,

    /// Sort by keyword, page, confidence, match_type or section_code
    #[arg(long)]
    sort: Option<SortField>,

    /// Sort in descending order
    #[arg(long, requires = "sort")]
    desc: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_json)?;

    let config = match &cli.config {
        Some(path) => SealscanConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SealscanConfig::default(),
    };
    let analyzer = DocumentAnalyzer::new(&config.analysis()).context("invalid configuration")?;

    let mut documents = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        documents.push(split_pages(&text));
    }

    let filter = RecordFilter {
        keyword: cli.keyword.clone(),
        page: cli.page,
        match_type: cli.match_type,
    };
    let direction = if cli.desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };

    let mut reports = analyzer.analyze_documents(&documents);
    for report in &mut reports {
        report.records.retain(|r| filter.matches(r));
        if let Some(field) = cli.sort {
            sort_records(&mut report.records, field, direction);
        }
    }

    if cli.json {
        print_json(&cli.files, &reports)
    } else {
        print_lines(&cli.files, &reports);
        Ok(())
    }
}

fn init_tracing(default_level: &str, json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .with_context(|| format!("invalid log level {default_level:?}"))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

fn print_lines(files: &[PathBuf], reports: &[DocumentReport]) {
    for (path, report) in files.iter().zip(reports) {
        println!(
            "{}: {} pages, {} matches on {} pages ({} ms)",
            path.display(),
            report.num_pages,
            report.total_matches(),
            report.matched_pages(),
            report.parse_time_ms
        );
        for record in &report.records {
            println!(
                "  p{:<4} {:<14} {:.2}  {:<6} {}  \"{}\"",
                record.page,
                record.section_code.as_deref().unwrap_or("-"),
                record.confidence,
                record.match_type,
                record.keyword,
                record.snippet
            );
        }
    }
}

fn print_json(files: &[PathBuf], reports: &[DocumentReport]) -> Result<()> {
    let documents: Vec<serde_json::Value> = files
        .iter()
        .zip(reports)
        .map(|(path, report)| {
            serde_json::json!({
                "document": {
                    "filename": path.display().to_string(),
                    "num_pages": report.num_pages,
                    "parse_time_ms": report.parse_time_ms,
                },
                "results": report.records,
                "meta": {
                    "matched_pages": report.matched_pages(),
                    "total_matches": report.total_matches(),
                },
            })
        })
        .collect();
    let out = serde_json::to_string_pretty(&documents).context("failed to serialize report")?;
    println!("{out}");
    Ok(())
}
