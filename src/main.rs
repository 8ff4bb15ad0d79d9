//! Webcheck - Single-Target Web Security Checker CLI

use clap::Parser;
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use webcheck::config;
use webcheck::models::ScanConfig;
use webcheck::pipeline::ScanPipeline;

/// Webcheck - single-target web security checker
#[derive(Parser)]
#[command(name = "webcheck", version, about, long_about = None)]
struct Cli {
    /// Target URL to scan; starts interactive mode when omitted
    target: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Do not follow HTTP redirects
    #[arg(long)]
    no_redirects: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn print_banner() {
    let banner = r#"
    ============================================
      WEBCHECK - Web Security Checker
      headers | cookies | form hygiene
    ============================================
    "#;
    println!("{}", banner.cyan());
}

async fn scan_and_print(pipeline: &ScanPipeline, url: &str) {
    println!("\n{} {}", "[INFO]".bold(), format!("Scanning: {url}").green());
    println!("{}", "-".repeat(40));
    let report = pipeline.run(url).await;
    println!("{report}");
    println!("{}", "-".repeat(40));
}

async fn interactive_loop(pipeline: &ScanPipeline) {
    let stdin = std::io::stdin();
    loop {
        print!("\nEnter URL to scan (or type 'exit' to quit): ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let url = line.trim();
        if url.eq_ignore_ascii_case("exit") {
            println!("\n{} Exiting scanner. Goodbye!", "[INFO]".bold());
            break;
        }
        if url.is_empty() {
            continue;
        }

        scan_and_print(pipeline, url).await;
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "webcheck=debug"
    } else {
        "webcheck=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    print_banner();

    let mut scan_config = if let Some(ref path) = cli.config {
        config::load_config(path)?
    } else {
        ScanConfig::default()
    };

    if let Some(timeout) = cli.timeout {
        scan_config.timeout_secs = timeout;
    }
    if cli.no_redirects {
        scan_config.follow_redirects = false;
    }

    let pipeline = ScanPipeline::new(&scan_config)?;

    match cli.target {
        Some(target) => scan_and_print(&pipeline, &target).await,
        None => interactive_loop(&pipeline).await,
    }

    Ok(())
}
