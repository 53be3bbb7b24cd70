use anyhow::Context;
use clap::Parser;
use fcl_checker::adapters::export::save_reports_csv;
use fcl_checker::core::report::{render_json, render_text};
use fcl_checker::utils::error::{CheckError, ErrorSeverity};
use fcl_checker::utils::{logger, validation::Validate};
use fcl_checker::{CliConfig, FclChecker, FixedWidth, OutputFormat, RandomWidth, RoadWidthSource};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{IsTerminal, Read};

fn exit_code(e: &CheckError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 1,      // 輸入錯誤
        ErrorSeverity::Medium => 2,   // 網路，可重試
        ErrorSeverity::High => 1,     // 設定或資料錯誤
        ErrorSeverity::Critical => 3, // 系統錯誤
    }
}

fn fail(e: &CheckError) -> ! {
    tracing::error!(
        "❌ Check failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(e));
}

/// 沒有指定地址時，從管線讀入（每行一筆）
fn read_stdin_addresses() -> anyhow::Result<Vec<String>> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }

    let mut input = String::new();
    stdin
        .lock()
        .read_to_string(&mut input)
        .context("failed to read addresses from stdin")?;
    Ok(input.lines().map(str::to_string).collect())
}

fn width_source(config: &CliConfig) -> Box<dyn RoadWidthSource> {
    match (config.road_width, config.seed) {
        (Some(width), _) => Box::new(FixedWidth(width)),
        (None, Some(seed)) => Box::new(RandomWidth::new(StdRng::seed_from_u64(seed))),
        (None, None) => Box::new(RandomWidth::new(StdRng::from_entropy())),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting fcl-checker");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };

    let addresses = if config.addresses.is_empty() {
        read_stdin_addresses()?
    } else {
        config.addresses.clone()
    };

    let mut checker = match FclChecker::from_config(&settings, width_source(&config)) {
        Ok(checker) => checker,
        Err(e) => fail(&e),
    };

    let reports = match checker.check_batch(&addresses).await {
        Ok(reports) => reports,
        Err(CheckError::EmptyAddress) => {
            eprintln!("{}", CheckError::EmptyAddress);
            std::process::exit(1);
        }
        Err(e) => fail(&e),
    };

    match config.format {
        OutputFormat::Text => {
            let blocks: Vec<String> = reports.iter().map(render_text).collect();
            print!("{}", blocks.join("\n"));
        }
        OutputFormat::Json => match render_json(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(&e),
        },
    }

    if let Some(path) = &config.csv {
        if let Err(e) = save_reports_csv(path, &reports) {
            fail(&e);
        }
        tracing::info!("📁 CSV saved to: {}", path);
    }

    Ok(())
}
