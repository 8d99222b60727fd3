use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::Parser;
use dotenv::dotenv;

use buflog::configure::{load_config_from, DEFAULT_CONFIG_PATH};
use buflog::logger::setup_logger;
use buflog::{buf_critical, buf_debug, buf_error, buf_info, buf_notice, buf_warning, BufferLogger};

#[derive(Parser, Debug)]
#[command(name = "buflog_demo", about = "Emit buffered request log lines")]
struct Args {
    /// Path to the YAML config file (optional)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Number of simulated requests
    #[arg(long, default_value_t = 3)]
    requests: u32,

    /// Override the configured log level
    #[arg(long)]
    level: Option<String>,
}

fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();

    let mut config = load_config_from(&args.config)?;
    if let Some(level) = args.level {
        config.log_level = level;
    }
    setup_logger(&config).map_err(|e| anyhow!("failed to install logger: {}", e))?;

    for request in 0..args.requests {
        let mut logger = BufferLogger::new(("request", request));

        logger.start_timer("parse");
        thread::sleep(Duration::from_millis(2));
        logger.stop_timer("parse");

        logger.start_timer("db");
        thread::sleep(Duration::from_millis(5));
        logger.stop_timer("db");

        logger.append(("path", "/orders"));
        logger.append_all(&[&"cache_miss", &request]);
        buf_debug!(logger, "request {} processed", request);
        logger.flush();
    }

    let logger = BufferLogger::default();
    buf_info!(logger, "info {}", 1);
    buf_notice!(logger, "notice {}", 2);
    buf_warning!(logger, "warning {}", 3);
    buf_error!(logger, "error {}", 4);
    buf_critical!(logger, "critical {}", 5);

    Ok(())
}
