use std::error::Error;

use log4rs::append::file::FileAppender;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Config as Log4rsConfig, Root},
    encode::pattern::PatternEncoder,
};

use crate::configure::{load_config, LogConfig};

/// Build the log4rs configuration for `config` without installing it.
pub fn build_log4rs_config(config: &LogConfig) -> Result<Log4rsConfig, Box<dyn Error>> {
    // Create a stdout appender
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(&config.pattern)))
        .build();

    let mut log_config_builder = Log4rsConfig::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)));

    let mut root_builder = Root::builder().appender("stdout");

    // Conditionally add file appender
    if config.log_to_file {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(&config.pattern)))
            .build(&config.log_file)?;

        log_config_builder = log_config_builder
            .appender(Appender::builder().build("file", Box::new(file)));

        root_builder = root_builder.appender("file");
    }

    let log_config = log_config_builder.build(root_builder.build(config.level_filter()))?;
    Ok(log_config)
}

/// Install log4rs as the global `log` backend.
pub fn setup_logger(config: &LogConfig) -> Result<(), Box<dyn Error>> {
    let log_config = build_log4rs_config(config)?;
    log4rs::init_config(log_config)?;
    Ok(())
}

pub fn setup_default_logger() -> Result<(), Box<dyn Error>> {
    let config = load_config()?;
    setup_logger(&config)
}
