use std::{error::Error, path::Path};

use log::{warn, LevelFilter};
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

const FALLBACK_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Initializes log4rs from the given YAML file, or with a plain console
/// logger at `info` level if the file is missing.
pub fn init(path: &Path) -> Result<(), Box<dyn Error>> {
    if path.exists() {
        log4rs::init_file(path, Default::default())?;
    } else {
        log4rs::init_config(console_config()?)?;
        warn!(
            "Log configuration {} not found, logging to console",
            path.display()
        );
    }
    Ok(())
}

fn console_config() -> Result<Config, Box<dyn Error>> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();

    Ok(Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))?)
}
