use std::{fmt::Display, str::FromStr};

use anyhow::{Error, Result};
use backtrace::Backtrace;
use tracing::{debug, error, info, level_filters::LevelFilter, trace, warn};

pub fn init(display_level: &bool, level_filter: &str) -> Result<()> {
    let level_filter = parse_level_filter(level_filter)?;

    tracing_subscriber::fmt()
        .with_level(*display_level)
        .with_max_level(level_filter)
        .try_init()
        .map_err(Error::msg)
}

fn parse_level_filter(level_filter: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level_filter)
        .map_err(|err| Error::msg(format!("Invalid log level filter '{level_filter}': {err}")))
}

pub fn trace<T: Display>(prefix: Option<&str>, msg: T) {
    match prefix {
        Some(prefix) => trace!("{prefix} {msg}"),
        None => trace!("🐾 {msg}"),
    }
}

pub fn debug<T: Display>(prefix: Option<&str>, msg: T) {
    match prefix {
        Some(prefix) => debug!("{prefix} {msg}"),
        None => debug!("🐞 {msg}"),
    };
}

pub fn info<T: Display>(prefix: Option<&str>, msg: T) {
    match prefix {
        Some(prefix) => info!("{prefix} {msg}"),
        None => info!("📢 {msg}"),
    };
}

pub fn warn<T: Display>(prefix: Option<&str>, msg: T) {
    match prefix {
        Some(prefix) => warn!("{prefix} {msg}"),
        None => warn!("⚠️ {msg}"),
    };
}

pub fn error<T: Display>(prefix: Option<&str>, msg: T) {
    let show_backtrace = std::env::var("RUST_BACKTRACE").is_ok_and(|var| var == "1");
    let prefix = prefix.unwrap_or("🚨");
    if show_backtrace {
        error!("{prefix} {msg}\n{:?}", Backtrace::new());
    } else {
        error!("{prefix} {msg}");
    }
}

/// Logs the message at error level, then aborts the current thread.
pub fn panic<T: Display>(prefix: Option<&str>, msg: T) -> ! {
    let prefix = prefix.unwrap_or("☠️");
    error!("{prefix} {msg}");
    panic!("{prefix} {msg}")
}
