use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::str::FromStr;

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

pub fn init(level: LevelFilter) -> Result<()> {
    SimpleLogger::new().with_level(level).init()?;

    Ok(())
}

/// Resolves the log level from the flag, then the config value, falling back to `warn`
pub fn resolve_level(flag: Option<&str>, configured: Option<&str>) -> LevelFilter {
    flag.or(configured)
        .and_then(|level| match LevelFilter::from_str(level) {
            Ok(level) => Some(level),
            Err(_) => {
                eprintln!("unknown log level '{}', using {}", level, DEFAULT_LEVEL);
                None
            }
        })
        .unwrap_or(DEFAULT_LEVEL)
}
