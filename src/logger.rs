use std::env;
use std::str::FromStr;

use anyhow::Result;
use log::LevelFilter;
use simplelog::*;

/// Initializes the terminal logger, honouring `LOG_LEVEL` when set
pub fn initialize_logger() -> Result<()> {
    let logger_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .add_filter_allow_str("yamusic")
        .build();

    let level_filter = get_log_level(env::var("LOG_LEVEL").ok().as_deref());

    TermLogger::init(
        level_filter,
        logger_config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    Ok(())
}

fn get_log_level(log_level: Option<&str>) -> LevelFilter {
    log_level
        .and_then(|level| LevelFilter::from_str(level).ok())
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod logger_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_log_level_from_env_value() {
        assert_eq!(LevelFilter::Debug, get_log_level(Some("debug")));
        assert_eq!(LevelFilter::Trace, get_log_level(Some("TRACE")));
    }

    #[test]
    fn test_log_level_fallback() {
        assert_eq!(LevelFilter::Info, get_log_level(None));
        assert_eq!(LevelFilter::Info, get_log_level(Some("chatty")));
    }
}
