//! Terminal logging for the bot process.
//!
//! Lines go to stdout as `<rfc3339 time> [<LEVEL>] <message>`.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode};

pub(crate) fn initialize(level: LevelFilter) {
    // Only fails if a logger is already installed, which leaves that one in charge.
    let _ = TermLogger::init(level, build_config(), TerminalMode::Stdout, ColorChoice::Auto);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .set_location_level(LevelFilter::Off)
        .build()
}
