//! Chest menus for plugins.
//!
//! A plugin creates one [`MenuPlugin`] for its [`MenuHost`], builds
//! [`ItemMenu`]s or [`PaginatedItemMenu`]s from it, fills their slots with
//! [`MenuItem`]s and opens them for viewers. Clicks are routed back through
//! the plugin's [`MenuListener`] to the clicked item.

use log::LevelFilter;
use menus_config::LoggingConfig;

pub mod error;
pub mod event;
pub mod headless;
pub mod host;
pub mod items;
pub mod listener;
pub mod materials;
pub mod menu;
pub mod plugin;
pub mod scheduler;
pub mod view;

pub use error::MenuError;
pub use event::{InventoryClickEvent, ItemClickEvent};
pub use host::{MenuHost, Viewer};
pub use items::MenuItem;
pub use listener::MenuListener;
pub use menu::{ItemMenu, MenuSize, PaginatedItemMenu};
pub use plugin::MenuPlugin;

/// Sets up `simple_logger` as configured. Does nothing when logging is disabled.
pub fn init_logger(config: &LoggingConfig) -> Result<(), log::SetLoggerError> {
    if !config.enabled {
        return Ok(());
    }

    let mut logger = simple_logger::SimpleLogger::new();
    logger = logger.with_timestamp_format(time::macros::format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ));

    if !config.timestamp {
        logger = logger.without_timestamps();
    }

    if config.env {
        logger = logger.env();
    }

    logger = logger.with_level(convert_logger_filter(config.level));

    logger = logger.with_colors(config.color);
    logger = logger.with_threads(config.threads);
    logger.init()
}

const fn convert_logger_filter(level: menus_config::logging::LevelFilter) -> LevelFilter {
    match level {
        menus_config::logging::LevelFilter::Off => LevelFilter::Off,
        menus_config::logging::LevelFilter::Error => LevelFilter::Error,
        menus_config::logging::LevelFilter::Warn => LevelFilter::Warn,
        menus_config::logging::LevelFilter::Info => LevelFilter::Info,
        menus_config::logging::LevelFilter::Debug => LevelFilter::Debug,
        menus_config::logging::LevelFilter::Trace => LevelFilter::Trace,
    }
}
