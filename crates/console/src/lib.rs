//! Console driver: the interactive menu on top of the account registry.

pub mod config;
pub mod menu;
pub mod prompt;
pub mod session;

pub use config::ConsoleConfig;
pub use menu::MenuChoice;
pub use session::Console;
