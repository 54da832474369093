//! # ViTrans App
//!
//! Terminal front for the ViTrans site core: wires the translation
//! store, the article repository, and the article view together and
//! drives them from an interactive command loop.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod config;
pub mod console;
pub mod error;

pub use app::{parse_command, App, Command};
pub use config::AppConfig;
pub use console::{ConsoleNotifier, ConsolePrompt, ConsoleRenderer};
pub use error::{AppError, AppResult};
