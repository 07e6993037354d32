//! # silbot-core
//!
//! Object model, serialization helpers, persistence hook, configuration,
//! and error handling for the silbot Telegram Bot API framework.

#[macro_use]
mod record;

pub mod config;
pub mod database;
pub mod error;
pub mod helper;
pub mod types;

pub use record::{lenient, Expected, Extra, ResultKind, WireRecord};
