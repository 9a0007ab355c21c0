//! # botdash-domain
//!
//! Pure domain model for the bot-monitoring dashboard.
//!
//! ## Responsibilities
//! - Define the **snapshots** fetched from the backend (`StatusSnapshot`,
//!   `GameState`, `ProcessInfo`, `LogBatch`)
//! - Status → badge mapping, uptime and number formatting
//! - Log severity detection
//! - Settings-form validation and bot-action confirmation text
//! - Notification model
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod format;

pub mod forms;
pub mod game_state;
pub mod log;
pub mod notification;
pub mod process;
pub mod status;
