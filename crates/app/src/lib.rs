//! # botdash-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `DashboardApi` — the status and logs endpoints
//!   - `View` — applies patches to the page
//!   - `Notifier` — transient banners
//!   - `Prompt` — yes/no confirmation
//!   - `Scheduler` — repeating timers
//! - Render snapshots into **patches** with pure functions
//! - Orchestrate refreshes (`DashboardController`), the polling lifecycle
//!   (`Poller`) and form interception (`FormInterceptor`)
//! - Keep the notification banner stack (`BannerStack`)
//! - Hold the dashboard configuration
//!
//! ## Dependency rule
//! Depends on `botdash-domain` only. Never imports adapter or browser crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod banners;
pub mod config;
pub mod controller;
pub mod error;
pub mod forms;
pub mod patch;
pub mod poller;
pub mod ports;
pub mod render;
