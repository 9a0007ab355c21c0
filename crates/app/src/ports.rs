//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the dashboard core and the browser. The
//! web adapter implements them with `gloo-net`, `web-sys` and `gloo-timers`;
//! tests implement them in memory.
//!
//! Browser futures are not `Send`, so the async ports do not require it.

pub mod api;
pub mod notifier;
pub mod prompt;
pub mod scheduler;
pub mod view;

pub use api::DashboardApi;
pub use notifier::Notifier;
pub use prompt::Prompt;
pub use scheduler::Scheduler;
pub use view::View;
