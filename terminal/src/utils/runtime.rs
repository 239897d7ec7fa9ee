//! Global Tokio runtime for async gateway operations.
//!
//! eframe drives the UI on its own thread without an async executor, while
//! the mock gateways are async. This static runtime bridges the two: tasks
//! are spawned onto it and report back to the UI thread over the app's
//! event channel.
//!
//! `main` enters the runtime once so `tokio::spawn` works from anywhere on
//! the UI thread:
//!
//! ```rust,no_run
//! use terminal::utils::runtime::TOKIO_RT;
//!
//! let _guard = TOKIO_RT.enter();
//! tokio::spawn(async move {
//!     // async gateway call, result sent over the event channel
//! });
//! ```

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async gateway operations")
});
