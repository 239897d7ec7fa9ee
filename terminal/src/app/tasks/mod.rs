//! # Async Background Tasks
//!
//! Tasks that run on the Tokio runtime and report back to the main thread
//! over the event channel. Each task extracts what it needs under a short
//! lock, sets the relevant in-flight flag, then spawns.
//!
//! ## Modules
//!
//! - **[`kyc`]**: Verification dossier submission
//! - **[`trade`]**: Order placement

pub(crate) mod kyc;
pub(crate) mod trade;
