//! # Vantage Terminal
//!
//! Desktop trading terminal built on egui/eframe. The crate is organised in
//! layers:
//!
//! - [`app`] owns the shared state, the event channel and the input handlers
//! - [`kyc`] holds the identity verification wizard and its validation
//! - [`services`] provides the gateway implementations and demo market data
//! - [`ui`] renders screens and widgets from state snapshots
//! - [`core`] defines the error type and the gateway traits
//! - [`utils`] carries the tokio runtime handle and validation helpers
//!
//! All remote interaction goes through the [`core::service`] traits so the
//! UI and the handlers never depend on a concrete backend.

pub mod app;
pub mod core;
pub mod kyc;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState, Screen};
pub use crate::core::{AppError, Result};
