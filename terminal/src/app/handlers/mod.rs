//! # User Action Handlers
//!
//! Synchronous handlers for user actions. Each handler validates input,
//! mutates state under a short write lock, and delegates async work to the
//! [`crate::app::tasks`] module.
//!
//! ## Modules
//!
//! - **[`navigation`]**: Screen changes and Tab cycling
//! - **[`kyc`]**: Verification wizard step submission and restart
//! - **[`trade`]**: Order form actions
//! - **[`account`]**: Profile form actions

pub(crate) mod account;
pub(crate) mod kyc;
pub(crate) mod navigation;
pub(crate) mod trade;
