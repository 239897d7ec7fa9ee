//! # Services
//!
//! Gateway implementations and demo data sources.
//!
//! The platform runs entirely on placeholder data: the gateways here
//! implement the [`crate::core::service`] traits by sleeping for a fixed
//! delay, logging, and returning canned results. They exist so the app
//! layer exercises the exact same async path a real backend integration
//! would use.
//!
//! ## Modules
//!
//! - **[`kyc`]**: Mock identity verification gateway
//! - **[`trade`]**: Mock exchange order gateway
//! - **[`market`]**: Static/seeded demo market, wallet and account data

pub mod kyc;
pub mod market;
pub mod trade;
