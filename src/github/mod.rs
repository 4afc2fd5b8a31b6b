//! GitHub integration
//!
//! This module handles `gh api` command building, the JSON payload
//! shapes, and the `ActionsApi` fetch capability.

pub mod cli;
pub mod client;
pub mod payload;

pub use client::{ActionsApi, GhClient};
