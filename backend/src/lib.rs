//! # Rig Inspect
//!
//! Backend for the rig safety-inspection dashboard.
//!
//! The core is a set of pure functions over inspection records: the filter
//! pipeline behind every list and chart, monthly aggregation, per-rig
//! compliance and severity/status breakdowns. Around it sit an in-memory
//! repository, an axum REST API and a reqwest client for that API.
//!
//! ## Architecture
//!
//! - [`models`]: Inspection, Rig and Inspector entities, canonical status and
//!   priority enums, lenient timestamp parsing
//! - [`services`]: Filter pipeline and report reducers
//! - [`db`]: Repository traits, `LocalRepository`, factory and TOML config
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`client`]: REST client with injectable credentials
//! - [`api`]: Consolidated public types

#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

#[cfg(feature = "http-client")]
pub mod client;
