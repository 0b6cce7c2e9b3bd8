//! # Village Info Backend
//!
//! Rust backend for rural-village facility lookup and AI-generated
//! development suggestions.
//!
//! Per-state facility records live in flat CSV files under a dataset
//! directory; all suggestion, score, and progress content is delegated to
//! the Google Gemini `generateContent` API. The backend exposes a REST API
//! via Axum for the frontend.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`config`]: Environment-derived server configuration
//! - [`dataset`]: Per-state CSV store, record filtering, and dropdown
//!   enumeration
//! - [`suggest`]: Prompt construction, Gemini REST client, and model-reply
//!   parsing
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod config;

pub mod dataset;

pub mod suggest;

#[cfg(feature = "http-server")]
pub mod http;
