//! HTTP server module for the village-info backend.
//!
//! This module provides an axum-based HTTP server exposing the dataset
//! store and the generative-suggestion component as a REST API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, error handling                      │
//! └──────────┬────────────────────────────┬──────────────────┘
//!            │                            │
//! ┌──────────▼──────────────┐  ┌──────────▼──────────────────┐
//! │  Dataset store           │  │  Suggestion component        │
//! │  - Per-state CSV files   │  │  - Prompt templates          │
//! │  - Filter / enumerate    │  │  - Gemini REST client        │
//! └──────────────────────────┘  └──────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;


pub use router::create_router;
pub use state::AppState;
