#![forbid(unsafe_code)]

//! Core domain model and timer logic for the Blockout session builder.
//!
//! This crate provides:
//! - Domain types (categories, catalog items, session blocks)
//! - The built-in workout catalog
//! - The session model (append / set duration / remove / clear)
//! - The timeline calculator (pure derived view state)
//! - The tick-driven timer engine and its events
//! - A cancellable wall-clock tick source

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod session;
pub mod timeline;
pub mod events;
pub mod engine;
pub mod ticker;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, default_catalog};
pub use config::Config;
pub use session::Session;
pub use timeline::{compute_view, ActiveBlock, TimelineView};
pub use events::Event;
pub use engine::TimerEngine;
pub use ticker::Ticker;
