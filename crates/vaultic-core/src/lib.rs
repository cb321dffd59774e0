//! # vaultic-core
//!
//! Core types, traits, and credential analysis logic for vaultic.
//!
//! This crate provides the record models, the pure analysis functions
//! (strength scoring, category suggestion, password generation, security
//! recommendations), and the trait definitions the store crate implements.

pub mod analysis;
pub mod category;
pub mod defaults;
pub mod error;
pub mod events;
pub mod generator;
pub mod logging;
pub mod models;
pub mod recommend;
pub mod traits;

// Re-export commonly used types at crate root
pub use analysis::{analyze_password, estimate_crack_time};
pub use category::suggest_category;
pub use error::{Error, Result};
pub use events::{Session, SessionBus, SessionEvent};
pub use generator::{generate_password, GeneratorOptions};
pub use models::*;
pub use recommend::security_recommendations;
pub use traits::*;
