//! Configuration module for Presupuesto
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PresupuestoPaths;
pub use settings::Settings;
