//! Configuration module for housesplit
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::HousesplitPaths;
pub use settings::Settings;
