//! # gdeps - GDevelop Dependency Manager
//!
//! gdeps installs Javascript packages with bower and registers their entry
//! scripts as external source files of a GDevelop project.
//!
//! ## Quick Start
//!
//! ```bash
//! # Create bower.json and gdeps.json
//! gdeps init
//!
//! # Install a package and add it to the project file
//! gdeps install lodash
//!
//! # Track a local script
//! gdeps register scripts/helpers.js
//! ```
//!
//! ## Module Organization
//!
//! - [`manifest`] - Project file lookup and merging
//! - [`registry`] - Local `gdeps.json` registry
//! - [`package_manager`] - Bower integration
//! - [`commands`] - CLI command handlers

/// CLI command handlers.
pub mod commands;

/// Bower location and components directory.
pub mod config;

/// Error taxonomy.
pub mod error;

/// GDevelop project file handling.
pub mod manifest;

/// External package manager integration.
pub mod package_manager;

/// Local source file registry (`gdeps.json`).
pub mod registry;

/// Prompts, log forwarding and tables.
pub mod ui;
