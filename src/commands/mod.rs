//! CLI command handlers.
//!
//! Each handler takes the project root and the collaborators it needs, so
//! `main` only parses arguments and routes.

pub mod init;
pub mod install;
pub mod list;
pub mod register;
