//! dit - project scaffolding and manifest management
//!
//! A project is described by a single JSON manifest (Project -> Package ->
//! Module -> File); add commands mutate the manifest and mirror the change
//! with on-disk skeletons.

pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod ops;
pub mod scaffold;
pub mod store;
pub mod validation;
