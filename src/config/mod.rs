//! Configuration modules for the MedicalDocAI backend.
//!
//! This module contains all configuration-related types for the application.
//! Each submodule handles a specific aspect of configuration, loaded from
//! environment variables with a fixed default for every unset variable, so
//! the application always starts with zero environment input.
//!
//! Every config struct is built exactly once at startup (see
//! [`crate::state::init_app_state`]) and is immutable afterwards.
//!
//! # Modules
//!
//! - [`app`]: application identity and API prefix
//! - [`claude`]: Claude API credentials for future AI integration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL connection string for future persistence
//! - [`raindrop`]: Raindrop API credentials for future bookmark sync
//! - [`storage`]: Vultr object storage (S3-compatible) credentials
//!
//! # Environment Variables
//!
//! See each submodule for specific variable names and their defaults. A
//! `.env` file may supply any of them before process start.

pub mod app;
pub mod claude;
pub mod cors;
pub mod database;
pub mod raindrop;
pub mod storage;
