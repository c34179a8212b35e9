//! # MedicalDocAI Backend
//!
//! Backend service skeleton for the Medical Document AI Assistant. The
//! service currently exposes a health check and an (empty) versioned API
//! surface; document processing, AI analysis, and bookmark synchronization
//! are planned feature modules that will be mounted onto the existing
//! router without touching the entry point.
//!
//! ## Overview
//!
//! What exists today:
//!
//! - **Configuration**: immutable, environment-driven settings resolved once
//!   at startup, with a working default for every variable
//! - **CORS**: configurable cross-origin gate (wildcard, single origin, or
//!   comma-separated allow-list)
//! - **Health check**: `GET /health`, always available, unauthenticated
//! - **API mount point**: feature routers attach under the configured prefix
//!   (default `/api`)
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── config/           # Per-concern configuration (app, CORS, credentials)
//! ├── modules/          # Feature modules
//! │   ├── health/      # Health check endpoint
//! │   ├── documents/   # (planned) document ingestion and AI analysis
//! │   └── bookmarks/   # (planned) Raindrop bookmark sync
//! ├── docs.rs           # OpenAPI documentation setup
//! ├── logging.rs        # Request logging middleware
//! ├── router.rs         # Main application router
//! └── state.rs          # Shared application state
//! ```
//!
//! Feature modules follow a consistent structure:
//!
//! - `mod.rs`: module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `model.rs`: request/response models
//! - `router.rs`: Axum router configuration
//!
//! ## Quick Start
//!
//! ### Environment Variables
//!
//! All variables are optional; unset variables fall back to their defaults.
//! A `.env` file in the working directory is loaded at startup (see
//! `.env.example`).
//!
//! ```bash
//! APP_NAME=MedicalDocAI
//! ENV=local
//! API_PREFIX=/api
//! CORS_ORIGINS=*
//! ```
//!
//! Credentials for the services the planned modules will talk to (Claude,
//! Raindrop, PostgreSQL, Vultr object storage) default to empty strings and
//! are carried in configuration until those modules land.
//!
//! ### API Documentation
//!
//! When the server is running, API documentation is available at:
//!
//! - Swagger UI: `http://localhost:8000/swagger-ui`
//! - Scalar: `http://localhost:8000/scalar`
//!
//! ## Modules
//!
//! - [`config`]: application configuration
//! - [`docs`]: OpenAPI documentation setup
//! - [`logging`]: request logging middleware
//! - [`modules`]: feature modules (health, plus planned modules)
//! - [`router`]: main application router
//! - [`state`]: shared application state

pub mod config;
pub mod docs;
pub mod logging;
pub mod modules;
pub mod router;
pub mod state;
