//! Documents module (planned).
//!
//! This module will provide document ingestion, storage, and AI-assisted
//! analysis:
//!
//! - Document upload to Vultr object storage (S3-compatible), configured
//!   via [`crate::config::storage`]
//! - Document, processing-job, and annotation models backed by PostgreSQL
//! - Analysis and summarization through the Claude API, configured via
//!   [`crate::config::claude`]
//!
//! Once implemented, its router will be nested into
//! [`crate::router::init_api_router`].
