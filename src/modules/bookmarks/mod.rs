//! Bookmarks module (planned).
//!
//! This module will synchronize document references with the Raindrop
//! bookmarking service, configured via [`crate::config::raindrop`].
//!
//! Once implemented, its router will be nested into
//! [`crate::router::init_api_router`].
