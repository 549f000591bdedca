//! CLI command implementations.

pub(crate) mod config;
pub(crate) mod feeds;
pub(crate) mod series;
