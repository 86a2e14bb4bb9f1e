//! Networking for the dashboards.

pub mod api;
