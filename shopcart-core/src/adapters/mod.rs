//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - HTML table rows for the CartView port

pub mod html;
