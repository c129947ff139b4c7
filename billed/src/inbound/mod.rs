//! Inbound adapters that translate external requests into router navigations
//! while keeping framework details at the edge.

pub mod http;
