//! Bills REST API outbound adapter.
//!
//! This module provides a thin HTTP implementation of the `BillsGateway` port.

mod dto;
mod http_gateway;

pub use http_gateway::{HttpBillsGateway, bills_endpoint};
