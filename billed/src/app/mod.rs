//! Application layer: route table, router, and the bills list container.

pub mod bills_container;
pub mod router;
pub mod routes;

pub use self::bills_container::{BillsContainer, PLACEHOLDER_RECEIPT_URL};
pub use self::router::{ClickError, Router, RouterPorts, RouterState};
pub use self::routes::{RenderFn, Route, RoutePath, RouteTable};
