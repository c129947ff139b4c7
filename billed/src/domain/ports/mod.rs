//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod bills_gateway;
mod key_value_storage;
mod modal_controller;
mod navigator;

#[cfg(test)]
pub use bills_gateway::MockBillsGateway;
pub use bills_gateway::{BillsGateway, BillsGatewayError, FixtureBillsGateway, fixture_bills};
#[cfg(test)]
pub use key_value_storage::MockKeyValueStorage;
pub use key_value_storage::{KeyValueStorage, StorageError};
#[cfg(test)]
pub use modal_controller::MockModalController;
pub use modal_controller::{ModalContent, ModalController};
#[cfg(test)]
pub use navigator::MockNavigator;
pub use navigator::Navigator;
