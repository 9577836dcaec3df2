//! Domain records, aggregate results and page definitions.

pub mod aggregate;
pub mod order;
pub mod page;
pub mod state;
