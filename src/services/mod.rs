//! Business logic services.

pub mod aggregation;
pub mod dashboard;
pub mod format;
pub mod pages;
pub mod source;
