//! Shared contracts for the ServiceFlow application: domain model, static
//! dataset and the derived-view functions the pages render from.
//!
//! Everything in this crate is render-free and synchronous, so the whole
//! core is unit-testable without a DOM.

pub mod data;
pub mod domain;
pub mod enums;
pub mod timeline;
pub mod views;
pub mod wizard;
