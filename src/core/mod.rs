// MarketView - core/mod.rs
//
// Core business logic layer.
// Dependencies: util layer and the standard library.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod catalog;
pub mod filter;
pub mod model;
