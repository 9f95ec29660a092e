// MarketView - app/mod.rs
//
// Application layer: page state container.
// Dependencies: core layer, validated platform config values.
// Must NOT depend on: ui.

pub mod state;
