// MarketView - ui/panels/mod.rs

pub mod about;
pub mod filters;
pub mod grid;
pub mod header;
