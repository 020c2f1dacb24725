//! Library Circulation Simulator
//!
//! Tracks items, patrons, holds, checkouts, and overdue fines over simulated
//! days. All state lives in a [`Library`], which is the only way to move an
//! item between the shelf, the hold shelf, and a patron.

pub mod domain;
pub use domain::{
    CirculationError, CirculationEvent, Config, Day, Item, ItemId, ItemKind, Library, Location,
    Patron, PatronId, Success,
};
pub use rust_decimal::Decimal;
