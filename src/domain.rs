//! Domain models for library circulation.
//!
//! This module contains the circulating items, the patrons who borrow them,
//! the library that mediates every transition, and its circulation policy.

/// Items, their kinds and locations, and identifiers.
pub mod item;
pub use item::{Day, Item, ItemId, ItemKind, Location, PatronId};

/// Library members and their fine balances.
pub mod patron;
pub use patron::Patron;

mod config;
pub use config::{Config, ConfigError, LoanPeriods};

/// The circulation history.
pub mod events;
pub use events::{CirculationEvent, HistoryEntry};

mod library;
pub use library::{CirculationError, Library, Overdue, Success};
