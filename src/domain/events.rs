use rust_decimal::Decimal;

use crate::domain::item::{Day, ItemId, PatronId};

/// Something that happened in the library, recorded in its history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CirculationEvent {
    /// A patron checked out an item.
    CheckedOut {
        /// The borrowed item.
        item: ItemId,
        /// The borrower.
        patron: PatronId,
    },
    /// An item came back to the library.
    Returned {
        /// The returned item.
        item: ItemId,
        /// The patron who had it, if the item's holder was known.
        patron: Option<PatronId>,
        /// Whether the item went to the hold shelf rather than the open shelf.
        hold_pending: bool,
    },
    /// A patron placed a hold on an item.
    Requested {
        /// The requested item.
        item: ItemId,
        /// The requesting patron.
        patron: PatronId,
    },
    /// A patron paid toward their fines.
    FinePaid {
        /// The paying patron.
        patron: PatronId,
        /// The amount paid.
        amount: Decimal,
    },
    /// An overdue item added to a patron's fine.
    FineAccrued {
        /// The patron charged.
        patron: PatronId,
        /// The overdue item.
        item: ItemId,
        /// The amount charged.
        amount: Decimal,
    },
    /// The simulated clock moved forward one day.
    DayAdvanced,
}

/// A [`CirculationEvent`] stamped with the simulated day it happened on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The day of the event.
    pub day: Day,
    /// What happened.
    pub event: CirculationEvent,
}
