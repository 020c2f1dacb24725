//! The circulation desk.
//!
//! A [`Library`] owns every [`Item`] and [`Patron`] and is the only place their
//! state changes. Items and patrons refer to each other by identifier, never by
//! pointer, so the library resolves every cross-reference with a lookup into
//! its own collections.

use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::domain::{
    Config,
    events::{CirculationEvent, HistoryEntry},
    item::{Day, Item, ItemId, Location, PatronId},
    patron::Patron,
};

/// Reasons a circulation request can be refused.
///
/// The display text of each variant is the status message reported to the
/// person at the desk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CirculationError {
    /// No member has the given identifier.
    #[error("patron not found")]
    PatronNotFound(PatronId),
    /// No holding has the given identifier.
    #[error("item not found")]
    ItemNotFound(ItemId),
    /// The item is already checked out by someone.
    #[error("item already checked out")]
    AlreadyCheckedOut(ItemId),
    /// The item is waiting on the hold shelf for somebody else.
    #[error("item on hold by other patron")]
    OnHoldByOtherPatron(ItemId),
    /// The item cannot be returned because it is not checked out.
    #[error("item already in library")]
    AlreadyInLibrary(ItemId),
    /// Somebody already has a hold on the item.
    #[error("item already on hold")]
    AlreadyOnHold(ItemId),
}

/// A circulation request that went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Success {
    /// The item was checked out.
    CheckedOut,
    /// The item was returned.
    Returned,
    /// A hold was placed on the item.
    Requested,
    /// The payment was applied to the patron's fines.
    FinePaid,
}

impl fmt::Display for Success {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::CheckedOut => "check out successful",
            Self::Returned => "return successful",
            Self::Requested => "request successful",
            Self::FinePaid => "payment successful",
        };
        f.write_str(s)
    }
}

/// An item held past its loan period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overdue {
    /// The patron holding the item.
    pub patron: PatronId,
    /// The overdue item.
    pub item: ItemId,
    /// Days beyond the loan period.
    pub days: Day,
}

/// A library: its holdings, its members, and the simulated clock.
#[derive(Debug, Default)]
pub struct Library {
    /// Every item the library owns. Lookups return the first match.
    holdings: Vec<Item>,

    /// Every registered patron. Lookups return the first match.
    members: Vec<Patron>,

    /// The simulated day. Starts at zero and only moves forward.
    current_date: Day,

    /// Loan periods and fine rate.
    config: Config,

    /// Everything that has happened, in order.
    history: Vec<HistoryEntry>,
}

impl Library {
    /// Creates an empty library using the default circulation policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty library with the given circulation policy.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The circulation policy in force.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The number of days the given item may be held before fines accrue,
    /// under this library's policy.
    #[must_use]
    pub const fn loan_period(&self, item: &Item) -> Day {
        self.config.loan_period(item.kind())
    }

    /// The current simulated day.
    #[must_use]
    pub const fn current_date(&self) -> Day {
        self.current_date
    }

    /// All holdings, in the order they were added.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.holdings
    }

    /// All members, in the order they were added.
    #[must_use]
    pub fn patrons(&self) -> &[Patron] {
        &self.members
    }

    /// Everything that has happened in this library, oldest first.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Adds an item to the holdings.
    ///
    /// Duplicate identifiers are not rejected; the earlier item shadows the
    /// later one.
    pub fn add_item(&mut self, item: Item) {
        debug!(item = %item.id(), title = item.title(), kind = item.kind().label(), "added item");
        self.holdings.push(item);
    }

    /// Registers a patron.
    ///
    /// Duplicate identifiers are not rejected; the earlier patron shadows the
    /// later one.
    pub fn add_patron(&mut self, patron: Patron) {
        debug!(patron = %patron.id(), name = patron.name(), "added patron");
        self.members.push(patron);
    }

    /// Finds an item by identifier.
    #[must_use]
    pub fn lookup_item(&self, id: ItemId) -> Option<&Item> {
        self.holdings.iter().find(|item| item.id() == id)
    }

    /// Finds a patron by identifier.
    #[must_use]
    pub fn lookup_patron(&self, id: PatronId) -> Option<&Patron> {
        self.members.iter().find(|patron| patron.id() == id)
    }

    /// Checks an item out to a patron.
    ///
    /// If the patron had a hold on the item, the hold is fulfilled and cleared.
    ///
    /// # Errors
    ///
    /// - [`CirculationError::PatronNotFound`] or
    ///   [`CirculationError::ItemNotFound`] if either identifier is unknown
    /// - [`CirculationError::AlreadyCheckedOut`] if someone has the item
    /// - [`CirculationError::OnHoldByOtherPatron`] if the item is on the hold
    ///   shelf for a different patron
    #[instrument(skip(self))]
    pub fn checkout(
        &mut self,
        patron_id: PatronId,
        item_id: ItemId,
    ) -> Result<Success, CirculationError> {
        let today = self.current_date;
        let Self {
            holdings,
            members,
            history,
            ..
        } = self;

        let patron = find_patron_mut(members, patron_id)
            .ok_or(CirculationError::PatronNotFound(patron_id))?;
        let item =
            find_item_mut(holdings, item_id).ok_or(CirculationError::ItemNotFound(item_id))?;

        match item.location() {
            Location::CheckedOut => {
                warn!("item already checked out");
                return Err(CirculationError::AlreadyCheckedOut(item_id));
            }
            Location::OnHoldShelf if item.requested_by() != Some(patron_id) => {
                warn!(requested_by = ?item.requested_by(), "item on hold for another patron");
                return Err(CirculationError::OnHoldByOtherPatron(item_id));
            }
            Location::OnShelf | Location::OnHoldShelf => {}
        }

        item.set_checked_out_by(Some(patron_id));
        item.set_date_checked_out(Some(today));
        item.set_location(Location::CheckedOut);

        if item.requested_by() == Some(patron_id) {
            debug!("hold fulfilled");
            item.set_requested_by(None);
        }

        patron.add_item(item_id);

        history.push(HistoryEntry {
            day: today,
            event: CirculationEvent::CheckedOut {
                item: item_id,
                patron: patron_id,
            },
        });
        debug!(day = today, "checked out");

        Ok(Success::CheckedOut)
    }

    /// Returns a checked-out item to the library.
    ///
    /// The item goes to the hold shelf if somebody has requested it, otherwise
    /// back on the open shelf.
    ///
    /// # Errors
    ///
    /// - [`CirculationError::ItemNotFound`] if the identifier is unknown
    /// - [`CirculationError::AlreadyInLibrary`] if the item is not checked out
    #[instrument(skip(self))]
    pub fn return_item(&mut self, item_id: ItemId) -> Result<Success, CirculationError> {
        let today = self.current_date;
        let Self {
            holdings,
            members,
            history,
            ..
        } = self;

        let item =
            find_item_mut(holdings, item_id).ok_or(CirculationError::ItemNotFound(item_id))?;

        if item.location() != Location::CheckedOut {
            warn!(location = %item.location(), "item is not checked out");
            return Err(CirculationError::AlreadyInLibrary(item_id));
        }

        let holder = item.checked_out_by();
        let removed = holder.and_then(|id| {
            find_patron_mut(members, id).map(|patron| patron.remove_item(item_id))
        });
        match removed {
            Some(true) => {}
            Some(false) => warn!(holder = ?holder, "holder was not tracking the item"),
            None => warn!(holder = ?holder, "checked-out item has no known holder"),
        }

        item.set_checked_out_by(None);

        let hold_pending = item.requested_by().is_some();
        if hold_pending {
            item.set_location(Location::OnHoldShelf);
        } else {
            item.set_location(Location::OnShelf);
        }

        history.push(HistoryEntry {
            day: today,
            event: CirculationEvent::Returned {
                item: item_id,
                patron: holder,
                hold_pending,
            },
        });
        debug!(location = %item.location(), "returned");

        Ok(Success::Returned)
    }

    /// Places a hold on an item for a patron.
    ///
    /// An item on the open shelf moves to the hold shelf straight away. A
    /// checked-out item stays with its holder and goes to the hold shelf when
    /// it is returned.
    ///
    /// # Errors
    ///
    /// - [`CirculationError::PatronNotFound`] or
    ///   [`CirculationError::ItemNotFound`] if either identifier is unknown
    /// - [`CirculationError::AlreadyOnHold`] if anyone (including this patron)
    ///   already has a hold on the item
    #[instrument(skip(self))]
    pub fn request(
        &mut self,
        patron_id: PatronId,
        item_id: ItemId,
    ) -> Result<Success, CirculationError> {
        if self.lookup_patron(patron_id).is_none() {
            return Err(CirculationError::PatronNotFound(patron_id));
        }

        let today = self.current_date;
        let item = find_item_mut(&mut self.holdings, item_id)
            .ok_or(CirculationError::ItemNotFound(item_id))?;

        if let Some(existing) = item.requested_by() {
            warn!(requested_by = %existing, "item already on hold");
            return Err(CirculationError::AlreadyOnHold(item_id));
        }

        item.set_requested_by(Some(patron_id));

        if item.location() == Location::OnShelf {
            item.set_location(Location::OnHoldShelf);
        }
        debug!(location = %item.location(), "hold placed");

        self.history.push(HistoryEntry {
            day: today,
            event: CirculationEvent::Requested {
                item: item_id,
                patron: patron_id,
            },
        });

        Ok(Success::Requested)
    }

    /// Applies a payment to a patron's fines.
    ///
    /// The amount is not checked: overpaying leaves a negative balance, and a
    /// negative amount increases the debt.
    ///
    /// # Errors
    ///
    /// Returns [`CirculationError::PatronNotFound`] if the identifier is
    /// unknown.
    #[instrument(skip(self))]
    pub fn pay_fine(
        &mut self,
        patron_id: PatronId,
        amount: Decimal,
    ) -> Result<Success, CirculationError> {
        let patron = find_patron_mut(&mut self.members, patron_id)
            .ok_or(CirculationError::PatronNotFound(patron_id))?;

        patron.amend_fine(-amount);
        debug!(balance = %patron.fine_amount(), "payment applied");

        self.history.push(HistoryEntry {
            day: self.current_date,
            event: CirculationEvent::FinePaid {
                patron: patron_id,
                amount,
            },
        });

        Ok(Success::FinePaid)
    }

    /// Moves the simulated clock forward one day and charges overdue fines.
    ///
    /// Every item a patron holds past its loan period adds the daily fine to
    /// that patron's balance. This repeats each day until the item is returned.
    #[instrument(skip(self))]
    pub fn advance_day(&mut self) {
        self.current_date = self.current_date.saturating_add(1);
        let today = self.current_date;

        let Self {
            holdings,
            members,
            config,
            history,
            ..
        } = self;
        let holdings: &[Item] = holdings;
        let config: &Config = config;

        history.push(HistoryEntry {
            day: today,
            event: CirculationEvent::DayAdvanced,
        });

        for patron in members.iter_mut() {
            let overdue: Vec<ItemId> = patron
                .checked_out_items()
                .iter()
                .copied()
                .filter(|id| {
                    find_item(holdings, *id)
                        .and_then(|item| days_overdue(item, config, today))
                        .is_some()
                })
                .collect();

            for item in overdue {
                patron.amend_fine(config.daily_fine);
                info!(
                    patron = %patron.id(),
                    %item,
                    balance = %patron.fine_amount(),
                    "overdue fine charged"
                );
                history.push(HistoryEntry {
                    day: today,
                    event: CirculationEvent::FineAccrued {
                        patron: patron.id(),
                        item,
                        amount: config.daily_fine,
                    },
                });
            }
        }
    }

    /// Every held item that is past its loan period as of today.
    #[must_use]
    pub fn overdue_items(&self) -> Vec<Overdue> {
        self.members
            .iter()
            .flat_map(|patron| {
                patron.checked_out_items().iter().filter_map(move |id| {
                    let item = find_item(&self.holdings, *id)?;
                    let days = days_overdue(item, &self.config, self.current_date)?;
                    Some(Overdue {
                        patron: patron.id(),
                        item: *id,
                        days,
                    })
                })
            })
            .collect()
    }
}

fn find_item(holdings: &[Item], id: ItemId) -> Option<&Item> {
    holdings.iter().find(|item| item.id() == id)
}

fn find_item_mut(holdings: &mut [Item], id: ItemId) -> Option<&mut Item> {
    holdings.iter_mut().find(|item| item.id() == id)
}

fn find_patron_mut(members: &mut [Patron], id: PatronId) -> Option<&mut Patron> {
    members.iter_mut().find(|patron| patron.id() == id)
}

/// Days beyond the loan period, or `None` if the item is not overdue.
fn days_overdue(item: &Item, config: &Config, today: Day) -> Option<Day> {
    let held = today.checked_sub(item.date_checked_out()?)?;
    held.checked_sub(config.loan_period(item.kind()))
        .filter(|days| *days > 0)
}
