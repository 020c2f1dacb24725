use rust_decimal::Decimal;

use crate::domain::item::{ItemId, PatronId};

/// A library member.
///
/// A patron holds references to the items they have checked out, and carries
/// a running fine balance. Positive balances are debt; nothing prevents the
/// balance from going negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patron {
    id: PatronId,
    name: String,
    checked_out_items: Vec<ItemId>,
    fine_amount: Decimal,
}

impl Patron {
    /// Create a patron with no items and no fines.
    #[must_use]
    pub fn new(id: PatronId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            checked_out_items: Vec::new(),
            fine_amount: Decimal::ZERO,
        }
    }

    /// The patron's identifier.
    #[must_use]
    pub const fn id(&self) -> PatronId {
        self.id
    }

    /// The patron's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items currently checked out, in the order they were borrowed.
    #[must_use]
    pub fn checked_out_items(&self) -> &[ItemId] {
        &self.checked_out_items
    }

    /// The outstanding fine balance.
    #[must_use]
    pub const fn fine_amount(&self) -> Decimal {
        self.fine_amount
    }

    /// Record an item as held by this patron.
    ///
    /// Duplicates are not checked.
    pub fn add_item(&mut self, item: ItemId) {
        self.checked_out_items.push(item);
    }

    /// Remove the first occurrence of an item from the patron's held list.
    ///
    /// Returns `false` if the patron was not holding the item.
    pub fn remove_item(&mut self, item: ItemId) -> bool {
        let pos = self.checked_out_items.iter().position(|id| *id == item);
        pos.map(|pos| self.checked_out_items.remove(pos)).is_some()
    }

    /// Adjust the fine balance.
    ///
    /// Positive amounts add to the debt, negative amounts reduce it. The
    /// balance is not clamped at zero. It saturates at the limits of
    /// [`Decimal`] instead of overflowing.
    pub fn amend_fine(&mut self, delta: Decimal) {
        self.fine_amount = self.fine_amount.saturating_add(delta);
    }
}
