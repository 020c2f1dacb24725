//! End-to-end circulation scenarios driven through the public API.

#![allow(missing_docs)]

use circulation::{
    CirculationError, Decimal, Item, ItemId, Library, Location, Patron, PatronId, Success,
};

const ALICE: PatronId = PatronId::new(1);
const BOB: PatronId = PatronId::new(2);
const DUNE: ItemId = ItemId::new(1);

fn dune_and_alice() -> Library {
    let mut library = Library::new();
    library.add_item(Item::book(ItemId::new(1), "Dune", "Herbert"));
    library.add_patron(Patron::new(PatronId::new(1), "Alice"));
    library
}

fn location(library: &Library, id: ItemId) -> Location {
    library.lookup_item(id).unwrap().location()
}

fn fine(library: &Library, id: PatronId) -> Decimal {
    library.lookup_patron(id).unwrap().fine_amount()
}

fn assert_holder_matches_location(library: &Library) {
    for item in library.items() {
        assert_eq!(
            item.location() == Location::CheckedOut,
            item.checked_out_by().is_some(),
            "{} is {} with holder {:?}",
            item.id(),
            item.location(),
            item.checked_out_by()
        );
    }
}

#[test]
fn checkout_and_return_a_book() {
    let mut library = dune_and_alice();

    let outcome = library.checkout(ALICE, DUNE).unwrap();
    assert_eq!(outcome.to_string(), "check out successful");
    assert_eq!(location(&library, DUNE), Location::CheckedOut);

    let err = library.checkout(BOB, DUNE).unwrap_err();
    assert_eq!(err.to_string(), "patron not found");

    let outcome = library.return_item(DUNE).unwrap();
    assert_eq!(outcome.to_string(), "return successful");
    assert_eq!(location(&library, DUNE), Location::OnShelf);

    assert_holder_matches_location(&library);
}

#[test]
fn hold_placed_on_checked_out_item_passes_to_requester() {
    let mut library = dune_and_alice();
    library.add_patron(Patron::new(PatronId::new(2), "Bob"));
    library.checkout(ALICE, DUNE).unwrap();

    let outcome = library.request(BOB, DUNE).unwrap();
    assert_eq!(outcome.to_string(), "request successful");
    assert_eq!(location(&library, DUNE), Location::CheckedOut);
    assert_eq!(library.lookup_item(DUNE).unwrap().requested_by(), Some(BOB));
    assert_holder_matches_location(&library);

    library.return_item(DUNE).unwrap();
    assert_eq!(location(&library, DUNE), Location::OnHoldShelf);
    assert_holder_matches_location(&library);

    assert_eq!(
        library.checkout(ALICE, DUNE),
        Err(CirculationError::OnHoldByOtherPatron(DUNE))
    );
    assert_eq!(library.checkout(BOB, DUNE), Ok(Success::CheckedOut));

    let dune = library.lookup_item(DUNE).unwrap();
    assert_eq!(dune.requested_by(), None);
    assert_eq!(dune.checked_out_by(), Some(BOB));
    assert_eq!(library.lookup_patron(BOB).unwrap().checked_out_items(), &[DUNE]);
    assert!(library.lookup_patron(ALICE).unwrap().checked_out_items().is_empty());
    assert_holder_matches_location(&library);
}

#[test]
fn second_hold_is_refused() {
    let mut library = dune_and_alice();
    library.add_patron(Patron::new(PatronId::new(2), "Bob"));

    library.request(ALICE, DUNE).unwrap();
    let err = library.request(BOB, DUNE).unwrap_err();
    assert_eq!(err.to_string(), "item already on hold");
}

#[test]
fn returning_an_item_on_the_shelf_fails() {
    let mut library = dune_and_alice();
    let err = library.return_item(DUNE).unwrap_err();
    assert_eq!(err.to_string(), "item already in library");
}

#[test]
fn book_fines_accrue_after_three_weeks() {
    let mut library = dune_and_alice();
    library.checkout(ALICE, DUNE).unwrap();

    for _ in 0..21 {
        library.advance_day();
    }
    assert_eq!(fine(&library, ALICE), Decimal::ZERO);

    library.advance_day();
    assert_eq!(fine(&library, ALICE), Decimal::new(10, 2));

    library.advance_day();
    assert_eq!(fine(&library, ALICE), Decimal::new(20, 2));
}

#[test]
fn fines_grow_by_a_tenth_per_overdue_day() {
    let mut library = dune_and_alice();
    library.checkout(ALICE, DUNE).unwrap();

    for _ in 0..21 {
        library.advance_day();
    }
    for n in 1..=30_i64 {
        library.advance_day();
        assert_eq!(fine(&library, ALICE), Decimal::new(10 * n, 2));
    }
}

#[test]
fn paying_a_fine_reduces_the_balance() {
    let mut library = dune_and_alice();
    library.checkout(ALICE, DUNE).unwrap();
    for _ in 0..25 {
        library.advance_day();
    }
    assert_eq!(fine(&library, ALICE), Decimal::new(40, 2));

    let outcome = library.pay_fine(ALICE, Decimal::new(25, 2)).unwrap();
    assert_eq!(outcome.to_string(), "payment successful");
    assert_eq!(fine(&library, ALICE), Decimal::new(15, 2));

    let err = library.pay_fine(BOB, Decimal::ONE).unwrap_err();
    assert_eq!(err.to_string(), "patron not found");
}

#[test]
fn holder_and_location_stay_in_step_through_a_busy_day() {
    let mut library = Library::new();
    library.add_item(Item::book(ItemId::new(1), "Dune", "Herbert"));
    library.add_item(Item::album(ItemId::new(2), "Blue", "Joni Mitchell"));
    library.add_item(Item::movie(ItemId::new(3), "Alien", "Scott"));
    library.add_patron(Patron::new(PatronId::new(1), "Alice"));
    library.add_patron(Patron::new(PatronId::new(2), "Bob"));

    let end_of_day = |library: &mut Library| {
        library.advance_day();
        assert_holder_matches_location(library);
    };

    assert_eq!(library.checkout(ALICE, ItemId::new(1)), Ok(Success::CheckedOut));
    end_of_day(&mut library);
    assert_eq!(library.request(BOB, ItemId::new(2)), Ok(Success::Requested));
    end_of_day(&mut library);
    assert_eq!(
        library.checkout(ALICE, ItemId::new(2)),
        Err(CirculationError::OnHoldByOtherPatron(ItemId::new(2)))
    );
    end_of_day(&mut library);
    assert_eq!(library.request(ALICE, ItemId::new(1)), Ok(Success::Requested));
    end_of_day(&mut library);
    assert_eq!(library.return_item(ItemId::new(1)), Ok(Success::Returned));
    assert_eq!(location(&library, ItemId::new(1)), Location::OnHoldShelf);
    end_of_day(&mut library);
    assert_eq!(library.checkout(BOB, ItemId::new(2)), Ok(Success::CheckedOut));
    end_of_day(&mut library);
    assert_eq!(library.checkout(ALICE, ItemId::new(1)), Ok(Success::CheckedOut));
    end_of_day(&mut library);
    assert_eq!(library.checkout(BOB, ItemId::new(3)), Ok(Success::CheckedOut));
    end_of_day(&mut library);
    assert_eq!(library.return_item(ItemId::new(3)), Ok(Success::Returned));
    end_of_day(&mut library);
    assert_eq!(
        library.return_item(ItemId::new(3)),
        Err(CirculationError::AlreadyInLibrary(ItemId::new(3)))
    );
    end_of_day(&mut library);

    assert_eq!(location(&library, ItemId::new(1)), Location::CheckedOut);
    assert_eq!(location(&library, ItemId::new(2)), Location::CheckedOut);
    assert_eq!(location(&library, ItemId::new(3)), Location::OnShelf);
    assert_eq!(
        library.lookup_patron(ALICE).unwrap().checked_out_items(),
        &[ItemId::new(1)]
    );
    assert_eq!(
        library.lookup_patron(BOB).unwrap().checked_out_items(),
        &[ItemId::new(2)]
    );
}

#[test]
fn refused_calls_change_nothing() {
    let mut library = dune_and_alice();
    library.add_patron(Patron::new(PatronId::new(2), "Bob"));
    library.checkout(ALICE, DUNE).unwrap();
    library.request(BOB, DUNE).unwrap();

    let items = library.items().to_vec();
    let patrons = library.patrons().to_vec();

    assert!(library.checkout(BOB, DUNE).is_err());
    assert!(library.checkout(ALICE, DUNE).is_err());
    assert!(library.request(ALICE, DUNE).is_err());
    assert!(library.checkout(PatronId::new(3), DUNE).is_err());
    assert!(library.return_item(ItemId::new(5)).is_err());
    assert!(library.pay_fine(PatronId::new(3), Decimal::ONE).is_err());

    assert_eq!(library.items(), items.as_slice());
    assert_eq!(library.patrons(), patrons.as_slice());
}

#[test]
fn paying_the_largest_possible_amount_never_fails() {
    let mut library = dune_and_alice();
    assert_eq!(library.pay_fine(ALICE, Decimal::MAX), Ok(Success::FinePaid));
    assert_eq!(library.pay_fine(ALICE, Decimal::MAX), Ok(Success::FinePaid));
    assert_eq!(fine(&library, ALICE), Decimal::MIN);
}
