use std::fmt;

/// A simulated calendar day.
///
/// Days are plain counters starting from zero when a library is created.
pub type Day = u32;

/// Unique identifier of an item in a library's holdings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u64);

impl ItemId {
    /// Create an item identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

/// Unique identifier of a library member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatronId(u64);

impl PatronId {
    /// Create a patron identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for PatronId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "patron-{}", self.0)
    }
}

/// The kind of a circulating item.
///
/// Each kind carries the one descriptive attribute that distinguishes it, and
/// determines how long the item may be borrowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// A book, described by its author.
    Book {
        /// The book's author.
        author: String,
    },
    /// A music album, described by its artist.
    Album {
        /// The recording artist.
        artist: String,
    },
    /// A film, described by its director.
    Movie {
        /// The film's director.
        director: String,
    },
}

impl ItemKind {
    /// Number of days a book may be held before it becomes overdue.
    pub const BOOK_CHECKOUT_LENGTH: Day = 21;
    /// Number of days an album may be held before it becomes overdue.
    pub const ALBUM_CHECKOUT_LENGTH: Day = 14;
    /// Number of days a movie may be held before it becomes overdue.
    pub const MOVIE_CHECKOUT_LENGTH: Day = 7;

    /// The number of days this kind of item may be checked out for.
    #[must_use]
    pub const fn checkout_length(&self) -> Day {
        match self {
            Self::Book { .. } => Self::BOOK_CHECKOUT_LENGTH,
            Self::Album { .. } => Self::ALBUM_CHECKOUT_LENGTH,
            Self::Movie { .. } => Self::MOVIE_CHECKOUT_LENGTH,
        }
    }

    /// The author, artist, or director, depending on the kind.
    #[must_use]
    pub fn creator(&self) -> &str {
        match self {
            Self::Book { author } => author,
            Self::Album { artist } => artist,
            Self::Movie { director } => director,
        }
    }

    /// A short, stable name for the kind.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Book { .. } => "book",
            Self::Album { .. } => "album",
            Self::Movie { .. } => "movie",
        }
    }
}

/// Where an item currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Location {
    /// Available for anyone to check out.
    #[default]
    OnShelf,
    /// Reserved for the patron who requested it.
    OnHoldShelf,
    /// Borrowed by a patron.
    CheckedOut,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::OnShelf => "ON_SHELF",
            Self::OnHoldShelf => "ON_HOLD_SHELF",
            Self::CheckedOut => "CHECKED_OUT",
        };
        f.write_str(s)
    }
}

/// A circulating library holding.
///
/// The cross-references to patrons are plain identifiers. The
/// [`Library`](crate::Library) that owns the item is responsible for keeping
/// them consistent: an item is [`Location::CheckedOut`] exactly when
/// [`Item::checked_out_by`] is set. The setters perform no validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    title: String,
    kind: ItemKind,
    location: Location,
    checked_out_by: Option<PatronId>,
    requested_by: Option<PatronId>,
    date_checked_out: Option<Day>,
}

impl Item {
    /// Create an item of the given kind, initially on the shelf.
    #[must_use]
    pub fn new(id: ItemId, title: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id,
            title: title.into(),
            kind,
            location: Location::default(),
            checked_out_by: None,
            requested_by: None,
            date_checked_out: None,
        }
    }

    /// Create a book.
    #[must_use]
    pub fn book(id: ItemId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self::new(
            id,
            title,
            ItemKind::Book {
                author: author.into(),
            },
        )
    }

    /// Create an album.
    #[must_use]
    pub fn album(id: ItemId, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self::new(
            id,
            title,
            ItemKind::Album {
                artist: artist.into(),
            },
        )
    }

    /// Create a movie.
    #[must_use]
    pub fn movie(id: ItemId, title: impl Into<String>, director: impl Into<String>) -> Self {
        Self::new(
            id,
            title,
            ItemKind::Movie {
                director: director.into(),
            },
        )
    }

    /// The item's identifier.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// The item's title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// What kind of item this is.
    #[must_use]
    pub const fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// The standard loan period for this kind of item.
    ///
    /// A library configured with different loan periods applies its own; see
    /// [`Library::loan_period`](crate::Library::loan_period).
    #[must_use]
    pub const fn checkout_length(&self) -> Day {
        self.kind.checkout_length()
    }

    /// Where the item currently is.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// The patron currently holding the item, if any.
    #[must_use]
    pub const fn checked_out_by(&self) -> Option<PatronId> {
        self.checked_out_by
    }

    /// The patron with an outstanding hold on the item, if any.
    #[must_use]
    pub const fn requested_by(&self) -> Option<PatronId> {
        self.requested_by
    }

    /// The day the item was last checked out.
    ///
    /// This is not cleared when the item is returned.
    #[must_use]
    pub const fn date_checked_out(&self) -> Option<Day> {
        self.date_checked_out
    }

    /// Set where the item is.
    pub const fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    /// Set (or clear) the patron holding the item.
    pub const fn set_checked_out_by(&mut self, patron: Option<PatronId>) {
        self.checked_out_by = patron;
    }

    /// Set (or clear) the patron with a hold on the item.
    pub const fn set_requested_by(&mut self, patron: Option<PatronId>) {
        self.requested_by = patron;
    }

    /// Set (or clear) the day the item was checked out.
    pub const fn set_date_checked_out(&mut self, day: Option<Day>) {
        self.date_checked_out = day;
    }
}
