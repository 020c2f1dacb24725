use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::item::{Day, ItemKind};

/// Circulation policy for a library.
///
/// The default configuration reproduces the standard loan periods (21 days for
/// books, 14 for albums, 7 for movies) and a daily overdue fine of 0.10.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// How long each kind of item may be held before it is overdue.
    pub loan_periods: LoanPeriods,

    /// The amount added to a patron's fine for each overdue item, each day.
    pub daily_fine: Decimal,
}

/// Loan period, in days, for each kind of item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanPeriods {
    /// Loan period for books.
    #[serde(default = "default_book")]
    pub book: Day,
    /// Loan period for albums.
    #[serde(default = "default_album")]
    pub album: Day,
    /// Loan period for movies.
    #[serde(default = "default_movie")]
    pub movie: Day,
}

impl Default for LoanPeriods {
    fn default() -> Self {
        Self {
            book: default_book(),
            album: default_album(),
            movie: default_movie(),
        }
    }
}

impl LoanPeriods {
    /// The loan period that applies to the given kind of item.
    #[must_use]
    pub const fn for_kind(&self, kind: &ItemKind) -> Day {
        match kind {
            ItemKind::Book { .. } => self.book,
            ItemKind::Album { .. } => self.album,
            ItemKind::Movie { .. } => self.movie,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            loan_periods: LoanPeriods::default(),
            daily_fine: default_daily_fine(),
        }
    }
}

/// Errors that can occur when reading or writing a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file contents are not a valid configuration.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// The configuration could not be rendered as TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The loan period that applies to the given kind of item.
    #[must_use]
    pub const fn loan_period(&self, kind: &ItemKind) -> Day {
        self.loan_periods.for_kind(kind)
    }
}

const fn default_book() -> Day {
    ItemKind::BOOK_CHECKOUT_LENGTH
}

const fn default_album() -> Day {
    ItemKind::ALBUM_CHECKOUT_LENGTH
}

const fn default_movie() -> Day {
    ItemKind::MOVIE_CHECKOUT_LENGTH
}

const fn default_daily_fine() -> Decimal {
    Decimal::from_parts(10, 0, 0, false, 2)
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        loan_periods: LoanPeriods,

        /// Fine per overdue item per day.
        #[serde(default = "default_daily_fine")]
        daily_fine: Decimal,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                loan_periods,
                daily_fine,
            } => Self {
                loan_periods,
                daily_fine,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            loan_periods: config.loan_periods,
            daily_fine: config.daily_fine,
        }
    }
}
