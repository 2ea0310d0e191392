//! Release directories: the distro-info CSV database and a static set.

use crate::sru::domain::{SeriesName, SruDomainError};
use crate::sru::ports::ReleaseDirectory;
use chrono::NaiveDate;
use mockable::Clock;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Default location of the distribution release database.
pub const DEFAULT_DATABASE_PATH: &str = "/usr/share/distro-info/ubuntu.csv";

/// Errors raised while loading the distro-info database.
#[derive(Debug, Error)]
pub enum DistroInfoError {
    /// The database file could not be read.
    #[error("cannot read release database: {0}")]
    Io(#[from] std::io::Error),

    /// A row is missing one of the required columns.
    #[error("release database row {line} is missing column '{column}'")]
    MissingColumn {
        /// 1-based line number of the offending row.
        line: usize,
        /// Name of the missing column.
        column: &'static str,
    },

    /// A date cell could not be parsed.
    #[error("release database row {line} has invalid date '{value}'")]
    InvalidDate {
        /// 1-based line number of the offending row.
        line: usize,
        /// The unparseable cell contents.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: chrono::ParseError,
    },

    /// A series cell is not a valid codename.
    #[error(transparent)]
    InvalidSeries(#[from] SruDomainError),
}

#[derive(Debug, Clone)]
struct SeriesRow {
    series: SeriesName,
    release: Option<NaiveDate>,
    eol: Option<NaiveDate>,
}

impl SeriesRow {
    /// A series is a supported stable release between its release date and
    /// its end of life, inclusive. Rows without a release date are still in
    /// development; rows without an EOL date never expire on their own.
    fn is_supported_on(&self, today: NaiveDate) -> bool {
        match self.release {
            Some(release) if release <= today => self.eol.is_none_or(|eol| today <= eol),
            _ => false,
        }
    }
}

/// Release directory backed by the distro-info CSV database.
///
/// The database carries one row per series with its release and end-of-life
/// dates; the supported window is computed against the clock at load time.
#[derive(Debug, Clone)]
pub struct DistroInfoDb {
    rows: Vec<SeriesRow>,
    today: NaiveDate,
}

impl DistroInfoDb {
    /// Loads the database from a file path.
    ///
    /// # Errors
    ///
    /// Returns [`DistroInfoError`] when the file is unreadable or malformed.
    pub fn from_path(path: impl AsRef<Path>, clock: &impl Clock) -> Result<Self, DistroInfoError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), clock)
    }

    /// Parses the database from any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`DistroInfoError`] when a row is malformed.
    pub fn from_reader(
        reader: impl BufRead,
        clock: &impl Clock,
    ) -> Result<Self, DistroInfoError> {
        let mut rows = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            // First row is the column header.
            if index == 0 || line.trim().is_empty() {
                continue;
            }
            rows.push(parse_row(index + 1, &line)?);
        }
        Ok(Self {
            rows,
            today: clock.utc().date_naive(),
        })
    }
}

fn parse_row(line_number: usize, line: &str) -> Result<SeriesRow, DistroInfoError> {
    // Columns: version,codename,series,created,release,eol,...
    // An empty release or eol cell is meaningful (still in development,
    // never expires); an absent cell is a malformed row.
    let missing = |column| DistroInfoError::MissingColumn {
        line: line_number,
        column,
    };
    let mut cells = line.split(',');
    let series_cell = cells.nth(2).ok_or_else(|| missing("series"))?;
    // `created` sits between series and release; skip it.
    let release_cell = cells.nth(1).ok_or_else(|| missing("release"))?;
    let eol_cell = cells.next().ok_or_else(|| missing("eol"))?;

    Ok(SeriesRow {
        series: SeriesName::new(series_cell)?,
        release: parse_date(line_number, release_cell)?,
        eol: parse_date(line_number, eol_cell)?,
    })
}

fn parse_date(line_number: usize, cell: &str) -> Result<Option<NaiveDate>, DistroInfoError> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|source| DistroInfoError::InvalidDate {
            line: line_number,
            value: trimmed.to_owned(),
            source,
        })
}

impl ReleaseDirectory for DistroInfoDb {
    fn supported(&self) -> Vec<SeriesName> {
        self.rows
            .iter()
            .filter(|row| row.is_supported_on(self.today))
            .map(|row| row.series.clone())
            .collect()
    }
}

/// Release directory over a fixed set of series.
///
/// Used in tests and when the CSV database is unavailable.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    supported: Vec<SeriesName>,
}

impl StaticDirectory {
    /// Creates a directory over the given supported series.
    #[must_use]
    pub fn new(supported: impl IntoIterator<Item = SeriesName>) -> Self {
        Self {
            supported: supported.into_iter().collect(),
        }
    }
}

impl ReleaseDirectory for StaticDirectory {
    fn supported(&self) -> Vec<SeriesName> {
        self.supported.clone()
    }
}
