//! Task target classification.

use super::{PackageName, SeriesName};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Target of a bug task.
///
/// A generic target is a bare package with no series binding: the
/// "nominated" placeholder the service auto-creates for the development
/// release. A series-bound target tracks the bug against one specific
/// distribution series and acts as the template for new stable tasks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskTarget {
    /// Bare package target, not bound to any series.
    Generic {
        /// Source package the task tracks.
        package: PackageName,
    },
    /// Package target bound to one distribution series.
    SeriesBound {
        /// Source package the task tracks.
        package: PackageName,
        /// Series the task is bound to.
        series: SeriesName,
    },
}

impl TaskTarget {
    /// Returns the source package regardless of series binding.
    #[must_use]
    pub const fn package(&self) -> &PackageName {
        match self {
            Self::Generic { package } | Self::SeriesBound { package, .. } => package,
        }
    }

    /// Returns the bound series, if any.
    #[must_use]
    pub const fn series(&self) -> Option<&SeriesName> {
        match self {
            Self::Generic { .. } => None,
            Self::SeriesBound { series, .. } => Some(series),
        }
    }

    /// Returns `true` for the nominated (series-less) placeholder form.
    #[must_use]
    pub const fn is_nominated(&self) -> bool {
        matches!(self, Self::Generic { .. })
    }
}

impl fmt::Display for TaskTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic { package } => write!(f, "{package}"),
            Self::SeriesBound { package, series } => write!(f, "{package} ({series})"),
        }
    }
}
