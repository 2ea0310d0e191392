//! Domain model for stable-release-update task creation.
//!
//! Pure value types mirroring the remote service's bug/task object model,
//! with all infrastructure concerns kept outside of the domain boundary.

mod bug;
mod error;
mod ids;
mod person;
mod status;
mod target;

pub use bug::{Bug, BugTask};
pub use error::{ParseImportanceError, ParseTaskStatusError, SruDomainError};
pub use ids::{BugId, PackageName, SeriesName, TaskLink};
pub use person::Person;
pub use status::{Importance, TaskStatus};
pub use target::TaskTarget;
