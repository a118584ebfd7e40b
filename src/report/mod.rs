pub mod builder;
pub mod format;

pub use builder::{ReportError, project_pattern};
