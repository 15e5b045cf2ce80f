//! Core data model.

mod probe;
mod report;
mod resolution;
mod subject;

pub use probe::{ExistenceRule, ProbeOutcome, ProbeResult, ProbeSpec};
pub use report::{ReportDocument, ReportEntry};
pub use resolution::ResolutionResult;
pub use subject::{Subject, SubjectKind};
