//! Service layer
//!
//! Services contain the business logic of a sync cycle: choosing which
//! orders matter, fetching their detail with retries, and reporting the
//! outcome. Output goes through a trait so tests can capture it.

mod detail;
mod filter;
mod report;
pub mod retry;

pub use detail::DetailFetcher;
pub use filter::ValueFilter;
pub use report::{ReportEvent, ReportSink, StdoutReportSink};

#[cfg(test)]
pub use report::InMemoryReportSink;
