//! Chart builders: aggregated records in, geometry scenes out.
//!
//! Each builder runs one pipeline end to end: group the shared record
//! table, build the categorical and quantitative scales from the aggregated
//! domains, and map the result to an immutable [`crate::mark::Scene`]. The
//! three pipelines are independent; nothing is cached between them.

pub mod bars;
pub mod boxplot;
pub mod line;

pub use bars::GroupedBarChart;
pub use boxplot::BoxChart;
pub use line::DailyLineChart;
