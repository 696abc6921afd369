//! Reporting aggregations.
//!
//! Pure functions over the loaded collections: revenue and expense grouped
//! by day over an inclusive date range, ticket distribution per route, and
//! the dashboard summary. Records with unparsable dates are skipped and
//! logged, never fatal.

pub mod distribution;
pub mod expense;
pub mod range;
pub mod revenue;
pub mod summary;

pub use distribution::{RouteDistribution, route_distribution};
pub use expense::{DailyExpense, ExpenseReport, expense_report};
pub use range::DateRange;
pub use revenue::{DailyRevenue, RevenueReport, revenue_report};
pub use summary::{Summary, SummaryInput, summarize};
