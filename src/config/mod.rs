pub mod consts;
pub mod dashboard;

// Re-export for convenience
pub use dashboard::{CliArgs, DashboardConfig};
