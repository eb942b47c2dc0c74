pub mod operations;
pub mod report;
pub mod rewriter;

pub use operations::{UpdateOperations, UpdateSettings};
pub use report::UpdateReport;
