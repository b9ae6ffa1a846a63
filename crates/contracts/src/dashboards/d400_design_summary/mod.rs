pub mod dto;

pub use dto::{DesignSummary, SummaryLine};
