pub mod args;
pub mod client;
pub mod config;
pub mod error;
pub mod records;
pub mod report;
pub mod utils;

pub use args::Args;
pub use client::HistoryClient;
pub use config::Config;
pub use error::FetchError;
pub use records::{DnsHistory, HistoryRecord, RecordValue};
pub use report::{print_history, render_history};
