pub mod config;
pub mod distance;
pub mod history;
pub mod report;
pub mod scanner;
pub mod signals;
pub mod trust;

pub use config::Config;
pub use history::ScanRecord;
pub use report::{RiskLevel, RiskReport};
pub use scanner::RiskScanner;
