//! Lynch-style fundamentals screening.
//!
//! A company passes through the hard-fail gate, is scored on value, growth,
//! quality and balance, and comes out with a 0 to 100 score, a rating, a
//! category and the reasons behind each point.

pub mod aggregate;
pub mod category;
pub mod config;
pub mod dimensions;
pub mod error;
pub mod gate;
pub mod metrics;
pub mod points;
pub mod profile;
pub mod ranker;
pub mod screener;


pub use config::ScoringConfig;
pub use error::{ConfigError, ScreenError};
pub use profile::RiskProfile;
pub use screener::{screen_fundamentals, Screener};
