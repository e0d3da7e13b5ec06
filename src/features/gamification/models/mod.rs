mod user_stats;

pub use user_stats::{Badge, UserStats};
