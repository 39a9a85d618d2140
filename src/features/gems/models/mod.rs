mod trending;

pub use trending::{TrendingEntry, TrendingToken};
