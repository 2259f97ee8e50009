pub mod config;
pub mod logging;
pub mod lru_cache;
pub mod two_sum;

// Re-export the main types for easy access
pub use config::{Config, LogOutput};
pub use logging::{init_logging, ConditionalLocationFormatter};
pub use lru_cache::LruCache;
pub use two_sum::{find_pair_sum, find_pair_sum_brute_force, PairSum};
