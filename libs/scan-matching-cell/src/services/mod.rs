pub mod matcher;

pub use matcher::{find_best_match, score, ClientMatcher};
