pub mod match_mode;

pub use match_mode::MatchMode;
