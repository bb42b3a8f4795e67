//! Data models module
//!
//! Contains the word categories and the word bank that feeds each round.

pub mod category;
pub mod word_bank;

// Re-export commonly used types
pub use category::Category;
pub use word_bank::WordBank;
