//! Command implementations

pub mod define;
pub mod simple;
pub mod words;

pub use define::define_word;
pub use simple::run_simple;
pub use words::list_words;
