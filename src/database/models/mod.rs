pub mod bet_entry;

pub use bet_entry::*;
