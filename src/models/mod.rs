pub mod entry;
pub mod preferences;

pub use entry::Entry;
pub use preferences::Preferences;
