//! Data records shared by the storage, journal and export layers.

pub mod entry;
pub mod settings;

pub use entry::Entry;
pub use settings::Settings;
