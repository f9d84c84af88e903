pub mod collection;
pub mod exclude;

pub use collection::scan_directory;
pub use exclude::Exclusions;
