mod version_priority;

pub use version_priority::VersionPriority;
