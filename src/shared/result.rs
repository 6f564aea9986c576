/// Crate-wide Result alias; typed `SpdxError`s are carried inside `anyhow::Error`
/// so adapters can attach context while callers can still downcast.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
