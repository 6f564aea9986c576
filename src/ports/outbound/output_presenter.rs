use crate::shared::Result;

/// OutputPresenter port for presenting the serialized document
///
/// This port abstracts the output destination (file, stdout).
pub trait OutputPresenter {
    /// Writes the serialized document to the destination in one piece
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination is a symbolic link or its directory is missing
    fn present(&self, content: &str) -> Result<()>;
}
