/// ProgressReporter port for reporting progress during generation
///
/// This port abstracts progress reporting (e.g., to stderr) so that
/// stdout stays free for the document when it is printed there.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a message that is only of interest in verbose mode
    /// (command lines, which manifest supplied a package's data)
    fn report_verbose(&self, message: &str);

    /// Reports progress through a sequence of steps
    ///
    /// # Arguments
    /// * `current` - Number of steps completed
    /// * `total` - Total number of steps
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
