/// ProgressReporter port for reporting progress of the CLI
///
/// This port abstracts progress reporting (e.g., to stderr)
/// so that it never interferes with the inventory written to stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
