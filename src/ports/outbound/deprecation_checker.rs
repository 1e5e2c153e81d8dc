/// DeprecationChecker port for notices about deprecated features
///
/// Implementations own the suppression policy (e.g. warn once per
/// message). Callers must treat the check as advisory and carry on.
pub trait DeprecationChecker {
    /// Notifies that a deprecated feature is in use
    ///
    /// # Arguments
    /// * `warn_only` - `true` if the feature is merely discouraged, `false`
    ///   if it is scheduled for removal
    /// * `message` - Notice directing the user to the replacement
    fn check(&self, warn_only: bool, message: &str);
}
