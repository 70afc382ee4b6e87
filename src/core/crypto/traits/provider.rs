/*!
The instance-creation boundary with the underlying library.
*/

use super::kem::KemInstance;
use super::signature::SignatureInstance;

/// Creates algorithm instances by identifier.
///
/// Returning `None` means the identifier is not supported by this
/// installation; the resolver then moves on to the next candidate.
pub trait Provider: Send + Sync {
    /// Create a KEM instance for `name`
    fn new_kem(&self, name: &str) -> Option<Box<dyn KemInstance>>;

    /// Create a signature instance for `name`
    fn new_signature(&self, name: &str) -> Option<Box<dyn SignatureInstance>>;
}

impl<P: Provider + ?Sized> Provider for std::sync::Arc<P> {
    fn new_kem(&self, name: &str) -> Option<Box<dyn KemInstance>> {
        (**self).new_kem(name)
    }

    fn new_signature(&self, name: &str) -> Option<Box<dyn SignatureInstance>> {
        (**self).new_signature(name)
    }
}
