/*!
Traits at the boundary with the underlying cryptographic library.
*/

pub mod kem;
pub mod provider;
pub mod signature;

pub use kem::KemInstance;
pub use provider::Provider;
pub use signature::SignatureInstance;
