/*!
Memory handling for secret material.
*/

pub mod secret;

pub use secret::{wipe, SecretBuffer, SecretScope};
