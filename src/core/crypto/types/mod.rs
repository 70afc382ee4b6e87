/*!
Type definitions for the crypto subsystem.
*/

pub mod algorithms;
pub mod sizes;

pub use algorithms::{CandidateList, Role};
pub use sizes::{length_or_sentinel, KemSizes, SignatureSizes};
