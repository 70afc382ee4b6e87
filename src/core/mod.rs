//! Core components for the PQC adapter.
//!
//! This module contains algorithm resolution, the KEM and signature adapters,
//! secret-buffer handling and error handling.

// Export cryptographic functionality
pub mod crypto;

// Export memory handling for sensitive data
pub mod memory;

// Adapter constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::error::{BufferKind, Error, PrimitiveError, Result, ResultCode};
