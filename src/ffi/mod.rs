/*!
Foreign Function Interface (FFI) module for the PQC adapter.

This module provides C-compatible bindings to the KEM and signature
adapters, allowing them to be used from C and from any language with a
C FFI.
*/

mod c_api;

pub use c_api::*;
