/*!
Scoped wiping of secret buffers.

Shared secrets and the digests derived from them live only inside a
[`SecretBuffer`] or a [`SecretScope`]. Both overwrite their bytes with zeros
when dropped, on the success path, on early `?` returns and while unwinding.
The clear goes through `zeroize`, whose volatile writes are not removed as
dead stores.
*/

use std::fmt;
use std::ops::{Deref, DerefMut};

use zeroize::Zeroize;

/// Overwrite `bytes` with zeros
#[inline]
pub fn wipe(bytes: &mut [u8]) {
    bytes.zeroize();
}

/// Heap buffer for secret material, wiped then freed on drop
pub struct SecretBuffer {
    bytes: Vec<u8>,
}

impl SecretBuffer {
    /// Allocate `len` zero bytes
    pub fn zeroed(len: usize) -> Self {
        Self { bytes: vec![0u8; len] }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Deref for SecretBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl DerefMut for SecretBuffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl Drop for SecretBuffer {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl fmt::Debug for SecretBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer([REDACTED; {}])", self.bytes.len())
    }
}

/// Borrowed scratch storage that is wiped when the scope ends.
///
/// Used where the caller owns the memory, such as a stack digest buffer.
pub struct SecretScope<'a> {
    bytes: &'a mut [u8],
}

impl<'a> SecretScope<'a> {
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes }
    }
}

impl Deref for SecretScope<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.bytes
    }
}

impl DerefMut for SecretScope<'_> {
    fn deref_mut(&mut self) -> &mut [u8] {
        self.bytes
    }
}

impl Drop for SecretScope<'_> {
    fn drop(&mut self) {
        wipe(self.bytes);
    }
}

impl fmt::Debug for SecretScope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretScope([REDACTED; {}])", self.bytes.len())
    }
}
