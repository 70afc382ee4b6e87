/*!
C API for the PQC adapter.

Exports the KEM (`pqkem512_*`) and signature (`pqsig2_*`) operations with
fixed-size buffers and integer result codes. Length queries return the length
or -1; every other call returns a [`ResultCode`].

Each exported operation resolves its algorithm once and sizes the caller's
buffers from that same instance.
*/

use std::{
    os::raw::{c_char, c_int},
    ptr, slice,
};

use libc::size_t;

use crate::core::constants::SESSION_KEY_LEN;
use crate::core::crypto::auth::{sign_with, verify_with};
use crate::core::crypto::key_exchange::{decapsulate_with, encapsulate_with};
use crate::core::crypto::{length_or_sentinel, KemAdapter, Provider, Resolver, SignatureAdapter, Verdict};
use crate::core::error::{Result, ResultCode};

// Helper function to convert Result to C result code
fn to_result_code(result: Result<()>) -> c_int {
    match result {
        Ok(()) => ResultCode::Success as c_int,
        Err(err) => err.code() as c_int,
    }
}

/// Borrow `len` bytes at `data`; a zero length accepts a null pointer.
///
/// # Safety
///
/// If `len > 0`, `data` must be valid for reads of `len` bytes.
unsafe fn input_slice<'a>(data: *const u8, len: usize) -> Option<&'a [u8]> {
    if len == 0 {
        return Some(&[]);
    }
    if data.is_null() {
        return None;
    }
    Some(unsafe { slice::from_raw_parts(data, len) })
}

// ================== KEM ==================

/// Write the resolved KEM's name into `out` as a NUL-terminated string,
/// truncated to fit
///
/// @param out Buffer to receive the name
/// @param out_len Size of `out` in bytes
/// @return 0 on success, 2 on bad arguments, 3 if no KEM is available
///
/// # Safety
///
/// `out` must be valid for writes of `out_len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pqkem512_name(out: *mut c_char, out_len: size_t) -> c_int {
    if out.is_null() || out_len == 0 {
        return ResultCode::BadArgument as c_int;
    }

    let name = match KemAdapter::new().name() {
        Ok(name) => name,
        Err(err) => return err.code() as c_int,
    };

    let bytes = name.as_bytes();
    let n = bytes.len().min(out_len - 1);
    unsafe {
        ptr::copy_nonoverlapping(bytes.as_ptr().cast::<c_char>(), out, n);
        *out.add(n) = 0;
    }
    ResultCode::Success as c_int
}

/// Public key length of the resolved KEM, or -1
#[unsafe(no_mangle)]
pub extern "C" fn pqkem512_pk_len() -> c_int {
    length_or_sentinel(KemAdapter::new().public_key_len())
}

/// Secret key length of the resolved KEM, or -1
#[unsafe(no_mangle)]
pub extern "C" fn pqkem512_sk_len() -> c_int {
    length_or_sentinel(KemAdapter::new().secret_key_len())
}

/// Ciphertext length of the resolved KEM, or -1
#[unsafe(no_mangle)]
pub extern "C" fn pqkem512_ct_len() -> c_int {
    length_or_sentinel(KemAdapter::new().ciphertext_len())
}

/// Session key length, always 16
#[unsafe(no_mangle)]
pub extern "C" fn pqkem512_k_len() -> c_int {
    SESSION_KEY_LEN as c_int
}

/// Generate a KEM key pair (test fixtures only)
///
/// @param pk_out Buffer of `pqkem512_pk_len()` bytes
/// @param sk_out Buffer of `pqkem512_sk_len()` bytes
/// @return 0 on success, non-zero result code on failure
///
/// # Safety
///
/// Both buffers must be valid for writes of the lengths above and must not
/// overlap.
#[cfg(feature = "keygen")]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pqkem512_keypair(pk_out: *mut u8, sk_out: *mut u8) -> c_int {
    unsafe { kem_keypair(&Resolver::new(), pk_out, sk_out) }
}

#[cfg(feature = "keygen")]
unsafe fn kem_keypair<P: Provider>(resolver: &Resolver<P>, pk_out: *mut u8, sk_out: *mut u8) -> c_int {
    if pk_out.is_null() || sk_out.is_null() {
        return ResultCode::BadArgument as c_int;
    }

    let kem = match resolver.resolve_kem() {
        Ok(kem) => kem,
        Err(err) => return err.code() as c_int,
    };

    let (pk, sk) = unsafe {
        (
            slice::from_raw_parts_mut(pk_out, kem.length_public_key()),
            slice::from_raw_parts_mut(sk_out, kem.length_secret_key()),
        )
    };
    to_result_code(crate::core::crypto::key_exchange::generate_keypair_with(kem.as_ref(), pk, sk))
}

/// Encapsulate to `pk` and derive K = SHA-256(ss)[0..16]
///
/// @param pk Public key of `pqkem512_pk_len()` bytes
/// @param ct_out Buffer of `pqkem512_ct_len()` bytes for the ciphertext
/// @param k_out Buffer for the session key
/// @param k_out_len Size of `k_out`; must be at least 16
/// @return 0 on success, 1 on primitive failure, 2 on bad arguments,
///         3 if no KEM is available
///
/// # Safety
///
/// `pk` must be valid for reads, and `ct_out` and `k_out` for writes, of the
/// lengths above. The output buffers must not overlap each other or `pk`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pqkem512_encaps_and_k(
    pk: *const u8,
    ct_out: *mut u8,
    k_out: *mut u8,
    k_out_len: size_t,
) -> c_int {
    unsafe { kem_encaps(&Resolver::new(), pk, ct_out, k_out, k_out_len) }
}

unsafe fn kem_encaps<P: Provider>(
    resolver: &Resolver<P>,
    pk: *const u8,
    ct_out: *mut u8,
    k_out: *mut u8,
    k_out_len: size_t,
) -> c_int {
    if k_out_len < SESSION_KEY_LEN {
        return ResultCode::BadArgument as c_int;
    }
    if pk.is_null() || ct_out.is_null() || k_out.is_null() {
        return ResultCode::BadArgument as c_int;
    }

    let kem = match resolver.resolve_kem() {
        Ok(kem) => kem,
        Err(err) => return err.code() as c_int,
    };

    let (pk, ct, k) = unsafe {
        (
            slice::from_raw_parts(pk, kem.length_public_key()),
            slice::from_raw_parts_mut(ct_out, kem.length_ciphertext()),
            slice::from_raw_parts_mut(k_out, k_out_len),
        )
    };
    to_result_code(encapsulate_with(kem.as_ref(), pk, ct, k))
}

/// Decapsulate `ct` with `sk` and derive the same K as the sender
///
/// @param sk Secret key of `pqkem512_sk_len()` bytes
/// @param ct Ciphertext of `pqkem512_ct_len()` bytes
/// @param k_out Buffer for the session key
/// @param k_out_len Size of `k_out`; must be at least 16
/// @return 0 on success, non-zero result code on failure
///
/// # Safety
///
/// `sk` and `ct` must be valid for reads, and `k_out` for writes, of the
/// lengths above. `k_out` must not overlap the inputs.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pqkem512_decaps_and_k(
    sk: *const u8,
    ct: *const u8,
    k_out: *mut u8,
    k_out_len: size_t,
) -> c_int {
    unsafe { kem_decaps(&Resolver::new(), sk, ct, k_out, k_out_len) }
}

unsafe fn kem_decaps<P: Provider>(
    resolver: &Resolver<P>,
    sk: *const u8,
    ct: *const u8,
    k_out: *mut u8,
    k_out_len: size_t,
) -> c_int {
    if k_out_len < SESSION_KEY_LEN {
        return ResultCode::BadArgument as c_int;
    }
    if sk.is_null() || ct.is_null() || k_out.is_null() {
        return ResultCode::BadArgument as c_int;
    }

    let kem = match resolver.resolve_kem() {
        Ok(kem) => kem,
        Err(err) => return err.code() as c_int,
    };

    let (sk, ct, k) = unsafe {
        (
            slice::from_raw_parts(sk, kem.length_secret_key()),
            slice::from_raw_parts(ct, kem.length_ciphertext()),
            slice::from_raw_parts_mut(k_out, k_out_len),
        )
    };
    to_result_code(decapsulate_with(kem.as_ref(), sk, ct, k))
}

// ================== Signatures ==================

/// Public key length of the resolved signature scheme, or -1
#[unsafe(no_mangle)]
pub extern "C" fn pqsig2_pk_len() -> c_int {
    length_or_sentinel(SignatureAdapter::new().public_key_len())
}

/// Secret key length of the resolved signature scheme, or -1
#[unsafe(no_mangle)]
pub extern "C" fn pqsig2_sk_len() -> c_int {
    length_or_sentinel(SignatureAdapter::new().secret_key_len())
}

/// Maximum signature length of the resolved signature scheme, or -1
#[unsafe(no_mangle)]
pub extern "C" fn pqsig2_sig_max_len() -> c_int {
    length_or_sentinel(SignatureAdapter::new().max_signature_len())
}

/// Generate a signature key pair (test fixtures only)
///
/// @param pk_out Buffer of `pqsig2_pk_len()` bytes
/// @param sk_out Buffer of `pqsig2_sk_len()` bytes
/// @return 0 on success, non-zero result code on failure
///
/// # Safety
///
/// Both buffers must be valid for writes of the lengths above and must not
/// overlap.
#[cfg(feature = "keygen")]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pqsig2_keypair(pk_out: *mut u8, sk_out: *mut u8) -> c_int {
    unsafe { sig_keypair(&Resolver::new(), pk_out, sk_out) }
}

#[cfg(feature = "keygen")]
unsafe fn sig_keypair<P: Provider>(resolver: &Resolver<P>, pk_out: *mut u8, sk_out: *mut u8) -> c_int {
    if pk_out.is_null() || sk_out.is_null() {
        return ResultCode::BadArgument as c_int;
    }

    let sig = match resolver.resolve_signature() {
        Ok(sig) => sig,
        Err(err) => return err.code() as c_int,
    };

    let (pk, sk) = unsafe {
        (
            slice::from_raw_parts_mut(pk_out, sig.length_public_key()),
            slice::from_raw_parts_mut(sk_out, sig.length_secret_key()),
        )
    };
    to_result_code(crate::core::crypto::auth::generate_keypair_with(sig.as_ref(), pk, sk))
}

/// Sign `m` with `sk`
///
/// @param sig_out Buffer of `pqsig2_sig_max_len()` bytes
/// @param sig_len Receives the actual signature length
/// @param m Message bytes (may be null when `m_len` is 0)
/// @param m_len Message length
/// @param sk Secret key of `pqsig2_sk_len()` bytes
/// @return 0 on success, non-zero result code on failure
///
/// # Safety
///
/// Every non-null pointer must be valid for the lengths above, and `sig_out`
/// must not overlap the inputs.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pqsig2_sign(
    sig_out: *mut u8,
    sig_len: *mut size_t,
    m: *const u8,
    m_len: size_t,
    sk: *const u8,
) -> c_int {
    unsafe { sig_sign(&Resolver::new(), sig_out, sig_len, m, m_len, sk) }
}

unsafe fn sig_sign<P: Provider>(
    resolver: &Resolver<P>,
    sig_out: *mut u8,
    sig_len: *mut size_t,
    m: *const u8,
    m_len: size_t,
    sk: *const u8,
) -> c_int {
    if sig_out.is_null() || sig_len.is_null() || sk.is_null() {
        return ResultCode::BadArgument as c_int;
    }
    let Some(message) = (unsafe { input_slice(m, m_len) }) else {
        return ResultCode::BadArgument as c_int;
    };

    let sig = match resolver.resolve_signature() {
        Ok(sig) => sig,
        Err(err) => return err.code() as c_int,
    };

    let (signature, secret_key) = unsafe {
        (
            slice::from_raw_parts_mut(sig_out, sig.length_signature()),
            slice::from_raw_parts(sk, sig.length_secret_key()),
        )
    };
    match sign_with(sig.as_ref(), message, secret_key, signature) {
        Ok(written) => {
            unsafe { *sig_len = written };
            ResultCode::Success as c_int
        }
        Err(err) => err.code() as c_int,
    }
}

/// Verify `sig_in` over `m` under `pk`
///
/// @param pk Public key of `pqsig2_pk_len()` bytes
/// @param m Message bytes (may be null when `m_len` is 0)
/// @param m_len Message length
/// @param sig_in Signature bytes
/// @param sig_len Signature length
/// @return 0 if valid, 1 if the signature does not verify, 2 on bad
///         arguments, 3 if no signature scheme is available
///
/// # Safety
///
/// Every non-null pointer must be valid for reads of the lengths above.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pqsig2_verify(
    pk: *const u8,
    m: *const u8,
    m_len: size_t,
    sig_in: *const u8,
    sig_len: size_t,
) -> c_int {
    unsafe { sig_verify(&Resolver::new(), pk, m, m_len, sig_in, sig_len) }
}

unsafe fn sig_verify<P: Provider>(
    resolver: &Resolver<P>,
    pk: *const u8,
    m: *const u8,
    m_len: size_t,
    sig_in: *const u8,
    sig_len: size_t,
) -> c_int {
    if pk.is_null() {
        return ResultCode::BadArgument as c_int;
    }
    let inputs = unsafe { (input_slice(m, m_len), input_slice(sig_in, sig_len)) };
    let (Some(message), Some(signature)) = inputs else {
        return ResultCode::BadArgument as c_int;
    };

    let sig = match resolver.resolve_signature() {
        Ok(sig) => sig,
        Err(err) => return err.code() as c_int,
    };
    let public_key = unsafe { slice::from_raw_parts(pk, sig.length_public_key()) };

    match verify_with(sig.as_ref(), public_key, message, signature) {
        Ok(Verdict::Accept) => ResultCode::Success as c_int,
        Ok(Verdict::Reject) => ResultCode::Failure as c_int,
        Err(err) => err.code() as c_int,
    }
}
