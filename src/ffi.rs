//! C ABI exports.
//!
//! ```c
//! double dot(const double* a, const double* b, size_t n);
//! double cosine_similarity(const double* a, const double* b, size_t n);
//! ```
//!
//! Neither function checks its buffers: the caller guarantees that `a` and
//! `b` each point to at least `n` initialized doubles that stay unmodified
//! for the duration of the call. Nothing is allocated, freed or retained.

use libc::size_t;
use std::os::raw::c_double;
use std::slice;

use crate::math::cosine_similarity::cosine_similarity_original;
use crate::math::dot_product::dot_product_original;

/// View the two caller buffers as slices.
///
/// # Safety
/// `n > 0` and both pointers are valid for `n` reads.
#[inline(always)]
unsafe fn operands<'a>(a: *const c_double, b: *const c_double, n: size_t) -> (&'a [f64], &'a [f64]) {
    debug_assert!(!a.is_null() && !b.is_null(), "null vector with n = {}", n);
    unsafe { (slice::from_raw_parts(a, n), slice::from_raw_parts(b, n)) }
}

/// Inner product of two `n`-element vectors, summed left-to-right.
///
/// Returns `0.0` for `n == 0` without reading either pointer, so null is
/// accepted in that case.
///
/// # Safety
/// For `n > 0`, `a` and `b` must each be valid for `n` consecutive `double`
/// reads. Shorter buffers are undefined behaviour.
#[no_mangle]
pub unsafe extern "C" fn dot(a: *const c_double, b: *const c_double, n: size_t) -> c_double {
    if n == 0 {
        return 0.0;
    }
    let (a, b) = unsafe { operands(a, b, n) };
    dot_product_original(a, b)
}

/// Cosine similarity of two `n`-element vectors.
///
/// Returns `0.0` when either vector has zero magnitude, including `n == 0`
/// (pointers are not read in that case).
///
/// # Safety
/// For `n > 0`, `a` and `b` must each be valid for `n` consecutive `double`
/// reads. Shorter buffers are undefined behaviour.
#[no_mangle]
pub unsafe extern "C" fn cosine_similarity(a: *const c_double, b: *const c_double, n: size_t) -> c_double {
    if n == 0 {
        return 0.0;
    }
    let (a, b) = unsafe { operands(a, b, n) };
    cosine_similarity_original(a, b)
}
