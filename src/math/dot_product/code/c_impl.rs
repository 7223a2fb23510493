//! FFI bindings for the C dot product variants.

#[cfg(c_implementation_active)]
mod ffi {
    use libc::size_t;
    use std::os::raw::c_double;

    extern "C" {
        pub fn vm_dot_product_c_original(a: *const c_double, b: *const c_double, n: size_t) -> c_double;
        pub fn vm_dot_product_c_scalar_opt(a: *const c_double, b: *const c_double, n: size_t) -> c_double;
    }
}

/// Check if C implementations are available
pub const C_IMPL_AVAILABLE: bool = cfg!(c_implementation_active);

/// C reference implementation wrapper
#[cfg(c_implementation_active)]
pub fn dot_product_c_original(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");
    unsafe { ffi::vm_dot_product_c_original(a.as_ptr(), b.as_ptr(), a.len()) }
}

/// C unrolled implementation wrapper
#[cfg(c_implementation_active)]
pub fn dot_product_c_scalar_opt(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");
    unsafe { ffi::vm_dot_product_c_scalar_opt(a.as_ptr(), b.as_ptr(), a.len()) }
}

#[cfg(not(c_implementation_active))]
pub fn dot_product_c_original(_a: &[f64], _b: &[f64]) -> f64 {
    panic!("C implementation not compiled (requires GCC, Clang, or MSVC)")
}

#[cfg(not(c_implementation_active))]
pub fn dot_product_c_scalar_opt(_a: &[f64], _b: &[f64]) -> f64 {
    panic!("C implementation not compiled (requires GCC, Clang, or MSVC)")
}
