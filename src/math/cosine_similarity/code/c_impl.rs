//! FFI bindings for the C cosine similarity variant.

#[cfg(c_implementation_active)]
mod ffi {
    use libc::size_t;
    use std::os::raw::c_double;

    extern "C" {
        pub fn vm_cosine_similarity_c_original(a: *const c_double, b: *const c_double, n: size_t) -> c_double;
    }
}

pub const C_IMPL_AVAILABLE: bool = cfg!(c_implementation_active);

#[cfg(c_implementation_active)]
pub fn cosine_similarity_c_original(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");
    unsafe { ffi::vm_cosine_similarity_c_original(a.as_ptr(), b.as_ptr(), a.len()) }
}

#[cfg(not(c_implementation_active))]
pub fn cosine_similarity_c_original(_a: &[f64], _b: &[f64]) -> f64 {
    panic!("C implementation not compiled (requires GCC, Clang, or MSVC)")
}
