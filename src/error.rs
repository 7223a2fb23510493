use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("vector length mismatch: left has {left} elements, right has {right}")]
    LengthMismatch { left: usize, right: usize },
}

pub type Result<T, E = VectorError> = std::result::Result<T, E>;

/// Check that two operands have the same length.
pub(crate) fn ensure_same_len(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(VectorError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        })
    }
}
