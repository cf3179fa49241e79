//! Qubit addressing and identification

use std::fmt;

/// Type-safe identifier for a qubit
///
/// Prevents accidentally using raw integers where qubit indices are
/// expected.
///
/// # Example
/// ```
/// use qalgo_core::QubitId;
///
/// let q0 = QubitId::new(0);
/// let q1 = QubitId::new(1);
/// assert!(q0 < q1);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct QubitId(usize);

impl QubitId {
    /// Create a new qubit identifier
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the underlying index
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<usize> for QubitId {
    #[inline]
    fn from(id: usize) -> Self {
        Self::new(id)
    }
}

impl From<QubitId> for usize {
    #[inline]
    fn from(qid: QubitId) -> Self {
        qid.index()
    }
}

/// Build a contiguous qubit register `[offset, offset + len)`
///
/// Registers in this crate are plain slices of qubit ids; factories address
/// targets, ancillas and controls through them.
///
/// # Example
/// ```
/// use qalgo_core::qubit::register;
///
/// let targets = register(0, 3);
/// let ancillas = register(3, 2);
/// assert_eq!(targets.len(), 3);
/// assert_eq!(ancillas[0].index(), 3);
/// ```
pub fn register(offset: usize, len: usize) -> Vec<QubitId> {
    (offset..offset + len).map(QubitId::new).collect()
}
