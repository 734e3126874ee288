use core::hash::Hasher;

use rustc_hash::FxHasher;

/// Opaque handle for a click action.
///
/// Elements are rebuilt every frame while the code that reacts to clicks lives much longer,
/// so elements only carry this handle. The embedding application resolves it, usually
/// through an [`ActionRegistry`](crate::actions::ActionRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(pub u32);

impl ActionId {
    /// Creates an action id by hashing `label`.
    #[inline]
    pub fn new(label: &str) -> ActionId {
        Self::new_index(label, 0)
    }

    /// Creates an action id from `label` and `index`, for repeated rows such as list entries.
    #[inline]
    pub fn new_index(label: &str, index: u32) -> ActionId {
        let mut hasher = FxHasher::default();
        hasher.write(label.as_bytes());
        hasher.write_u32(index);
        let hash = hasher.finish();
        ActionId((hash ^ (hash >> 32)) as u32)
    }
}

impl From<&str> for ActionId {
    fn from(label: &str) -> Self {
        ActionId::new(label)
    }
}

impl From<u32> for ActionId {
    fn from(raw: u32) -> Self {
        ActionId(raw)
    }
}
