//! Repository traits for guideline storage.

use std::sync::Arc;

use hermetic_core::{GuidelineKey, SpellGuideline};

use crate::repository::Result;

/// Storage for guidelines grouped into buckets by [`GuidelineKey`].
///
/// A key addresses the bucket whose stored key it compares equal to under
/// [`GuidelineKey::compare`]. Implementations must make `insert` atomic: the
/// duplicate-name check and the append happen under one write.
pub trait GuidelineRepository: Send + Sync {
    /// Appends a guideline to the bucket of `key`, creating the bucket if
    /// needed. Fails if the bucket already holds a guideline of the same name.
    ///
    /// Returns the guideline's position inside its bucket.
    fn insert(&self, key: GuidelineKey, guideline: SpellGuideline) -> Result<usize>;

    /// Snapshot of the bucket addressed by `key`; empty when there is none.
    fn bucket(&self, key: &GuidelineKey) -> Result<Arc<Vec<SpellGuideline>>>;

    /// Stored bucket keys in index order.
    fn keys(&self) -> Result<Vec<GuidelineKey>>;

    /// Guideline at `index` in the bucket of `key`.
    fn get(&self, key: &GuidelineKey, index: usize) -> Result<Option<SpellGuideline>> {
        Ok(self.bucket(key)?.get(index).cloned())
    }

    /// Total number of stored guidelines.
    fn len(&self) -> Result<usize>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
