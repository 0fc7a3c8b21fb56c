//! In-memory guideline index.

use std::cmp::Ordering;
use std::sync::{Arc, RwLock};

use hermetic_core::{GuidelineKey, SpellGuideline};
use tracing::{debug, warn};

use crate::repository::{GuidelineRepository, RepositoryError, Result};

struct Bucket {
    key: GuidelineKey,
    guidelines: Arc<Vec<SpellGuideline>>,
}

/// In-memory implementation of [`GuidelineRepository`].
///
/// Buckets live in a vector kept in [`GuidelineKey::compare`] order. That
/// comparator is not a total order, so it cannot back a tree map; buckets are
/// found by a linear scan for the first key comparing equal instead.
#[derive(Default)]
pub struct InMemoryGuidelineIndex {
    buckets: RwLock<Vec<Bucket>>,
}

impl InMemoryGuidelineIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }
}

fn position(buckets: &[Bucket], key: &GuidelineKey) -> std::result::Result<usize, usize> {
    for (index, bucket) in buckets.iter().enumerate() {
        match bucket.key.compare(key) {
            Ordering::Equal => return Ok(index),
            Ordering::Greater => return Err(index),
            Ordering::Less => {}
        }
    }
    Err(buckets.len())
}

impl GuidelineRepository for InMemoryGuidelineIndex {
    fn insert(&self, key: GuidelineKey, guideline: SpellGuideline) -> Result<usize> {
        let mut buckets = self
            .buckets
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let index = match position(&buckets, &key) {
            Ok(index) => index,
            Err(index) => {
                debug!(target: "runtime::guidelines", key = %key, "Created guideline bucket");
                buckets.insert(
                    index,
                    Bucket {
                        key: key.clone(),
                        guidelines: Arc::new(Vec::new()),
                    },
                );
                index
            }
        };

        let bucket = &mut buckets[index];
        if bucket
            .guidelines
            .iter()
            .any(|known| known.name() == guideline.name())
        {
            warn!(
                target: "runtime::guidelines",
                key = %key,
                name = guideline.name(),
                "Rejected duplicate guideline"
            );
            return Err(RepositoryError::DuplicateGuideline {
                key: bucket.key.to_string(),
                name: guideline.name().to_string(),
            });
        }

        debug!(
            target: "runtime::guidelines",
            key = %key,
            guideline = %guideline,
            "Stored guideline"
        );
        let guidelines = Arc::make_mut(&mut bucket.guidelines);
        guidelines.push(guideline);
        Ok(guidelines.len() - 1)
    }

    fn bucket(&self, key: &GuidelineKey) -> Result<Arc<Vec<SpellGuideline>>> {
        let buckets = self
            .buckets
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(position(&buckets, key)
            .ok()
            .map(|index| Arc::clone(&buckets[index].guidelines))
            .unwrap_or_default())
    }

    fn keys(&self) -> Result<Vec<GuidelineKey>> {
        let buckets = self
            .buckets
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(buckets.iter().map(|bucket| bucket.key.clone()).collect())
    }

    fn len(&self) -> Result<usize> {
        let buckets = self
            .buckets
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(buckets.iter().map(|bucket| bucket.guidelines.len()).sum())
    }
}
