//! Repository layer for the designer's shared data.
//!
//! Repositories hold data that is registered or created while the designer
//! runs:
//! - Known arts, grouped by art type ([`ArtRegistry`])
//! - Spell guidelines, grouped by lookup key ([`GuidelineRepository`])
//!
//! Static data files are read by `hermetic-content`, not here.

mod arts;
mod error;
mod guidelines;
mod traits;

pub use arts::ArtRegistry;
pub use error::{RepositoryError, Result};
pub use guidelines::InMemoryGuidelineIndex;
pub use traits::GuidelineRepository;
