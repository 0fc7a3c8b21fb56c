//! Registry of known arts, grouped by art type.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock};

use hermetic_core::{Art, ArtError, ArtType, DesignerConfig};
use tracing::debug;

use crate::repository::{RepositoryError, Result};

/// Known arts grouped by [`ArtType`].
///
/// Groups are sorted sets shared behind `Arc`, so lookups hand out an
/// immutable snapshot and never copy the arts. Registering a type or an art
/// that is already known is a no-op.
#[derive(Debug, Default)]
pub struct ArtRegistry {
    groups: RwLock<BTreeMap<ArtType, Arc<BTreeSet<Art>>>>,
}

impl ArtRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the Hermetic techniques and forms named
    /// by `config`.
    pub fn with_defaults(config: &DesignerConfig) -> Result<Self> {
        let registry = Self::new();
        registry.register_type(ArtType::TECHNIQUE)?;
        registry.register_type(ArtType::FORM)?;
        for name in &config.technique_names {
            registry.register(Art::technique(name.as_str())?)?;
        }
        for name in &config.form_names {
            registry.register(Art::form(name.as_str())?)?;
        }
        Ok(registry)
    }

    /// Register an art type with an empty group.
    ///
    /// Returns `false` if the type was already known.
    pub fn register_type(&self, art_type: ArtType) -> Result<bool> {
        let mut groups = self
            .groups
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        if groups.contains_key(&art_type) {
            return Ok(false);
        }
        debug!(
            target: "runtime::arts",
            key = art_type.key(),
            art_type = art_type.name(),
            category = %art_type.category(),
            "Registered art type"
        );
        groups.insert(art_type, Arc::new(BTreeSet::new()));
        Ok(true)
    }

    /// Register an art, creating its type's group on first use.
    ///
    /// Returns `false` if an art of the same name is already registered under
    /// the type.
    pub fn register(&self, art: Art) -> Result<bool> {
        let mut groups = self
            .groups
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let group = groups.entry(art.art_type().clone()).or_default();
        if group.iter().any(|known| known.name() == art.name()) {
            return Ok(false);
        }
        debug!(
            target: "runtime::arts",
            art_type = art.art_type().name(),
            art = art.name(),
            abbreviation = art.abbreviation(),
            "Registered art"
        );
        Arc::make_mut(group).insert(art);
        Ok(true)
    }

    /// Create and register an art of any type.
    ///
    /// A missing abbreviation is derived from the name. If an art of the same
    /// name already exists under the type, the registered one is returned.
    pub fn create_art(
        &self,
        art_type: ArtType,
        name: &str,
        abbreviation: Option<&str>,
    ) -> Result<Art> {
        let mut draft = Art::draft(art_type);
        draft.set_name(name)?;
        if let Some(abbreviation) = abbreviation {
            draft.set_abbreviation(abbreviation)?;
        }
        let art = draft.build()?;
        if self.register(art.clone())? {
            return Ok(art);
        }
        self.find(art.art_type(), name)
    }

    /// Sorted snapshot of the arts of a type; empty for an unknown type.
    pub fn arts_of_type(&self, art_type: &ArtType) -> Result<Arc<BTreeSet<Art>>> {
        let groups = self
            .groups
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(groups.get(art_type).cloned().unwrap_or_default())
    }

    /// Sorted arts of every type with the given name (across keys).
    pub fn arts_of_type_named(&self, type_name: &str) -> Result<BTreeSet<Art>> {
        let groups = self
            .groups
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(groups
            .iter()
            .filter(|(art_type, _)| art_type.name() == type_name)
            .flat_map(|(_, arts)| arts.iter().cloned())
            .collect())
    }

    /// Find an art of a type by name or abbreviation.
    pub fn find(&self, art_type: &ArtType, value: &str) -> Result<Art> {
        self.arts_of_type(art_type)?
            .iter()
            .find(|art| art.matches(value))
            .cloned()
            .ok_or_else(|| {
                ArtError::NotFound {
                    art_type: art_type.name().to_string(),
                    value: value.to_string(),
                }
                .into()
            })
    }

    /// Find a Hermetic technique by name or abbreviation.
    pub fn technique(&self, value: &str) -> Result<Art> {
        self.find(&ArtType::TECHNIQUE, value)
    }

    /// Find a Hermetic form by name or abbreviation.
    pub fn form(&self, value: &str) -> Result<Art> {
        self.find(&ArtType::FORM, value)
    }

    /// Known art types in order.
    pub fn types(&self) -> Result<Vec<ArtType>> {
        let groups = self
            .groups
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(groups.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use hermetic_core::{ArtCategory, ErrorKind, HermeticError};

    use super::*;

    fn seeded() -> ArtRegistry {
        ArtRegistry::with_defaults(&DesignerConfig::default()).unwrap()
    }

    #[test]
    fn seeds_default_arts() {
        let registry = seeded();
        assert_eq!(registry.arts_of_type(&ArtType::TECHNIQUE).unwrap().len(), 5);
        assert_eq!(registry.arts_of_type(&ArtType::FORM).unwrap().len(), 10);
        assert_eq!(registry.types().unwrap(), vec![ArtType::TECHNIQUE, ArtType::FORM]);
    }

    #[test]
    fn groups_are_sorted() {
        let registry = seeded();
        let names: Vec<_> = registry
            .arts_of_type(&ArtType::FORM)
            .unwrap()
            .iter()
            .map(|art| art.name().to_string())
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn unknown_type_yields_empty_view() {
        let registry = seeded();
        let vis = ArtType::new("Hermetic", "Vis", ArtCategory::Special).unwrap();
        assert!(registry.arts_of_type(&vis).unwrap().is_empty());
        assert!(registry.arts_of_type_named("Vis").unwrap().is_empty());
    }

    #[test]
    fn finds_by_name_or_abbreviation() {
        let registry = seeded();
        assert_eq!(registry.technique("Creo").unwrap().name(), "Creo");
        assert_eq!(registry.technique("Pe").unwrap().name(), "Perdo");
        assert_eq!(registry.form("Ig").unwrap().name(), "Ignem");

        let err = registry.technique("Ignem").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn registration_is_idempotent() {
        let registry = seeded();
        assert!(!registry.register_type(ArtType::TECHNIQUE).unwrap());
        assert!(!registry.register(Art::technique("Creo").unwrap()).unwrap());
        assert_eq!(registry.arts_of_type(&ArtType::TECHNIQUE).unwrap().len(), 5);
    }

    #[test]
    fn snapshots_do_not_see_later_inserts() {
        let registry = seeded();
        let before = registry.arts_of_type(&ArtType::FORM).unwrap();
        registry.create_art(ArtType::FORM, "Vis", Some("Vs")).unwrap();
        assert_eq!(before.len(), 10);
        assert_eq!(registry.arts_of_type(&ArtType::FORM).unwrap().len(), 11);
    }

    #[test]
    fn creates_arts_of_new_types() {
        let registry = ArtRegistry::new();
        let arcane = ArtType::new("Hermetic", "Arcane", ArtCategory::Special).unwrap();
        let magic = registry.create_art(arcane.clone(), "Magic", None).unwrap();
        assert_eq!(magic.abbreviation(), "Ma");
        assert!(!magic.is_technique() && !magic.is_form());
        assert_eq!(registry.arts_of_type_named("Arcane").unwrap().len(), 1);
        assert_eq!(registry.types().unwrap(), vec![arcane]);
    }

    #[test]
    fn create_art_returns_registered_duplicate() {
        let registry = seeded();
        let creo = registry.create_art(ArtType::TECHNIQUE, "Creo", Some("Ce")).unwrap();
        assert_eq!(creo.abbreviation(), "Cr");
    }

    #[test]
    fn invalid_arts_are_rejected() {
        let registry = seeded();
        let err = registry.create_art(ArtType::FORM, "ab", None).unwrap_err();
        assert!(matches!(err, RepositoryError::Art(ArtError::InvalidName { .. })));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
