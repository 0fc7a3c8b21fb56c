/// Rule constants and the tunable set of default arts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DesignerConfig {
    /// Technique names registered when a registry is seeded.
    pub technique_names: Vec<String>,
    /// Form names registered when a registry is seeded.
    pub form_names: Vec<String>,
}

impl DesignerConfig {
    // ===== rule constants =====
    /// Highest valid art or guideline level.
    pub const MAX_LEVEL: i32 = i16::MAX as i32;
    /// Level that corresponds to magnitude 0.
    pub const BASE_GUIDELINE_LEVEL: i16 = 4;
    /// Levels covered by one whole magnitude above the base level.
    pub const LEVELS_PER_MAGNITUDE: i16 = 5;
    /// Namespace of the built-in art types.
    pub const HERMETIC_KEY: &'static str = "Hermetic";
    /// Textual form of an absent guideline level.
    pub const GENERIC_LEVEL: &'static str = "Generic";

    // ===== default arts =====
    pub const DEFAULT_TECHNIQUE_NAMES: [&'static str; 5] =
        ["Creo", "Intellego", "Muto", "Perdo", "Rego"];
    pub const DEFAULT_FORM_NAMES: [&'static str; 10] = [
        "Animal", "Auram", "Aquam", "Corpus", "Herbam", "Ignem", "Imaginem", "Mentem", "Terram",
        "Vim",
    ];

    pub fn new() -> Self {
        Self {
            technique_names: Self::DEFAULT_TECHNIQUE_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            form_names: Self::DEFAULT_FORM_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }

    pub fn with_names(technique_names: Vec<String>, form_names: Vec<String>) -> Self {
        Self {
            technique_names,
            form_names,
        }
    }
}

impl Default for DesignerConfig {
    fn default() -> Self {
        Self::new()
    }
}
