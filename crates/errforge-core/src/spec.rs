//! Input data model: error specifications and the run configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One error to be generated. The two fields correspond to the sentinel
/// constant's name and the raw template in its associated string value.
///
/// Specs arrive in an ordered sequence from the scanner; that order is
/// preserved all the way to the emitted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSpec {
    pub name: String,
    pub template: String,
}

impl ErrorSpec {
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
        }
    }
}

/// Run-wide generation settings, applied uniformly to every spec.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Name of the sentinel type whose constants carry the templates.
    pub sentinel_type: String,
    /// Generate identity predicates usable with the host ecosystem's own
    /// cause-chain search instead of the generated `is_in` walk.
    pub compat_is: bool,
    /// Generate public declarations (and upper-cased type names).
    pub make_public: bool,
    /// Suffix to drop from the end of spec names.
    pub suffix_to_trim: String,
    /// Extra `use` paths for the generated header. Ordered so that emission
    /// stays deterministic.
    pub extra_imports: BTreeSet<String>,
}
