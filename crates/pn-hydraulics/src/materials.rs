//! Pipe wall roughness catalog.

/// Pipe materials with a known absolute roughness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    Pvc,
    Steel,
    CastIron,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialEntry {
    pub material: Material,
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    /// Absolute roughness (m)
    pub roughness_m: f64,
}

impl MaterialEntry {
    pub fn matches(&self, name: &str) -> bool {
        let name = name.trim();
        self.canonical_id.eq_ignore_ascii_case(name)
            || self.display_name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

const MATERIAL_CATALOG: [MaterialEntry; 3] = [
    MaterialEntry {
        material: Material::Pvc,
        canonical_id: "pvc",
        display_name: "PVC",
        aliases: &[],
        roughness_m: 1.5e-6,
    },
    MaterialEntry {
        material: Material::Steel,
        canonical_id: "steel",
        display_name: "Steel",
        aliases: &["acero", "commercial steel"],
        roughness_m: 4.5e-5,
    },
    MaterialEntry {
        material: Material::CastIron,
        canonical_id: "cast_iron",
        display_name: "Cast iron",
        aliases: &["hierro fundido", "cast-iron"],
        roughness_m: 2.6e-4,
    },
];

/// Material used when a name is not in the catalog.
pub const FALLBACK_MATERIAL: Material = Material::Steel;

pub fn material_catalog() -> &'static [MaterialEntry] {
    &MATERIAL_CATALOG
}

/// Find the catalog entry for a material name (case-insensitive, aliases allowed).
pub fn lookup(name: &str) -> Option<&'static MaterialEntry> {
    MATERIAL_CATALOG.iter().find(|entry| entry.matches(name))
}

impl Material {
    pub fn from_name(name: &str) -> Option<Self> {
        lookup(name).map(|entry| entry.material)
    }

    pub fn entry(self) -> &'static MaterialEntry {
        match self {
            Material::Pvc => &MATERIAL_CATALOG[0],
            Material::Steel => &MATERIAL_CATALOG[1],
            Material::CastIron => &MATERIAL_CATALOG[2],
        }
    }

    /// Absolute roughness (m)
    pub fn roughness(self) -> f64 {
        self.entry().roughness_m
    }
}

/// Absolute roughness (m) for a material name.
///
/// Unknown names get the steel value.
pub fn roughness(name: &str) -> f64 {
    Material::from_name(name)
        .unwrap_or(FALLBACK_MATERIAL)
        .roughness()
}
