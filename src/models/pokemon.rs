use serde::{Deserialize, Serialize};

/// Detail payload for a single Pokémon.
///
/// Only the fields the browser displays are typed; the rest of the
/// payload is ignored on decode. Every typed field is optional or
/// defaulted so a sparse payload still decodes instead of failing the
/// whole item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: Option<i64>,
    #[serde(rename = "type")]
    pub kind: TypeRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,
}

impl PokemonDetail {
    pub fn sprite_url(&self) -> Option<&str> {
        self.sprites.front_default.as_deref()
    }

    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.kind.name.as_str()).collect()
    }

    /// Comma-joined type label for display, e.g. "grass, poison".
    pub fn type_label(&self) -> String {
        self.type_names().join(", ")
    }
}
