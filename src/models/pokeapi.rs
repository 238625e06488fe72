//! Models for the subset of PokeAPI v2 resources consumed by the seeder.
//!
//! Scope: types only — no HTTP code.
//!
//! Notes
//! - Field names follow the upstream snake_case JSON; no renaming needed.
//! - Almost everything is optional or defaulted: PokeAPI omits or nulls fields
//!   for older/unusual entries, and a missing field must not fail a whole record.

use serde::{Deserialize, Serialize};

// =====================
// Shared building blocks
// =====================

/// `{ "name": ..., "url": ... }`, the reference shape used everywhere upstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    /// Numeric id taken from the trailing path segment of `url`
    /// (`https://pokeapi.co/api/v2/version-group/20/` → 20).
    pub fn resource_id(&self) -> Option<i64> {
        self.url.trim_end_matches('/').rsplit('/').next()?.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ResourceList {
    pub count: Option<i64>,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
    /// Present on species entries.
    pub version: Option<NamedResource>,
    /// Present on ability and move entries.
    pub version_group: Option<NamedResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EffectEntry {
    #[serde(default)]
    pub effect: String,
    pub short_effect: Option<String>,
    pub language: NamedResource,
}

// =====================
// /pokemon/{id}
// =====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Pokemon {
    pub id: i32,
    pub name: String,
    /// Decimeters.
    pub height: i32,
    /// Hectograms.
    pub weight: i32,
    pub base_experience: Option<i32>,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
    #[serde(default)]
    pub abilities: Vec<PokemonAbilitySlot>,
    #[serde(default)]
    pub stats: Vec<PokemonStatEntry>,
    #[serde(default)]
    pub moves: Vec<PokemonMoveEntry>,
    #[serde(default)]
    pub sprites: Sprites,
    pub species: Option<NamedResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PokemonTypeSlot {
    pub slot: i32,
    pub r#type: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PokemonAbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    pub slot: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PokemonStatEntry {
    pub base_stat: i32,
    #[serde(default)]
    pub effort: i32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PokemonMoveEntry {
    pub r#move: NamedResource,
    #[serde(default)]
    pub version_group_details: Vec<MoveVersionDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MoveVersionDetail {
    #[serde(default)]
    pub level_learned_at: i32,
    pub move_learn_method: NamedResource,
    pub version_group: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<ArtworkSprites>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ArtworkSprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
}

// =====================
// /pokemon-species/{id}
// =====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PokemonSpecies {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub capture_rate: i32,
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub is_mythical: bool,
    pub generation: Option<NamedResource>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    pub evolution_chain: Option<ApiResource>,
}

/// `{ "url": ... }` without a name (evolution chains are unnamed).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ApiResource {
    pub url: String,
}

// =====================
// /type/{name}
// =====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Type {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub damage_relations: DamageRelations,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DamageRelations {
    #[serde(default)]
    pub double_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_from: Vec<NamedResource>,
}

// =====================
// /ability/{name}
// =====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Ability {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

// =====================
// /move/{name}
// =====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Move {
    pub id: i32,
    pub name: String,
    pub power: Option<i32>,
    pub accuracy: Option<i32>,
    pub pp: Option<i32>,
    #[serde(default)]
    pub priority: i32,
    pub damage_class: Option<NamedResource>,
    pub r#type: NamedResource,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
}

// =====================
// /evolution-chain/{id}
// =====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EvolutionChain {
    pub id: i32,
    pub chain: ChainLink,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EvolutionDetail {
    pub trigger: Option<NamedResource>,
    pub min_level: Option<i32>,
    pub item: Option<NamedResource>,
    pub held_item: Option<NamedResource>,
    pub location: Option<NamedResource>,
    #[serde(default)]
    pub time_of_day: String,
    pub min_happiness: Option<i32>,
    pub min_affection: Option<i32>,
    pub min_beauty: Option<i32>,
    pub known_move: Option<NamedResource>,
    pub known_move_type: Option<NamedResource>,
    pub gender: Option<i32>,
    pub party_species: Option<NamedResource>,
    pub party_type: Option<NamedResource>,
    pub trade_species: Option<NamedResource>,
    #[serde(default)]
    pub needs_overworld_rain: bool,
    #[serde(default)]
    pub turn_upside_down: bool,
    pub relative_physical_stats: Option<i32>,
}
