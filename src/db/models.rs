//! Diesel model structs for the Pokédex tables.
//!
//! Lookup rows (`types`, `abilities`, `stats`, `moves`) are shared between
//! Pokémon; junction rows cascade away with their owning Pokémon.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema;

// Canonical values for `moves.category`.
pub mod move_category {
    pub const PHYSICAL: &str = "physical";
    pub const SPECIAL: &str = "special";
    pub const STATUS: &str = "status";

    pub const ALL: [&str; 3] = [PHYSICAL, SPECIAL, STATUS];
}

#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = schema::pokemon)]
pub struct Pokemon {
    pub id: i64,
    pub pokedex_id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub height_m: f64,
    pub weight_kg: f64,
    pub base_experience: Option<i32>,
    pub capture_rate: i32,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub generation: i32,
    pub image_url: Option<String>,
    pub sprite_url: Option<String>,
    pub shiny_sprite_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Insertable, Serialize, Deserialize)]
#[diesel(table_name = schema::pokemon)]
pub struct NewPokemon {
    pub pokedex_id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub height_m: f64,
    pub weight_kg: f64,
    pub base_experience: Option<i32>,
    pub capture_rate: i32,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub generation: i32,
    pub image_url: Option<String>,
    pub sprite_url: Option<String>,
    pub shiny_sprite_url: Option<String>,
}

#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = schema::types)]
pub struct Type {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Insertable, Serialize, Deserialize)]
#[diesel(table_name = schema::types)]
pub struct NewType {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Insertable, Serialize, Deserialize)]
#[diesel(table_name = schema::type_effectiveness)]
pub struct NewTypeEffectiveness {
    pub attacking_type_id: i64,
    pub defending_type_id: i64,
    pub multiplier: f64,
}

#[derive(Debug, Clone, PartialEq, Insertable, Serialize, Deserialize)]
#[diesel(table_name = schema::abilities)]
pub struct NewAbility {
    pub name: String,
    pub description: String,
    pub effect: Option<String>,
    pub is_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Insertable, Serialize, Deserialize)]
#[diesel(table_name = schema::stats)]
pub struct NewStat {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Insertable, Serialize, Deserialize)]
#[diesel(table_name = schema::moves)]
pub struct NewMove {
    pub name: String,
    pub category: String,
    pub power: Option<i32>,
    pub accuracy: Option<i32>,
    pub pp: i32,
    pub priority: i32,
    pub type_id: i64,
}

#[derive(Debug, Clone, PartialEq, Insertable, Serialize, Deserialize)]
#[diesel(table_name = schema::pokemon_types)]
pub struct NewPokemonType {
    pub pokemon_id: i64,
    pub type_id: i64,
    pub slot: i32,
}

#[derive(Debug, Clone, PartialEq, Insertable, Serialize, Deserialize)]
#[diesel(table_name = schema::pokemon_abilities)]
pub struct NewPokemonAbility {
    pub pokemon_id: i64,
    pub ability_id: i64,
    pub slot: i32,
    pub is_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Insertable, Serialize, Deserialize)]
#[diesel(table_name = schema::pokemon_stats)]
pub struct NewPokemonStat {
    pub pokemon_id: i64,
    pub stat_id: i64,
    pub base_value: i32,
    pub effort: i32,
}

#[derive(Debug, Clone, PartialEq, Insertable, Serialize, Deserialize)]
#[diesel(table_name = schema::pokemon_moves)]
pub struct NewPokemonMove {
    pub pokemon_id: i64,
    pub move_id: i64,
    pub learn_method: String,
    pub level: Option<i32>,
}

#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = schema::evolutions)]
pub struct Evolution {
    pub id: i64,
    pub from_pokemon_id: i64,
    pub to_pokemon_id: i64,
    pub trigger: String,
    pub min_level: Option<i32>,
    pub item: Option<String>,
    pub location: Option<String>,
    pub time_of_day: Option<String>,
    pub condition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Insertable, Serialize, Deserialize)]
#[diesel(table_name = schema::evolutions)]
pub struct NewEvolution {
    pub from_pokemon_id: i64,
    pub to_pokemon_id: i64,
    pub trigger: String,
    pub min_level: Option<i32>,
    pub item: Option<String>,
    pub location: Option<String>,
    pub time_of_day: Option<String>,
    pub condition: Option<String>,
}
