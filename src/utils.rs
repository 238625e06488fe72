//! Mapping helpers from PokeAPI representations to stored values.

use crate::models::pokeapi::{EffectEntry, EvolutionDetail, FlavorTextEntry};

const ENGLISH: &str = "en";
const DEFAULT_TYPE_COLOR: &str = "#68A090";

/// The six stats every Pokémon carries, in PokeAPI order.
pub const CANONICAL_STATS: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

/// PokeAPI heights are decimeters.
pub fn decimeters_to_meters(dm: i32) -> f64 {
    dm as f64 / 10.0
}

/// PokeAPI weights are hectograms.
pub fn hectograms_to_kilograms(hg: i32) -> f64 {
    hg as f64 / 10.0
}

/// `generation-iv` → 4. Anything that is not a roman numeral I..IX maps to 1.
pub fn generation_from_name(name: &str) -> i32 {
    let token = name.rsplit('-').next().unwrap_or_default();
    match token.to_ascii_lowercase().as_str() {
        "i" => 1,
        "ii" => 2,
        "iii" => 3,
        "iv" => 4,
        "v" => 5,
        "vi" => 6,
        "vii" => 7,
        "viii" => 8,
        "ix" => 9,
        _ => 1,
    }
}

/// Lowercase, then replace every character that is not an ASCII letter or digit with `-`.
pub fn slugify(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

/// Flavor text as printed in-game carries hard line breaks and form feeds.
pub fn clean_flavor_text(text: &str) -> String {
    text.replace(['\u{000c}', '\n', '\r'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// First English entry for `preferred_version`, else the first English entry at all.
pub fn select_flavor_text(entries: &[FlavorTextEntry], preferred_version: &str) -> String {
    let english = || entries.iter().filter(|e| e.language.name == ENGLISH);
    english()
        .find(|e| {
            e.version.as_ref().is_some_and(|v| v.name == preferred_version)
                || e.version_group.as_ref().is_some_and(|v| v.name == preferred_version)
        })
        .or_else(|| english().next())
        .map(|e| clean_flavor_text(&e.flavor_text))
        .unwrap_or_default()
}

/// First English short effect (falls back to the long effect text).
pub fn english_effect(entries: &[EffectEntry]) -> Option<String> {
    entries
        .iter()
        .find(|e| e.language.name == ENGLISH)
        .map(|e| {
            let text = e.short_effect.as_deref().unwrap_or(&e.effect);
            clean_flavor_text(text)
        })
        .filter(|s| !s.is_empty())
}

/// Display colour for a type name.
pub fn type_color(name: &str) -> &'static str {
    match name {
        "normal" => "#A8A77A",
        "fire" => "#EE8130",
        "water" => "#6390F0",
        "electric" => "#F7D02C",
        "grass" => "#7AC74C",
        "ice" => "#96D9D6",
        "fighting" => "#C22E28",
        "poison" => "#A33EA1",
        "ground" => "#E2BF65",
        "flying" => "#A98FF3",
        "psychic" => "#F95587",
        "bug" => "#A6B91A",
        "rock" => "#B6A136",
        "ghost" => "#735797",
        "dragon" => "#6F35FC",
        "dark" => "#705746",
        "steel" => "#B7B7CE",
        "fairy" => "#D685AD",
        "stellar" => "#40B5A5",
        _ => DEFAULT_TYPE_COLOR,
    }
}

/// Multiplier category for `{double,half,no}_damage_to` lists.
pub fn damage_multiplier(relation: &str) -> Option<f64> {
    match relation {
        "double_damage_to" => Some(2.0),
        "half_damage_to" => Some(0.5),
        "no_damage_to" => Some(0.0),
        _ => None,
    }
}

/// Human-readable summary of the evolution qualifiers that have no dedicated column.
pub fn evolution_condition(detail: &EvolutionDetail) -> Option<String> {
    let mut parts = Vec::new();

    if let Some(v) = detail.min_happiness {
        parts.push(format!("happiness >= {}", v));
    }
    if let Some(v) = detail.min_affection {
        parts.push(format!("affection >= {}", v));
    }
    if let Some(v) = detail.min_beauty {
        parts.push(format!("beauty >= {}", v));
    }
    if let Some(m) = &detail.known_move {
        parts.push(format!("knows {}", m.name));
    }
    if let Some(t) = &detail.known_move_type {
        parts.push(format!("knows a {}-type move", t.name));
    }
    match detail.gender {
        Some(1) => parts.push("female".to_string()),
        Some(2) => parts.push("male".to_string()),
        _ => {}
    }
    if let Some(p) = &detail.party_species {
        parts.push(format!("{} in party", p.name));
    }
    if let Some(p) = &detail.party_type {
        parts.push(format!("{}-type in party", p.name));
    }
    if let Some(p) = &detail.trade_species {
        parts.push(format!("traded for {}", p.name));
    }
    if detail.needs_overworld_rain {
        parts.push("raining".to_string());
    }
    if detail.turn_upside_down {
        parts.push("console upside down".to_string());
    }
    match detail.relative_physical_stats {
        Some(1) => parts.push("attack > defense".to_string()),
        Some(0) => parts.push("attack = defense".to_string()),
        Some(-1) => parts.push("attack < defense".to_string()),
        _ => {}
    }

    if parts.is_empty() { None } else { Some(parts.join(", ")) }
}
