//! Sequential, best-effort ingestion of PokeAPI data.
//!
//! Each Pokémon is handled in two phases: every upstream fetch happens first
//! (the client sleeps before each request), then all rows are written in one
//! transaction. A failure in either phase skips that Pokémon only.

use crate::client::PokeApi;
use crate::db::models::{self as dbm, move_category};
use crate::models::pokeapi;
use crate::services::upsert;
use crate::utils::{
    CANONICAL_STATS, damage_multiplier, decimeters_to_meters, english_effect, evolution_condition,
    generation_from_name, hectograms_to_kilograms, select_flavor_text, slugify,
};
use diesel::prelude::*;
use diesel::PgConnection;
use log::{debug, error, info, warn};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone)]
pub struct SeedOptions {
    /// Seed national ids `1..=count`.
    pub count: i32,
    /// Game version whose English flavor text is preferred for descriptions.
    pub flavor_version: String,
    pub moves: bool,
    pub evolutions: bool,
}

/// Outcome of the per-Pokémon loop.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SeedReport {
    pub attempted: usize,
    /// Ids that were newly inserted.
    pub created: Vec<i32>,
    /// Ids that were already stored; nothing was modified.
    pub existing: Vec<i32>,
    pub failed: Vec<(i32, String)>,
}

impl SeedReport {
    pub fn succeeded(&self) -> usize {
        self.created.len() + self.existing.len()
    }
}

pub fn run(conn: &mut PgConnection, api: &impl PokeApi, opts: &SeedOptions) -> Result<SeedReport, String> {
    info!(
        "Seed: starting (count={}, moves={}, evolutions={}, flavor_version={})",
        opts.count, opts.moves, opts.evolutions, opts.flavor_version
    );

    let type_count = seed_types(conn, api)?;
    info!("Seed: {} type(s) stored", type_count);

    for name in CANONICAL_STATS {
        upsert::ensure_stat(conn, name).map_err(|e| format!("upsert stat {} failed: {}", name, e))?;
    }

    let mut chain_urls = BTreeSet::new();
    let report = seed_each(1..=opts.count, |id| {
        let seeded = seed_pokemon(conn, api, id, opts)?;
        if let Some(url) = seeded.evolution_chain_url {
            chain_urls.insert(url);
        }
        Ok(seeded.created)
    });

    if opts.evolutions {
        let edges = seed_evolutions(conn, api, &chain_urls);
        info!("Seed: {} evolution edge(s) inserted from {} chain(s)", edges, chain_urls.len());
    }

    info!(
        "Seed: finished (attempted={}, created={}, already_present={}, failed={})",
        report.attempted,
        report.created.len(),
        report.existing.len(),
        report.failed.len()
    );
    if !report.failed.is_empty() {
        let ids = report
            .failed
            .iter()
            .map(|(id, _)| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        warn!("Seed: skipped id(s): {}", ids);
    }
    Ok(report)
}

/// Run `f` for every id in order. An error is logged and recorded; the loop carries on.
/// `f` returns whether the record was newly created.
pub fn seed_each<I, F>(ids: I, mut f: F) -> SeedReport
where
    I: IntoIterator<Item = i32>,
    F: FnMut(i32) -> Result<bool, String>,
{
    let mut report = SeedReport::default();
    for id in ids {
        report.attempted += 1;
        match f(id) {
            Ok(true) => {
                info!("Seed: created #{}", id);
                report.created.push(id);
            }
            Ok(false) => {
                debug!("Seed: #{} already present", id);
                report.existing.push(id);
            }
            Err(e) => {
                error!("Seed: failed #{}: {}", id, e);
                report.failed.push((id, e));
            }
        }
    }
    report
}

// =====================
// Types
// =====================

/// Store every type and its outgoing damage relations. A type that cannot be
/// fetched is skipped; Pokémon seeding creates missing types on demand.
pub fn seed_types(conn: &mut PgConnection, api: &impl PokeApi) -> Result<usize, String> {
    let index = match api.get_type_index() {
        Ok(index) => index,
        Err(e) => {
            warn!("Seed: type index unavailable, types will be created on demand: {}", e);
            return Ok(0);
        }
    };

    let mut fetched = Vec::with_capacity(index.results.len());
    for entry in &index.results {
        match api.get_type(&entry.name) {
            Ok(t) => fetched.push(t),
            Err(e) => warn!("Seed: skipping type {}: {}", entry.name, e),
        }
    }

    for t in &fetched {
        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let attacking_id = upsert::ensure_type(conn, &t.name)?;
            let mut rows = Vec::new();
            for (defending, multiplier) in damage_dealt(&t.damage_relations) {
                rows.push(dbm::NewTypeEffectiveness {
                    attacking_type_id: attacking_id,
                    defending_type_id: upsert::ensure_type(conn, defending)?,
                    multiplier,
                });
            }
            upsert::insert_type_effectiveness(conn, &rows)?;
            Ok(())
        })
        .map_err(|e| format!("upsert type {} failed: {}", t.name, e))?;
    }

    Ok(fetched.len())
}

/// `(defending type, multiplier)` for the relations a type deals. Neutral (1x)
/// matchups are not listed upstream and are not stored.
fn damage_dealt(rel: &pokeapi::DamageRelations) -> Vec<(&str, f64)> {
    [
        ("double_damage_to", &rel.double_damage_to),
        ("half_damage_to", &rel.half_damage_to),
        ("no_damage_to", &rel.no_damage_to),
    ]
    .into_iter()
    .filter_map(|(relation, targets)| damage_multiplier(relation).map(|m| (targets, m)))
    .flat_map(|(targets, m)| targets.iter().map(move |t| (t.name.as_str(), m)))
    .collect()
}

// =====================
// Pokémon
// =====================

#[derive(Debug)]
struct SeededPokemon {
    created: bool,
    evolution_chain_url: Option<String>,
}

/// A move learnable by one Pokémon through one method.
#[derive(Debug, Clone, PartialEq)]
pub struct LearnsetEntry {
    pub move_name: String,
    pub learn_method: String,
    pub level: Option<i32>,
}

pub fn map_pokemon(p: &pokeapi::Pokemon, s: &pokeapi::PokemonSpecies, flavor_version: &str) -> dbm::NewPokemon {
    let generation = s
        .generation
        .as_ref()
        .map(|g| generation_from_name(&g.name))
        .unwrap_or(1);
    let artwork = p.sprites.other.as_ref().and_then(|o| o.official_artwork.as_ref());

    dbm::NewPokemon {
        pokedex_id: p.id,
        name: p.name.clone(),
        slug: slugify(&p.name),
        description: select_flavor_text(&s.flavor_text_entries, flavor_version),
        height_m: decimeters_to_meters(p.height),
        weight_kg: hectograms_to_kilograms(p.weight),
        base_experience: p.base_experience,
        capture_rate: s.capture_rate.clamp(0, 255),
        is_legendary: s.is_legendary,
        is_mythical: s.is_mythical,
        generation,
        image_url: artwork.and_then(|a| a.front_default.clone()),
        sprite_url: p.sprites.front_default.clone(),
        shiny_sprite_url: p.sprites.front_shiny.clone(),
    }
}

pub fn map_ability(a: &pokeapi::Ability, is_hidden: bool, flavor_version: &str) -> dbm::NewAbility {
    let effect = english_effect(&a.effect_entries);
    let flavor = select_flavor_text(&a.flavor_text_entries, flavor_version);
    let description = if flavor.is_empty() {
        effect.clone().unwrap_or_default()
    } else {
        flavor
    };

    dbm::NewAbility {
        name: a.name.clone(),
        description,
        effect,
        is_hidden,
    }
}

/// Move row without its type id (resolved at write time), plus the type name.
pub fn map_move(m: &pokeapi::Move) -> (dbm::NewMove, String) {
    let category = m
        .damage_class
        .as_ref()
        .map(|c| c.name.as_str())
        .filter(|c| move_category::ALL.contains(c))
        .unwrap_or(move_category::STATUS)
        .to_string();

    let row = dbm::NewMove {
        name: m.name.clone(),
        category,
        power: m.power,
        accuracy: m.accuracy,
        pp: m.pp.unwrap_or(0),
        priority: m.priority,
        type_id: 0,
    };
    (row, m.r#type.name.clone())
}

/// One entry per (move, learn method). Upstream lists a detail per version
/// group; the most recent version group wins. A level of 0 means "not learned
/// by level" and is stored as null.
pub fn collapse_learnset(moves: &[pokeapi::PokemonMoveEntry]) -> Vec<LearnsetEntry> {
    let mut out = Vec::new();
    for entry in moves {
        let mut latest: BTreeMap<&str, &pokeapi::MoveVersionDetail> = BTreeMap::new();
        for detail in &entry.version_group_details {
            let method = detail.move_learn_method.name.as_str();
            let newer = latest.get(method).is_none_or(|prev| {
                detail.version_group.resource_id() > prev.version_group.resource_id()
            });
            if newer {
                latest.insert(method, detail);
            }
        }
        for (method, detail) in latest {
            out.push(LearnsetEntry {
                move_name: entry.r#move.name.clone(),
                learn_method: method.to_string(),
                level: (detail.level_learned_at > 0).then_some(detail.level_learned_at),
            });
        }
    }
    out
}

fn seed_pokemon(
    conn: &mut PgConnection,
    api: &impl PokeApi,
    id: i32,
    opts: &SeedOptions,
) -> Result<SeededPokemon, String> {
    // Fetch phase
    let p = api.get_pokemon(id).map_err(|e| e.to_string())?;
    let s = api.get_species(id).map_err(|e| e.to_string())?;
    let new_pokemon = map_pokemon(&p, &s, &opts.flavor_version);

    let mut new_abilities = Vec::new();
    for slot in &p.abilities {
        let known = upsert::find_ability_id(conn, &slot.ability.name)
            .map_err(|e| format!("lookup ability {} failed: {}", slot.ability.name, e))?;
        if known.is_none() {
            let a = api.get_ability(&slot.ability.name).map_err(|e| e.to_string())?;
            new_abilities.push(map_ability(&a, slot.is_hidden, &opts.flavor_version));
        }
    }

    let learnset = if opts.moves {
        collapse_learnset(&p.moves)
    } else {
        Vec::new()
    };
    let mut new_moves = Vec::new();
    let mut seen = BTreeSet::new();
    for entry in &learnset {
        if !seen.insert(entry.move_name.as_str()) {
            continue;
        }
        let known = upsert::find_move_id(conn, &entry.move_name)
            .map_err(|e| format!("lookup move {} failed: {}", entry.move_name, e))?;
        if known.is_none() {
            let m = api.get_move(&entry.move_name).map_err(|e| e.to_string())?;
            new_moves.push(map_move(&m));
        }
    }
    debug!(
        "Seed: #{} fetched (abilities_new={}, moves_new={}, learnset={})",
        id,
        new_abilities.len(),
        new_moves.len(),
        learnset.len()
    );

    // Write phase
    let created = conn
        .transaction::<_, diesel::result::Error, _>(|conn| {
            let (pokemon_id, created) = upsert::ensure_pokemon(conn, &new_pokemon)?;

            let mut type_rows = Vec::with_capacity(p.types.len());
            for t in &p.types {
                type_rows.push(dbm::NewPokemonType {
                    pokemon_id,
                    type_id: upsert::ensure_type(conn, &t.r#type.name)?,
                    slot: t.slot,
                });
            }
            upsert::insert_pokemon_types(conn, &type_rows)?;

            for a in &new_abilities {
                upsert::ensure_ability(conn, a)?;
            }
            let mut ability_rows = Vec::with_capacity(p.abilities.len());
            for slot in &p.abilities {
                let ability_id = upsert::find_ability_id(conn, &slot.ability.name)?
                    .ok_or(diesel::result::Error::NotFound)?;
                ability_rows.push(dbm::NewPokemonAbility {
                    pokemon_id,
                    ability_id,
                    slot: slot.slot,
                    is_hidden: slot.is_hidden,
                });
            }
            upsert::insert_pokemon_abilities(conn, &ability_rows)?;

            let mut stat_rows = Vec::with_capacity(p.stats.len());
            for st in &p.stats {
                stat_rows.push(dbm::NewPokemonStat {
                    pokemon_id,
                    stat_id: upsert::ensure_stat(conn, &st.stat.name)?,
                    base_value: st.base_stat,
                    effort: st.effort,
                });
            }
            upsert::insert_pokemon_stats(conn, &stat_rows)?;

            for (row, type_name) in &new_moves {
                let mut row = row.clone();
                row.type_id = upsert::ensure_type(conn, type_name)?;
                upsert::ensure_move(conn, &row)?;
            }
            let mut move_rows = Vec::with_capacity(learnset.len());
            for entry in &learnset {
                let move_id = upsert::find_move_id(conn, &entry.move_name)?.ok_or(diesel::result::Error::NotFound)?;
                move_rows.push(dbm::NewPokemonMove {
                    pokemon_id,
                    move_id,
                    learn_method: entry.learn_method.clone(),
                    level: entry.level,
                });
            }
            upsert::insert_pokemon_moves(conn, &move_rows)?;

            Ok(created)
        })
        .map_err(|e| format!("store #{} failed: {}", id, e))?;

    Ok(SeededPokemon {
        created,
        evolution_chain_url: s.evolution_chain.map(|c| c.url),
    })
}

// =====================
// Evolutions
// =====================

/// A directed evolution edge between two species, as described by a chain.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionEdge {
    pub from: pokeapi::NamedResource,
    pub to: pokeapi::NamedResource,
    pub trigger: String,
    pub min_level: Option<i32>,
    pub item: Option<String>,
    pub location: Option<String>,
    pub time_of_day: Option<String>,
    pub condition: Option<String>,
}

/// Flatten a chain into parent → child edges, depth first. When a step lists
/// several alternative details (different games), the first one is used.
pub fn evolution_edges(chain: &pokeapi::ChainLink) -> Vec<EvolutionEdge> {
    let mut edges = Vec::new();
    collect_edges(chain, &mut edges);
    edges
}

fn collect_edges(link: &pokeapi::ChainLink, edges: &mut Vec<EvolutionEdge>) {
    for child in &link.evolves_to {
        let detail = child.evolution_details.first().cloned().unwrap_or_default();
        edges.push(EvolutionEdge {
            from: link.species.clone(),
            to: child.species.clone(),
            trigger: detail
                .trigger
                .as_ref()
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "other".to_string()),
            min_level: detail.min_level,
            item: detail.item.as_ref().or(detail.held_item.as_ref()).map(|i| i.name.clone()),
            location: detail.location.as_ref().map(|l| l.name.clone()),
            time_of_day: Some(detail.time_of_day.clone()).filter(|t| !t.is_empty()),
            condition: evolution_condition(&detail),
        });
        collect_edges(child, edges);
    }
}

/// Returns the number of edges inserted. Chains that fail to fetch and edges
/// whose endpoints are not stored are skipped.
pub fn seed_evolutions(conn: &mut PgConnection, api: &impl PokeApi, chain_urls: &BTreeSet<String>) -> usize {
    let mut inserted = 0;
    for url in chain_urls {
        let chain = match api.get_evolution_chain(url) {
            Ok(c) => c,
            Err(e) => {
                error!("Seed: evolution chain skipped: {}", e);
                continue;
            }
        };
        for edge in evolution_edges(&chain.chain) {
            match store_edge(conn, &edge) {
                Ok(n) => inserted += n,
                Err(e) => warn!(
                    "Seed: evolution {} -> {} skipped: {}",
                    edge.from.name, edge.to.name, e
                ),
            }
        }
    }
    inserted
}

fn resolve_species(conn: &mut PgConnection, species: &pokeapi::NamedResource) -> Result<Option<i64>, String> {
    let pokedex_id = species.resource_id().and_then(|v| i32::try_from(v).ok());
    upsert::find_pokemon_id(conn, pokedex_id, &species.name).map_err(|e| format!("lookup {} failed: {}", species.name, e))
}

fn store_edge(conn: &mut PgConnection, edge: &EvolutionEdge) -> Result<usize, String> {
    let from_id = resolve_species(conn, &edge.from)?;
    let to_id = resolve_species(conn, &edge.to)?;
    let (Some(from_id), Some(to_id)) = (from_id, to_id) else {
        debug!(
            "Seed: evolution {} -> {} not stored (species not seeded)",
            edge.from.name, edge.to.name
        );
        return Ok(0);
    };

    let row = dbm::NewEvolution {
        from_pokemon_id: from_id,
        to_pokemon_id: to_id,
        trigger: edge.trigger.clone(),
        min_level: edge.min_level,
        item: edge.item.clone(),
        location: edge.location.clone(),
        time_of_day: edge.time_of_day.clone(),
        condition: edge.condition.clone(),
    };
    upsert::insert_evolution(conn, &row).map_err(|e| format!("insert failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::PokeApi;
    use crate::schema;
    use crate::testing::{FixtureApi, SyntheticApi, test_conn};
    use pretty_assertions::assert_eq;

    fn opts(count: i32) -> SeedOptions {
        SeedOptions {
            count,
            flavor_version: "red".to_string(),
            moves: true,
            evolutions: true,
        }
    }

    #[test]
    fn batch_continues_past_a_failing_record() {
        let report = seed_each(1..=10, |id| {
            if id == 7 {
                Err("fetch https://pokeapi.co/api/v2/pokemon/7 failed: 500 Internal Server Error".to_string())
            } else {
                Ok(true)
            }
        });

        assert_eq!(report.attempted, 10);
        assert_eq!(report.created, vec![1, 2, 3, 4, 5, 6, 8, 9, 10]);
        assert_eq!(report.succeeded(), 9);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, 7);
        assert!(report.failed[0].1.contains("pokemon/7"));
    }

    #[test]
    fn already_present_records_are_not_counted_as_created() {
        let report = seed_each([1, 2, 3], |id| Ok(id != 2));
        assert_eq!(report.created, vec![1, 3]);
        assert_eq!(report.existing, vec![2]);
        assert!(report.failed.is_empty());
    }

    #[test]
    fn maps_pikachu_fixture() {
        let api = FixtureApi;
        let p = api.get_pokemon(25).expect("pokemon fixture");
        let s = api.get_species(25).expect("species fixture");
        let row = map_pokemon(&p, &s, "red");

        assert_eq!(row.pokedex_id, 25);
        assert_eq!(row.slug, "pikachu");
        assert!((row.height_m - 0.4).abs() < 1e-9);
        assert!((row.weight_kg - 6.0).abs() < 1e-9);
        assert_eq!(row.generation, 1);
        assert_eq!(row.capture_rate, 190);
        assert_eq!(row.base_experience, Some(112));
        assert!(!row.is_legendary && !row.is_mythical);
        assert_eq!(
            row.description,
            "When several of these POKéMON gather, their electricity could build and cause lightning storms."
        );
        assert!(row.image_url.as_deref().is_some_and(|u| u.contains("official-artwork/25.png")));
        assert!(row.shiny_sprite_url.as_deref().is_some_and(|u| u.contains("shiny/25.png")));
    }

    #[test]
    fn maps_abilities_and_moves() {
        let api = FixtureApi;
        let static_ = map_ability(&api.get_ability("static").unwrap(), false, "red");
        assert_eq!(static_.description, "Contact with the Pokémon may cause paralysis.");
        assert_eq!(
            static_.effect.as_deref(),
            Some("Has a 30% chance of paralyzing attacking Pokémon on contact.")
        );

        // no flavor text: description falls back to the effect
        let rod = map_ability(&api.get_ability("lightning-rod").unwrap(), true, "red");
        assert!(rod.is_hidden);
        assert_eq!(Some(rod.description.clone()), rod.effect);

        let (wave, wave_type) = map_move(&api.get_move("thunder-wave").unwrap());
        assert_eq!(wave.category, "status");
        assert_eq!(wave.power, None);
        assert_eq!(wave.accuracy, Some(90));
        assert_eq!(wave_type, "electric");

        let (quick, quick_type) = map_move(&api.get_move("quick-attack").unwrap());
        assert_eq!(quick.category, "physical");
        assert_eq!(quick.priority, 1);
        assert_eq!(quick_type, "normal");
    }

    #[test]
    fn collapses_learnset_to_latest_version_group() {
        let p = FixtureApi.get_pokemon(25).unwrap();
        let learnset = collapse_learnset(&p.moves);

        let entry = |name: &str, method: &str| {
            learnset
                .iter()
                .find(|e| e.move_name == name && e.learn_method == method)
                .cloned()
        };
        assert_eq!(learnset.len(), 4);
        assert_eq!(entry("quick-attack", "level-up").and_then(|e| e.level), Some(6));
        assert_eq!(entry("thunder-shock", "level-up").and_then(|e| e.level), Some(1));
        assert_eq!(
            entry("thunder-shock", "machine"),
            Some(LearnsetEntry {
                move_name: "thunder-shock".to_string(),
                learn_method: "machine".to_string(),
                level: None,
            })
        );
        assert!(entry("thunder-wave", "machine").is_some());
    }

    #[test]
    fn flattens_evolution_chain() {
        let chain = FixtureApi
            .get_evolution_chain("https://pokeapi.co/api/v2/evolution-chain/10/")
            .unwrap();
        let edges = evolution_edges(&chain.chain);

        assert_eq!(edges.len(), 2);
        assert_eq!((edges[0].from.name.as_str(), edges[0].to.name.as_str()), ("pichu", "pikachu"));
        assert_eq!(edges[0].trigger, "level-up");
        assert_eq!(edges[0].condition.as_deref(), Some("happiness >= 220"));
        assert_eq!(edges[0].time_of_day, None);
        assert_eq!(edges[1].to.resource_id(), Some(26));
        assert_eq!(edges[1].trigger, "use-item");
        assert_eq!(edges[1].item.as_deref(), Some("thunder-stone"));
    }

    #[test]
    fn lists_damage_dealt_without_neutral_matchups() {
        let electric = FixtureApi.get_type("electric").unwrap();
        let dealt = damage_dealt(&electric.damage_relations);
        assert_eq!(
            dealt,
            vec![
                ("flying", 2.0),
                ("water", 2.0),
                ("grass", 0.5),
                ("electric", 0.5),
                ("dragon", 0.5),
                ("ground", 0.0),
            ]
        );
    }

    #[test]
    #[ignore = "requires TEST_DATABASE_URL"]
    fn seeding_twice_creates_no_duplicates() {
        let mut conn = test_conn();
        let api = FixtureApi;

        let counts = |conn: &mut PgConnection| -> (i64, i64, i64, i64, i64) {
            (
                schema::pokemon::table.count().get_result(conn).unwrap(),
                schema::pokemon_types::table.count().get_result(conn).unwrap(),
                schema::pokemon_moves::table.count().get_result(conn).unwrap(),
                schema::types::table.count().get_result(conn).unwrap(),
                schema::type_effectiveness::table.count().get_result(conn).unwrap(),
            )
        };

        // id 26 has no fixture: it fails and is skipped
        let first = run(&mut conn, &api, &opts(26)).unwrap();
        assert!(first.succeeded() >= 1);
        assert!(first.failed.iter().any(|(id, _)| *id == 26));
        let after_first = counts(&mut conn);

        let second = run(&mut conn, &api, &opts(26)).unwrap();
        assert!(second.created.is_empty());
        assert!(second.existing.contains(&25));
        assert_eq!(counts(&mut conn), after_first);
    }

    #[test]
    #[ignore = "requires TEST_DATABASE_URL"]
    fn run_skips_a_failing_pokemon_and_stores_the_rest() {
        let mut conn = test_conn();
        let api = SyntheticApi { failing: vec![7] };
        let opts = SeedOptions {
            count: 10,
            flavor_version: "red".to_string(),
            moves: true,
            evolutions: false,
        };

        let report = run(&mut conn, &api, &opts).unwrap();
        assert_eq!(report.attempted, 10);
        assert_eq!(report.created, vec![1, 2, 3, 4, 5, 6, 8, 9, 10]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, 7);
        assert!(report.failed[0].1.contains("500"), "{}", report.failed[0].1);

        let stored: Vec<i32> = schema::pokemon::table
            .select(schema::pokemon::pokedex_id)
            .order(schema::pokemon::pokedex_id.asc())
            .load(&mut conn)
            .unwrap();
        assert_eq!(stored, vec![1, 2, 3, 4, 5, 6, 8, 9, 10]);
        let learnset_rows: i64 = schema::pokemon_moves::table.count().get_result(&mut conn).unwrap();
        assert_eq!(learnset_rows, 9 * 4);
    }
}
