//! Read paths behind the HTTP API: filtered, paginated listing and the detail view.
//!
//! Response structs serialize with camelCase keys; `id` is always the national
//! Pokédex number, never the surrogate key.

use crate::db::models as dbm;
use crate::schema;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::PgConnection;
use serde::Serialize;
use std::collections::BTreeMap;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 100;
pub const DETAIL_MOVE_LIMIT: i64 = 20;
pub const MAX_MOVE_LEVEL: i32 = 100;

/// Validated list request.
#[derive(Debug, Clone, PartialEq)]
pub struct ListParams {
    page: i64,
    limit: i64,
    search: Option<String>,
    type_name: Option<String>,
}

impl ListParams {
    /// Blank `search`/`type_name` are treated as absent; the type name is lowercased.
    pub fn new(page: i64, limit: i64, search: Option<&str>, type_name: Option<&str>) -> Result<Self, String> {
        if page < 1 {
            return Err("page must be >= 1".to_string());
        }
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(format!("limit must be between 1 and {}", MAX_LIMIT));
        }
        let search = search.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);
        let type_name = type_name
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        Ok(ListParams {
            page,
            limit,
            search,
            type_name,
        })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Rows to skip. Saturates for absurd pages, which then simply come back empty.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub name: String,
    pub color: String,
    pub slot: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonSummary {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub generation: i32,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub image_url: Option<String>,
    pub sprite_url: Option<String>,
    pub types: Vec<TypeRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        Pagination {
            page,
            limit,
            total,
            total_pages: (total + limit - 1) / limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonPage {
    pub pokemon: Vec<PokemonSummary>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatValue {
    pub name: String,
    pub base_stat: i32,
    pub effort: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityRef {
    pub name: String,
    pub description: String,
    pub effect: Option<String>,
    pub is_hidden: bool,
    pub slot: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRef {
    pub name: String,
    /// Name of the move's type.
    pub r#type: String,
    pub category: String,
    pub power: Option<i32>,
    pub accuracy: Option<i32>,
    pub pp: i32,
    pub priority: i32,
    pub level: Option<i32>,
    pub learn_method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionRef {
    pub id: i32,
    pub name: String,
    pub trigger: String,
    pub min_level: Option<i32>,
    pub item: Option<String>,
    pub location: Option<String>,
    pub time_of_day: Option<String>,
    pub condition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonDetail {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Meters.
    pub height: f64,
    /// Kilograms.
    pub weight: f64,
    pub base_experience: Option<i32>,
    pub capture_rate: i32,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub generation: i32,
    pub image_url: Option<String>,
    pub sprite_url: Option<String>,
    pub shiny_sprite_url: Option<String>,
    pub types: Vec<TypeRef>,
    pub stats: Vec<StatValue>,
    pub abilities: Vec<AbilityRef>,
    pub moves: Vec<MoveRef>,
    pub evolves_from: Vec<EvolutionRef>,
    pub evolves_to: Vec<EvolutionRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeInfo {
    pub name: String,
    pub color: String,
}

/// Escape LIKE metacharacters so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn filtered(params: &ListParams) -> schema::pokemon::BoxedQuery<'static, Pg> {
    use schema::pokemon::dsl as P;
    use schema::pokemon_types::dsl as PT;
    use schema::types::dsl as T;

    let mut query = P::pokemon.into_boxed();

    if let Some(search) = params.search() {
        let pattern = format!("%{}%", escape_like(search));
        query = match search.parse::<i32>() {
            Ok(n) => query.filter(P::name.ilike(pattern).or(P::pokedex_id.eq(n))),
            Err(_) => query.filter(P::name.ilike(pattern)),
        };
    }

    if let Some(type_name) = params.type_name() {
        let with_type = PT::pokemon_types
            .inner_join(T::types)
            .filter(T::name.eq(type_name.to_string()))
            .select(PT::pokemon_id);
        query = query.filter(P::id.eq_any(with_type));
    }

    query
}

/// Types for each given Pokémon, ordered by slot.
fn types_by_pokemon(conn: &mut PgConnection, pokemon_ids: &[i64]) -> QueryResult<BTreeMap<i64, Vec<TypeRef>>> {
    use schema::pokemon_types::dsl as PT;
    use schema::types::dsl as T;

    let rows: Vec<(i64, i32, String, String)> = PT::pokemon_types
        .inner_join(T::types)
        .filter(PT::pokemon_id.eq_any(pokemon_ids))
        .order((PT::pokemon_id.asc(), PT::slot.asc()))
        .select((PT::pokemon_id, PT::slot, T::name, T::color))
        .load(conn)?;

    let mut map: BTreeMap<i64, Vec<TypeRef>> = BTreeMap::new();
    for (pokemon_id, slot, name, color) in rows {
        map.entry(pokemon_id).or_default().push(TypeRef { name, color, slot });
    }
    Ok(map)
}

pub fn list_pokemon(conn: &mut PgConnection, params: &ListParams) -> QueryResult<PokemonPage> {
    use schema::pokemon::dsl as P;

    let total: i64 = filtered(params).count().get_result(conn)?;
    let rows: Vec<dbm::Pokemon> = filtered(params)
        .order(P::pokedex_id.asc())
        .limit(params.limit())
        .offset(params.offset())
        .select(dbm::Pokemon::as_select())
        .load(conn)?;

    let ids = rows.iter().map(|p| p.id).collect::<Vec<_>>();
    let mut types = types_by_pokemon(conn, &ids)?;

    let pokemon = rows
        .into_iter()
        .map(|p| PokemonSummary {
            types: types.remove(&p.id).unwrap_or_default(),
            id: p.pokedex_id,
            name: p.name,
            slug: p.slug,
            generation: p.generation,
            is_legendary: p.is_legendary,
            is_mythical: p.is_mythical,
            image_url: p.image_url,
            sprite_url: p.sprite_url,
        })
        .collect();

    Ok(PokemonPage {
        pokemon,
        pagination: Pagination::new(params.page(), params.limit(), total),
    })
}

pub fn pokemon_detail(conn: &mut PgConnection, pokedex_id: i32) -> QueryResult<Option<PokemonDetail>> {
    use schema::abilities::dsl as A;
    use schema::moves::dsl as M;
    use schema::pokemon::dsl as P;
    use schema::pokemon_abilities::dsl as PA;
    use schema::pokemon_moves::dsl as PM;
    use schema::pokemon_stats::dsl as PS;
    use schema::stats::dsl as S;
    use schema::types::dsl as T;

    let Some(p) = P::pokemon
        .filter(P::pokedex_id.eq(pokedex_id))
        .select(dbm::Pokemon::as_select())
        .first(conn)
        .optional()?
    else {
        return Ok(None);
    };

    let types = types_by_pokemon(conn, &[p.id])?.remove(&p.id).unwrap_or_default();

    let stats = PS::pokemon_stats
        .inner_join(S::stats)
        .filter(PS::pokemon_id.eq(p.id))
        .order(S::id.asc())
        .select((S::name, PS::base_value, PS::effort))
        .load::<(String, i32, i32)>(conn)?
        .into_iter()
        .map(|(name, base_stat, effort)| StatValue { name, base_stat, effort })
        .collect();

    let abilities = PA::pokemon_abilities
        .inner_join(A::abilities)
        .filter(PA::pokemon_id.eq(p.id))
        .order(PA::slot.asc())
        .select((A::name, A::description, A::effect, PA::is_hidden, PA::slot))
        .load::<(String, String, Option<String>, bool, i32)>(conn)?
        .into_iter()
        .map(|(name, description, effect, is_hidden, slot)| AbilityRef {
            name,
            description,
            effect,
            is_hidden,
            slot,
        })
        .collect();

    let moves = PM::pokemon_moves
        .inner_join(M::moves.inner_join(T::types))
        .filter(PM::pokemon_id.eq(p.id))
        .filter(PM::level.le(MAX_MOVE_LEVEL))
        .order((PM::level.asc(), M::name.asc()))
        .limit(DETAIL_MOVE_LIMIT)
        .select((
            M::name,
            T::name,
            M::category,
            M::power,
            M::accuracy,
            M::pp,
            M::priority,
            PM::level,
            PM::learn_method,
        ))
        .load::<(String, String, String, Option<i32>, Option<i32>, i32, i32, Option<i32>, String)>(conn)?
        .into_iter()
        .map(
            |(name, type_name, category, power, accuracy, pp, priority, level, learn_method)| MoveRef {
                name,
                r#type: type_name,
                category,
                power,
                accuracy,
                pp,
                priority,
                level,
                learn_method,
            },
        )
        .collect();

    let evolves_from = evolution_refs(conn, p.id, EdgeSide::Target)?;
    let evolves_to = evolution_refs(conn, p.id, EdgeSide::Source)?;

    Ok(Some(PokemonDetail {
        id: p.pokedex_id,
        name: p.name,
        slug: p.slug,
        description: p.description,
        height: p.height_m,
        weight: p.weight_kg,
        base_experience: p.base_experience,
        capture_rate: p.capture_rate,
        is_legendary: p.is_legendary,
        is_mythical: p.is_mythical,
        generation: p.generation,
        image_url: p.image_url,
        sprite_url: p.sprite_url,
        shiny_sprite_url: p.shiny_sprite_url,
        types,
        stats,
        abilities,
        moves,
        evolves_from,
        evolves_to,
    }))
}

#[derive(Debug, Clone, Copy)]
enum EdgeSide {
    /// The Pokémon evolves into the other end.
    Source,
    /// The Pokémon evolves from the other end.
    Target,
}

/// Evolution edges touching `pokemon_id`, each described by the Pokémon at the other end.
fn evolution_refs(conn: &mut PgConnection, pokemon_id: i64, side: EdgeSide) -> QueryResult<Vec<EvolutionRef>> {
    use schema::evolutions::dsl as E;
    use schema::pokemon::dsl as P;

    let rows: Vec<(dbm::Evolution, i32, String)> = match side {
        EdgeSide::Source => E::evolutions
            .inner_join(P::pokemon.on(P::id.eq(E::to_pokemon_id)))
            .filter(E::from_pokemon_id.eq(pokemon_id))
            .order(P::pokedex_id.asc())
            .select((dbm::Evolution::as_select(), P::pokedex_id, P::name))
            .load(conn)?,
        EdgeSide::Target => E::evolutions
            .inner_join(P::pokemon.on(P::id.eq(E::from_pokemon_id)))
            .filter(E::to_pokemon_id.eq(pokemon_id))
            .order(P::pokedex_id.asc())
            .select((dbm::Evolution::as_select(), P::pokedex_id, P::name))
            .load(conn)?,
    };

    Ok(rows
        .into_iter()
        .map(|(e, id, name)| EvolutionRef {
            id,
            name,
            trigger: e.trigger,
            min_level: e.min_level,
            item: e.item,
            location: e.location,
            time_of_day: e.time_of_day,
            condition: e.condition,
        })
        .collect())
}

pub fn list_types(conn: &mut PgConnection) -> QueryResult<Vec<TypeInfo>> {
    use schema::types::dsl as T;

    Ok(T::types
        .order(T::name.asc())
        .select(dbm::Type::as_select())
        .load(conn)?
        .into_iter()
        .map(|t| TypeInfo {
            name: t.name,
            color: t.color,
        })
        .collect())
}
