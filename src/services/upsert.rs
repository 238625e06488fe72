//! Insert-if-absent writes keyed on each table's natural unique key.
//!
//! Every insert is `ON CONFLICT (...) DO NOTHING`: rows that already exist are
//! left untouched, so repeated seeding only ever adds what is missing. Functions
//! that need the surrogate key read it back by the same natural key.

use crate::db::models as dbm;
use crate::schema;
use crate::utils::type_color;
use diesel::prelude::*;
use diesel::PgConnection;

/// Returns the type id, creating the row (with its display colour) when absent.
pub fn ensure_type(conn: &mut PgConnection, name: &str) -> QueryResult<i64> {
    use schema::types::dsl as T;

    let new_row = dbm::NewType {
        name: name.to_string(),
        color: type_color(name).to_string(),
    };
    diesel::insert_into(T::types)
        .values(&new_row)
        .on_conflict(T::name)
        .do_nothing()
        .execute(conn)?;

    T::types.filter(T::name.eq(name)).select(T::id).first(conn)
}

pub fn ensure_stat(conn: &mut PgConnection, name: &str) -> QueryResult<i64> {
    use schema::stats::dsl as S;

    diesel::insert_into(S::stats)
        .values(&dbm::NewStat { name: name.to_string() })
        .on_conflict(S::name)
        .do_nothing()
        .execute(conn)?;

    S::stats.filter(S::name.eq(name)).select(S::id).first(conn)
}

pub fn ensure_ability(conn: &mut PgConnection, row: &dbm::NewAbility) -> QueryResult<i64> {
    use schema::abilities::dsl as A;

    diesel::insert_into(A::abilities)
        .values(row)
        .on_conflict(A::name)
        .do_nothing()
        .execute(conn)?;

    A::abilities.filter(A::name.eq(&row.name)).select(A::id).first(conn)
}

pub fn ensure_move(conn: &mut PgConnection, row: &dbm::NewMove) -> QueryResult<i64> {
    use schema::moves::dsl as M;

    diesel::insert_into(M::moves)
        .values(row)
        .on_conflict(M::name)
        .do_nothing()
        .execute(conn)?;

    M::moves.filter(M::name.eq(&row.name)).select(M::id).first(conn)
}

/// Returns `(id, created)`; `created` is false when the Pokémon was already stored.
pub fn ensure_pokemon(conn: &mut PgConnection, row: &dbm::NewPokemon) -> QueryResult<(i64, bool)> {
    use schema::pokemon::dsl as P;

    let inserted = diesel::insert_into(P::pokemon)
        .values(row)
        .on_conflict(P::pokedex_id)
        .do_nothing()
        .execute(conn)?;

    let id = P::pokemon
        .filter(P::pokedex_id.eq(row.pokedex_id))
        .select(P::id)
        .first(conn)?;
    Ok((id, inserted > 0))
}

pub fn find_ability_id(conn: &mut PgConnection, name: &str) -> QueryResult<Option<i64>> {
    use schema::abilities::dsl as A;
    A::abilities.filter(A::name.eq(name)).select(A::id).first(conn).optional()
}

pub fn find_move_id(conn: &mut PgConnection, name: &str) -> QueryResult<Option<i64>> {
    use schema::moves::dsl as M;
    M::moves.filter(M::name.eq(name)).select(M::id).first(conn).optional()
}

/// Resolve a species to a stored Pokémon: national id first, then name.
pub fn find_pokemon_id(conn: &mut PgConnection, pokedex_id: Option<i32>, name: &str) -> QueryResult<Option<i64>> {
    use schema::pokemon::dsl as P;

    if let Some(pid) = pokedex_id {
        let by_id = P::pokemon
            .filter(P::pokedex_id.eq(pid))
            .select(P::id)
            .first(conn)
            .optional()?;
        if by_id.is_some() {
            return Ok(by_id);
        }
    }
    P::pokemon.filter(P::name.eq(name)).select(P::id).first(conn).optional()
}

pub fn insert_type_effectiveness(conn: &mut PgConnection, rows: &[dbm::NewTypeEffectiveness]) -> QueryResult<usize> {
    if rows.is_empty() {
        return Ok(0);
    }

    use schema::type_effectiveness::dsl as TE;

    diesel::insert_into(TE::type_effectiveness)
        .values(rows)
        .on_conflict((TE::attacking_type_id, TE::defending_type_id))
        .do_nothing()
        .execute(conn)
}

pub fn insert_pokemon_types(conn: &mut PgConnection, rows: &[dbm::NewPokemonType]) -> QueryResult<usize> {
    if rows.is_empty() {
        return Ok(0);
    }

    use schema::pokemon_types::dsl as PT;

    diesel::insert_into(PT::pokemon_types)
        .values(rows)
        .on_conflict((PT::pokemon_id, PT::slot))
        .do_nothing()
        .execute(conn)
}

pub fn insert_pokemon_abilities(conn: &mut PgConnection, rows: &[dbm::NewPokemonAbility]) -> QueryResult<usize> {
    if rows.is_empty() {
        return Ok(0);
    }

    use schema::pokemon_abilities::dsl as PA;

    diesel::insert_into(PA::pokemon_abilities)
        .values(rows)
        .on_conflict((PA::pokemon_id, PA::slot))
        .do_nothing()
        .execute(conn)
}

pub fn insert_pokemon_stats(conn: &mut PgConnection, rows: &[dbm::NewPokemonStat]) -> QueryResult<usize> {
    if rows.is_empty() {
        return Ok(0);
    }

    use schema::pokemon_stats::dsl as PS;

    diesel::insert_into(PS::pokemon_stats)
        .values(rows)
        .on_conflict((PS::pokemon_id, PS::stat_id))
        .do_nothing()
        .execute(conn)
}

pub fn insert_pokemon_moves(conn: &mut PgConnection, rows: &[dbm::NewPokemonMove]) -> QueryResult<usize> {
    if rows.is_empty() {
        return Ok(0);
    }

    use schema::pokemon_moves::dsl as PM;

    diesel::insert_into(PM::pokemon_moves)
        .values(rows)
        .on_conflict((PM::pokemon_id, PM::move_id, PM::learn_method))
        .do_nothing()
        .execute(conn)
}

pub fn insert_evolution(conn: &mut PgConnection, row: &dbm::NewEvolution) -> QueryResult<usize> {
    use schema::evolutions::dsl as E;

    diesel::insert_into(E::evolutions)
        .values(row)
        .on_conflict((E::from_pokemon_id, E::to_pokemon_id))
        .do_nothing()
        .execute(conn)
}
