//! Shared test helpers: a fixture-backed PokeAPI and an optional database.

use crate::client::{PokeApi, PokeApiError, decode_json};
use crate::models::pokeapi::*;
use diesel::prelude::*;
use diesel::PgConnection;
use serde::de::DeserializeOwned;

/// Serves `tests/data/<resource>-<key>.json`; a missing file answers 404.
pub struct FixtureApi;

impl FixtureApi {
    fn load<T: DeserializeOwned>(&self, file: &str) -> Result<T, PokeApiError> {
        let url = format!("fixture://{}", file);
        match std::fs::read_to_string(format!("tests/data/{}.json", file)) {
            Ok(body) => decode_json(&url, &body),
            Err(_) => Err(PokeApiError::Http {
                url,
                status: 404,
                status_text: "Not Found".to_string(),
            }),
        }
    }
}

impl PokeApi for FixtureApi {
    fn get_pokemon(&self, id: i32) -> Result<Pokemon, PokeApiError> {
        self.load(&format!("pokemon-{}", id))
    }

    fn get_species(&self, id: i32) -> Result<PokemonSpecies, PokeApiError> {
        self.load(&format!("pokemon-species-{}", id))
    }

    fn get_type_index(&self) -> Result<ResourceList, PokeApiError> {
        self.load("type-index")
    }

    fn get_type(&self, name: &str) -> Result<Type, PokeApiError> {
        self.load(&format!("type-{}", name))
    }

    fn get_ability(&self, name: &str) -> Result<Ability, PokeApiError> {
        self.load(&format!("ability-{}", name))
    }

    fn get_move(&self, name: &str) -> Result<Move, PokeApiError> {
        self.load(&format!("move-{}", name))
    }

    fn get_evolution_chain(&self, url: &str) -> Result<EvolutionChain, PokeApiError> {
        let id = url.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
        self.load(&format!("evolution-chain-{}", id))
    }
}

/// Serves the Pikachu fixtures under any national id, renamed `mon-<id>`, and
/// answers 500 for the ids in `failing`. Lookups other than pokemon and species
/// go to [`FixtureApi`].
pub struct SyntheticApi {
    pub failing: Vec<i32>,
}

impl PokeApi for SyntheticApi {
    fn get_pokemon(&self, id: i32) -> Result<Pokemon, PokeApiError> {
        if self.failing.contains(&id) {
            return Err(PokeApiError::Http {
                url: format!("fixture://pokemon-{}", id),
                status: 500,
                status_text: "Internal Server Error".to_string(),
            });
        }
        let mut p = FixtureApi.get_pokemon(25)?;
        p.id = id;
        p.name = format!("mon-{}", id);
        Ok(p)
    }

    fn get_species(&self, id: i32) -> Result<PokemonSpecies, PokeApiError> {
        let mut s = FixtureApi.get_species(25)?;
        s.id = id;
        s.name = format!("mon-{}", id);
        s.evolution_chain = None;
        Ok(s)
    }

    fn get_type_index(&self) -> Result<ResourceList, PokeApiError> {
        FixtureApi.get_type_index()
    }

    fn get_type(&self, name: &str) -> Result<Type, PokeApiError> {
        FixtureApi.get_type(name)
    }

    fn get_ability(&self, name: &str) -> Result<Ability, PokeApiError> {
        FixtureApi.get_ability(name)
    }

    fn get_move(&self, name: &str) -> Result<Move, PokeApiError> {
        FixtureApi.get_move(name)
    }

    fn get_evolution_chain(&self, url: &str) -> Result<EvolutionChain, PokeApiError> {
        FixtureApi.get_evolution_chain(url)
    }
}

/// Connection to `TEST_DATABASE_URL` inside a transaction that is never committed.
/// Tests using it are `#[ignore]`d; run them with `cargo test -- --ignored`.
pub fn test_conn() -> PgConnection {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must point at a scratch PostgreSQL database");
    let mut conn = PgConnection::establish(&url).expect("connect to TEST_DATABASE_URL");
    crate::apply_database_migrations(&mut conn).expect("apply migrations");
    conn.begin_test_transaction().expect("begin test transaction");
    conn
}
