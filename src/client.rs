//! Blocking HTTP client for the PokeAPI v2 REST API (GET endpoints used by the seeder).
//!
//! - Blocking client using `ureq` (no async).
//! - Every request is preceded by a fixed sleep; PokeAPI asks consumers to
//!   throttle themselves and the seeder fetches strictly one resource at a time.
//! - No retries: a failed fetch is reported to the caller, which decides whether
//!   to skip the record.

use serde::de::DeserializeOwned;
use std::thread;
use std::time::Duration;
use thiserror::Error;

use crate::models::pokeapi::*;

#[derive(Debug, Error)]
pub enum PokeApiError {
    #[error("transport error fetching {url}: {message}")]
    Transport { url: String, message: String },
    #[error("fetch {url} failed: {status} {status_text}")]
    Http {
        url: String,
        status: u16,
        status_text: String,
    },
    #[error("invalid json from {url} at `{path}`: {message}")]
    Json {
        url: String,
        path: String,
        message: String,
    },
}

/// The upstream resources the seeder needs. Implemented by [`PokeApiClient`];
/// tests substitute canned data.
pub trait PokeApi {
    fn get_pokemon(&self, id: i32) -> Result<Pokemon, PokeApiError>;
    fn get_species(&self, id: i32) -> Result<PokemonSpecies, PokeApiError>;
    fn get_type_index(&self) -> Result<ResourceList, PokeApiError>;
    fn get_type(&self, name: &str) -> Result<Type, PokeApiError>;
    fn get_ability(&self, name: &str) -> Result<Ability, PokeApiError>;
    fn get_move(&self, name: &str) -> Result<Move, PokeApiError>;
    fn get_evolution_chain(&self, url: &str) -> Result<EvolutionChain, PokeApiError>;
}

pub struct PokeApiClient {
    agent: ureq::Agent,
    base_url: String,
    delay: Duration,
}

impl PokeApiClient {
    pub fn new(base_url: impl Into<String>, delay: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            // status codes are mapped to PokeApiError::Http below, with the URL attached
            .http_status_as_error(false)
            .build()
            .into();
        let base_url = base_url.into().trim_end_matches('/').to_string();

        PokeApiClient { agent, base_url, delay }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, PokeApiError> {
        let url = self.url(path);
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        log::debug!("GET {}", url);

        let transport = |e: ureq::Error| PokeApiError::Transport {
            url: url.clone(),
            message: e.to_string(),
        };

        let mut res = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .header("User-Agent", concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .call()
            .map_err(transport)?;

        let status: http::StatusCode = res.status();
        if !status.is_success() {
            return Err(PokeApiError::Http {
                url: url.clone(),
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
            });
        }

        let body = res.body_mut().read_to_string().map_err(transport)?;
        decode_json(&url, &body)
    }
}

/// Decode a response body, reporting the JSON path of the first mismatch.
pub fn decode_json<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, PokeApiError> {
    let de = &mut serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(de).map_err(|e| PokeApiError::Json {
        url: url.to_string(),
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })
}

impl PokeApi for PokeApiClient {
    fn get_pokemon(&self, id: i32) -> Result<Pokemon, PokeApiError> {
        self.get_json(&format!("/pokemon/{}", id))
    }

    fn get_species(&self, id: i32) -> Result<PokemonSpecies, PokeApiError> {
        self.get_json(&format!("/pokemon-species/{}", id))
    }

    fn get_type_index(&self) -> Result<ResourceList, PokeApiError> {
        // all types fit in one page; the default page size (20) does not
        self.get_json("/type?limit=100")
    }

    fn get_type(&self, name: &str) -> Result<Type, PokeApiError> {
        self.get_json(&format!("/type/{}", name))
    }

    fn get_ability(&self, name: &str) -> Result<Ability, PokeApiError> {
        self.get_json(&format!("/ability/{}", name))
    }

    fn get_move(&self, name: &str) -> Result<Move, PokeApiError> {
        self.get_json(&format!("/move/{}", name))
    }

    fn get_evolution_chain(&self, url: &str) -> Result<EvolutionChain, PokeApiError> {
        self.get_json(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_and_keeps_absolute_urls() {
        let client = PokeApiClient::new("https://pokeapi.co/api/v2/", Duration::ZERO);
        assert_eq!(client.base_url(), "https://pokeapi.co/api/v2");
        assert_eq!(client.url("/pokemon/25"), "https://pokeapi.co/api/v2/pokemon/25");
        assert_eq!(client.url("type/fire"), "https://pokeapi.co/api/v2/type/fire");
        assert_eq!(
            client.url("https://pokeapi.co/api/v2/evolution-chain/10/"),
            "https://pokeapi.co/api/v2/evolution-chain/10/"
        );
    }

    #[test]
    fn json_errors_carry_url_and_path() {
        let err = decode_json::<Pokemon>("http://x/pokemon/1", r#"{"id": 1, "name": "bulbasaur", "height": "tall"}"#)
            .unwrap_err();
        match err {
            PokeApiError::Json { url, path, .. } => {
                assert_eq!(url, "http://x/pokemon/1");
                assert_eq!(path, "height");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn http_error_message_names_url_and_status_text() {
        let err = PokeApiError::Http {
            url: "https://pokeapi.co/api/v2/pokemon/99999".to_string(),
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "fetch https://pokeapi.co/api/v2/pokemon/99999 failed: 404 Not Found"
        );
    }
}
