//! Read-only JSON HTTP API.
//!
//! - `GET /api/pokemon?page=&limit=&search=&type=` → paginated list
//! - `GET /api/pokemon/{id}` → detail by national id
//! - `GET /api/types` → all types with display colours
//! - `GET /health`
//!
//! A fixed set of worker threads pull requests from one `tiny_http` server and
//! borrow a pooled connection per request. Handlers share no mutable state.

use crate::services::query::{self, DEFAULT_LIMIT, DEFAULT_PAGE, ListParams};
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;
use log::{debug, error, info, warn};
use serde::Deserialize;
use serde_json::{Value, json};
use std::ops::DerefMut;
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use thiserror::Error;
use tiny_http::{Header, Method, Request, Response, Server};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

const POKEMON_PATH: &str = "/api/pokemon";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::MethodNotAllowed => 405,
            ApiError::Internal(_) => 500,
        }
    }

    /// Message safe to send to clients; internal details stay in the server log.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<diesel::result::Error> for ApiError {
    fn from(e: diesel::result::Error) -> Self {
        ApiError::Internal(format!("database: {}", e))
    }
}

pub fn build_pool(database_url: &str, size: u32) -> Result<DbPool, String> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .max_size(size)
        .build(manager)
        .map_err(|e| format!("DB pool creation failed: {}", e))
}

/// Serve until the listener fails. Blocks the calling thread.
pub fn serve(pool: DbPool, bind: &str, workers: usize) -> Result<(), String> {
    let server = Server::http(bind).map_err(|e| format!("bind {} failed: {}", bind, e))?;
    let server = Arc::new(server);
    info!("HTTP: listening on http://{} with {} worker(s)", bind, workers);

    let mut handles = Vec::with_capacity(workers);
    for n in 0..workers {
        let server = Arc::clone(&server);
        let pool = pool.clone();
        let handle = thread::Builder::new()
            .name(format!("http-{}", n))
            .spawn(move || worker_loop(&server, &pool))
            .map_err(|e| format!("spawn worker {} failed: {}", n, e))?;
        handles.push(handle);
    }

    for handle in handles {
        if handle.join().is_err() {
            error!("HTTP: worker thread panicked");
        }
    }
    Ok(())
}

fn worker_loop(server: &Server, pool: &DbPool) {
    loop {
        match server.recv() {
            Ok(request) => handle_request(request, pool),
            Err(e) => {
                error!("HTTP: receive failed, worker exiting: {}", e);
                return;
            }
        }
    }
}

fn handle_request(request: Request, pool: &DbPool) {
    let started = Instant::now();
    let method = request.method().clone();
    let url = request.url().to_string();

    let result = route(&method, &url, || {
        pool.get().map_err(|e| ApiError::Internal(format!("db pool: {}", e)))
    });
    let (status, body) = match result {
        Ok(body) => (200, body),
        Err(e) => {
            if let ApiError::Internal(detail) = &e {
                error!("HTTP: {} {} failed: {}", method, url, detail);
            }
            (e.status(), json!({ "error": e.public_message() }))
        }
    };
    debug!(
        "HTTP: {} {} -> {} ({} ms)",
        method,
        url,
        status,
        started.elapsed().as_millis()
    );

    let mut response = Response::from_string(body.to_string()).with_status_code(status);
    if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
        response.add_header(header);
    }
    if let Err(e) = request.respond(response) {
        warn!("HTTP: failed to send response for {} {}: {}", method, url, e);
    }
}

#[derive(Debug, Default, Deserialize)]
struct ListQuery {
    page: Option<String>,
    limit: Option<String>,
    search: Option<String>,
    #[serde(rename = "type")]
    type_name: Option<String>,
}

/// Dispatch one request: match the path (404), then the method (405), then
/// parse parameters (400). Only then is `conn` asked for a connection.
pub fn route<C, F>(method: &Method, url: &str, conn: F) -> Result<Value, ApiError>
where
    C: DerefMut<Target = PgConnection>,
    F: FnOnce() -> Result<C, ApiError>,
{
    let (path, query_string) = url.split_once('?').unwrap_or((url, ""));
    let path = if path.len() > 1 { path.trim_end_matches('/') } else { path };

    enum Target<'a> {
        Health,
        List,
        Detail(&'a str),
        Types,
    }

    let target = if path == "/health" {
        Target::Health
    } else if path == POKEMON_PATH {
        Target::List
    } else if let Some(id) = path
        .strip_prefix(POKEMON_PATH)
        .and_then(|rest| rest.strip_prefix('/'))
        .filter(|id| !id.contains('/'))
    {
        Target::Detail(id)
    } else if path == "/api/types" {
        Target::Types
    } else {
        return Err(ApiError::NotFound(format!("no route for {}", path)));
    };

    if *method != Method::Get {
        return Err(ApiError::MethodNotAllowed);
    }

    let to_json = |v: Result<Value, serde_json::Error>| v.map_err(|e| ApiError::Internal(format!("serialize: {}", e)));
    match target {
        Target::Health => Ok(json!({ "status": "ok" })),
        Target::List => {
            let params = parse_list_query(query_string)?;
            let mut conn = conn()?;
            let page = query::list_pokemon(&mut conn, &params)?;
            to_json(serde_json::to_value(page))
        }
        Target::Detail(raw) => {
            let id = parse_id(raw)?;
            let mut conn = conn()?;
            let detail = query::pokemon_detail(&mut conn, id)?
                .ok_or_else(|| ApiError::NotFound(format!("Pokemon {} not found", id)))?;
            to_json(serde_json::to_value(detail))
        }
        Target::Types => {
            let mut conn = conn()?;
            let types = query::list_types(&mut conn)?;
            to_json(serde_json::to_value(types))
        }
    }
}

fn parse_list_query(query_string: &str) -> Result<ListParams, ApiError> {
    let q: ListQuery = serde_urlencoded::from_str(query_string)
        .map_err(|e| ApiError::BadRequest(format!("invalid query string: {}", e)))?;

    let page = parse_int("page", q.page.as_deref(), DEFAULT_PAGE)?;
    let limit = parse_int("limit", q.limit.as_deref(), DEFAULT_LIMIT)?;
    ListParams::new(page, limit, q.search.as_deref(), q.type_name.as_deref()).map_err(ApiError::BadRequest)
}

fn parse_int(name: &str, raw: Option<&str>, default: i64) -> Result<i64, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(s) => s
            .parse::<i64>()
            .map_err(|_| ApiError::BadRequest(format!("{} must be an integer", name))),
    }
}

fn parse_id(raw: &str) -> Result<i32, ApiError> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        Ok(_) => Err(ApiError::BadRequest("id must be a positive integer".to_string())),
        Err(_) => Err(ApiError::BadRequest(format!("invalid id: {}", raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::seed::{self, SeedOptions};
    use crate::testing::{FixtureApi, test_conn};
    use rstest::rstest;

    /// Stands in for the pool in tests that must fail before touching the database.
    fn no_db() -> Result<Box<PgConnection>, ApiError> {
        Err(ApiError::Internal("database not available in this test".to_string()))
    }

    fn get(conn: &mut PgConnection, url: &str) -> Result<Value, ApiError> {
        route(&Method::Get, url, move || Ok(conn))
    }

    #[rstest]
    #[case("/api/pokemon?page=0")]
    #[case("/api/pokemon?limit=0")]
    #[case("/api/pokemon?limit=101")]
    #[case("/api/pokemon?page=abc")]
    #[case("/api/pokemon?limit=1.5")]
    #[case("/api/pokemon/0")]
    #[case("/api/pokemon/-4")]
    #[case("/api/pokemon/pikachu")]
    fn rejects_bad_input_with_400(#[case] url: &str) {
        let err = route(&Method::Get, url, no_db).unwrap_err();
        assert_eq!(err.status(), 400, "{url}: {err}");
    }

    #[test]
    fn valid_list_reaches_the_database() {
        let err = route(&Method::Get, "/api/pokemon?page=2&limit=100&search=pika&type=electric", no_db).unwrap_err();
        assert_eq!(err.status(), 500);
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn parses_defaults_and_type_alias() {
        let params = parse_list_query("").unwrap();
        assert_eq!((params.page(), params.limit()), (DEFAULT_PAGE, DEFAULT_LIMIT));

        let params = parse_list_query("page=3&limit=50&search=mr.%20mime&type=Psychic").unwrap();
        assert_eq!(params.page(), 3);
        assert_eq!(params.limit(), 50);
        assert_eq!(params.search(), Some("mr. mime"));
        assert_eq!(params.type_name(), Some("psychic"));
    }

    #[test]
    fn health_and_unknown_routes() {
        assert_eq!(
            route(&Method::Get, "/health", no_db).unwrap(),
            json!({ "status": "ok" })
        );
        assert_eq!(route(&Method::Get, "/nope", no_db).unwrap_err().status(), 404);
        assert_eq!(route(&Method::Get, "/api/pokemonx", no_db).unwrap_err().status(), 404);
        assert_eq!(route(&Method::Post, "/api/pokemon", no_db).unwrap_err().status(), 405);
        assert_eq!(route(&Method::Delete, "/api/pokemon/25", no_db).unwrap_err().status(), 405);
    }

    #[rstest]
    #[case(Method::Post, "/api/pokemon?page=0", 405)]
    #[case(Method::Put, "/api/pokemon/abc", 405)]
    #[case(Method::Get, "/api/pokemon/25/extra", 404)]
    #[case(Method::Post, "/api/pokemon/25/extra", 404)]
    #[case(Method::Get, "/api/pokemon/", 500)]
    fn resolves_route_before_method_and_parameters(#[case] method: Method, #[case] url: &str, #[case] status: u16) {
        let err = route(&method, url, no_db).unwrap_err();
        assert_eq!(err.status(), status, "{url}: {err}");
    }

    #[test]
    fn huge_page_reaches_the_database_without_panicking() {
        let err = route(&Method::Get, "/api/pokemon?page=9223372036854775807&limit=100", no_db).unwrap_err();
        assert_eq!(err.status(), 500);
    }

    #[test]
    #[ignore = "requires TEST_DATABASE_URL"]
    fn serves_seeded_fixtures() {
        let mut conn = test_conn();
        let opts = SeedOptions {
            count: 25,
            flavor_version: "red".to_string(),
            moves: true,
            evolutions: false,
        };
        seed::run(&mut conn, &FixtureApi, &opts).unwrap();

        let detail = get(&mut conn, "/api/pokemon/25").unwrap();
        assert_eq!(detail["name"], "pikachu");
        assert_eq!(detail["types"][0]["slot"], 1);
        assert_eq!(detail["height"], 0.4);

        let missing = get(&mut conn, "/api/pokemon/99999").unwrap_err();
        assert_eq!(missing.status(), 404);

        let page = get(&mut conn, "/api/pokemon?limit=5").unwrap();
        assert!(page["pokemon"].as_array().unwrap().len() <= 5);
        let total = page["pagination"]["total"].as_i64().unwrap();
        assert_eq!(page["pagination"]["totalPages"].as_i64().unwrap(), (total + 4) / 5);

        let types = get(&mut conn, "/api/types").unwrap();
        let names = types
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|t| t["name"].as_str())
            .collect::<Vec<_>>();
        assert!(names.contains(&"electric"));
        assert!(names.windows(2).all(|w| w[0] <= w[1]));
    }
}
