//! `.env` support: `KEY=value` lines, optional `export`, `#` comments, and
//! single- or double-quoted values (double quotes understand `\n`, `\t`, `\\`, `\"`).
//! Variables already present in the process environment are never overridden.

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct LoadedEnvFile {
    pub path: PathBuf,
    /// Named on the command line rather than found as `./.env`.
    pub explicit: bool,
}

/// Load `explicit` (which must exist) or, failing that, `./.env` if present.
pub fn load(explicit: Option<PathBuf>) -> Result<Option<LoadedEnvFile>, String> {
    let (path, explicit) = match explicit {
        Some(path) if path.is_file() => (path, true),
        Some(path) => return Err(format!("env file not found: {}", path.display())),
        None => {
            let path = std::env::current_dir()
                .map_err(|e| format!("unable to read current directory: {}", e))?
                .join(".env");
            if !path.is_file() {
                return Ok(None);
            }
            (path, false)
        }
    };

    apply(&path)?;
    Ok(Some(LoadedEnvFile { path, explicit }))
}

fn apply(path: &Path) -> Result<(), String> {
    let contents = fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    for (index, line) in contents.lines().enumerate() {
        let parsed = parse_line(line).map_err(|e| format!("{}:{}: {}", path.display(), index + 1, e))?;
        if let Some((key, value)) = parsed
            && std::env::var_os(&key).is_none()
        {
            // Single-threaded at this point: logging and workers start later.
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }
    Ok(())
}

/// `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<(String, String)>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let line = line.strip_prefix("export ").map_or(line, str::trim_start);

    let (key, raw) = line.split_once('=').ok_or("missing '=' in assignment")?;
    let key = key.trim();
    if key.is_empty() {
        return Err("variable name cannot be empty".to_string());
    }
    if key.contains(char::is_whitespace) {
        return Err(format!("variable name contains whitespace: {}", key));
    }

    Ok(Some((key.to_string(), parse_value(raw.trim())?)))
}

fn parse_value(raw: &str) -> Result<String, String> {
    let Some(quote) = raw.chars().next().filter(|c| *c == '"' || *c == '\'') else {
        // Unquoted: an inline comment ends the value.
        let value = raw.split_once('#').map_or(raw, |(v, _)| v);
        return Ok(value.trim_end().to_string());
    };

    let mut value = String::new();
    let mut chars = raw[1..].chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' if quote == '"' => {
                let escaped = chars.next().ok_or("unterminated escape sequence")?;
                value.push(match escaped {
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    other => other,
                });
            }
            c if c == quote => {
                let rest = chars.as_str().trim_start();
                return if rest.is_empty() || rest.starts_with('#') {
                    Ok(value)
                } else {
                    Err(format!("unexpected characters after closing {} quote", quote))
                };
            }
            c => value.push(c),
        }
    }
    Err(format!("unterminated {} quoted value", quote))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn pair(k: &str, v: &str) -> Option<(String, String)> {
        Some((k.to_string(), v.to_string()))
    }

    #[rstest]
    #[case("", None)]
    #[case("   # comment", None)]
    #[case("DATABASE_URL=postgres://localhost/pokedex", pair("DATABASE_URL", "postgres://localhost/pokedex"))]
    #[case("export SEED_POKEMON_COUNT = 9 # first nine", pair("SEED_POKEMON_COUNT", "9"))]
    #[case("POKEAPI_FLAVOR_VERSION=\"blue\"", pair("POKEAPI_FLAVOR_VERSION", "blue"))]
    #[case("SERVER_BIND='0.0.0.0:3000' # all interfaces", pair("SERVER_BIND", "0.0.0.0:3000"))]
    #[case("RUST_LOG=\"pokedex=debug\\n\"", pair("RUST_LOG", "pokedex=debug\n"))]
    #[case("POKEAPI_BASE_URL='http://x/#frag'", pair("POKEAPI_BASE_URL", "http://x/#frag"))]
    #[case("SEED_MOVES=", pair("SEED_MOVES", ""))]
    fn parses_env_lines(#[case] line: &str, #[case] expected: Option<(String, String)>) {
        assert_eq!(parse_line(line).unwrap(), expected);
    }

    #[rstest]
    #[case("NO_EQUALS")]
    #[case("=value")]
    #[case("BAD KEY=1")]
    #[case("A=\"unterminated")]
    #[case("A=\"dangling\\")]
    #[case("A='x' trailing")]
    fn rejects_malformed_env_lines(#[case] line: &str) {
        assert!(parse_line(line).is_err(), "{line}");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load(Some(PathBuf::from("does/not/exist.env"))).unwrap_err();
        assert!(err.contains("does/not/exist.env"), "{err}");
    }
}
