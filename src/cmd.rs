//! Command handlers for the `dk` binary.
//!
//! Each `run_*` function reads its input (argument, file, or stdin), calls
//! the matching library helper and prints the result to stdout. The
//! `render_*` functions do the same work without touching stdout so they
//! can be tested directly.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::chunk::chunk_list;
use crate::config::Config;
use crate::flatten::flatten_value;
use crate::hash::{compute_hash, compute_hash_bytes};

pub fn render_hash(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    match (text, file) {
        (Some(_), Some(_)) => bail!("pass either TEXT or --file, not both"),
        (Some(t), None) => {
            debug!(len = t.len(), "hashing argument");
            Ok(compute_hash(t))
        }
        (None, Some(path)) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
            debug!(len = bytes.len(), path = %path.display(), "hashing file");
            Ok(compute_hash_bytes(&bytes))
        }
        (None, None) => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            debug!(len = buf.len(), "hashing stdin");
            Ok(compute_hash_bytes(&buf))
        }
    }
}

pub fn render_flatten(
    config: &Config,
    input: &Value,
    prefix: Option<&str>,
    separator: Option<&str>,
) -> Result<String> {
    let prefix = prefix.unwrap_or(config.flatten.prefix.as_str());
    let separator = separator.unwrap_or(config.flatten.separator.as_str());
    if separator.is_empty() {
        bail!("separator must not be empty");
    }

    let flat = flatten_value(input, prefix, separator)?;
    info!(keys = flat.len(), "flattened input");
    to_json(config, &Value::Object(flat))
}

pub fn render_chunk(config: &Config, input: &Value, size: Option<usize>) -> Result<String> {
    let size = size.unwrap_or(config.chunking.default_size);
    let items = match input {
        Value::Array(items) => items,
        _ => bail!("chunk input must be a JSON array"),
    };

    let chunks = chunk_list(items, size)?;
    info!(items = items.len(), chunks = chunks.len(), size, "chunked input");
    let out = Value::Array(chunks.into_iter().map(Value::Array).collect());
    to_json(config, &out)
}

pub fn run_hash(text: Option<&str>, file: Option<&Path>) -> Result<()> {
    println!("{}", render_hash(text, file)?);
    Ok(())
}

pub fn run_flatten(
    config: &Config,
    input: Option<&Path>,
    prefix: Option<&str>,
    separator: Option<&str>,
) -> Result<()> {
    let value = read_json(input)?;
    println!("{}", render_flatten(config, &value, prefix, separator)?);
    Ok(())
}

pub fn run_chunk(config: &Config, input: Option<&Path>, size: Option<usize>) -> Result<()> {
    let value = read_json(input)?;
    println!("{}", render_chunk(config, &value, size)?);
    Ok(())
}

/// Parse JSON from `path`, or from stdin when no path is given.
fn read_json(path: Option<&Path>) -> Result<Value> {
    let content = match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read input file: {}", p.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    serde_json::from_str(&content).context("Failed to parse input as JSON")
}

fn to_json(config: &Config, value: &Value) -> Result<String> {
    let out = if config.output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn compact() -> Config {
        let mut cfg = Config::default();
        cfg.output.pretty = false;
        cfg
    }

    #[test]
    fn test_render_hash_text() {
        let h = render_hash(Some("abc"), None).unwrap();
        assert_eq!(
            h,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_render_hash_file_matches_text() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("input.txt");
        std::fs::write(&path, "hello").unwrap();
        assert_eq!(
            render_hash(None, Some(path.as_path())).unwrap(),
            render_hash(Some("hello"), None).unwrap()
        );
    }

    #[test]
    fn test_render_hash_rejects_both_sources() {
        assert!(render_hash(Some("x"), Some(Path::new("y"))).is_err());
    }

    #[test]
    fn test_render_flatten() {
        let input = json!({"a": 1, "b": {"c": 2}});
        let out = render_flatten(&compact(), &input, None, None).unwrap();
        assert_eq!(out, r#"{"a":1,"b.c":2}"#);
    }

    #[test]
    fn test_render_flatten_overrides() {
        let mut cfg = compact();
        cfg.flatten.prefix = "cfg".to_string();
        let input = json!({"a": {"b": true}});
        assert_eq!(
            render_flatten(&cfg, &input, None, None).unwrap(),
            r#"{"cfg.a.b":true}"#
        );
        assert_eq!(
            render_flatten(&cfg, &input, Some("x"), Some("_")).unwrap(),
            r#"{"x_a_b":true}"#
        );
    }

    #[test]
    fn test_render_flatten_rejects_array() {
        let err = render_flatten(&compact(), &json!([1]), None, None).unwrap_err();
        assert!(err.to_string().contains("expected a JSON object"));
    }

    #[test]
    fn test_render_chunk_default_size() {
        let mut cfg = compact();
        cfg.chunking.default_size = 2;
        let out = render_chunk(&cfg, &json!([1, 2, 3, 4, 5]), None).unwrap();
        assert_eq!(out, "[[1,2],[3,4],[5]]");
    }

    #[test]
    fn test_render_chunk_explicit_size_and_empty() {
        let cfg = compact();
        assert_eq!(render_chunk(&cfg, &json!([1, 2, 3]), Some(3)).unwrap(), "[[1,2,3]]");
        assert_eq!(render_chunk(&cfg, &json!([]), Some(3)).unwrap(), "[]");
    }

    #[test]
    fn test_render_chunk_errors() {
        let cfg = compact();
        assert!(render_chunk(&cfg, &json!({"a": 1}), Some(2)).is_err());
        let err = render_chunk(&cfg, &json!([1]), Some(0)).unwrap_err();
        assert!(err.to_string().contains("chunk size must be > 0"));
    }
}
