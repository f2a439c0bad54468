//! Shared JSON fixture cases for pbvalue integration tests.
//!
//! `fixtures/manifest.json` indexes two families of cases:
//! - `roundtrip`: a JSON document and its encoded `Value` wire form.
//! - `lenient`: a foreign wire form (untagged, over-populated) and the JSON
//!   it must decode to.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value as JsonValue;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    roundtrip: BTreeMap<String, String>,
    lenient: BTreeMap<String, String>,
}

/// A JSON document paired with the wire form its encoding must produce.
#[derive(Debug, Clone, Deserialize)]
pub struct RoundtripCase {
    pub json: JsonValue,
    pub encoded: JsonValue,
}

/// A wire form that only decodes thanks to kind resolution.
#[derive(Debug, Clone, Deserialize)]
pub struct LenientCase {
    pub wire: JsonValue,
    pub json: JsonValue,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a>(map: &'a BTreeMap<String, String>, family: &str, name: &str) -> Result<&'a str> {
    map.get(name)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("unknown {family} fixture '{name}'"))
}

pub mod roundtrip {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.roundtrip.keys().cloned().collect()
    }

    pub fn load(name: &str) -> Result<RoundtripCase> {
        let rel = lookup(&MANIFEST.roundtrip, "roundtrip", name)?;
        load_json(rel)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let rel = lookup(&MANIFEST.roundtrip, "roundtrip", name)?;
        Ok(resolve_path(rel))
    }
}

pub mod lenient {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.lenient.keys().cloned().collect()
    }

    pub fn load(name: &str) -> Result<LenientCase> {
        let rel = lookup(&MANIFEST.lenient, "lenient", name)?;
        load_json(rel)
    }

    /// Raw file contents, for tests that parse the wire text themselves.
    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.lenient, "lenient", name)?;
        read_to_string(rel)
    }
}
