use crate::error::SourceError;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::path::Path;

/// One exported actor as served by the game-server module.
///
/// Fields outside the contract are kept in `extra` so templates can still
/// bind to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorData {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub actor_type: String,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub system: Map<String, Value>,
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default)]
    pub effects: Vec<Value>,
    #[serde(default)]
    pub flags: Map<String, Value>,
    #[serde(default)]
    pub prototype_token: Map<String, Value>,
    #[serde(rename = "_meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ActorMeta>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Provenance of an export, stamped by the game-server module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorMeta {
    pub system_id: String,
    pub system_version: String,
    pub foundry_version: String,
    pub exported_at: DateTime<Utc>,
}

impl ActorData {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            actor_type: String::new(),
            img: String::new(),
            system: Map::new(),
            items: Vec::new(),
            effects: Vec::new(),
            flags: Map::new(),
            prototype_token: Map::new(),
            meta: None,
            extra: Map::new(),
        }
    }

    /// The data context templates bind against: `{ "actor": <actor> }`.
    pub fn to_context(&self) -> Result<Value, SourceError> {
        Ok(json!({ "actor": serde_json::to_value(self)? }))
    }
}

/// Parses a JSON document holding one actor or an array of actors.
pub fn parse_actors(source: &str) -> Result<Vec<ActorData>, SourceError> {
    match serde_json::from_str::<Value>(source)? {
        Value::Array(values) => values
            .into_iter()
            .map(|v| serde_json::from_value(v).map_err(SourceError::from))
            .collect(),
        value @ Value::Object(_) => Ok(vec![serde_json::from_value(value)?]),
        Value::Null => Err(SourceError::UnexpectedShape("null")),
        Value::Bool(_) => Err(SourceError::UnexpectedShape("a boolean")),
        Value::Number(_) => Err(SourceError::UnexpectedShape("a number")),
        Value::String(_) => Err(SourceError::UnexpectedShape("a string")),
    }
}

/// Reads actors from a JSON file.
pub fn load_actors(path: &Path) -> Result<Vec<ActorData>, SourceError> {
    let source = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let actors = parse_actors(&source)?;
    debug!("Loaded {} actor(s) from {}", actors.len(), path.display());
    Ok(actors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    const RIN: &str = r#"{
        "id": "a1",
        "name": "Rin",
        "type": "character",
        "img": "tokens/rin.png",
        "system": { "attributes": { "hp": { "value": 7, "max": 12 } } },
        "items": [ { "name": "Sword" } ],
        "effects": [],
        "flags": {},
        "prototypeToken": { "name": "Rin" },
        "folder": "party",
        "_meta": {
            "systemId": "dnd5e",
            "systemVersion": "3.1.2",
            "foundryVersion": "12.331",
            "exportedAt": "2024-05-01T12:00:00.000Z"
        }
    }"#;

    #[test]
    fn test_parse_single_actor() {
        let actors = parse_actors(RIN).unwrap();
        assert_eq!(actors.len(), 1);
        let rin = &actors[0];
        assert_eq!(rin.actor_type, "character");
        assert_eq!(rin.prototype_token["name"], "Rin");
        assert_eq!(rin.extra["folder"], "party");

        let meta = rin.meta.as_ref().unwrap();
        assert_eq!(meta.system_id, "dnd5e");
        assert_eq!(meta.exported_at, Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        assert_eq!(meta.exported_at.year(), 2024);
    }

    #[test]
    fn test_parse_actor_array() {
        let json = format!("[{}, {{ \"id\": \"a2\", \"name\": \"Kai\" }}]", RIN);
        let actors = parse_actors(&json).unwrap();
        assert_eq!(actors.len(), 2);
        assert_eq!(actors[1].name, "Kai");
        assert!(actors[1].items.is_empty());
        assert!(actors[1].meta.is_none());
    }

    #[test]
    fn test_rejects_scalars() {
        assert!(matches!(parse_actors("42"), Err(SourceError::UnexpectedShape("a number"))));
        assert!(matches!(parse_actors("{"), Err(SourceError::Json(_))));
        assert!(matches!(parse_actors(r#"{ "name": "no id" }"#), Err(SourceError::Json(_))));
    }

    #[test]
    fn test_context_uses_wire_names() {
        let rin = parse_actors(RIN).unwrap().remove(0);
        let ctx = rin.to_context().unwrap();
        assert_eq!(ctx["actor"]["type"], "character");
        assert_eq!(ctx["actor"]["prototypeToken"]["name"], "Rin");
        assert_eq!(ctx["actor"]["_meta"]["systemId"], "dnd5e");
        assert_eq!(ctx["actor"]["system"]["attributes"]["hp"]["max"], 12);
        assert_eq!(ctx["actor"]["folder"], "party");
    }

    #[test]
    fn test_load_actors_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("party.json");
        std::fs::write(&path, RIN).unwrap();
        assert_eq!(load_actors(&path).unwrap()[0].id, "a1");
        assert!(matches!(
            load_actors(&dir.path().join("missing.json")),
            Err(SourceError::Io { .. })
        ));
    }
}
