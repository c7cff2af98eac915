use serde::de::Deserializer;
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One game-world system as served by `/system/{name}`.
///
/// Fields the API may omit default to empty so the renderer only ever sees
/// "absent" as an empty collection or `None`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SystemRecord {
    #[serde(default)]
    pub system_name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub system_id: String,
    #[serde(default)]
    pub region: String,
    pub security: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub stations: Vec<Station>,
    #[serde(default)]
    pub zone_type: Option<String>,
    #[serde(default)]
    pub constellation: Option<String>,
    #[serde(default, deserialize_with = "positional_resources")]
    pub resources: Resources,
    #[serde(default)]
    pub kills: Option<Kills>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub top_kills: Vec<TopKill>,
    #[serde(default, deserialize_with = "lenient_scores")]
    pub recomendations: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Station {
    #[serde(default)]
    pub owner: String,
    #[serde(rename = "type", default)]
    pub station_type: String,
}

/// Belt and mineral names. On the wire this is the tuple
/// `[belts, [minerals, ...]]`; only the first item of the inner list is used.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resources {
    pub belts: Vec<String>,
    pub minerals: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Kills {
    /// Counter as display text; `None` when absent or falsy (null, 0, "", false).
    #[serde(default, deserialize_with = "counter_text")]
    pub npc_kills: Option<String>,
    #[serde(default, deserialize_with = "counter_text")]
    pub ship_kills: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TopKill {
    #[serde(default)]
    pub victim: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub main_attacker: String,
    #[serde(default)]
    pub time: String,
}

/// Activity scores ordered as the `recomendations` array carries them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendations {
    pub mining: f64,
    pub exploration: f64,
    pub pvp: f64,
    pub pve: f64,
}

impl SystemRecord {
    /// Named view of `recomendations`, only when exactly four scores are present.
    pub fn recommendations(&self) -> Option<Recommendations> {
        match self.recomendations.as_slice() {
            [mining, exploration, pvp, pve] => Some(Recommendations {
                mining: *mining,
                exploration: *exploration,
                pvp: *pvp,
                pve: *pve,
            }),
            _ => None,
        }
    }
}

impl Serialize for Resources {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.belts)?;
        tuple.serialize_element(&[&self.minerals])?;
        tuple.end()
    }
}

fn positional_resources<'de, D>(deserializer: D) -> Result<Resources, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    let mut parts = raw.unwrap_or_default().into_iter();

    let belts = parts.next().map(string_list).unwrap_or_default();
    let minerals = parts
        .next()
        .and_then(|nested| match nested {
            Value::Array(items) => items.into_iter().next(),
            _ => None,
        })
        .map(string_list)
        .unwrap_or_default();

    Ok(Resources { belts, minerals })
}

fn string_list(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn counter_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// Scores decoded one by one: null counts as 0, numeric strings are parsed,
/// anything else becomes NaN and lights no segment.
fn lenient_scores<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    let items = match raw {
        Some(Value::Array(items)) => items,
        _ => return Ok(Vec::new()),
    };

    Ok(items
        .into_iter()
        .map(|item| match item {
            Value::Null => 0.0,
            Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
            _ => f64::NAN,
        })
        .collect())
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}
