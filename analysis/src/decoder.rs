use crate::ReplayError;

/// A participant's raw statistics, exactly as the replay stores them.
///
/// Keys come from the game client and change between patches, so nothing
/// here assumes a key is present. Values are usually numeric strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatRecord {
    fields: serde_json::Map<String, serde_json::Value>,
}

impl StatRecord {
    pub fn new(fields: serde_json::Map<String, serde_json::Value>) -> Self {
        Self { fields }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// The textual form of a scalar field. Numbers are rendered, anything
    /// else is treated as absent.
    pub fn text(&self, key: &str) -> Option<std::borrow::Cow<'_, str>> {
        match self.fields.get(key)? {
            serde_json::Value::String(s) => Some(std::borrow::Cow::Borrowed(s.as_str())),
            serde_json::Value::Number(n) => Some(std::borrow::Cow::Owned(n.to_string())),
            _ => None,
        }
    }

    /// A non-negative counter, 0 when missing or unreadable.
    pub fn count(&self, key: &str) -> u64 {
        let value = match self.fields.get(key) {
            Some(v) => v,
            None => return 0,
        };

        let parsed = match value {
            serde_json::Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
            serde_json::Value::String(s) => {
                let s = s.trim();
                s.parse::<u64>().ok().or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite() && *f >= 0.0)
                        .map(|f| f as u64)
                })
            }
            _ => None,
        };

        if parsed.is_none() {
            tracing::trace!(key, ?value, "Unreadable stat value, defaulting to 0");
        }

        parsed.unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for StatRecord {
    fn from(fields: serde_json::Map<String, serde_json::Value>) -> Self {
        Self::new(fields)
    }
}

/// The decoded top level of a replay payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    pub game_length_ms: u64,
    /// One record per participant, in the order the replay lists them.
    pub records: Vec<StatRecord>,
}

/// Decodes bytes as UTF-8, dropping invalid sequences instead of failing.
pub fn lossy_text(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        if !chunk.invalid().is_empty() {
            tracing::trace!(dropped = chunk.invalid().len(), "Dropped invalid UTF-8 bytes");
        }
    }
    text
}

#[tracing::instrument(skip_all, fields(len = bytes.len()))]
pub fn decode(bytes: &[u8]) -> Result<Payload, ReplayError> {
    let text = lossy_text(bytes);

    let root = parse_with_repair(&text)?;
    let mut root = match root {
        serde_json::Value::Object(o) => o,
        other => {
            return Err(ReplayError::corrupt(format!(
                "expected a JSON object, found {}",
                value_kind(&other)
            )))
        }
    };

    let game_length_ms = match root.get("gameLength") {
        None | Some(serde_json::Value::Null) => {
            return Err(ReplayError::MissingStatField("gameLength"))
        }
        Some(serde_json::Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .ok_or_else(|| ReplayError::corrupt(format!("invalid gameLength {}", n)))?,
        Some(other) => {
            return Err(ReplayError::corrupt(format!(
                "gameLength is {}, expected a number",
                value_kind(other)
            )))
        }
    };

    let stats = match root.remove("statsJson") {
        None | Some(serde_json::Value::Null) => {
            return Err(ReplayError::MissingStatField("statsJson"))
        }
        Some(v) => v,
    };

    let records = stat_records(stats)?;
    tracing::debug!(game_length_ms, participants = records.len(), "Decoded payload");

    Ok(Payload {
        game_length_ms,
        records,
    })
}

fn parse_with_repair(text: &str) -> Result<serde_json::Value, ReplayError> {
    let err = match serde_json::from_str(text) {
        Ok(v) => return Ok(v),
        Err(e) => e,
    };

    tracing::debug!(%err, "Payload does not parse as is, closing it and retrying");

    let mut repaired = text.strip_suffix(',').unwrap_or(text).to_owned();
    repaired.push('}');

    serde_json::from_str(&repaired).map_err(ReplayError::CorruptPayload)
}

/// Older payloads embed the per-player array as a JSON string, newer ones
/// (and re-exported files) as the array itself.
fn stat_records(stats: serde_json::Value) -> Result<Vec<StatRecord>, ReplayError> {
    let stats = match stats {
        serde_json::Value::String(inner) => {
            serde_json::from_str(&inner).map_err(ReplayError::CorruptPayload)?
        }
        other => other,
    };

    let entries = match stats {
        serde_json::Value::Array(entries) => entries,
        other => {
            return Err(ReplayError::corrupt(format!(
                "statsJson is {}, expected an array",
                value_kind(&other)
            )))
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| match entry {
            serde_json::Value::Object(fields) => Ok(StatRecord::new(fields)),
            other => Err(ReplayError::corrupt(format!(
                "stat record {} is {}, expected an object",
                idx,
                value_kind(&other)
            ))),
        })
        .collect()
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
