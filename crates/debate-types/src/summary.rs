use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::turn::{DebateTurn, Sentiment};

/// Count of turns per sentiment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    #[serde(default)]
    pub positive: u32,
    #[serde(default)]
    pub negative: u32,
    #[serde(default)]
    pub neutral: u32,
    #[serde(default)]
    pub mixed: u32,
    /// Labels outside the four known ones
    #[serde(default)]
    pub other: u32,
}

impl SentimentBreakdown {
    /// Tally the sentiments present in a turn log. Turns without one are skipped.
    pub fn tally<'a>(turns: impl IntoIterator<Item = &'a DebateTurn>) -> Self {
        let mut out = Self::default();
        for sentiment in turns.into_iter().filter_map(|t| t.sentiment.as_ref()) {
            match sentiment {
                Sentiment::Positive => out.positive += 1,
                Sentiment::Negative => out.negative += 1,
                Sentiment::Neutral => out.neutral += 1,
                Sentiment::Mixed => out.mixed += 1,
                Sentiment::Other(_) => out.other += 1,
            }
        }
        out
    }

    pub fn total(&self) -> u32 {
        self.positive + self.negative + self.neutral + self.mixed + self.other
    }
}

/// Terminal artifact of a completed debate.
///
/// The payload is kept exactly as received in `raw` and serializes back to
/// it unchanged. The typed fields are read from it leniently: a missing or
/// ill-typed field takes its default, so decoding a summary never fails.
/// The engine sends either the full shape or a short `{ summary, share_url }`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub session_id: Option<String>,
    pub summary_text: String,
    pub sentiment_breakdown: Option<SentimentBreakdown>,
    pub key_insights: Vec<String>,
    pub consensus_points: Vec<String>,
    pub most_controversial_take: Option<String>,
    pub share_url: Option<String>,
    raw: Value,
}

impl Summary {
    pub fn from_value(raw: Value) -> Self {
        let empty = Map::new();
        let fields = raw.as_object().unwrap_or(&empty);
        Self {
            session_id: field(fields, &["session_id"]),
            summary_text: field(fields, &["summary_text", "summary"]).unwrap_or_default(),
            sentiment_breakdown: field(fields, &["sentiment_breakdown"]),
            key_insights: field(fields, &["key_insights"]).unwrap_or_default(),
            consensus_points: field(fields, &["consensus_points"]).unwrap_or_default(),
            most_controversial_take: field(fields, &["most_controversial_take"]),
            share_url: field(fields, &["share_url"]),
            raw,
        }
    }

    /// The payload as the engine sent it.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

/// First key present whose value decodes as `T`.
fn field<T: DeserializeOwned>(fields: &Map<String, Value>, keys: &[&str]) -> Option<T> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find_map(|value| T::deserialize(value).ok())
}

impl Serialize for Summary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Summary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Summary::from_value(Value::deserialize(deserializer)?))
    }
}
