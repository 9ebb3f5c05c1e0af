use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Sentiment classification attached to a turn by the remote engine.
///
/// The four labels the engine is known to emit get their own variants.
/// Anything else is kept verbatim in `Other`, so it still counts as a
/// distinct classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Mixed,
    Other(String),
}

impl Sentiment {
    /// Blank labels carry no classification.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let sentiment = match s {
            "" => return None,
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            "neutral" => Sentiment::Neutral,
            "mixed" => Sentiment::Mixed,
            other => Sentiment::Other(other.to_string()),
        };
        Some(sentiment)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Mixed => "mixed",
            Sentiment::Other(label) => label,
        }
    }
}

impl Serialize for Sentiment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Sentiment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Sentiment::parse(&raw).ok_or_else(|| serde::de::Error::custom("empty sentiment label"))
    }
}

/// One utterance from one persona in one wave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateTurn {
    #[serde(default)]
    pub session_id: String,
    pub persona_id: String,
    #[serde(default)]
    pub persona_name: String,
    #[serde(default)]
    pub text: String,
    /// Missing, null, or zero on the wire all mean wave 1.
    #[serde(default = "default_wave", deserialize_with = "lenient_wave")]
    pub wave: u32,
    #[serde(default, deserialize_with = "lenient_sentiment")]
    pub sentiment: Option<Sentiment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub is_rebuttal: bool,
    /// Terminal fragment: the speaker has finished, no text to append.
    #[serde(default, rename = "is_complete")]
    pub is_final: bool,
    #[serde(default)]
    pub timestamp: String,
}

impl DebateTurn {
    pub fn new(persona_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            session_id: String::new(),
            persona_id: persona_id.into(),
            persona_name: String::new(),
            text: text.into(),
            wave: 1,
            sentiment: None,
            confidence_score: None,
            is_rebuttal: false,
            is_final: false,
            timestamp: String::new(),
        }
    }

    pub fn with_wave(mut self, wave: u32) -> Self {
        self.wave = wave.max(1);
        self
    }

    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = Some(sentiment);
        self
    }

    pub fn rebuttal(mut self) -> Self {
        self.is_rebuttal = true;
        self
    }
}

fn default_wave() -> u32 {
    1
}

fn lenient_wave<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let wave = Option::<u32>::deserialize(deserializer)?;
    Ok(wave.filter(|w| *w >= 1).unwrap_or(1))
}

fn lenient_sentiment<'de, D>(deserializer: D) -> Result<Option<Sentiment>, D::Error>
where
    D: Deserializer<'de>,
{
    // Non-string values are treated like a missing label
    let raw = Value::deserialize(deserializer)?;
    Ok(raw.as_str().and_then(Sentiment::parse))
}
