use crate::agent::persona::Persona;
use crate::gemini::GeminiConfig;
use crate::news::FeedConfig;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub persona: Persona,
    #[serde(default)]
    pub seed_from_news: bool,

    #[serde(flatten)]
    pub gemini: GeminiConfig,
    #[serde(flatten)]
    pub feed: FeedConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(envy::prefixed("POSTCRAFT_").from_env::<AppConfig>()?)
    }
}

/// Flattened configs only ever see strings from the environment, so numbers
/// have to be parsed by hand.
pub(crate) fn deserialize_option_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s.parse::<u64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
