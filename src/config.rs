use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::PatternKey;

/// Number of custom phrase slots.
pub const CUSTOM_PHRASE_SLOTS: usize = 3;

/// Errors reading or changing a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings record wasn't valid JSON for a [`Config`].
    #[error("invalid settings: {0}")]
    Json(#[from] serde_json::Error),
    /// A custom phrase slot outside `0..CUSTOM_PHRASE_SLOTS`.
    #[error(
        "custom phrase slot {index} is out of range, there are {} slots",
        CUSTOM_PHRASE_SLOTS
    )]
    PhraseSlot {
        /// The requested, 0-based slot.
        index: usize,
    },
}

/// User settings: which patterns are offered and the custom phrases.
///
/// Serializes to the same camelCase JSON record the editor plugin persists:
///
/// ```json
/// { "customPhrases": ["TODO", "", ""], "enabledPatterns": { "asterisk": true } }
/// ```
///
/// Anything missing from a loaded record takes its default, so records
/// written before a pattern existed still load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(
        default = "default_custom_phrases",
        deserialize_with = "deserialize_custom_phrases"
    )]
    custom_phrases: Vec<String>,
    #[serde(
        default = "default_enabled_patterns",
        deserialize_with = "deserialize_enabled_patterns"
    )]
    enabled_patterns: IndexMap<PatternKey, bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            custom_phrases: default_custom_phrases(),
            enabled_patterns: default_enabled_patterns(),
        }
    }
}

impl Config {
    /// Parse a persisted settings record, filling in defaults.
    ///
    /// ```rust
    /// # use markdown_strip::{Config, PatternKey};
    /// let config = Config::from_json(r#"{"enabledPatterns": {"latex": false}}"#)?;
    /// assert!(!config.is_enabled(PatternKey::Latex));
    /// assert!(config.is_enabled(PatternKey::Task));
    /// # Ok::<(), markdown_strip::ConfigError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str(json)?;
        tracing::debug!(?config, "loaded settings");
        Ok(config)
    }

    /// Serialize to the persisted settings record.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Whether the pattern is offered as an operation.
    pub fn is_enabled(&self, key: PatternKey) -> bool {
        self.enabled_patterns
            .get(&key)
            .copied()
            .unwrap_or_else(|| key.enabled_by_default())
    }

    /// Turn a pattern on or off.
    pub fn set_pattern_enabled(&mut self, key: PatternKey, enabled: bool) -> &mut Self {
        self.enabled_patterns.insert(key, enabled);
        self
    }

    /// Enabled patterns in display order.
    pub fn enabled_patterns(&self) -> impl Iterator<Item = PatternKey> + '_ {
        PatternKey::ALL
            .into_iter()
            .filter(move |key| self.is_enabled(*key))
    }

    /// The raw text stored in each custom phrase slot.
    pub fn custom_phrases(&self) -> &[String] {
        &self.custom_phrases
    }

    /// The trimmed phrase in slot `index`, or `None` when the slot is blank
    /// or doesn't exist.
    pub fn custom_phrase(&self, index: usize) -> Option<&str> {
        self.custom_phrases
            .get(index)
            .map(|phrase| phrase.trim())
            .filter(|phrase| !phrase.is_empty())
    }

    /// Store `phrase` in the 0-based slot `index`.
    pub fn set_custom_phrase(
        &mut self,
        index: usize,
        phrase: impl Into<String>,
    ) -> Result<&mut Self, ConfigError> {
        let slot = self
            .custom_phrases
            .get_mut(index)
            .ok_or(ConfigError::PhraseSlot { index })?;
        *slot = phrase.into();
        Ok(self)
    }
}

fn default_custom_phrases() -> Vec<String> {
    vec![String::new(); CUSTOM_PHRASE_SLOTS]
}

fn default_enabled_patterns() -> IndexMap<PatternKey, bool> {
    PatternKey::ALL
        .into_iter()
        .map(|key| (key, key.enabled_by_default()))
        .collect()
}

fn deserialize_custom_phrases<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut phrases = Vec::<Option<String>>::deserialize(deserializer)?
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect::<Vec<_>>();
    if phrases.len() > CUSTOM_PHRASE_SLOTS {
        tracing::warn!(
            dropped = ?&phrases[CUSTOM_PHRASE_SLOTS..],
            "too many custom phrases, keeping the first {CUSTOM_PHRASE_SLOTS}"
        );
    }
    phrases.resize(CUSTOM_PHRASE_SLOTS, String::new());
    Ok(phrases)
}

/// Overlay the stored switches on the defaults. Keys this version doesn't
/// know are dropped rather than failing the whole record.
fn deserialize_enabled_patterns<'de, D>(
    deserializer: D,
) -> Result<IndexMap<PatternKey, bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let stored = IndexMap::<String, bool>::deserialize(deserializer)?;
    let mut enabled = default_enabled_patterns();
    for (key, value) in stored {
        match key.parse::<PatternKey>() {
            Ok(key) => {
                enabled.insert(key, value);
            }
            Err(e) => tracing::warn!(%e, "ignoring stored setting"),
        }
    }
    Ok(enabled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_everything() {
        let config = Config::default();
        assert_eq!(config.enabled_patterns().collect::<Vec<_>>(), PatternKey::ALL);
        assert_eq!(config.custom_phrases(), ["", "", ""]);
    }

    #[test]
    fn empty_record_loads_defaults() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn missing_pattern_keys_take_defaults() {
        let config =
            Config::from_json(r#"{"enabledPatterns": {"asterisk": false, "quote": false}}"#)
                .unwrap();
        assert!(!config.is_enabled(PatternKey::Asterisk));
        assert!(!config.is_enabled(PatternKey::Quote));
        assert!(config.is_enabled(PatternKey::Task));
        assert_eq!(config.enabled_patterns().count(), 8);
    }

    #[test]
    fn unknown_pattern_keys_are_ignored() {
        let config =
            Config::from_json(r#"{"enabledPatterns": {"strikethrough": false, "latex": false}}"#)
                .unwrap();
        assert!(!config.is_enabled(PatternKey::Latex));
        assert_eq!(config.enabled_patterns().count(), 9);
    }

    #[test]
    fn custom_phrases_are_padded_and_truncated() {
        let config = Config::from_json(r#"{"customPhrases": ["TODO"]}"#).unwrap();
        assert_eq!(config.custom_phrases(), ["TODO", "", ""]);

        let config =
            Config::from_json(r#"{"customPhrases": ["a", null, "c", "d", "e"]}"#).unwrap();
        assert_eq!(config.custom_phrases(), ["a", "", "c"]);
    }

    #[test]
    fn custom_phrase_is_trimmed_and_blank_is_none() {
        let mut config = Config::default();
        config.set_custom_phrase(0, "  (draft) ").unwrap();
        config.set_custom_phrase(1, "   ").unwrap();
        assert_eq!(config.custom_phrase(0), Some("(draft)"));
        assert_eq!(config.custom_phrase(1), None);
        assert_eq!(config.custom_phrase(2), None);
        assert_eq!(config.custom_phrase(7), None);
    }

    #[test]
    fn out_of_range_phrase_slot_is_an_error() {
        let err = Config::default().set_custom_phrase(3, "x").unwrap_err();
        assert!(matches!(err, ConfigError::PhraseSlot { index: 3 }));
        assert_eq!(
            err.to_string(),
            "custom phrase slot 3 is out of range, there are 3 slots"
        );
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            Config::from_json(r#"{"customPhrases": "nope"}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn round_trips_through_json() {
        let mut config = Config::default();
        config
            .set_pattern_enabled(PatternKey::Highlight, false)
            .set_custom_phrase(2, "[[")
            .unwrap();
        let json = config.to_json().unwrap();
        assert!(json.contains(r#""numbered-list": true"#));
        assert!(json.contains(r#""highlight": false"#));
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }
}
