//! Content-filter metadata attached by the enterprise-hosted variant.
//!
//! Every field is optional and unknown categories are carried through in
//! [`ContentFilterResults::extra`], so a schema change on the provider side
//! never breaks decoding of the surrounding error.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Treats a JSON `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Result for a category graded by severity (hate, self-harm, sexual, violence).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityResult {
    #[serde(deserialize_with = "null_as_default")]
    pub filtered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

/// Result for a category that is only detected, not graded (jailbreak, profanity).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionResult {
    #[serde(deserialize_with = "null_as_default")]
    pub filtered: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub detected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentFilterResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hate: Option<SeverityResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_harm: Option<SeverityResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sexual: Option<SeverityResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violence: Option<SeverityResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jailbreak: Option<DetectionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profanity: Option<DetectionResult>,
    /// Categories this crate does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentFilterResults {
    /// True if any known category reports the content as filtered.
    pub fn any_filtered(&self) -> bool {
        [&self.hate, &self.self_harm, &self.sexual, &self.violence]
            .into_iter()
            .flatten()
            .any(|r| r.filtered)
            || [&self.jailbreak, &self.profanity]
                .into_iter()
                .flatten()
                .any(|r| r.filtered)
    }
}

/// Nested detail object (`innererror`) sent only by the enterprise-hosted variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InnerError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(
        rename = "content_filter_result",
        default,
        deserialize_with = "null_as_default"
    )]
    pub content_filter_results: ContentFilterResults,
}
