//! LLM-predicted classification of a patent.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ClassificationFailure, Result};

/// The five fields the classification prompt asks the model for.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "technology_areas",
    "ipc_predicted",
    "cpc_predicted",
    "uspc_predicted",
    "reasoning",
];

/// A label or code field as the model chose to write it.
///
/// Models answer with a single string (`"F16B"`), a list (`["F16B", "F16F"]`)
/// or occasionally something richer; all three are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Labels {
    One(String),
    Many(Vec<String>),
    Other(Value),
}

impl fmt::Display for Labels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(s) => write!(f, "{s}"),
            Self::Many(items) => write!(f, "{}", items.join(", ")),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Structured classification parsed from the model's JSON reply.
///
/// Keys beyond the five requested ones are preserved in `extra` so the
/// cached payload round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technology_areas: Option<Labels>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipc_predicted: Option<Labels>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpc_predicted: Option<Labels>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uspc_predicted: Option<Labels>,
    /// Usually a paragraph, but some models answer with a list of steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<Labels>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClassificationResult {
    /// Parse a model reply strictly as a JSON object.
    ///
    /// No markdown fences are stripped and no embedded object is searched
    /// for: any leading commentary makes the reply unparseable.
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationFailure::Parse`] if the text is not JSON, and
    /// [`ClassificationFailure::Shape`] if it is JSON but not an object.
    pub fn parse(reply: &str) -> std::result::Result<Self, ClassificationFailure> {
        let value: Value =
            serde_json::from_str(reply).map_err(|e| ClassificationFailure::Parse(e.to_string()))?;
        Self::from_value(value)
    }

    fn from_value(value: Value) -> std::result::Result<Self, ClassificationFailure> {
        if !value.is_object() {
            return Err(ClassificationFailure::Shape(json_kind(&value)));
        }
        serde_json::from_value(value).map_err(|e| ClassificationFailure::Shape(e.to_string()))
    }

    /// Parse a cached payload.
    ///
    /// # Errors
    ///
    /// Returns the same failures as [`ClassificationResult::parse`] when the
    /// stored text is not a classification object.
    pub fn from_cached(json: &str) -> std::result::Result<Self, ClassificationFailure> {
        Self::parse(json)
    }

    /// Serialize for caching.
    ///
    /// # Errors
    ///
    /// Returns a JSON error if serialization fails.
    pub fn to_cached(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Names of requested fields the model left out.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let present = [
            self.technology_areas.is_some(),
            self.ipc_predicted.is_some(),
            self.cpc_predicted.is_some(),
            self.uspc_predicted.is_some(),
            self.reasoning.is_some(),
        ];
        REQUIRED_FIELDS
            .into_iter()
            .zip(present)
            .filter_map(|(name, ok)| (!ok).then_some(name))
            .collect()
    }
}

fn json_kind(value: &Value) -> String {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = r#"{"technology_areas":["Mechanical"],"ipc_predicted":"F16B","cpc_predicted":"F16B35/00","uspc_predicted":"411","reasoning":"..."}"#;

    #[test]
    fn parses_five_field_reply() {
        let result = ClassificationResult::parse(REPLY).unwrap();

        assert_eq!(
            result.technology_areas,
            Some(Labels::Many(vec!["Mechanical".into()]))
        );
        assert_eq!(result.ipc_predicted, Some(Labels::One("F16B".into())));
        assert_eq!(result.cpc_predicted, Some(Labels::One("F16B35/00".into())));
        assert_eq!(result.uspc_predicted, Some(Labels::One("411".into())));
        assert_eq!(result.reasoning, Some(Labels::One("...".into())));
        assert!(result.extra.is_empty());
        assert!(result.missing_fields().is_empty());
    }

    #[test]
    fn rejects_commentary_before_json() {
        let reply = r#"Sure! {"technology_areas": ["AI"]}"#;
        assert!(matches!(
            ClassificationResult::parse(reply),
            Err(ClassificationFailure::Parse(_))
        ));
    }

    #[test]
    fn rejects_markdown_fenced_json() {
        let reply = "```json\n{\"technology_areas\": [\"AI\"]}\n```";
        assert!(matches!(
            ClassificationResult::parse(reply),
            Err(ClassificationFailure::Parse(_))
        ));
    }

    #[test]
    fn non_object_json_is_a_shape_failure() {
        assert_eq!(
            ClassificationResult::parse(r#""just a string""#),
            Err(ClassificationFailure::Shape("a string".into()))
        );
        assert_eq!(
            ClassificationResult::parse(r#"["AI", "G06N"]"#),
            Err(ClassificationFailure::Shape("an array".into()))
        );
        assert!(matches!(
            ClassificationResult::parse("42"),
            Err(ClassificationFailure::Shape(_))
        ));
    }

    #[test]
    fn accepts_reasoning_as_list_of_steps() {
        let reply = r#"{"technology_areas":["AI"],"ipc_predicted":"G06N","cpc_predicted":"G06N3/08","uspc_predicted":"706","reasoning":["a","b"]}"#;
        let result = ClassificationResult::parse(reply).unwrap();

        assert_eq!(
            result.reasoning,
            Some(Labels::Many(vec!["a".into(), "b".into()]))
        );
        assert!(result.missing_fields().is_empty());

        let restored = ClassificationResult::from_cached(&result.to_cached().unwrap()).unwrap();
        assert_eq!(restored, result);
    }

    #[test]
    fn null_fields_count_as_missing() {
        let result =
            ClassificationResult::parse(r#"{"technology_areas":null,"reasoning":"r"}"#).unwrap();
        assert_eq!(result.technology_areas, None);
        assert!(result.missing_fields().contains(&"technology_areas"));
    }

    #[test]
    fn keeps_rich_code_values_verbatim() {
        let reply = r#"{"cpc_predicted":[{"code":"G06N3/08","confidence":0.8}],"reasoning":"r"}"#;
        let result = ClassificationResult::parse(reply).unwrap();

        match result.cpc_predicted {
            Some(Labels::Other(value)) => assert_eq!(value[0]["code"], "G06N3/08"),
            other => panic!("expected Other labels, got {other:?}"),
        }
    }

    #[test]
    fn preserves_unknown_keys_through_cache() {
        let reply = r#"{"technology_areas":"AI","reasoning":"r","confidence":0.9}"#;
        let result = ClassificationResult::parse(reply).unwrap();
        assert_eq!(result.extra["confidence"], 0.9);

        let cached = result.to_cached().unwrap();
        let restored = ClassificationResult::from_cached(&cached).unwrap();
        assert_eq!(restored, result);
    }

    #[test]
    fn reports_missing_fields_in_prompt_order() {
        let result = ClassificationResult::parse(r#"{"technology_areas":["AI"]}"#).unwrap();
        assert_eq!(
            result.missing_fields(),
            vec!["ipc_predicted", "cpc_predicted", "uspc_predicted", "reasoning"]
        );
    }

    #[test]
    fn labels_display_joins_lists() {
        assert_eq!(Labels::One("411".into()).to_string(), "411");
        assert_eq!(
            Labels::Many(vec!["AI".into(), "Biotech".into()]).to_string(),
            "AI, Biotech"
        );
    }
}
