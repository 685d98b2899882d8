//! Flat display record for one looked-up patent.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::{Map, Value};

use super::Labels;

/// Shown when the model returned no reasoning.
pub const NO_REASONING: &str = "No explanation returned.";

/// Everything a surface needs to render one patent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatentReport {
    pub patent_number: String,
    pub title: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub filing_date: Option<String>,
    pub publication_date: Option<String>,
    pub application_number: Option<String>,
    pub assignees: Vec<String>,
    pub inventors: Vec<String>,
    pub cpc_codes: Vec<String>,
    pub ipc_codes: Vec<String>,
    pub uspc_codes: Vec<String>,
    pub classification: ClassificationView,
}

impl PatentReport {
    /// Reasoning text, or a placeholder when there is none.
    ///
    /// Reasoning given as a list of steps renders one step per line.
    #[must_use]
    pub fn reasoning_text(&self) -> Cow<'_, str> {
        match &self.classification {
            ClassificationView::Ready {
                reasoning: Some(reasoning),
                ..
            } => match reasoning {
                Labels::One(text) => Cow::Borrowed(text),
                Labels::Many(steps) => Cow::Owned(steps.join("\n")),
                Labels::Other(value) => Cow::Owned(value.to_string()),
            },
            _ => Cow::Borrowed(NO_REASONING),
        }
    }
}

/// Classification fields verbatim, or why there are none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ClassificationView {
    Ready {
        technology_areas: Option<Labels>,
        ipc_predicted: Option<Labels>,
        cpc_predicted: Option<Labels>,
        uspc_predicted: Option<Labels>,
        reasoning: Option<Labels>,
        /// Keys the model returned beyond the five requested.
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    Failed {
        reason: String,
    },
}

impl ClassificationView {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// The whole classification object, for display.
    ///
    /// The five requested fields render as `null` when absent; any extra
    /// keys the model returned are included as well. A failed
    /// classification has none.
    #[must_use]
    pub fn fields_json(&self) -> Option<Value> {
        match self {
            Self::Ready {
                technology_areas,
                ipc_predicted,
                cpc_predicted,
                uspc_predicted,
                reasoning,
                extra,
            } => {
                let mut fields = Map::new();
                fields.insert("technology_areas".into(), labels_json(technology_areas.as_ref()));
                fields.insert("ipc_predicted".into(), labels_json(ipc_predicted.as_ref()));
                fields.insert("cpc_predicted".into(), labels_json(cpc_predicted.as_ref()));
                fields.insert("uspc_predicted".into(), labels_json(uspc_predicted.as_ref()));
                fields.insert("reasoning".into(), labels_json(reasoning.as_ref()));
                for (key, value) in extra {
                    fields.entry(key.clone()).or_insert_with(|| value.clone());
                }
                Some(Value::Object(fields))
            }
            Self::Failed { .. } => None,
        }
    }
}

fn labels_json(labels: Option<&Labels>) -> Value {
    serde_json::to_value(labels).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(reasoning: Option<&str>) -> ClassificationView {
        ClassificationView::Ready {
            technology_areas: Some(Labels::Many(vec!["AI".into(), "Biotech".into()])),
            ipc_predicted: Some(Labels::One("G06N".into())),
            cpc_predicted: None,
            uspc_predicted: None,
            reasoning: reasoning.map(|r| Labels::One(r.to_string())),
            extra: Map::new(),
        }
    }

    fn report(classification: ClassificationView) -> PatentReport {
        PatentReport {
            patent_number: "1".into(),
            title: None,
            abstract_text: None,
            filing_date: None,
            publication_date: None,
            application_number: None,
            assignees: vec![],
            inventors: vec![],
            cpc_codes: vec![],
            ipc_codes: vec![],
            uspc_codes: vec![],
            classification,
        }
    }

    #[test]
    fn reasoning_falls_back_to_placeholder() {
        assert_eq!(report(ready(Some("because"))).reasoning_text(), "because");
        assert_eq!(report(ready(None)).reasoning_text(), NO_REASONING);
        let failed = ClassificationView::Failed {
            reason: "x".into(),
        };
        assert_eq!(report(failed).reasoning_text(), NO_REASONING);
    }

    #[test]
    fn fields_json_keeps_shapes() {
        let json = ready(Some("r")).fields_json().unwrap();

        assert_eq!(json["technology_areas"], serde_json::json!(["AI", "Biotech"]));
        assert_eq!(json["ipc_predicted"], "G06N");
        assert!(json["cpc_predicted"].is_null());
        assert_eq!(json.as_object().unwrap().len(), 5);
    }

    #[test]
    fn reasoning_steps_render_one_per_line() {
        let view = ClassificationView::Ready {
            technology_areas: None,
            ipc_predicted: None,
            cpc_predicted: None,
            uspc_predicted: None,
            reasoning: Some(Labels::Many(vec!["a".into(), "b".into()])),
            extra: Map::new(),
        };
        assert_eq!(report(view).reasoning_text(), "a\nb");
    }

    #[test]
    fn fields_json_includes_extra_keys() {
        let mut extra = Map::new();
        extra.insert("confidence".into(), serde_json::json!(0.9));
        let view = ClassificationView::Ready {
            technology_areas: None,
            ipc_predicted: None,
            cpc_predicted: None,
            uspc_predicted: None,
            reasoning: None,
            extra,
        };

        let json = view.fields_json().unwrap();
        assert_eq!(json["confidence"], 0.9);
        assert_eq!(json.as_object().unwrap().len(), 6);

        let serialized = serde_json::to_value(&view).unwrap();
        assert_eq!(serialized["status"], "ready");
        assert_eq!(serialized["confidence"], 0.9);
    }

    #[test]
    fn failed_has_no_fields() {
        let failed = ClassificationView::Failed {
            reason: "x".into(),
        };
        assert!(!failed.is_ready());
        assert!(failed.fields_json().is_none());
    }

    #[test]
    fn ready_serializes_with_status() {
        let json = serde_json::to_value(ready(None)).unwrap();
        assert_eq!(json["status"], "ready");
        assert_eq!(json["ipc_predicted"], "G06N");
    }
}
