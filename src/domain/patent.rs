//! Patent bibliographic metadata as returned by the search API.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Body of a patent search response.
///
/// The whole body is what gets cached for a patent; callers only ever look
/// at the first record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub patents: Vec<PatentMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_patent_count: Option<u64>,
}

impl SearchResponse {
    /// Parse a raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the body is not a search response object.
    pub fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| Error::Parse(format!("search response: {e}")))
    }

    /// Take the first matching record, if any.
    #[must_use]
    pub fn into_first(self) -> Option<PatentMetadata> {
        self.patents.into_iter().next()
    }
}

/// Bibliographic metadata for one patent.
///
/// Every field except the patent number is optional: the search API omits
/// fields it has no data for, and a missing field should never make a
/// lookup fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatentMetadata {
    pub patent_number: String,
    #[serde(rename = "patent_title", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        rename = "abstract",
        alias = "patent_abstract",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub abstract_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filing_date: Option<String>,
    #[serde(rename = "patent_date", default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_number: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub assignees: Vec<Assignee>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub inventors: Vec<Inventor>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cpcs: Vec<CpcEntry>,
    #[serde(rename = "IPCs", alias = "ipcs", default, deserialize_with = "null_as_empty")]
    pub ipcs: Vec<IpcEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub uspcs: Vec<UspcEntry>,
}

impl PatentMetadata {
    /// Title or an empty string.
    #[must_use]
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Abstract or an empty string.
    #[must_use]
    pub fn abstract_or_empty(&self) -> &str {
        self.abstract_text.as_deref().unwrap_or_default()
    }

    /// Observed CPC subgroup ids, in API order, without duplicates.
    #[must_use]
    pub fn cpc_codes(&self) -> Vec<String> {
        dedup(self.cpcs.iter().filter_map(|c| c.cpc_subgroup_id.as_deref()))
    }

    /// Observed IPC subgroup ids, in API order, without duplicates.
    #[must_use]
    pub fn ipc_codes(&self) -> Vec<String> {
        dedup(self.ipcs.iter().filter_map(|c| c.ipc_subgroup_id.as_deref()))
    }

    /// Observed USPC main class ids, in API order, without duplicates.
    #[must_use]
    pub fn uspc_codes(&self) -> Vec<String> {
        dedup(self.uspcs.iter().filter_map(|c| c.uspc_mainclass_id.as_deref()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_organization: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventor_first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventor_last_name: Option<String>,
}

impl Inventor {
    /// "first last", skipping whichever part is missing.
    ///
    /// Returns `None` when neither part carries any text.
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        let name = [
            self.inventor_first_name.as_deref(),
            self.inventor_last_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        (!name.is_empty()).then_some(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpcEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpc_subgroup_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpcEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipc_subgroup_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UspcEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uspc_mainclass_id: Option<String>,
}

fn dedup<'a>(codes: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for code in codes {
        if !out.iter().any(|c| c == code) {
            out.push(code.to_string());
        }
    }
    out
}

/// The search API sends `null` instead of `[]` for empty lists.
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "patents": [{
            "patent_number": "11234567",
            "patent_title": "Widget Fastener",
            "abstract": "A fastening widget...",
            "patent_date": "2022-02-01",
            "application_number": "16/123,456",
            "filing_date": "2019-05-20",
            "assignees": [
                {"assignee_organization": "Acme Corp"},
                {"assignee_organization": null}
            ],
            "inventors": [
                {"inventor_first_name": "Jane", "inventor_last_name": "Doe"},
                {"inventor_first_name": null, "inventor_last_name": "Roe"}
            ],
            "cpcs": [
                {"cpc_subgroup_id": "F16B35/00"},
                {"cpc_subgroup_id": "F16B35/00"},
                {"cpc_subgroup_id": "F16B5/02"}
            ],
            "IPCs": [{"ipc_subgroup_id": "F16B"}],
            "uspcs": [{"uspc_mainclass_id": "411"}]
        }],
        "count": 1,
        "total_patent_count": 1
    }"#;

    #[test]
    fn parses_full_search_response() {
        let response = SearchResponse::parse(BODY).unwrap();
        assert_eq!(response.count, Some(1));

        let patent = response.into_first().unwrap();
        assert_eq!(patent.patent_number, "11234567");
        assert_eq!(patent.title.as_deref(), Some("Widget Fastener"));
        assert_eq!(patent.abstract_text.as_deref(), Some("A fastening widget..."));
        assert_eq!(patent.publication_date.as_deref(), Some("2022-02-01"));
        assert_eq!(patent.filing_date.as_deref(), Some("2019-05-20"));
        assert_eq!(patent.assignees.len(), 2);
        assert_eq!(patent.cpc_codes(), vec!["F16B35/00", "F16B5/02"]);
        assert_eq!(patent.ipc_codes(), vec!["F16B"]);
        assert_eq!(patent.uspc_codes(), vec!["411"]);
    }

    #[test]
    fn null_patents_means_no_records() {
        let response =
            SearchResponse::parse(r#"{"patents": null, "count": 0, "total_patent_count": 0}"#)
                .unwrap();
        assert!(response.patents.is_empty());
        assert!(response.into_first().is_none());
    }

    #[test]
    fn missing_optional_fields_do_not_fail() {
        let response =
            SearchResponse::parse(r#"{"patents": [{"patent_number": "1", "inventors": null}]}"#)
                .unwrap();
        let patent = response.into_first().unwrap();
        assert_eq!(patent.title_or_empty(), "");
        assert_eq!(patent.abstract_or_empty(), "");
        assert!(patent.inventors.is_empty());
        assert!(patent.cpc_codes().is_empty());
    }

    #[test]
    fn accepts_patent_abstract_alias() {
        let response = SearchResponse::parse(
            r#"{"patents": [{"patent_number": "1", "patent_abstract": "Alias abstract"}]}"#,
        )
        .unwrap();
        assert_eq!(
            response.into_first().unwrap().abstract_or_empty(),
            "Alias abstract"
        );
    }

    #[test]
    fn rejects_non_object_body() {
        assert!(matches!(
            SearchResponse::parse("<html>bad gateway</html>"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn inventor_full_name_skips_missing_parts() {
        let both = Inventor {
            inventor_first_name: Some("Jane".into()),
            inventor_last_name: Some("Doe".into()),
        };
        let last_only = Inventor {
            inventor_first_name: None,
            inventor_last_name: Some(" Roe ".into()),
        };
        let neither = Inventor {
            inventor_first_name: Some("  ".into()),
            inventor_last_name: None,
        };

        assert_eq!(both.full_name().as_deref(), Some("Jane Doe"));
        assert_eq!(last_only.full_name().as_deref(), Some("Roe"));
        assert_eq!(neither.full_name(), None);
    }
}
