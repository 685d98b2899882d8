//! Canned search bodies and model replies.

use serde_json::json;

pub const WIDGET_NUMBER: &str = "11234567";
pub const WIDGET_TITLE: &str = "Widget Fastener";
pub const WIDGET_ABSTRACT: &str = "A fastening widget...";

/// A five-field classification reply, exactly as a well-behaved model
/// would return it.
pub const CLASSIFICATION_REPLY: &str = r#"{"technology_areas":["Mechanical"],"ipc_predicted":"F16B","cpc_predicted":"F16B35/00","uspc_predicted":"411","reasoning":"..."}"#;

/// A reply with commentary in front of the JSON.
pub const CHATTY_REPLY: &str = r#"Sure! {"technology_areas": ["Mechanical"]}"#;

/// A search response body holding one patent.
pub fn search_body(number: &str, title: &str, abstract_text: &str) -> String {
    json!({
        "patents": [{
            "patent_number": number,
            "patent_title": title,
            "abstract": abstract_text,
            "patent_date": "2022-02-22",
            "application_number": "16/123456",
            "filing_date": "2019-05-01",
            "assignees": [{"assignee_organization": "Acme Corp"}],
            "inventors": [
                {"inventor_first_name": "Ada", "inventor_last_name": "Lovelace"},
                {"inventor_first_name": null, "inventor_last_name": "Babbage"}
            ],
            "cpcs": [{"cpc_subgroup_id": "F16B35/00"}, {"cpc_subgroup_id": "F16B35/00"}],
            "IPCs": [{"ipc_subgroup_id": "F16B"}],
            "uspcs": [{"uspc_mainclass_id": "411"}]
        }],
        "count": 1,
        "total_patent_count": 1
    })
    .to_string()
}

/// The widget patent used across tests.
pub fn widget_body() -> String {
    search_body(WIDGET_NUMBER, WIDGET_TITLE, WIDGET_ABSTRACT)
}

/// A search response with no matches.
pub fn empty_body() -> String {
    json!({"patents": null, "count": 0, "total_patent_count": 0}).to_string()
}
