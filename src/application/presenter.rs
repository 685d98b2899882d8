//! Flattens metadata and classification into a display record.

use crate::domain::{ClassificationResult, ClassificationView, PatentMetadata, PatentReport};
use crate::error::ClassificationFailure;

/// Build the display record for one patent.
///
/// Pure shape transform: nothing is inferred beyond joining inventor names
/// and dropping entries without any text.
#[must_use]
pub fn present(
    metadata: &PatentMetadata,
    classification: std::result::Result<ClassificationResult, ClassificationFailure>,
) -> PatentReport {
    let classification = match classification {
        Ok(result) => ClassificationView::Ready {
            technology_areas: result.technology_areas,
            ipc_predicted: result.ipc_predicted,
            cpc_predicted: result.cpc_predicted,
            uspc_predicted: result.uspc_predicted,
            reasoning: result.reasoning,
            extra: result.extra,
        },
        Err(failure) => ClassificationView::Failed {
            reason: failure.to_string(),
        },
    };

    PatentReport {
        patent_number: metadata.patent_number.clone(),
        title: metadata.title.clone(),
        abstract_text: metadata.abstract_text.clone(),
        filing_date: metadata.filing_date.clone(),
        publication_date: metadata.publication_date.clone(),
        application_number: metadata.application_number.clone(),
        assignees: metadata
            .assignees
            .iter()
            .filter_map(|a| a.assignee_organization.clone())
            .collect(),
        inventors: metadata.inventors.iter().filter_map(|i| i.full_name()).collect(),
        cpc_codes: metadata.cpc_codes(),
        ipc_codes: metadata.ipc_codes(),
        uspc_codes: metadata.uspc_codes(),
        classification,
    }
}
