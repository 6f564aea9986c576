use super::spdx_schema::Document;
use crate::ports::outbound::SpdxFormatter;
use crate::sbom_generation::domain::SpdxDocument;
use crate::shared::Result;

/// SpdxJsonFormatter adapter for the SPDX 2.2 JSON encoding
pub struct SpdxJsonFormatter;

impl SpdxJsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpdxJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SpdxFormatter for SpdxJsonFormatter {
    fn format(&self, document: &SpdxDocument) -> Result<String> {
        let schema = Document::from_document(document);
        let mut json = serde_json::to_string_pretty(&schema)
            .map_err(|e| anyhow::anyhow!("Failed to serialize SPDX JSON: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
