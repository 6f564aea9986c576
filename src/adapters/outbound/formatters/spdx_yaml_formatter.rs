use super::spdx_schema::Document;
use crate::ports::outbound::SpdxFormatter;
use crate::sbom_generation::domain::SpdxDocument;
use crate::shared::Result;

/// SpdxYamlFormatter adapter for the SPDX 2.2 YAML encoding
///
/// Keys are emitted in document order, block style.
pub struct SpdxYamlFormatter;

impl SpdxYamlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpdxYamlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SpdxFormatter for SpdxYamlFormatter {
    fn format(&self, document: &SpdxDocument) -> Result<String> {
        let schema = Document::from_document(document);
        serde_yaml_ng::to_string(&schema)
            .map_err(|e| anyhow::anyhow!("Failed to serialize SPDX YAML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::super::spdx_schema::fixtures::sample_document;
    use super::*;

    #[test]
    fn test_format_key_order() {
        let yaml = SpdxYamlFormatter::new().format(&sample_document()).unwrap();

        let top_level: Vec<&str> = yaml
            .lines()
            .filter(|line| !line.starts_with(' ') && !line.starts_with('-'))
            .filter_map(|line| line.split(':').next())
            .collect();
        assert_eq!(
            top_level,
            vec![
                "SPDXID",
                "spdxVersion",
                "creationInfo",
                "name",
                "dataLicense",
                "documentNamespace",
                "documentDescribes",
                "packages",
                "relationships",
            ]
        );
    }

    #[test]
    fn test_format_parses_back_with_expected_values() {
        let yaml = SpdxYamlFormatter::new().format(&sample_document()).unwrap();
        let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(&yaml).unwrap();

        assert_eq!(value["SPDXID"].as_str(), Some("SPDXRef-DOCUMENT"));
        assert_eq!(value["spdxVersion"].as_str(), Some("SPDX-2.2"));
        assert_eq!(value["dataLicense"].as_str(), Some("CC0-1.0"));
        assert_eq!(
            value["creationInfo"]["created"].as_str(),
            Some("2024-03-01T12:30:45.123Z")
        );
        assert_eq!(
            value["creationInfo"]["licenseListVersion"].as_str(),
            Some("3.9")
        );
        assert_eq!(
            value["creationInfo"]["creators"][1].as_str(),
            Some("Organization: ACME")
        );
        assert_eq!(
            value["documentDescribes"][0].as_str(),
            Some("SPDXRef-Package-foo")
        );

        let packages = value["packages"].as_sequence().unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0]["description"].as_str(), Some("NOASSERTION"));
        assert_eq!(packages[1]["SPDXID"].as_str(), Some("SPDXRef-Package-bar"));
        assert_eq!(packages[1]["downloadLocation"].as_str(), Some("NOASSERTION"));
        assert_eq!(packages[1]["licenseConcluded"].as_str(), Some("NOASSERTION"));
        assert_eq!(packages[1]["licenseDeclared"].as_str(), Some("BSD-3-Clause"));
        assert_eq!(packages[1]["versionInfo"].as_str(), Some("2.3.4"));

        let relationship = &value["relationships"][0];
        assert_eq!(relationship["spdxElementId"].as_str(), Some("SPDXRef-Package-foo"));
        assert_eq!(relationship["relationshipType"].as_str(), Some("DEPENDS_ON"));
        assert_eq!(
            relationship["relatedSpdxElement"].as_str(),
            Some("SPDXRef-Package-bar")
        );
    }

    #[test]
    fn test_format_version_string_stays_a_string() {
        let yaml = SpdxYamlFormatter::new().format(&sample_document()).unwrap();
        let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(&yaml).unwrap();

        // "1.0" must survive as a string rather than a float
        assert_eq!(value["packages"][0]["versionInfo"].as_str(), Some("1.0"));
    }
}
