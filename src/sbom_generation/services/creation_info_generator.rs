use crate::sbom_generation::domain::CreationInfo;
use chrono::Utc;

/// Name this tool reports in the `creators` list
pub const TOOL_NAME: &str = "vcpkg-spdx";

/// CreationInfoGenerator service for stamping a new document
pub struct CreationInfoGenerator;

impl CreationInfoGenerator {
    /// Generates creation info for the current instant
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool generating the document
    /// * `tool_version` - Version of the tool
    /// * `extra_creators` - Additional `creators` entries (e.g. "Organization: ACME")
    ///
    /// # Returns
    /// CreationInfo whose creator list starts with `Tool: <name>-<version>`
    pub fn generate(tool_name: &str, tool_version: &str, extra_creators: &[String]) -> CreationInfo {
        let creators = std::iter::once(format!("Tool: {}-{}", tool_name, tool_version))
            .chain(extra_creators.iter().cloned())
            .collect();

        CreationInfo::new(Utc::now(), creators)
    }

    /// Generates creation info naming this tool and its compile-time version
    pub fn generate_default(extra_creators: &[String]) -> CreationInfo {
        Self::generate(TOOL_NAME, env!("CARGO_PKG_VERSION"), extra_creators)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate() {
        let info = CreationInfoGenerator::generate("test-tool", "1.0.0", &[]);

        assert_eq!(info.creators(), ["Tool: test-tool-1.0.0".to_string()]);
        assert_eq!(info.license_list_version(), "3.9");
    }

    #[test]
    fn test_generate_appends_extra_creators() {
        let extra = vec![
            "Organization: ACME".to_string(),
            "Person: Jane Doe".to_string(),
        ];
        let info = CreationInfoGenerator::generate("test-tool", "1.0.0", &extra);

        assert_eq!(
            info.creators(),
            [
                "Tool: test-tool-1.0.0".to_string(),
                "Organization: ACME".to_string(),
                "Person: Jane Doe".to_string(),
            ]
        );
    }

    #[test]
    fn test_generate_default() {
        let info = CreationInfoGenerator::generate_default(&[]);
        assert_eq!(
            info.creators()[0],
            format!("Tool: vcpkg-spdx-{}", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn test_created_timestamp_format() {
        let info = CreationInfoGenerator::generate("test-tool", "1.0.0", &[]);
        let created = info.created();

        // YYYY-MM-DDTHH:MM:SS.mmmZ
        assert_eq!(created.len(), 24);
        assert!(created.contains('T'));
        assert!(created.ends_with('Z'));
    }

    #[test]
    fn test_namespace_timestamp_has_microseconds() {
        let info = CreationInfoGenerator::generate("test-tool", "1.0.0", &[]);
        let stamp = info.namespace_timestamp();

        let (seconds, micros) = stamp.split_once('.').unwrap();
        assert!(seconds.parse::<i64>().unwrap() > 0);
        assert_eq!(micros.len(), 6);
    }
}
