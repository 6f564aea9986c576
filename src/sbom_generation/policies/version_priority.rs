use crate::sbom_generation::domain::{ManifestFields, PortManifest};

/// VersionPriority policy for reading a version out of a vcpkg manifest
///
/// vcpkg manifests declare their version under one of several scheme-specific
/// keys. The first key that is present with a non-null value wins:
/// 1. `version`
/// 2. `version-semver`
/// 3. `version-date`
/// 4. `version-string`
pub struct VersionPriority;

impl VersionPriority {
    /// Selects the version according to the key precedence
    pub fn select_version(manifest: &PortManifest) -> Option<String> {
        manifest
            .version
            .clone()
            .or_else(|| manifest.version_semver.clone())
            .or_else(|| manifest.version_date.clone())
            .or_else(|| manifest.version_string.clone())
    }

    /// Creates ManifestFields from a parsed manifest
    ///
    /// License and homepage are taken verbatim, the version follows the key
    /// precedence and a list-valued description is joined into one line.
    pub fn create_manifest_fields(manifest: &PortManifest) -> ManifestFields {
        ManifestFields::new(
            manifest.license.clone(),
            manifest.homepage.clone(),
            Self::select_version(manifest),
            manifest.description_text(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(json: &str) -> PortManifest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_select_version_prefers_version_field() {
        let m = manifest(r#"{ "version": "1.0", "version-semver": "2.0.0", "version-date": "2024-01-01" }"#);
        assert_eq!(VersionPriority::select_version(&m), Some("1.0".to_string()));
    }

    #[test]
    fn test_select_version_semver_before_date() {
        let m = manifest(r#"{ "version-date": "2024-01-01", "version-semver": "2.0.0" }"#);
        assert_eq!(VersionPriority::select_version(&m), Some("2.0.0".to_string()));
    }

    #[test]
    fn test_select_version_date_before_string() {
        let m = manifest(r#"{ "version-string": "vista", "version-date": "2024-01-01" }"#);
        assert_eq!(
            VersionPriority::select_version(&m),
            Some("2024-01-01".to_string())
        );
    }

    #[test]
    fn test_select_version_skips_null_values() {
        let m = manifest(r#"{ "version": null, "version-string": "vista" }"#);
        assert_eq!(VersionPriority::select_version(&m), Some("vista".to_string()));
    }

    #[test]
    fn test_select_version_none() {
        let m = manifest(r#"{ "name": "header-only" }"#);
        assert_eq!(VersionPriority::select_version(&m), None);
    }

    #[test]
    fn test_create_manifest_fields() {
        let m = manifest(
            r#"{
                "name": "bar",
                "license": "BSD-3-Clause",
                "homepage": "https://bar.example",
                "version-semver": "2.1.0",
                "description": ["Line one.", "Line two."]
            }"#,
        );

        let fields = VersionPriority::create_manifest_fields(&m);
        assert_eq!(fields.license(), Some("BSD-3-Clause"));
        assert_eq!(fields.homepage(), Some("https://bar.example"));
        assert_eq!(fields.version(), Some("2.1.0"));
        assert_eq!(fields.description(), Some("Line one. Line two."));
    }
}
