use crate::ports::outbound::PortManifestReader;
use crate::sbom_generation::domain::{ManifestFields, PackageId};
use crate::sbom_generation::policies::VersionPriority;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// File name of a port manifest inside its port directory
pub const MANIFEST_FILE_NAME: &str = "vcpkg.json";

/// The registries searched for port manifests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryPaths {
    /// Overlay registry searched before the official one
    pub additional: Option<PathBuf>,
    /// Official registry (the `ports` directory of a vcpkg checkout)
    pub official: PathBuf,
}

impl RegistryPaths {
    pub fn new(official: PathBuf, additional: Option<PathBuf>) -> Self {
        Self {
            additional,
            official,
        }
    }
}

/// A manifest found in one of the registries
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedManifest {
    pub path: PathBuf,
    pub fields: ManifestFields,
}

/// ManifestLocator service for looking up a port's manifest
///
/// Candidates are tried in order and the first existing manifest wins
/// outright; fields are never merged across registries.
pub struct ManifestLocator;

impl ManifestLocator {
    /// Candidate manifest paths for a port, in precedence order
    ///
    /// The additional registry (when configured) comes before the official
    /// one so an overlay port shadows the upstream port of the same name.
    pub fn candidate_paths(registries: &RegistryPaths, id: &PackageId) -> Vec<PathBuf> {
        registries
            .additional
            .iter()
            .chain(std::iter::once(&registries.official))
            .map(|registry| Self::manifest_path(registry, id))
            .collect()
    }

    /// Looks up a port's manifest and extracts its fields
    ///
    /// # Returns
    /// `None` when no candidate exists, which is not an error
    ///
    /// # Errors
    /// Returns an error if an existing candidate cannot be read or parsed
    pub fn locate<R: PortManifestReader>(
        reader: &R,
        registries: &RegistryPaths,
        id: &PackageId,
    ) -> Result<Option<LocatedManifest>> {
        for path in Self::candidate_paths(registries, id) {
            if let Some(manifest) = reader.read_port_manifest(&path)? {
                return Ok(Some(LocatedManifest {
                    fields: VersionPriority::create_manifest_fields(&manifest),
                    path,
                }));
            }
        }
        Ok(None)
    }

    fn manifest_path(registry: &Path, id: &PackageId) -> PathBuf {
        registry.join(id.as_str()).join(MANIFEST_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::PortManifest;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory registry keyed by manifest path; records every lookup
    struct InMemoryManifests {
        manifests: HashMap<PathBuf, PortManifest>,
        lookups: RefCell<Vec<PathBuf>>,
    }

    impl InMemoryManifests {
        fn new() -> Self {
            Self {
                manifests: HashMap::new(),
                lookups: RefCell::new(Vec::new()),
            }
        }

        fn with(mut self, path: &str, json: &str) -> Self {
            self.manifests
                .insert(PathBuf::from(path), serde_json::from_str(json).unwrap());
            self
        }
    }

    impl PortManifestReader for InMemoryManifests {
        fn read_port_manifest(&self, manifest_path: &Path) -> Result<Option<PortManifest>> {
            self.lookups.borrow_mut().push(manifest_path.to_path_buf());
            Ok(self.manifests.get(manifest_path).cloned())
        }
    }

    fn id(name: &str) -> PackageId {
        PackageId::new(name.to_string()).unwrap()
    }

    #[test]
    fn test_candidate_paths_official_only() {
        let registries = RegistryPaths::new(PathBuf::from("ports"), None);
        let paths = ManifestLocator::candidate_paths(&registries, &id("zlib"));
        assert_eq!(paths, vec![PathBuf::from("ports/zlib/vcpkg.json")]);
    }

    #[test]
    fn test_candidate_paths_additional_first() {
        let registries =
            RegistryPaths::new(PathBuf::from("ports"), Some(PathBuf::from("overlay")));
        let paths = ManifestLocator::candidate_paths(&registries, &id("zlib"));
        assert_eq!(
            paths,
            vec![
                PathBuf::from("overlay/zlib/vcpkg.json"),
                PathBuf::from("ports/zlib/vcpkg.json"),
            ]
        );
    }

    #[test]
    fn test_locate_additional_registry_takes_precedence() {
        let reader = InMemoryManifests::new()
            .with("overlay/x/vcpkg.json", r#"{ "license": "Apache-2.0" }"#)
            .with("ports/x/vcpkg.json", r#"{ "license": "MIT", "version": "9.9" }"#);
        let registries =
            RegistryPaths::new(PathBuf::from("ports"), Some(PathBuf::from("overlay")));

        let located = ManifestLocator::locate(&reader, &registries, &id("x"))
            .unwrap()
            .unwrap();

        assert_eq!(located.path, PathBuf::from("overlay/x/vcpkg.json"));
        assert_eq!(located.fields.license(), Some("Apache-2.0"));
        // no merging with the official manifest
        assert_eq!(located.fields.version(), None);
        // short-circuits after the first hit
        assert_eq!(reader.lookups.borrow().len(), 1);
    }

    #[test]
    fn test_locate_falls_back_to_official_registry() {
        let reader =
            InMemoryManifests::new().with("ports/x/vcpkg.json", r#"{ "license": "MIT" }"#);
        let registries =
            RegistryPaths::new(PathBuf::from("ports"), Some(PathBuf::from("overlay")));

        let located = ManifestLocator::locate(&reader, &registries, &id("x"))
            .unwrap()
            .unwrap();

        assert_eq!(located.path, PathBuf::from("ports/x/vcpkg.json"));
        assert_eq!(located.fields.license(), Some("MIT"));
    }

    #[test]
    fn test_locate_missing_everywhere() {
        let reader = InMemoryManifests::new();
        let registries =
            RegistryPaths::new(PathBuf::from("ports"), Some(PathBuf::from("overlay")));

        let located = ManifestLocator::locate(&reader, &registries, &id("ghost")).unwrap();

        assert!(located.is_none());
        assert_eq!(reader.lookups.borrow().len(), 2);
    }
}
