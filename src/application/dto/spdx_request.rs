use crate::sbom_generation::services::RegistryPaths;
use crate::shared::error::SpdxError;
use crate::shared::Result;
use std::path::PathBuf;

pub const DEFAULT_PROJECT_MANIFEST: &str = "vcpkg.json";
pub const DEFAULT_PORTS_DIR: &str = "../vcpkg/ports";
pub const DEFAULT_VCPKG_EXECUTABLE: &str = "../vcpkg/vcpkg";
pub const DEFAULT_DEPENDENCIES_DGML: &str = "dependencies.dgml";
pub const DEFAULT_DEPENDENCIES_MD: &str = "dependencies.md";

/// SpdxRequest - Internal request DTO for the generation use case
///
/// Built through [`SpdxRequest::builder`], which fills in the defaults
/// and validates the combination of options.
#[derive(Debug, Clone, PartialEq)]
pub struct SpdxRequest {
    /// Path to the project's vcpkg.json
    pub project_manifest: PathBuf,
    /// Registries searched for port manifests
    pub registries: RegistryPaths,
    /// vcpkg executable used for `depend-info`
    pub vcpkg_executable: PathBuf,
    /// Features requested for the project (`name[f1,f2]`)
    pub features: Vec<String>,
    /// Where the DGML graph document is written and read
    pub dependencies_dgml: PathBuf,
    /// Where the mermaid diagram is written, if one is requested
    pub dependencies_md: Option<PathBuf>,
    /// Parse an existing graph document instead of running vcpkg
    pub skip_depend_info: bool,
    /// Extra `creators` entries after the tool entry
    pub creators: Vec<String>,
}

impl SpdxRequest {
    pub fn builder() -> SpdxRequestBuilder {
        SpdxRequestBuilder::default()
    }
}

/// Builder for [`SpdxRequest`]
#[derive(Debug, Default)]
pub struct SpdxRequestBuilder {
    project_manifest: Option<PathBuf>,
    ports_dir: Option<PathBuf>,
    additional_registry: Option<PathBuf>,
    vcpkg_executable: Option<PathBuf>,
    features: Vec<String>,
    dependencies_dgml: Option<PathBuf>,
    mermaid: bool,
    dependencies_md: Option<PathBuf>,
    skip_depend_info: bool,
    creators: Vec<String>,
}

impl SpdxRequestBuilder {
    pub fn project_manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_manifest = Some(path.into());
        self
    }

    pub fn ports_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.ports_dir = Some(path.into());
        self
    }

    pub fn additional_registry(mut self, path: Option<PathBuf>) -> Self {
        self.additional_registry = path;
        self
    }

    pub fn vcpkg_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.vcpkg_executable = Some(path.into());
        self
    }

    pub fn features(mut self, features: Vec<String>) -> Self {
        self.features = features;
        self
    }

    pub fn dependencies_dgml(mut self, path: impl Into<PathBuf>) -> Self {
        self.dependencies_dgml = Some(path.into());
        self
    }

    pub fn mermaid(mut self, enabled: bool) -> Self {
        self.mermaid = enabled;
        self
    }

    pub fn dependencies_md(mut self, path: impl Into<PathBuf>) -> Self {
        self.dependencies_md = Some(path.into());
        self
    }

    pub fn skip_depend_info(mut self, skip: bool) -> Self {
        self.skip_depend_info = skip;
        self
    }

    pub fn creators(mut self, creators: Vec<String>) -> Self {
        self.creators = creators;
        self
    }

    /// Builds the request
    ///
    /// # Errors
    /// Returns a validation error if:
    /// - A feature or creator entry is blank
    /// - A feature contains `[`, `]` or `,`
    /// - The graph document and the mermaid diagram share a path
    pub fn build(self) -> Result<SpdxRequest> {
        let features = Self::validate_features(self.features)?;
        let creators = Self::validate_creators(self.creators)?;

        let dependencies_dgml = self
            .dependencies_dgml
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DEPENDENCIES_DGML));

        let dependencies_md = if self.mermaid {
            let md = self
                .dependencies_md
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DEPENDENCIES_MD));
            if md == dependencies_dgml {
                return Err(SpdxError::Validation {
                    message: format!(
                        "The mermaid diagram and the dependency graph cannot both be written to {}",
                        md.display()
                    ),
                }
                .into());
            }
            Some(md)
        } else {
            None
        };

        let registries = RegistryPaths::new(
            self.ports_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PORTS_DIR)),
            self.additional_registry,
        );

        Ok(SpdxRequest {
            project_manifest: self
                .project_manifest
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PROJECT_MANIFEST)),
            registries,
            vcpkg_executable: self
                .vcpkg_executable
                .unwrap_or_else(|| PathBuf::from(DEFAULT_VCPKG_EXECUTABLE)),
            features,
            dependencies_dgml,
            dependencies_md,
            skip_depend_info: self.skip_depend_info,
            creators,
        })
    }

    fn validate_features(features: Vec<String>) -> Result<Vec<String>> {
        features
            .into_iter()
            .map(|feature| {
                let feature = feature.trim().to_string();
                if feature.is_empty() {
                    return Err(SpdxError::Validation {
                        message: "Feature names cannot be empty".to_string(),
                    }
                    .into());
                }
                if feature.contains(['[', ']', ',']) {
                    return Err(SpdxError::Validation {
                        message: format!("Invalid feature name: {}", feature),
                    }
                    .into());
                }
                Ok(feature)
            })
            .collect()
    }

    fn validate_creators(creators: Vec<String>) -> Result<Vec<String>> {
        creators
            .into_iter()
            .map(|creator| {
                let creator = creator.trim().to_string();
                if creator.is_empty() {
                    return Err(SpdxError::Validation {
                        message: "Creator entries cannot be empty".to_string(),
                    }
                    .into());
                }
                Ok(creator)
            })
            .collect()
    }
}
