use crate::shared::Result;

/// Maximum length for package identifiers (security limit)
const MAX_PACKAGE_ID_LENGTH: usize = 255;

/// Prefix shared by every package element id in the document
const SPDX_PACKAGE_PREFIX: &str = "SPDXRef-Package-";

/// NewType wrapper for a vcpkg package identifier with validation
///
/// Identifiers come from the dependency graph document and are used
/// verbatim as directory names inside the registries, so anything that
/// could escape a registry directory is rejected here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageId(String);

impl PackageId {
    pub fn new(id: String) -> Result<Self> {
        if id.is_empty() {
            anyhow::bail!("Package identifier cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if id.len() > MAX_PACKAGE_ID_LENGTH {
            anyhow::bail!(
                "Package identifier is too long ({} bytes). Maximum allowed: {} bytes",
                id.len(),
                MAX_PACKAGE_ID_LENGTH
            );
        }

        // Security: no path traversal out of the registry directory
        if id == "." || id == ".." {
            anyhow::bail!("Package identifier '{}' is not a valid port name", id);
        }

        if !id.chars().all(|c| {
            c.is_ascii_alphanumeric()
                || c == '-'
                || c == '_'
                || c == '.'
                || c == '['
                || c == ']' // features, e.g. curl[ssl]
                || c == ','
                || c == ':' // triplets, e.g. zlib:x64-linux
        }) {
            anyhow::bail!(
                "Package identifier '{}' contains invalid characters. Only alphanumeric, hyphens, underscores, dots, brackets, commas and colons are allowed.",
                id
            );
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Element id used for this package inside the SPDX document
    pub fn spdx_id(&self) -> SpdxId {
        SpdxId::for_package(&self.0)
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// SPDX element identifier (`SPDXRef-...`)
///
/// SPDX ids may only contain letters, digits, `.` and `-`; every other
/// character of the package name is replaced with `-`. Two ids compare
/// equal only if their normalized forms are identical (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpdxId(String);

impl SpdxId {
    pub fn for_package(name: &str) -> Self {
        let normalized: String = name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        Self(format!("{}{}", SPDX_PACKAGE_PREFIX, normalized))
    }

    pub fn document() -> Self {
        Self("SPDXRef-DOCUMENT".to_string())
    }

    /// Same id with a numeric suffix (`SPDXRef-Package-foo-bar-2`)
    pub fn with_suffix(&self, n: usize) -> Self {
        Self(format!("{}-{}", self.0, n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SpdxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
