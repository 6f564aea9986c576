use serde::Deserialize;

/// Raw fields of a `vcpkg.json` manifest, as far as this tool reads them
///
/// The same shape serves both the project manifest and every port
/// manifest in a registry. Unknown keys (dependencies, features, ...)
/// are ignored; explicit `null` values deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PortManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default, rename = "version-semver")]
    pub version_semver: Option<String>,
    #[serde(default, rename = "version-date")]
    pub version_date: Option<String>,
    #[serde(default, rename = "version-string")]
    pub version_string: Option<String>,
    #[serde(default)]
    pub description: Option<Description>,
}

/// A manifest description, either one string or a list of lines
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Lines(Vec<String>),
}

impl Description {
    /// Single-line form; list entries are joined with one space
    pub fn to_text(&self) -> String {
        match self {
            Description::Text(text) => text.clone(),
            Description::Lines(lines) => lines.join(" "),
        }
    }
}

impl PortManifest {
    pub fn description_text(&self) -> Option<String> {
        self.description.as_ref().map(Description::to_text)
    }
}
