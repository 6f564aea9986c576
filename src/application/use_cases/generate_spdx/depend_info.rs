use crate::ports::outbound::CommandInvocation;
use crate::sbom_generation::domain::PackageId;
use std::path::{Path, PathBuf};

/// Output format requested from `vcpkg depend-info`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Dgml,
    Mermaid,
}

impl GraphFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphFormat::Dgml => "dgml",
            GraphFormat::Mermaid => "mermaid",
        }
    }
}

/// Builds `vcpkg depend-info` invocations for a manifest project
///
/// The command runs in the directory holding the project manifest so that
/// `--overlay-ports=.` makes the project itself resolvable as a port.
pub struct DependInfoCommand;

impl DependInfoCommand {
    pub fn invocation(
        vcpkg_executable: &Path,
        project_manifest: &Path,
        project_name: &PackageId,
        features: &[String],
        format: GraphFormat,
    ) -> CommandInvocation {
        let args = vec![
            "depend-info".to_string(),
            "--overlay-ports=.".to_string(),
            Self::package_spec(project_name, features),
            format!("--format={}", format.as_str()),
        ];

        CommandInvocation::new(
            vcpkg_executable.to_path_buf(),
            args,
            Self::working_dir(project_manifest),
        )
    }

    /// `name` or `name[f1,f2]`
    fn package_spec(project_name: &PackageId, features: &[String]) -> String {
        if features.is_empty() {
            project_name.to_string()
        } else {
            format!("{}[{}]", project_name, features.join(","))
        }
    }

    fn working_dir(project_manifest: &Path) -> PathBuf {
        match project_manifest.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foo() -> PackageId {
        PackageId::new("foo".to_string()).unwrap()
    }

    #[test]
    fn test_invocation_without_features() {
        let invocation = DependInfoCommand::invocation(
            Path::new("../vcpkg/vcpkg"),
            Path::new("vcpkg.json"),
            &foo(),
            &[],
            GraphFormat::Dgml,
        );

        assert_eq!(invocation.program, PathBuf::from("../vcpkg/vcpkg"));
        assert_eq!(
            invocation.args,
            vec!["depend-info", "--overlay-ports=.", "foo", "--format=dgml"]
        );
        assert_eq!(invocation.working_dir, PathBuf::from("."));
    }

    #[test]
    fn test_invocation_with_features_and_mermaid() {
        let invocation = DependInfoCommand::invocation(
            Path::new("vcpkg"),
            Path::new("project/app/vcpkg.json"),
            &foo(),
            &["tools".to_string(), "tests".to_string()],
            GraphFormat::Mermaid,
        );

        assert_eq!(invocation.args[2], "foo[tools,tests]");
        assert_eq!(invocation.args[3], "--format=mermaid");
        assert_eq!(invocation.working_dir, PathBuf::from("project/app"));
    }
}
