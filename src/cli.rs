use clap::Parser;
use std::path::PathBuf;

use vcpkg_spdx::application::dto::OutputFormat;

/// Generate SPDX documents for vcpkg manifest projects
///
/// Options left unset fall back to `vcpkg-spdx.config.yml` and then to
/// the built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "vcpkg-spdx")]
#[command(version)]
#[command(
    about = "Generate SPDX documents from a vcpkg project's dependency graph",
    long_about = None
)]
pub struct Args {
    /// Path to the project's vcpkg.json [default: vcpkg.json]
    #[arg(long, value_name = "PATH")]
    pub project_manifest: Option<PathBuf>,

    /// Path to the official vcpkg registry (ports folder) [default: ../vcpkg/ports]
    #[arg(long, value_name = "DIR")]
    pub ports_dir: Option<PathBuf>,

    /// Path to an additional registry (ports folder), searched first
    #[arg(long, value_name = "DIR")]
    pub additional_registry: Option<PathBuf>,

    /// Path to the vcpkg executable [default: ../vcpkg/vcpkg]
    #[arg(long = "vcpkg", value_name = "PATH")]
    pub vcpkg_executable: Option<PathBuf>,

    /// Features to enable in the project, comma-separated
    #[arg(long, value_name = "FEATURES", value_delimiter = ',')]
    pub features: Vec<String>,

    /// Where vcpkg writes the DGML dependency graph [default: dependencies.dgml]
    #[arg(long, value_name = "PATH")]
    pub dependencies_dgml: Option<PathBuf>,

    /// Also create the mermaid diagram through vcpkg
    #[arg(long)]
    pub mermaid: bool,

    /// Where vcpkg writes the mermaid diagram, if enabled [default: dependencies.md]
    #[arg(long, value_name = "PATH")]
    pub dependencies_md: Option<PathBuf>,

    /// Parse an existing DGML graph instead of running vcpkg depend-info
    #[arg(long)]
    pub skip_depend_info: bool,

    /// Output format: yaml or json [default: yaml]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path [default: project_spdx_document.spdx.yaml or .spdx.json]
    #[arg(short, long, value_name = "PATH", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the document to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Additional creator entry, e.g. "Organization: ACME" (repeatable)
    #[arg(long = "creator", value_name = "CREATOR")]
    pub creators: Vec<String>,

    /// Path to a config file [default: ./vcpkg-spdx.config.yml if present]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the commands run and the manifest used for each package
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["vcpkg-spdx"]).unwrap();
        assert!(args.project_manifest.is_none());
        assert!(args.features.is_empty());
        assert!(!args.mermaid);
        assert!(!args.skip_depend_info);
        assert!(args.format.is_none());
        assert!(!args.stdout);
        assert!(args.creators.is_empty());
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_all_options() {
        let args = Args::try_parse_from([
            "vcpkg-spdx",
            "--project-manifest",
            "app/vcpkg.json",
            "--ports-dir",
            "/opt/vcpkg/ports",
            "--additional-registry",
            "registry/ports",
            "--vcpkg",
            "/opt/vcpkg/vcpkg",
            "--features",
            "tools,tests",
            "--dependencies-dgml",
            "deps.dgml",
            "--mermaid",
            "--dependencies-md",
            "deps.md",
            "-f",
            "json",
            "-o",
            "out.spdx.json",
            "--creator",
            "Organization: ACME",
            "--creator",
            "Person: Jane Doe",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.project_manifest, Some(PathBuf::from("app/vcpkg.json")));
        assert_eq!(args.vcpkg_executable, Some(PathBuf::from("/opt/vcpkg/vcpkg")));
        assert_eq!(args.features, vec!["tools", "tests"]);
        assert!(args.mermaid);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.output, Some(PathBuf::from("out.spdx.json")));
        assert_eq!(args.creators, vec!["Organization: ACME", "Person: Jane Doe"]);
        assert!(args.verbose);
    }

    #[test]
    fn test_args_invalid_format() {
        let result = Args::try_parse_from(["vcpkg-spdx", "-f", "markdown"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_output_conflicts_with_stdout() {
        let result = Args::try_parse_from(["vcpkg-spdx", "-o", "out.yaml", "--stdout"]);
        assert!(result.is_err());
    }
}
