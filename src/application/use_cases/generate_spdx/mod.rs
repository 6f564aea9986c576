mod depend_info;

pub use depend_info::{DependInfoCommand, GraphFormat};

use crate::application::dto::{SpdxRequest, SpdxResponse};
use crate::ports::outbound::{
    CommandRunner, GraphDocumentReader, PortManifestReader, ProgressReporter,
    ProjectManifestReader,
};
use crate::sbom_generation::domain::{
    DependencyGraph, PackageMetadata, ProjectDescriptor, ResolvedDependencies, NOASSERTION,
};
use crate::sbom_generation::services::{
    CreationInfoGenerator, DocumentAssembler, GraphParser, MetadataResolver,
};
use crate::shared::error::SpdxError;
use crate::shared::Result;
use std::path::Path;

/// GenerateSpdxUseCase - Core use case for SPDX document generation
///
/// Orchestrates the pipeline: project manifest, `vcpkg depend-info`,
/// graph parsing, manifest resolution and document assembly. Every side
/// effect goes through an injected port.
///
/// # Type Parameters
/// * `PMR` - ProjectManifestReader implementation
/// * `MR` - PortManifestReader implementation
/// * `GR` - GraphDocumentReader implementation
/// * `CR` - CommandRunner implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSpdxUseCase<PMR, MR, GR, CR, PR> {
    project_manifest_reader: PMR,
    port_manifest_reader: MR,
    graph_reader: GR,
    command_runner: CR,
    progress_reporter: PR,
}

impl<PMR, MR, GR, CR, PR> GenerateSpdxUseCase<PMR, MR, GR, CR, PR>
where
    PMR: ProjectManifestReader,
    MR: PortManifestReader,
    GR: GraphDocumentReader,
    CR: CommandRunner,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSpdxUseCase with injected dependencies
    pub fn new(
        project_manifest_reader: PMR,
        port_manifest_reader: MR,
        graph_reader: GR,
        command_runner: CR,
        progress_reporter: PR,
    ) -> Self {
        Self {
            project_manifest_reader,
            port_manifest_reader,
            graph_reader,
            command_runner,
            progress_reporter,
        }
    }

    /// Executes the generation use case
    ///
    /// # Returns
    /// SpdxResponse holding the assembled document
    ///
    /// # Errors
    /// Fails before any output is produced when the project manifest is
    /// unusable, vcpkg fails, the graph cannot be parsed or a port manifest
    /// is malformed.
    pub fn execute(&self, request: SpdxRequest) -> Result<SpdxResponse> {
        // Step 1: Read the project manifest
        let project = self.read_project(&request.project_manifest)?;

        // Step 2: Produce the dependency graph document (and diagram)
        let mermaid_path = if request.skip_depend_info {
            self.progress_reporter.report(&format!(
                "⏭️  Using existing dependency graph: {}",
                request.dependencies_dgml.display()
            ));
            if let Some(md_path) = &request.dependencies_md {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Mermaid diagram is not generated when vcpkg depend-info is skipped: {}",
                    md_path.display()
                ));
            }
            None
        } else {
            self.run_depend_info(&request, &project)?;
            request.dependencies_md.clone()
        };

        // Step 3: Parse the graph
        let graph = self.read_graph(&request.dependencies_dgml)?;

        // Step 4: Resolve per-package metadata
        let resolved = self.resolve_metadata(&request, &project, &graph)?;

        // Step 5: Assemble the document
        let creation_info = CreationInfoGenerator::generate_default(&request.creators);
        let document = DocumentAssembler::assemble(&project, &resolved, creation_info);

        Ok(SpdxResponse::new(document, request.dependencies_dgml, mermaid_path))
    }

    fn read_project(&self, manifest_path: &Path) -> Result<ProjectDescriptor> {
        self.progress_reporter.report(&format!(
            "📖 Loading project manifest from: {}",
            manifest_path.display()
        ));

        let manifest = self
            .project_manifest_reader
            .read_project_manifest(manifest_path)?;

        let project = ProjectDescriptor::from_manifest(&manifest).map_err(|e| {
            SpdxError::ProjectManifestParseError {
                path: manifest_path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        self.progress_reporter.report(&format!(
            "✅ Project: {} ({})",
            project.name(),
            project.fields().version().unwrap_or(NOASSERTION)
        ));

        Ok(project)
    }

    fn run_depend_info(&self, request: &SpdxRequest, project: &ProjectDescriptor) -> Result<()> {
        self.progress_reporter
            .report("🔗 Computing dependency graph with vcpkg depend-info...");

        self.run_graph_command(request, project, GraphFormat::Dgml, &request.dependencies_dgml)?;

        if let Some(md_path) = &request.dependencies_md {
            self.run_graph_command(request, project, GraphFormat::Mermaid, md_path)?;
            self.progress_reporter.report(&format!(
                "🧜 Mermaid diagram written to: {}",
                md_path.display()
            ));
        }

        Ok(())
    }

    fn run_graph_command(
        &self,
        request: &SpdxRequest,
        project: &ProjectDescriptor,
        format: GraphFormat,
        output_path: &Path,
    ) -> Result<()> {
        let invocation = DependInfoCommand::invocation(
            &request.vcpkg_executable,
            &request.project_manifest,
            project.name(),
            &request.features,
            format,
        );

        self.progress_reporter.report_verbose(&format!(
            "Running: {} > {}",
            invocation,
            output_path.display()
        ));

        self.command_runner.run_to_file(&invocation, output_path)
    }

    fn read_graph(&self, graph_path: &Path) -> Result<DependencyGraph> {
        let content = self.graph_reader.read_graph_document(graph_path)?;

        let graph = GraphParser::parse(&content).map_err(|e| SpdxError::GraphParseError {
            path: graph_path.to_path_buf(),
            details: format!("{:#}", e),
        })?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} node(s) in the dependency graph",
            graph.node_count()
        ));

        Ok(graph)
    }

    fn resolve_metadata(
        &self,
        request: &SpdxRequest,
        project: &ProjectDescriptor,
        graph: &DependencyGraph,
    ) -> Result<ResolvedDependencies> {
        self.progress_reporter
            .report("🔍 Resolving package metadata from port manifests...");

        let resolved = MetadataResolver::resolve_all(
            &self.port_manifest_reader,
            &request.registries,
            graph,
            |current, total, metadata| {
                self.report_source(metadata);
                self.progress_reporter
                    .report_progress(current, total, Some(metadata.id().as_str()));
            },
        )?;

        let root_id = project.name().spdx_id();
        let unresolved = resolved
            .iter()
            .filter(|m| m.source().is_none() && m.id().spdx_id() != root_id)
            .count();
        if unresolved > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: No port manifest found for {} package(s); their fields are NOASSERTION.",
                unresolved
            ));
        }

        Ok(resolved)
    }

    fn report_source(&self, metadata: &PackageMetadata) {
        let message = match metadata.source() {
            Some(source) => format!(
                "Using {} as a source for {} ({}:{})",
                source.display(),
                metadata.id(),
                metadata.fields().version().unwrap_or(NOASSERTION),
                metadata.fields().license().unwrap_or(NOASSERTION)
            ),
            None => format!("No port manifest found for {}", metadata.id()),
        };
        self.progress_reporter.report_verbose(&message);
    }
}
