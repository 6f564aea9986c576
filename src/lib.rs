//! vcpkg-spdx - SPDX document generation for vcpkg manifest projects
//!
//! This library derives an SPDX 2.2 license-disclosure document from a vcpkg
//! project: `vcpkg depend-info` computes the dependency graph, each port's
//! `vcpkg.json` supplies license and version metadata, and every dependency
//! becomes a package with a `DEPENDS_ON` relationship from the project.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use vcpkg_spdx::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create use case with injected adapters
//! let use_case = GenerateSpdxUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     ProcessCommandRunner::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = SpdxRequest::builder()
//!     .project_manifest("vcpkg.json")
//!     .ports_dir("../vcpkg/ports")
//!     .build()?;
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let yaml = SpdxYamlFormatter::new().format(&response.document)?;
//! println!("{}", yaml);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{SpdxJsonFormatter, SpdxYamlFormatter};
    pub use crate::adapters::outbound::process::ProcessCommandRunner;
    pub use crate::application::dto::{OutputFormat, SpdxRequest, SpdxResponse};
    pub use crate::application::use_cases::GenerateSpdxUseCase;
    pub use crate::ports::outbound::{
        CommandInvocation, CommandRunner, GraphDocumentReader, OutputPresenter,
        PortManifestReader, ProgressReporter, ProjectManifestReader, SpdxFormatter,
    };
    pub use crate::sbom_generation::domain::{
        DependencyGraph, ManifestFields, PackageId, PackageMetadata, PortManifest,
        ProjectDescriptor, ResolvedDependencies, SpdxDocument, NOASSERTION,
    };
    pub use crate::sbom_generation::policies::VersionPriority;
    pub use crate::sbom_generation::services::{
        CreationInfoGenerator, DocumentAssembler, GraphParser, ManifestLocator, MetadataResolver,
        RegistryPaths,
    };
    pub use crate::shared::Result;
}
