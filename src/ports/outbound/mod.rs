/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, processes, console).
pub mod command_runner;
pub mod formatter;
pub mod graph_document_reader;
pub mod output_presenter;
pub mod port_manifest_reader;
pub mod progress_reporter;
pub mod project_manifest_reader;

pub use command_runner::{CommandInvocation, CommandRunner};
pub use formatter::SpdxFormatter;
pub use graph_document_reader::GraphDocumentReader;
pub use output_presenter::OutputPresenter;
pub use port_manifest_reader::PortManifestReader;
pub use progress_reporter::ProgressReporter;
pub use project_manifest_reader::ProjectManifestReader;
