/// Mock implementations for testing
mod mock_command_runner;
mod mock_graph_reader;
mod mock_port_manifest_reader;
mod mock_progress_reporter;
mod mock_project_manifest_reader;

pub use mock_command_runner::MockCommandRunner;
pub use mock_graph_reader::MockGraphReader;
pub use mock_port_manifest_reader::MockPortManifestReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_project_manifest_reader::MockProjectManifestReader;
