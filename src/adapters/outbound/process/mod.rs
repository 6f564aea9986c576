/// Process adapters for running external tools
mod command_runner;

pub use command_runner::ProcessCommandRunner;
