mod creation_info_generator;
mod document_assembler;
mod graph_parser;
mod manifest_locator;
mod metadata_resolver;

pub use creation_info_generator::{CreationInfoGenerator, TOOL_NAME};
pub use document_assembler::DocumentAssembler;
pub use graph_parser::{GraphParser, DGML_NAMESPACE};
pub use manifest_locator::{LocatedManifest, ManifestLocator, RegistryPaths, MANIFEST_FILE_NAME};
pub use metadata_resolver::MetadataResolver;
