/// Formatter adapters for the SPDX output encodings
mod spdx_json_formatter;
mod spdx_schema;
mod spdx_yaml_formatter;

pub use spdx_json_formatter::SpdxJsonFormatter;
pub use spdx_yaml_formatter::SpdxYamlFormatter;
