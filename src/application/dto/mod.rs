/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod spdx_request;
mod spdx_response;

pub use output_format::OutputFormat;
pub use spdx_request::{SpdxRequest, SpdxRequestBuilder};
pub use spdx_response::SpdxResponse;
