use crate::adapters::outbound::formatters::{SpdxJsonFormatter, SpdxYamlFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::SpdxFormatter;

/// Factory for creating SPDX formatters
///
/// Selects the formatter adapter for an output format, keeping `main`
/// free of concrete adapter types.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use vcpkg_spdx::application::dto::OutputFormat;
    /// use vcpkg_spdx::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Yaml);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn SpdxFormatter> {
        match format {
            OutputFormat::Yaml => Box::new(SpdxYamlFormatter::new()),
            OutputFormat::Json => Box::new(SpdxJsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use vcpkg_spdx::application::dto::OutputFormat;
    /// use vcpkg_spdx::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating SPDX JSON document...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Yaml => "📝 Generating SPDX YAML document...",
            OutputFormat::Json => "📝 Generating SPDX JSON document...",
        }
    }
}
