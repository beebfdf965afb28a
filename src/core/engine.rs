use crate::core::generator::generate_for_request;
use crate::core::{ExportSink, ModuleExportRequest, Result};
use crate::utils::validation::Validate;

pub struct ExportEngine<S: ExportSink> {
    sink: S,
}

impl<S: ExportSink> ExportEngine<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Validates the request, renders it and hands the text to the sink.
    /// Nothing reaches the sink if validation fails.
    pub fn run(&mut self, request: &ModuleExportRequest) -> Result<usize> {
        request.validate()?;

        tracing::debug!(
            "Generating exports page for {} (group {}) with {} libraries",
            request.module_name,
            request.group,
            request.libraries.len()
        );
        for lib in &request.libraries {
            tracing::debug!("  library {}", lib);
        }

        let text = generate_for_request(request);
        self.sink.write_text(&text)?;

        tracing::debug!("Wrote {} bytes", text.len());
        Ok(text.len())
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
