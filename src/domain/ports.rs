use crate::utils::error::Result;

/// Destination for a generated exports page.
pub trait ExportSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

impl ExportSink for String {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.push_str(text);
        Ok(())
    }
}
