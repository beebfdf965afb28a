use crate::domain::ports::ExportSink;
use crate::utils::error::{ExportError, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    /// Created, or truncated if it exists.
    File(PathBuf),
}

impl ExportSink for OutputTarget {
    fn write_text(&mut self, text: &str) -> Result<()> {
        match self {
            OutputTarget::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()?;
                Ok(())
            }
            OutputTarget::File(path) => {
                tracing::debug!("Writing exports page to {}", path.display());
                let mut file = File::create(path.as_path()).map_err(|e| fs_error(path, e))?;
                file.write_all(text.as_bytes())
                    .map_err(|e| fs_error(path, e))?;
                file.flush().map_err(|e| fs_error(path, e))?;
                Ok(())
            }
        }
    }
}

fn fs_error(path: &Path, source: std::io::Error) -> ExportError {
    ExportError::Filesystem {
        path: path.to_path_buf(),
        source,
    }
}
