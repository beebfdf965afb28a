pub mod engine;
pub mod generator;

pub use crate::domain::model::{LibraryDescriptor, ModuleExportRequest};
pub use crate::domain::ports::ExportSink;
pub use crate::utils::error::Result;
