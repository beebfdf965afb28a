pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::output::OutputTarget;
pub use core::{engine::ExportEngine, generator::generate_export_page};
pub use domain::model::{LibraryDescriptor, ModuleExportRequest};
pub use utils::error::{ExportError, Result};
