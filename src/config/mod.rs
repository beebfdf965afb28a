pub mod output;

#[cfg(feature = "cli")]
use crate::domain::model::{LibraryDescriptor, ModuleExportRequest};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use output::OutputTarget;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "nid-exportgen", version)]
#[command(about = "Generate a Doxygen exports comment block for a module")]
pub struct CliConfig {
    /// Group name corresponding to the module (e.g. 'sysmem')
    pub group: String,

    /// Module name (e.g. 'SceSysmem')
    #[arg(value_name = "MODULENAME")]
    pub module_name: String,

    /// Library exported by the module, as NAME:NID[,NID]. Can be given multiple times.
    #[arg(short = 'l', long = "library", value_name = "NAME:NID[,NID]", required = true)]
    pub libraries: Vec<LibraryDescriptor>,

    /// Output file (default stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn to_request(&self) -> ModuleExportRequest {
        ModuleExportRequest::new(
            self.group.clone(),
            self.module_name.clone(),
            self.libraries.clone(),
        )
    }

    pub fn output_target(&self) -> OutputTarget {
        match &self.output {
            Some(path) => OutputTarget::File(path.clone()),
            None => OutputTarget::Stdout,
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.to_request().validate()
    }
}
