use crate::utils::error::{ExportError, Result};
use crate::utils::validation::{parse_nid, Validate};
use caseless::default_case_fold_str;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub const MAX_NIDS_PER_LIBRARY: usize = 2;

/// A library exported by a module, parsed from `NAME:NID[,NID]`.
///
/// With two NIDs the first applies to firmware up to 3.61 and the second
/// from 3.63 onwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryDescriptor {
    name: String,
    nids: Vec<u32>,
}

impl LibraryDescriptor {
    pub fn new(name: impl Into<String>, nids: Vec<u32>) -> Result<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ExportError::EmptyLibraryName {
                spec: format!("{}:{}", name, format_nids(&nids)),
            });
        }
        if nids.is_empty() {
            return Err(ExportError::InvalidNid {
                value: String::new(),
            });
        }
        if nids.len() > MAX_NIDS_PER_LIBRARY {
            return Err(ExportError::TooManyNids {
                name,
                count: nids.len(),
            });
        }
        Ok(Self { name, nids })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nids(&self) -> &[u32] {
        &self.nids
    }

    /// Doxygen page tag for this library's sub-page.
    pub fn page_tag(&self) -> String {
        format!("exportsLib_{}", self.name)
    }

    /// Orders by Unicode case-folded name, so `ß` sorts as `ss`.
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        default_case_fold_str(&self.name).cmp(&default_case_fold_str(&other.name))
    }
}

impl FromStr for LibraryDescriptor {
    type Err = ExportError;

    fn from_str(spec: &str) -> Result<Self> {
        let (name, nids_str) = spec
            .split_once(':')
            .ok_or_else(|| ExportError::MissingSeparator {
                spec: spec.to_string(),
            })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(ExportError::EmptyLibraryName {
                spec: spec.to_string(),
            });
        }

        let nids = nids_str
            .split(',')
            .map(parse_nid)
            .collect::<Result<Vec<_>>>()?;

        Self::new(name, nids)
    }
}

impl fmt::Display for LibraryDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, format_nids(&self.nids))
    }
}

fn format_nids(nids: &[u32]) -> String {
    nids.iter()
        .map(|nid| format!("{:#x}", nid))
        .collect::<Vec<_>>()
        .join(",")
}

/// Everything needed to render one module's exports page.
#[derive(Debug, Clone)]
pub struct ModuleExportRequest {
    pub group: String,
    pub module_name: String,
    pub libraries: Vec<LibraryDescriptor>,
}

impl ModuleExportRequest {
    pub fn new(
        group: impl Into<String>,
        module_name: impl Into<String>,
        libraries: Vec<LibraryDescriptor>,
    ) -> Self {
        Self {
            group: group.into(),
            module_name: module_name.into(),
            libraries,
        }
    }

    /// Doxygen page tag for the module's exports page.
    pub fn page_tag(&self) -> String {
        format!("exportsModule_{}", self.module_name)
    }
}

impl Validate for ModuleExportRequest {
    fn validate(&self) -> Result<()> {
        if self.libraries.is_empty() {
            return Err(ExportError::NoLibraries);
        }
        Ok(())
    }
}
