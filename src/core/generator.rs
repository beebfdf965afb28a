use crate::core::{LibraryDescriptor, ModuleExportRequest};

/// Firmware range covered by a library that only ever had one NID.
pub const FULL_FIRMWARE_RANGE: &str = "0.00~9.99";
/// Firmware range of the first NID of a library whose NID changed.
pub const OLD_FIRMWARE_RANGE: &str = "0.00~3.61";
/// Firmware range of the second NID of a library whose NID changed.
pub const NEW_FIRMWARE_RANGE: &str = "3.63~9.99";

const EXPORTS_FOLLOW: &str =
    "The following functions and/or variables are exported by this library:";

/// Renders the Doxygen comment block for a module's exports.
///
/// Libraries are listed in case-insensitive name order. Module and library
/// names are inserted as-is; nothing is escaped.
pub fn generate_export_page(
    group: &str,
    module_name: &str,
    libraries: &[LibraryDescriptor],
) -> String {
    let mut sorted_libs: Vec<&LibraryDescriptor> = libraries.iter().collect();
    sorted_libs.sort_by(|a, b| a.cmp_by_name(b));

    let mut lines: Vec<String> = Vec::new();
    lines.push("/**".to_string());
    lines.push(format!("@page exportsModule_{} {}", module_name, module_name));
    lines.push(format!(
        "@ref {} \"{}\" exports the following libraries:",
        group, module_name
    ));
    for lib in &sorted_libs {
        lines.push(format!("\t- @subpage {}", lib.page_tag()));
    }
    lines.push(String::new());

    for lib in &sorted_libs {
        push_library_page(&mut lines, lib);
    }

    lines.push("*/".to_string());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

pub fn generate_for_request(request: &ModuleExportRequest) -> String {
    generate_export_page(&request.group, &request.module_name, &request.libraries)
}

fn push_library_page(lines: &mut Vec<String>, lib: &LibraryDescriptor) {
    lines.push(format!("@page {} {}", lib.page_tag(), lib.name()));
    lines.push("<table>".to_string());
    lines.push("<caption>Library NID(s)</caption>".to_string());
    lines.push("<tr><th>Firmware Version<th>NID".to_string());

    match lib.nids() {
        [nid] => lines.push(nid_row(FULL_FIRMWARE_RANGE, *nid)),
        [old, new] => {
            lines.push(nid_row(OLD_FIRMWARE_RANGE, *old));
            lines.push(nid_row(NEW_FIRMWARE_RANGE, *new));
        }
        // LibraryDescriptor guarantees one or two NIDs
        _ => unreachable!("library {} has {} NIDs", lib.name(), lib.nids().len()),
    }

    lines.push("</table>".to_string());
    lines.push(String::new());
    lines.push(EXPORTS_FOLLOW.to_string());
    lines.push(String::new());
}

fn nid_row(firmware_range: &str, nid: u32) -> String {
    format!("<tr><td>{}<td>0x{:08X}", firmware_range, nid)
}
