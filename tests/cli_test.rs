use anyhow::Result;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_nid-exportgen"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?)
}

const SYSMEM_ARGS: [&str; 6] = [
    "sysmem",
    "SceSysmem",
    "-l",
    "SceLibA:0x1234",
    "-l",
    "SceLibB:0xAAAA,0xBBBB",
];

#[test]
fn test_stdout_output() -> Result<()> {
    let output = run(&SYSMEM_ARGS)?;

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("/**\n@page exportsModule_SceSysmem SceSysmem\n"));
    assert!(stdout.contains("@ref sysmem \"SceSysmem\" exports the following libraries:\n"));
    assert!(stdout.ends_with("*/\n"));
    Ok(())
}

#[test]
fn test_stdout_matches_output_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("sysmem.dox");
    let path_str = path.to_str().unwrap();

    let mut file_args = SYSMEM_ARGS.to_vec();
    file_args.extend(["-o", path_str]);

    let to_file = run(&file_args)?;
    assert!(to_file.status.success());
    assert!(to_file.stdout.is_empty());

    let to_stdout = run(&SYSMEM_ARGS)?;
    assert_eq!(std::fs::read(&path)?, to_stdout.stdout);
    Ok(())
}

#[test]
fn test_repeated_runs_are_identical() -> Result<()> {
    let first = run(&SYSMEM_ARGS)?;
    let second = run(&SYSMEM_ARGS)?;
    assert_eq!(first.stdout, second.stdout);
    Ok(())
}

#[test]
fn test_rejects_bad_libraries_without_output() -> Result<()> {
    for spec in ["SceLibA", "SceLibA:1,2,3", "SceLibA:nothex"] {
        let output = run(&["sysmem", "SceSysmem", "-l", "SceLibB:1", "-l", spec])?;

        assert_eq!(output.status.code(), Some(2), "spec {spec}");
        assert!(output.stdout.is_empty());
        assert!(!output.stderr.is_empty());
    }
    Ok(())
}

#[test]
fn test_empty_group_is_inserted_as_given() -> Result<()> {
    let output = run(&["", "SceSysmem", "-l", "A:1"])?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("@ref  \"SceSysmem\" exports the following libraries:\n"));
    Ok(())
}

#[test]
fn test_missing_library_flag_is_rejected() -> Result<()> {
    let output = run(&["sysmem", "SceSysmem"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_unwritable_output_exits_nonzero() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("missing").join("out.dox");

    let mut args = SYSMEM_ARGS.to_vec();
    let path_str = path.to_str().unwrap();
    args.extend(["-o", path_str]);

    let output = run(&args)?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr)?.contains("failed to write"));
    Ok(())
}
