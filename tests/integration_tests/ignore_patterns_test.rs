// tests/integration_tests/ignore_patterns_test.rs
use super::common::{create_ignore_file, setup_test_directory};
use anyhow::Result;
use wfc::{Pipeline, collect_files, count_paths, load_ignore_patterns};

#[test]
fn test_directory_without_ignore_file() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let files = collect_files(temp_dir.path(), &[], &[])?;
    assert_eq!(files.len(), 5, "Hidden directories are skipped");
    Ok(())
}

#[test]
fn test_directory_with_ignore_file() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_ignore_file(temp_dir.path(), &["*.bak", "rascunhos/"])?;

    let files = collect_files(temp_dir.path(), &[], &[])?;
    assert_eq!(files.len(), 3, "Should only keep non-ignored files");

    let table = count_paths(&[temp_dir.path().to_path_buf()], &[], &[], &Pipeline::default())?;
    assert_eq!(table.get("ação"), Some(3));
    assert_eq!(table.get("descartado"), None);
    assert_eq!(table.get("segredo"), None);
    Ok(())
}

#[test]
fn test_exclude_dirs_and_ignore_file_combine() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_ignore_file(temp_dir.path(), &["*.bak"])?;

    let files = collect_files(temp_dir.path(), &[String::from("capitulos")], &[])?;
    let names: Vec<String> = files
        .iter()
        .filter_map(|f| f.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["arquivo.txt", "velho.txt"]);
    Ok(())
}

#[test]
fn test_complex_patterns() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_ignore_file(
        temp_dir.path(),
        &[
            "# rascunhos e cópias",
            "",
            "*.bak",
            "**/*.log",
            "!/importante/**/*.log",
            "build/*/temp/",
        ],
    )?;

    let patterns = load_ignore_patterns(temp_dir.path())?;
    assert!(patterns.matches("copia.bak", false));
    assert!(patterns.matches("deep/nested/file.log", false));
    assert!(!patterns.matches("importante/logs/app.log", false));
    assert!(patterns.matches("build/debug/temp", true));
    assert!(patterns.matches("build/debug/temp/out.txt", false));
    assert!(!patterns.matches("build/temp/out.txt", false));
    Ok(())
}
