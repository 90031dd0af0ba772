use element_data::{TableConfig, TableFormat};
use std::fs;
use std::path::PathBuf;

// Kept in its own test binary: the override is process-wide
#[test]
fn environment_overrides_file_values() {
    let path = std::env::temp_dir().join(format!("element-data-env-{}.toml", std::process::id()));
    fs::write(&path, "source = \"tables/elements.bin\"\nformat = \"postcard\"\n").unwrap();

    std::env::set_var("ELEMENT_DATA__FORMAT", "json");
    let config = TableConfig::from_file(&path);
    std::env::remove_var("ELEMENT_DATA__FORMAT");
    fs::remove_file(&path).unwrap();

    let config = config.unwrap();
    assert_eq!(config.format, TableFormat::Json);
    assert_eq!(config.source, PathBuf::from("tables/elements.bin"));
}
