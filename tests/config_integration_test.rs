//! Config discovery and the paginator built from it.

use indoc::indoc;
use pagewise::config::{init_config, load_config_file, load_config_from, PaginatorConfig};
use pagewise::pagination::{Paginator, PaginatorOptions};
use pagewise::testkit::{MemorySource, RecordingSurface};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_found_in_ancestor_drives_paginator() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".pagewise.toml"),
        indoc! {"
            page_size = 10
            page_sizes = [10, 25]
            window_delta = 1
        "},
    )
    .unwrap();
    let nested = temp_dir.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    let config = load_config_from(nested);
    assert_eq!(config.page_sizes, vec![10, 25]);

    let source = MemorySource::new().with_collection("items", (1..=100).collect::<Vec<usize>>());
    let mut pager = Paginator::attach(
        &source,
        PaginatorOptions::new("items"),
        config,
        RecordingSurface::new(),
    )
    .unwrap();
    pager.go_to_page(5);

    assert_eq!(
        pager.controls().unwrap().page_strip(),
        "1 ... 4 [5] 6 ... 10"
    );
    let sizes: Vec<usize> = pager
        .controls()
        .unwrap()
        .page_sizes
        .iter()
        .map(|o| o.size)
        .collect();
    assert_eq!(sizes, vec![10, 25]);
}

#[test]
fn test_invalid_discovered_config_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".pagewise.toml"), "page_size = 7\n").unwrap();

    let config = load_config_from(temp_dir.path().to_path_buf());
    assert_eq!(config, PaginatorConfig::default());
}

#[test]
fn test_init_writes_loadable_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = init_config(temp_dir.path(), false).unwrap();

    let config = load_config_file(&path).unwrap();
    assert_eq!(config, PaginatorConfig::default());
    assert!(init_config(temp_dir.path(), false).is_err());
}
