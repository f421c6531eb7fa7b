use genrsrc::config::GenConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write `files` (relative path, contents) under `root`.
pub fn write_files(root: &Path, files: &[(&str, &[u8])]) {
    for (name, contents) in files {
        let path = root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }
}

/// Configuration searching only `search`, with the `r_` prefix and `res` namespace.
pub fn test_config(search: &Path) -> GenConfig {
    GenConfig {
        prefix: "r_".to_string(),
        namespace: "res".to_string(),
        resource_class: Some("Resource".to_string()),
        includes: vec!["core/Resource.h".to_string()],
        search: vec![search.to_path_buf()],
        ..GenConfig::default()
    }
}

pub fn output_paths(temp: &TempDir) -> (PathBuf, PathBuf) {
    let out = temp.path().join("out");
    fs::create_dir_all(&out).unwrap();
    (out.join("resources.s"), out.join("resources.h"))
}

/// Labels defined with `.global` in an assembly file.
pub fn global_symbols(asm: &str) -> Vec<String> {
    asm.lines()
        .filter_map(|line| line.trim().strip_prefix(".global "))
        .map(str::to_string)
        .collect()
}

/// Symbols declared with `extern "C" const char NAME[];` in a header.
pub fn extern_symbols(header: &str) -> Vec<String> {
    header
        .lines()
        .filter_map(|line| line.trim().strip_prefix("extern \"C\" const char "))
        .filter_map(|rest| rest.strip_suffix("[];"))
        .map(str::to_string)
        .collect()
}

/// `(ident, symbol, size)` of every constexpr resource object in a header.
pub fn declared_objects(header: &str) -> Vec<(String, String, u64)> {
    header
        .lines()
        .filter_map(|line| line.trim().strip_prefix("constexpr const Resource "))
        .map(|rest| {
            let (ident, args) = rest.split_once('(').unwrap();
            let args = args.strip_suffix(");").unwrap();
            let (symbol, size) = args.split_once(", ").unwrap();
            (
                ident.to_string(),
                symbol.trim_start_matches("externals::").to_string(),
                size.parse().unwrap(),
            )
        })
        .collect()
}
