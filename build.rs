use std::fs;
use std::path::{Path, PathBuf};

fn add_watch_path(path: &Path) {
    println!("cargo:rerun-if-changed={}", path.display());
}

fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else { return; };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk_dir(&path, files);
        } else {
            files.push(path);
        }
    }
}

fn main() {
    // Content and stylesheet are pulled in through include_str!/asset!, which Cargo
    // does not always track across nested directories. Watch them explicitly.
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => return,
    };

    let content_root = manifest_dir.join("content");
    let assets_root = manifest_dir.join("assets");

    add_watch_path(&content_root);
    add_watch_path(&assets_root);

    let mut files = Vec::new();
    walk_dir(&content_root, &mut files);
    walk_dir(&assets_root, &mut files);
    for file in files {
        if file
            .extension()
            .is_some_and(|ext| ext == "json" || ext == "css")
        {
            add_watch_path(&file);
        }
    }

    println!("cargo:rerun-if-env-changed=FOLIO_CONTENT_URL");
}
