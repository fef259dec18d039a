use std::fs;
use std::path::Path;

use rom_index_core::Library;
use rom_index_emit::{EmitFormat, EmitOptions, Emitter, JsonEmitter};
use rom_index_lib::{ScanOptions, scan, scan_library};

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"rom").unwrap();
}

fn setup() -> tempfile::TempDir {
    let base = tempfile::tempdir().unwrap();
    let genesis = base.path().join("ROMs").join("Genesis");
    let dos = base.path().join("ROMs").join("DOS");
    fs::create_dir_all(&genesis).unwrap();
    fs::create_dir_all(&dos).unwrap();
    touch(&genesis, "Demo.gen");
    touch(&genesis, "Demo-screenshot.png");
    touch(&genesis, "Other.bin");
    touch(&dos, "Doom.dosz");
    touch(&dos, "Doom-cover.jpg");
    base
}

#[test]
fn writes_every_format() {
    let base = setup();
    let library = scan_library(&base.path().join("ROMs"), &ScanOptions::default()).unwrap();
    let out = base.path().join("out");
    let options = EmitOptions {
        base_dir: Some(out.clone()),
        timestamp: false,
    };

    for format in EmitFormat::ALL {
        let emitter = format.emitter(&options);
        emitter
            .write(&library, &out.join(emitter.default_file_name()))
            .unwrap();
    }

    let json = fs::read_to_string(out.join("roms_mapping.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["Genesis"]["count"], 2);
    assert_eq!(value["DOS"]["roms"][0]["artwork"]["cover"], "Doom-cover.jpg");

    let html = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(html.contains("href=\"../ROMs/Genesis/Demo.gen\""));

    let md = fs::read_to_string(out.join("INDEX.md")).unwrap();
    assert!(md.contains("[Doom-cover.jpg](../ROMs/DOS/Doom-cover.jpg)"));

    let leftovers: Vec<_> = fs::read_dir(&out)
        .unwrap()
        .flatten()
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn rewriting_unchanged_folder_is_byte_identical() {
    let base = setup();
    let genesis = base.path().join("ROMs").join("Genesis");
    let out = base.path().join("roms_mapping.json");

    JsonEmitter::new()
        .write(&Library::single(scan(&genesis).unwrap()), &out)
        .unwrap();
    let first = fs::read(&out).unwrap();

    JsonEmitter::new()
        .write(&Library::single(scan(&genesis).unwrap()), &out)
        .unwrap();
    let second = fs::read(&out).unwrap();

    assert_eq!(first, second);
}

#[test]
fn flat_scan_is_emitted_as_one_system() {
    let base = setup();
    let genesis = base.path().join("ROMs").join("Genesis");
    let json = JsonEmitter::new()
        .render(&Library::single(scan(&genesis).unwrap()))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let roms = value["Genesis"]["roms"].as_array().unwrap();
    assert_eq!(roms.len(), 2);
    assert_eq!(roms[0]["file"], "Demo.gen");
    assert_eq!(roms[0]["artwork"]["screenshot"], "Demo-screenshot.png");
    assert!(roms[1].get("artwork").is_none());
}
