use super::*;

fn entry(base: &str, ext: &str) -> RomEntry {
    RomEntry::new(base, format!("{base}.{ext}"), 1024)
}

#[test]
fn entries_are_sorted_by_base_name() {
    let index = Index::from_entries(
        "/roms/snes",
        vec![entry("Zelda", "sfc"), entry("Axelay", "sfc"), entry("Mario", "sfc")],
    )
    .unwrap();
    let names: Vec<_> = index.iter().map(|e| e.base_name.as_str()).collect();
    assert_eq!(names, vec!["Axelay", "Mario", "Zelda"]);
}

#[test]
fn duplicate_base_names_are_ambiguous() {
    let err = Index::from_entries("/roms", vec![entry("Foo", "zip"), entry("Foo", "bin")]).unwrap_err();
    match err {
        ScanError::Ambiguous { base_name, files } => {
            assert_eq!(base_name, "Foo");
            assert_eq!(files, vec!["Foo.bin", "Foo.zip"]);
        }
        other => panic!("expected Ambiguous, got {other:?}"),
    }
}

#[test]
fn case_differing_base_names_are_distinct() {
    let index = Index::from_entries("/roms", vec![entry("Foo", "zip"), entry("foo", "bin")]).unwrap();
    assert_eq!(index.len(), 2);
    assert_eq!(index.get("Foo").unwrap().file_name, "Foo.zip");
    assert_eq!(index.get("foo").unwrap().file_name, "foo.bin");
    assert!(index.get("FOO").is_none());
}

#[test]
fn with_image_sets_the_matching_field() {
    let e = entry("Foo", "zip")
        .with_image(ImageKind::Cover, "Foo-cover.jpg")
        .with_image(ImageKind::Screenshot, "Foo-screenshot.png");
    assert_eq!(e.image(ImageKind::Cover), Some(Path::new("Foo-cover.jpg")));
    assert_eq!(e.image(ImageKind::Screenshot), Some(Path::new("Foo-screenshot.png")));
    assert!(e.has_artwork());
    assert!(!entry("Bar", "zip").has_artwork());
}

#[test]
fn display_name_replaces_underscores() {
    assert_eq!(entry("Super_Game_", "zip").display_name(), "Super Game");
    assert_eq!(entry("Demo", "gen").display_name(), "Demo");
}

#[test]
fn artwork_count_counts_entries_with_any_image() {
    let index = Index::from_entries(
        "/roms",
        vec![
            entry("A", "zip").with_image(ImageKind::Cover, "A-cover.png"),
            entry("B", "zip"),
            entry("C", "zip").with_image(ImageKind::Screenshot, "C-screenshot.png"),
        ],
    )
    .unwrap();
    assert_eq!(index.artwork_count(), 2);
}

#[test]
fn library_sorts_systems_and_totals() {
    let nes = Index::from_entries("/roms/nes", vec![entry("A", "nes"), entry("B", "nes")]).unwrap();
    let gb = Index::from_entries("/roms/gb", vec![entry("C", "gb")]).unwrap();
    let library = Library::new(vec![
        SystemIndex {
            name: "nes".into(),
            index: nes,
        },
        SystemIndex {
            name: "gb".into(),
            index: gb,
        },
    ]);
    let names: Vec<_> = library.systems().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["gb", "nes"]);
    assert_eq!(library.rom_count(), 3);
    assert_eq!(library.system_count(), 2);
    assert_eq!(library.system("nes").unwrap().len(), 2);
}

#[test]
fn single_library_is_named_after_root() {
    let index = Index::from_entries("/roms/Genesis", vec![entry("Demo", "gen")]).unwrap();
    let library = Library::single(index);
    assert_eq!(library.systems()[0].name, "Genesis");
    assert_eq!(library.rom_count(), 1);
}
