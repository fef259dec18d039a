use super::*;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_from(&dir.path().join("settings.toml")).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.scan_options(), ScanOptions::default());
}

#[test]
fn partial_file_merges_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[index]\ncollision = \"first-wins\"\nextensions = [\"zip\", \".DOSZ\"]\nunknown = 1\n",
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.index.collision, CollisionPolicy::FirstWins);
    assert!(settings.index.root.is_none());

    let opts = settings.scan_options();
    assert_eq!(opts.collision, CollisionPolicy::FirstWins);
    assert!(opts.is_archive_extension("dosz"));
    assert!(!opts.is_archive_extension("nes"));
}

#[test]
fn link_prefix_key_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[index]\nlink_prefix = \"ROMs\"\n").unwrap();
    assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[index\nroot = ").unwrap();
    assert!(matches!(
        Settings::load_from(&path),
        Err(SettingsError::Parse { .. })
    ));

    std::fs::write(&path, "[index]\ncollision = \"newest\"\n").unwrap();
    assert!(matches!(
        Settings::load_from(&path),
        Err(SettingsError::Parse { .. })
    ));
}

#[test]
fn resolve_root_priority() {
    let cwd = tempfile::tempdir().unwrap();
    let mut settings = Settings::default();

    // Nothing configured, no ROMs folder: the working directory
    assert_eq!(settings.resolve_root_in(cwd.path(), None), cwd.path());

    // Conventional ROMs folder
    std::fs::create_dir(cwd.path().join("ROMs")).unwrap();
    assert_eq!(
        settings.resolve_root_in(cwd.path(), None),
        cwd.path().join("ROMs")
    );

    // Settings beat the convention
    settings.index.root = Some(PathBuf::from("Library"));
    assert_eq!(
        settings.resolve_root_in(cwd.path(), None),
        cwd.path().join("Library")
    );

    // CLI beats settings
    assert_eq!(
        settings.resolve_root_in(cwd.path(), Some(PathBuf::from("/elsewhere"))),
        PathBuf::from("/elsewhere")
    );
}

#[test]
fn save_root_preserves_other_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.toml");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        "[index]\ncollision = \"first-wins\"\n\n[gui]\ntheme = \"dark\"\n",
    )
    .unwrap();

    save_root_to(&path, Some(Path::new("/data/ROMs"))).unwrap();
    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.index.root, Some(PathBuf::from("/data/ROMs")));
    assert_eq!(settings.index.collision, CollisionPolicy::FirstWins);
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("theme = \"dark\""));

    save_root_to(&path, None).unwrap();
    let settings = Settings::load_from(&path).unwrap();
    assert!(settings.index.root.is_none());
    assert_eq!(settings.index.collision, CollisionPolicy::FirstWins);
}

#[test]
fn save_root_creates_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rom-index").join("settings.toml");
    save_root_to(&path, Some(Path::new("ROMs"))).unwrap();
    assert!(path.exists());
    assert!(load_settings_string(&path).unwrap().contains("root = \"ROMs\""));
}
