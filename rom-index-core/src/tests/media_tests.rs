use super::*;

#[test]
fn parses_screenshot_and_cover() {
    let shot = parse_companion("Foo-screenshot.png").unwrap();
    assert_eq!(shot.base, "Foo");
    assert_eq!(shot.kind, ImageKind::Screenshot);
    assert_eq!(shot.extension, "png");

    let cover = parse_companion("Foo-cover.jpg").unwrap();
    assert_eq!(cover.base, "Foo");
    assert_eq!(cover.kind, ImageKind::Cover);
    assert_eq!(cover.extension, "jpg");
}

#[test]
fn suffix_and_extension_are_case_insensitive() {
    let c = parse_companion("Foo-SCREENSHOT.PNG").unwrap();
    assert_eq!(c.kind, ImageKind::Screenshot);
    assert_eq!(c.extension, "png");

    let c = parse_companion("Foo-Cover.JpEg").unwrap();
    assert_eq!(c.kind, ImageKind::Cover);
    assert_eq!(c.extension, "jpeg");
}

#[test]
fn base_case_is_preserved() {
    assert_eq!(parse_companion("fOo BaR-cover.png").unwrap().base, "fOo BaR");
}

#[test]
fn base_may_contain_dots_and_dashes() {
    let c = parse_companion("Game v1.1 - Part-2-cover.png").unwrap();
    assert_eq!(c.base, "Game v1.1 - Part-2");
    assert_eq!(c.kind, ImageKind::Cover);
}

#[test]
fn rejects_non_companions() {
    assert!(parse_companion("Foo.png").is_none());
    assert!(parse_companion("Foo-screenshot.gif").is_none());
    assert!(parse_companion("Foo-screenshot.zip").is_none());
    assert!(parse_companion("-screenshot.png").is_none());
    assert!(parse_companion("Foo-title.png").is_none());
    assert!(parse_companion("Fooscreenshot.png").is_none());
    assert!(parse_companion(".Foo-cover.png").is_none());
}

#[test]
fn multibyte_base_does_not_panic() {
    assert_eq!(parse_companion("ゼルダ-cover.png").unwrap().base, "ゼルダ");
    assert!(parse_companion("ゼルダ.png").is_none());
}

#[test]
fn extension_preference_order() {
    assert!(extension_rank("png") < extension_rank("jpg"));
    assert!(extension_rank("JPG") < extension_rank("jpeg"));
    assert_eq!(extension_rank("gif"), IMAGE_EXTENSIONS.len());
}

#[test]
fn kind_labels() {
    assert_eq!(ImageKind::Screenshot.to_string(), "screenshot");
    assert_eq!(ImageKind::Cover.suffix(), "-cover");
}
