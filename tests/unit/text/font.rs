use super::*;

#[test]
fn builtin_only_preference_yields_builtin_font() {
    let font = load_font(&FontPreference::builtin_only());
    assert_eq!(font.origin(), &FontOrigin::Builtin);
    assert!(matches!(font.face(), FontFace::Builtin(_)));
}

#[test]
fn missing_preferred_file_falls_back() {
    let pref = FontPreference {
        preferred_path: Some(PathBuf::from("target/no-such-dir/no-such-font.ttf")),
        allow_system_fonts: false,
    };
    assert_eq!(load_font(&pref).origin(), &FontOrigin::Builtin);
}

#[test]
fn non_font_file_is_rejected() {
    let dir = PathBuf::from("target").join("unit_font");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("not-a-font.ttf");
    std::fs::write(&path, b"definitely not a font").unwrap();

    let pref = FontPreference {
        preferred_path: Some(path),
        allow_system_fonts: false,
    };
    assert_eq!(load_font(&pref).origin(), &FontOrigin::Builtin);
}

#[test]
fn system_lookup_never_panics_and_reports_origin() {
    let pref = FontPreference {
        preferred_path: None,
        allow_system_fonts: true,
    };
    let font = load_font(&pref);
    match (font.face(), font.origin()) {
        (FontFace::Outline(o), FontOrigin::System { family }) => {
            assert!(!o.bytes.is_empty());
            assert!(!family.is_empty());
        }
        (FontFace::Builtin(_), FontOrigin::Builtin) => {}
        other => panic!("face and origin disagree: {other:?}"),
    }
}

#[test]
fn builtin_measure_is_fixed_advance() {
    let f = BuiltinFont;
    assert_eq!(f.measure("", 16.0), 0.0);
    assert!((f.measure("abcd", 10.0) - 24.0).abs() < 1e-4);
    assert!((f.measure("a b", 10.0) - 18.0).abs() < 1e-4);
}
