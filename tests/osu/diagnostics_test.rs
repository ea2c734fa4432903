//! Test diagnostics module functionality

use osu_rs::osu::{
    diagnostics::{SimpleSource, ToAriadne, collect_osu_reports, emit_osu_error, emit_osu_warnings},
    parse_osu,
};

#[test]
fn test_simple_source_creation() {
    let source_text = "osu file format v14\n[General]\nMode: 0\n";
    let source = SimpleSource::new("test.osu", source_text);

    assert_eq!(source.text(), source_text);
    assert_eq!(source.name(), "test.osu");
}

#[test]
fn test_collect_warning_reports() {
    let source = "osu file format v14\n[Events]\nSprite,Foreground,Centre,\"a.png\",0,0\n F,0,0,100\n";
    let output = parse_osu(source).unwrap();
    assert_eq!(output.warnings.len(), 2);

    let reports = collect_osu_reports("test.osu", source, &output.warnings);
    assert_eq!(reports.len(), 2);

    // Rendering must not panic
    emit_osu_warnings("test.osu", source, &output.warnings);
}

#[test]
fn test_error_report() {
    let source = "osu file format v14\n[TimingPoints]\n0,abc,4,1,0,100,1,0\n";
    let err = parse_osu(source).unwrap_err();

    let simple = SimpleSource::new("test.osu", source);
    let report = err.to_report(&simple);
    let mut rendered = Vec::new();
    report
        .write(
            ("test.osu".to_string(), ariadne::Source::from(source)),
            &mut rendered,
        )
        .unwrap();
    assert!(!rendered.is_empty());

    emit_osu_error("test.osu", source, &err);
}

#[test]
fn test_empty_warnings() {
    let source = "osu file format v14\n[General]\n";
    let output = parse_osu(source).unwrap();
    assert!(collect_osu_reports("test.osu", source, &output.warnings).is_empty());
    emit_osu_warnings("test.osu", source, &output.warnings);
}
