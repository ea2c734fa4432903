use pretty_assertions::assert_eq;

use osu_rs::osu::prelude::*;

use super::{parse_body_err, with_header};

fn error_of(source: &str) -> ParseErrorWithRange {
    parse_osu(source).unwrap_err()
}

#[test]
fn test_header() {
    assert_eq!(error_of("").into_content(), ParseError::MalformedHeader);
    assert_eq!(
        error_of("osu file format\n[General]\n").into_content(),
        ParseError::MalformedHeader
    );
    assert_eq!(
        error_of("osu file format v\n[General]\n").into_content(),
        ParseError::MalformedHeader
    );
    assert_eq!(
        error_of("osu file format v1234567890123456\n[General]\n").into_content(),
        ParseError::MalformedHeader
    );
    assert_eq!(
        error_of("osu file format v1234567890123456").into_content(),
        ParseError::MalformedHeader
    );
    assert_eq!(
        error_of("osu file format v123456789012345\n[General]\n").into_content(),
        ParseError::UnsupportedVersion("123456789012345".into())
    );
    assert_eq!(
        error_of("osu file format v123456789012345").into_content(),
        ParseError::UnsupportedVersion("123456789012345".into())
    );
    assert_eq!(
        error_of("osu file format v9\n[General]\n").into_content(),
        ParseError::UnsupportedVersion("9".into())
    );
    assert_eq!(
        error_of(" osu file format v14\n[General]\n").into_content(),
        ParseError::MalformedHeader
    );
}

#[test]
fn test_empty_beatmap() {
    let err = error_of("osu file format v14");
    assert_eq!(err.content(), &ParseError::EmptyBeatmap);
    assert_eq!(
        error_of("osu file format v14\r\n\r\n// only comments\r\n").into_content(),
        ParseError::EmptyBeatmap
    );
}

#[test]
fn test_content_outside_section() {
    let source = with_header("Title:x\n[Metadata]\n");
    let err = error_of(&source);
    assert_eq!(&source[err.range()], "Title:x");
    assert_eq!(err.into_content(), ParseError::ContentOutsideSection);
}

#[test]
fn test_unknown_section() {
    for header in ["[Storyboard]", "[general]", "[General] x", "[General"] {
        assert_eq!(
            parse_body_err(&format!("{header}\n")),
            ParseError::UnknownSection(header.into()),
            "{header}"
        );
    }
}

#[test]
fn test_timing_point_failure_is_fatal() {
    let source = with_header("[TimingPoints]\n0,500,4,1,0,100,1,0\n0,500,4\n");
    let err = error_of(&source);
    assert_eq!(&source[err.range()], "0,500,4");
    assert!(matches!(
        err.into_content(),
        ParseError::InvalidRecordLine {
            section: Section::TimingPoints,
            ..
        }
    ));
}

#[test]
fn test_events_are_lenient_unless_strict() {
    let source = with_header("[Events]\n2,100\n2,100,200\nAnimation,Foreground\n");
    let output = parse_osu(&source).unwrap();
    assert_eq!(output.beatmap.events.len(), 1);
    assert_eq!(
        output
            .warnings
            .iter()
            .map(|w| &source[w.range()])
            .collect::<Vec<_>>(),
        vec!["2,100", "Animation,Foreground"]
    );

    let err = parse_osu_with_config(&source, default_config().strict_events(true)).unwrap_err();
    assert_eq!(&source[err.range()], "2,100");
    assert!(matches!(
        err.into_content(),
        ParseError::InvalidRecordLine {
            section: Section::Events,
            ..
        }
    ));
}

#[test]
fn test_error_display() {
    let err = error_of("osu file format v14\n[Colours]\nCombo9 : 1,2,3\n");
    let message = err.to_string();
    assert!(message.contains("[Colours]"), "{message}");
    assert!(message.contains("at indices [30, 44)"), "{message}");
}
