use pretty_assertions::assert_eq;

use osu_rs::osu::prelude::*;

use super::{parse_body, parse_body_err};

#[test]
fn test_general_overwrites_duplicates() {
    let beatmap = parse_body(
        "[General]\nAudioLeadIn: 100\nAudioLeadIn: -200\nOverlayPosition: Above\nSamplesMatchPlaybackRate: 1\n",
    );
    assert_eq!(beatmap.general.audio_lead_in, Some(-200));
    assert_eq!(
        beatmap.general.overlay_position,
        Some(OverlayPosition::Above)
    );
    assert_eq!(beatmap.general.samples_match_playback_rate, Some(true));
}

#[test]
fn test_general_key_spelling_is_fixed() {
    for line in ["AudioLeadIn:100", "audioleadin: 100", "Countdown:1", "SampleSet: Default"] {
        assert!(
            matches!(
                parse_body_err(&format!("[General]\n{line}\n")),
                ParseError::InvalidKeyValueLine {
                    section: Section::General,
                    ..
                }
            ),
            "{line}"
        );
    }
}

#[test]
fn test_bookmarks_and_tags() {
    let beatmap = parse_body("[Editor]\nBookmarks: 100,200,300\n[Metadata]\nTags:foo bar baz\n");
    assert_eq!(beatmap.editor.bookmarks, vec![100, 200, 300]);
    assert_eq!(beatmap.metadata.tags, vec!["foo", "bar", "baz"]);

    let beatmap = parse_body("[Editor]\nBookmarks: \n[Metadata]\nTags:\n");
    assert_eq!(beatmap.editor.bookmarks, Vec::<i32>::new());
    assert_eq!(beatmap.metadata.tags, Vec::<String>::new());

    assert!(matches!(
        parse_body_err("[Editor]\nBookmarks: 100,,300\n"),
        ParseError::InvalidKeyValueLine {
            section: Section::Editor,
            ..
        }
    ));
}

#[test]
fn test_metadata_keeps_values_verbatim() {
    let beatmap = parse_body("[Metadata]\nTitle:Title: With Colon\t \nCreator:名前\n");
    assert_eq!(beatmap.metadata.title.as_deref(), Some("Title: With Colon"));
    assert_eq!(beatmap.metadata.creator.as_deref(), Some("名前"));
}

#[test]
fn test_difficulty() {
    let beatmap = parse_body(
        "[Difficulty]\nHPDrainRate:6.5\nCircleSize:4\nOverallDifficulty:8\nApproachRate:9.2\nSliderMultiplier:1.8\nSliderTickRate:2\n",
    );
    let difficulty = beatmap.difficulty;
    assert_eq!(difficulty.hp_drain_rate.as_ref().map(decimal_to_f64), Some(6.5));
    assert_eq!(difficulty.circle_size, Some(Decimal::from(4u64)));
    assert_eq!(difficulty.approach_rate.map(|v| v.to_string()), Some("9.2".into()));
    assert_eq!(difficulty.slider_tick_rate, Some(Decimal::from(2u64)));

    assert!(matches!(
        parse_body_err("[Difficulty]\nCircleSize:four\n"),
        ParseError::InvalidKeyValueLine {
            section: Section::Difficulty,
            ..
        }
    ));
}

#[test]
fn test_colours() {
    let beatmap = parse_body("[Colours]\nCombo1 : 255,0,0\nCombo2 : 0,255,0\n");
    assert_eq!(beatmap.colours.combo(1), Some(Rgb::new(255, 0, 0)));
    assert_eq!(beatmap.colours.combo(2), Some(Rgb::new(0, 255, 0)));
    assert_eq!(beatmap.colours.combo(3), None);

    for line in ["Combo0 : 1,2,3", "Combo9 : 1,2,3", "Combo1 : 1,2", "Combo1 : 1,2,3,4"] {
        assert!(
            matches!(
                parse_body_err(&format!("[Colours]\n{line}\n")),
                ParseError::InvalidKeyValueLine {
                    section: Section::Colours,
                    ..
                }
            ),
            "{line}"
        );
    }
}

#[test]
fn test_sections_may_repeat_and_come_in_any_order() {
    let beatmap = parse_body(
        "[HitObjects]\n256,192,350,1,0,0:0:0:0:\n[Metadata]\nTitle:x\n[HitObjects]\n256,192,700,1,0,0:0:0:0:\n",
    );
    assert_eq!(beatmap.metadata.title.as_deref(), Some("x"));
    assert_eq!(
        beatmap
            .hit_objects
            .iter()
            .map(|obj| obj.time)
            .collect::<Vec<_>>(),
        vec![350, 700]
    );
}

#[test]
fn test_comments_and_blank_lines() {
    let beatmap = parse_body(
        "// leading comment\n\n[Metadata]\n   \n// Title:ignored\n\t\nTitle:kept\n",
    );
    assert_eq!(beatmap.metadata.title.as_deref(), Some("kept"));
}

#[test]
fn test_events_offsets_default_to_zero() {
    let beatmap = parse_body("[Events]\n0,0,bg.png\n0,0,\"bg2.png\",10\n");
    assert_eq!(
        beatmap
            .events
            .iter()
            .map(|event| event.kind.clone())
            .collect::<Vec<_>>(),
        vec![
            EventKind::Background {
                filename: "bg.png".into(),
                x_offset: 0,
                y_offset: 0,
            },
            EventKind::Background {
                filename: "bg2.png".into(),
                x_offset: 10,
                y_offset: 0,
            },
        ]
    );
}

#[test]
fn test_timing_points() {
    let beatmap = parse_body("[TimingPoints]\n0,500,4,1,0,100,1,0\n2000,-200,3,3,2,40,0,9\n");
    let points = beatmap.timing_points.as_slice();
    assert_eq!(points.len(), 2);
    assert_eq!(points[1].meter, 3);
    assert_eq!(points[1].sample_set, SampleSet::Drum);
    assert_eq!(points[1].slider_velocity(), 0.5);
    assert!(points[1].effects.kiai());
    assert!(points[1].effects.omit_first_barline());
}
