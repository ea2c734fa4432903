use pretty_assertions::assert_eq;

use osu_rs::osu::prelude::*;

fn decimal(text: &str) -> Decimal {
    text.parse().unwrap()
}

#[test]
fn test_standard() {
    let source = include_str!("files/sample_standard.osu");
    let OsuOutput { beatmap, warnings } = parse_osu(source).unwrap();
    assert_eq!(beatmap.version, "14");

    // Storyboard rows are skipped, each with a warning on its own line
    assert_eq!(warnings.len(), 2);
    assert!(
        warnings
            .iter()
            .all(|w| matches!(w.content(), ParseWarning::SkippedEvent(_)))
    );
    assert_eq!(
        &source[warnings[0].range()],
        r#"Sprite,Background,Centre,"sb/star.png",320,240"#
    );
    assert_eq!(&source[warnings[1].range()], " F,0,0,1000,0,1");

    let general = &beatmap.general;
    assert_eq!(general.audio_filename.as_deref(), Some("audio.mp3"));
    assert_eq!(general.audio_lead_in, Some(0));
    assert_eq!(general.preview_time, Some(46235));
    assert_eq!(general.countdown, Some(Countdown::None));
    assert_eq!(general.sample_set, Some(SampleSet::Soft));
    assert_eq!(general.stack_leniency, Some(decimal("0.7")));
    assert_eq!(general.mode, Some(GameMode::Osu));
    assert_eq!(general.letterbox_in_breaks, Some(false));
    assert_eq!(general.skin_preference, None);

    assert_eq!(beatmap.editor.bookmarks, vec![1000, 2000, 3000]);
    assert_eq!(beatmap.editor.distance_spacing, Some(decimal("1.2")));
    assert_eq!(beatmap.editor.grid_size, Some(32));

    let metadata = &beatmap.metadata;
    assert_eq!(metadata.title.as_deref(), Some("Sample Song"));
    assert_eq!(metadata.title_unicode.as_deref(), Some("サンプル曲"));
    assert_eq!(metadata.artist_unicode.as_deref(), Some("サンプルアーティスト"));
    assert_eq!(metadata.version.as_deref(), Some("Hard"));
    assert_eq!(metadata.source.as_deref(), Some(""));
    assert_eq!(metadata.tags, vec!["sample", "test", "osu-rs"]);
    assert_eq!(metadata.beatmap_id, Some(123_456));
    assert_eq!(metadata.beatmap_set_id, Some(654_321));

    let difficulty = &beatmap.difficulty;
    assert_eq!(difficulty.hp_drain_rate, Some(Decimal::from(5u64)));
    assert_eq!(difficulty.overall_difficulty, Some(decimal("7.5")));
    assert_eq!(difficulty.slider_multiplier, Some(decimal("1.4")));

    assert_eq!(
        beatmap.events.as_slice(),
        &[
            Event {
                start_time: 0,
                kind: EventKind::Background {
                    filename: "bg.jpg".into(),
                    x_offset: 0,
                    y_offset: 0,
                },
            },
            Event {
                start_time: -100,
                kind: EventKind::Video {
                    filename: "intro.mp4".into(),
                    x_offset: 0,
                    y_offset: 0,
                },
            },
            Event {
                start_time: 10000,
                kind: EventKind::Break { end_time: 14000 },
            },
        ]
    );

    assert_eq!(beatmap.timing_points.len(), 3);
    assert_eq!(beatmap.uninherited_timing_points().count(), 1);
    assert_eq!(beatmap.timing_points[0].bpm(), Some(120.0));
    assert!(beatmap.timing_points[1].effects.kiai());
    assert_eq!(beatmap.timing_points[2].slider_velocity(), 2.0);

    assert_eq!(
        beatmap.colours.defined_combos().collect::<Vec<_>>(),
        vec![
            Rgb::new(255, 128, 0),
            Rgb::new(0, 202, 0),
            Rgb::new(18, 124, 255)
        ]
    );
    assert_eq!(beatmap.colours.slider_border, Some(Rgb::new(255, 255, 255)));
    assert_eq!(beatmap.colours.slider_track_override, None);

    assert_eq!(beatmap.object_counts(), (2, 2, 1, 0));
    let HitObjectKind::Slider(slider) = &beatmap.hit_objects[1].kind else {
        panic!("expected a slider: {:?}", beatmap.hit_objects[1]);
    };
    assert_eq!(slider.length, decimal("280.000001"));
    assert_eq!(
        slider.edge_sets[0],
        EdgeSet {
            normal_set: SampleSet::Normal,
            addition_set: SampleSet::Soft,
        }
    );
    assert_eq!(
        beatmap.hit_objects[4].hit_sample.filename.as_deref(),
        Some("hit.wav")
    );
}

#[test]
fn test_mania() {
    let source = include_str!("files/sample_mania.osu");
    let OsuOutput { beatmap, warnings } = parse_osu(source).unwrap();
    assert_eq!(warnings, vec![]);

    assert_eq!(beatmap.general.mode, Some(GameMode::Mania));
    assert_eq!(beatmap.general.sample_set, Some(SampleSet::Normal));
    assert_eq!(beatmap.metadata.version.as_deref(), Some("4K"));
    assert_eq!(
        beatmap.timing_points[0].beat_length,
        decimal("333.333333333333")
    );

    let kinds: Vec<_> = beatmap.hit_objects.iter().map(|obj| obj.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            HitObjectKind::Circle,
            HitObjectKind::Hold { end_time: 1500 },
            HitObjectKind::Hold { end_time: 2500 },
            HitObjectKind::Circle,
        ]
    );
    assert_eq!(beatmap.hit_objects[2].hit_sample.volume, 50);
    assert_eq!(beatmap.hit_objects[2].end_time(), 2500);
}

#[test]
fn test_deterministic() {
    let source = include_str!("files/sample_standard.osu");
    assert_eq!(parse_osu(source), parse_osu(source));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_round_trip() {
    let source = include_str!("files/sample_standard.osu");
    let beatmap = parse_osu(source).unwrap().beatmap;
    let json = serde_json::to_string(&beatmap).unwrap();
    let restored: Beatmap = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, beatmap);
}
