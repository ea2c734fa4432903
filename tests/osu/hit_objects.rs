use pretty_assertions::assert_eq;

use osu_rs::osu::prelude::*;

use super::{parse_body, parse_body_err};

fn single(line: &str) -> HitObject {
    let beatmap = parse_body(&format!("[HitObjects]\n{line}\n"));
    assert_eq!(beatmap.hit_objects.len(), 1);
    beatmap.hit_objects.into_vec().remove(0)
}

#[test]
fn test_circle() {
    assert_eq!(
        single("256,192,350,1,0,0:0:0:0:"),
        HitObject {
            x: 256,
            y: 192,
            time: 350,
            object_type: HitObjectType(HitObjectType::CIRCLE),
            hit_sound: HitSound::default(),
            kind: HitObjectKind::Circle,
            hit_sample: HitSample::default(),
        }
    );
}

#[test]
fn test_slider() {
    let object = single("96,64,1200,2,0,B|100:100|200:50,1,150.0,0|0,0:0|0:0,0:0:0:0:");
    assert_eq!(
        object.kind,
        HitObjectKind::Slider(SliderParams {
            curve_type: CurveType::Bezier,
            curve_points: vec![Point::new(100, 100), Point::new(200, 50)],
            slides: 1,
            length: "150.0".parse().unwrap(),
            edge_sounds: vec![HitSound(0), HitSound(0)],
            edge_sets: vec![EdgeSet::default(), EdgeSet::default()],
        })
    );
}

#[test]
fn test_every_curve_type() {
    for (letter, curve_type) in [
        ('B', CurveType::Bezier),
        ('C', CurveType::CentripetalCatmullRom),
        ('L', CurveType::Linear),
        ('P', CurveType::PerfectCircle),
    ] {
        let object = single(&format!(
            "0,0,0,2,0,{letter}|10:-10,3,70.5,2|8|0|4,1:0|2:0|3:0|0:3,0:0:0:0:"
        ));
        let HitObjectKind::Slider(params) = object.kind else {
            panic!("expected a slider for {letter}");
        };
        assert_eq!(params.curve_type, curve_type);
        assert_eq!(params.curve_points, vec![Point::new(10, -10)]);
        assert_eq!(params.slides, 3);
        assert_eq!(params.edge_sounds.len(), 4);
        assert_eq!(params.edge_sets[3].addition_set, SampleSet::Drum);
    }
}

#[test]
fn test_spinner_and_hold() {
    assert_eq!(
        single("256,192,3000,12,0,4500,0:0:0:0:").kind,
        HitObjectKind::Spinner { end_time: 4500 }
    );
    assert_eq!(
        single("64,192,3000,128,0,3400:0:0:0:0:").kind,
        HitObjectKind::Hold { end_time: 3400 }
    );
}

#[test]
fn test_combo_bits() {
    let object = single("256,192,350,53,0,0:0:0:0:");
    assert!(object.object_type.is_new_combo());
    assert_eq!(object.object_type.combo_skip(), 3);
}

#[test]
fn test_hit_sample_filenames() {
    assert_eq!(
        single(r#"0,0,0,1,0,0:0:0:0:"quoted.wav""#).hit_sample.filename,
        Some("quoted.wav".into())
    );
    assert_eq!(
        single("0,0,0,1,0,0:0:0:0:bare file.wav  ").hit_sample.filename,
        Some("bare file.wav".into())
    );
    assert_eq!(
        single(r#"0,0,0,1,0,0:0:0:0:"""#).hit_sample.filename,
        None
    );
}

#[test]
fn test_type_must_have_one_kind_bit() {
    for object_type in [0, 4, 3, 9, 10, 129, 139] {
        assert!(
            matches!(
                parse_body_err(&format!(
                    "[HitObjects]\n256,192,350,{object_type},0,0:0:0:0:\n"
                )),
                ParseError::InvalidHitObjectPayload(_)
            ),
            "{object_type}"
        );
    }
}

#[test]
fn test_malformed_rows_fail_the_parse() {
    assert!(matches!(
        parse_body_err("[HitObjects]\n256,abc,350,1,0,0:0:0:0:\n"),
        ParseError::InvalidRecordLine {
            section: Section::HitObjects,
            ..
        }
    ));
    assert!(matches!(
        parse_body_err("[HitObjects]\n96,64,1200,2,0,Z|100:100,1,150,0|0,0:0|0:0,0:0:0:0:\n"),
        ParseError::InvalidHitObjectPayload(_)
    ));
    assert!(matches!(
        parse_body_err("[HitObjects]\n256,192,350,1,0,0:9:0:0:\n"),
        ParseError::InvalidHitObjectPayload(_)
    ));
}
