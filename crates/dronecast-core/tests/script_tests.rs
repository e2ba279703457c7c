use dronecast_core::{ControlSource, ScriptEnd, ScriptSegment, ScriptSource};

const DT: f32 = 1.0 / 60.0;

fn segment(duration: f32, pitch: f32) -> ScriptSegment {
    ScriptSegment {
        pitch,
        ..ScriptSegment::hover(duration)
    }
}

#[test]
fn segments_advance_on_schedule() {
    let mut source = ScriptSource::new(
        vec![segment(0.49, -1.0), segment(0.49, 1.0)],
        ScriptEnd::Hold,
        90.0,
    );

    for _ in 0..29 {
        let sample = source.sample(DT);
        assert_eq!(sample.input.pitch, -1.0);
    }
    // 30th tick crosses the 0.49 s boundary
    let sample = source.sample(DT);
    assert_eq!(sample.input.pitch, 1.0);
    assert_eq!(source.current_segment(), 1);
}

#[test]
fn looping_script_wraps_to_first_segment() {
    let mut source = ScriptSource::new(
        vec![segment(0.1, -1.0), segment(0.1, 1.0)],
        ScriptEnd::Loop,
        90.0,
    );

    let mut pitches = Vec::new();
    for _ in 0..30 {
        pitches.push(source.sample(DT).input.pitch);
    }
    // Half a second of playback covers both segments more than once.
    assert!(pitches.contains(&-1.0) && pitches.contains(&1.0));
    let flips = pitches.windows(2).filter(|w| w[0] != w[1]).count();
    assert!(flips >= 3, "script did not loop (flips = {flips})");
}

#[test]
fn hold_keeps_last_axes_without_reentering() {
    let mut source = ScriptSource::new(vec![segment(0.05, 0.75)], ScriptEnd::Hold, 90.0);
    for _ in 0..20 {
        let sample = source.sample(DT);
        assert_eq!(sample.input.pitch, 0.75);
    }
}

#[test]
fn events_fire_once_per_segment_entry() {
    let reset_segment = ScriptSegment {
        reset: true,
        ..ScriptSegment::hover(0.5)
    };
    let mut source = ScriptSource::new(
        vec![segment(0.1, -1.0), reset_segment],
        ScriptEnd::Hold,
        90.0,
    );

    let mut resets = 0;
    for _ in 0..60 {
        if source.sample(DT).input.reset {
            resets += 1;
        }
    }
    assert_eq!(resets, 1);
}

#[test]
fn axes_and_fov_are_saturated_at_load() {
    let wild = ScriptSegment {
        pitch: -5.0,
        yaw: 3.0,
        fov: Some(500.0),
        ..ScriptSegment::hover(1.0)
    };
    let mut source = ScriptSource::new(vec![wild], ScriptEnd::Hold, 90.0);
    let sample = source.sample(DT);
    assert_eq!(sample.input.pitch, -1.0);
    assert_eq!(sample.input.yaw, 1.0);
    assert_eq!(sample.fov, 120.0);
}

#[test]
fn empty_script_hovers_at_default_fov() {
    let mut source = ScriptSource::new(Vec::new(), ScriptEnd::Loop, 75.0);
    let sample = source.sample(DT);
    assert_eq!(sample.input.pitch, 0.0);
    assert_eq!(sample.fov, 75.0);
}
