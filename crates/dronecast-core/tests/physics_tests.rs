use dronecast_core::physics::{self, BANK_ANGLE, MAX_SPEED_XY, MAX_SPEED_Z};
use dronecast_core::{ControlInput, DroneState, StageConfig, StageOrigin, Vec3};

const DT: f32 = 1.0 / 60.0;

fn flying_state(_stage: &StageConfig) -> DroneState {
    DroneState {
        position: Vec3::new(2.0, -3.0, 4.0),
        velocity: Vec3::new(1.0, 2.0, -0.5),
        pan: 135.0,
        tilt: -10.0,
        roll: 5.0,
    }
}

#[test]
fn emergency_stop_zeroes_velocity_only() {
    let stage = StageConfig::default();
    let prev = flying_state(&stage);
    let input = ControlInput {
        emergency_stop: true,
        pitch: -1.0,
        throttle: 1.0,
        ..ControlInput::neutral()
    };

    let next = physics::step(prev, &stage, &input, DT);
    assert_eq!(next.velocity, Vec3::ZERO);
    assert_eq!(next.position, prev.position);
    assert_eq!(next.pan, prev.pan);
    assert_eq!(next.tilt, prev.tilt);
    assert_eq!(next.roll, prev.roll);
}

#[test]
fn reset_returns_canonical_state_regardless_of_other_inputs() {
    let stage = StageConfig::default();
    let prev = flying_state(&stage);
    let input = ControlInput {
        reset: true,
        yaw: 1.0,
        pitch: -1.0,
        ..ControlInput::neutral()
    };

    let next = physics::step(prev, &stage, &input, DT);
    assert_eq!(next, DroneState::initial(&stage));
}

#[test]
fn pan_wraps_at_360() {
    let stage = StageConfig::default();
    let prev = DroneState {
        pan: 359.9,
        ..DroneState::initial(&stage)
    };
    let input = ControlInput {
        yaw: 1.0,
        ..ControlInput::neutral()
    };

    // 359.9 + 180 deg/s * (1/60) s = 362.9, must wrap into [0, 360)
    let next = physics::step(prev, &stage, &input, DT);
    assert!(next.pan >= 0.0 && next.pan < 360.0, "pan = {}", next.pan);
    assert!((next.pan - 2.9).abs() < 1e-3);

    // Negative yaw from pan 0 wraps the other way
    let prev = DroneState::initial(&stage);
    let input = ControlInput {
        yaw: -1.0,
        ..ControlInput::neutral()
    };
    let next = physics::step(prev, &stage, &input, DT);
    assert!(next.pan >= 0.0 && next.pan < 360.0, "pan = {}", next.pan);
    assert!((next.pan - 357.0).abs() < 1e-3);
}

#[test]
fn throttle_drives_vertical_velocity_directly() {
    let stage = StageConfig::default();
    let input = ControlInput {
        throttle: 0.5,
        ..ControlInput::neutral()
    };
    let next = physics::step(DroneState::initial(&stage), &stage, &input, DT);
    assert!((next.velocity.z - 0.5 * MAX_SPEED_Z).abs() < 1e-5);
}

#[test]
fn forward_displacement_follows_heading() {
    let stage = StageConfig::default();
    let input = ControlInput {
        pitch: -1.0,
        ..ControlInput::neutral()
    };

    // Facing pan 0: one second of full forward stick moves +Y.
    let mut state = DroneState::initial(&stage);
    for _ in 0..60 {
        state = physics::step(state, &stage, &input, DT);
    }
    let forward_y = state.position.y;
    assert!((forward_y - MAX_SPEED_XY).abs() < 1e-3, "y = {}", forward_y);
    assert!(state.position.x.abs() < 1e-3);

    // Facing pan 180: identical stick input moves -Y, same magnitude.
    let mut state = DroneState {
        pan: 180.0,
        ..DroneState::initial(&stage)
    };
    for _ in 0..60 {
        state = physics::step(state, &stage, &input, DT);
    }
    assert!((state.position.y + forward_y).abs() < 1e-3, "y = {}", state.position.y);
}

#[test]
fn boundary_clamp_zeroes_only_the_clamped_axis() {
    let stage = StageConfig {
        origin: StageOrigin::Corner,
        ..StageConfig::cube(10.0)
    };
    let prev = DroneState {
        position: Vec3::new(9.99, 5.0, 5.0),
        ..DroneState::initial(&stage)
    };
    // Full right stick at pan 0 pushes +X into the wall while climbing.
    let input = ControlInput {
        roll: -1.0,
        throttle: 1.0,
        ..ControlInput::neutral()
    };

    let next = physics::step(prev, &stage, &input, DT);
    assert_eq!(next.position.x, 10.0);
    assert_eq!(next.velocity.x, 0.0);
    assert!(next.velocity.z > 0.0, "unclamped axis keeps its velocity");
}

#[test]
fn banking_frames_differ_by_design() {
    let stage = StageConfig::default();
    let input = ControlInput {
        pitch: -1.0,
        ..ControlInput::neutral()
    };

    // Full forward at pan 90 flies along world -X. Tilt reads the
    // body-frame forward velocity (nose down at full deflection); roll
    // reads the world X velocity (full lean the other way).
    let prev = DroneState {
        pan: 90.0,
        ..DroneState::initial(&stage)
    };
    let next = physics::step(prev, &stage, &input, DT);
    assert!((next.tilt + BANK_ANGLE).abs() < 1e-3, "tilt = {}", next.tilt);
    assert!((next.roll - BANK_ANGLE).abs() < 1e-3, "roll = {}", next.roll);

    // At pan 0 the same stick gives the same tilt but no roll: the world
    // X velocity is zero even though the body-frame motion is identical.
    let next = physics::step(DroneState::initial(&stage), &stage, &input, DT);
    assert!((next.tilt + BANK_ANGLE).abs() < 1e-3);
    assert!(next.roll.abs() < 1e-3);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn arb_input() -> impl Strategy<Value = ControlInput> {
        (
            -1.0f32..=1.0,
            -1.0f32..=1.0,
            -1.0f32..=1.0,
            -1.0f32..=1.0,
        )
            .prop_map(|(yaw, throttle, pitch, roll)| ControlInput {
                yaw,
                throttle,
                pitch,
                roll,
                ..ControlInput::neutral()
            })
    }

    fn arb_state(stage: StageConfig) -> impl Strategy<Value = DroneState> {
        let (x0, x1) = stage.bounds_x();
        let (y0, y1) = stage.bounds_y();
        let (z0, z1) = stage.bounds_z();
        (
            x0..=x1,
            y0..=y1,
            z0..=z1,
            0.0f32..360.0,
            -8.0f32..=8.0,
            -8.0f32..=8.0,
            -5.0f32..=5.0,
        )
            .prop_map(move |(x, y, z, pan, vx, vy, vz)| DroneState {
                position: Vec3::new(x, y, z),
                velocity: Vec3::new(vx, vy, vz),
                pan,
                ..DroneState::initial(&stage)
            })
    }

    proptest! {
        #[test]
        fn position_never_leaves_stage(
            state in arb_state(StageConfig::default()),
            input in arb_input(),
            dt in 1e-4f32..=(1.0 / 30.0),
        ) {
            let stage = StageConfig::default();
            let next = dronecast_core::physics::step(state, &stage, &input, dt);
            prop_assert!(stage.contains(next.position), "escaped to {:?}", next.position);
        }

        #[test]
        fn pan_stays_normalized(
            state in arb_state(StageConfig::default()),
            input in arb_input(),
            dt in 1e-4f32..=(1.0 / 30.0),
        ) {
            let stage = StageConfig::default();
            let next = dronecast_core::physics::step(state, &stage, &input, dt);
            prop_assert!(next.pan >= 0.0 && next.pan < 360.0, "pan = {}", next.pan);
        }

        #[test]
        fn banking_stays_inside_deflection_limits(
            state in arb_state(StageConfig::default()),
            input in arb_input(),
            dt in 1e-4f32..=(1.0 / 30.0),
        ) {
            let stage = StageConfig::default();
            let next = dronecast_core::physics::step(state, &stage, &input, dt);
            prop_assert!(next.tilt.abs() <= BANK_ANGLE);
            prop_assert!(next.roll.abs() <= BANK_ANGLE);
        }
    }
}
