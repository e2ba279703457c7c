use dronecast_core::{to_output, DroneState, StageConfig, Vec3};

#[test]
fn axes_and_rotations_remap_to_console_convention() {
    let stage = StageConfig::default();
    let state = DroneState {
        position: Vec3::new(1.0, 2.0, 3.0),
        pan: 10.0,
        tilt: 20.0,
        roll: 30.0,
        ..DroneState::initial(&stage)
    };

    let pose = to_output(&state, 90.0);
    assert_eq!(pose.x, 1.0);
    assert_eq!(pose.y, 3.0); // height becomes the console's up axis
    assert_eq!(pose.z, 2.0);
    assert_eq!(pose.pan, 20.0); // pan/tilt swapped
    assert_eq!(pose.tilt, 10.0);
    assert_eq!(pose.roll, 210.0); // roll offset by 180
    assert_eq!(pose.fov, 90.0);
}

#[test]
fn negative_banking_normalizes_into_rotation_domain() {
    let stage = StageConfig::default();
    let state = DroneState {
        tilt: -20.0,
        roll: -30.0,
        ..DroneState::initial(&stage)
    };

    let pose = to_output(&state, 90.0);
    assert_eq!(pose.pan, 340.0);
    assert_eq!(pose.roll, 150.0);
    assert!(pose.pan >= 0.0 && pose.pan < 360.0);
    assert!(pose.roll >= 0.0 && pose.roll < 360.0);
}

#[test]
fn zero_state_maps_to_console_rest_pose() {
    let stage = StageConfig::default();
    let pose = to_output(&DroneState::initial(&stage), 45.0);
    assert_eq!((pose.x, pose.y, pose.z), (0.0, 0.0, 0.0));
    assert_eq!(pose.tilt, 0.0);
    assert_eq!(pose.roll, 180.0); // rest roll sits at the 180 offset
    assert_eq!(pose.fov, 45.0);
}
