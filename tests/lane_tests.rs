//! Lane car-following and stop-line behavior

use intersection_sim::simulation::{
    Axis, Direction, Lane, LaneConfig, LightState, Vehicle, VehicleId, GAP_REQUIRED,
    VEHICLE_LENGTH,
};

const EPSILON: f64 = 1e-9;

fn test_lane() -> Lane {
    Lane::new(
        Axis::Horizontal,
        LaneConfig::new(Direction::Forward),
        GAP_REQUIRED,
    )
}

fn vehicle(id: usize, position: f64, max_speed: f64) -> Vehicle {
    Vehicle::new(VehicleId(id), position, VEHICLE_LENGTH, max_speed)
}

fn positions(lane: &Lane) -> Vec<f64> {
    lane.vehicles().iter().map(|v| v.position).collect()
}

#[test]
fn test_empty_lane_is_noop() {
    let mut lane = test_lane();
    let update = lane.advance(1.0, 1.0, LightState::Red);
    assert!(lane.is_empty());
    assert_eq!(update.moved, 0);
    assert!(update.despawned.is_empty());
}

#[test]
fn test_green_light_moves_full_step() {
    let mut lane = test_lane();
    lane.push_back(vehicle(0, -0.5, 0.005)).unwrap();

    let update = lane.advance(2.0, 1.5, LightState::Green);

    assert_eq!(update.moved, 1);
    let expected = -0.5 + 0.005 * 2.0 * 1.5;
    assert!((lane.vehicles()[0].position - expected).abs() < EPSILON);
    assert_eq!(lane.vehicles()[0].current_speed, 0.005);
}

#[test]
fn test_red_light_holds_vehicle_at_stop_line() {
    let mut lane = test_lane();
    // Front at -0.02, already inside the stop-line zone
    lane.push_back(vehicle(0, -0.2, 0.005)).unwrap();

    let update = lane.advance(1.0, 1.0, LightState::Red);

    assert_eq!(update.held_at_stop_line, 1);
    assert_eq!(positions(&lane), vec![-0.2]);
    assert!(lane.vehicles()[0].is_stopped());
}

#[test]
fn test_vehicle_approaches_red_light_then_stops() {
    let mut lane = test_lane();
    lane.push_back(vehicle(0, -1.0, 0.01)).unwrap();
    let stop_line = lane.stop_line();

    for _ in 0..500 {
        let before = lane.vehicles()[0].front();
        lane.advance(1.0, 1.0, LightState::Red);
        let after = lane.vehicles()[0].front();
        if before < stop_line {
            assert!(after <= stop_line, "ran the red light: {} -> {}", before, after);
        }
    }

    let front = lane.vehicles()[0].front();
    assert!(front < stop_line - GAP_REQUIRED);
    // Parked within one step of the hold zone
    assert!(front + 0.01 + EPSILON >= stop_line - GAP_REQUIRED);
}

#[test]
fn test_vehicle_straddling_stop_line_is_held_by_red() {
    let mut lane = test_lane();
    // Front at 0.06, inside the crossing
    lane.push_back(vehicle(0, -0.12, 0.005)).unwrap();
    assert!(!lane.has_cleared_intersection(&lane.vehicles()[0]));

    for _ in 0..100 {
        lane.advance(1.0, 1.0, LightState::Red);
    }
    assert_eq!(positions(&lane), vec![-0.12]);

    lane.advance(1.0, 1.0, LightState::Green);
    assert!((lane.vehicles()[0].position - (-0.115)).abs() < EPSILON);
}

#[test]
fn test_vehicle_inside_crossing_is_held_by_red() {
    let mut lane = test_lane();
    lane.push_back(vehicle(0, 0.05, 0.005)).unwrap();

    let update = lane.advance(1.0, 1.0, LightState::Red);

    assert_eq!(update.held_at_stop_line, 1);
    assert_eq!(positions(&lane), vec![0.05]);
}

#[test]
fn test_vehicle_past_intersection_exit_ignores_red() {
    let mut lane = test_lane();
    let exit = lane.config().intersection_exit;
    lane.push_back(vehicle(0, exit + 0.01, 0.005)).unwrap();
    assert!(lane.has_cleared_intersection(&lane.vehicles()[0]));

    let update = lane.advance(1.0, 1.0, LightState::Red);

    assert_eq!(update.moved, 1);
    assert!((lane.vehicles()[0].position - (exit + 0.015)).abs() < EPSILON);
}

#[test]
fn test_lead_in_crossing_holds_follower_on_red() {
    let mut lane = test_lane();
    lane.push_back(vehicle(0, -0.05, 0.005)).unwrap();
    lane.push_back(vehicle(1, -0.3, 0.005)).unwrap();

    let update = lane.advance(1.0, 1.0, LightState::Red);

    assert_eq!(update.moved, 0);
    assert_eq!(positions(&lane), vec![-0.05, -0.3]);
    assert!(lane.vehicles().iter().all(|v| v.is_stopped()));
}

#[test]
fn test_follower_blocked_by_stationary_leader() {
    let mut lane = test_lane();
    // Leader straddles the stop line and is held by the red light
    lane.push_back(vehicle(0, -0.15, 0.005)).unwrap();
    // Follower front at -0.2025: clear of the stop-line zone, one step from the gap
    lane.push_back(vehicle(1, -0.3825, 0.005)).unwrap();

    let update = lane.advance(1.0, 1.0, LightState::Red);

    assert_eq!(update.held_at_stop_line, 1);
    assert_eq!(update.held_by_vehicle_ahead, 1);
    assert_eq!(positions(&lane), vec![-0.15, -0.3825]);
}

#[test]
fn test_follower_moves_when_gap_allows() {
    let mut lane = test_lane();
    lane.push_back(vehicle(0, 0.3, 0.005)).unwrap();
    lane.push_back(vehicle(1, -0.5, 0.005)).unwrap();

    let update = lane.advance(1.0, 1.0, LightState::Green);

    assert_eq!(update.moved, 2);
    assert!((lane.vehicles()[1].position - (-0.495)).abs() < EPSILON);
}

#[test]
fn test_fast_follower_never_overlaps_slow_leader() {
    let mut lane = test_lane();
    lane.push_back(vehicle(0, -0.6, 0.002)).unwrap();
    lane.push_back(vehicle(1, -1.0, 0.009)).unwrap();
    lane.push_back(vehicle(2, -1.25, 0.009)).unwrap();

    for tick in 0..1000 {
        let light = if (tick / 150) % 2 == 0 {
            LightState::Green
        } else {
            LightState::Red
        };
        lane.advance(1.0, 2.0, light);

        for pair in lane.vehicles().windows(2) {
            let (ahead, behind) = (&pair[0], &pair[1]);
            assert!(
                behind.position + behind.length <= ahead.position - GAP_REQUIRED,
                "overlap at tick {}: {:?} behind {:?}",
                tick,
                behind,
                ahead
            );
        }
    }
}

#[test]
fn test_despawn_removes_exactly_passed_vehicles() {
    let mut lane = test_lane();
    let bound = lane.config().despawn_bound;
    lane.push_back(vehicle(0, bound - 0.001, 0.005)).unwrap();
    lane.push_back(vehicle(1, 0.5, 0.005)).unwrap();
    lane.push_back(vehicle(2, 0.0, 0.005)).unwrap();

    let update = lane.advance(1.0, 1.0, LightState::Green);

    assert_eq!(update.despawned, vec![VehicleId(0)]);
    assert_eq!(lane.len(), 2);
    let ids: Vec<VehicleId> = lane.vehicles().iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![VehicleId(1), VehicleId(2)]);

    // Nothing else passes on the next tick
    let update = lane.advance(1.0, 1.0, LightState::Green);
    assert!(update.despawned.is_empty());
    assert_eq!(lane.len(), 2);
}

#[test]
fn test_push_back_rejects_overlap() {
    let mut lane = test_lane();
    lane.push_back(vehicle(0, -0.5, 0.005)).unwrap();

    // Front would sit inside the required gap
    assert!(lane.push_back(vehicle(1, -0.6, 0.005)).is_err());
    // Ahead of the tail
    assert!(lane.push_back(vehicle(2, 0.0, 0.005)).is_err());
    assert_eq!(lane.len(), 1);

    assert!(lane.push_back(vehicle(3, -0.75, 0.005)).is_ok());
    assert_eq!(lane.len(), 2);
}

#[test]
fn test_new_vehicle_is_not_queued() {
    let mut lane = test_lane();
    lane.push_back(vehicle(0, -1.0, 0.005)).unwrap();

    assert!(!lane.vehicles()[0].is_stopped());
    assert_eq!(lane.queued(), 0);
}

#[test]
fn test_zero_delta_moves_nothing() {
    let mut lane = test_lane();
    lane.push_back(vehicle(0, -0.5, 0.005)).unwrap();
    lane.advance(0.0, 1.0, LightState::Green);
    assert_eq!(positions(&lane), vec![-0.5]);
}
