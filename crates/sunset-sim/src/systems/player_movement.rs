//! Player locomotion and camera control.
//!
//! Movement is camera-relative: in third person the basis is the horizontal
//! look direction of the orbit camera, in first person it is the yaw.
//! A step that would leave the arena or touch a box is dropped for the tick.

use glam::Vec3;

use sunset_core::components::Player;
use sunset_core::constants::*;
use sunset_core::enums::{CameraMode, MovementState};
use sunset_core::types::{forward_from_heading, heading_of, horizontal, Ray};

use crate::geometry::{inside_map, sphere_aabb_overlap};
use crate::state::SimulationState;

/// Advance the player by one tick of held input.
pub fn run(state: &mut SimulationState, dt: f32) {
    let player = &mut state.player;
    update_movement_state(player);

    let forward = movement_forward(player);
    if forward.length() > DIRECTION_EPSILON {
        player.rotation_y = heading_of(forward);
    }
    let right = forward.cross(Vec3::Y).normalize_or_zero();

    let input = player.input;
    let mut direction = Vec3::ZERO;
    if input.forward {
        direction += forward;
    }
    if input.backward {
        direction -= forward;
    }
    if input.right {
        direction += right;
    }
    if input.left {
        direction -= right;
    }

    if direction.length() > DIRECTION_EPSILON && player.current_speed > 0.0 {
        let candidate =
            player.position + direction.normalize() * (player.current_speed * dt);
        let blocked = !inside_map(candidate)
            || state.obstacles.iter().any(|obstacle| {
                sphere_aabb_overlap(candidate, PLAYER_COLLISION_RADIUS, &obstacle.bounds())
            });
        if !blocked {
            player.position = candidate;
        }
    }

    player.refresh_direction_vectors();
}

/// Derive the locomotion state and speed from the held flags.
pub fn update_movement_state(player: &mut Player) {
    let (movement_state, speed) = if !player.input.any_direction() {
        (MovementState::Idle, 0.0)
    } else if player.input.running {
        (MovementState::Running, player.run_speed)
    } else {
        (MovementState::Walking, player.walk_speed)
    };
    player.movement_state = movement_state;
    player.current_speed = speed;
}

/// Horizontal forward vector of the movement basis, normalized (or zero).
fn movement_forward(player: &Player) -> Vec3 {
    match player.camera_mode {
        CameraMode::ThirdPerson => {
            horizontal(camera_look_at(player) - camera_position(player)).normalize_or_zero()
        }
        CameraMode::FirstPerson => forward_from_heading(player.first_person.yaw),
    }
}

/// Orbit camera position in third person.
pub fn camera_position(player: &Player) -> Vec3 {
    let cam = &player.third_person;
    let (h, v, d) = (cam.angle_horizontal, cam.angle_vertical, cam.distance);
    player.position
        + Vec3::new(
            d * v.cos() * h.sin(),
            cam.height + d * v.sin(),
            d * v.cos() * h.cos(),
        )
}

/// Point the third-person camera looks at: above the model's center.
pub fn camera_look_at(player: &Player) -> Vec3 {
    player.position - player.model_center * PLAYER_SCALE
        + Vec3::new(0.0, player.third_person.height, 0.0)
}

pub fn eye_position(player: &Player) -> Vec3 {
    player.position + Vec3::new(0.0, FIRST_PERSON_EYE_HEIGHT, 0.0)
}

/// Unit view direction of the first-person camera.
pub fn first_person_forward(player: &Player) -> Vec3 {
    let (yaw, pitch) = (player.first_person.yaw, player.first_person.pitch);
    Vec3::new(
        pitch.cos() * yaw.sin(),
        pitch.sin(),
        -pitch.cos() * yaw.cos(),
    )
}

/// Camera position and look-at point for the active mode.
pub fn view(player: &Player) -> (Vec3, Vec3) {
    match player.camera_mode {
        CameraMode::ThirdPerson => (camera_position(player), camera_look_at(player)),
        CameraMode::FirstPerson => {
            let eye = eye_position(player);
            (eye, eye + first_person_forward(player))
        }
    }
}

/// The ray a shot travels along, or `None` if the view vector is degenerate.
pub fn aim_ray(player: &Player) -> Option<Ray> {
    let (origin, look_at) = view(player);
    Ray::new(origin, look_at - origin)
}

/// Apply a mouse movement in screen pixels.
pub fn look(player: &mut Player, dx: f32, dy: f32) {
    match player.camera_mode {
        CameraMode::ThirdPerson => {
            let cam = &mut player.third_person;
            cam.angle_horizontal -= CAMERA_SENSITIVITY * dx;
            cam.angle_vertical = (cam.angle_vertical + CAMERA_SENSITIVITY * dy)
                .clamp(CAMERA_MIN_VERTICAL_ANGLE, CAMERA_MAX_VERTICAL_ANGLE);
        }
        CameraMode::FirstPerson => {
            let cam = &mut player.first_person;
            cam.yaw += CAMERA_SENSITIVITY * dx;
            cam.pitch = (cam.pitch - CAMERA_SENSITIVITY * dy)
                .clamp(-FIRST_PERSON_MAX_PITCH, FIRST_PERSON_MAX_PITCH);
        }
    }
}

/// Scroll zoom for the orbit camera. Positive offsets move it closer.
pub fn zoom(player: &mut Player, offset: f32) {
    let cam = &mut player.third_person;
    cam.distance = (cam.distance - CAMERA_ZOOM_STEP * offset)
        .clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
}

/// Set absolute first-person look angles.
pub fn aim_at(player: &mut Player, yaw: f32, pitch: f32) {
    player.first_person.yaw = yaw;
    player.first_person.pitch = pitch.clamp(-FIRST_PERSON_MAX_PITCH, FIRST_PERSON_MAX_PITCH);
}

pub fn set_camera_mode(player: &mut Player, mode: CameraMode) {
    if mode == CameraMode::FirstPerson && player.camera_mode != CameraMode::FirstPerson {
        player.first_person.yaw = player.rotation_y;
        player.first_person.pitch = 0.0;
    }
    player.camera_mode = mode;
}

#[cfg(test)]
mod tests {
    use super::*;
    use sunset_core::components::{MovementInput, Obstacle};
    use sunset_core::types::ModelBounds;

    fn open_arena() -> SimulationState {
        let mut state = SimulationState::new(&ModelBounds::default());
        state.obstacles.clear();
        state
    }

    #[test]
    fn test_idle_without_input() {
        let mut state = open_arena();
        let start = state.player.position;
        run(&mut state, 0.1);
        assert_eq!(state.player.movement_state, MovementState::Idle);
        assert_eq!(state.player.current_speed, 0.0);
        assert_eq!(state.player.position, start);
    }

    #[test]
    fn test_walk_forward_first_person() {
        let mut state = open_arena();
        set_camera_mode(&mut state.player, CameraMode::FirstPerson);
        state.player.input = MovementInput {
            forward: true,
            ..Default::default()
        };
        let start = state.player.position;
        run(&mut state, 0.1);

        assert_eq!(state.player.movement_state, MovementState::Walking);
        let moved = state.player.position - start;
        // Yaw 0 faces -Z; walk speed 2.0 for 0.1 s.
        assert!((moved - Vec3::new(0.0, 0.0, -0.2)).length() < 1e-5);
    }

    #[test]
    fn test_run_strafe_right_first_person() {
        let mut state = open_arena();
        set_camera_mode(&mut state.player, CameraMode::FirstPerson);
        state.player.input = MovementInput {
            right: true,
            running: true,
            ..Default::default()
        };
        let start = state.player.position;
        run(&mut state, 0.1);
        assert_eq!(state.player.movement_state, MovementState::Running);
        assert!((state.player.position - start - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_third_person_walks_away_from_camera() {
        let mut state = open_arena();
        state.player.model_center = Vec3::ZERO;
        state.player.input = MovementInput {
            forward: true,
            ..Default::default()
        };
        let start = state.player.position;
        run(&mut state, 0.1);
        // Default orbit sits on +Z, so forward is -Z.
        let moved = state.player.position - start;
        assert!(moved.z < -0.19 && moved.x.abs() < 1e-5);
        assert!(state.player.rotation_y.abs() < 1e-5);
    }

    #[test]
    fn test_box_blocks_movement() {
        let mut state = open_arena();
        set_camera_mode(&mut state.player, CameraMode::FirstPerson);
        let p = state.player.position;
        state
            .obstacles
            .push(Obstacle::new(Vec3::new(p.x, BOX_SPAWN_Y, p.z - 2.0), 0.0, Vec3::splat(0.5)));
        state.player.input = MovementInput {
            forward: true,
            ..Default::default()
        };
        // Box reaches to z - 2 + 0.707, so the player stops short of it.
        for _ in 0..20 {
            run(&mut state, 0.1);
        }
        let gap = state.player.position.z - (p.z - 2.0 + 0.5f32.hypot(0.5));
        assert!(gap >= PLAYER_COLLISION_RADIUS - 1e-4, "gap {gap}");
        assert!(state.player.position.z < p.z);
    }

    #[test]
    fn test_map_edge_blocks_movement() {
        let mut state = open_arena();
        set_camera_mode(&mut state.player, CameraMode::FirstPerson);
        state.player.position = Vec3::new(0.0, GROUND_Y, MAP_MIN_Z + 0.1);
        state.player.input = MovementInput {
            forward: true,
            running: true,
            ..Default::default()
        };
        run(&mut state, 0.1);
        assert_eq!(state.player.position.z, MAP_MIN_Z + 0.1);
    }

    #[test]
    fn test_look_clamps_vertical_angle() {
        let mut player = Player::new(Vec3::ZERO, Vec3::ZERO);
        look(&mut player, 100.0, 10_000.0);
        assert_eq!(player.third_person.angle_vertical, CAMERA_MAX_VERTICAL_ANGLE);
        assert!((player.third_person.angle_horizontal - -0.3).abs() < 1e-6);
        look(&mut player, 0.0, -10_000.0);
        assert_eq!(player.third_person.angle_vertical, CAMERA_MIN_VERTICAL_ANGLE);
    }

    #[test]
    fn test_first_person_look() {
        let mut player = Player::new(Vec3::ZERO, Vec3::ZERO);
        set_camera_mode(&mut player, CameraMode::FirstPerson);
        look(&mut player, 100.0, 100.0);
        assert!((player.first_person.yaw - 0.3).abs() < 1e-6);
        assert!((player.first_person.pitch - -0.3).abs() < 1e-6);
        look(&mut player, 0.0, -100_000.0);
        assert_eq!(player.first_person.pitch, FIRST_PERSON_MAX_PITCH);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut player = Player::new(Vec3::ZERO, Vec3::ZERO);
        zoom(&mut player, 5.0);
        assert!((player.third_person.distance - 2.5).abs() < 1e-6);
        zoom(&mut player, 1000.0);
        assert_eq!(player.third_person.distance, CAMERA_MIN_DISTANCE);
        zoom(&mut player, -1000.0);
        assert_eq!(player.third_person.distance, CAMERA_MAX_DISTANCE);
    }

    #[test]
    fn test_switching_to_first_person_seeds_yaw() {
        let mut player = Player::new(Vec3::ZERO, Vec3::ZERO);
        player.rotation_y = 1.2;
        player.first_person.pitch = 0.4;
        set_camera_mode(&mut player, CameraMode::FirstPerson);
        assert_eq!(player.first_person.yaw, 1.2);
        assert_eq!(player.first_person.pitch, 0.0);

        // Re-selecting the same mode keeps the angles.
        aim_at(&mut player, 0.5, 0.1);
        set_camera_mode(&mut player, CameraMode::FirstPerson);
        assert_eq!(player.first_person.yaw, 0.5);
    }

    #[test]
    fn test_camera_position_formula() {
        let mut player = Player::new(Vec3::ZERO, Vec3::ZERO);
        player.third_person.angle_vertical = 0.0;
        let cam = camera_position(&player);
        assert!((cam - Vec3::new(0.0, CAMERA_DEFAULT_HEIGHT, CAMERA_DEFAULT_DISTANCE)).length() < 1e-5);
        assert_eq!(camera_look_at(&player), Vec3::new(0.0, CAMERA_DEFAULT_HEIGHT, 0.0));
    }

    #[test]
    fn test_first_person_aim_ray() {
        let mut player = Player::new(Vec3::ZERO, Vec3::ZERO);
        set_camera_mode(&mut player, CameraMode::FirstPerson);
        aim_at(&mut player, std::f32::consts::FRAC_PI_2, 0.0);
        let ray = aim_ray(&player).unwrap();
        assert_eq!(ray.origin, Vec3::new(0.0, FIRST_PERSON_EYE_HEIGHT, 0.0));
        assert!((ray.direction - Vec3::X).length() < 1e-5);
    }
}
