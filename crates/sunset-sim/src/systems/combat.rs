//! Hitscan combat: ray resolution against boxes, the player and enemies.
//!
//! `cast_ray` only classifies what a ray hits first. Damage is applied
//! separately by `apply_outcome`, according to who fired.

use glam::Vec3;
use log::{debug, info};

use sunset_core::constants::*;
use sunset_core::enums::{RaycastOutcome, Shooter};
use sunset_core::error::SimError;
use sunset_core::types::{heading_of, Ray};

use crate::geometry::{ray_aabb_intersect, ray_sphere_proximity_hit};
use crate::state::SimulationState;

/// Result of one resolved shot, with its effect on the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotReport {
    pub shooter: Shooter,
    pub start: Vec3,
    /// Where the ray stopped: the hit point, or the end of its range.
    pub end: Vec3,
    pub outcome: RaycastOutcome,
    pub damage: f32,
    /// The hit target died from this shot.
    pub killed: bool,
}

/// Find the first thing `ray` hits within `max_distance`.
///
/// The player is tested for every ray; an enemy never targets itself.
/// A box wins only when it is strictly nearer than every target; between
/// the player and an enemy at the same distance the player wins.
pub fn cast_ray(
    state: &SimulationState,
    ray: &Ray,
    max_distance: f32,
    shooter: Shooter,
) -> RaycastOutcome {
    let closest_box = state
        .obstacles
        .iter()
        .filter_map(|obstacle| ray_aabb_intersect(ray.origin, ray.direction, &obstacle.bounds()))
        .filter(|&t| t > 0.0 && t < max_distance)
        .min_by(f32::total_cmp);

    let player_hit = ray_sphere_proximity_hit(
        ray.origin,
        ray.direction,
        state.player.position,
        ENTITY_HIT_RADIUS,
    )
    .filter(|&t| t < max_distance);

    let mut enemy_hit: Option<(usize, f32)> = None;
    for (index, enemy) in state.living_enemies() {
        if shooter == Shooter::Enemy(index) {
            continue;
        }
        let Some(t) = ray_sphere_proximity_hit(
            ray.origin,
            ray.direction,
            enemy.position,
            ENTITY_HIT_RADIUS,
        ) else {
            continue;
        };
        if t < max_distance && enemy_hit.map_or(true, |(_, best)| t < best) {
            enemy_hit = Some((index, t));
        }
    }

    let target = match (player_hit, enemy_hit) {
        (Some(p), Some((_, e))) if p <= e => Some(RaycastOutcome::Player { distance: p }),
        (_, Some((index, e))) => Some(RaycastOutcome::Enemy { index, distance: e }),
        (Some(p), None) => Some(RaycastOutcome::Player { distance: p }),
        (None, None) => None,
    };

    match (closest_box, target) {
        (Some(b), Some(target)) => {
            if target.distance().is_some_and(|t| b < t) {
                RaycastOutcome::Blocked { distance: b }
            } else {
                target
            }
        }
        (Some(b), None) => RaycastOutcome::Blocked { distance: b },
        (None, Some(target)) => target,
        (None, None) => RaycastOutcome::Miss,
    }
}

/// Apply the damage a resolved ray deals and report it.
///
/// Any shot that reaches an enemy hurts it. Only enemy shots hurt the
/// player; a player shot that meets the player is used up harmlessly.
pub fn apply_outcome(
    state: &mut SimulationState,
    shooter: Shooter,
    ray: &Ray,
    max_distance: f32,
    outcome: RaycastOutcome,
) -> ShotReport {
    let mut damage = 0.0;
    let mut killed = false;

    match (shooter, outcome) {
        (_, RaycastOutcome::Enemy { index, .. }) => {
            if let Some(enemy) = state.enemies.get_mut(index).filter(|e| !e.is_dead()) {
                enemy.take_damage(ENEMY_HIT_DAMAGE);
                damage = ENEMY_HIT_DAMAGE;
                killed = enemy.is_dead();
                if killed {
                    info!("Enemy {} (wave {}) killed by {:?}", index, enemy.wave_id, shooter);
                }
            }
        }
        (Shooter::Enemy(_), RaycastOutcome::Player { .. }) => {
            let player = &mut state.player;
            if !player.is_dead() {
                player.take_damage(PLAYER_HIT_DAMAGE);
                damage = PLAYER_HIT_DAMAGE;
                killed = player.is_dead();
            }
        }
        _ => {}
    }

    let end = ray.at(outcome.distance().unwrap_or(max_distance));
    debug!("{shooter:?} shot resolved: {outcome:?}, damage {damage}");

    ShotReport {
        shooter,
        start: ray.origin,
        end,
        outcome,
        damage,
        killed,
    }
}

/// Cast and apply in one step.
pub fn resolve_shot(
    state: &mut SimulationState,
    ray: &Ray,
    max_distance: f32,
    shooter: Shooter,
) -> ShotReport {
    let outcome = cast_ray(state, ray, max_distance, shooter);
    apply_outcome(state, shooter, ray, max_distance, outcome)
}

/// Have enemy `index` turn toward the player and shoot.
///
/// The enemy's attack line is recorded with timestamp `now`.
pub fn enemy_attack(
    state: &mut SimulationState,
    index: usize,
    now: f32,
) -> Result<ShotReport, SimError> {
    let count = state.enemies.len();
    let enemy = state
        .enemies
        .get(index)
        .ok_or(SimError::EnemyIndexOutOfRange { index, count })?;
    if enemy.is_dead() {
        return Err(SimError::EnemyDead { index });
    }

    let origin = enemy.position;
    let to_player = state.player.position - origin;
    let ray = Ray::new(origin, to_player).ok_or(SimError::DegenerateDirection)?;

    let report = resolve_shot(state, &ray, ENEMY_ATTACK_RANGE, Shooter::Enemy(index));

    let enemy = &mut state.enemies[index];
    enemy.rotation_y = heading_of(to_player);
    enemy.refresh_direction_vectors();
    enemy.raycast.start = report.start;
    enemy.raycast.end = report.end;
    enemy.raycast.timestamp = now;
    enemy.raycast.active = true;

    Ok(report)
}

/// Cast from the player's position along its facing, without using the weapon.
pub fn player_raycast(state: &mut SimulationState) -> Option<ShotReport> {
    let ray = Ray::new(state.player.position, state.player.forward)?;
    Some(resolve_shot(state, &ray, PLAYER_SHOT_RANGE, Shooter::Player))
}

/// Count down enemy attack timers; ready enemies within range shoot the player.
pub fn auto_attack(
    state: &mut SimulationState,
    dt: f32,
    now: f32,
    interval: f32,
) -> Vec<ShotReport> {
    let mut reports = Vec::new();
    for index in 0..state.enemies.len() {
        if state.player.is_dead() {
            break;
        }
        let player_position = state.player.position;
        let enemy = &mut state.enemies[index];
        if enemy.is_dead() {
            continue;
        }

        enemy.attack_cooldown = (enemy.attack_cooldown - dt).max(0.0);
        if enemy.attack_cooldown > 0.0
            || enemy.position.distance(player_position) > ENEMY_ATTACK_RANGE
        {
            continue;
        }
        enemy.attack_cooldown = interval;

        match enemy_attack(state, index, now) {
            Ok(report) => reports.push(report),
            Err(err) => debug!("Enemy {index} auto-attack skipped: {err}"),
        }
    }
    reports
}

/// Deactivate enemy attack lines older than their display duration.
pub fn expire_raycast_lines(state: &mut SimulationState, now: f32) {
    for enemy in &mut state.enemies {
        if enemy.raycast.active && now - enemy.raycast.timestamp >= ENEMY_RAYCAST_DURATION {
            enemy.raycast.active = false;
        }
    }
}
