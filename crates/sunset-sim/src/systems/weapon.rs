//! Magazine, cooldown and reload handling for the player's weapon.

use sunset_core::components::Player;
use sunset_core::types::Ray;

use super::player_movement::aim_ray;

/// Consume one round if the weapon is ready and return the ray the shot travels.
///
/// Returns `None` (and changes nothing) when the magazine is empty, the
/// cooldown is running, a reload is in progress, or the aim is degenerate.
pub fn try_fire(player: &mut Player) -> Option<Ray> {
    if player.magazine_ammo == 0 || player.shoot_cooldown > 0.0 || player.is_reloading {
        return None;
    }
    let ray = aim_ray(player)?;
    player.magazine_ammo -= 1;
    player.shoot_cooldown = player.shoot_cooldown_time;
    Some(ray)
}

/// Begin a reload. Refused while already reloading or with a full magazine.
pub fn start_reload(player: &mut Player) -> bool {
    if player.is_reloading || player.magazine_ammo >= player.magazine_size {
        return false;
    }
    player.is_reloading = true;
    player.reload_time = player.reload_time_total;
    true
}

/// Count down the cooldown and reload timers. Returns true when a reload finished this tick.
pub fn update_timers(player: &mut Player, dt: f32) -> bool {
    player.shoot_cooldown = (player.shoot_cooldown - dt).max(0.0);

    if !player.is_reloading {
        return false;
    }
    player.reload_time -= dt;
    if player.reload_time <= 0.0 {
        player.magazine_ammo = player.magazine_size;
        player.is_reloading = false;
        player.reload_time = 0.0;
        return true;
    }
    false
}

/// Fraction of the running reload that has elapsed, 0.0 when idle.
pub fn reload_progress(player: &Player) -> f32 {
    if !player.is_reloading || player.reload_time_total <= 0.0 {
        return 0.0;
    }
    (1.0 - player.reload_time / player.reload_time_total).clamp(0.0, 1.0)
}
