use crate::{obstacles_in_order, Aabb, Config, Player};
use hecs::{Entity, World};

/// Player hitbox versus an object's full bounds.
///
/// The hitbox is the player's box inset by `padding` on every side. A player
/// falling onto an object whose hitbox bottom is still above the object's top
/// is never reported as a hit.
pub fn collides_with(player: &Player, object: &Aabb, padding: f32) -> bool {
    let hitbox = player.hitbox(padding);

    // Explicit falling guard; strict overlap alone already rejects this case
    if player.velocity_y > 0.0 && hitbox.max.y < object.min.y {
        return false;
    }

    hitbox.overlaps(object)
}

/// First obstacle (in spawn order) the player is touching
pub fn find_obstacle_hit(world: &World, player: &Player, config: &Config) -> Option<Entity> {
    obstacles_in_order(world)
        .into_iter()
        .find(|(_e, _kind, body)| collides_with(player, &body.bounds(), config.hitbox_padding))
        .map(|(e, _kind, _body)| e)
}
