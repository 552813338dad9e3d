use crate::{
    collectibles_in_order, collides_with, find_obstacle_hit, CollectibleKind, Config, Events,
    Player, Score,
};
use hecs::World;
use tracing::debug;

/// Collect every collectible the player is touching and add its points.
/// Each collection is walked newest-first.
pub fn collect_pickups(
    world: &mut World,
    player: &Player,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    for kind in CollectibleKind::ALL {
        for (entity, body) in collectibles_in_order(world, kind).into_iter().rev() {
            if collides_with(player, &body.bounds(), config.hitbox_padding) {
                let _ = world.despawn(entity);
                score.add(kind.points());
                events.collected.push(kind);
                debug!(?kind, score = score.points, "collected");
            }
        }
    }
}

/// Collision pass for one tick. An obstacle hit is fatal and ends the pass
/// before any pickups are counted. Returns true on a fatal hit.
pub fn resolve_collisions(
    world: &mut World,
    player: &Player,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) -> bool {
    if find_obstacle_hit(world, player, config).is_some() {
        events.game_over = Some(score.points);
        return true;
    }

    collect_pickups(world, player, config, score, events);
    false
}
