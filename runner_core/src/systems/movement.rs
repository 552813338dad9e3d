use crate::{Body, Config};
use hecs::World;

/// Move every scrolling entity left by the scroll speed
pub fn scroll_entities(world: &mut World, config: &Config) {
    for (_entity, body) in world.query_mut::<&mut Body>() {
        body.pos.x -= config.scroll_speed;
    }
}

/// Despawn entities that have fully left the viewport. Returns how many.
pub fn despawn_offscreen(world: &mut World) -> usize {
    let gone: Vec<hecs::Entity> = world
        .query::<&Body>()
        .iter()
        .filter(|(_e, body)| body.is_offscreen_left())
        .map(|(e, _body)| e)
        .collect();

    for entity in &gone {
        let _ = world.despawn(*entity);
    }
    gone.len()
}
