pub mod assets;
pub mod components;
pub mod config;
pub mod error;
pub mod fsm;
pub mod params;
pub mod player;
pub mod render;
pub mod resources;
pub mod scheduler;
pub mod session;
pub mod systems;

pub use assets::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use fsm::*;
pub use params::*;
pub use player::*;
pub use render::*;
pub use resources::*;
pub use scheduler::*;
pub use session::*;
pub use systems::*;

use glam::Vec2;
use hecs::{Entity, World};

/// Helper to create a scrolling entity of the given kind
pub fn create_entity(
    world: &mut World,
    kind: EntityKind,
    pos: Vec2,
    counter: &mut SpawnCounter,
) -> Entity {
    let body = Body::new(pos, kind.spec().size);
    let order = counter.next_order();
    match kind {
        EntityKind::Obstacle(kind) => world.spawn((body, Obstacle { kind }, order)),
        EntityKind::Collectible(kind) => world.spawn((body, Collectible { kind }, order)),
    }
}

/// Live obstacles sorted by spawn order
pub fn obstacles_in_order(world: &World) -> Vec<(Entity, ObstacleKind, Body)> {
    let mut found: Vec<(SpawnOrder, Entity, ObstacleKind, Body)> = world
        .query::<(&Body, &Obstacle, &SpawnOrder)>()
        .iter()
        .map(|(e, (body, obstacle, order))| (*order, e, obstacle.kind, *body))
        .collect();
    found.sort_by_key(|(order, ..)| *order);
    found
        .into_iter()
        .map(|(_order, e, kind, body)| (e, kind, body))
        .collect()
}

/// Live collectibles of one kind sorted by spawn order
pub fn collectibles_in_order(world: &World, kind: CollectibleKind) -> Vec<(Entity, Body)> {
    let mut found: Vec<(SpawnOrder, Entity, Body)> = world
        .query::<(&Body, &Collectible, &SpawnOrder)>()
        .iter()
        .filter(|(_e, (_body, collectible, _order))| collectible.kind == kind)
        .map(|(e, (body, _collectible, order))| (*order, e, *body))
        .collect();
    found.sort_by_key(|(order, ..)| *order);
    found
        .into_iter()
        .map(|(_order, e, body)| (e, body))
        .collect()
}
