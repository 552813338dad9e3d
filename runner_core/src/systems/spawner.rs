use crate::{
    create_entity, obstacles_in_order, Aabb, Body, CollectibleKind, Config, EntityKind, Events,
    GameRng, ObstacleKind, SpawnCounter, SpawnTimer,
};
use glam::Vec2;
use hecs::World;
use rand::Rng;
use tracing::debug;

/// Advance the spawn timer and, when an attempt is due, try to place one
/// entity at the right edge of the viewport. Crowded attempts are dropped.
pub fn spawn_objects(
    world: &mut World,
    config: &Config,
    timer: &mut SpawnTimer,
    counter: &mut SpawnCounter,
    rng: &mut GameRng,
    events: &mut Events,
) {
    // Bounds are ordered so an unvalidated config cannot empty the range
    let low = config.spawn_interval_min.min(config.spawn_interval_max);
    let high = config.spawn_interval_min.max(config.spawn_interval_max);
    let due = timer.tick(|| rng.0.gen_range(low..=high));
    if !due {
        return;
    }

    let kind = pick_kind(config, rng);
    let pos = config.spawn_position(kind);

    if !spawn_is_clear(world, config, kind, pos) {
        events.spawn_skipped = true;
        debug!(?kind, "spawn skipped, too close to an obstacle");
        return;
    }

    create_entity(world, kind, pos, counter);
    events.spawned.push(kind);
    debug!(?kind, x = pos.x, y = pos.y, "spawned");
}

/// Pick what to spawn from one uniform roll against the cumulative chances
pub fn pick_kind(config: &Config, rng: &mut GameRng) -> EntityKind {
    let roll: f32 = rng.0.gen();
    if roll < config.obstacle_chance {
        let index = rng.0.gen_range(0..ObstacleKind::ALL.len());
        EntityKind::Obstacle(ObstacleKind::ALL[index])
    } else if roll < config.rabbi_chance {
        EntityKind::Collectible(CollectibleKind::Rabbi)
    } else if roll < config.channel14_chance {
        EntityKind::Collectible(CollectibleKind::Channel14)
    } else {
        EntityKind::Collectible(CollectibleKind::Coin)
    }
}

/// Spacing rules for a candidate spawn:
/// - no obstacle within `min_spawn_gap` of the spawn x
/// - obstacles keep `min_obstacle_distance` from the nearest obstacle
/// - the candidate box overlaps nothing alive
pub fn spawn_is_clear(world: &World, config: &Config, kind: EntityKind, pos: Vec2) -> bool {
    let is_obstacle = matches!(kind, EntityKind::Obstacle(_));

    for (_e, _kind, body) in obstacles_in_order(world) {
        let distance = (pos.x - body.pos.x).abs();
        if distance < config.min_spawn_gap {
            return false;
        }
        if is_obstacle && distance < config.min_obstacle_distance {
            return false;
        }
    }

    let candidate = Aabb::from_pos_size(pos, kind.spec().size);
    let mut bodies = world.query::<&Body>();
    let crowded = bodies
        .iter()
        .any(|(_e, body)| candidate.overlaps(&body.bounds()));
    !crowded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{collectibles_in_order, Params};

    fn setup() -> (World, Config, SpawnTimer, SpawnCounter, GameRng, Events) {
        (
            World::new(),
            Config::new(),
            SpawnTimer::new(),
            SpawnCounter::new(),
            GameRng::new(42),
            Events::new(),
        )
    }

    fn live_count(world: &World) -> usize {
        world.query::<&Body>().iter().count()
    }

    #[test]
    fn test_nothing_spawns_before_min_interval() {
        let (mut world, config, mut timer, mut counter, mut rng, mut events) = setup();
        for _ in 1..config.spawn_interval_min {
            spawn_objects(&mut world, &config, &mut timer, &mut counter, &mut rng, &mut events);
        }
        assert_eq!(live_count(&world), 0);
    }

    #[test]
    fn test_one_attempt_within_max_interval() {
        let (mut world, config, mut timer, mut counter, mut rng, mut events) = setup();
        for _ in 0..config.spawn_interval_max {
            spawn_objects(&mut world, &config, &mut timer, &mut counter, &mut rng, &mut events);
        }
        assert_eq!(live_count(&world), 1, "Empty world never blocks a spawn");
        assert_eq!(events.spawned.len(), 1);
    }

    #[test]
    fn test_inverted_interval_still_spawns() {
        let (mut world, _config, mut timer, mut counter, mut rng, mut events) = setup();
        let config = Config {
            spawn_interval_min: 120,
            spawn_interval_max: 60,
            ..Config::new()
        };
        assert!(config.validate().is_err());

        for _ in 0..120 {
            spawn_objects(&mut world, &config, &mut timer, &mut counter, &mut rng, &mut events);
        }
        assert!(live_count(&world) >= 1, "Inverted bounds roll within 60..=120");
    }

    #[test]
    fn test_spawn_lands_at_right_edge() {
        let (mut world, config, mut timer, mut counter, mut rng, mut events) = setup();
        while events.spawned.is_empty() {
            spawn_objects(&mut world, &config, &mut timer, &mut counter, &mut rng, &mut events);
        }

        let kind = events.spawned[0];
        let mut query = world.query::<&Body>();
        let (_e, body) = query.iter().next().unwrap();
        assert_eq!(body.pos, config.spawn_position(kind));
        assert_eq!(body.size(), kind.spec().size);
    }

    #[test]
    fn test_spawn_blocked_near_obstacle() {
        let (mut world, config, _timer, mut counter, _rng, _events) = setup();
        let sign = EntityKind::Obstacle(ObstacleKind::Sign);
        let coin = EntityKind::Collectible(CollectibleKind::Coin);
        create_entity(&mut world, sign, Vec2::new(config.viewport_width - 50.0, 430.0), &mut counter);

        assert!(!spawn_is_clear(&world, &config, coin, config.spawn_position(coin)));
    }

    #[test]
    fn test_obstacles_keep_their_distance() {
        let (mut world, config, _timer, mut counter, _rng, _events) = setup();
        let sign = EntityKind::Obstacle(ObstacleKind::Sign);
        let rabbi = EntityKind::Collectible(CollectibleKind::Rabbi);
        create_entity(&mut world, sign, Vec2::new(config.viewport_width - 200.0, 430.0), &mut counter);

        assert!(spawn_is_clear(&world, &config, rabbi, config.spawn_position(rabbi)));
        assert!(!spawn_is_clear(&world, &config, sign, config.spawn_position(sign)));
    }

    #[test]
    fn test_spawn_blocked_by_overlapping_collectible() {
        let (mut world, config, _timer, mut counter, _rng, _events) = setup();
        let rabbi = EntityKind::Collectible(CollectibleKind::Rabbi);
        create_entity(&mut world, rabbi, Vec2::new(config.viewport_width - 10.0, 430.0), &mut counter);

        assert!(!spawn_is_clear(&world, &config, rabbi, config.spawn_position(rabbi)));
    }

    #[test]
    fn test_skipped_spawn_is_silent() {
        let (mut world, mut config, mut timer, mut counter, mut rng, mut events) = setup();
        config.spawn_interval_min = 1;
        config.spawn_interval_max = 1;
        let sign = EntityKind::Obstacle(ObstacleKind::Sign);
        create_entity(&mut world, sign, config.spawn_position(sign), &mut counter);

        spawn_objects(&mut world, &config, &mut timer, &mut counter, &mut rng, &mut events);

        assert!(events.spawn_skipped);
        assert!(events.spawned.is_empty());
        assert_eq!(live_count(&world), 1);
    }

    #[test]
    fn test_pick_kind_follows_chances() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut obstacles = 0;
        let mut rabbis = 0;
        let mut coins = 0;
        let rolls = 10_000;
        for _ in 0..rolls {
            match pick_kind(&config, &mut rng) {
                EntityKind::Obstacle(_) => obstacles += 1,
                EntityKind::Collectible(CollectibleKind::Rabbi) => rabbis += 1,
                EntityKind::Collectible(CollectibleKind::Coin) => coins += 1,
                EntityKind::Collectible(CollectibleKind::Channel14) => {}
            }
        }
        let share = |n: i32| n as f32 / rolls as f32;
        assert!((share(obstacles) - Params::OBSTACLE_CHANCE).abs() < 0.03);
        assert!((share(rabbis) - 0.3).abs() < 0.03);
        assert!((share(coins) - 0.1).abs() < 0.03);
    }

    #[test]
    fn test_collectibles_keep_spawn_order() {
        let (mut world, _config, _timer, mut counter, _rng, _events) = setup();
        let coin = EntityKind::Collectible(CollectibleKind::Coin);
        let first = create_entity(&mut world, coin, Vec2::new(300.0, 380.0), &mut counter);
        let second = create_entity(&mut world, coin, Vec2::new(500.0, 380.0), &mut counter);

        let order: Vec<_> = collectibles_in_order(&world, CollectibleKind::Coin)
            .into_iter()
            .map(|(e, _)| e)
            .collect();
        assert_eq!(order, vec![first, second]);
    }
}
