use crate::systems::*;
use crate::{
    collectibles_in_order, create_entity, obstacles_in_order, Body, CollectibleKind, Config,
    ConfigError, EntityKind, Events, GameRng, MusicCue, ObstacleKind, Player, Renderer, Score,
    SessionAction, SessionFsm, SessionState, SpawnCounter, SpawnTimer, SpriteKey,
};
use glam::Vec2;
use hecs::World;
use tracing::{info, trace};

/// Called once per run with the final score
pub type GameOverHandler = Box<dyn FnMut(u32)>;

/// One game instance. Created once; `reset`/`start` begin new runs without
/// rebuilding it.
pub struct Session {
    config: Config,
    world: World,
    player: Player,
    background: ParallaxBackground,
    score: Score,
    spawn_timer: SpawnTimer,
    spawn_counter: SpawnCounter,
    rng: GameRng,
    events: Events,
    fsm: SessionFsm,
    ticks: u64,
    pending_jump: bool,
    pending_music: Option<MusicCue>,
    on_game_over: Option<GameOverHandler>,
}

/// Comparable view of everything a run mutates
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub score: u32,
    pub ticks: u64,
    pub player: Player,
    pub background: ParallaxBackground,
    pub spawn_timer: SpawnTimer,
    pub spawn_counter: SpawnCounter,
    pub obstacles: Vec<(ObstacleKind, Body)>,
    pub collectibles: Vec<(CollectibleKind, Body)>,
    pub events: Events,
}

impl Session {
    /// Build a session from an already validated config
    pub fn new(config: Config, seed: u64) -> Self {
        Self {
            world: World::new(),
            player: Player::new(&config),
            background: ParallaxBackground::new(&config),
            score: Score::new(),
            spawn_timer: SpawnTimer::new(),
            spawn_counter: SpawnCounter::new(),
            rng: GameRng::new(seed),
            events: Events::new(),
            fsm: SessionFsm::new(),
            ticks: 0,
            pending_jump: false,
            pending_music: None,
            on_game_over: None,
            config,
        }
    }

    pub fn try_new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, seed))
    }

    pub fn set_game_over_handler(&mut self, handler: impl FnMut(u32) + 'static) {
        self.on_game_over = Some(Box::new(handler));
    }

    /// Reset, then begin a run. The music cue lands in the first tick's events.
    pub fn start(&mut self) {
        self.reset();
        self.fsm.transition(SessionAction::Start);
        self.pending_music = Some(MusicCue::Play);
        info!("run started");
    }

    /// Reinitialize every per-run field. The RNG keeps its stream so the
    /// next run differs from the last.
    pub fn reset(&mut self) {
        self.world.clear();
        self.player.reset();
        self.background.reset();
        self.score = Score::new();
        self.spawn_timer = SpawnTimer::new();
        self.spawn_counter = SpawnCounter::new();
        self.events.clear();
        self.fsm.transition(SessionAction::Reset);
        self.ticks = 0;
        self.pending_jump = false;
        self.pending_music = None;
    }

    /// Input boundary: forward a jump press to the player while running
    pub fn handle_jump_pressed(&mut self) -> bool {
        if !self.fsm.is_running() {
            return false;
        }
        let jumped = self.player.jump();
        self.pending_jump |= jumped;
        jumped
    }

    /// Advance the run by one tick. Does nothing unless running.
    pub fn update(&mut self) {
        if !self.fsm.is_running() {
            return;
        }

        self.events.clear();
        self.events.jumped = std::mem::take(&mut self.pending_jump);
        self.events.music = self.pending_music.take();

        // 1. Player physics
        self.player.update();

        // 2. Background scroll
        self.background.update();

        // 3. Spawner
        spawn_objects(
            &mut self.world,
            &self.config,
            &mut self.spawn_timer,
            &mut self.spawn_counter,
            &mut self.rng,
            &mut self.events,
        );

        // 4. Scroll entities, drop the ones that left the screen
        scroll_entities(&mut self.world, &self.config);
        despawn_offscreen(&mut self.world);

        // 5. Collisions and score
        let fatal = resolve_collisions(
            &mut self.world,
            &self.player,
            &self.config,
            &mut self.score,
            &mut self.events,
        );

        self.ticks += 1;
        trace!(tick = self.ticks, score = self.score.points, "tick");

        if fatal {
            self.fsm.transition(SessionAction::Crash);
            self.events.music = Some(MusicCue::Pause);
            info!(score = self.score.points, ticks = self.ticks, "game over");
            if let Some(handler) = self.on_game_over.as_mut() {
                handler(self.score.points);
            }
        }
    }

    /// Issue this frame's draw calls. Reads state only.
    pub fn draw<R: Renderer>(&self, renderer: &mut R) {
        let width = self.config.viewport_width;
        let viewport = Vec2::new(width, self.config.viewport_height);
        for x in [self.background.background_x, self.background.background_x + width] {
            renderer.draw_sprite(SpriteKey::Background, Vec2::new(x, 0.0), viewport);
        }

        let ground_y = self.config.ground_level();
        let ground_size = Vec2::new(width, self.config.ground_height);
        for x in [self.background.ground_x, self.background.ground_x + width] {
            renderer.draw_sprite(SpriteKey::Ground, Vec2::new(x, ground_y), ground_size);
        }

        renderer.draw_score(self.score.points);
        renderer.draw_sprite(self.player.sprite(), self.player.pos, self.player.size());

        for (_e, kind, body) in obstacles_in_order(&self.world) {
            renderer.draw_sprite(SpriteKey::Obstacle(kind), body.pos, body.size());
        }
        for kind in CollectibleKind::ALL {
            let sprite = EntityKind::Collectible(kind).spec().sprite;
            for (_e, body) in collectibles_in_order(&self.world, kind) {
                renderer.draw_sprite(sprite, body.pos, body.size());
            }
        }
    }

    /// Place an entity directly, bypassing the spawner's timing and spacing
    pub fn spawn_at(&mut self, kind: EntityKind, pos: Vec2) -> hecs::Entity {
        create_entity(&mut self.world, kind, pos, &mut self.spawn_counter)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let collectibles = CollectibleKind::ALL
            .into_iter()
            .flat_map(|kind| {
                collectibles_in_order(&self.world, kind)
                    .into_iter()
                    .map(move |(_e, body)| (kind, body))
            })
            .collect();

        SessionSnapshot {
            state: self.fsm.state(),
            score: self.score.points,
            ticks: self.ticks,
            player: self.player.clone(),
            background: self.background,
            spawn_timer: self.spawn_timer,
            spawn_counter: self.spawn_counter,
            obstacles: self.obstacles(),
            collectibles,
            events: self.events.clone(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn score(&self) -> u32 {
        self.score.points
    }

    pub fn state(&self) -> SessionState {
        self.fsm.state()
    }

    pub fn is_game_over(&self) -> bool {
        self.fsm.is_game_over()
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn background(&self) -> &ParallaxBackground {
        &self.background
    }

    /// Live obstacles in spawn order
    pub fn obstacles(&self) -> Vec<(ObstacleKind, Body)> {
        obstacles_in_order(&self.world)
            .into_iter()
            .map(|(_e, kind, body)| (kind, body))
            .collect()
    }

    /// Live collectibles of one kind in spawn order
    pub fn collectibles(&self, kind: CollectibleKind) -> Vec<Body> {
        collectibles_in_order(&self.world, kind)
            .into_iter()
            .map(|(_e, body)| body)
            .collect()
    }
}
