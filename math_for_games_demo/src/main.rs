//! MathForGames demo: a solar system with a player ship, run headless.
//!
//! Engine logs are forwarded to the `log` facade, so verbosity is set with
//! `RUST_LOG` (e.g. `RUST_LOG=debug cargo run -p math_for_games_demo`).

use std::f32::consts::{FRAC_PI_2, PI, TAU};
use math_for_games::camera::{Camera, Projection};
use math_for_games::collision::Collider;
use math_for_games::log::{LogEntry, LogSeverity, Logger};
use math_for_games::scene::{Actor, Behavior, Contact, MoveInput, Player, Scene, Spin};
use math_for_games::surface::{Color, RecordingSurface, Shape};
use math_for_games::{Engine, EngineConfig, Result};
use math_library::{Vector2, Vector3};

// ===== LOGGING =====

/// Forwards engine log entries to the `log` facade
struct LogFacade;

impl Logger for LogFacade {
    fn log(&self, entry: &LogEntry) {
        let level = match entry.severity {
            LogSeverity::Trace => log::Level::Trace,
            LogSeverity::Debug => log::Level::Debug,
            LogSeverity::Info => log::Level::Info,
            LogSeverity::Warn => log::Level::Warn,
            LogSeverity::Error => log::Level::Error,
        };
        match (entry.file, entry.line) {
            (Some(file), Some(line)) => {
                log::log!(target: "math_for_games", level, "[{}] {} ({}:{})", entry.source, entry.message, file, line)
            }
            _ => log::log!(target: "math_for_games", level, "[{}] {}", entry.source, entry.message),
        }
    }
}

fn severity_from_log_level(level: log::LevelFilter) -> LogSeverity {
    match level {
        log::LevelFilter::Trace => LogSeverity::Trace,
        log::LevelFilter::Debug => LogSeverity::Debug,
        log::LevelFilter::Info => LogSeverity::Info,
        log::LevelFilter::Warn => LogSeverity::Warn,
        log::LevelFilter::Error | log::LevelFilter::Off => LogSeverity::Error,
    }
}

// ===== DEMO BEHAVIORS =====

/// Steers along a circle: the direction turns at a constant rate
struct CircleInput {
    angle: f32,
    turn_per_call: f32,
}

impl MoveInput for CircleInput {
    fn direction(&mut self) -> Vector2 {
        self.angle = (self.angle + self.turn_per_call) % TAU;
        Vector2::new(self.angle.cos(), self.angle.sin())
    }
}

/// Reports its first contact and, at the end, how many frames it spent touching something
struct Abductee {
    hits: u32,
}

impl Behavior for Abductee {
    fn on_collision(&mut self, actor: &mut Actor, contact: &Contact) {
        self.hits += 1;
        if self.hits == 1 {
            log::info!("'{}' reached '{}' at {}", actor.name(), contact.name, contact.world_position);
        }
    }

    fn end(&mut self, actor: &mut Actor) {
        log::info!("'{}' collided {} times", actor.name(), self.hits);
    }
}

// ===== SCENE =====

fn solar_system(config: &EngineConfig) -> Result<Scene> {
    let mut scene = Scene::new("Solar System");
    let center = Vector2::new(config.width as f32 * 0.5, config.height as f32 * 0.5);

    let sun = scene.add_actor_with(
        Actor::new(center, "Sun")
            .with_sprite("Images/sun.png")
            .with_shape(Shape::Sphere { radius: 1.0 }, Color::YELLOW)
            .with_size(60.0, 60.0),
        Spin::new(PI / 8.0),
    );

    let planets = [
        ("Mercury", 1.5, 0.10, Color::GRAY, 1.2),
        ("Venus", 2.2, 0.15, Color::YELLOW, 0.9),
        ("Earth", 3.0, 0.18, Color::BLUE, 0.6),
        ("Mars", 3.8, 0.12, Color::RED, 0.4),
        ("Saturn", 5.0, 0.30, Color::YELLOW, 0.2),
    ];
    for (name, distance, size, color, spin) in planets {
        let planet = scene.add_actor_with(
            Actor::new(Vector2::new(distance, 0.0), name)
                .with_shape(Shape::Sphere { radius: 1.0 }, color)
                .with_size(size, size),
            Spin::new(spin),
        );
        scene.add_child(sun, planet)?;
    }

    if let Some(earth) = scene.find_actor("Earth") {
        let moon = scene.add_actor_with(
            Actor::new(Vector2::new(2.0, 0.0), "Moon")
                .with_shape(Shape::Sphere { radius: 1.0 }, Color::GRAY)
                .with_size(0.3, 0.3),
            Spin::new(FRAC_PI_2),
        );
        scene.add_child(earth, moon)?;
    }
    if let Some(saturn) = scene.find_actor("Saturn") {
        // Cancels Saturn's own spin and then some
        let rings = scene.add_actor_with(
            Actor::new(Vector2::ZERO, "Saturn's Rings")
                .with_shape(Shape::Cube { size: 1.0 }, Color::RAYWHITE.with_alpha(128))
                .with_size(2.5, 0.4),
            Spin::new(-0.6),
        );
        scene.add_child(saturn, rings)?;
    }

    let ship = scene.add_actor_with(
        Actor::new(center + Vector2::new(-300.0, 0.0), "Player")
            .with_sprite("Images/player.png")
            .with_size(32.0, 32.0)
            .with_collider(Collider::circle(16.0)),
        Player::new(120.0, Box::new(CircleInput { angle: 0.0, turn_per_call: 0.01 })),
    );
    scene.add_actor_with(
        Actor::new(center + Vector2::new(-200.0, 180.0), "UFO")
            .with_sprite("Images/enemy.png")
            .with_size(40.0, 20.0)
            .with_collider(Collider::aabb(40.0, 20.0)),
        Abductee { hits: 0 },
    );

    scene.set_camera(Some(Camera::new(
        Vector3::new(center.x, center.y, 600.0),
        Vector3::from(center),
        Vector3::Y,
        45.0,
        Projection::Perspective,
    )));
    scene.set_camera_follow(Some(ship))?;

    Ok(scene)
}

// ===== MAIN =====

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    Engine::set_logger(LogFacade);
    Engine::set_min_severity(severity_from_log_level(log::max_level()));

    let config = EngineConfig::default()
        .with_title("Math For Games")
        .with_fixed_delta_time(1.0 / 60.0)
        .with_max_frames(600)
        .with_draw_colliders(true)
        .with_background(Color::BLACK);

    let mut engine = Engine::new(config.clone());
    let scene = solar_system(&config)?;
    engine.add_scene(scene)?;

    let mut surface = RecordingSurface::new();
    engine.run(&mut surface)?;

    if let Some(scene) = engine.current_scene() {
        for key in scene.actor_keys() {
            if let Some(actor) = scene.actor(key) {
                log::debug!("{:<16} world {}", actor.name(), actor.world_position());
            }
        }
    }
    log::info!(
        "Presented {} frames, {} draw calls, last frame textures: {:?}",
        surface.frames_presented(),
        surface.total_draw_calls(),
        surface.textures_drawn()
    );

    Ok(())
}
