//! Unit tests for Engine
//!
//! Tests the scene registry, the run loop, the close request and logging APIs.
//!
//! IMPORTANT: LOGGER, MIN_SEVERITY and CLOSE_REQUESTED are globals shared
//! across all tests. Every test here is marked with #[serial] so they run
//! one at a time.

use crate::{Engine, EngineConfig, Error};
use crate::camera::Camera;
use crate::log::{Logger, LogEntry, LogSeverity};
use crate::scene::{Actor, Behavior, Scene};
use crate::surface::{Color, DrawCommand, RecordingSurface, RenderSurface, Shape};
use math_library::Vector2;
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<String>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: Arc::clone(&entries) }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        let mut entries = self.entries.lock().unwrap();
        entries.push(format!("{:?}: {}", entry.severity, entry.message));
    }
}

/// Behavior counting its lifecycle calls
#[derive(Default)]
struct Counters {
    starts: usize,
    updates: usize,
    ends: usize,
}

struct CountingBehavior {
    counters: Arc<Mutex<Counters>>,
    /// Request application close on this update number (1-based)
    close_on_update: Option<usize>,
}

impl Behavior for CountingBehavior {
    fn start(&mut self, _actor: &mut Actor) {
        self.counters.lock().unwrap().starts += 1;
    }

    fn update(&mut self, actor: &mut Actor, delta_time: f32) {
        let mut counters = self.counters.lock().unwrap();
        counters.updates += 1;
        actor.translate(delta_time, 0.0);
        if self.close_on_update == Some(counters.updates) {
            Engine::close_application();
        }
    }

    fn end(&mut self, _actor: &mut Actor) {
        self.counters.lock().unwrap().ends += 1;
    }
}

fn counting_scene(name: &str, close_on_update: Option<usize>) -> (Scene, Arc<Mutex<Counters>>) {
    let counters = Arc::new(Mutex::new(Counters::default()));
    let mut scene = Scene::new(name);
    scene.add_actor_with(
        Actor::new(Vector2::ZERO, "Mover"),
        CountingBehavior { counters: Arc::clone(&counters), close_on_update },
    );
    (scene, counters)
}

fn setup() {
    Engine::reset_logger();
    Engine::set_min_severity(LogSeverity::Info);
    Engine::reset_close_request();
}

// ============================================================================
// SCENE REGISTRY TESTS
// ============================================================================

#[test]
#[serial]
fn test_new_engine_is_empty() {
    setup();
    let engine = Engine::new(EngineConfig::default());
    assert_eq!(engine.scene_count(), 0);
    assert_eq!(engine.current_scene_index(), 0);
    assert!(engine.current_scene().is_none());
    assert!(!engine.is_running());
    assert_eq!(engine.frame_count(), 0);
}

#[test]
#[serial]
fn test_add_scene_returns_indices() {
    setup();
    let mut engine = Engine::new(EngineConfig::default());

    assert_eq!(engine.add_scene(Scene::new("Menu")).unwrap(), 0);
    assert_eq!(engine.add_scene(Scene::new("Level")).unwrap(), 1);

    assert_eq!(engine.scene_count(), 2);
    assert_eq!(engine.scene_index("Level"), Some(1));
    assert_eq!(engine.scene_index("Missing"), None);
    assert_eq!(engine.scene(0).map(Scene::name), Some("Menu"));
    assert!(engine.scene(2).is_none());
    assert_eq!(engine.current_scene().map(Scene::name), Some("Menu"));
}

#[test]
#[serial]
fn test_add_scene_rejects_duplicate_name() {
    setup();
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);
    let mut engine = Engine::new(EngineConfig::default());
    engine.add_scene(Scene::new("Level")).unwrap();

    let result = engine.add_scene(Scene::new("Level"));

    assert!(matches!(result, Err(Error::InvalidScene(_))));
    assert_eq!(engine.scene_count(), 1);
    assert!(entries
        .lock()
        .unwrap()
        .iter()
        .any(|e| e.starts_with("Error:") && e.contains("'Level' already exists")));
    Engine::reset_logger();
}

#[test]
#[serial]
fn test_set_current_scene() {
    setup();
    let mut engine = Engine::new(EngineConfig::default());
    engine.add_scene(Scene::new("A")).unwrap();
    engine.add_scene(Scene::new("B")).unwrap();

    engine.set_current_scene(1).unwrap();
    assert_eq!(engine.current_scene_index(), 1);
    assert_eq!(engine.current_scene().map(Scene::name), Some("B"));

    let result = engine.set_current_scene(5);
    assert!(matches!(result, Err(Error::InvalidScene(_))));
    assert_eq!(engine.current_scene_index(), 1);
}

#[test]
#[serial]
fn test_set_current_scene_while_stopped_does_not_start() {
    setup();
    let mut engine = Engine::new(EngineConfig::default());
    let (first, first_counters) = counting_scene("First", None);
    let (second, second_counters) = counting_scene("Second", None);
    engine.add_scene(first).unwrap();
    engine.add_scene(second).unwrap();

    engine.set_current_scene(1).unwrap();

    assert_eq!(first_counters.lock().unwrap().ends, 0);
    assert_eq!(second_counters.lock().unwrap().starts, 0);
}

// ============================================================================
// RUN LOOP TESTS
// ============================================================================

#[test]
#[serial]
fn test_run_without_scene_fails() {
    setup();
    let mut engine = Engine::new(EngineConfig::default());
    let mut surface = RecordingSurface::new();

    let result = engine.run(&mut surface);

    assert!(matches!(result, Err(Error::InitializationFailed(_))));
    assert!(!surface.is_open());
    assert_eq!(surface.frames_presented(), 0);
}

#[test]
#[serial]
fn test_run_stops_at_max_frames() {
    setup();
    let mut engine = Engine::new(EngineConfig::default().with_title("Bounded").with_max_frames(5));
    let (scene, counters) = counting_scene("Level", None);
    engine.add_scene(scene).unwrap();
    let mut surface = RecordingSurface::new();

    engine.run(&mut surface).unwrap();

    assert_eq!(surface.frames_presented(), 5);
    assert!(surface.is_closed());
    assert_eq!(surface.config().map(|c| c.title.as_str()), Some("Bounded"));
    assert_eq!(engine.frame_count(), 5);
    assert!(!engine.is_running());

    let counters = counters.lock().unwrap();
    assert_eq!(counters.starts, 1);
    assert_eq!(counters.updates, 5);
    assert_eq!(counters.ends, 1);
}

#[test]
#[serial]
fn test_run_stops_when_surface_closes() {
    setup();
    let mut engine = Engine::new(EngineConfig::default());
    let (scene, counters) = counting_scene("Level", None);
    engine.add_scene(scene).unwrap();
    let mut surface = RecordingSurface::new().with_close_after(3);

    engine.run(&mut surface).unwrap();

    assert_eq!(surface.frames_presented(), 3);
    assert_eq!(counters.lock().unwrap().updates, 3);
}

#[test]
#[serial]
fn test_run_stops_on_close_application() {
    setup();
    let mut engine = Engine::new(EngineConfig::default().with_max_frames(100));
    let (scene, counters) = counting_scene("Level", Some(2));
    engine.add_scene(scene).unwrap();
    let mut surface = RecordingSurface::new();

    engine.run(&mut surface).unwrap();

    // The requesting frame still finishes (update + draw)
    assert_eq!(counters.lock().unwrap().updates, 2);
    assert_eq!(surface.frames_presented(), 2);
    assert!(Engine::application_should_close());
    Engine::reset_close_request();
}

#[test]
#[serial]
fn test_run_clears_stale_close_request() {
    setup();
    Engine::close_application();
    let mut engine = Engine::new(EngineConfig::default().with_max_frames(2));
    let (scene, counters) = counting_scene("Level", None);
    engine.add_scene(scene).unwrap();

    engine.run(&mut RecordingSurface::new()).unwrap();

    assert_eq!(counters.lock().unwrap().updates, 2);
}

#[test]
#[serial]
fn test_run_uses_fixed_delta_time() {
    setup();
    let config = EngineConfig::default().with_max_frames(4).with_fixed_delta_time(0.25);
    let mut engine = Engine::new(config);
    let (scene, _) = counting_scene("Level", None);
    engine.add_scene(scene).unwrap();

    engine.run(&mut RecordingSurface::new().with_frame_time(10.0)).unwrap();

    let scene = engine.current_scene().unwrap();
    let mover = scene.find_actor("Mover").unwrap();
    assert!((scene.actor(mover).unwrap().world_position().x - 1.0).abs() < 1e-5);
}

#[test]
#[serial]
fn test_run_uses_surface_frame_time() {
    setup();
    let mut engine = Engine::new(EngineConfig::default().with_max_frames(3));
    let (scene, _) = counting_scene("Level", None);
    engine.add_scene(scene).unwrap();

    engine.run(&mut RecordingSurface::new().with_frame_time(0.5)).unwrap();

    let scene = engine.current_scene().unwrap();
    let mover = scene.find_actor("Mover").unwrap();
    assert!((scene.actor(mover).unwrap().world_position().x - 1.5).abs() < 1e-5);
}

#[test]
#[serial]
fn test_run_propagates_surface_open_error() {
    setup();
    let mut engine = Engine::new(EngineConfig::default().with_max_frames(1));
    engine.add_scene(Scene::new("Level")).unwrap();
    let mut surface = RecordingSurface::new();
    surface.open(&EngineConfig::default()).unwrap();

    let result = engine.run(&mut surface);

    assert!(matches!(result, Err(Error::SurfaceError(_))));
    assert!(!engine.is_running());
}

// ============================================================================
// STEP / DRAW TESTS
// ============================================================================

#[test]
#[serial]
fn test_step_without_scene_is_noop() {
    setup();
    let mut engine = Engine::new(EngineConfig::default());
    engine.step(0.1);
    assert_eq!(engine.frame_count(), 0);
}

#[test]
#[serial]
fn test_step_starts_and_updates_current_scene() {
    setup();
    let mut engine = Engine::new(EngineConfig::default());
    let (scene, counters) = counting_scene("Level", None);
    engine.add_scene(scene).unwrap();

    engine.step(0.1);
    engine.step(0.1);

    assert_eq!(engine.frame_count(), 2);
    let counters = counters.lock().unwrap();
    assert_eq!(counters.starts, 1);
    assert_eq!(counters.updates, 2);
}

#[test]
#[serial]
fn test_draw_passes_background_camera_and_colliders() {
    setup();
    let config = EngineConfig::default()
        .with_background(Color::RAYWHITE)
        .with_draw_colliders(true);
    let mut engine = Engine::new(config);
    let mut scene = Scene::new("Level");
    scene.add_actor(
        Actor::new(Vector2::new(2.0, 3.0), "Ball")
            .with_shape(Shape::Circle { radius: 1.0 }, Color::GREEN)
            .with_collider(crate::collision::Collider::circle(1.0)),
    );
    scene.set_camera(Some(Camera::default()));
    engine.add_scene(scene).unwrap();
    let mut surface = RecordingSurface::new();

    engine.step(0.0);
    engine.draw(&mut surface);

    assert_eq!(surface.last_background(), Some(Color::RAYWHITE));
    assert_eq!(surface.last_camera(), Some(&Camera::default()));
    assert_eq!(surface.last_frame().len(), 2);
    assert!(matches!(surface.last_frame()[1], DrawCommand::CircleLines { .. }));
}

// ============================================================================
// CLOSE REQUEST TESTS
// ============================================================================

#[test]
#[serial]
fn test_close_request_flag() {
    setup();
    assert!(!Engine::application_should_close());
    Engine::close_application();
    assert!(Engine::application_should_close());
    Engine::reset_close_request();
    assert!(!Engine::application_should_close());
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_set_logger_captures_entries() {
    setup();
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    Engine::log(LogSeverity::Info, "mfg::Test", "hello".to_string());
    crate::engine_warn!("mfg::Test", "careful {}", 42);

    let entries = entries.lock().unwrap();
    assert!(entries.contains(&"Info: hello".to_string()));
    assert!(entries.contains(&"Warn: careful 42".to_string()));
    drop(entries);
    Engine::reset_logger();
}

#[test]
#[serial]
fn test_min_severity_filters_entries() {
    setup();
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    Engine::set_min_severity(LogSeverity::Warn);
    assert_eq!(Engine::min_severity(), LogSeverity::Warn);
    Engine::log(LogSeverity::Info, "mfg::Test", "dropped".to_string());
    Engine::log(LogSeverity::Error, "mfg::Test", "kept".to_string());

    Engine::set_min_severity(LogSeverity::Trace);
    crate::engine_trace!("mfg::Test", "traced");

    let entries = entries.lock().unwrap();
    assert!(!entries.contains(&"Info: dropped".to_string()));
    assert!(entries.contains(&"Error: kept".to_string()));
    assert!(entries.contains(&"Trace: traced".to_string()));
    drop(entries);

    Engine::set_min_severity(LogSeverity::Info);
    Engine::reset_logger();
}

#[test]
#[serial]
fn test_log_detailed_carries_location() {
    setup();
    struct LocationLogger(Arc<Mutex<Option<(Option<&'static str>, Option<u32>)>>>);
    impl Logger for LocationLogger {
        fn log(&self, entry: &LogEntry) {
            if entry.message == "located" {
                *self.0.lock().unwrap() = Some((entry.file, entry.line));
            }
        }
    }
    let seen = Arc::new(Mutex::new(None));
    Engine::set_logger(LocationLogger(Arc::clone(&seen)));

    Engine::log_detailed(LogSeverity::Error, "mfg::Test", "located".to_string(), "engine.rs", 12);

    assert_eq!(*seen.lock().unwrap(), Some((Some("engine.rs"), Some(12))));
    Engine::reset_logger();
}

#[test]
#[serial]
fn test_run_logs_lifecycle() {
    setup();
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);
    let mut engine = Engine::new(EngineConfig::default().with_title("Logged").with_max_frames(1));
    engine.add_scene(Scene::new("Level")).unwrap();

    engine.run(&mut RecordingSurface::new()).unwrap();

    let entries = entries.lock().unwrap();
    assert!(entries.iter().any(|e| e.contains("'Logged' started with scene 'Level'")));
    assert!(entries.iter().any(|e| e.contains("'Logged' stopped after 1 frames")));
    drop(entries);
    Engine::reset_logger();
}
