/// MathForGames Engine - scene registry, run loop and global services
///
/// An `Engine` instance owns the scenes and drives the frame loop. The
/// services every module needs without holding an engine reference (the
/// logger, the minimum log severity and the application close request)
/// live in thread-safe static storage behind associated functions.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use rustc_hash::FxHashMap;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
use crate::scene::Scene;
use crate::surface::RenderSurface;
use crate::engine_bail;

// ===== INTERNAL STATE =====

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Entries below this severity are dropped
static MIN_SEVERITY: AtomicU8 = AtomicU8::new(LogSeverity::Info as u8);

/// Set by `Engine::close_application`, checked once per frame
static CLOSE_REQUESTED: AtomicBool = AtomicBool::new(false);

// ===== PUBLIC API =====

/// Scene registry and frame loop
///
/// # Example
///
/// ```no_run
/// use math_for_games::{Engine, EngineConfig};
/// use math_for_games::scene::Scene;
/// use math_for_games::surface::RecordingSurface;
///
/// let mut engine = Engine::new(EngineConfig::default().with_max_frames(120));
/// engine.add_scene(Scene::new("Main"))?;
/// engine.run(&mut RecordingSurface::new())?;
/// # Ok::<(), math_for_games::Error>(())
/// ```
pub struct Engine {
    config: EngineConfig,
    scenes: Vec<Scene>,
    /// Scene name -> index in `scenes`
    scene_names: FxHashMap<String, usize>,
    current_scene: usize,
    running: bool,
    frame_count: u64,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            scenes: Vec::new(),
            scene_names: FxHashMap::default(),
            current_scene: 0,
            running: false,
            frame_count: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.config
    }

    // ===== SCENES =====

    /// Register a scene and return its index.
    ///
    /// The first scene added becomes the current one.
    ///
    /// # Errors
    ///
    /// Returns `InvalidScene` if a scene with the same name is registered.
    pub fn add_scene(&mut self, scene: Scene) -> Result<usize> {
        if self.scene_names.contains_key(scene.name()) {
            engine_bail!("mfg::Engine", InvalidScene, "Scene '{}' already exists", scene.name());
        }
        let index = self.scenes.len();
        self.scene_names.insert(scene.name().to_string(), index);
        crate::engine_debug!("mfg::Engine", "Scene '{}' registered at index {}", scene.name(), index);
        self.scenes.push(scene);
        Ok(index)
    }

    pub fn scene_index(&self, name: &str) -> Option<usize> {
        self.scene_names.get(name).copied()
    }

    pub fn scene(&self, index: usize) -> Option<&Scene> {
        self.scenes.get(index)
    }

    pub fn scene_mut(&mut self, index: usize) -> Option<&mut Scene> {
        self.scenes.get_mut(index)
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    pub fn current_scene_index(&self) -> usize {
        self.current_scene
    }

    pub fn current_scene(&self) -> Option<&Scene> {
        self.scenes.get(self.current_scene)
    }

    pub fn current_scene_mut(&mut self) -> Option<&mut Scene> {
        self.scenes.get_mut(self.current_scene)
    }

    /// Switch to the scene at `index`.
    ///
    /// While the loop is running the old scene is ended and the new one
    /// started; otherwise only the selection changes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidScene` if `index` is out of range.
    pub fn set_current_scene(&mut self, index: usize) -> Result<()> {
        if index >= self.scenes.len() {
            engine_bail!(
                "mfg::Engine",
                InvalidScene,
                "Scene index {} out of range ({} scenes)",
                index,
                self.scenes.len()
            );
        }
        if index == self.current_scene {
            return Ok(());
        }

        if self.running {
            self.scenes[self.current_scene].end();
        }
        self.current_scene = index;
        if self.running {
            self.scenes[index].start();
        }
        crate::engine_info!("mfg::Engine", "Current scene is now '{}'", self.scenes[index].name());
        Ok(())
    }

    // ===== FRAME LOOP =====

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames stepped since the engine was created
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Run the loop until the surface closes, `close_application` is
    /// called or `max_frames` frames have run.
    ///
    /// Any pending close request is cleared before the loop starts.
    ///
    /// # Errors
    ///
    /// Returns `InitializationFailed` if no scene is registered, or the
    /// surface's error if it fails to open.
    pub fn run(&mut self, surface: &mut dyn RenderSurface) -> Result<()> {
        if self.scenes.is_empty() {
            engine_bail!("mfg::Engine", InitializationFailed, "Cannot run without a scene. Call add_scene() first.");
        }

        surface.open(&self.config)?;
        Self::reset_close_request();
        self.running = true;
        self.scenes[self.current_scene].start();
        crate::engine_info!(
            "mfg::Engine",
            "'{}' started with scene '{}'",
            self.config.title,
            self.scenes[self.current_scene].name()
        );

        let mut frames: u64 = 0;
        while !self.should_stop(surface, frames) {
            let delta_time = self
                .config
                .fixed_delta_time
                .unwrap_or_else(|| surface.frame_time());
            self.step(delta_time);
            self.draw(surface);
            frames += 1;
        }

        self.scenes[self.current_scene].end();
        self.running = false;
        surface.close();
        crate::engine_info!("mfg::Engine", "'{}' stopped after {} frames", self.config.title, frames);
        Ok(())
    }

    fn should_stop(&self, surface: &dyn RenderSurface, frames: u64) -> bool {
        surface.should_close()
            || Self::application_should_close()
            || self.config.max_frames.is_some_and(|max| frames >= max)
    }

    /// Update the current scene by `delta_time` seconds
    pub fn step(&mut self, delta_time: f32) {
        let Some(scene) = self.scenes.get_mut(self.current_scene) else {
            return;
        };
        scene.update(delta_time);
        self.frame_count += 1;
    }

    /// Draw the current scene as one frame on `surface`
    pub fn draw(&mut self, surface: &mut dyn RenderSurface) {
        let Some(scene) = self.scenes.get_mut(self.current_scene) else {
            return;
        };
        let camera = scene.camera().cloned();
        surface.begin_frame(self.config.background, camera.as_ref());
        scene.draw(surface, self.config.draw_colliders);
        surface.end_frame();
    }

    // ===== CLOSE REQUEST =====

    /// Ask the running loop to stop after the current frame
    pub fn close_application() {
        CLOSE_REQUESTED.store(true, Ordering::SeqCst);
    }

    pub fn application_should_close() -> bool {
        CLOSE_REQUESTED.load(Ordering::SeqCst)
    }

    pub fn reset_close_request() {
        CLOSE_REQUESTED.store(false, Ordering::SeqCst);
    }

    // ===== LOGGING API =====

    /// Set a custom logger
    ///
    /// Replace the default logger with a custom implementation (file logger,
    /// `log` facade adapter, test buffer...).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use math_for_games::Engine;
    /// use math_for_games::log::{Logger, LogEntry};
    ///
    /// struct FileLogger;
    /// impl Logger for FileLogger {
    ///     fn log(&self, entry: &LogEntry) {
    ///         // Write to file...
    ///     }
    /// }
    ///
    /// Engine::set_logger(FileLogger);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Drop entries below `severity` (default: Info)
    pub fn set_min_severity(severity: LogSeverity) {
        MIN_SEVERITY.store(severity as u8, Ordering::Relaxed);
    }

    pub fn min_severity() -> LogSeverity {
        match MIN_SEVERITY.load(Ordering::Relaxed) {
            0 => LogSeverity::Trace,
            1 => LogSeverity::Debug,
            2 => LogSeverity::Info,
            3 => LogSeverity::Warn,
            _ => LogSeverity::Error,
        }
    }

    fn enabled(severity: LogSeverity) -> bool {
        severity as u8 >= MIN_SEVERITY.load(Ordering::Relaxed)
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like engine_info!, engine_warn!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if !Self::enabled(severity) {
            return;
        }
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// Used by engine_error! macro to include source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if !Self::enabled(severity) {
            return;
        }
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
