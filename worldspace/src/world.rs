/// Worldspace - Singleton registry for spatial partitions
///
/// A simulation server usually runs one partition per map (continent,
/// instance, battleground). `World` keeps them under a name so that every
/// subsystem can reach the same tree, and owns the logging configuration
/// used by the whole crate.
///
/// Each partition is stored as `Arc<Mutex<DynamicQuadTree>>`: one exclusive
/// lock per tree, held for the duration of an insert, remove or query.

use std::sync::{Arc, Mutex, OnceLock, RwLock};
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::SystemTime;
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::geometry::BoundingBox;
use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
use crate::partition::{DynamicQuadTree, QuadTreeConfig};
use crate::{world_bail, world_err, world_info};

const SOURCE: &str = "worldspace::World";

// ===== INTERNAL STATE =====

/// Global world state storage
static WORLD_STATE: OnceLock<WorldState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Minimum severity forwarded to the logger
static LOG_LEVEL: AtomicU8 = AtomicU8::new(LogSeverity::Info as u8);

/// Internal state structure holding the partition registry
struct WorldState {
    /// Partitions by name
    partitions: RwLock<FxHashMap<String, Arc<Mutex<DynamicQuadTree>>>>,
}

impl WorldState {
    fn new() -> Self {
        Self {
            partitions: RwLock::new(FxHashMap::default()),
        }
    }
}

fn state() -> Result<&'static WorldState> {
    WORLD_STATE.get().ok_or_else(|| world_err!(SOURCE, Error::InitializationFailed(
        "World not initialized. Call World::initialize() first.".to_string()
    )))
}

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

// ===== PUBLIC API =====

/// Partition registry and logging entry point
///
/// # Example
///
/// ```no_run
/// use worldspace::worldspace::World;
/// use worldspace::worldspace::geometry::BoundingBox;
/// use worldspace::worldspace::partition::QuadTreeConfig;
/// use worldspace::glam::Vec2;
///
/// World::initialize()?;
/// let bounds = BoundingBox::from_xy(Vec2::new(-17000.0, -17000.0), Vec2::new(17000.0, 17000.0));
/// World::create_partition("eastern_kingdoms", bounds, QuadTreeConfig::default())?;
///
/// let tree = World::partition("eastern_kingdoms")?;
/// // tree.lock() and use it...
///
/// World::shutdown();
/// # Ok::<(), worldspace::worldspace::Error>(())
/// ```
pub struct World;

impl World {
    /// Initialize the world registry
    ///
    /// Idempotent. Must be called before any partition is created.
    pub fn initialize() -> Result<()> {
        WORLD_STATE.get_or_init(WorldState::new);
        Ok(())
    }

    /// Drop every registered partition
    ///
    /// Handles already given out stay valid until dropped.
    pub fn shutdown() {
        if let Some(state) = WORLD_STATE.get() {
            if let Ok(mut partitions) = state.partitions.write() {
                let count = partitions.len();
                partitions.clear();
                world_info!(SOURCE, "World shut down ({} partitions released)", count);
            }
        }
    }

    // ===== PARTITION REGISTRY =====

    /// Create a quadtree and register it under `name`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The world is not initialized
    /// - A partition with this name already exists
    /// - `bounds` or `config` is invalid
    /// - The registry lock is poisoned
    pub fn create_partition(
        name: &str,
        bounds: BoundingBox,
        config: QuadTreeConfig,
    ) -> Result<Arc<Mutex<DynamicQuadTree>>> {
        let state = state()?;

        let mut partitions = state.partitions.write()
            .map_err(|_| world_err!(SOURCE, Error::LockPoisoned("Partition registry lock poisoned".to_string())))?;

        if partitions.contains_key(name) {
            world_bail!(SOURCE, Error::InitializationFailed(format!(
                "Partition '{}' already exists. Call World::destroy_partition() first.", name
            )));
        }

        let tree = Arc::new(Mutex::new(DynamicQuadTree::with_config(bounds, config)?));
        partitions.insert(name.to_string(), Arc::clone(&tree));

        world_info!(SOURCE, "Partition '{}' created", name);

        Ok(tree)
    }

    /// Get a registered partition by name
    ///
    /// # Errors
    ///
    /// Returns an error if the world is not initialized or no partition has
    /// this name.
    pub fn partition(name: &str) -> Result<Arc<Mutex<DynamicQuadTree>>> {
        let state = state()?;

        let partitions = state.partitions.read()
            .map_err(|_| world_err!(SOURCE, Error::LockPoisoned("Partition registry lock poisoned".to_string())))?;

        partitions.get(name)
            .cloned()
            .ok_or_else(|| world_err!(SOURCE, Error::PartitionNotFound(name.to_string())))
    }

    /// Unregister a partition
    ///
    /// # Errors
    ///
    /// Returns an error if the world is not initialized or no partition has
    /// this name.
    pub fn destroy_partition(name: &str) -> Result<()> {
        let state = state()?;

        let mut partitions = state.partitions.write()
            .map_err(|_| world_err!(SOURCE, Error::LockPoisoned("Partition registry lock poisoned".to_string())))?;

        if partitions.remove(name).is_none() {
            world_bail!(SOURCE, Error::PartitionNotFound(name.to_string()));
        }

        world_info!(SOURCE, "Partition '{}' destroyed", name);

        Ok(())
    }

    /// Number of registered partitions (0 when not initialized)
    pub fn partition_count() -> usize {
        WORLD_STATE.get()
            .and_then(|state| state.partitions.read().ok().map(|partitions| partitions.len()))
            .unwrap_or(0)
    }

    /// Names of all registered partitions, sorted
    pub fn partition_names() -> Vec<String> {
        let mut names: Vec<String> = WORLD_STATE.get()
            .and_then(|state| state.partitions.read().ok().map(|partitions| partitions.keys().cloned().collect()))
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Reset all partitions for testing (only available in test builds)
    #[cfg(test)]
    pub fn reset_for_testing() {
        if let Some(state) = WORLD_STATE.get() {
            if let Ok(mut partitions) = state.partitions.write() {
                partitions.clear();
            }
        }
    }

    // ===== LOGGING API =====

    /// Set a custom logger
    ///
    /// Replace the default logger with a custom implementation (server log, test capture, etc.)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use worldspace::worldspace::{World, log::{Logger, LogEntry}};
    ///
    /// struct ServerLogger;
    /// impl Logger for ServerLogger {
    ///     fn log(&self, entry: &LogEntry) {
    ///         // Forward to the server log...
    ///     }
    /// }
    ///
    /// World::set_logger(ServerLogger);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger_impl: L) {
        if let Ok(mut lock) = logger().write() {
            *lock = Box::new(logger_impl);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = logger().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Set the minimum severity that reaches the logger (default: Info)
    pub fn set_log_level(severity: LogSeverity) {
        LOG_LEVEL.store(severity as u8, Ordering::Relaxed);
    }

    /// Current minimum severity
    pub fn log_level() -> LogSeverity {
        match LOG_LEVEL.load(Ordering::Relaxed) {
            0 => LogSeverity::Trace,
            1 => LogSeverity::Debug,
            2 => LogSeverity::Info,
            3 => LogSeverity::Warn,
            _ => LogSeverity::Error,
        }
    }

    /// Whether a message of this severity would be logged
    ///
    /// Checked by the logging macros before formatting the message.
    pub fn log_enabled(severity: LogSeverity) -> bool {
        severity as u8 >= LOG_LEVEL.load(Ordering::Relaxed)
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like world_info!, world_debug!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = logger().read() {
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
    /// Used by the world_error! macro to include source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = logger().read() {
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
#[path = "world_tests.rs"]
mod tests;
