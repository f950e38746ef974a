// Singleton pattern, two flavors: a lazily-published immutable config
// handle, and a lock-guarded mutable audit log shared across the program.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock};

use lazy_static::lazy_static;

// =============================================================================
// Part 1: Immutable instance, published once via OnceLock
// =============================================================================

#[derive(Debug)]
pub struct AppConfig {
    pub app_name: String,
    pub max_connections: u32,
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();
static CONFIG_INITS: AtomicUsize = AtomicUsize::new(0);

impl AppConfig {
    /// Lazily constructs the single instance on first call. Construction
    /// happens exactly once even under concurrent first access; later
    /// calls read the published reference without locking.
    pub fn instance() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            CONFIG_INITS.fetch_add(1, Ordering::SeqCst);
            println!("Singleton instance created.");
            AppConfig {
                app_name: "design-patterns".to_string(),
                max_connections: 8,
            }
        })
    }

    pub fn init_count() -> usize {
        CONFIG_INITS.load(Ordering::SeqCst)
    }
}

// =============================================================================
// Part 2: Mutable global state behind a mutex
// =============================================================================

pub struct AuditLog {
    entries: Vec<String>,
}

impl AuditLog {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

lazy_static! {
    static ref AUDIT_LOG: Mutex<AuditLog> = Mutex::new(AuditLog::new());
}

pub fn audit_log() -> &'static Mutex<AuditLog> {
    &AUDIT_LOG
}

fn main() {
    let first = AppConfig::instance();
    println!(
        "This is the Singleton instance: {} (max {} connections)",
        first.app_name, first.max_connections
    );

    let second = AppConfig::instance();
    if std::ptr::eq(first, second) {
        println!("Both instances are the same.");
    }

    audit_log()
        .lock()
        .expect("audit log poisoned")
        .record("startup complete");
    let log = audit_log().lock().expect("audit log poisoned");
    println!("Audit entries: {:?}", log.entries());
}
