use colored::Colorize;

const VERBOSE_ENV: &str = "RELEASE_TRAIN_VERBOSE";

/// Whether `--verbose` was given for this run.
pub fn is_verbose() -> bool {
    std::env::var(VERBOSE_ENV).is_ok()
}

pub fn enable_verbose() {
    // Set once in main before any worker thread exists.
    unsafe {
        std::env::set_var(VERBOSE_ENV, "1");
    }
}

/// Prints a `[VERBOSE]` diagnostic to stderr when verbose output is enabled.
pub fn verbose(message: impl AsRef<str>) {
    if is_verbose() {
        eprintln!("[VERBOSE] {}", message.as_ref());
    }
}

/// Sink for per-project progress messages emitted by release operations.
pub trait Logger: Send + Sync {
    fn log(&self, subject: &str, message: &str);

    fn warn(&self, subject: &str, message: &str);
}

/// Logger printing `subject - message` lines to the console.
#[derive(Debug, Default)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }

    fn format(subject: &str, message: &str) -> String {
        format!("{:<30} - {}", subject, message)
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, subject: &str, message: &str) {
        println!("{}", Self::format(subject, message));
    }

    fn warn(&self, subject: &str, message: &str) {
        eprintln!("{}", Self::format(subject, message).yellow());
    }
}
