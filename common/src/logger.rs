use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, timestamp: &str, message: &str) -> String {
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}] {}", timestamp, prefix, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }

    pub fn log(&self, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        println!("{}", self.format_line(&timestamp, message));
    }
}

/// Installs the process logger. Later calls keep the first logger.
pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

/// Messages sent before [`init_logger`] are dropped.
pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_with_prefix() {
        let logger = Logger::new(Some("snake".to_string()));
        assert_eq!(
            logger.format_line("2024-01-01 10:00:00", "started"),
            "[2024-01-01 10:00:00][snake] started"
        );
    }

    #[test]
    fn test_second_init_keeps_first_logger() {
        init_logger(Some("first".to_string()));
        init_logger(Some("second".to_string()));
        let logger = LOGGER.get().unwrap();
        assert_eq!(logger.prefix.as_deref(), Some("first"));
        log("logged after init");
    }

    #[test]
    fn test_line_without_prefix() {
        let logger = Logger::new(None);
        assert_eq!(logger.format_line("2024-01-01 10:00:00", "x"), "[2024-01-01 10:00:00] x");
    }
}
