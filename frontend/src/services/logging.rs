/// Diagnostic channel for the page scripts. Everything lands in the browser
/// console and is never shown to visitors.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log("debug", message, Some(component));
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log("info", message, Some(component));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log("warn", message, Some(component));
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log("error", message, Some(component));
    }

    fn log(level: &str, message: &str, component: Option<&str>) {
        let line = format_line(message, component);
        match level {
            "debug" => gloo::console::debug!(line),
            "info" => gloo::console::info!(line),
            "warn" => gloo::console::warn!(line),
            _ => gloo::console::error!(line),
        }
    }
}

fn format_line(message: &str, component: Option<&str>) -> String {
    match component {
        Some(component) => format!("[{}] {}", component, message),
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(format_line("boom", Some("likes")), "[likes] boom");
        assert_eq!(format_line("boom", None), "boom");
    }
}
