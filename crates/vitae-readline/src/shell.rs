use std::sync::Mutex;

use colored::Colorize;

use vitae_core::shell::{Navigator, Notifier};

/// Remembers the last route requested so the REPL can switch pages.
#[derive(Default)]
pub struct TerminalNavigator {
    pending: Mutex<Option<String>>,
}

impl TerminalNavigator {
    pub fn take_route(&self) -> Option<String> {
        self.pending.lock().ok().and_then(|mut route| route.take())
    }
}

impl Navigator for TerminalNavigator {
    fn redirect(&self, route: &str) {
        if let Ok(mut pending) = self.pending.lock() {
            *pending = Some(route.to_string());
        }
    }
}

pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        println!("{}", format!("! {}", message).bright_yellow().bold());
    }
}
