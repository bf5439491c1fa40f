//! Colored terminal output. `colored` honors `NO_COLOR` and `CLICOLOR` on its own.

use std::fmt::Display;
use std::io::Write;

use colored::Colorize;

use crate::stepper::StepObserver;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl Display + ?Sized)) {
    println!("{}", msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Prints each step as it becomes visible: the highlighted value, then the trail so far.
#[derive(Debug, Default)]
pub struct StepPrinter {
    trail: Vec<String>,
}

impl StepPrinter {
    /// A printer with an empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything printed so far.
    pub fn trail(&self) -> &[String] {
        &self.trail
    }
}

impl<K: Display> StepObserver<K> for StepPrinter {
    fn on_step_visible(&mut self, value: &K) {
        let value = value.to_string();
        println!(
            "{} {:>6}   {}",
            "→".yellow(),
            value.yellow().bold(),
            self.trail.join(" ").dimmed()
        );
        self.trail.push(value);
        std::io::stdout().flush().ok();
    }

    fn on_completed(&mut self) {
        success(&format!("visited {}: {}", self.trail.len(), self.trail.join(" ")));
    }
}
