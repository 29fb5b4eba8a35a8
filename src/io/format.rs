//! Nice Fermidump output formatting.

use std::fmt;

use log;

const FERMIDUMP_BANNER_LENGTH: usize = 103;

/// Logs a main output line to the `fermidump-output` logger.
macro_rules! fermidump_output {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::info!(target: "fermidump-output", $fmt, $($($arg)*)?); }
}

pub(crate) use fermidump_output;

/// Logs a nicely formatted section title to the `fermidump-output` logger.
pub(crate) fn log_title(title: &str) {
    let length = title.chars().count().max(FERMIDUMP_BANNER_LENGTH - 6);
    let bar = "─".repeat(length);
    fermidump_output!("┌──{bar}──┐");
    fermidump_output!("│§ {title:^length$} §│");
    fermidump_output!("└──{bar}──┘");
}

/// Writes a nicely formatted subtitle.
pub(crate) fn write_subtitle(f: &mut fmt::Formatter<'_>, subtitle: &str) -> fmt::Result {
    let length = subtitle.chars().count();
    let bar = "═".repeat(length);
    writeln!(f, "{subtitle}")?;
    writeln!(f, "{bar}")?;
    Ok(())
}

/// Logs a nicely formatted subtitle to the `fermidump-output` logger.
pub(crate) fn log_subtitle(subtitle: &str) {
    let length = subtitle.chars().count();
    let bar = "═".repeat(length);
    fermidump_output!("{}", subtitle);
    fermidump_output!("{}", bar);
}

/// Turns a boolean into a string of `yes` or `no`.
pub(crate) fn nice_bool(b: bool) -> String {
    if b {
        "yes".to_string()
    } else {
        "no".to_string()
    }
}

/// A trait for logging Fermidump outputs nicely.
pub(crate) trait FermidumpOutput: fmt::Debug + fmt::Display {
    /// Logs display output nicely.
    fn log_output_display(&self) {
        let lines = self.to_string();
        lines.lines().for_each(|line| {
            fermidump_output!("{line}");
        })
    }
}

// Blanket implementation
impl<T> FermidumpOutput for T where T: fmt::Debug + fmt::Display {}
