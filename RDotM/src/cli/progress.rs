//! CLI progress display utilities
//!
//! Step indicators in the form `[1/3] 🔍 Scanning resources...`.

use std::time::Duration;

use console::{Emoji, style};
use indicatif::HumanDuration;

use crate::codegen::{GeneratePhase, GenerateProgress};

/// Magnifying glass - for reading/scanning operations
pub static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
/// Gear - for rendering
pub static GEAR: Emoji<'_, '_> = Emoji("⚙️  ", "");
/// Floppy disk - for writing/saving operations
pub static DISK: Emoji<'_, '_> = Emoji("💾 ", "");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

/// Print a step indicator: `[1/3] 🔍 Message...`
pub fn print_step(current: usize, total: usize, emoji: &Emoji, msg: &str) {
    println!(
        "{} {}{}",
        style(format!("[{current}/{total}]")).bold().dim(),
        emoji,
        msg
    );
}

/// Print completion message: `✨ Done in 2s`
pub fn print_done(elapsed: Duration) {
    println!("{} Done in {}", SPARKLE, HumanDuration(elapsed));
}

/// Print one generation progress update as a step line.
pub fn print_generate_progress(progress: &GenerateProgress) {
    let emoji = match progress.phase {
        GeneratePhase::Scanning => &LOOKING_GLASS,
        GeneratePhase::Rendering => &GEAR,
        GeneratePhase::Writing => &DISK,
        GeneratePhase::Complete => return,
    };

    let msg = match &progress.current_file {
        Some(file) => format!("{} {}...", progress.phase.as_str(), style(file).cyan()),
        None => format!("{}...", progress.phase.as_str()),
    };
    print_step(progress.current, progress.total, emoji, &msg);
}
