//! Scan log lines revealed as the fake scan progresses.

#[cfg(test)]
#[path = "scan_log_test.rs"]
mod scan_log_test;

pub const SCAN_STEPS: [&str; 4] = [
    "Inbound connection...",
    "Mapping Cyber Alert Nepal assets...",
    "Retrieving SMS_tiers...",
    "Analyzing security vectors...",
];

/// Step message active at `progress`, or `None` once the scan is complete.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn active_step(progress: f64) -> Option<&'static str> {
    let idx = ((progress.max(0.0) / 100.0) * SCAN_STEPS.len() as f64).floor() as usize;
    SCAN_STEPS.get(idx).copied()
}

/// Append the active step to `log` unless it is already there.
///
/// Returns `true` when a line was added.
pub fn advance(log: &mut Vec<&'static str>, progress: f64) -> bool {
    match active_step(progress) {
        Some(step) if !log.contains(&step) => {
            log.push(step);
            true
        }
        _ => false,
    }
}

/// Percentage label shown beside the progress bar.
pub fn percent_label(progress: f64) -> String {
    format!("{}%", progress.clamp(0.0, 100.0).round())
}
