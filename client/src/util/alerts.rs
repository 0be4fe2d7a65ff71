//! Decorative threat-alert generation.
//!
//! Produces the fixed set of fake "threat" badges floating behind the scan
//! and login cards. The set is generated once per page mount from a seed and
//! then only read.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::state::flow::Stage;

/// Number of badges in one overlay.
pub const ALERT_COUNT: usize = 15;

pub const ALERT_MESSAGES: [&str; 4] = ["SQL_INJECTION", "MALWARE_LOADED", "BREACH_ATTEMPT", "UNAUTHORIZED_IP"];

/// Badges are placed inside `[SAFE_ZONE_MIN, SAFE_ZONE_MIN + SAFE_ZONE_SPAN)` percent.
const SAFE_ZONE_MIN: f64 = 10.0;
const SAFE_ZONE_SPAN: f64 = 80.0;
const CRITICAL_THRESHOLD: f64 = 0.6;
const MAX_STAGGER_S: f64 = 0.8;

#[derive(Clone, Debug, PartialEq)]
pub struct AlertRecord {
    pub id: usize,
    pub message: &'static str,
    pub top_pct: f64,
    pub left_pct: f64,
    pub critical: bool,
    pub delay_s: f64,
}

impl AlertRecord {
    /// Badge text: `!!` marks critical alerts, `>` the rest.
    pub fn label(&self) -> String {
        let marker = if self.critical { "!!" } else { ">" };
        format!("{marker} {}", self.message)
    }

    /// Inline style positioning the badge and staggering its entrance.
    pub fn style(&self) -> String {
        format!(
            "top: {:.2}%; left: {:.2}%; animation-delay: {:.2}s;",
            self.top_pct, self.left_pct, self.delay_s
        )
    }
}

/// Immutable, cheaply clonable alert set.
#[derive(Clone, Debug, PartialEq)]
pub struct AlertSet {
    records: Arc<[AlertRecord]>,
}

impl AlertSet {
    /// Generate `count` records from `seed`. The same seed always yields the
    /// same set.
    pub fn generate(seed: u64, count: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let records = (0..count)
            .map(|id| AlertRecord {
                id,
                message: ALERT_MESSAGES[rng.random_range(0..ALERT_MESSAGES.len())],
                top_pct: rng.random::<f64>() * SAFE_ZONE_SPAN + SAFE_ZONE_MIN,
                left_pct: rng.random::<f64>() * SAFE_ZONE_SPAN + SAFE_ZONE_MIN,
                critical: rng.random::<f64>() > CRITICAL_THRESHOLD,
                delay_s: rng.random::<f64>() * MAX_STAGGER_S,
            })
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[AlertRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether `other` shares this set's backing storage.
    #[cfg(test)]
    pub fn same_set(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}

/// Fill `slot` on first use; later calls keep the existing set and never
/// draw a seed. Returns `true` only when a set was generated.
pub fn ensure_generated(slot: &mut Option<AlertSet>, seed: impl FnOnce() -> u64) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(AlertSet::generate(seed(), ALERT_COUNT));
    true
}

/// Overlay opacity for the current stage and theme; `None` once the
/// dashboard is up and the overlay is removed.
pub fn overlay_opacity(stage: Stage, dark_mode: bool) -> Option<f64> {
    match stage {
        Stage::Scanning if dark_mode => Some(0.7),
        Stage::Scanning => Some(0.4),
        Stage::Login => Some(0.1),
        Stage::Dashboard => None,
    }
}

/// Seed for a fresh page mount.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn mount_seed() -> u64 {
    let clock = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    clock.rotate_left(32) ^ noise
}
