use super::*;

/// Virtual clock that executes `FlowCommand`s the way the page's browser
/// timer executor does, in milliseconds.
struct Timeline {
    now_ms: u64,
    state: FlowState,
    scan_period: Option<u32>,
    next_tick_ms: u64,
    pending: Vec<(u64, FlowEvent)>,
    stages: Vec<Stage>,
}

impl Timeline {
    fn new() -> Self {
        let (state, commands) = FlowState::start();
        let mut timeline = Self {
            now_ms: 0,
            state,
            scan_period: None,
            next_tick_ms: 0,
            pending: Vec::new(),
            stages: vec![Stage::Scanning],
        };
        timeline.run(commands);
        timeline
    }

    fn run(&mut self, commands: Vec<FlowCommand>) {
        for command in commands {
            match command {
                FlowCommand::StartScan { period_ms } => {
                    self.scan_period = Some(period_ms);
                    self.next_tick_ms = self.now_ms + u64::from(period_ms);
                }
                FlowCommand::StopScan => self.scan_period = None,
                FlowCommand::Schedule { delay_ms, event } => {
                    self.pending.push((self.now_ms + u64::from(delay_ms), event));
                }
            }
        }
    }

    fn dispatch(&mut self, event: FlowEvent) {
        let commands = self.state.apply(event);
        if self.stages.last() != Some(&self.state.stage) {
            self.stages.push(self.state.stage);
        }
        self.run(commands);
    }

    /// Advance to `target_ms`, firing every due timer in time order.
    fn advance_to(&mut self, target_ms: u64) {
        loop {
            let next_tick = self.scan_period.map(|_| self.next_tick_ms);
            let next_pending = self.pending.iter().map(|(at, _)| *at).min();
            let next = match (next_tick, next_pending) {
                (Some(a), Some(b)) => a.min(b),
                (Some(a), None) => a,
                (None, Some(b)) => b,
                (None, None) => break,
            };
            if next > target_ms {
                break;
            }
            self.now_ms = next;
            if next_tick == Some(next) {
                if let Some(period) = self.scan_period {
                    self.next_tick_ms += u64::from(period);
                }
                self.dispatch(FlowEvent::ScanTick);
            } else {
                let idx = self
                    .pending
                    .iter()
                    .position(|(at, _)| *at == next)
                    .unwrap();
                let (_, event) = self.pending.remove(idx);
                self.dispatch(event);
            }
        }
        self.now_ms = target_ms;
    }

    fn advance_by(&mut self, delta_ms: u64) {
        self.advance_to(self.now_ms + delta_ms);
    }
}

/// Ticks needed to go from 0 to 100.
fn ticks_to_full() -> u64 {
    (PROGRESS_MAX / SCAN_STEP) as u64
}

fn scan_done_ms() -> u64 {
    ticks_to_full() * u64::from(SCAN_TICK_MS)
}

// =============================================================
// Start
// =============================================================

#[test]
fn start_enters_scanning_and_requests_scan_timer() {
    let (state, commands) = FlowState::start();
    assert_eq!(state.stage, Stage::Scanning);
    assert_eq!(state.progress, 0.0);
    assert!(!state.show_ack);
    assert!(!state.show_pricing);
    assert_eq!(commands, vec![FlowCommand::StartScan { period_ms: SCAN_TICK_MS }]);
}

#[test]
fn stage_default_is_scanning() {
    assert_eq!(Stage::default(), Stage::Scanning);
    assert_eq!(Stage::Scanning.as_str(), "scanning");
    assert_eq!(Stage::Login.as_str(), "login");
    assert_eq!(Stage::Dashboard.as_str(), "dashboard");
}

// =============================================================
// Scan progress
// =============================================================

#[test]
fn scan_tick_adds_fixed_step() {
    let (mut state, _) = FlowState::start();
    assert!(state.apply(FlowEvent::ScanTick).is_empty());
    assert_eq!(state.progress, SCAN_STEP);
    state.apply(FlowEvent::ScanTick);
    assert_eq!(state.progress, SCAN_STEP * 2.0);
}

#[test]
fn progress_is_monotonic_and_clamped() {
    let (mut state, _) = FlowState::start();
    let mut last = state.progress;
    for _ in 0..200 {
        state.apply(FlowEvent::ScanTick);
        assert!(state.progress >= last);
        assert!(state.progress <= PROGRESS_MAX);
        last = state.progress;
    }
    assert_eq!(state.progress, PROGRESS_MAX);
}

#[test]
fn progress_clamps_when_step_overshoots() {
    let mut state = FlowState { progress: 99.0, ..FlowState::default() };
    let commands = state.apply(FlowEvent::ScanTick);
    assert_eq!(state.progress, PROGRESS_MAX);
    assert!(state.scan_complete);
    assert_eq!(commands[0], FlowCommand::StopScan);
}

#[test]
fn completing_scan_stops_timer_and_schedules_settle() {
    let (mut state, _) = FlowState::start();
    let mut commands = Vec::new();
    for _ in 0..ticks_to_full() {
        commands = state.apply(FlowEvent::ScanTick);
    }
    assert_eq!(state.progress, PROGRESS_MAX);
    assert_eq!(state.stage, Stage::Scanning);
    assert_eq!(
        commands,
        vec![
            FlowCommand::StopScan,
            FlowCommand::Schedule { delay_ms: SCAN_SETTLE_MS, event: FlowEvent::ScanSettled },
        ]
    );
}

#[test]
fn ticks_after_completion_are_ignored() {
    let (mut state, _) = FlowState::start();
    for _ in 0..ticks_to_full() {
        state.apply(FlowEvent::ScanTick);
    }
    let snapshot = state.clone();
    assert!(state.apply(FlowEvent::ScanTick).is_empty());
    assert_eq!(state, snapshot);
}

#[test]
fn settle_before_completion_is_ignored() {
    let (mut state, _) = FlowState::start();
    state.apply(FlowEvent::ScanTick);
    assert!(state.apply(FlowEvent::ScanSettled).is_empty());
    assert_eq!(state.stage, Stage::Scanning);
}

#[test]
fn login_follows_full_progress_after_exactly_one_settle_delay() {
    let mut timeline = Timeline::new();
    timeline.advance_to(scan_done_ms());
    assert_eq!(timeline.state.progress, PROGRESS_MAX);
    assert_eq!(timeline.state.stage, Stage::Scanning);
    assert!(timeline.scan_period.is_none());

    timeline.advance_by(u64::from(SCAN_SETTLE_MS) - 1);
    assert_eq!(timeline.state.stage, Stage::Scanning);

    timeline.advance_by(1);
    assert_eq!(timeline.state.stage, Stage::Login);
}

// =============================================================
// Login submission
// =============================================================

#[test]
fn login_submit_during_scan_is_ignored() {
    let (mut state, _) = FlowState::start();
    assert!(state.apply(FlowEvent::LoginSubmitted).is_empty());
    assert_eq!(state.stage, Stage::Scanning);
    assert!(!state.show_ack);
}

#[test]
fn login_submit_enters_dashboard_with_ack() {
    let mut state =
        FlowState { stage: Stage::Login, progress: PROGRESS_MAX, scan_complete: true, ..FlowState::default() };
    let commands = state.apply(FlowEvent::LoginSubmitted);
    assert_eq!(state.stage, Stage::Dashboard);
    assert!(state.show_ack);
    assert!(!state.show_pricing);
    assert_eq!(
        commands,
        vec![FlowCommand::Schedule { delay_ms: ACK_VISIBLE_MS, event: FlowEvent::AckElapsed }]
    );
}

#[test]
fn second_login_submit_is_ignored() {
    let mut state = FlowState { stage: Stage::Login, ..FlowState::default() };
    state.apply(FlowEvent::LoginSubmitted);
    assert!(state.apply(FlowEvent::LoginSubmitted).is_empty());
    assert_eq!(state.stage, Stage::Dashboard);
}

#[test]
fn login_accepts_any_non_empty_values() {
    assert!(login_accepts("a@b.c", "x"));
    assert!(login_accepts("nobody@nowhere.test", "wrong-password"));
    assert!(login_accepts(" ", " "));
}

#[test]
fn login_rejects_empty_fields() {
    assert!(!login_accepts("", ""));
    assert!(!login_accepts("a@b.c", ""));
    assert!(!login_accepts("", "secret"));
}

// =============================================================
// Reveal sequence
// =============================================================

#[test]
fn reveal_runs_in_three_beats() {
    let mut timeline = Timeline::new();
    timeline.advance_to(scan_done_ms() + u64::from(SCAN_SETTLE_MS));
    assert_eq!(timeline.state.stage, Stage::Login);

    let submitted_at = timeline.now_ms;
    timeline.dispatch(FlowEvent::LoginSubmitted);

    // t = 0
    assert_eq!(timeline.state.stage, Stage::Dashboard);
    assert!(timeline.state.show_ack);
    assert!(!timeline.state.show_pricing);

    // t = 1.5s
    timeline.advance_to(submitted_at + 1500);
    assert!(!timeline.state.show_ack);
    assert!(!timeline.state.show_pricing);

    // t = 1.9s
    timeline.advance_to(submitted_at + 1900);
    assert!(!timeline.state.show_ack);
    assert!(timeline.state.show_pricing);
}

#[test]
fn pricing_stays_hidden_just_before_gap_elapses() {
    let mut state = FlowState { stage: Stage::Login, ..FlowState::default() };
    state.apply(FlowEvent::LoginSubmitted);
    state.apply(FlowEvent::AckElapsed);
    assert!(!state.show_pricing);
    state.apply(FlowEvent::PricingGapElapsed);
    assert!(state.show_pricing);
}

#[test]
fn pricing_gap_while_ack_visible_is_ignored() {
    let mut state = FlowState { stage: Stage::Login, ..FlowState::default() };
    state.apply(FlowEvent::LoginSubmitted);
    assert!(state.apply(FlowEvent::PricingGapElapsed).is_empty());
    assert!(!state.show_pricing);
}

#[test]
fn reveal_constants_keep_their_order() {
    assert!(SCAN_TICK_MS < SCAN_SETTLE_MS);
    assert!(PRICING_GAP_MS < ACK_VISIBLE_MS);
    assert_eq!(ACK_VISIBLE_MS + PRICING_GAP_MS, 1900);
}

// =============================================================
// Stage path
// =============================================================

#[test]
fn stages_follow_the_single_forward_path() {
    let mut timeline = Timeline::new();
    timeline.advance_to(10_000);
    timeline.dispatch(FlowEvent::LoginSubmitted);
    timeline.advance_by(10_000);

    // Stray events after the flow finishes change nothing.
    for event in [FlowEvent::ScanTick, FlowEvent::ScanSettled, FlowEvent::LoginSubmitted, FlowEvent::AckElapsed] {
        timeline.dispatch(event);
    }

    assert_eq!(timeline.stages, vec![Stage::Scanning, Stage::Login, Stage::Dashboard]);
    assert!(timeline.state.show_pricing);
    assert!(!timeline.state.show_ack);
    assert!(timeline.pending.is_empty());
}

#[test]
fn stage_order_is_forward_only() {
    assert!(Stage::Scanning < Stage::Login);
    assert!(Stage::Login < Stage::Dashboard);
}
