//! Stage sequencer for the scan → login → dashboard flow.
//!
//! DESIGN
//! ======
//! The sequencer is a pure state machine. `FlowState::apply` consumes one
//! `FlowEvent` and returns the timer work the caller must perform as
//! `FlowCommand`s. The page owns the browser timers and feeds their firings
//! back in as events, so every timing rule here is testable with a virtual
//! clock and no browser.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

/// Period of the repeating scan-progress timer.
pub const SCAN_TICK_MS: u32 = 30;
/// Progress added on every scan tick.
pub const SCAN_STEP: f64 = 2.5;
/// Pause between the bar reaching 100% and the login card appearing.
pub const SCAN_SETTLE_MS: u32 = 400;
/// How long the "Access Granted" acknowledgement stays up.
pub const ACK_VISIBLE_MS: u32 = 1500;
/// Gap between the acknowledgement fading and the pricing cards appearing.
pub const PRICING_GAP_MS: u32 = 400;

pub const PROGRESS_MAX: f64 = 100.0;

/// Discrete phase of the flow. Only ever advances forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    #[default]
    Scanning,
    Login,
    Dashboard,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scanning => "scanning",
            Self::Login => "login",
            Self::Dashboard => "dashboard",
        }
    }
}

/// Inputs to the sequencer: timer firings and the login submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowEvent {
    /// The repeating scan timer fired.
    ScanTick,
    /// The settle delay after a complete scan elapsed.
    ScanSettled,
    /// The login form was submitted with its required fields filled.
    LoginSubmitted,
    /// The acknowledgement display interval elapsed.
    AckElapsed,
    /// The gap before the pricing reveal elapsed.
    PricingGapElapsed,
}

/// Timer work requested by the sequencer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowCommand {
    /// Start the repeating scan timer, firing `ScanTick` every `period_ms`.
    StartScan { period_ms: u32 },
    /// Cancel the repeating scan timer.
    StopScan,
    /// Deliver `event` once after `delay_ms`.
    Schedule { delay_ms: u32, event: FlowEvent },
}

/// Sequencer state owned by the flow page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlowState {
    pub stage: Stage,
    pub progress: f64,
    /// Progress is pinned and the settle delay is pending.
    pub scan_complete: bool,
    pub show_ack: bool,
    pub show_pricing: bool,
}

impl FlowState {
    /// Enter the scanning stage and request the scan timer.
    #[must_use]
    pub fn start() -> (Self, Vec<FlowCommand>) {
        (Self::default(), vec![FlowCommand::StartScan { period_ms: SCAN_TICK_MS }])
    }

    /// Apply one event. Events that do not belong to the current stage are
    /// ignored and produce no commands.
    pub fn apply(&mut self, event: FlowEvent) -> Vec<FlowCommand> {
        match event {
            FlowEvent::ScanTick => self.on_scan_tick(),
            FlowEvent::ScanSettled => {
                if self.stage != Stage::Scanning || !self.scan_complete {
                    return Vec::new();
                }
                self.stage = Stage::Login;
                Vec::new()
            }
            FlowEvent::LoginSubmitted => {
                if self.stage != Stage::Login {
                    return Vec::new();
                }
                self.stage = Stage::Dashboard;
                self.show_ack = true;
                vec![FlowCommand::Schedule { delay_ms: ACK_VISIBLE_MS, event: FlowEvent::AckElapsed }]
            }
            FlowEvent::AckElapsed => {
                if self.stage != Stage::Dashboard || !self.show_ack {
                    return Vec::new();
                }
                self.show_ack = false;
                vec![FlowCommand::Schedule { delay_ms: PRICING_GAP_MS, event: FlowEvent::PricingGapElapsed }]
            }
            FlowEvent::PricingGapElapsed => {
                if self.stage != Stage::Dashboard || self.show_ack {
                    return Vec::new();
                }
                self.show_pricing = true;
                Vec::new()
            }
        }
    }

    fn on_scan_tick(&mut self) -> Vec<FlowCommand> {
        if self.stage != Stage::Scanning || self.scan_complete {
            return Vec::new();
        }
        self.progress = (self.progress + SCAN_STEP).min(PROGRESS_MAX);
        if self.progress < PROGRESS_MAX {
            return Vec::new();
        }
        self.scan_complete = true;
        vec![
            FlowCommand::StopScan,
            FlowCommand::Schedule { delay_ms: SCAN_SETTLE_MS, event: FlowEvent::ScanSettled },
        ]
    }
}

/// Whether the main login form may be submitted.
///
/// Mirrors the native `required` check on both inputs: any non-empty value
/// passes, whitespace included. Credentials are never verified.
pub fn login_accepts(email: &str, password: &str) -> bool {
    !email.is_empty() && !password.is_empty()
}
