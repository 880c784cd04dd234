//! Session bootstrap state machine run once at application entry.
//!
//! DESIGN
//! ======
//! The flow is a pure machine: callers feed it the stored token and network
//! completion events, and it returns `BootstrapCommand`s describing the side
//! effects to perform (fetches, timer control, cache writes, one navigation).
//! The machine never touches the browser, which keeps every sequencing and
//! error-mapping rule testable natively. `net::bootstrap` interprets the
//! commands against the live collaborators.
//!
//! Exactly one terminal outcome is reached per run: completion is funneled
//! through a single helper that disarms the timeout and records the outcome,
//! and all events arriving after that are ignored.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::net::error::ApiError;
use crate::net::types::{FamilyMember, UserProfile};

/// How long the user-validation window may stay outstanding before the run
/// is forced to fail.
pub const BOOTSTRAP_TIMEOUT_MS: u32 = 30_000;

/// Route taken when the signed-in user has no family yet.
pub const FAMILY_SETUP_ROUTE: &str = "/family-setup?info=no-family";

/// Route taken when bootstrap fully succeeds.
pub const HOME_ROUTE: &str = "/home";

/// Why a bootstrap run failed. Each variant carries its own reason code so
/// the login page can render a specific message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureReason {
    /// No token in the session store; no network call was made.
    NoToken,
    /// The server rejected the token (HTTP 401).
    TokenInvalid,
    /// The token mapped to no user (HTTP 404).
    UserNotFound,
    /// The user fetch never produced a response.
    Network,
    /// The user fetch failed in any other way.
    Validation,
    /// The family fetch failed after the user resolved.
    FamilyFetch,
    /// The user-validation window expired.
    Timeout,
}

impl FailureReason {
    /// Query-string code appended to the login route.
    pub fn code(self) -> &'static str {
        match self {
            Self::NoToken => "no-token",
            Self::TokenInvalid => "token-invalid",
            Self::UserNotFound => "user-not-found",
            Self::Network => "network-error",
            Self::Validation => "validation-failed",
            Self::FamilyFetch => "family-fetch-error",
            Self::Timeout => "timeout",
        }
    }

    /// Classify a user-fetch error. Family-fetch errors are all
    /// [`FailureReason::FamilyFetch`] regardless of shape.
    fn from_user_error(error: &ApiError) -> Self {
        match error {
            ApiError::Unauthorized => Self::TokenInvalid,
            ApiError::NotFound => Self::UserNotFound,
            ApiError::Network(_) => Self::Network,
            ApiError::Status(_) | ApiError::Decode(_) => Self::Validation,
        }
    }
}

/// Terminal result of one bootstrap run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// User is signed in but belongs to no family; routed to family setup.
    NoFamily,
    /// User and family both resolved; routed home.
    WithFamily,
    /// The run failed; routed to login with a reason code. A missing token
    /// (the unauthenticated case) lands here as `FailureReason::NoToken`.
    Failed(FailureReason),
}

/// Where the flow currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BootstrapPhase {
    /// Not started, or reset after a completed run.
    #[default]
    Idle,
    /// Token found; user fetch outstanding, timeout armed.
    ValidatingUser,
    /// User resolved with a family id; member fetch outstanding.
    ValidatingFamily,
    /// Terminal; no further events are acted on.
    Complete(BootstrapOutcome),
}

/// Completion events fed to the machine by the driver.
#[derive(Clone, Debug, PartialEq)]
pub enum BootstrapEvent {
    /// The user fetch resolved with a profile.
    UserResolved(UserProfile),
    /// The user fetch failed.
    UserFailed(ApiError),
    /// The family-member fetch resolved.
    FamilyResolved(Vec<FamilyMember>),
    /// The family-member fetch failed.
    FamilyFailed(ApiError),
    /// The timeout timer fired.
    TimedOut,
}

/// Side effects the driver must perform, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum BootstrapCommand {
    /// Issue the user fetch with the stored token.
    FetchUser { token: String },
    /// Issue the family-member fetch.
    FetchFamily { family_id: String },
    /// Arm the 30-second timeout.
    StartTimeout,
    /// Disarm the timeout so a stale timer cannot fire into a finished run.
    CancelTimeout,
    /// Write the fetched profile into the shared auth state.
    CacheUser(UserProfile),
    /// Write the fetched members into the shared family state.
    CacheFamily(Vec<FamilyMember>),
    /// Drop the persisted token and any cached identity (logout side effect).
    ClearSession,
    /// The single navigation of the run.
    Navigate(String),
}

/// The bootstrap flow. One instance per run; owns all of its state.
#[derive(Debug, Default)]
pub struct BootstrapFlow {
    phase: BootstrapPhase,
    timer_armed: bool,
}

impl BootstrapFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a run with the token read from the session store.
    ///
    /// Idempotent while a run is in flight: a second call before completion
    /// returns no commands, so double-invocation (e.g. a re-firing effect)
    /// cannot issue duplicate fetches or a second navigation. After a
    /// completed run a new invocation starts fresh.
    pub fn start(&mut self, token: Option<String>) -> Vec<BootstrapCommand> {
        if matches!(self.phase, BootstrapPhase::ValidatingUser | BootstrapPhase::ValidatingFamily) {
            return Vec::new();
        }
        self.phase = BootstrapPhase::Idle;
        self.timer_armed = false;

        match token {
            None => self.complete(BootstrapOutcome::Failed(FailureReason::NoToken)),
            Some(token) => {
                self.phase = BootstrapPhase::ValidatingUser;
                self.timer_armed = true;
                vec![BootstrapCommand::StartTimeout, BootstrapCommand::FetchUser { token }]
            }
        }
    }

    /// Feed one completion event into the machine.
    ///
    /// Events that do not belong to the current phase, including anything
    /// arriving after a terminal transition, return no commands.
    pub fn apply(&mut self, event: BootstrapEvent) -> Vec<BootstrapCommand> {
        match (self.phase, event) {
            (BootstrapPhase::ValidatingUser, BootstrapEvent::UserResolved(profile)) => {
                let mut commands = self.disarm_timer();
                match profile.family_id.clone() {
                    None => {
                        commands.push(BootstrapCommand::CacheUser(profile));
                        commands.extend(self.complete(BootstrapOutcome::NoFamily));
                    }
                    Some(family_id) => {
                        self.phase = BootstrapPhase::ValidatingFamily;
                        commands.push(BootstrapCommand::CacheUser(profile));
                        commands.push(BootstrapCommand::FetchFamily { family_id });
                    }
                }
                commands
            }
            (BootstrapPhase::ValidatingUser, BootstrapEvent::UserFailed(error)) => {
                self.complete(BootstrapOutcome::Failed(FailureReason::from_user_error(&error)))
            }
            (BootstrapPhase::ValidatingUser, BootstrapEvent::TimedOut) => {
                self.complete(BootstrapOutcome::Failed(FailureReason::Timeout))
            }
            (BootstrapPhase::ValidatingFamily, BootstrapEvent::FamilyResolved(members)) => {
                let mut commands = vec![BootstrapCommand::CacheFamily(members)];
                commands.extend(self.complete(BootstrapOutcome::WithFamily));
                commands
            }
            (BootstrapPhase::ValidatingFamily, BootstrapEvent::FamilyFailed(_)) => {
                self.complete(BootstrapOutcome::Failed(FailureReason::FamilyFetch))
            }
            _ => Vec::new(),
        }
    }

    /// Terminal state of the last run, if it finished.
    pub fn outcome(&self) -> Option<BootstrapOutcome> {
        match self.phase {
            BootstrapPhase::Complete(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.phase, BootstrapPhase::Complete(_))
    }

    /// Funnel for every terminal transition: disarms the timer, records the
    /// outcome, and emits the run's one navigation (plus the logout side
    /// effect on failure). Returns nothing if the run already completed.
    fn complete(&mut self, outcome: BootstrapOutcome) -> Vec<BootstrapCommand> {
        if self.is_complete() {
            return Vec::new();
        }
        let mut commands = self.disarm_timer();
        match outcome {
            BootstrapOutcome::NoFamily => {
                commands.push(BootstrapCommand::Navigate(FAMILY_SETUP_ROUTE.to_owned()));
            }
            BootstrapOutcome::WithFamily => {
                commands.push(BootstrapCommand::Navigate(HOME_ROUTE.to_owned()));
            }
            BootstrapOutcome::Failed(reason) => {
                commands.push(BootstrapCommand::ClearSession);
                commands.push(BootstrapCommand::Navigate(login_route(reason)));
            }
        }
        self.phase = BootstrapPhase::Complete(outcome);
        commands
    }

    fn disarm_timer(&mut self) -> Vec<BootstrapCommand> {
        if self.timer_armed {
            self.timer_armed = false;
            vec![BootstrapCommand::CancelTimeout]
        } else {
            Vec::new()
        }
    }
}

/// Login route carrying the failure reason code.
pub fn login_route(reason: FailureReason) -> String {
    format!("/login?error={}", reason.code())
}
