use crate::{
    error::{AppError, AppResult},
    models::RequestPhase,
};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug)]
struct SessionState {
    phase: RequestPhase,
    last_outcome: Option<RequestPhase>,
}

/// Tracks the lifecycle of the single recommendation request allowed at a time
///
/// `begin` refuses to start while another request is in flight. The returned
/// [`RequestGuard`] moves the request through its phases and puts the session
/// back to `Idle` when dropped.
#[derive(Debug, Clone)]
pub struct RequestSession {
    state: Arc<Mutex<SessionState>>,
}

impl Default for RequestSession {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestSession {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState {
                phase: RequestPhase::Idle,
                last_outcome: None,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Current phase of the session
    pub fn phase(&self) -> RequestPhase {
        self.lock().phase
    }

    /// Terminal phase reported by the most recent request
    pub fn last_outcome(&self) -> Option<RequestPhase> {
        self.lock().last_outcome
    }

    /// Starts a new request in the `Resolving` phase
    pub fn begin(&self) -> AppResult<RequestGuard> {
        let mut state = self.lock();
        if state.phase != RequestPhase::Idle {
            return Err(AppError::RequestInFlight);
        }
        state.phase = RequestPhase::Resolving;

        Ok(RequestGuard {
            session: self.clone(),
        })
    }
}

/// Handle to the in-flight request
#[derive(Debug)]
pub struct RequestGuard {
    session: RequestSession,
}

impl RequestGuard {
    pub fn advance(&self, phase: RequestPhase) {
        let mut state = self.session.lock();
        tracing::debug!(from = %state.phase, to = %phase, "Request phase transition");
        state.phase = phase;
        if phase.is_terminal() {
            state.last_outcome = Some(phase);
        }
    }
}

impl Drop for RequestGuard {
    fn drop(&mut self) {
        let mut state = self.session.lock();
        if state.phase.is_in_flight() {
            // Dropped mid-request, e.g. the caller went away
            state.last_outcome = Some(RequestPhase::Failed);
        }
        state.phase = RequestPhase::Idle;
    }
}
