//! Top-level session state: which view is on screen and which overlay is
//! running. One controller owns the whole thing; every transition is
//! guarded, so a rejected request can never leave the state half-changed.

use std::fmt;

use log::debug;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Home,
    Skills,
    Projects,
    Contact,
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Skills => "skills",
            View::Projects => "projects",
            View::Contact => "contact",
        }
    }

    pub fn parse(s: &str) -> Option<View> {
        match s {
            "home" => Some(View::Home),
            "skills" => Some(View::Skills),
            "projects" => Some(View::Projects),
            "contact" => Some(View::Contact),
            _ => None,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    Booting,
    Viewing { view: View },
    Transitioning { from: View, to: View },
    HiringOverlay { resume: View },
    Desktop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("still booting")]
    StillBooting,
    #[error("boot already finished")]
    AlreadyBooted,
    #[error("view transition in progress")]
    TransitionInProgress,
    #[error("hire overlay active")]
    OverlayActive,
    #[error("no transition to complete")]
    NotTransitioning,
    #[error("hire overlay not active")]
    NoOverlay,
    #[error("not in the desktop session")]
    NotInDesktop,
}

#[derive(Debug)]
pub struct SessionFsm {
    state: SessionState,
}

impl SessionFsm {
    pub fn new() -> Self {
        Self { state: SessionState::Booting }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn boot_complete(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Booting => {
                self.set(SessionState::Viewing { view: View::Home });
                Ok(())
            }
            _ => Err(SessionError::AlreadyBooted),
        }
    }

    /// Request a view change. Rejected while booting, mid-transition, or
    /// while the hire overlay runs. Asking for the current view is a
    /// no-op; leaving the desktop switches immediately, everything else
    /// goes through a `Transitioning` phase the shell animates.
    pub fn navigate(&mut self, to: View) -> Result<(), SessionError> {
        match self.state {
            SessionState::Booting => Err(SessionError::StillBooting),
            SessionState::Transitioning { .. } => Err(SessionError::TransitionInProgress),
            SessionState::HiringOverlay { .. } => Err(SessionError::OverlayActive),
            SessionState::Desktop => {
                self.set(SessionState::Viewing { view: to });
                Ok(())
            }
            SessionState::Viewing { view } if view == to => Ok(()),
            SessionState::Viewing { view } => {
                self.set(SessionState::Transitioning { from: view, to });
                Ok(())
            }
        }
    }

    pub fn transition_complete(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Transitioning { to, .. } => {
                self.set(SessionState::Viewing { view: to });
                Ok(())
            }
            _ => Err(SessionError::NotTransitioning),
        }
    }

    /// The hire sequence always plays over the home view and resumes
    /// there. Re-requesting while it runs is a no-op.
    pub fn hire(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Booting => Err(SessionError::StillBooting),
            SessionState::Transitioning { .. } => Err(SessionError::TransitionInProgress),
            SessionState::HiringOverlay { .. } => Ok(()),
            SessionState::Viewing { .. } | SessionState::Desktop => {
                self.set(SessionState::HiringOverlay { resume: View::Home });
                Ok(())
            }
        }
    }

    pub fn hire_complete(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::HiringOverlay { resume } => {
                self.set(SessionState::Viewing { view: resume });
                Ok(())
            }
            _ => Err(SessionError::NoOverlay),
        }
    }

    pub fn enter_desktop(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Booting => Err(SessionError::StillBooting),
            SessionState::Transitioning { .. } => Err(SessionError::TransitionInProgress),
            SessionState::HiringOverlay { .. } => Err(SessionError::OverlayActive),
            SessionState::Desktop => Ok(()),
            SessionState::Viewing { .. } => {
                self.set(SessionState::Desktop);
                Ok(())
            }
        }
    }

    pub fn exit_desktop(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Desktop => {
                self.set(SessionState::Viewing { view: View::Home });
                Ok(())
            }
            _ => Err(SessionError::NotInDesktop),
        }
    }

    fn set(&mut self, next: SessionState) {
        debug!("session {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

impl Default for SessionFsm {
    fn default() -> Self {
        Self::new()
    }
}
