//! Per-user multi-turn application state.
//!
//! The store is owned by the caller and injected into the bot; nothing
//! here is global. Sessions live in memory only; after a restart the
//! flow simply starts over, which is acceptable. Abandoned sessions are
//! overwritten by the next Idle-start interaction and are never
//! garbage-collected (bounded by the active user population).

use crate::models::LeaveType;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Flow position. Idle doubles as "no active flow".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Idle,
    AwaitingType,
    AwaitingDates,
}

#[derive(Debug, Default)]
pub struct Session {
    pub step: Step,
    pub pending_type: Option<LeaveType>,
    pub pending_dates: Vec<NaiveDate>,
}

impl Session {
    pub fn reset(&mut self) {
        *self = Session::default();
    }
}

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<i64, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Created lazily on first message.
    pub fn get_or_create(&mut self, user_id: i64) -> &mut Session {
        self.sessions.entry(user_id).or_default()
    }

    pub fn step(&self, user_id: i64) -> Step {
        self.sessions.get(&user_id).map(|s| s.step).unwrap_or_default()
    }

    /// Clear-on-logout hook for the caller.
    pub fn clear(&mut self, user_id: i64) {
        self.sessions.remove(&user_id);
    }
}
