//! Message-processing facade consumed by the UI layer.
//!
//! Every fault is caught here and converted to a user-safe reply; no
//! internal error may terminate the chat session.

use crate::chat::flow;
use crate::chat::responder;
use crate::chat::session::{SessionStore, Step};
use crate::config::Config;
use crate::db::ledger::Ledger;
use crate::errors::{AppError, AppResult};
use crate::models::Role;
use crate::nlp::intent::{self, MessageKind};
use crate::policy::rules::LeaveRules;
use crate::utils::date;

pub struct LeaveBot {
    ledger: Ledger,
    sessions: SessionStore,
    rules: LeaveRules,
    config: Config,
}

impl LeaveBot {
    pub fn new(ledger: Ledger, config: Config) -> Self {
        Self {
            ledger,
            sessions: SessionStore::new(),
            rules: config.rules.clone(),
            config,
        }
    }

    /// Process one user turn. Both the user message and the reply are
    /// persisted to the chat log.
    pub fn process_message(&mut self, user_id: i64, text: &str) -> String {
        let text = text.trim();
        if text.is_empty() {
            return "Please provide a valid message.".to_string();
        }

        if let Err(e) = self.ledger.append_chat(user_id, Role::User, text) {
            crate::ui::messages::warning(format!("Could not persist chat turn: {}", e));
        }

        let response = match self.dispatch(user_id, text) {
            Ok(r) => r,
            Err(AppError::StorageContention(_)) => responder::storage_busy(),
            Err(e) => {
                crate::ui::messages::warning(format!("Chat processing failed: {}", e));
                responder::error_fallback()
            }
        };

        if let Err(e) = self.ledger.append_chat(user_id, Role::Assistant, &response) {
            crate::ui::messages::warning(format!("Could not persist chat turn: {}", e));
        }
        response
    }

    fn dispatch(&mut self, user_id: i64, text: &str) -> AppResult<String> {
        let today = date::today();

        match self.sessions.step(user_id) {
            Step::AwaitingType => {
                let session = self.sessions.get_or_create(user_id);
                Ok(flow::supply_type(session, text, today))
            }
            Step::AwaitingDates => {
                let session = self.sessions.get_or_create(user_id);
                flow::supply_dates(
                    &mut self.ledger,
                    session,
                    &self.config,
                    &self.rules,
                    user_id,
                    text,
                    today,
                )
            }
            Step::Idle => {
                if let Some(reply) = flow::try_continuation(
                    &mut self.ledger,
                    &self.config,
                    &self.rules,
                    user_id,
                    text,
                    today,
                )? {
                    return Ok(reply);
                }

                if intent::is_application(text) {
                    let session = self.sessions.get_or_create(user_id);
                    return flow::start_application(
                        &mut self.ledger,
                        session,
                        &self.config,
                        &self.rules,
                        user_id,
                        text,
                        today,
                    );
                }

                self.non_application(user_id, text)
            }
        }
    }

    fn non_application(&mut self, user_id: i64, text: &str) -> AppResult<String> {
        if let Some(lt) = intent::bare_leave_type(text) {
            return Ok(responder::leave_type_info(lt));
        }
        let today = date::today();
        Ok(match intent::classify_message(text) {
            MessageKind::Balance => {
                responder::balance_summary(self.ledger.balance(user_id)?.as_ref(), today)
            }
            MessageKind::Status => {
                responder::status_summary(&self.ledger.requests_for_user(user_id)?)
            }
            MessageKind::Policy => responder::policy_summary(&self.rules, today),
            MessageKind::Greeting => {
                responder::greeting(self.ledger.balance(user_id)?.as_ref())
            }
            MessageKind::Help => responder::help(),
            MessageKind::Apply | MessageKind::Other => responder::unknown(text),
        })
    }

    /// Chat history paired up for display: (user turn, assistant turn).
    pub fn chat_history(&mut self, user_id: i64) -> AppResult<Vec<(String, String)>> {
        let records = self.ledger.chat_history(user_id, 50)?;
        let mut pairs = Vec::new();
        let mut current_user: Option<String> = None;
        for record in records {
            match record.role {
                Role::User => current_user = Some(record.message),
                Role::Assistant => {
                    if let Some(user_msg) = current_user.take() {
                        pairs.push((user_msg, record.message));
                    }
                }
            }
        }
        Ok(pairs)
    }

    /// Clear the persisted history and the in-memory flow for one user.
    pub fn clear_chat_history(&mut self, user_id: i64) -> bool {
        self.sessions.clear(user_id);
        self.ledger.clear_chat(user_id).is_ok()
    }

    /// Logout hook: drop the in-memory flow only.
    pub fn end_session(&mut self, user_id: i64) {
        self.sessions.clear(user_id);
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }
}
