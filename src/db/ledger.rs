//! The leave ledger: balances, requests, history and the chat log.
//!
//! Every mutation is a single-writer transaction over an in-memory
//! snapshot of the affected tables, committed atomically and retried
//! under the injected policy when another writer holds the store.
//! Multi-date submissions are per-date: a failure halts the loop but
//! does not roll back dates already committed.

use crate::db::pool::DbPool;
use crate::db::retry::RetryPolicy;
use crate::db::schema::ensure_schema;
use crate::db::snapshot;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Balance, ChatMessage, Duration, LeaveRequest, LeaveStatus, LeaveType, Role, UsedLeave,
};
use crate::utils::date;
use chrono::NaiveDate;
use rusqlite::TransactionBehavior;
use std::collections::HashSet;

pub struct Ledger {
    pool: DbPool,
    retry: RetryPolicy,
}

impl Ledger {
    pub fn open(path: &str, retry: RetryPolicy) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        ensure_schema(&pool.conn)?;
        Ok(Self { pool, retry })
    }

    /// Read path: snapshot the tables outside any transaction. A missing
    /// table is recreated empty first, so reads never fail on schema.
    fn read<T, F>(&mut self, op: F) -> AppResult<T>
    where
        F: Fn(&rusqlite::Connection) -> AppResult<T>,
    {
        ensure_schema(&self.pool.conn)?;
        op(&self.pool.conn)
    }

    /// Write path: immediate transaction (the write lock is taken up
    /// front, so contention surfaces here and is retried). The snapshot
    /// is re-read on every attempt.
    fn write<T, F>(&mut self, mut op: F) -> AppResult<T>
    where
        F: FnMut(&rusqlite::Transaction) -> AppResult<T>,
    {
        let retry = self.retry.clone();
        let conn = &mut self.pool.conn;
        retry.run(|| {
            ensure_schema(conn)?;
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
            let out = op(&tx)?;
            tx.commit()?;
            Ok(out)
        })
    }

    // ---------------------------
    // Balances
    // ---------------------------

    pub fn balance(&mut self, user_id: i64) -> AppResult<Option<Balance>> {
        self.read(|conn| {
            let table = snapshot::load_balances(conn)?;
            Ok(table.into_iter().find(|b| b.user_id == user_id))
        })
    }

    /// Provisioning hook: insert or replace a user's balance row. The
    /// derived total is recomputed on the way in.
    pub fn put_balance(&mut self, mut balance: Balance) -> AppResult<()> {
        balance.recompute_total();
        self.write(|tx| {
            let mut table = snapshot::load_balances(tx)?;
            table.retain(|b| b.user_id != balance.user_id);
            table.push(balance.clone());
            table.sort_by_key(|b| b.user_id);
            snapshot::save_balances(tx, &table)?;
            Ok(())
        })
    }

    // ---------------------------
    // Requests
    // ---------------------------

    /// Append a Pending request for one leave day. The owning admin is
    /// copied from the user's balance row at creation time.
    pub fn add_request(
        &mut self,
        user_id: i64,
        leave_date: NaiveDate,
        leave_type: LeaveType,
        reason: &str,
        duration: Duration,
    ) -> AppResult<()> {
        let applied_at = date::now();
        self.write(|tx| {
            let balances = snapshot::load_balances(tx)?;
            let admin_id = balances
                .iter()
                .find(|b| b.user_id == user_id)
                .map(|b| b.admin_id)
                .ok_or(AppError::UserNotFound(user_id))?;

            let mut table = snapshot::load_requests(tx)?;
            table.push(LeaveRequest {
                admin_id,
                user_id,
                leave_date,
                status: LeaveStatus::Pending,
                leave_type,
                reason: reason.to_string(),
                applied_at,
                duration,
            });
            snapshot::save_requests(tx, &table)?;
            Ok(())
        })
    }

    /// Decide a pending request. Approval deducts one day from the
    /// matching balance counter, recomputes the total and appends a
    /// history row, all in the same transaction; if the deduction fails
    /// the whole update is aborted and the status stays Pending.
    pub fn update_status(
        &mut self,
        user_id: i64,
        leave_date: NaiveDate,
        new_status: LeaveStatus,
    ) -> AppResult<()> {
        self.write(|tx| {
            let mut requests = snapshot::load_requests(tx)?;
            let idx = requests
                .iter()
                .position(|r| {
                    r.user_id == user_id
                        && r.leave_date == leave_date
                        && r.status == LeaveStatus::Pending
                })
                .ok_or_else(|| AppError::RequestNotFound {
                    user: user_id,
                    date: leave_date.format("%Y-%m-%d").to_string(),
                })?;

            requests[idx].status = new_status;

            if new_status == LeaveStatus::Approved {
                let leave_type = requests[idx].leave_type;
                let duration = requests[idx].duration;

                // Balance is re-checked here even though the validator
                // already did: approval must never drive a counter
                // negative.
                let mut balances = snapshot::load_balances(tx)?;
                let balance = balances
                    .iter_mut()
                    .find(|b| b.user_id == user_id)
                    .ok_or(AppError::UserNotFound(user_id))?;
                if !balance.deduct(leave_type, 1) {
                    return Err(AppError::InsufficientBalance(
                        leave_type.code().to_string(),
                    ));
                }

                let mut used = snapshot::load_used(tx)?;
                used.push(UsedLeave {
                    user_id,
                    leave_date,
                    leave_type,
                    duration,
                });

                snapshot::save_balances(tx, &balances)?;
                snapshot::save_used(tx, &used)?;
            }

            snapshot::save_requests(tx, &requests)?;
            Ok(())
        })
    }

    pub fn pending_for_admin(&mut self, admin_id: i64) -> AppResult<Vec<LeaveRequest>> {
        self.read(|conn| {
            let table = snapshot::load_requests(conn)?;
            Ok(table
                .into_iter()
                .filter(|r| r.admin_id == admin_id && r.status == LeaveStatus::Pending)
                .collect())
        })
    }

    pub fn requests_for_user(&mut self, user_id: i64) -> AppResult<Vec<LeaveRequest>> {
        self.read(|conn| {
            let table = snapshot::load_requests(conn)?;
            Ok(table.into_iter().filter(|r| r.user_id == user_id).collect())
        })
    }

    /// Approve every pending request owned by this admin. One failing
    /// record does not block the rest; returns (approved, total).
    pub fn approve_all(&mut self, admin_id: i64) -> AppResult<(usize, usize)> {
        let pending = self.pending_for_admin(admin_id)?;
        let total = pending.len();
        let mut approved = 0;
        for request in pending {
            match self.update_status(request.user_id, request.leave_date, LeaveStatus::Approved) {
                Ok(()) => approved += 1,
                Err(e) => {
                    crate::ui::messages::warning(format!(
                        "Skipping user {} on {}: {}",
                        request.user_id,
                        request.leave_date.format("%Y-%m-%d"),
                        e
                    ));
                }
            }
        }
        Ok((approved, total))
    }

    /// True when the date exists for this user with non-Rejected status
    /// in the requests table, or at all in the history table.
    pub fn has_overlap(&mut self, user_id: i64, leave_date: NaiveDate) -> AppResult<bool> {
        Ok(self.taken_dates(user_id)?.contains(&leave_date))
    }

    /// Every date already booked by this user: pending or approved
    /// requests plus the approved history.
    pub fn taken_dates(&mut self, user_id: i64) -> AppResult<HashSet<NaiveDate>> {
        self.read(|conn| {
            let mut taken = HashSet::new();
            for r in snapshot::load_requests(conn)? {
                if r.user_id == user_id && r.status != LeaveStatus::Rejected {
                    taken.insert(r.leave_date);
                }
            }
            for u in snapshot::load_used(conn)? {
                if u.user_id == user_id {
                    taken.insert(u.leave_date);
                }
            }
            Ok(taken)
        })
    }

    // ---------------------------
    // Chat log
    // ---------------------------

    pub fn append_chat(&mut self, user_id: i64, role: Role, message: &str) -> AppResult<()> {
        let ts = date::now();
        self.write(|tx| {
            let mut table = snapshot::load_chat(tx)?;
            table.push(ChatMessage {
                user_id,
                role,
                message: message.to_string(),
                ts,
            });
            snapshot::save_chat(tx, &table)?;
            Ok(())
        })
    }

    /// The user's most recent messages in chronological order.
    pub fn chat_history(&mut self, user_id: i64, limit: usize) -> AppResult<Vec<ChatMessage>> {
        self.read(|conn| {
            let table = snapshot::load_chat(conn)?;
            let mut mine: Vec<ChatMessage> = table
                .into_iter()
                .filter(|m| m.user_id == user_id)
                .collect();
            if mine.len() > limit {
                mine.drain(..mine.len() - limit);
            }
            Ok(mine)
        })
    }

    /// Remove only this user's rows; everyone else's history stays.
    pub fn clear_chat(&mut self, user_id: i64) -> AppResult<()> {
        self.write(|tx| {
            let mut table = snapshot::load_chat(tx)?;
            table.retain(|m| m.user_id != user_id);
            snapshot::save_chat(tx, &table)?;
            Ok(())
        })
    }

    // ---------------------------
    // Full-table reads for reporting
    // ---------------------------

    pub fn all_balances(&mut self) -> AppResult<Vec<Balance>> {
        self.read(|conn| Ok(snapshot::load_balances(conn)?))
    }

    pub fn all_requests(&mut self) -> AppResult<Vec<LeaveRequest>> {
        self.read(|conn| Ok(snapshot::load_requests(conn)?))
    }

    pub fn all_used(&mut self) -> AppResult<Vec<UsedLeave>> {
        self.read(|conn| Ok(snapshot::load_used(conn)?))
    }

    pub fn all_chat(&mut self) -> AppResult<Vec<ChatMessage>> {
        self.read(|conn| Ok(snapshot::load_chat(conn)?))
    }
}
