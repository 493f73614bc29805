//! Review session over the pending change list.
//!
//! A session owns the list between an explicit `load` and `save`:
//!
//! ```ignore
//! let mut session = ReviewSession::load(store)?;
//! session.accept(3, &ledger)?;
//! session.postpone(1)?;
//! session.save()?;
//! ```
//!
//! Changes are addressed by 1-based position in the current list. Accept,
//! deny and postpone all remove the change, so positions after it shift down
//! by one.

#![allow(clippy::result_large_err)]

use chrono::NaiveDateTime;
use exorecon_core::errors::{ExError, ReconcileError};
use exorecon_core::{
    apply_change, log_op_end, log_op_error, log_op_start, ChangeStore, ProposedChange, WriteBack,
};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

/// One end of a range: a position or a symbolic end of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    /// `s`, the first change
    Start,
    /// `e`, the last change
    End,
    /// 1-based position
    Position(usize),
}

impl RangeBound {
    fn resolve(self, len: usize) -> usize {
        match self {
            RangeBound::Start => 1,
            RangeBound::End => len,
            RangeBound::Position(n) => n,
        }
    }
}

impl FromStr for RangeBound {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            t if t.eq_ignore_ascii_case("s") => Ok(RangeBound::Start),
            t if t.eq_ignore_ascii_case("e") => Ok(RangeBound::End),
            t => t
                .parse::<usize>()
                .map(RangeBound::Position)
                .map_err(|_| format!("'{}' is neither a number, 's' nor 'e'", t)),
        }
    }
}

/// Inclusive range of positions, written `<from>-<to>` (`2-5`, `s-e`, `e-s`).
///
/// A range whose start lies after its end walks backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSpec {
    pub from: RangeBound,
    pub to: RangeBound,
}

impl RangeSpec {
    pub fn new(from: RangeBound, to: RangeBound) -> Self {
        Self { from, to }
    }

    /// Every position of the list
    pub fn all() -> Self {
        Self::new(RangeBound::Start, RangeBound::End)
    }

    /// Positions covered in a list of `len` changes, in walk order.
    ///
    /// # Errors
    /// * `InvalidRange` - an end falls outside `1..=len`
    pub fn positions(&self, len: usize) -> Result<Vec<usize>, ReconcileError> {
        let (from, to) = (self.from.resolve(len), self.to.resolve(len));
        let valid = |n: usize| (1..=len).contains(&n);
        if !valid(from) || !valid(to) {
            return Err(ReconcileError::InvalidRange {
                spec: self.to_string(),
                reason: format!("positions must lie within 1..={}", len),
            });
        }
        Ok(if from <= to {
            (from..=to).collect()
        } else {
            (to..=from).rev().collect()
        })
    }
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeBound::Start => write!(f, "s"),
            RangeBound::End => write!(f, "e"),
            RangeBound::Position(n) => write!(f, "{}", n),
        }
    }
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl FromStr for RangeSpec {
    type Err = ReconcileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| ReconcileError::InvalidRange {
            spec: s.to_string(),
            reason,
        };
        let (from, to) = s
            .split_once('-')
            .ok_or_else(|| invalid("expected <from>-<to>".to_string()))?;
        Ok(Self {
            from: from.parse().map_err(invalid)?,
            to: to.parse().map_err(invalid)?,
        })
    }
}

/// Snapshot shown by `status`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Status {
    pub last_update: Option<NaiveDateTime>,
    pub pending: usize,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.last_update {
            None => write!(f, "Last Update: Never"),
            Some(at) => {
                writeln!(f, "Last Update: {}", at.format(exorecon_core::change_store::LAST_UPDATE_FORMAT))?;
                write!(f, "Number of proposed changes stored: {}", self.pending)
            }
        }
    }
}

/// Explicit read-modify-persist context over a `ChangeStore`
pub struct ReviewSession<S: ChangeStore> {
    store: S,
    pending: Vec<ProposedChange>,
    last_update: Option<NaiveDateTime>,
    dirty: bool,
}

impl<S: ChangeStore> ReviewSession<S> {
    /// Read the pending list and last-update stamp from `store`
    pub fn load(store: S) -> Result<Self, ExError> {
        let pending = store.load_pending()?;
        let last_update = store.last_update()?;
        tracing::debug!(pending = pending.len(), "review session loaded");
        Ok(Self {
            store,
            pending,
            last_update,
            dirty: false,
        })
    }

    /// Write the current list back; a no-op when nothing was removed
    pub fn save(&mut self) -> Result<(), ExError> {
        if !self.dirty {
            return Ok(());
        }
        self.store.save_pending(&self.pending)?;
        self.dirty = false;
        Ok(())
    }

    /// Whether removals are waiting for `save`
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn status(&self) -> Status {
        Status {
            last_update: self.last_update,
            pending: self.pending.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn changes(&self) -> &[ProposedChange] {
        &self.pending
    }

    fn index(&self, number: usize) -> Result<usize, ReconcileError> {
        if number == 0 || number > self.pending.len() {
            return Err(ReconcileError::ChangeOutOfRange {
                number,
                len: self.pending.len(),
            });
        }
        Ok(number - 1)
    }

    /// Change at 1-based position `number`
    pub fn get(&self, number: usize) -> Result<&ProposedChange, ReconcileError> {
        self.index(number).map(|i| &self.pending[i])
    }

    /// `(position, change)` pairs covered by `spec`, in walk order
    pub fn range(&self, spec: &RangeSpec) -> Result<Vec<(usize, &ProposedChange)>, ReconcileError> {
        Ok(spec
            .positions(self.pending.len())?
            .into_iter()
            .map(|n| (n, &self.pending[n - 1]))
            .collect())
    }

    fn remove(&mut self, number: usize) -> Result<ProposedChange, ReconcileError> {
        let index = self.index(number)?;
        self.dirty = true;
        Ok(self.pending.remove(index))
    }

    /// Run `op` with operation boundary logging
    fn logged<T>(
        &mut self,
        op: &'static str,
        number: usize,
        f: impl FnOnce(&mut Self) -> Result<T, ExError>,
    ) -> Result<T, ExError> {
        log_op_start!(op, number = number);
        let start = Instant::now();
        let result = f(self).map_err(|e| {
            log_op_error!(op, e.clone(), duration_ms = start.elapsed().as_millis() as u64);
            e
        })?;
        log_op_end!(
            op,
            duration_ms = start.elapsed().as_millis() as u64,
            pending = self.pending.len()
        );
        Ok(result)
    }

    /// Write change `number` back through `target`, then remove it.
    ///
    /// The change stays pending when the write-back fails.
    pub fn accept(
        &mut self,
        number: usize,
        target: &dyn WriteBack,
    ) -> Result<ProposedChange, ExError> {
        self.logged("accept", number, |session| {
            let index = session.index(number)?;
            apply_change(target, &session.pending[index])?;
            Ok(session.remove(number)?)
        })
    }

    /// Drop change `number` without writing it back
    pub fn deny(&mut self, number: usize) -> Result<ProposedChange, ExError> {
        self.logged("deny", number, |session| Ok(session.remove(number)?))
    }

    /// Drop change `number` until the next update proposes it again
    pub fn postpone(&mut self, number: usize) -> Result<ProposedChange, ExError> {
        self.logged("postpone", number, |session| Ok(session.remove(number)?))
    }

    /// Accept every change in order; stops at the first failing write-back,
    /// leaving it and the rest pending. Returns how many were accepted.
    pub fn accept_all(&mut self, target: &dyn WriteBack) -> Result<usize, ExError> {
        let mut accepted = 0;
        while !self.pending.is_empty() {
            self.accept(1, target)?;
            accepted += 1;
        }
        Ok(accepted)
    }

    pub fn deny_all(&mut self) -> usize {
        self.clear("deny_all")
    }

    pub fn postpone_all(&mut self) -> usize {
        self.clear("postpone_all")
    }

    fn clear(&mut self, op: &'static str) -> usize {
        let count = self.pending.len();
        if count > 0 {
            self.pending.clear();
            self.dirty = true;
        }
        tracing::info!(op, change_count = count, "pending changes cleared");
        count
    }
}
