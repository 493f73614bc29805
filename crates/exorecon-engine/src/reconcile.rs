//! Reconciliation pass.
//!
//! One pass compares every source catalog against the reference catalog:
//! 1. For each origin, pair every source star with the reference star of the
//!    same name (unmatched source stars are counted, not compared)
//! 2. Diff each pair and generate changes under the emit policy
//! 3. Concatenate across origins, then order the whole list once
//!
//! `run_update` then replaces the pending list in a `ChangeStore`.

#![allow(clippy::result_large_err)]

use chrono::{Local, NaiveDateTime, Timelike};
use exorecon_core::core_types::PassId;
use exorecon_core::errors::ExError;
use exorecon_core::{
    log_op_end, log_op_error, log_op_start, sort_changes, ChangeStore, EmitPolicy, Entity, Origin,
    ProposedChange, StarComparator,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use crate::catalog::Catalog;

/// Per-origin outcome of a pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OriginSummary {
    pub origin: Origin,
    /// Source stars also present in the reference
    pub compared_stars: usize,
    /// Source stars absent from the reference, in source order
    pub unmatched_stars: Vec<String>,
    pub change_count: usize,
}

/// Result of one reconciliation pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconcileReport {
    pub pass_id: PassId,
    pub origins: Vec<OriginSummary>,
    /// Every proposed change, ordered by object name
    pub changes: Vec<ProposedChange>,
}

impl ReconcileReport {
    pub fn change_count(&self) -> usize {
        self.changes.len()
    }

    pub fn summary(&self, origin: Origin) -> Option<&OriginSummary> {
        self.origins.iter().find(|s| s.origin == origin)
    }
}

fn reconcile_origin(
    reference: &Catalog,
    origin: Origin,
    source: &Catalog,
    policy: &EmitPolicy,
) -> Result<(OriginSummary, Vec<ProposedChange>), ExError> {
    let mut summary = OriginSummary {
        origin,
        compared_stars: 0,
        unmatched_stars: Vec::new(),
        change_count: 0,
    };
    let mut changes = Vec::new();

    for star in source.stars() {
        let Some(counterpart) = reference.star(&star.name) else {
            summary.unmatched_stars.push(star.name.clone());
            continue;
        };
        let left = Entity::Star(Arc::clone(star));
        let right = Entity::Star(Arc::clone(counterpart));
        let comparator = StarComparator::new(&left, &right, origin)?;
        changes.extend(comparator.proposed_changes_with(policy)?);
        summary.compared_stars += 1;
    }

    summary.change_count = changes.len();
    tracing::debug!(
        origin = origin.code(),
        compared_stars = summary.compared_stars,
        unmatched_stars = summary.unmatched_stars.len(),
        change_count = summary.change_count,
        "origin reconciled"
    );
    Ok((summary, changes))
}

fn reconcile_impl(
    pass_id: &PassId,
    reference: &Catalog,
    sources: &[(Origin, Catalog)],
    policy: &EmitPolicy,
) -> Result<ReconcileReport, ExError> {
    let mut origins = Vec::with_capacity(sources.len());
    let mut changes = Vec::new();

    for (origin, source) in sources {
        let (summary, found) = reconcile_origin(reference, *origin, source, policy)
            .map_err(|e| e.with_pass_id(pass_id.clone()))?;
        origins.push(summary);
        changes.extend(found);
    }

    Ok(ReconcileReport {
        pass_id: pass_id.clone(),
        origins,
        changes: sort_changes(changes),
    })
}

/// Compare every source catalog against `reference`.
///
/// # Errors
/// * `KindIncompatible` - only when a catalog holds a non-star entity, which
///   the catalog type rules out
pub fn reconcile(
    reference: &Catalog,
    sources: &[(Origin, Catalog)],
    policy: &EmitPolicy,
) -> Result<ReconcileReport, ExError> {
    let pass_id = PassId::new();
    let _span = tracing::info_span!("reconcile", pass_id = %pass_id).entered();
    log_op_start!(
        "reconcile",
        pass_id = pass_id.as_str(),
        reference_stars = reference.len(),
        origins = sources.len()
    );
    let start = Instant::now();

    let report = reconcile_impl(&pass_id, reference, sources, policy).map_err(|e| {
        log_op_error!(
            "reconcile",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "reconcile",
        duration_ms = start.elapsed().as_millis() as u64,
        pass_id = pass_id.as_str(),
        change_count = report.change_count()
    );
    Ok(report)
}

/// Replace the pending list with the report's changes and stamp the update
/// time (local time, whole seconds). Returns the stamp.
pub fn run_update<S: ChangeStore + ?Sized>(
    store: &mut S,
    report: &ReconcileReport,
) -> Result<NaiveDateTime, ExError> {
    let now = Local::now().naive_local();
    let now = now.with_nanosecond(0).unwrap_or(now);

    store
        .save_pending(&report.changes)
        .map_err(|e| e.with_pass_id(report.pass_id.clone()))?;
    store.set_last_update(now)?;

    tracing::info!(
        op = "run_update",
        pass_id = report.pass_id.as_str(),
        change_count = report.change_count(),
        "pending changes replaced"
    );
    Ok(now)
}
