//! Join/diff primitives over two field sets.
//!
//! All joins are left-driven: the left set decides which names are visited and
//! in which order. A name carried only by the right set never appears in
//! [`outer_join`]; callers wanting that view swap the arguments, or use
//! [`full_outer_join`], which composes both directions explicitly.

use crate::diff::model::{ChangedFields, FieldChange, JoinResult, JoinRow};
use crate::model::{FieldSet, FieldValue};

/// Outer join driven by the left set.
///
/// One row per left field, in left order. The right value is `None` when the
/// right set does not carry that name.
pub fn outer_join(left: &FieldSet, right: &FieldSet) -> JoinResult {
    let rows = left
        .iter()
        .map(|(name, value)| JoinRow {
            field: name.clone(),
            left: Some(value.clone()),
            right: right.get(name).cloned(),
        })
        .collect();
    JoinResult { rows }
}

/// Rows of [`outer_join`] where either side lacks the field.
///
/// Each row is tested on its own and copied into a fresh result.
pub fn outer_join_new_only(left: &FieldSet, right: &FieldSet) -> JoinResult {
    let joined = outer_join(left, right);
    let rows = joined.rows.into_iter().filter(JoinRow::is_new).collect();
    JoinResult { rows }
}

/// Both one-directional joins, merged.
///
/// Left-driven rows come first, followed by the right-only names in right
/// order with their sides restored (value on the right, `None` on the left).
pub fn full_outer_join(left: &FieldSet, right: &FieldSet) -> JoinResult {
    let mut result = outer_join(left, right);
    let mirrored = outer_join_new_only(right, left);
    result.rows.extend(mirrored.rows.into_iter().map(|row| JoinRow {
        field: row.field,
        left: row.right,
        right: row.left,
    }));
    result
}

/// Fields present on both sides whose values differ, in left order.
pub fn inner_join_diff(left: &FieldSet, right: &FieldSet) -> ChangedFields {
    left.iter()
        .filter_map(|(name, l)| {
            let r = right.get(name)?;
            values_differ(l, r).then(|| {
                (
                    name.clone(),
                    FieldChange {
                        left: l.clone(),
                        right: r.clone(),
                    },
                )
            })
        })
        .collect()
}

/// Two texts differ only if they differ case-insensitively; anything else
/// (including text against number) compares exactly.
pub fn values_differ(left: &FieldValue, right: &FieldValue) -> bool {
    match (left.as_text(), right.as_text()) {
        (Some(l), Some(r)) => l.to_lowercase() != r.to_lowercase(),
        _ => left != right,
    }
}
