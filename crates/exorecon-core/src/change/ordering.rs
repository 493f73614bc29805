//! Change list ordering.

use std::iter::Peekable;

use crate::change::model::ProposedChange;

/// Order `changes` by referenced object name.
///
/// Top-down merge sort on case-sensitive byte order. Equal names keep their
/// input order.
pub fn sort_changes(mut changes: Vec<ProposedChange>) -> Vec<ProposedChange> {
    if changes.len() <= 1 {
        return changes;
    }
    let right = changes.split_off(changes.len() / 2);
    merge(sort_changes(changes), sort_changes(right))
}

fn merge(left: Vec<ProposedChange>, right: Vec<ProposedChange>) -> Vec<ProposedChange> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let Some(next) = take_lower(&mut left, &mut right) {
        merged.push(next);
    }
    merged
}

/// Left wins ties
fn take_lower<I>(left: &mut Peekable<I>, right: &mut Peekable<I>) -> Option<ProposedChange>
where
    I: Iterator<Item = ProposedChange>,
{
    match (left.peek(), right.peek()) {
        (Some(l), Some(r)) if l.object_name() <= r.object_name() => left.next(),
        (Some(_), Some(_)) => right.next(),
        (Some(_), None) => left.next(),
        (None, _) => right.next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change::model::Addition;
    use crate::model::{Entity, Origin, Planet};

    fn addition(name: &str, origin: Origin) -> ProposedChange {
        ProposedChange::from(Addition::new(origin, Entity::from(Planet::new(name))))
    }

    fn names(changes: &[ProposedChange]) -> Vec<&str> {
        changes.iter().map(|c| c.object_name()).collect()
    }

    #[test]
    fn test_sorts_by_name() {
        let sorted = sort_changes(vec![
            addition("Zeta", Origin::NasaArchive),
            addition("Alpha", Origin::NasaArchive),
            addition("Mu", Origin::NasaArchive),
        ]);
        assert_eq!(names(&sorted), vec!["Alpha", "Mu", "Zeta"]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let sorted = sort_changes(vec![
            addition("B", Origin::ExoplanetEu),
            addition("A", Origin::NasaArchive),
            addition("B", Origin::NasaArchive),
            addition("A", Origin::ExoplanetEu),
        ]);
        let keyed: Vec<(&str, Origin)> = sorted.iter().map(|c| (c.object_name(), c.origin())).collect();
        assert_eq!(
            keyed,
            vec![
                ("A", Origin::NasaArchive),
                ("A", Origin::ExoplanetEu),
                ("B", Origin::ExoplanetEu),
                ("B", Origin::NasaArchive),
            ]
        );
    }

    #[test]
    fn test_case_sensitive_order() {
        let sorted = sort_changes(vec![
            addition("alpha", Origin::NasaArchive),
            addition("Beta", Origin::NasaArchive),
        ]);
        assert_eq!(names(&sorted), vec!["Beta", "alpha"]);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(sort_changes(Vec::new()).is_empty());
        assert_eq!(names(&sort_changes(vec![addition("X", Origin::NasaArchive)])), vec!["X"]);
    }
}
