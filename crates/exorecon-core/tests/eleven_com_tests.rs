//! End-to-end: star diff to reviewed change list.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{planet, star};
use exorecon_core::change::generate_proposed_changes;
use exorecon_core::{
    sort_changes, ChangeStore, EmitPolicy, Entity, FieldValue, MemoryChangeStore, Origin,
    StarComparator,
};

#[test]
fn test_eleven_com_single_modification() {
    let source = Entity::from(star("11 Com", vec![planet("11 Com b", &[("mass", 20.0)])]));
    let reference = Entity::from(star("11 Com", vec![planet("11 Com b", &[("mass", 19.4)])]));

    let comparator = StarComparator::new(&source, &reference, Origin::ExoplanetEu).unwrap();
    let changes = comparator.proposed_changes().unwrap();

    assert_eq!(changes.len(), 1);
    let m = changes[0].as_modification().unwrap();
    assert_eq!(m.object_name(), "11 Com b");
    assert_eq!(m.system_name(), Some("11 Com"));
    assert_eq!(m.value_in_origin(), &FieldValue::Number(20.0));
    assert_eq!(m.value_in_reference(), &FieldValue::Number(19.4));
    assert_eq!(m.bounds().reference_upper, None);
    assert_eq!(m.bounds().reference_lower, None);
    assert_eq!(m.bounds().origin_upper, None);
    assert_eq!(m.bounds().origin_lower, None);

    let report = changes[0].to_string();
    assert!(report.contains("Value according to exoplanet.eu: 20\n"));
    assert!(report.contains("Value according to Open Exoplanet Catalogue: 19.4\n"));
    assert_eq!(report.matches("N/A").count(), 4);
}

#[test]
fn test_changes_across_stars_sort_and_survive_reload() {
    let sources = [
        (
            star("Zeta Star", vec![planet("Zeta Star b", &[("period", 4.0)])]),
            star("Zeta Star", vec![planet("Zeta Star b", &[("period", 4.2)])]),
        ),
        (
            star("Alpha Star", vec![
                planet("Alpha Star c", &[("mass", 1.0), ("radius", 2.0)]),
                planet("Alpha Star b", &[("mass", 3.0)]),
            ]),
            star("Alpha Star", vec![
                planet("Alpha Star b", &[("mass", 3.5)]),
                planet("Alpha Star c", &[("mass", 1.1), ("radius", 2.0)]),
            ]),
        ),
    ];

    let mut changes = Vec::new();
    for (source, reference) in sources {
        let (source, reference) = (Entity::from(source), Entity::from(reference));
        let diff = StarComparator::new(&source, &reference, Origin::NasaArchive)
            .unwrap()
            .star_diff()
            .unwrap();
        changes.extend(generate_proposed_changes(&diff, Origin::NasaArchive));
    }
    let sorted = sort_changes(changes);
    let names: Vec<&str> = sorted.iter().map(|c| c.object_name()).collect();
    assert_eq!(names, vec!["Alpha Star b", "Alpha Star c", "Zeta Star b"]);

    let mut store = MemoryChangeStore::new();
    store.save_pending(&sorted).unwrap();
    let reloaded = store.load_pending().unwrap();
    let before: Vec<String> = sorted.iter().map(ToString::to_string).collect();
    let after: Vec<String> = reloaded.iter().map(ToString::to_string).collect();
    assert_eq!(before, after);
}

#[test]
fn test_emit_policy_adds_new_planets() {
    let source = Entity::from(star("HD 9", vec![planet("HD 9 b", &[]), planet("HD 9 c", &[])]));
    let reference = Entity::from(star("HD 9", vec![planet("HD 9 b", &[])]));

    let comparator = StarComparator::new(&source, &reference, Origin::ExoplanetEu).unwrap();
    assert!(comparator.proposed_changes().unwrap().is_empty());

    let policy = EmitPolicy {
        additions: true,
        ..EmitPolicy::default()
    };
    let changes = comparator.proposed_changes_with(&policy).unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind_label(), "addition");
    assert_eq!(changes[0].object_name(), "HD 9 c");
}
