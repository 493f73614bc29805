use exorecon_core::{apply_change, Addition, Entity, FieldValue, Modification, Origin, Planet, ProposedChange, Star};
use exorecon_store::SqliteAcceptedLedger;
use std::sync::Arc;

#[test]
fn test_accepted_changes_are_recorded_in_order() {
    let star = Star::new("11 Com", "11 Com").with_planet(Planet::new("11 Com b"));
    let planet = Entity::from(Arc::clone(star.planet("11 Com b").unwrap()));
    let modification = ProposedChange::from(Modification::new(
        Origin::ExoplanetEu,
        planet.clone(),
        &planet,
        "mass",
        FieldValue::Number(20.0),
        FieldValue::Number(19.4),
    ));
    let addition = ProposedChange::from(Addition::new(
        Origin::NasaArchive,
        Entity::from(Planet::new("11 Com c")),
    ));

    let ledger = SqliteAcceptedLedger::open_in_memory().unwrap();
    apply_change(&ledger, &modification).unwrap();
    apply_change(&ledger, &addition).unwrap();

    let records = ledger.accepted().unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].change_kind, "modification");
    assert_eq!(records[0].object_name, "11 Com b");
    assert_eq!(records[0].system_name.as_deref(), Some("11 Com"));
    assert_eq!(records[0].field.as_deref(), Some("mass"));
    assert_eq!(records[0].value_in_origin.as_deref(), Some("20"));
    assert_eq!(records[0].origin, "eu");

    assert_eq!(records[1].change_kind, "addition");
    assert_eq!(records[1].field, None);
    assert_eq!(records[1].origin, "nasa");
}
