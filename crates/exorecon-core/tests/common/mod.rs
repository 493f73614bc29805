use exorecon_core::{FieldSet, Planet, Star};

/// Star named after its system with the given planets
#[allow(dead_code)]
pub fn star(name: &str, planets: Vec<Planet>) -> Star {
    planets
        .into_iter()
        .fold(Star::new(name, name), |star, planet| star.with_planet(planet))
}

/// Planet with the given numeric fields
#[allow(dead_code)]
pub fn planet(name: &str, fields: &[(&str, f64)]) -> Planet {
    Planet::new(name).with_fields(fields.iter().map(|(k, v)| (*k, *v)).collect::<FieldSet>())
}
