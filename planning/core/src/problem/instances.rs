use crate::error::Result;
use crate::model::fluent::{Fluent, ObjectId};
use crate::model::state::FluentState;
use crate::problem::AirCargoProblem;

fn objects(names: &[&str]) -> Vec<ObjectId> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Negative literals left implicit by a positive initial state: every `At`
/// ground atom not asserted positive, then every `In(cargo, plane)` atom.
fn implicit_negatives(
    pos: &[Fluent],
    cargos: &[ObjectId],
    planes: &[ObjectId],
    airports: &[ObjectId],
) -> Vec<Fluent> {
    let mut neg = vec![];
    for airport in airports {
        for object in cargos.iter().chain(planes.iter()) {
            let fluent = Fluent::at(object, airport);
            if !pos.contains(&fluent) {
                neg.push(fluent);
            }
        }
    }
    for plane in planes {
        for cargo in cargos {
            neg.push(Fluent::r#in(cargo, plane));
        }
    }
    neg
}

/// 2 cargos, 2 planes, 2 airports. Optimal plan length is 6.
pub fn air_cargo_p1() -> Result<AirCargoProblem> {
    let cargos = objects(&["C1", "C2"]);
    let planes = objects(&["P1", "P2"]);
    let airports = objects(&["JFK", "SFO"]);
    let pos = vec![
        Fluent::at("C1", "SFO"),
        Fluent::at("C2", "JFK"),
        Fluent::at("P1", "SFO"),
        Fluent::at("P2", "JFK"),
    ];
    let neg = vec![
        Fluent::at("C2", "SFO"),
        Fluent::r#in("C2", "P1"),
        Fluent::r#in("C2", "P2"),
        Fluent::at("C1", "JFK"),
        Fluent::r#in("C1", "P1"),
        Fluent::r#in("C1", "P2"),
        Fluent::at("P1", "JFK"),
        Fluent::at("P2", "SFO"),
    ];
    let goal = vec![Fluent::at("C1", "JFK"), Fluent::at("C2", "SFO")];
    AirCargoProblem::new(cargos, planes, airports, FluentState::new(pos, neg), goal)
}

/// 3 cargos, 3 planes, 3 airports.
pub fn air_cargo_p2() -> Result<AirCargoProblem> {
    let cargos = objects(&["C1", "C2", "C3"]);
    let planes = objects(&["P1", "P2", "P3"]);
    let airports = objects(&["JFK", "SFO", "ATL"]);
    let pos = vec![
        Fluent::at("C1", "SFO"),
        Fluent::at("C2", "JFK"),
        Fluent::at("C3", "ATL"),
        Fluent::at("P1", "SFO"),
        Fluent::at("P2", "JFK"),
        Fluent::at("P3", "ATL"),
    ];
    let neg = implicit_negatives(&pos, &cargos, &planes, &airports);
    let goal = vec![
        Fluent::at("C1", "JFK"),
        Fluent::at("C2", "SFO"),
        Fluent::at("C3", "SFO"),
    ];
    AirCargoProblem::new(cargos, planes, airports, FluentState::new(pos, neg), goal)
}

/// 4 cargos, 2 planes, 4 airports.
pub fn air_cargo_p3() -> Result<AirCargoProblem> {
    let cargos = objects(&["C1", "C2", "C3", "C4"]);
    let planes = objects(&["P1", "P2"]);
    let airports = objects(&["JFK", "SFO", "ATL", "ORD"]);
    let pos = vec![
        Fluent::at("C1", "SFO"),
        Fluent::at("C2", "JFK"),
        Fluent::at("C3", "ATL"),
        Fluent::at("C4", "ORD"),
        Fluent::at("P1", "SFO"),
        Fluent::at("P2", "JFK"),
    ];
    let neg = implicit_negatives(&pos, &cargos, &planes, &airports);
    let goal = vec![
        Fluent::at("C1", "JFK"),
        Fluent::at("C2", "SFO"),
        Fluent::at("C3", "JFK"),
        Fluent::at("C4", "SFO"),
    ];
    AirCargoProblem::new(cargos, planes, airports, FluentState::new(pos, neg), goal)
}

#[cfg(test)]
mod tests {
    use crate::problem::instances::{air_cargo_p1, air_cargo_p2, air_cargo_p3};

    #[test]
    fn test_p1_shape() {
        let p1 = air_cargo_p1().unwrap();
        // 2*2*2 loads + 2*2*2 unloads + 2*2*1 flights.
        assert_eq!(20, p1.get_actions().len());
        assert_eq!(12, p1.get_state_map().len());
        assert_eq!(12, p1.initial_state().len());
        assert_eq!(2, p1.get_goal().len());
    }

    #[test]
    fn test_p2_shape() {
        let p2 = air_cargo_p2().unwrap();
        // 3*3*3 loads + 3*3*3 unloads + 3*3*2 flights.
        assert_eq!(72, p2.get_actions().len());
        // 6 objects * 3 airports At atoms + 3*3 In atoms.
        assert_eq!(27, p2.get_state_map().len());
        assert_eq!(3, p2.get_goal().len());
    }

    #[test]
    fn test_p3_shape() {
        let p3 = air_cargo_p3().unwrap();
        // 4*2*4 loads + 4*2*4 unloads + 2*4*3 flights.
        assert_eq!(88, p3.get_actions().len());
        // 6 objects * 4 airports At atoms + 4*2 In atoms.
        assert_eq!(32, p3.get_state_map().len());
        assert_eq!(4, p3.get_goal().len());
    }

    #[test]
    fn test_initial_states_are_reproducible() {
        let first = air_cargo_p1().unwrap();
        let second = air_cargo_p1().unwrap();
        assert_eq!(first.initial_state(), second.initial_state());
        assert_eq!(first.get_goal(), second.get_goal());
        assert_eq!(
            "TTTTFFFFFFFF",
            first.initial_state().to_string()
        );
    }
}
