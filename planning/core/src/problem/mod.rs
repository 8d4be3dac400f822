use crate::error::{PlanningError, Result};
use crate::model::action::GroundAction;
use crate::model::fluent::{Fluent, ObjectId};
use crate::model::state::{EncodedState, FluentState, StateMap};
use function_name::named;
use itertools::iproduct;
use log::debug;

pub mod instances;

/// A grounded air cargo planning problem: the object sets, the fluent
/// vocabulary built from the initial state, the complete grounded action
/// list, the encoded initial state and the goal. Everything is immutable
/// after construction; the action list is computed exactly once, here, and
/// reused at every node expansion.
pub struct AirCargoProblem {
    cargos: Vec<ObjectId>,
    planes: Vec<ObjectId>,
    airports: Vec<ObjectId>,
    state_map: StateMap,
    actions: Vec<GroundAction>,
    initial: EncodedState,
    goal: Vec<Fluent>,
}

impl AirCargoProblem {
    #[named]
    pub fn new(
        cargos: Vec<ObjectId>,
        planes: Vec<ObjectId>,
        airports: Vec<ObjectId>,
        initial: FluentState,
        goal: Vec<Fluent>,
    ) -> Result<Self> {
        let state_map = StateMap::try_from(&initial).map_err(|e| e.chain(function_name!()))?;
        let initial = state_map
            .encode(&initial)
            .map_err(|e| e.chain(function_name!()))?;
        for fluent in &goal {
            if !state_map.contains(fluent) {
                return Err(PlanningError::unknown_fluent(function_name!(), fluent));
            }
        }
        let actions = ground_actions(&cargos, &planes, &airports);
        debug!(
            "grounded {} actions over {} cargos, {} planes, {} airports",
            actions.len(),
            cargos.len(),
            planes.len(),
            airports.len()
        );
        Ok(Self {
            cargos,
            planes,
            airports,
            state_map,
            actions,
            initial,
            goal,
        })
    }

    pub fn get_cargos(&self) -> &[ObjectId] {
        &self.cargos
    }

    pub fn get_planes(&self) -> &[ObjectId] {
        &self.planes
    }

    pub fn get_airports(&self) -> &[ObjectId] {
        &self.airports
    }

    pub fn get_state_map(&self) -> &StateMap {
        &self.state_map
    }

    /// The complete grounded action list, in grounding order.
    pub fn get_actions(&self) -> &[GroundAction] {
        &self.actions
    }

    pub fn get_goal(&self) -> &[Fluent] {
        &self.goal
    }

    pub fn initial_state(&self) -> &EncodedState {
        &self.initial
    }

    /// True iff every positive precondition of `action` holds in `state` and
    /// no negative precondition does. A precondition fluent outside the
    /// vocabulary can never be asserted, so a positive precondition on it
    /// fails and a negative one succeeds.
    pub fn is_applicable(&self, state: &EncodedState, action: &GroundAction) -> bool {
        action
            .get_precond_pos()
            .iter()
            .all(|f| matches!(self.state_map.index_of(f), Some(i) if state.holds(i)))
            && action
                .get_precond_neg()
                .iter()
                .all(|f| !matches!(self.state_map.index_of(f), Some(i) if state.holds(i)))
    }

    /// The actions that can be executed in `state`, filtered from the cached
    /// grounded list.
    pub fn actions(&self, state: &EncodedState) -> Vec<&GroundAction> {
        self.actions
            .iter()
            .filter(|action| self.is_applicable(state, action))
            .collect()
    }

    /// The state that results from executing `action` in `state`: delete
    /// effects are cleared, add effects are set, every other fluent keeps its
    /// value. An action that is not applicable in `state` leaves the state
    /// unchanged rather than failing, so a caller holding a stale
    /// applicability snapshot gets a no-op.
    pub fn result(&self, state: &EncodedState, action: &GroundAction) -> EncodedState {
        if !self.is_applicable(state, action) {
            return state.clone();
        }
        let mut next = state.clone();
        for fluent in action.get_effect_del() {
            if let Some(i) = self.state_map.index_of(fluent) {
                next = next.set(i, false);
            }
        }
        for fluent in action.get_effect_add() {
            if let Some(i) = self.state_map.index_of(fluent) {
                next = next.set(i, true);
            }
        }
        next
    }

    /// True iff every goal fluent is asserted true in `state`. Goal fluents
    /// are positive literals only.
    pub fn goal_test(&self, state: &EncodedState) -> bool {
        self.goal
            .iter()
            .all(|f| matches!(self.state_map.index_of(f), Some(i) if state.holds(i)))
    }

    /// Number of goal fluents currently false in `state`.
    pub fn unsatisfied_goal_count(&self, state: &EncodedState) -> u32 {
        self.goal
            .iter()
            .filter(|f| !matches!(self.state_map.index_of(f), Some(i) if state.holds(i)))
            .count() as u32
    }
}

/// Expands the Load, Unload and Fly schemas over the object sets into the
/// complete concrete action list: Load-all, then Unload-all, then Fly-all,
/// each in nested iteration order. Empty object sets simply contribute no
/// actions.
fn ground_actions(
    cargos: &[ObjectId],
    planes: &[ObjectId],
    airports: &[ObjectId],
) -> Vec<GroundAction> {
    let n_airports = airports.len();
    let mut actions = Vec::with_capacity(
        2 * cargos.len() * planes.len() * n_airports
            + planes.len() * n_airports * n_airports.saturating_sub(1),
    );

    // Load(c, p, a): the cargo and the plane have to be at the airport.
    for (cargo, plane, airport) in iproduct!(cargos, planes, airports) {
        actions.push(GroundAction::new(
            format!("Load({}, {}, {})", cargo, plane, airport),
            vec![Fluent::at(cargo, airport), Fluent::at(plane, airport)],
            vec![],
            vec![Fluent::r#in(cargo, plane)],
            vec![Fluent::at(cargo, airport)],
        ));
    }

    // Unload(c, p, a): the cargo has to be in the plane, the plane at the airport.
    for (cargo, plane, airport) in iproduct!(cargos, planes, airports) {
        actions.push(GroundAction::new(
            format!("Unload({}, {}, {})", cargo, plane, airport),
            vec![Fluent::r#in(cargo, plane), Fluent::at(plane, airport)],
            vec![],
            vec![Fluent::at(cargo, airport)],
            vec![Fluent::r#in(cargo, plane)],
        ));
    }

    // Fly(p, from, to): the plane has to be at the departure airport.
    for (from, to, plane) in iproduct!(airports, airports, planes) {
        if from != to {
            actions.push(GroundAction::new(
                format!("Fly({}, {}, {})", plane, from, to),
                vec![Fluent::at(plane, from)],
                vec![],
                vec![Fluent::at(plane, to)],
                vec![Fluent::at(plane, from)],
            ));
        }
    }

    actions
}

#[cfg(test)]
mod tests {
    use crate::model::action::GroundAction;
    use crate::model::fluent::Fluent;
    use crate::model::state::FluentState;
    use crate::problem::AirCargoProblem;

    /// One cargo, one plane, two airports: 2 loads, 2 unloads, 2 flights.
    fn small_problem() -> AirCargoProblem {
        let pos = vec![Fluent::at("C1", "SFO"), Fluent::at("P1", "SFO")];
        let neg = vec![
            Fluent::at("C1", "JFK"),
            Fluent::at("P1", "JFK"),
            Fluent::r#in("C1", "P1"),
        ];
        AirCargoProblem::new(
            vec!["C1".to_string()],
            vec!["P1".to_string()],
            vec!["SFO".to_string(), "JFK".to_string()],
            FluentState::new(pos, neg),
            vec![Fluent::at("C1", "JFK")],
        )
        .unwrap()
    }

    fn find<'a>(problem: &'a AirCargoProblem, name: &str) -> &'a GroundAction {
        problem
            .get_actions()
            .iter()
            .find(|a| a.get_name() == name)
            .unwrap()
    }

    #[test]
    fn test_grounding_cardinality_and_order() {
        let problem = small_problem();
        let names: Vec<&str> = problem
            .get_actions()
            .iter()
            .map(|a| a.get_name())
            .collect();
        assert_eq!(
            vec![
                "Load(C1, P1, SFO)",
                "Load(C1, P1, JFK)",
                "Unload(C1, P1, SFO)",
                "Unload(C1, P1, JFK)",
                "Fly(P1, SFO, JFK)",
                "Fly(P1, JFK, SFO)",
            ],
            names
        );
    }

    #[test]
    fn test_no_schema_generates_negative_preconditions() {
        let problem = small_problem();
        assert!(problem
            .get_actions()
            .iter()
            .all(|a| a.get_precond_neg().is_empty()));
    }

    #[test]
    fn test_empty_object_set_grounds_nothing() {
        let problem = AirCargoProblem::new(
            vec![],
            vec!["P1".to_string()],
            vec![],
            FluentState::new(vec![], vec![]),
            vec![],
        )
        .unwrap();
        assert!(problem.get_actions().is_empty());
        assert!(problem.actions(problem.initial_state()).is_empty());
        assert!(problem.goal_test(problem.initial_state()));
    }

    #[test]
    fn test_applicable_actions_at_initial_state() {
        let problem = small_problem();
        let mut names: Vec<&str> = problem
            .actions(problem.initial_state())
            .iter()
            .map(|a| a.get_name())
            .collect();
        names.sort_unstable();
        assert_eq!(
            vec!["Fly(P1, SFO, JFK)", "Load(C1, P1, SFO)"],
            names
        );
    }

    #[test]
    fn test_applicability_soundness() {
        let problem = small_problem();
        let state = problem.initial_state();
        for action in problem.get_actions() {
            let expected = action.get_precond_pos().iter().all(|f| {
                problem
                    .get_state_map()
                    .index_of(f)
                    .map_or(false, |i| state.holds(i))
            });
            assert_eq!(expected, problem.is_applicable(state, action));
        }
    }

    #[test]
    fn test_result_applies_effects_and_keeps_frame() {
        let problem = small_problem();
        let load = find(&problem, "Load(C1, P1, SFO)");
        let state = problem.initial_state();
        let next = problem.result(state, load);

        let decoded = problem.get_state_map().decode(&next);
        assert!(decoded.pos.contains(&Fluent::r#in("C1", "P1")));
        assert!(decoded.neg.contains(&Fluent::at("C1", "SFO")));
        // Frame property: fluents untouched by the action keep their value.
        let touched: Vec<&Fluent> = load
            .get_effect_add()
            .iter()
            .chain(load.get_effect_del())
            .collect();
        for (i, fluent) in problem.get_state_map().get_fluents().iter().enumerate() {
            if !touched.contains(&fluent) {
                assert_eq!(state.holds(i), next.holds(i), "frame broken at {}", fluent);
            }
        }
    }

    #[test]
    fn test_result_is_a_noop_on_inapplicable_action() {
        let problem = small_problem();
        let unload = find(&problem, "Unload(C1, P1, SFO)");
        let state = problem.initial_state();
        assert!(!problem.is_applicable(state, unload));
        assert_eq!(state, &problem.result(state, unload));
    }

    #[test]
    fn test_goal_test() {
        let problem = small_problem();
        assert!(!problem.goal_test(problem.initial_state()));
        assert_eq!(1, problem.unsatisfied_goal_count(problem.initial_state()));

        let mut state = problem.initial_state().clone();
        for name in [
            "Load(C1, P1, SFO)",
            "Fly(P1, SFO, JFK)",
            "Unload(C1, P1, JFK)",
        ] {
            state = problem.result(&state, find(&problem, name));
        }
        assert!(problem.goal_test(&state));
        assert_eq!(0, problem.unsatisfied_goal_count(&state));
    }

    #[test]
    fn test_goal_outside_vocabulary_is_rejected() {
        let result = AirCargoProblem::new(
            vec!["C1".to_string()],
            vec!["P1".to_string()],
            vec!["SFO".to_string()],
            FluentState::new(vec![Fluent::at("C1", "SFO")], vec![]),
            vec![Fluent::at("C1", "JFK")],
        );
        assert!(result.is_err());
    }
}
