use crate::model::fluent::Fluent;
use std::fmt::{Display, Formatter};

/// A concrete, variable-free action produced by grounding one of the domain
/// schemas. Grounded actions are built once at problem construction and
/// shared by reference across every search node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundAction {
    name: String,
    precond_pos: Vec<Fluent>,
    precond_neg: Vec<Fluent>,
    effect_add: Vec<Fluent>,
    effect_del: Vec<Fluent>,
}

impl GroundAction {
    pub fn new(
        name: impl Display,
        precond_pos: Vec<Fluent>,
        precond_neg: Vec<Fluent>,
        effect_add: Vec<Fluent>,
        effect_del: Vec<Fluent>,
    ) -> Self {
        Self {
            name: name.to_string(),
            precond_pos,
            precond_neg,
            effect_add,
            effect_del,
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Fluents that must hold for this action to fire.
    pub fn get_precond_pos(&self) -> &[Fluent] {
        &self.precond_pos
    }

    /// Fluents that must not hold for this action to fire.
    pub fn get_precond_neg(&self) -> &[Fluent] {
        &self.precond_neg
    }

    pub fn get_effect_add(&self) -> &[Fluent] {
        &self.effect_add
    }

    pub fn get_effect_del(&self) -> &[Fluent] {
        &self.effect_del
    }
}

impl Display for GroundAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::action::GroundAction;
    use crate::model::fluent::Fluent;

    #[test]
    fn test_display_is_the_ground_name() {
        let action = GroundAction::new(
            "Load(C1, P1, SFO)",
            vec![Fluent::at("C1", "SFO"), Fluent::at("P1", "SFO")],
            vec![],
            vec![Fluent::r#in("C1", "P1")],
            vec![Fluent::at("C1", "SFO")],
        );
        assert_eq!("Load(C1, P1, SFO)", action.to_string());
        assert!(action.get_precond_neg().is_empty());
    }
}
