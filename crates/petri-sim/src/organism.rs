//! Organism state and attributes.

use petri_core::{Error, OrganismId, Result, Vec3};
use serde::{Deserialize, Serialize};

/// Life-state of an organism
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateKind {
    #[default]
    Alive,
    Dead,
}

impl StateKind {
    pub fn is_dead(&self) -> bool {
        matches!(self, StateKind::Dead)
    }
}

/// Transient per-iteration status of an organism
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    #[serde(rename = "type")]
    pub kind: StateKind,
    /// Organism being attacked / defended against / consumed
    pub target: OrganismId,
    /// Last sampled position; the iteration reads and writes this field,
    /// not the top-level `Organism::position`
    pub position: Vec3,
}

/// Relatively static traits of an organism
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    pub family: u32,
    pub hunger: f32,
    pub energy: f32,
    pub offense: u32,
    pub defense: u32,
    pub agility: u32,
    pub range: f32,
    pub reproductivity: u32,
}

/// A single autonomous organism
///
/// Carries both a top-level `position` (maintained by the owning caller for
/// the wire format) and `state.position` (the sample the iteration operates
/// on). The duplication is inherited from the wire format; `state.position`
/// is authoritative for the iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organism {
    pub id: OrganismId,
    pub position: Vec3,
    pub rotation: f32,
    pub state: State,
    pub attributes: Attributes,
}

impl Organism {
    /// Serialize to the compact JSON wire form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Fail-fast check for malformed records
    pub fn validate(&self) -> Result<()> {
        if !self.position.is_finite() || !self.state.position.is_finite() {
            return Err(Error::InvalidOrganism(format!(
                "organism {} has a non-finite position",
                self.id
            )));
        }
        if !self.attributes.energy.is_finite() {
            return Err(Error::InvalidOrganism(format!(
                "organism {} has non-finite energy",
                self.id
            )));
        }
        Ok(())
    }

    /// Fold an iteration update back onto this organism. Fields absent from
    /// the update are left untouched.
    pub fn apply(&mut self, update: &Update) {
        if let Some(state) = update.state {
            self.state = state;
        }
        if let Some(attributes) = update.attributes {
            self.attributes = attributes;
        }
    }
}

/// A single iteration's update for one organism
///
/// `state` and `attributes` are omitted from the serialized form when not
/// populated for that update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub id: OrganismId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

impl Update {
    /// Serialize to the compact JSON wire form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_organism(id: u32) -> Organism {
        Organism {
            id: OrganismId::new(id),
            position: Vec3::new(0.1, 0.2, 0.3),
            rotation: 0.5,
            state: State {
                kind: StateKind::Alive,
                target: OrganismId::default(),
                position: Vec3::new(0.1, 0.2, 0.3),
            },
            attributes: Attributes {
                family: 1,
                hunger: 0.0,
                energy: 10.0,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_state_kind_wire_strings() {
        assert_eq!(serde_json::to_string(&StateKind::Alive).unwrap(), "\"alive\"");
        assert_eq!(serde_json::to_string(&StateKind::Dead).unwrap(), "\"dead\"");

        let kind: StateKind = serde_json::from_str("\"dead\"").unwrap();
        assert!(kind.is_dead());
    }

    #[test]
    fn test_organism_serializes_all_fields() {
        let organism = test_organism(7);
        let json = organism.to_json().unwrap();

        assert!(json.contains("\"id\":7"));
        assert!(json.contains("\"position\":[0.1,0.2,0.3]"));
        assert!(json.contains("\"rotation\":0.5"));
        assert!(json.contains("\"type\":\"alive\""));
        assert!(json.contains("\"energy\":10"));

        let back: Organism = serde_json::from_str(&json).unwrap();
        assert_eq!(back, organism);
    }

    #[test]
    fn test_update_omits_unpopulated_fields() {
        let update = Update {
            id: OrganismId::new(3),
            state: Some(State::default()),
            attributes: None,
        };
        let json = update.to_json().unwrap();
        assert!(json.contains("\"state\""));
        assert!(!json.contains("\"attributes\""));

        let bare = Update {
            id: OrganismId::new(3),
            state: None,
            attributes: None,
        };
        let json = bare.to_json().unwrap();
        assert_eq!(json, "{\"id\":3}");
    }

    #[test]
    fn test_apply_update() {
        let mut organism = test_organism(1);
        let new_state = State {
            kind: StateKind::Dead,
            target: OrganismId::default(),
            position: Vec3::new(0.9, 0.8, 0.7),
        };

        organism.apply(&Update {
            id: organism.id,
            state: Some(new_state),
            attributes: None,
        });

        assert_eq!(organism.state, new_state);
        // Attributes untouched when absent from the update
        assert_eq!(organism.attributes.energy, 10.0);
    }

    #[test]
    fn test_validate_rejects_non_finite_records() {
        let mut organism = test_organism(2);
        assert!(organism.validate().is_ok());

        organism.state.position = Vec3::new(f32::NAN, 0.0, 0.0);
        assert!(organism.validate().is_err());

        let mut organism = test_organism(2);
        organism.attributes.energy = f32::INFINITY;
        assert!(organism.validate().is_err());
    }
}
