//! The iteration step: one discrete tick over the whole population.

use crate::organism::{Organism, State, StateKind, Update};
use petri_core::{IterationConfig, OrganismId, Vec3};
use rand::Rng;
use std::collections::HashMap;
use tracing::{debug, instrument, trace};

/// Draw a uniform random position with each axis in [0, 1)
pub fn random_position<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(rng.gen(), rng.gen(), rng.gen())
}

/// Apply one iteration with the default configuration.
pub fn iterate<R: Rng + ?Sized>(
    organisms: &HashMap<OrganismId, Organism>,
    rng: &mut R,
) -> HashMap<OrganismId, Update> {
    iterate_with_config(organisms, &IterationConfig::default(), rng)
}

/// Apply one iteration of AI and return the change in state as a map of
/// updates, one per input organism.
///
/// The computation is two-phase: every organism first gets a resampled
/// candidate position, then every organism's next life-state is decided
/// against the *original* snapshot. The phases must not be collapsed into a
/// single pass, otherwise the proximity scan would read already-resampled
/// positions for part of the population depending on map iteration order.
#[instrument(skip(organisms, config, rng), fields(population = organisms.len()))]
pub fn iterate_with_config<R: Rng + ?Sized>(
    organisms: &HashMap<OrganismId, Organism>,
    config: &IterationConfig,
    rng: &mut R,
) -> HashMap<OrganismId, Update> {
    let mut updates: HashMap<OrganismId, Update> = HashMap::with_capacity(organisms.len());

    // Phase 1: resample every organism's position independently
    for organism in organisms.values() {
        updates.insert(
            organism.id,
            Update {
                id: organism.id,
                state: Some(State {
                    position: random_position(rng),
                    ..Default::default()
                }),
                attributes: None,
            },
        );
    }

    // Phase 2: decide next life-states against the original snapshot
    for (id, organism) in organisms {
        let kind = next_state_kind(*id, organism, organisms, config.proximity_threshold);
        if let Some(state) = updates
            .get_mut(id)
            .and_then(|update| update.state.as_mut())
        {
            state.kind = kind;
        }
    }

    trace!(updates = updates.len(), "iteration complete");
    updates
}

/// Decide the next life-state for one organism.
///
/// Dead is terminal. A living organism dies when any other organism is close
/// by (every axis difference strictly under the threshold) and holds strictly
/// more energy; equal energy is a stand-off. The first such neighbor found is
/// sufficient, and the outcome does not depend on enumeration order.
fn next_state_kind(
    id: OrganismId,
    organism: &Organism,
    organisms: &HashMap<OrganismId, Organism>,
    threshold: f32,
) -> StateKind {
    if organism.state.kind.is_dead() {
        return StateKind::Dead;
    }

    let position = organism.state.position;

    for (other_id, other) in organisms {
        if *other_id == id {
            continue;
        }
        let close_by = position.within_axis_threshold(other.state.position, threshold);
        if close_by && organism.attributes.energy < other.attributes.energy {
            debug!(
                organism_id = %id,
                neighbor_id = %other_id,
                energy = organism.attributes.energy,
                neighbor_energy = other.attributes.energy,
                "organism overpowered by close-by neighbor"
            );
            return StateKind::Dead;
        }
    }

    StateKind::Alive
}
