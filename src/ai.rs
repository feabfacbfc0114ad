// Heuristic for computer-controlled penguins

use crate::config;
use crate::debug_ai;
use crate::occupant::{Ability, OccupantKind};
use crate::terrain::Terrain;
use crate::types::{Direction, ObjectId, Position};
use rand::Rng;
use rand::seq::SliceRandom;

/// First thing a penguin would meet looking along a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sighting {
    Food,
    Obstacle, // Hazard or another penguin
    Nothing,  // Open ice up to the edge
}

/// One move: a direction and whether to spend the special ability on it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub direction: Direction,
    pub use_ability: bool,
    pub auto_jump: bool, // Set when a Rockhopper jumps without rolling for it
}

pub fn look(terrain: &Terrain, from: Position, direction: Direction) -> Sighting {
    let mut cursor = from.step(direction);
    while !terrain.grid.is_out_of_bounds(cursor) {
        if let Some(occupant) = terrain.grid.occupant_at(cursor) {
            return match occupant.kind {
                OccupantKind::Food(_) => Sighting::Food,
                _ => Sighting::Obstacle,
            };
        }
        cursor = cursor.step(direction);
    }
    Sighting::Nothing
}

/// Picks a move: food first, then something to stop against, then anything.
/// Returns `None` if the penguin is no longer on the ice.
pub fn decide<R: Rng>(terrain: &Terrain, penguin: ObjectId, rng: &mut R) -> Option<Decision> {
    let p = terrain.penguin(penguin)?;
    let from = terrain.grid.position_of(penguin)?;

    let mut food_dirs = Vec::new();
    let mut obstacle_dirs = Vec::new();
    for direction in Direction::ALL {
        match look(terrain, from, direction) {
            Sighting::Food => food_dirs.push(direction),
            Sighting::Obstacle => obstacle_dirs.push(direction),
            Sighting::Nothing => {}
        }
    }

    let direction = food_dirs
        .choose(rng)
        .or_else(|| obstacle_dirs.choose(rng))
        .copied()
        .unwrap_or_else(|| Direction::ALL[rng.gen_range(0..Direction::ALL.len())]);

    let rolled = !p.ability_used && rng.gen_range(0..100) < config::AI_ABILITY_CHANCE;
    // Rockhoppers always jump the first hazard they head towards
    let auto_jump = p.ability() == Ability::HazardJump
        && !p.ability_used
        && terrain.first_hazard_ahead(from, direction).is_some();
    let use_ability = rolled || auto_jump;

    debug_ai!(
        "{} sees food {:?}, obstacles {:?}; picks {} (ability: {})",
        p.name,
        food_dirs,
        obstacle_dirs,
        direction,
        use_ability
    );
    Some(Decision {
        direction,
        use_ability,
        auto_jump,
    })
}
