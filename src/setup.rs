//! Random generation of the starting layout.

use crate::config;
use crate::error::GameError;
use crate::grid::Grid;
use crate::occupant::{Food, FoodType, Hazard, Species};
use crate::terrain::Terrain;
use crate::types::{ObjectId, Position};
use log::info;
use rand::Rng;
use rand::seq::SliceRandom;

const HAZARD_KINDS: [Hazard; 4] = [
    Hazard::LightBlock,
    Hazard::HeavyBlock,
    Hazard::SeaLion,
    Hazard::hole(),
];

/// Builds a full starting terrain: penguins on the edges, then hazards, then food.
pub fn generate_terrain<R: Rng>(rng: &mut R) -> Result<Terrain, GameError> {
    let mut terrain = Terrain::new(config::GRID_SIZE);
    info!(
        "Generating a {}x{} icy terrain grid.",
        config::GRID_SIZE,
        config::GRID_SIZE
    );
    place_penguins(&mut terrain, config::PENGUIN_COUNT, rng)?;
    place_hazards(&mut terrain, config::HAZARD_COUNT, rng)?;
    place_food(&mut terrain, config::FOOD_COUNT, rng)?;
    info!(
        "Placed {} penguins, {} hazards and {} food items.",
        config::PENGUIN_COUNT,
        config::HAZARD_COUNT,
        config::FOOD_COUNT
    );
    Ok(terrain)
}

/// The player's penguin, if the roster is long enough
pub fn player_penguin(terrain: &Terrain) -> Option<ObjectId> {
    terrain.penguins.get(config::PLAYER_INDEX).map(|p| p.id)
}

fn is_edge(grid: &Grid, pos: Position) -> bool {
    let last = grid.size() as i32 - 1;
    pos.row == 0 || pos.col == 0 || pos.row == last || pos.col == last
}

fn random_empty_cell<R: Rng>(
    grid: &Grid,
    rng: &mut R,
    edge_only: bool,
    what: &'static str,
) -> Result<Position, GameError> {
    let candidates: Vec<Position> = grid
        .empty_cells()
        .into_iter()
        .filter(|&pos| !edge_only || is_edge(grid, pos))
        .collect();
    candidates
        .choose(rng)
        .copied()
        .ok_or(GameError::NoFreeCell(what))
}

/// Penguins `P1..Pn` with random species, each on a free edge cell
pub fn place_penguins<R: Rng>(terrain: &mut Terrain, count: usize, rng: &mut R) -> Result<(), GameError> {
    for i in 1..=count {
        let species = Species::ALL[rng.gen_range(0..Species::ALL.len())];
        let pos = random_empty_cell(&terrain.grid, rng, true, "a penguin")?;
        let name = format!("P{}", i);
        terrain.add_penguin(&name, species, pos);
        info!("{} ({}) starts at {}", name, species, pos);
    }
    Ok(())
}

pub fn place_hazards<R: Rng>(terrain: &mut Terrain, count: usize, rng: &mut R) -> Result<(), GameError> {
    for _ in 0..count {
        let hazard = HAZARD_KINDS[rng.gen_range(0..HAZARD_KINDS.len())];
        let pos = random_empty_cell(&terrain.grid, rng, false, "a hazard")?;
        terrain.add_hazard(hazard, pos);
    }
    Ok(())
}

pub fn place_food<R: Rng>(terrain: &mut Terrain, count: usize, rng: &mut R) -> Result<(), GameError> {
    for _ in 0..count {
        let kind = FoodType::ALL[rng.gen_range(0..FoodType::ALL.len())];
        let weight = rng.gen_range(config::MIN_FOOD_WEIGHT..=config::MAX_FOOD_WEIGHT);
        let pos = random_empty_cell(&terrain.grid, rng, false, "a food item")?;
        terrain.add_food(Food::new(kind, weight), pos);
    }
    Ok(())
}
