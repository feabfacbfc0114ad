//! Configuration constants for the sliding penguins game.

// Terrain
pub const GRID_SIZE: usize = 10; // Width and height of the icy terrain in cells
pub const PENGUIN_COUNT: usize = 3;
pub const HAZARD_COUNT: usize = 15;
pub const FOOD_COUNT: usize = 20;

// Food
pub const MIN_FOOD_WEIGHT: u32 = 1;
pub const MAX_FOOD_WEIGHT: u32 = 5;

// Game rules
pub const MAX_TURNS: u32 = 4; // Every active penguin acts once per turn
pub const PLAYER_INDEX: usize = 1; // Roster index of the human penguin (P2)
pub const AI_ABILITY_CHANCE: u32 = 30; // Percent chance a computer penguin uses its ability

// Special abilities
pub const KING_STOP_AFTER: u32 = 5;
pub const EMPEROR_STOP_AFTER: u32 = 3;
