// Text rendering of the board, roster and scoreboard

use crate::occupant::Food;
use crate::terrain::Terrain;
use crate::types::{ObjectId, Position};
use std::fmt::Write;

const CELL_WIDTH: usize = 6; // "XX  | "

/// One line of the final ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub rank: usize,
    pub id: ObjectId,
    pub name: String,
    pub is_player: bool,
    pub food: Vec<Food>,
    pub total_weight: u32,
}

/// The grid as a boxed table, one row of cells per line
pub fn render_grid(terrain: &Terrain) -> String {
    let size = terrain.grid.size();
    let separator = "-".repeat(size * CELL_WIDTH + 1);
    let mut s = String::new();
    let _ = writeln!(s, "{}", separator);
    for row in 0..size {
        s.push_str("| ");
        for col in 0..size {
            let symbol = terrain
                .symbol_at(Position::new(row as i32, col as i32))
                .unwrap_or_default();
            let _ = write!(s, "{:<3} | ", symbol);
        }
        s.push('\n');
        let _ = writeln!(s, "{}", separator);
    }
    s
}

pub fn render_roster(terrain: &Terrain, player: Option<ObjectId>) -> String {
    let mut s = String::from("These are the penguins on the icy terrain:\n");
    for (i, p) in terrain.penguins.iter().enumerate() {
        let role = if Some(p.id) == player {
            " ---> YOUR PENGUIN"
        } else {
            ""
        };
        let _ = writeln!(s, "- Penguin {} ({}): {}{}", i + 1, p.name, p.species, role);
    }
    s
}

pub fn ordinal_suffix(n: usize) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Penguins ranked by collected weight, heaviest first; ties keep roster order
pub fn scoreboard(terrain: &Terrain, player: Option<ObjectId>) -> Vec<ScoreEntry> {
    let mut ranked: Vec<_> = terrain.penguins.iter().collect();
    ranked.sort_by(|a, b| b.total_weight().cmp(&a.total_weight()));
    ranked
        .into_iter()
        .enumerate()
        .map(|(i, p)| ScoreEntry {
            rank: i + 1,
            id: p.id,
            name: p.name.clone(),
            is_player: Some(p.id) == player,
            food: p.inventory.clone(),
            total_weight: p.total_weight(),
        })
        .collect()
}

pub fn render_scoreboard(entries: &[ScoreEntry]) -> String {
    let mut s = String::from("***** SCOREBOARD FOR THE PENGUINS *****\n");
    for entry in entries {
        let role = if entry.is_player { " (Your Penguin)" } else { "" };
        let _ = writeln!(
            s,
            "* {}{} place: {}{}",
            entry.rank,
            ordinal_suffix(entry.rank),
            entry.name,
            role
        );
        let items = if entry.food.is_empty() {
            "None".to_string()
        } else {
            entry
                .food
                .iter()
                .map(|f| format!("{} ({} units)", f.kind.symbol(), f.weight))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let _ = writeln!(s, " |---> Food items: {}", items);
        let _ = writeln!(s, " |---> Total weight: {} units", entry.total_weight);
    }
    s
}
