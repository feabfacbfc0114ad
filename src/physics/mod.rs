// Sliding physics: the slide engine, collision reactions and special abilities

mod ability;
mod collision;
pub mod event;
mod slide;

pub use event::{Event, Label};
pub use slide::SlideStop;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::occupant::{Food, FoodType};
    use crate::physics::Event;
    use crate::terrain::Terrain;
    use crate::types::{ObjectId, Position};

    /// An empty 10x10 terrain
    pub fn terrain() -> Terrain {
        Terrain::new(10)
    }

    pub fn food(weight: u32) -> Food {
        Food::new(FoodType::Krill, weight)
    }

    pub fn at(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    pub fn pos(terrain: &Terrain, id: ObjectId) -> Option<Position> {
        terrain.grid.position_of(id)
    }

    pub fn weights(terrain: &Terrain, id: ObjectId) -> Vec<u32> {
        terrain
            .penguin(id)
            .map(|p| p.inventory.iter().map(|f| f.weight).collect())
            .unwrap_or_default()
    }

    /// True when no id appears in two cells
    pub fn no_double_occupancy(terrain: &Terrain) -> bool {
        let mut seen = std::collections::HashSet::new();
        terrain.grid.occupants().all(|(_, o)| seen.insert(o.id))
    }

    pub fn has_event(events: &[Event], pred: impl Fn(&Event) -> bool) -> bool {
        events.iter().any(pred)
    }
}
