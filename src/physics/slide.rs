// Slide engine: advances one object a cell at a time until something stops it

use super::event::Event;
use crate::debug_slide;
use crate::occupant::OccupantKind;
use crate::terrain::Terrain;
use crate::types::{Direction, ObjectId, Position};

/// Why a slide ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideStop {
    Missing,   // Object was not on the grid (already removed earlier in the chain)
    FellOff,   // Left the grid over an edge
    Ate,       // Penguin stopped on food
    Collided,  // Struck a hazard or a penguin
    StepLimit, // Controlled stop after the allowed number of cells
}

impl Terrain {
    /// Slides `id` in `direction` until it stops.
    ///
    /// With a step limit the object stops voluntarily after that many empty
    /// cells. Food, edges and collisions still end the slide first.
    /// Collisions may start further slides of the objects that were struck;
    /// those run to completion before this call returns.
    pub fn slide(&mut self, id: ObjectId, direction: Direction, step_limit: Option<u32>) -> SlideStop {
        let mut steps = 0;
        loop {
            let Some(from) = self.grid.position_of(id) else {
                debug_slide!("{} is no longer on the ice", id);
                return SlideStop::Missing;
            };

            if step_limit.is_some_and(|limit| steps >= limit) {
                let label = self.label(id);
                self.record(Event::StoppedEarly(label));
                return SlideStop::StepLimit;
            }

            let to = from.step(direction);
            if self.grid.is_out_of_bounds(to) {
                self.fall_into_water(from);
                return SlideStop::FellOff;
            }

            let Some(target) = self.grid.occupant_at(to).copied() else {
                debug_slide!("{} slides {} -> {}", id, from, to);
                self.grid.move_atomic(from, to);
                steps += 1;
                continue;
            };

            match target.kind {
                OccupantKind::Food(food) => {
                    self.grid.clear(to);
                    self.grid.move_atomic(from, to);
                    if self.is_penguin(id) {
                        self.feed(id, food);
                        return SlideStop::Ate;
                    }
                    let by = self.label(id);
                    self.record(Event::FoodCrushed { by, food });
                }
                _ => {
                    self.resolve_collision(id, target, direction, from, to);
                    return SlideStop::Collided;
                }
            }
        }
    }

    /// Removes whatever stands at `from` over the edge; penguins are eliminated
    pub(crate) fn fall_into_water(&mut self, from: Position) {
        let Some(occupant) = self.grid.occupant_at(from).copied() else {
            return;
        };
        let label = self.label_of(&occupant);
        self.grid.clear(from);
        self.record(Event::FellIntoWater(label));
        if occupant.is_penguin() {
            self.eliminate(occupant.id);
        }
    }
}
