// Special abilities: each is a different way of driving the slide engine

use super::event::Event;
use crate::debug_ability;
use crate::occupant::{Ability, Occupant};
use crate::terrain::Terrain;
use crate::types::{Direction, ObjectId, Position};

impl Terrain {
    /// Performs one penguin action and returns every event it raised.
    ///
    /// The ability can only be used once per game; asking for it again
    /// results in a plain slide. Eliminated penguins do nothing.
    pub fn perform_action(&mut self, penguin: ObjectId, direction: Direction, use_ability: bool) -> Vec<Event> {
        self.forget_bounces();
        let Some(p) = self.penguin_mut(penguin) else {
            return Vec::new();
        };
        if !p.is_active() {
            return Vec::new();
        }

        let ability = p.ability();
        if use_ability && !p.ability_used {
            p.ability_used = true;
            let label = self.label(penguin);
            self.record(Event::AbilityUsed {
                penguin: label,
                ability,
            });
            match ability {
                Ability::StopAfter(limit) => {
                    self.slide(penguin, direction, Some(limit));
                }
                Ability::SafeStep => self.safe_step(penguin, direction),
                Ability::HazardJump => self.hazard_jump(penguin, direction),
            }
        } else {
            if use_ability {
                debug_ability!("{} has already used its ability", penguin);
            }
            self.slide(penguin, direction, None);
        }

        self.take_events()
    }

    // One careful step; if it lands on open ice the penguin slides on from there
    fn safe_step(&mut self, penguin: ObjectId, direction: Direction) {
        let Some(from) = self.grid.position_of(penguin) else {
            return;
        };
        let to = from.step(direction);
        if self.grid.is_out_of_bounds(to) {
            debug_ability!("{} stepped off the grid", penguin);
            self.fall_into_water(from);
            return;
        }

        match self.grid.occupant_at(to).copied() {
            None => {
                self.grid.move_atomic(from, to);
                let label = self.label(penguin);
                self.record(Event::SlidesOn(label));
                self.slide(penguin, direction, None);
            }
            Some(target) => match target.as_food() {
                Some(food) => {
                    self.grid.clear(to);
                    self.grid.move_atomic(from, to);
                    self.feed(penguin, food);
                }
                None => {
                    let label = self.label(penguin);
                    let blocker = self.label_of(&target);
                    self.record(Event::SafeStepBlocked {
                        penguin: label,
                        blocker,
                    });
                }
            },
        }
    }

    /// First hazard along `direction` from `from`, unless food, a penguin
    /// or the edge comes first
    pub fn first_hazard_ahead(&self, from: Position, direction: Direction) -> Option<(Occupant, Position)> {
        let mut cursor = from.step(direction);
        while !self.grid.is_out_of_bounds(cursor) {
            match self.grid.occupant_at(cursor) {
                None => cursor = cursor.step(direction),
                Some(o) if o.as_hazard().is_some() => return Some((*o, cursor)),
                Some(_) => return None,
            }
        }
        None
    }

    // Hop over the first hazard in the path without triggering it
    fn hazard_jump(&mut self, penguin: ObjectId, direction: Direction) {
        let Some(start) = self.grid.position_of(penguin) else {
            return;
        };
        let label = self.label(penguin);

        let Some((hazard, hazard_at)) = self.first_hazard_ahead(start, direction) else {
            self.record(Event::NothingToJump(label));
            self.slide(penguin, direction, None);
            return;
        };
        let over = self.label_of(&hazard);

        let landing = hazard_at.step(direction);
        if self.grid.is_out_of_bounds(landing) {
            self.grid.clear(start);
            self.record(Event::JumpLandedInWater {
                penguin: label,
                over,
            });
            self.eliminate(penguin);
            return;
        }

        match self.grid.occupant_at(landing).copied() {
            None => {
                self.grid.move_atomic(start, landing);
                self.record(Event::Jumped {
                    penguin: label,
                    over,
                });
            }
            Some(target) => match target.as_food() {
                Some(food) => {
                    self.grid.clear(landing);
                    self.grid.move_atomic(start, landing);
                    self.record(Event::Jumped {
                        penguin: label,
                        over,
                    });
                    self.feed(penguin, food);
                }
                None => {
                    let blocker = self.label_of(&target);
                    self.record(Event::JumpFailed {
                        penguin: label,
                        blocker,
                    });
                    self.slide(penguin, direction, None);
                }
            },
        }
    }
}
