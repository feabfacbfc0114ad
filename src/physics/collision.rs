// Collision reactions, keyed on what was struck

use super::event::Event;
use crate::debug_collision;
use crate::occupant::{Hazard, Occupant, OccupantKind};
use crate::terrain::Terrain;
use crate::types::{Direction, ObjectId, Position};

impl Terrain {
    /// Reacts to `moving` (standing at `from`) striking `stationary` (at `at`).
    /// The mover never advances further; struck movables start their own slides.
    pub(crate) fn resolve_collision(
        &mut self,
        moving: ObjectId,
        stationary: Occupant,
        direction: Direction,
        from: Position,
        at: Position,
    ) {
        let mover = self.label(moving);
        let struck = self.label_of(&stationary);
        if matches!(
            stationary.kind,
            OccupantKind::Food(_) | OccupantKind::Hazard(Hazard::Hole { plugged: true })
        ) {
            // Food and plugged holes never block a slide
            debug_collision!("{} passes over {} at {}", mover, struck, at);
            return;
        }
        let mover_is_penguin = self.is_penguin(moving);
        debug_collision!("{} at {} struck {} at {} moving {}", mover, from, struck, at, direction);
        self.record(Event::Collision {
            moving: mover.clone(),
            stationary: struck.clone(),
        });

        match stationary.kind {
            OccupantKind::Hazard(Hazard::Hole { plugged: false }) => {
                self.fall_into_hole(moving, from, at);
            }
            OccupantKind::Hazard(Hazard::HeavyBlock) => {
                if mover_is_penguin {
                    self.lose_lightest_food(moving);
                }
            }
            OccupantKind::Hazard(Hazard::LightBlock) => {
                if mover_is_penguin {
                    if let Some(p) = self.penguin_mut(moving) {
                        p.stun();
                    }
                    self.record(Event::Stunned(mover.clone()));
                }
                self.record(Event::Pushed {
                    pusher: mover,
                    pushed: struck,
                });
                self.slide(stationary.id, direction, None);
            }
            OccupantKind::Hazard(Hazard::SeaLion) => {
                self.record(Event::Pushed {
                    pusher: mover.clone(),
                    pushed: struck.clone(),
                });
                self.slide(stationary.id, direction, None);
                // Only penguins bounce; a pushed hazard just stops
                if !mover_is_penguin {
                    return;
                }
                if !self.first_bounce(moving, stationary.id, direction, from) {
                    // Pinned between sea lions that cannot move: stop where it stands
                    self.record(Event::BounceHalted {
                        penguin: mover,
                        sea_lion: struck,
                    });
                    return;
                }
                self.record(Event::Bounced {
                    penguin: mover,
                    sea_lion: struck,
                });
                self.slide(moving, direction.opposite(), None);
            }
            OccupantKind::Penguin => {
                if mover_is_penguin {
                    self.record(Event::Pushed {
                        pusher: mover,
                        pushed: struck,
                    });
                    self.slide(stationary.id, direction, None);
                }
            }
            OccupantKind::Food(_) | OccupantKind::Hazard(Hazard::Hole { plugged: true }) => {}
        }
    }

    fn fall_into_hole(&mut self, moving: ObjectId, from: Position, at: Position) {
        let Some(occupant) = self.grid.clear(from) else {
            return;
        };
        let label = self.label_of(&occupant);
        self.record(Event::FellIntoHole(label));

        if occupant.is_penguin() {
            self.eliminate(moving);
            return;
        }

        let Some(hole) = self.grid.occupant_at_mut(at) else {
            return;
        };
        hole.kind = OccupantKind::Hazard(Hazard::Hole { plugged: true });
        let hole = *hole;
        self.grid.sink_into_floor(at);
        let label = self.label_of(&hole);
        self.record(Event::HolePlugged { hole: label, at });
    }

    fn lose_lightest_food(&mut self, id: ObjectId) {
        let Some(p) = self.penguin_mut(id) else {
            return;
        };
        let lost = p.remove_lightest_food();
        let label = self.label(id);
        match lost {
            Some(food) => self.record(Event::FoodLost {
                penguin: label,
                food,
            }),
            None => self.record(Event::NoFoodToLose(label)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occupant::{PenguinStatus, Species};
    use crate::physics::SlideStop;
    use crate::physics::test_support::*;

    #[test]
    fn test_heavy_block_takes_lightest_food() {
        let mut terrain = terrain();
        let p = terrain.add_penguin("P1", Species::King, at(3, 0));
        for w in [1, 3, 5] {
            terrain.feed(p, food(w));
        }
        terrain.add_hazard(Hazard::HeavyBlock, at(3, 6));
        terrain.take_events();

        let stop = terrain.slide(p, Direction::Right, None);

        assert_eq!(stop, SlideStop::Collided);
        assert_eq!(pos(&terrain, p), Some(at(3, 5)));
        assert_eq!(weights(&terrain, p), vec![3, 5]);
        let events = terrain.take_events();
        assert!(has_event(&events, |e| matches!(e, Event::FoodLost { food, .. } if food.weight == 1)));
    }

    #[test]
    fn test_heavy_block_with_empty_inventory() {
        let mut terrain = terrain();
        let p = terrain.add_penguin("P1", Species::King, at(3, 0));
        terrain.add_hazard(Hazard::HeavyBlock, at(3, 2));
        terrain.slide(p, Direction::Right, None);
        assert_eq!(pos(&terrain, p), Some(at(3, 1)));
        assert!(weights(&terrain, p).is_empty());
        assert_eq!(terrain.penguin(p).unwrap().status, PenguinStatus::Active);
        let events = terrain.take_events();
        assert!(has_event(&events, |e| matches!(e, Event::NoFoodToLose(l) if l.id == p)));
    }

    #[test]
    fn test_light_block_stuns_and_slides() {
        let mut terrain = terrain();
        let p = terrain.add_penguin("P1", Species::King, at(2, 0));
        let lb = terrain.add_hazard(Hazard::LightBlock, at(2, 3));
        terrain.add_hazard(Hazard::HeavyBlock, at(2, 8));

        terrain.slide(p, Direction::Right, None);

        assert_eq!(pos(&terrain, p), Some(at(2, 2)));
        assert!(terrain.penguin(p).unwrap().is_stunned());
        assert_eq!(pos(&terrain, lb), Some(at(2, 7)));
        let events = terrain.take_events();
        assert!(has_event(&events, |e| matches!(e, Event::Stunned(l) if l.id == p)));
        assert!(has_event(&events, |e| matches!(e, Event::Pushed { pushed, .. } if pushed.id == lb)));
    }

    #[test]
    fn test_light_block_chain_reaction() {
        let mut terrain = terrain();
        let p = terrain.add_penguin("P1", Species::King, at(2, 0));
        let first = terrain.add_hazard(Hazard::LightBlock, at(2, 3));
        let second = terrain.add_hazard(Hazard::LightBlock, at(2, 6));

        terrain.slide(p, Direction::Right, None);

        assert_eq!(pos(&terrain, p), Some(at(2, 2)));
        assert_eq!(pos(&terrain, first), Some(at(2, 5)));
        assert_eq!(pos(&terrain, second), None);
        assert!(no_double_occupancy(&terrain));
    }

    #[test]
    fn test_hazard_into_hole_plugs_it() {
        let mut terrain = terrain();
        let sl = terrain.add_hazard(Hazard::SeaLion, at(7, 7));
        let hole = terrain.add_hazard(Hazard::hole(), at(3, 7));

        terrain.slide(sl, Direction::Up, None);

        assert_eq!(pos(&terrain, sl), None);
        assert_eq!(
            terrain.grid.floor_at(at(3, 7)).and_then(|o| o.as_hazard()),
            Some(Hazard::Hole { plugged: true })
        );
        let events = terrain.take_events();
        assert!(has_event(&events, |e| matches!(e, Event::FellIntoHole(l) if l.id == sl)));
        assert!(has_event(&events, |e| matches!(e, Event::HolePlugged { hole: h, .. } if h.id == hole)));
    }

    #[test]
    fn test_penguin_into_hole_is_eliminated_and_hole_stays_open() {
        let mut terrain = terrain();
        let p = terrain.add_penguin("P1", Species::King, at(0, 0));
        terrain.feed(p, food(5));
        let hole = terrain.add_hazard(Hazard::hole(), at(4, 0));

        terrain.slide(p, Direction::Down, None);

        assert_eq!(pos(&terrain, p), None);
        assert!(!terrain.penguin(p).unwrap().is_active());
        assert_eq!(weights(&terrain, p), vec![5]);
        assert_eq!(pos(&terrain, hole), Some(at(4, 0)));
        assert_eq!(terrain.symbol_at(at(4, 0)).as_deref(), Some("HI"));
    }

    #[test]
    fn test_sea_lion_bounces_penguin_back() {
        let mut terrain = terrain();
        terrain.add_hazard(Hazard::HeavyBlock, at(0, 0));
        let p = terrain.add_penguin("P1", Species::King, at(0, 3));
        let sl = terrain.add_hazard(Hazard::SeaLion, at(0, 5));
        terrain.add_hazard(Hazard::HeavyBlock, at(0, 9));

        terrain.slide(p, Direction::Right, None);

        assert_eq!(pos(&terrain, sl), Some(at(0, 8)));
        assert_eq!(pos(&terrain, p), Some(at(0, 1)));
        let events = terrain.take_events();
        assert!(has_event(&events, |e| matches!(e, Event::Bounced { penguin, .. } if penguin.id == p)));
    }

    #[test]
    fn test_sea_lion_bounce_on_open_lane() {
        let mut terrain = terrain();
        let p = terrain.add_penguin("P1", Species::King, at(0, 3));
        let sl = terrain.add_hazard(Hazard::SeaLion, at(0, 5));

        terrain.slide(p, Direction::Right, None);

        assert_eq!(pos(&terrain, sl), None);
        assert_eq!(pos(&terrain, p), None);
        assert_eq!(terrain.penguin(p).unwrap().status, PenguinStatus::Eliminated);
        assert_eq!(terrain.grid.occupants().count(), 0);
    }

    #[test]
    fn test_penguin_pinned_between_sea_lions_stops() {
        let mut terrain = terrain();
        terrain.add_hazard(Hazard::HeavyBlock, at(0, 0));
        let left = terrain.add_hazard(Hazard::SeaLion, at(0, 1));
        let p = terrain.add_penguin("P1", Species::King, at(0, 4));
        let right = terrain.add_hazard(Hazard::SeaLion, at(0, 8));
        terrain.add_hazard(Hazard::HeavyBlock, at(0, 9));

        let events = terrain.perform_action(p, Direction::Right, false);

        assert_eq!(pos(&terrain, p), Some(at(0, 7)));
        assert_eq!(pos(&terrain, left), Some(at(0, 1)));
        assert_eq!(pos(&terrain, right), Some(at(0, 8)));
        assert!(terrain.penguin(p).unwrap().is_active());
        let bounces = events.iter().filter(|e| matches!(e, Event::Bounced { .. })).count();
        assert_eq!(bounces, 2);
        assert!(has_event(&events, |e| matches!(e, Event::BounceHalted { penguin, sea_lion } if penguin.id == p && sea_lion.id == right)));
        assert!(no_double_occupancy(&terrain));
    }

    #[test]
    fn test_bounce_memory_resets_each_action() {
        let mut terrain = terrain();
        terrain.add_hazard(Hazard::HeavyBlock, at(0, 0));
        terrain.add_hazard(Hazard::SeaLion, at(0, 1));
        let p = terrain.add_penguin("P1", Species::King, at(0, 4));
        terrain.add_hazard(Hazard::SeaLion, at(0, 8));
        terrain.add_hazard(Hazard::HeavyBlock, at(0, 9));

        terrain.perform_action(p, Direction::Right, false);
        let events = terrain.perform_action(p, Direction::Left, false);

        // From (0, 7) leftwards: bounce, bounce, then the repeat is halted
        assert_eq!(pos(&terrain, p), Some(at(0, 2)));
        let bounces = events.iter().filter(|e| matches!(e, Event::Bounced { .. })).count();
        assert_eq!(bounces, 2);
        assert!(has_event(&events, |e| matches!(e, Event::BounceHalted { .. })));
    }

    #[test]
    fn test_passable_occupants_raise_no_collision() {
        let mut terrain = terrain();
        let p = terrain.add_penguin("P1", Species::King, at(1, 1));
        let f = terrain.add_food(food(3), at(1, 2));
        let snack = *terrain.grid.occupant_at(at(1, 2)).unwrap();
        let plugged = Occupant::hazard(ObjectId(99), Hazard::Hole { plugged: true });

        terrain.resolve_collision(p, snack, Direction::Right, at(1, 1), at(1, 2));
        terrain.resolve_collision(p, plugged, Direction::Right, at(1, 1), at(1, 2));

        assert!(terrain.take_events().is_empty());
        assert_eq!(pos(&terrain, p), Some(at(1, 1)));
        assert_eq!(pos(&terrain, f), Some(at(1, 2)));
    }

    #[test]
    fn test_hazard_into_sea_lion_does_not_bounce() {
        let mut terrain = terrain();
        let lb = terrain.add_hazard(Hazard::LightBlock, at(6, 0));
        let sl = terrain.add_hazard(Hazard::SeaLion, at(6, 4));
        terrain.add_hazard(Hazard::HeavyBlock, at(6, 8));

        terrain.slide(lb, Direction::Right, None);

        assert_eq!(pos(&terrain, lb), Some(at(6, 3)));
        assert_eq!(pos(&terrain, sl), Some(at(6, 7)));
        let events = terrain.take_events();
        assert!(!has_event(&events, |e| matches!(e, Event::Bounced { .. })));
    }

    #[test]
    fn test_penguin_pushes_penguin() {
        let mut terrain = terrain();
        let p1 = terrain.add_penguin("P1", Species::King, at(4, 0));
        let p2 = terrain.add_penguin("P2", Species::Royal, at(4, 5));
        terrain.add_hazard(Hazard::HeavyBlock, at(4, 9));

        terrain.slide(p1, Direction::Right, None);

        assert_eq!(pos(&terrain, p1), Some(at(4, 4)));
        assert_eq!(pos(&terrain, p2), Some(at(4, 8)));
        let events = terrain.take_events();
        assert!(has_event(&events, |e| matches!(e, Event::Pushed { pusher, pushed } if pusher.id == p1 && pushed.id == p2)));
    }

    #[test]
    fn test_hazard_into_penguin_just_stops() {
        let mut terrain = terrain();
        let lb = terrain.add_hazard(Hazard::LightBlock, at(9, 9));
        let p = terrain.add_penguin("P1", Species::King, at(9, 2));

        terrain.slide(lb, Direction::Left, None);

        assert_eq!(pos(&terrain, lb), Some(at(9, 3)));
        assert_eq!(pos(&terrain, p), Some(at(9, 2)));
        assert!(!terrain.penguin(p).unwrap().is_stunned());
    }

    #[test]
    fn test_cascade_keeps_single_occupancy() {
        let mut terrain = terrain();
        let p1 = terrain.add_penguin("P1", Species::King, at(5, 0));
        let p2 = terrain.add_penguin("P2", Species::King, at(5, 2));
        terrain.add_hazard(Hazard::LightBlock, at(5, 4));
        terrain.add_food(food(2), at(5, 5));
        terrain.add_hazard(Hazard::SeaLion, at(5, 7));
        terrain.add_hazard(Hazard::hole(), at(5, 9));
        terrain.add_hazard(Hazard::HeavyBlock, at(0, 0));

        terrain.slide(p1, Direction::Right, None);

        assert!(no_double_occupancy(&terrain));
        assert_eq!(pos(&terrain, p1), Some(at(5, 1)));
        assert_eq!(pos(&terrain, p2), Some(at(5, 3)));
        assert!(terrain.penguin(p2).unwrap().is_stunned());
        // The light block crushes the food and stops at the sea lion, which falls in the hole
        assert_eq!(terrain.symbol_at(at(5, 6)).as_deref(), Some("LB"));
        assert_eq!(terrain.symbol_at(at(5, 9)).as_deref(), Some("PH"));
        assert!(terrain.grid.is_empty(at(5, 8)));
    }
}
