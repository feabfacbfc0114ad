use crate::grid::Grid;
use crate::occupant::{Food, Hazard, Occupant, OccupantKind, Penguin, Species};
use crate::physics::{Event, Label};
use crate::types::{Direction, ObjectId, Position};
use log::debug;
use std::collections::HashSet;

/// The icy terrain: the grid plus the penguin roster.
/// Eliminated penguins stay in the roster for scoring but leave the grid.
#[derive(Debug, Clone)]
pub struct Terrain {
    pub grid: Grid,
    pub penguins: Vec<Penguin>,
    next_id: u32,
    events: Vec<Event>,
    bounces: HashSet<(ObjectId, ObjectId, Direction, Position)>, // Sea lion bounces seen in the current action
}

impl Terrain {
    pub fn new(size: usize) -> Self {
        Terrain {
            grid: Grid::new(size),
            penguins: Vec::new(),
            next_id: 1,
            events: Vec::new(),
            bounces: HashSet::new(),
        }
    }

    fn allocate_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn add_penguin(&mut self, name: &str, species: Species, pos: Position) -> ObjectId {
        let id = self.allocate_id();
        self.penguins.push(Penguin::new(id, name, species));
        self.grid.place(pos, Occupant::penguin(id));
        id
    }

    pub fn add_hazard(&mut self, hazard: Hazard, pos: Position) -> ObjectId {
        let id = self.allocate_id();
        self.grid.place(pos, Occupant::hazard(id, hazard));
        id
    }

    pub fn add_food(&mut self, food: Food, pos: Position) -> ObjectId {
        let id = self.allocate_id();
        self.grid.place(pos, Occupant::food(id, food));
        id
    }

    pub fn penguin(&self, id: ObjectId) -> Option<&Penguin> {
        self.penguins.iter().find(|p| p.id == id)
    }

    pub fn penguin_mut(&mut self, id: ObjectId) -> Option<&mut Penguin> {
        self.penguins.iter_mut().find(|p| p.id == id)
    }

    pub fn is_penguin(&self, id: ObjectId) -> bool {
        self.penguin(id).is_some()
    }

    /// Display symbol of an occupant: penguin name, hazard or food code
    pub fn symbol_of(&self, occupant: &Occupant) -> String {
        match occupant.kind {
            OccupantKind::Penguin => self
                .penguin(occupant.id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "??".to_string()),
            OccupantKind::Food(food) => food.kind.symbol().to_string(),
            OccupantKind::Hazard(hazard) => hazard.symbol().to_string(),
        }
    }

    /// What the renderer shows in a cell, if anything
    pub fn symbol_at(&self, pos: Position) -> Option<String> {
        self.grid
            .occupant_at(pos)
            .or_else(|| self.grid.floor_at(pos))
            .map(|o| self.symbol_of(o))
    }

    pub(crate) fn label_of(&self, occupant: &Occupant) -> Label {
        Label::new(occupant.id, self.symbol_of(occupant))
    }

    /// Label for an object that is on the grid or in the roster
    pub fn label(&self, id: ObjectId) -> Label {
        if let Some(p) = self.penguin(id) {
            return Label::new(id, p.name.clone());
        }
        match self.grid.position_of(id).and_then(|pos| self.grid.occupant_at(pos)) {
            Some(occupant) => self.label_of(occupant),
            None => Label::new(id, "??"),
        }
    }

    pub(crate) fn record(&mut self, event: Event) {
        debug!("{}", event);
        self.events.push(event);
    }

    /// Drains the events raised since the last call
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Remembers a penguin bouncing off a sea lion from `from`.
    /// Returns false if that exact bounce already happened during this action.
    pub(crate) fn first_bounce(
        &mut self,
        penguin: ObjectId,
        sea_lion: ObjectId,
        direction: Direction,
        from: Position,
    ) -> bool {
        self.bounces.insert((penguin, sea_lion, direction, from))
    }

    pub(crate) fn forget_bounces(&mut self) {
        self.bounces.clear();
    }

    pub(crate) fn eliminate(&mut self, id: ObjectId) {
        if let Some(p) = self.penguin_mut(id) {
            p.eliminate();
            let label = Label::new(id, p.name.clone());
            self.record(Event::Eliminated(label));
        }
    }

    pub(crate) fn feed(&mut self, id: ObjectId, food: Food) {
        if let Some(p) = self.penguin_mut(id) {
            p.eat(food);
            let label = Label::new(id, p.name.clone());
            self.record(Event::FoodEaten {
                penguin: label,
                food,
            });
        }
    }

    pub fn active_penguins(&self) -> impl Iterator<Item = &Penguin> {
        self.penguins.iter().filter(|p| p.is_active())
    }
}
