use crate::config;
use crate::types::ObjectId;
use std::fmt;

// Kinds of food that can lie on the ice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodType {
    Krill,
    Crustacean,
    Anchovy,
    Squid,
    Mackerel,
}

impl FoodType {
    pub const ALL: [FoodType; 5] = [
        FoodType::Krill,
        FoodType::Crustacean,
        FoodType::Anchovy,
        FoodType::Squid,
        FoodType::Mackerel,
    ];

    /// Two-character grid symbol
    pub fn symbol(self) -> &'static str {
        match self {
            FoodType::Krill => "Kr",
            FoodType::Crustacean => "Cr",
            FoodType::Anchovy => "An",
            FoodType::Squid => "Sq",
            FoodType::Mackerel => "Ma",
        }
    }
}

impl fmt::Display for FoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FoodType::Krill => "KRILL",
            FoodType::Crustacean => "CRUSTACEAN",
            FoodType::Anchovy => "ANCHOVY",
            FoodType::Squid => "SQUID",
            FoodType::Mackerel => "MACKEREL",
        };
        f.write_str(name)
    }
}

/// A collectible food item. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub kind: FoodType,
    pub weight: u32,
}

impl Food {
    pub fn new(kind: FoodType, weight: u32) -> Self {
        Food {
            kind,
            weight: weight.clamp(config::MIN_FOOD_WEIGHT, config::MAX_FOOD_WEIGHT),
        }
    }
}

// The four hazard kinds. Only holes carry state of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hazard {
    LightBlock,
    HeavyBlock,
    SeaLion,
    Hole { plugged: bool },
}

impl Hazard {
    pub const fn hole() -> Self {
        Hazard::Hole { plugged: false }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Hazard::LightBlock => "LB",
            Hazard::HeavyBlock => "HB",
            Hazard::SeaLion => "SL",
            Hazard::Hole { plugged: false } => "HI",
            Hazard::Hole { plugged: true } => "PH",
        }
    }

    /// Light blocks and sea lions slide when struck; the others never move
    pub fn is_movable(self) -> bool {
        matches!(self, Hazard::LightBlock | Hazard::SeaLion)
    }
}

/// Special move policy attached to a penguin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ability {
    StopAfter(u32), // Slide, but stop voluntarily after this many cells
    SafeStep,       // Take one careful step, then slide on
    HazardJump,     // Hop over the first hazard in the path
}

// Penguin species; each one selects an ability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    King,
    Emperor,
    Royal,
    Rockhopper,
}

impl Species {
    pub const ALL: [Species; 4] = [
        Species::King,
        Species::Emperor,
        Species::Royal,
        Species::Rockhopper,
    ];

    pub fn ability(self) -> Ability {
        match self {
            Species::King => Ability::StopAfter(config::KING_STOP_AFTER),
            Species::Emperor => Ability::StopAfter(config::EMPEROR_STOP_AFTER),
            Species::Royal => Ability::SafeStep,
            Species::Rockhopper => Ability::HazardJump,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Species::King => "King Penguin",
            Species::Emperor => "Emperor Penguin",
            Species::Royal => "Royal Penguin",
            Species::Rockhopper => "Rockhopper Penguin",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenguinStatus {
    Active,
    Stunned, // Skips its next turn
    Eliminated,
}

// A penguin in the roster. Its position is owned by the grid.
#[derive(Debug, Clone)]
pub struct Penguin {
    pub id: ObjectId,
    pub name: String,
    pub species: Species,
    pub inventory: Vec<Food>, // In pickup order
    pub status: PenguinStatus,
    pub ability_used: bool,
}

impl Penguin {
    pub fn new(id: ObjectId, name: impl Into<String>, species: Species) -> Self {
        Penguin {
            id,
            name: name.into(),
            species,
            inventory: Vec::new(),
            status: PenguinStatus::Active,
            ability_used: false,
        }
    }

    pub fn ability(&self) -> Ability {
        self.species.ability()
    }

    pub fn is_active(&self) -> bool {
        self.status != PenguinStatus::Eliminated
    }

    pub fn is_stunned(&self) -> bool {
        self.status == PenguinStatus::Stunned
    }

    pub fn eat(&mut self, food: Food) {
        self.inventory.push(food);
    }

    pub fn total_weight(&self) -> u32 {
        self.inventory.iter().map(|f| f.weight).sum()
    }

    /// Removes the lightest item; the earliest one wins a tie
    pub fn remove_lightest_food(&mut self) -> Option<Food> {
        let mut lightest: Option<(usize, u32)> = None;
        for (i, food) in self.inventory.iter().enumerate() {
            if lightest.is_none_or(|(_, w)| food.weight < w) {
                lightest = Some((i, food.weight));
            }
        }
        lightest.map(|(i, _)| self.inventory.remove(i))
    }

    pub fn stun(&mut self) {
        if self.status == PenguinStatus::Active {
            self.status = PenguinStatus::Stunned;
        }
    }

    pub fn clear_stun(&mut self) {
        if self.status == PenguinStatus::Stunned {
            self.status = PenguinStatus::Active;
        }
    }

    /// Collected food still counts after elimination
    pub fn eliminate(&mut self) {
        self.status = PenguinStatus::Eliminated;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupantKind {
    Penguin, // State lives in the terrain's roster under the same id
    Food(Food),
    Hazard(Hazard),
}

/// Anything that can sit in one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupant {
    pub id: ObjectId,
    pub kind: OccupantKind,
}

impl Occupant {
    pub fn penguin(id: ObjectId) -> Self {
        Occupant {
            id,
            kind: OccupantKind::Penguin,
        }
    }

    pub fn food(id: ObjectId, food: Food) -> Self {
        Occupant {
            id,
            kind: OccupantKind::Food(food),
        }
    }

    pub fn hazard(id: ObjectId, hazard: Hazard) -> Self {
        Occupant {
            id,
            kind: OccupantKind::Hazard(hazard),
        }
    }

    pub fn is_penguin(&self) -> bool {
        matches!(self.kind, OccupantKind::Penguin)
    }

    pub fn as_food(&self) -> Option<Food> {
        match self.kind {
            OccupantKind::Food(food) => Some(food),
            _ => None,
        }
    }

    pub fn as_hazard(&self) -> Option<Hazard> {
        match self.kind {
            OccupantKind::Hazard(hazard) => Some(hazard),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn penguin_with(weights: &[u32]) -> Penguin {
        let mut p = Penguin::new(ObjectId(1), "P1", Species::King);
        for (i, &w) in weights.iter().enumerate() {
            p.eat(Food::new(FoodType::ALL[i % FoodType::ALL.len()], w));
        }
        p
    }

    #[test]
    fn test_food_symbols_and_weight_bounds() {
        assert_eq!(FoodType::Krill.symbol(), "Kr");
        assert_eq!(FoodType::Mackerel.symbol(), "Ma");
        assert_eq!(Food::new(FoodType::Squid, 0).weight, 1);
        assert_eq!(Food::new(FoodType::Squid, 9).weight, 5);
        assert_eq!(Food::new(FoodType::Squid, 3).weight, 3);
    }

    #[test]
    fn test_hazard_symbols_and_movability() {
        assert_eq!(Hazard::hole().symbol(), "HI");
        assert_eq!(Hazard::Hole { plugged: true }.symbol(), "PH");
        assert!(Hazard::LightBlock.is_movable());
        assert!(Hazard::SeaLion.is_movable());
        assert!(!Hazard::HeavyBlock.is_movable());
        assert!(!Hazard::hole().is_movable());
    }

    #[test]
    fn test_species_abilities() {
        assert_eq!(Species::King.ability(), Ability::StopAfter(5));
        assert_eq!(Species::Emperor.ability(), Ability::StopAfter(3));
        assert_eq!(Species::Royal.ability(), Ability::SafeStep);
        assert_eq!(Species::Rockhopper.ability(), Ability::HazardJump);
        assert_eq!(Species::Rockhopper.to_string(), "Rockhopper Penguin");
    }

    #[test]
    fn test_remove_lightest_food() {
        let mut p = penguin_with(&[1, 3, 5]);
        let lost = p.remove_lightest_food().unwrap();
        assert_eq!(lost.weight, 1);
        let left: Vec<u32> = p.inventory.iter().map(|f| f.weight).collect();
        assert_eq!(left, vec![3, 5]);

        let mut empty = penguin_with(&[]);
        assert!(empty.remove_lightest_food().is_none());
    }

    #[test]
    fn test_remove_lightest_food_tie_takes_first() {
        let mut p = penguin_with(&[4, 2, 2]);
        let lost = p.remove_lightest_food().unwrap();
        assert_eq!(lost.kind, FoodType::Crustacean);
        assert_eq!(p.inventory[1].kind, FoodType::Anchovy);
        assert_eq!(p.total_weight(), 6);
    }

    #[test]
    fn test_penguin_status_transitions() {
        let mut p = penguin_with(&[2]);
        p.stun();
        assert!(p.is_stunned());
        p.clear_stun();
        assert_eq!(p.status, PenguinStatus::Active);
        p.eliminate();
        p.stun();
        assert!(!p.is_active());
        assert!(!p.is_stunned());
        assert_eq!(p.total_weight(), 2);
    }
}
