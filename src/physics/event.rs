// Notices raised while resolving an action, in the order they happened

use crate::occupant::{Ability, Food};
use crate::types::{ObjectId, Position};
use std::fmt;

/// An object as it was when an event was raised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub id: ObjectId,
    pub symbol: String,
}

impl Label {
    pub fn new(id: ObjectId, symbol: impl Into<String>) -> Self {
        Label {
            id,
            symbol: symbol.into(),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    AbilityUsed { penguin: Label, ability: Ability },
    Collision { moving: Label, stationary: Label },
    FellIntoWater(Label),
    FellIntoHole(Label),
    HolePlugged { hole: Label, at: Position },
    Eliminated(Label),
    FoodEaten { penguin: Label, food: Food },
    FoodCrushed { by: Label, food: Food },
    FoodLost { penguin: Label, food: Food },
    NoFoodToLose(Label),
    Stunned(Label),
    Pushed { pusher: Label, pushed: Label },
    Bounced { penguin: Label, sea_lion: Label },
    BounceHalted { penguin: Label, sea_lion: Label },
    StoppedEarly(Label),
    SafeStepBlocked { penguin: Label, blocker: Label },
    SlidesOn(Label),
    Jumped { penguin: Label, over: Label },
    JumpLandedInWater { penguin: Label, over: Label },
    JumpFailed { penguin: Label, blocker: Label },
    NothingToJump(Label),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::AbilityUsed { penguin, ability } => {
                let what = match ability {
                    Ability::StopAfter(n) => format!("stops after {} squares", n),
                    Ability::SafeStep => "moves 1 square first".to_string(),
                    Ability::HazardJump => "prepares to jump over a hazard".to_string(),
                };
                write!(f, "{} uses its special action ({}).", penguin, what)
            }
            Event::Collision { moving, stationary } => write!(f, "{} hit {}!", moving, stationary),
            Event::FellIntoWater(x) => write!(f, "{} fell into the water!", x),
            Event::FellIntoHole(x) => write!(f, "{} fell into the hole!", x),
            Event::HolePlugged { at, .. } => write!(f, "The hole at {} is now PLUGGED.", at),
            Event::Eliminated(p) => write!(f, "{} has been removed from the game!", p),
            Event::FoodEaten { penguin, food } => write!(
                f,
                "{} takes the {} on the ground. (Weight={} units)",
                penguin, food.kind, food.weight
            ),
            Event::FoodCrushed { by, food } => write!(f, "{} crushed {}!", by, food.kind.symbol()),
            Event::FoodLost { penguin, food } => write!(
                f,
                "{} lost {} ({} units) as penalty!",
                penguin, food.kind, food.weight
            ),
            Event::NoFoodToLose(p) => write!(f, "{} has no food to lose!", p),
            Event::Stunned(p) => write!(f, "{} is stunned and will skip the next turn!", p),
            Event::Pushed { pusher, pushed } => {
                write!(f, "{} pushes {}, which starts sliding!", pusher, pushed)
            }
            Event::Bounced { penguin, sea_lion } => {
                write!(f, "BOING! {} bounces back off {}!", penguin, sea_lion)
            }
            Event::BounceHalted { penguin, sea_lion } => {
                write!(f, "{} is pinned by {} and stops bouncing.", penguin, sea_lion)
            }
            Event::StoppedEarly(x) => write!(f, "{} stopped early using special ability.", x),
            Event::SafeStepBlocked { penguin, blocker } => {
                write!(f, "{} cannot step onto {}!", penguin, blocker)
            }
            Event::SlidesOn(p) => write!(f, "{} now slides from the new position.", p),
            Event::Jumped { penguin, over } => write!(f, "{} jumps over {}!", penguin, over),
            Event::JumpLandedInWater { penguin, over } => {
                write!(f, "{} jumps over {} but lands in water!", penguin, over)
            }
            Event::JumpFailed { penguin, blocker } => write!(
                f,
                "Jump failed! Landing spot occupied by {}. {} slides normally instead.",
                blocker, penguin
            ),
            Event::NothingToJump(p) => write!(f, "No hazard to jump over. {} slides normally.", p),
        }
    }
}
