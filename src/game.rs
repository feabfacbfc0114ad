use crate::ai::{self, Decision};
use crate::error::GameError;
use crate::input::{self, TokenReader};
use crate::render::{self, ScoreEntry};
use crate::terrain::Terrain;
use crate::types::ObjectId;
use log::{debug, info};
use rand::Rng;
use std::io::{BufRead, Write};

/// The Game struct runs the turn loop over a terrain
pub struct Game<R: Rng> {
    pub terrain: Terrain,
    pub player: Option<ObjectId>, // None when every penguin is computer-driven
    pub current_turn: u32,
    pub max_turns: u32,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(terrain: Terrain, player: Option<ObjectId>, max_turns: u32, rng: R) -> Self {
        Game {
            terrain,
            player,
            current_turn: 0,
            max_turns,
            rng,
        }
    }

    /// Plays every turn, reading the player's answers from `input`.
    /// Returns the final ranking.
    pub fn run<I: BufRead, W: Write>(&mut self, input: &mut I, out: &mut W) -> Result<Vec<ScoreEntry>, GameError> {
        info!("Starting game for {} turns.", self.max_turns);
        writeln!(out, "The initial icy terrain grid:")?;
        write!(out, "{}", render::render_grid(&self.terrain))?;
        writeln!(out, "{}", render::render_roster(&self.terrain, self.player))?;

        let mut tokens = TokenReader::new(input);
        for turn in 1..=self.max_turns {
            self.current_turn = turn;
            self.play_turn(&mut tokens, out)?;
        }

        writeln!(out, "***** GAME OVER *****")?;
        let board = render::scoreboard(&self.terrain, self.player);
        write!(out, "{}", render::render_scoreboard(&board))?;
        info!("Game over after {} turns.", self.max_turns);
        Ok(board)
    }

    /// Gives every penguin still on the ice one action, in roster order
    pub fn play_turn<I: BufRead, W: Write>(
        &mut self,
        input: &mut TokenReader<I>,
        out: &mut W,
    ) -> Result<(), GameError> {
        let roster: Vec<ObjectId> = self.terrain.penguins.iter().map(|p| p.id).collect();
        for id in roster {
            self.take_turn(id, input, out)?;
        }
        Ok(())
    }

    fn take_turn<I: BufRead, W: Write>(
        &mut self,
        id: ObjectId,
        input: &mut TokenReader<I>,
        out: &mut W,
    ) -> Result<(), GameError> {
        let is_player = Some(id) == self.player;
        let Some(penguin) = self.terrain.penguin_mut(id) else {
            return Ok(());
        };
        if !penguin.is_active() {
            return Ok(());
        }
        let name = penguin.name.clone();
        let role = if is_player { " (Your Penguin)" } else { "" };
        info!("Turn {} - {}", self.current_turn, name);
        writeln!(out, "*** Turn {} - {}{}:", self.current_turn, name, role)?;

        if penguin.is_stunned() {
            penguin.clear_stun();
            writeln!(out, "{} is stunned and skips this turn!", name)?;
            return self.show_grid(out);
        }

        let decision = if is_player {
            self.ask_player(id, &name, input, out)?
        } else {
            match self.computer_move(id, &name, out)? {
                Some(decision) => decision,
                None => return Ok(()),
            }
        };

        debug!("{} acts: {:?}", name, decision);
        let events = self
            .terrain
            .perform_action(id, decision.direction, decision.use_ability);
        for event in &events {
            writeln!(out, "{}", event)?;
        }
        self.show_grid(out)
    }

    fn ask_player<I: BufRead, W: Write>(
        &mut self,
        id: ObjectId,
        name: &str,
        input: &mut TokenReader<I>,
        out: &mut W,
    ) -> Result<Decision, GameError> {
        let ability_left = self.terrain.penguin(id).is_some_and(|p| !p.ability_used);
        let use_ability = if ability_left {
            let question = format!("Will {} use its special action?", name);
            input::prompt_yes_no(input, out, &question)?
        } else {
            false
        };
        if ability_left && !use_ability {
            writeln!(out, "Special action won't be used this turn.")?;
        }
        let direction = input::prompt_direction(input, out, name)?;
        Ok(Decision {
            direction,
            use_ability,
            auto_jump: false,
        })
    }

    fn computer_move<W: Write>(&mut self, id: ObjectId, name: &str, out: &mut W) -> Result<Option<Decision>, GameError> {
        let Some(decision) = ai::decide(&self.terrain, id, &mut self.rng) else {
            return Ok(None);
        };
        if decision.auto_jump {
            writeln!(out, "{} will automatically USE its special action.", name)?;
        }
        if self.terrain.penguin(id).is_some_and(|p| !p.ability_used) {
            if decision.use_ability {
                writeln!(out, "{} chooses to USE its special action.", name)?;
            } else {
                writeln!(out, "{} does NOT use its special action.", name)?;
            }
        }
        writeln!(out, "{} chooses to move {}.", name, decision.direction)?;
        Ok(Some(decision))
    }

    fn show_grid<W: Write>(&self, out: &mut W) -> Result<(), GameError> {
        writeln!(out, "New state of the grid:")?;
        writeln!(out, "{}", render::render_grid(&self.terrain))?;
        Ok(())
    }
}
