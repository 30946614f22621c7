use super::player::Player;
use crate::Position;
use crate::ROBOT_NAMES;
use crate::gameplay::Game;
use colored::*;

/// Plays whatever the game's configured search suggests, then ends the turn.
pub struct Robot {
    name: &'static str,
}

impl Robot {
    pub fn new(position: Position) -> Self {
        Self {
            name: ROBOT_NAMES[position % ROBOT_NAMES.len()],
        }
    }
}

impl Player for Robot {
    fn name(&self) -> &str {
        self.name
    }
    fn play(&self, game: &mut Game) -> anyhow::Result<()> {
        let plan = game.strategy().plan(&game.snapshot());
        for mv in plan.moves.iter() {
            log::info!("{} {}", self.name, mv);
            game.apply(mv);
        }
        let draw = game.draw_needed();
        game.try_end_turn()?;
        match draw {
            true => log::info!("{} {}", self.name, "DRAW ".white()),
            false => log::info!("{} {}", self.name, "END  ".magenta()),
        }
        Ok(())
    }
}

impl std::fmt::Debug for Robot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Robot({})", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::Config;
    use crate::search::Strategy;

    #[test]
    fn robot_turn_hands_over() {
        let mut game = Game::new(&Config {
            seed: Some(5),
            ..Config::default()
        });
        let robot = Robot::new(game.actor());
        assert_eq!(robot.name(), "Albert BOT");
        robot.play(&mut game).unwrap();
        assert_eq!(game.actor(), 1);
        assert!(game.board().is_valid());
        assert!(game.board().is_frozen());
    }

    #[test]
    fn exhaustive_robot_turn() {
        let mut game = Game::new(&Config {
            seed: Some(9),
            strategy: Strategy::Exhaustive { depth: 2 },
            ..Config::default()
        });
        let before = game.hand().size() + game.deck().len();
        Robot::new(0).play(&mut game).unwrap();
        let after = game.hand_of(0).size() + game.deck().len() + game.board().size();
        assert_eq!(before, after);
    }
}
