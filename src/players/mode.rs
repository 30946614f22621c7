use super::human::Human;
use super::player::Player;
use super::robot::Robot;
use crate::N;

/// Who sits in each seat.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    HumanVsHuman,
    #[default]
    HumanVsRobot,
    RobotVsRobot,
}

impl Mode {
    pub fn seats(&self) -> [Box<dyn Player>; N] {
        match self {
            Mode::HumanVsHuman => [human("Player 1"), human("Player 2")],
            Mode::HumanVsRobot => [human("Player 1"), robot(1)],
            Mode::RobotVsRobot => [robot(0), robot(1)],
        }
    }
    /// Nobody is waiting on a prompt, so turns are paced instead.
    pub fn is_unattended(&self) -> bool {
        matches!(self, Mode::RobotVsRobot)
    }
}

fn human(name: &str) -> Box<dyn Player> {
    Box::new(Human::new(name))
}
fn robot(position: usize) -> Box<dyn Player> {
    Box::new(Robot::new(position))
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Mode::HumanVsHuman => write!(f, "human vs human"),
            Mode::HumanVsRobot => write!(f, "human vs robot"),
            Mode::RobotVsRobot => write!(f, "robot vs robot"),
        }
    }
}
