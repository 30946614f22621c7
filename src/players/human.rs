use super::player::Player;
use crate::cards::Card;
use crate::gameplay::Game;
use colored::*;
use dialoguer::Select;
use std::fmt::{Debug, Formatter};

const LIFT_HAND: &str = "Lift a card from hand";
const LIFT_GROUP: &str = "Lift a card from the board";
const PLACE: &str = "Place the lifted card";
const RETURN: &str = "Return the lifted card to hand";
const HINT: &str = "Suggest moves";
const END: &str = "End turn";

/// Takes turns through terminal prompts, one pickup action at a time.
pub struct Human {
    name: String,
}

impl Human {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn choices(&self, game: &Game) -> Vec<&'static str> {
        let mut choices = Vec::new();
        match game.pickup() {
            None => {
                if !game.hand().is_empty() {
                    choices.push(LIFT_HAND);
                }
                if game.board().size() > 0 {
                    choices.push(LIFT_GROUP);
                }
            }
            Some(_) => {
                choices.push(PLACE);
                choices.push(RETURN);
            }
        }
        choices.push(HINT);
        choices.push(END);
        choices
    }

    fn card(&self, prompt: &str, cards: Vec<Card>) -> anyhow::Result<Card> {
        let items = cards.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        let selection = Select::new()
            .with_prompt(prompt)
            .report(false)
            .items(&items)
            .default(0)
            .interact()?;
        Ok(cards[selection])
    }

    /// Occupied groups, plus the vacancy when `vacant` is set.
    fn group(&self, prompt: &str, game: &Game, vacant: bool) -> anyhow::Result<usize> {
        let mut indices = game
            .board()
            .groups()
            .iter()
            .enumerate()
            .filter(|(_, g)| !g.is_empty())
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        let mut items = indices
            .iter()
            .map(|&i| format!("#{:<3}{}", i, game.board().group(i)))
            .collect::<Vec<_>>();
        if vacant {
            indices.push(game.board().vacancy());
            items.push("new group".to_string());
        }
        let selection = Select::new()
            .with_prompt(prompt)
            .report(false)
            .items(&items)
            .default(0)
            .interact()?;
        Ok(indices[selection])
    }

    fn hint(&self, game: &Game) {
        for mv in game.strategy().plan(&game.snapshot()).moves {
            println!("{}", mv);
        }
        match game.draw_needed() {
            true => println!("{}", "DRAW ".white()),
            false => println!("{}", "END  ".magenta()),
        }
    }
}

impl Player for Human {
    fn name(&self) -> &str {
        &self.name
    }
    fn play(&self, game: &mut Game) -> anyhow::Result<()> {
        loop {
            println!("\n{}", game);
            let choices = self.choices(game);
            let selection = Select::new()
                .with_prompt(format!("{} to act", self.name))
                .report(false)
                .items(&choices)
                .default(0)
                .interact()?;
            let result = match choices[selection] {
                LIFT_HAND => {
                    let card = self.card("Lift", game.hand().cards())?;
                    game.try_lift_from_hand(card)
                }
                LIFT_GROUP => {
                    let index = self.group("From", game, false)?;
                    let card = self.card("Lift", game.board().group(index).cards())?;
                    game.try_lift_from_group(index, card)
                }
                PLACE => {
                    let index = self.group("Onto", game, true)?;
                    game.try_place(index)
                }
                RETURN => game.try_return_to_hand(),
                HINT => {
                    self.hint(game);
                    Ok(())
                }
                END => match game.try_end_turn() {
                    Ok(()) => return Ok(()),
                    Err(refusal) => Err(refusal),
                },
                _ => unreachable!(),
            };
            if let Err(refusal) = result {
                println!("{}", refusal.to_string().red());
            }
        }
    }
}

impl Debug for Human {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Human({})", self.name)
    }
}
