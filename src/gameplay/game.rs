use super::board::Board;
use super::config::Config;
use super::refusal::Refusal;
use crate::N;
use crate::Position;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::groups::Piece;
use crate::search::Move;
use crate::search::Snapshot;
use crate::search::Strategy;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Live state of a two player game between discrete player actions.
///
/// Game owns the deck, both hands, the board and the pickup slot, and
/// enforces the turn rules:
/// - a lifted card blocks further lifts until it is placed or returned
/// - frozen cards never re-enter a hand
/// - a turn only ends on a fully valid board
/// - a turn that laid nothing down draws a card, if any are left
///
/// Every mutation runs to completion before the next action is accepted.
#[derive(Debug, Clone)]
pub struct Game {
    deck: Deck,
    hands: [Hand; N],
    board: Board,
    pickup: Option<Piece>,
    actor: Position,
    winner: Option<Position>,
    passes: usize,
    strategy: Strategy,
}

impl Game {
    /// Shuffles a fresh deck and deals both hands, alternating seats.
    pub fn new(config: &Config) -> Self {
        let ref mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let mut deck = Deck::shuffled(rng);
        let mut hands = [Hand::empty(); N];
        for _ in 0..config.hand_size {
            for hand in hands.iter_mut() {
                if let Some(card) = deck.draw() {
                    hand.add(card);
                }
            }
        }
        log::debug!("dealt {} cards each, {} left", config.hand_size, deck.len());
        Self {
            deck,
            hands,
            board: Board::new(config.board_groups),
            pickup: None,
            actor: 0,
            winner: None,
            passes: 0,
            strategy: config.strategy,
        }
    }
    /// A game already in progress, first seat to act.
    pub fn from_parts(deck: Deck, hands: [Hand; N], board: Board) -> Self {
        Self {
            deck,
            hands,
            board,
            pickup: None,
            actor: 0,
            winner: None,
            passes: 0,
            strategy: Strategy::default(),
        }
    }

    pub fn actor(&self) -> Position {
        self.actor
    }
    pub fn hand(&self) -> &Hand {
        &self.hands[self.actor]
    }
    pub fn hand_of(&self, position: Position) -> &Hand {
        &self.hands[position]
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn pickup(&self) -> Option<Piece> {
        self.pickup
    }
    pub fn winner(&self) -> Option<Position> {
        self.winner
    }
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
    /// Detached copy of what the acting player may plan with.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }
    /// Ending the turn now would draw a card.
    pub fn draw_needed(&self) -> bool {
        self.board.is_frozen() && !self.deck.is_empty()
    }
    pub fn can_end_turn(&self) -> bool {
        self.pickup.is_none_or(|p| !p.is_frozen()) && self.board.is_valid()
    }
    /// Every seat in a row ended its turn without laying a card, and there
    /// is nothing left to draw.
    pub fn is_stalled(&self) -> bool {
        self.deck.is_empty() && self.passes >= N
    }
}

/// player actions
impl Game {
    /// Lifts a card out of the acting hand. Panics if the card is not there.
    pub fn try_lift_from_hand(&mut self, card: Card) -> Result<(), Refusal> {
        if self.pickup.is_some() {
            return Err(Refusal::PickupOccupied);
        }
        self.hands[self.actor].remove(card);
        self.pickup = Some(Piece::fresh(card));
        Ok(())
    }
    /// Lifts a card off a group. Panics if the card is not a member.
    pub fn try_lift_from_group(&mut self, index: usize, card: Card) -> Result<(), Refusal> {
        if self.pickup.is_some() {
            return Err(Refusal::PickupOccupied);
        }
        self.pickup = Some(self.board.group_mut(index).remove(card));
        Ok(())
    }
    /// Puts the lifted card onto a group, or onto a fresh group right past
    /// the end of the board. Panics on any index further out.
    pub fn try_place(&mut self, index: usize) -> Result<(), Refusal> {
        assert!(index <= self.board.len(), "group #{} is off the board", index);
        let piece = self.pickup.take().ok_or(Refusal::PickupEmpty)?;
        self.board.reserve(index);
        self.board.group_mut(index).put(piece);
        Ok(())
    }
    /// Puts the lifted card back into the acting hand, unless it is frozen.
    pub fn try_return_to_hand(&mut self) -> Result<(), Refusal> {
        let piece = self.pickup.ok_or(Refusal::PickupEmpty)?;
        if piece.is_frozen() {
            return Err(Refusal::FrozenCard(piece.card()));
        }
        self.pickup = None;
        self.hands[self.actor].add(piece.card());
        Ok(())
    }
    /// Hands the turn to the other seat.
    ///
    /// Refused when the lifted card is frozen or the board is invalid, in
    /// which case nothing changes. Otherwise the lifted card goes home, a
    /// card is drawn if nothing was laid down, the board freezes, and an
    /// empty hand wins (once).
    pub fn try_end_turn(&mut self) -> Result<(), Refusal> {
        if let Some(piece) = self.pickup.filter(Piece::is_frozen) {
            return Err(Refusal::FrozenCard(piece.card()));
        }
        if !self.board.is_valid() {
            return Err(Refusal::InvalidBoard);
        }
        if let Some(piece) = self.pickup.take() {
            self.hands[self.actor].add(piece.card());
        }
        match self.board.is_frozen() {
            false => self.passes = 0,
            true => match self.deck.draw() {
                Some(card) => {
                    log::debug!("P{} draws {}, {} left", self.actor, card, self.deck.len());
                    self.hands[self.actor].add(card);
                    self.passes = 0;
                }
                None => {
                    log::debug!("P{} passes, the deck is empty", self.actor);
                    self.passes += 1;
                }
            },
        }
        if self.winner.is_none() && self.hands[self.actor].is_empty() {
            log::info!("P{} has emptied their hand and wins", self.actor);
            self.winner = Some(self.actor);
        }
        self.board.freeze();
        self.actor = (self.actor + 1) % N;
        log::debug!("P{} to act", self.actor);
        Ok(())
    }
    /// Boolean face of [`Game::try_end_turn`].
    pub fn end_turn(&mut self) -> bool {
        self.try_end_turn()
            .inspect_err(|refusal| log::debug!("end turn refused: {}", refusal))
            .is_ok()
    }

    /// Replays one searched move against the live state, on behalf of the
    /// acting player. Panics if the move does not fit the state, which only
    /// happens when it was planned against some other state.
    pub fn apply(&mut self, mv: &Move) {
        match mv {
            Move::FormGroup {
                target,
                hand,
                borrowed,
            } => {
                assert!(*target <= self.board.len(), "group #{} is off the board", target);
                debug_assert!(self.board.groups().get(*target).is_none_or(|g| g.is_empty()));
                self.board.reserve(*target);
                let mut pieces = Vec::with_capacity(hand.len() + borrowed.len());
                for card in hand {
                    self.hands[self.actor].remove(*card);
                    pieces.push(Piece::fresh(*card));
                }
                for borrow in borrowed {
                    pieces.push(self.board.group_mut(borrow.source).remove(borrow.card));
                }
                for piece in pieces {
                    self.board.group_mut(*target).put(piece);
                }
            }
            Move::AddToGroup { card, target } => {
                self.hands[self.actor].remove(*card);
                self.board.group_mut(*target).add(*card);
            }
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "deck  {}", self.deck.len())?;
        for (i, hand) in self.hands.iter().enumerate() {
            let marker = if i == self.actor { ">" } else { " " };
            writeln!(f, "{}P{}   {}", marker, i, hand)?;
        }
        if let Some(piece) = self.pickup {
            writeln!(f, "held  {}", piece)?;
        }
        write!(f, "{}", self.board)
    }
}
