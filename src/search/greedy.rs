use super::moves::Borrow;
use super::moves::Move;
use super::snapshot::Snapshot;
use crate::FULL_GROUP;
use crate::LARGE_GROUP;
use crate::MIN_GROUP;
use crate::cards::Card;
use crate::cards::Hand;
use crate::groups::classifier;
use itertools::Itertools;

/// Outcome of a search: the moves in the order they must be applied, and
/// the working copy after all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Plan {
    pub moves: Vec<Move>,
    pub rest: Snapshot,
}

impl Plan {
    /// Cards the plan takes out of the hand.
    pub fn spent(&self) -> usize {
        self.moves.iter().map(|m| m.spent().len()).sum()
    }
}

/// Greedy fixed-point move search over a private copy of hand and board.
///
/// Four phases run in order. Each one scans its candidates in a fixed
/// enumeration order, commits the first legal candidate to the working copy,
/// and rescans from scratch until a full scan finds nothing:
///
/// 1. three hand cards forming a group
/// 2. two hand cards plus an end card of a large group
/// 3. one hand card plus end cards of two distinct large groups
/// 4. single hand cards appended to existing groups
///
/// The result depends on enumeration order. Hands iterate in ascending card
/// order and groups in board order, so the same input always yields the same
/// moves.
#[derive(Debug, Clone)]
pub struct Search {
    hand: Hand,
    groups: Vec<Vec<Card>>,
    moves: Vec<Move>,
}

impl From<&Snapshot> for Search {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            hand: snapshot.hand.iter().copied().collect(),
            groups: snapshot
                .groups
                .iter()
                .map(|g| classifier::canonical(g))
                .collect(),
            moves: Vec::new(),
        }
    }
}

impl Search {
    pub fn run(mut self) -> Plan {
        self.from_hand();
        self.borrow_one();
        self.borrow_two();
        self.extend();
        self.finish()
    }
    pub fn finish(self) -> Plan {
        let plan = Plan {
            rest: Snapshot {
                hand: self.hand.cards(),
                groups: self.groups,
            },
            moves: self.moves,
        };
        log::info!(
            "search found {} moves laying {} cards, {} left in hand",
            plan.moves.len(),
            plan.spent(),
            plan.rest.hand.len()
        );
        plan
    }
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
}

/// phases
impl Search {
    /// Phase 1: groups made entirely of hand cards.
    pub fn from_hand(&mut self) {
        while let Some(cards) = self
            .hand
            .cards()
            .into_iter()
            .combinations(MIN_GROUP)
            .find(|cards| classifier::is_valid(cards))
        {
            self.form(cards, vec![]);
        }
    }

    /// Phase 2: a pair from hand completed by one end of a large group.
    pub fn borrow_one(&mut self) {
        while let Some((pair, borrow)) = self
            .hand
            .cards()
            .into_iter()
            .combinations(2)
            .find_map(|pair| {
                self.large()
                    .into_iter()
                    .flat_map(|source| self.ends(source).map(|card| Borrow { source, card }))
                    .find(|borrow| classifier::is_valid(&[pair[0], pair[1], borrow.card]))
                    .map(|borrow| (pair, borrow))
            })
        {
            self.form(pair, vec![borrow]);
        }
    }

    /// Phase 3: one hand card completed by ends of two distinct large groups.
    pub fn borrow_two(&mut self) {
        while let Some((card, lent)) = {
            let hand = self.hand.cards();
            self.large()
                .into_iter()
                .tuple_combinations::<(_, _)>()
                .find_map(|(a, b)| {
                    hand.iter().find_map(|&card| {
                        self.ends(a)
                            .into_iter()
                            .cartesian_product(self.ends(b))
                            .find(|&(x, y)| classifier::is_valid(&[x, y, card]))
                            .map(|(x, y)| {
                                let lent = vec![
                                    Borrow { source: a, card: x },
                                    Borrow { source: b, card: y },
                                ];
                                (card, lent)
                            })
                    })
                })
        } {
            self.form(vec![card], lent);
        }
    }

    /// Phase 4: hand cards appended one at a time to existing groups.
    ///
    /// Groups wait on a stack. A group that accepts a card goes back on top,
    /// so it is offered the rest of the hand before anything else.
    pub fn extend(&mut self) {
        let mut worklist = (0..self.groups.len())
            .filter(|&i| !self.groups[i].is_empty())
            .collect::<Vec<_>>();
        while let Some(index) = worklist.pop() {
            if self.groups[index].len() >= FULL_GROUP {
                continue;
            }
            let group = &self.groups[index];
            let found = self.hand.cards().into_iter().find(|&card| {
                let mut cards = group.clone();
                cards.push(card);
                classifier::is_valid(&cards)
            });
            if let Some(card) = found {
                self.add(card, index);
                worklist.push(index);
            }
        }
    }
}

/// working copy
impl Search {
    /// Lays a new group in the first empty slot, taking the hand cards out of
    /// the hand and the borrowed cards off their groups.
    pub fn form(&mut self, hand: Vec<Card>, borrowed: Vec<Borrow>) {
        let target = self.vacancy();
        for card in hand.iter() {
            self.hand.remove(*card);
        }
        for borrow in borrowed.iter() {
            let source = &mut self.groups[borrow.source];
            debug_assert!(source.contains(&borrow.card));
            source.retain(|c| c != &borrow.card);
            *source = classifier::canonical(source);
        }
        let mv = Move::FormGroup {
            target,
            hand,
            borrowed,
        };
        let group = classifier::canonical(&mv.cards());
        debug_assert!(classifier::is_valid(&group));
        match target == self.groups.len() {
            true => self.groups.push(group),
            false => self.groups[target] = group,
        }
        log::debug!("{}", mv);
        self.moves.push(mv);
    }
    fn add(&mut self, card: Card, target: usize) {
        self.hand.remove(card);
        let group = &mut self.groups[target];
        group.push(card);
        *group = classifier::canonical(group);
        let mv = Move::AddToGroup { card, target };
        log::debug!("{}", mv);
        self.moves.push(mv);
    }
    fn vacancy(&self) -> usize {
        self.groups
            .iter()
            .position(Vec::is_empty)
            .unwrap_or(self.groups.len())
    }
    /// Groups that can lend an end card and still hold three.
    fn large(&self) -> Vec<usize> {
        (0..self.groups.len())
            .filter(|&i| self.groups[i].len() >= LARGE_GROUP)
            .collect()
    }
    /// Low end then high end in canonical order.
    fn ends(&self, index: usize) -> [Card; 2] {
        let group = &self.groups[index];
        [group[0], group[group.len() - 1]]
    }
}
