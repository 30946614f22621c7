use super::greedy::Plan;
use super::greedy::Search;
use super::snapshot::Snapshot;
use crate::MAX_TRIPLET;
use crate::MIN_GROUP;
use crate::N_RANKS;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Rank;
use crate::cards::Suit;
use crate::groups::classifier;
use itertools::Itertools;

/// Backtracking search over ways to split the hand into new groups.
///
/// Every hand card, lowest first, is either left alone or made part of one
/// of the groups it could anchor. At most `depth` groups are stacked, and the
/// split placing the most cards wins, the first one found on ties. The winning
/// groups are laid through a [`Search`], which then appends whatever else
/// fits onto the board.
///
/// Cards are never borrowed from the board here.
#[derive(Debug, Clone, Copy)]
pub struct Exhaustive {
    depth: usize,
}

impl Exhaustive {
    pub fn new(depth: usize) -> Self {
        Self { depth }
    }

    pub fn plan(&self, snapshot: &Snapshot) -> Plan {
        let pool = snapshot.hand.iter().copied().collect::<Hand>();
        let ref mut best = Vec::new();
        self.explore(pool, &mut Vec::new(), best);
        log::debug!(
            "exhaustive split lays {} cards in {} groups",
            placed(best),
            best.len()
        );
        let mut search = Search::from(snapshot);
        for group in best.drain(..) {
            search.form(group, vec![]);
        }
        search.extend();
        search.finish()
    }

    fn explore(&self, pool: Hand, chosen: &mut Vec<Vec<Card>>, best: &mut Vec<Vec<Card>>) {
        if placed(chosen) > placed(best) {
            *best = chosen.clone();
        }
        if chosen.len() >= self.depth {
            return;
        }
        if placed(chosen) + pool.size() <= placed(best) {
            return;
        }
        let Some(pivot) = pool.into_iter().next() else {
            return;
        };
        let mut rest = pool;
        rest.remove(pivot);
        for group in candidates(pivot, rest) {
            let mut left = rest;
            group
                .iter()
                .filter(|c| **c != pivot)
                .for_each(|c| left.remove(*c));
            chosen.push(group);
            self.explore(left, chosen, best);
            chosen.pop();
        }
        self.explore(rest, chosen, best);
    }
}

fn placed(groups: &[Vec<Card>]) -> usize {
    groups.iter().map(Vec::len).sum()
}

/// Lowest copy of (rank, suit) still in the pool.
fn lowest(pool: Hand, rank: Rank, suit: Suit) -> Option<Card> {
    (0..2)
        .map(|copy| Card::from((rank, suit, copy)))
        .find(|card| pool.has_card(card))
}

/// Every legal group containing `pivot` whose other cards come from `pool`.
///
/// Triplets come first, smallest first. Then runs of the pivot's suit by
/// length, each length sliding from the run that starts at the pivot to the
/// run that ends at it. Each rank is filled with its lowest copy.
pub fn candidates(pivot: Card, pool: Hand) -> Vec<Vec<Card>> {
    let mut groups = Vec::new();
    let others = Suit::all()
        .into_iter()
        .filter(|&suit| suit != pivot.suit())
        .filter_map(|suit| lowest(pool, pivot.rank(), suit))
        .collect::<Vec<_>>();
    for size in MIN_GROUP..=MAX_TRIPLET {
        for partners in others.iter().copied().combinations(size - 1) {
            groups.push(std::iter::once(pivot).chain(partners).collect());
        }
    }
    let anchor = u8::from(pivot.rank()) as usize;
    for length in MIN_GROUP..=N_RANKS {
        let shifts = if length == N_RANKS { 1 } else { length };
        for shift in 0..shifts {
            let run = (0..length)
                .map(|i| Rank::from(((anchor + N_RANKS - shift + i) % N_RANKS) as u8))
                .map(|rank| match rank == pivot.rank() {
                    true => Some(pivot),
                    false => lowest(pool, rank, pivot.suit()),
                })
                .collect::<Option<Vec<Card>>>();
            if let Some(run) = run {
                groups.push(run);
            }
        }
    }
    debug_assert!(groups.iter().all(|g| classifier::is_valid(g)));
    groups
}
