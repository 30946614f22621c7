//! Pure functions deciding what an arbitrary set of cards amounts to.
//!
//! Everything here is deterministic and side-effect free. The board groups
//! call it on every mutation and the move search uses it as its only oracle
//! of legality.
use super::shape::Shape;
use super::slot::PLACEHOLDER;
use super::slot::Slot;
use crate::MAX_TRIPLET;
use crate::MIN_GROUP;
use crate::cards::Card;

/// 3 or 4 cards of one rank with pairwise-distinct suits.
pub fn is_triplet(cards: &[Card]) -> bool {
    if cards.len() < MIN_GROUP || cards.len() > MAX_TRIPLET {
        return false;
    }
    let rank = cards[0].rank();
    let suits = cards
        .iter()
        .map(|c| u8::from(c.suit()))
        .fold(0u8, |mask, s| mask | 1 << s);
    cards.iter().all(|c| c.rank() == rank) && suits.count_ones() as usize == cards.len()
}

/// Index `i` of the widest cyclic step from `sorted[i]` to `sorted[i + 1]`,
/// wrapping from the last card back to the first. Expects cards sorted by
/// rank. The first widest step wins ties.
pub fn biggest_gap(sorted: &[Card]) -> usize {
    let n = sorted.len();
    let mut widest = 0;
    let mut index = 0;
    for i in 0..n {
        let gap = sorted[i].rank().gap(&sorted[(i + 1) % n].rank());
        if gap > widest {
            widest = gap;
            index = i;
        }
    }
    index
}

/// Arranges one suit of distinct ranks into a cyclic run, filling every
/// missing rank with a placeholder.
///
/// Returns `None` for fewer than 3 cards, mixed suits or a repeated rank.
/// The widest gap is cut open so the run reads left to right: `K 2 A 4 3`
/// comes out as `K A 2 3 4`, and `2 3 5` as `2 3 __ 5`.
pub fn attempt_flush(cards: &[Card]) -> Option<Vec<Slot>> {
    if cards.len() < MIN_GROUP {
        return None;
    }
    let suit = cards[0].suit();
    if cards.iter().any(|c| c.suit() != suit) {
        return None;
    }
    let ranks = cards
        .iter()
        .map(|c| u16::from(c.rank()))
        .fold(0u16, |mask, r| mask | r);
    if ranks.count_ones() as usize != cards.len() {
        return None;
    }
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|c| c.rank());
    let cut = (biggest_gap(&sorted) + 1) % sorted.len();
    sorted.rotate_left(cut);
    let mut run = Vec::with_capacity(crate::N_RANKS);
    run.push(Slot::from(sorted[0]));
    for pair in sorted.windows(2) {
        let gap = pair[0].rank().gap(&pair[1].rank());
        run.extend(std::iter::repeat_n(PLACEHOLDER, gap.saturating_sub(1)));
        run.push(Slot::from(pair[1]));
    }
    Some(run)
}

/// Triplet first, flush second, anything else is scrap.
pub fn classify(cards: &[Card]) -> Shape {
    if cards.is_empty() {
        Shape::Empty
    } else if is_triplet(cards) {
        Shape::Triplet
    } else if let Some(run) = attempt_flush(cards) {
        match run.iter().filter(|s| s.is_placeholder()).count() {
            0 => Shape::Flush,
            n => Shape::Gapped(n),
        }
    } else {
        Shape::Scrap
    }
}

/// Empty, a triplet, or a flush without gaps.
pub fn is_valid(cards: &[Card]) -> bool {
    classify(cards).is_valid()
}

/// Comparable ordering of a group's cards.
///
/// Flush candidates come out in run order with the placeholders stripped,
/// so the first and last cards are the two ends of the run. Everything else,
/// triplets included, comes out in ascending card order.
pub fn canonical(cards: &[Card]) -> Vec<Card> {
    if is_triplet(cards) {
        let mut cards = cards.to_vec();
        cards.sort();
        cards
    } else if let Some(run) = attempt_flush(cards) {
        run.iter().filter_map(Slot::card).collect()
    } else {
        let mut cards = cards.to_vec();
        cards.sort();
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::N_RANKS;
    use crate::cards::Rank;
    use crate::cards::Suit;
    use itertools::Itertools;

    fn cards(s: &str) -> Vec<Card> {
        Card::parse(s).unwrap()
    }

    #[test]
    fn triplet_needs_three_or_four() {
        assert!(is_triplet(&cards("Kh Ks Kd")));
        assert!(is_triplet(&cards("Kh Ks Kd Kc")));
        assert!(!is_triplet(&cards("Kh Ks")));
        assert!(!is_triplet(&cards("Kh")));
        assert!(!is_triplet(&cards("Kh Ks Kd Kc Kh'")));
    }

    #[test]
    fn triplet_needs_one_rank_and_distinct_suits() {
        assert!(!is_triplet(&cards("Kh Ks Qd")));
        assert!(!is_triplet(&cards("Ah As Ah'")));
        assert!(!is_triplet(&cards("Ah As Ad Ah'")));
    }

    #[test]
    fn triplet_over_every_subset_of_one_rank() {
        for rank in Rank::all() {
            let pool = Suit::all()
                .into_iter()
                .flat_map(|suit| (0..2).map(move |copy| Card::from((rank, suit, copy))))
                .collect::<Vec<_>>();
            for size in 2..=5 {
                for cards in pool.iter().copied().combinations(size) {
                    let suits = cards.iter().map(|c| c.suit()).unique().count();
                    let expected = (MIN_GROUP..=MAX_TRIPLET).contains(&size) && suits == size;
                    assert_eq!(is_triplet(&cards), expected, "{:?}", cards);
                }
            }
        }
    }

    #[test]
    fn triplet_rejects_a_stray_rank() {
        for rank in Rank::all() {
            for size in MIN_GROUP..=MAX_TRIPLET {
                for suits in Suit::all().into_iter().combinations(size) {
                    let mut cards = suits
                        .iter()
                        .map(|&suit| Card::from((rank, suit)))
                        .collect::<Vec<_>>();
                    assert!(is_triplet(&cards));
                    let last = cards[size - 1].suit();
                    cards[size - 1] = Card::from((rank.succ(), last));
                    assert!(!is_triplet(&cards));
                }
            }
        }
    }

    #[test]
    fn biggest_gap_picks_first_of_ties() {
        // 2 4 6 8: every step is 2 except 8 -> 2 which is 7
        assert_eq!(biggest_gap(&cards("2h 4h 6h 8h")), 3);
        // 2 5 8 J: steps 3 3 3 4, the wrap is widest
        assert_eq!(biggest_gap(&cards("2h 5h 8h Jh")), 3);
        // 2 3 9 T: steps 1 6 1 5
        assert_eq!(biggest_gap(&cards("2h 3h 9h Th")), 1);
        // 2 6 T: steps 4 4 5
        assert_eq!(biggest_gap(&cards("2h 6h Th")), 2);
        // 2 5 8 J K: steps 3 3 3 2 2, the first 3 wins
        assert_eq!(biggest_gap(&cards("2h 5h 8h Jh Kh")), 0);
    }

    #[test]
    fn flush_wraps_around_the_ace() {
        let run = attempt_flush(&cards("Ks 2s As 4s 3s")).unwrap();
        let ranks = run
            .iter()
            .filter_map(Slot::card)
            .map(|c| c.rank())
            .collect::<Vec<_>>();
        assert_eq!(
            ranks,
            vec![Rank::King, Rank::Ace, Rank::Two, Rank::Three, Rank::Four]
        );
        assert!(run.iter().all(|s| !s.is_placeholder()));
    }

    #[test]
    fn flush_marks_missing_ranks() {
        let run = attempt_flush(&cards("2h 3h 5h")).unwrap();
        assert_eq!(run.len(), 4);
        assert_eq!(run[2], PLACEHOLDER);
        assert_eq!(run[3], Slot::from(Card::try_from("5h").unwrap()));
    }

    #[test]
    fn flush_rejects_bad_candidates() {
        assert!(attempt_flush(&cards("2h 3h")).is_none());
        assert!(attempt_flush(&cards("2h 3h 4s")).is_none());
        assert!(attempt_flush(&cards("2h 3h 3h'")).is_none());
    }

    #[test]
    fn placeholders_fill_every_missing_step() {
        for s in ["2h 3h 5h", "2c 7c 9c Qc", "As 3s 4s 9s", "5d 6d 7d 8d 9d Td"] {
            let cards = cards(s);
            let run = attempt_flush(&cards).unwrap();
            let real = run.iter().filter_map(Slot::card).collect::<Vec<_>>();
            let steps = real
                .windows(2)
                .map(|w| w[0].rank().gap(&w[1].rank()))
                .sum::<usize>();
            let holes = run.iter().filter(|s| s.is_placeholder()).count();
            assert_eq!(holes, steps - (cards.len() - 1));
            let mut back = real.clone();
            let mut sent = cards.clone();
            back.sort_by_key(|c| c.rank());
            sent.sort_by_key(|c| c.rank());
            assert_eq!(back, sent);
        }
    }

    #[test]
    fn placeholders_over_every_rank_subset() {
        for size in 3..=6 {
            for ranks in Rank::all().into_iter().combinations(size) {
                let cards = ranks
                    .iter()
                    .map(|&rank| Card::from((rank, Suit::H)))
                    .collect::<Vec<_>>();
                let widest = (0..size)
                    .map(|i| ranks[i].gap(&ranks[(i + 1) % size]))
                    .max()
                    .unwrap();
                let run = attempt_flush(&cards).unwrap();
                let holes = run.iter().filter(|s| s.is_placeholder()).count();
                assert_eq!(holes, N_RANKS - widest - (size - 1), "{:?}", ranks);
                assert_eq!(run.len(), N_RANKS - widest + 1);
                assert!(run.first().is_some_and(|s| !s.is_placeholder()));
                assert!(run.last().is_some_and(|s| !s.is_placeholder()));
                let mut real = run.iter().filter_map(Slot::card).collect::<Vec<_>>();
                real.sort();
                assert_eq!(real, cards);
                assert_eq!(classify(&cards).is_valid(), holes == 0);
            }
        }
    }

    #[test]
    fn classification_table() {
        assert_eq!(classify(&[]), Shape::Empty);
        assert_eq!(classify(&cards("Kh Ks Kd")), Shape::Triplet);
        assert_eq!(classify(&cards("2h 3h 5h")), Shape::Gapped(1));
        assert_eq!(classify(&cards("2h 3h 4h 5h")), Shape::Flush);
        assert_eq!(classify(&cards("Ah As Ah'")), Shape::Scrap);
        assert_eq!(classify(&cards("Ah")), Shape::Scrap);
        assert_eq!(classify(&cards("Ah Kh")), Shape::Scrap);
        assert!(is_valid(&[]));
        assert!(is_valid(&cards("Kh Ks Kd")));
        assert!(!is_valid(&cards("2h 3h 5h")));
        assert!(is_valid(&cards("2h 3h 4h 5h")));
        assert!(!is_valid(&cards("Ah As Ah'")));
    }

    #[test]
    fn canonical_puts_run_ends_outside() {
        let order = canonical(&cards("3d Ad 2d Kd"));
        assert_eq!(order, cards("Kd Ad 2d 3d"));
        let order = canonical(&cards("9s 9c 9h"));
        assert_eq!(order, cards("9c 9h 9s"));
    }
}
