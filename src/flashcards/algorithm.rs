//! In-session reinsertion of missed cards
//!
//! A card judged wrong is copied back into the part of the deck that has
//! not been shown yet, so the word comes up again before the session ends.
//!
//! Placement rules, with `index` the position of the missed card and `len`
//! the deck length before insertion:
//! - `len > index + 3`: insert at a uniformly random `p` in
//!   `index + 3 ..= len - 1`, so at least two other cards come first
//! - otherwise: append at `len`

use rand::Rng;

/// Minimum distance between a missed card and its copy
pub const REINSERT_GAP: usize = 3;

/// Where the copy of a missed card went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Inserted inside the remaining deck, shifting later cards right
    Inserted(usize),
    /// Appended after the last card
    Appended(usize),
}

impl Placement {
    pub fn position(self) -> usize {
        match self {
            Self::Inserted(p) | Self::Appended(p) => p,
        }
    }
}

/// Choose the position for the copy of the card at `index`
///
/// # Arguments
/// * `index` - Cursor position of the missed card
/// * `deck_len` - Deck length before insertion
/// * `rng` - Source of randomness for the insertion slot
pub fn reinsertion_slot<R: Rng + ?Sized>(index: usize, deck_len: usize, rng: &mut R) -> Placement {
    let earliest = index + REINSERT_GAP;

    if deck_len > earliest {
        Placement::Inserted(rng.gen_range(earliest..=deck_len - 1))
    } else {
        Placement::Appended(deck_len)
    }
}

/// Copy `deck[index]` back into the deck and report where it landed
///
/// Returns `None` when `index` is past the end of the deck.
pub fn reinsert_missed<T: Clone, R: Rng + ?Sized>(
    deck: &mut Vec<T>,
    index: usize,
    rng: &mut R,
) -> Option<Placement> {
    let missed = deck.get(index)?.clone();
    let placement = reinsertion_slot(index, deck.len(), rng);

    match placement {
        Placement::Inserted(p) => deck.insert(p, missed),
        Placement::Appended(_) => deck.push(missed),
    }

    Some(placement)
}
