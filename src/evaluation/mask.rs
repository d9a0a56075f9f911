use crate::decks::Deck;
use crate::decks::Sample;

/// One masked sample per deck.
///
/// The deck at index `i` withholds slot `(offset + i) % 30`, where `offset`
/// is the position of the first deck in the full history.
pub fn create_targets(decks: &[Deck], offset: usize) -> Vec<Sample> {
    decks
        .iter()
        .enumerate()
        .map(|(i, deck)| deck.mask(offset + i))
        .collect()
}
