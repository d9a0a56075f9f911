use super::card::Card;
use super::corpus::Corpus;
use super::hero::Hero;

/// Whether `candidate` may legally be added to `deck` for `hero`.
///
/// Class cards need a matching hero (skipped when the hero is unknown),
/// legendaries are singletons, everything else caps at two copies.
/// A card missing from the corpus cannot be checked and is never valid.
///
/// This is the one gate every model applies before accepting a candidate.
pub fn is_valid(deck: &[Card], candidate: Card, hero: Option<Hero>, corpus: &Corpus) -> bool {
    match corpus.lookup(candidate) {
        Err(_) => false,
        Ok(entry) => {
            entry.admits(hero)
                && deck.iter().filter(|card| **card == candidate).count() < entry.rarity().limit()
        }
    }
}
