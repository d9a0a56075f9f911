use super::class::Class;
use super::hero::Hero;
use super::rarity::Rarity;
use crate::Cost;

/// Reference metadata for one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    class: Class,
    rarity: Rarity,
    cost: Option<Cost>,
}

impl Entry {
    pub fn new(class: Option<Hero>, rarity: Rarity, cost: Option<Cost>) -> Self {
        Self::restricted(Class::from(class), rarity, cost)
    }
    pub fn restricted(class: Class, rarity: Rarity, cost: Option<Cost>) -> Self {
        Self {
            class,
            rarity,
            cost,
        }
    }
    /// the hero this card belongs to, if any hero does
    pub fn class(&self) -> Option<Hero> {
        self.class.hero()
    }
    pub fn restriction(&self) -> Class {
        self.class
    }
    pub fn rarity(&self) -> Rarity {
        self.rarity
    }
    pub fn cost(&self) -> Option<Cost> {
        self.cost
    }
    /// neutral cards fit any hero, and any card fits an unknown hero
    pub fn admits(&self, hero: Option<Hero>) -> bool {
        self.class.admits(hero)
    }
}
