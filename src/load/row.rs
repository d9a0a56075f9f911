use super::columns::Columns;
use crate::Error;
use crate::decks::Deck;
use crate::decks::Query;
use crate::decks::Sample;
use csv::StringRecord;

/// Something one line of a deck file parses into.
pub trait Row: Sized {
    fn parse(columns: &Columns, record: &StringRecord) -> Result<Self, Error>;
}

/// history rows: all 30 slots
impl Row for Deck {
    fn parse(columns: &Columns, record: &StringRecord) -> Result<Self, Error> {
        Deck::new(columns.header(record)?, columns.slots(record)?)
    }
}

/// query rows: 29 slots, any target column ignored
impl Row for Query {
    fn parse(columns: &Columns, record: &StringRecord) -> Result<Self, Error> {
        Query::new(columns.header(record)?, columns.slots(record)?)
    }
}

/// already-masked rows: 29 slots and a target
impl Row for Sample {
    fn parse(columns: &Columns, record: &StringRecord) -> Result<Self, Error> {
        Ok(Sample::new(Query::parse(columns, record)?, columns.target(record)?))
    }
}
