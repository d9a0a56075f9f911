use crate::decks::DeckId;
use crate::decks::Query;
use crate::scoring::Recommendation;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

/// Final recommendations, one row per query deck.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Submission(Vec<(DeckId, Recommendation)>);

impl Submission {
    pub fn rows(&self) -> &[(DeckId, Recommendation)] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// `deckid,recommendations` with space-joined card ids
    pub fn write<W: Write>(&self, writer: W) -> anyhow::Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["deckid", "recommendations"])?;
        for (deck, recommendation) in self.0.iter() {
            csv.write_record([deck.as_str(), recommendation.to_string().as_str()])?;
        }
        csv.flush()?;
        Ok(())
    }
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("create submission {}", path.display()))?;
        self.write(file)?;
        log::info!("wrote {} recommendations to {}", self.len(), path.display());
        Ok(())
    }
}

impl From<(&[Query], Vec<Recommendation>)> for Submission {
    fn from((queries, recommendations): (&[Query], Vec<Recommendation>)) -> Self {
        Self(
            queries
                .iter()
                .map(|query| query.header().deck().clone())
                .zip(recommendations)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn csv_layout() {
        let ref ids = (1..=29).collect::<Vec<u32>>();
        let ref queries = [
            fixtures::query("deck-a", "2018-01-01", None, ids),
            fixtures::query("deck-b", "2018-01-01", None, ids),
        ];
        let recommendations = vec![
            Recommendation::from(fixtures::cards(&[3, 1, 2])),
            Recommendation::from(fixtures::cards(&[7])),
        ];
        let submission = Submission::from((&queries[..], recommendations));
        let mut buffer = Vec::new();
        submission.write(&mut buffer).expect("write to memory");
        let text = String::from_utf8(buffer).expect("utf8");
        assert_eq!(text, "deckid,recommendations\ndeck-a,3 1 2\ndeck-b,7\n");
    }

    #[test]
    fn saved_to_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let ref path = dir.path().join("submission.csv");
        let ref ids = (1..=29).collect::<Vec<u32>>();
        let ref queries = [fixtures::query("d", "2018-01-01", None, ids)];
        Submission::from((&queries[..], vec![Recommendation::default()]))
            .save(path)
            .expect("save");
        let text = std::fs::read_to_string(path).expect("read back");
        assert_eq!(text, "deckid,recommendations\nd,\n");
    }
}
