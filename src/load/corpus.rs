use crate::Cost;
use crate::Error;
use crate::cards::Card;
use crate::cards::Corpus;
use crate::cards::Entry;
use crate::cards::Class;
use crate::cards::Rarity;
use anyhow::Context;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// One line of the card metadata file. Other columns are ignored.
#[derive(Debug, Deserialize)]
struct Metadata {
    id: String,
    #[serde(default)]
    class: Option<String>,
    #[serde(default)]
    rarity: Option<String>,
    #[serde(default)]
    cost: Option<f32>,
}

impl Metadata {
    fn entry(self) -> Result<(Card, Entry), Error> {
        let card = Card::try_from(self.id.as_str())?;
        let class = Class::parse(self.class.as_deref().unwrap_or(""));
        // only legendaries are special; anything else caps at two copies
        let rarity = Rarity::try_from(self.rarity.as_deref().unwrap_or("")).unwrap_or(Rarity::Common);
        let cost = self
            .cost
            .filter(|c| c.is_finite() && *c >= 0.0)
            .map(|c| c.round().min(Cost::MAX as f32) as Cost);
        Ok((card, Entry::restricted(class, rarity, cost)))
    }
}

impl Corpus {
    /// card metadata csv with `id`, `class`, `rarity` and `cost` columns
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("open corpus {}", path.display()))?;
        let corpus = Self::read(file)?;
        log::info!("loaded {} cards from {}", corpus.len(), path.display());
        Ok(corpus)
    }
    pub fn read<R: Read>(reader: R) -> anyhow::Result<Self> {
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
        let mut failed = 0;
        let mut entries = Vec::new();
        for (i, result) in reader.deserialize::<Metadata>().enumerate() {
            let line = i + 2;
            match result
                .map_err(|e| Error::MalformedRow {
                    line,
                    reason: e.to_string(),
                })
                .and_then(|row| row.entry().map_err(|e| e.at(line)))
            {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    failed += 1;
                    log::warn!("skipping card: {}", e);
                }
            }
        }
        if failed > 0 {
            log::warn!("skipped {} malformed card rows", failed);
        }
        Ok(entries.into_iter().collect())
    }
}
