use crate::decks::Sample;
use crate::scoring::Recommendation;
use std::fmt::Display;
use std::fmt::Formatter;

/// Top-3 hit rate over a validation set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    hits: usize,
    total: usize,
    short: usize,
}

impl Report {
    /// recommendations align 1:1 with the samples they answer
    pub fn score(recommendations: &[Recommendation], samples: &[Sample]) -> Self {
        debug_assert_eq!(recommendations.len(), samples.len());
        recommendations
            .iter()
            .zip(samples)
            .fold(Self::default(), |report, (recommendation, sample)| Self {
                hits: report.hits + recommendation.contains(sample.target()) as usize,
                total: report.total + 1,
                short: report.short + recommendation.complete().is_err() as usize,
            })
    }
    pub fn hits(&self) -> usize {
        self.hits
    }
    pub fn total(&self) -> usize {
        self.total
    }
    /// answers that held fewer than three cards
    pub fn short(&self) -> usize {
        self.short
    }
    /// zero for an empty validation set
    pub fn accuracy(&self) -> f32 {
        match self.total {
            0 => 0.0,
            n => self.hits as f32 / n as f32,
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "top-3 accuracy {:.4} ({} / {}, {} short)",
            self.accuracy(),
            self.hits,
            self.total,
            self.short
        )
    }
}
