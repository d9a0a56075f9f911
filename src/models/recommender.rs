use crate::PROGRESS_INTERVAL;
use crate::decks::Query;
use crate::decks::Sample;
use crate::scoring::Recommendation;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// Contract shared by every recommender.
///
/// # Required Methods
///
/// - `fit()`: Build the model's indices from masked training samples
/// - `recommend()`: Top three valid cards for one partial deck
///
/// # Provided Methods
///
/// - `absorb()`: Let unlabeled partial decks enrich the fit indices
/// - `predict()`: `recommend()` over a batch, aligned 1:1 with the input
pub trait Recommender: Sync {
    fn fit(&mut self, samples: &[Sample]);
    fn recommend(&self, query: &Query) -> Recommendation;
    fn absorb(&mut self, _: &[Query]) {}
    fn predict(&self, queries: &[Query]) -> Vec<Recommendation> {
        let ref done = AtomicUsize::new(0);
        let each = |query: &Query| {
            let recommendation = self.recommend(query);
            let n = done.fetch_add(1, Ordering::Relaxed) + 1;
            if n % PROGRESS_INTERVAL == 0 {
                log::debug!("prediction progress {} / {}", n, queries.len());
            }
            recommendation
        };
        batch(queries, each)
    }
}

#[cfg(feature = "parallel")]
fn batch<F>(queries: &[Query], each: F) -> Vec<Recommendation>
where
    F: Fn(&Query) -> Recommendation + Sync + Send,
{
    use rayon::prelude::*;
    queries.par_iter().map(each).collect()
}

#[cfg(not(feature = "parallel"))]
fn batch<F>(queries: &[Query], each: F) -> Vec<Recommendation>
where
    F: Fn(&Query) -> Recommendation,
{
    queries.iter().map(each).collect()
}
