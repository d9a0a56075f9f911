use super::mask::create_targets;
use super::report::Report;
use super::submission::Submission;
use crate::decks::Deck;
use crate::decks::Query;
use crate::models::Recommender;

/// Outcome of one validation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub report: Report,
    pub submission: Option<Submission>,
}

/// Fit on all but the last `held_out` decks, score on the rest.
///
/// The unlabeled `finals` are always absorbed after fitting, so the
/// validation score is the same whether or not they are `submit`ted.
pub fn evaluate<R>(
    model: &mut R,
    history: &[Deck],
    held_out: usize,
    finals: &[Query],
    submit: bool,
) -> Evaluation
where
    R: Recommender + ?Sized,
{
    let split = history.len().saturating_sub(held_out);
    let (train, valid) = history.split_at(split);
    let ref train = create_targets(train, 0);
    let ref valid = create_targets(valid, split);
    log::info!("fitting on {} decks, validating on {}", train.len(), valid.len());
    model.fit(train);
    model.absorb(finals);
    let queries = valid.iter().map(|s| s.query().clone()).collect::<Vec<_>>();
    let ref recommendations = model.predict(&queries);
    let report = Report::score(recommendations, valid);
    log::info!("{}", report);
    let submission = submit.then(|| Submission::from((finals, model.predict(finals))));
    Evaluation { report, submission }
}
