use tracing::info;

use crate::{CollisionOutcome, Score, Side};

/// Credit a finished rally; returns the side that scored
pub fn check_scoring(outcome: CollisionOutcome, score: &mut Score) -> Option<Side> {
    let scorer = outcome.scorer()?;
    score.increment(scorer);
    info!(
        ?scorer,
        player = score.player,
        computer = score.computer,
        "point scored"
    );
    Some(scorer)
}
