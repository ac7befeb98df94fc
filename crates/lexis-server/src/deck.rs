use lexis_anki::LearningCard;
use lexis_core::types::VocabCandidate;

use crate::state::AppState;

/// Turn candidates into cards, enriching each with its dictionary entry.
/// A failed lookup keeps the bare card.
pub async fn build_cards(
    state: &AppState,
    language: &str,
    candidates: &[VocabCandidate],
) -> Vec<LearningCard> {
    let mut cards = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let card = LearningCard::from_candidate(candidate);
        match state.dictionary.lookup(language, &candidate.word).await {
            Ok(record) => cards.push(card.with_record(&record)),
            Err(e) => {
                tracing::warn!("No dictionary data for '{}': {}", candidate.word, e);
                cards.push(card);
            }
        }
    }

    cards
}
