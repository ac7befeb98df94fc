mod card;
mod client;
mod template;

pub use card::LearningCard;
pub use client::{AnkiConnectClient, AudioAttachment};
pub use template::CardTemplate;

use std::path::Path;

use anyhow::{Context, Result};

/// Add a card to Anki using the provided client and template
pub async fn add_card(
    client: &AnkiConnectClient,
    template: &CardTemplate,
    card: &LearningCard,
) -> Result<u64> {
    let front = template.format_front(card);
    let back = template.format_back(card);
    // Templates that place `{audio}` themselves only need the media stored
    let audio_fields: &[&str] = if template.uses_audio_placeholder() { &[] } else { &["Back"] };
    let audio = card.audio_attachment(audio_fields);

    client
        .add_note(&template.deck, &template.model, &front, &back, audio)
        .await
}

/// Add every card in order, then package the deck to `path`
pub async fn export_deck(
    client: &AnkiConnectClient,
    template: &CardTemplate,
    cards: &[LearningCard],
    path: &Path,
) -> Result<Vec<u64>> {
    client.create_deck(&template.deck).await?;

    let mut note_ids = Vec::with_capacity(cards.len());
    for card in cards {
        let note_id = add_card(client, template, card)
            .await
            .with_context(|| format!("Failed to add card for '{}'", card.word))?;
        note_ids.push(note_id);
    }

    if !client.export_package(&template.deck, path).await? {
        anyhow::bail!("AnkiConnect did not export deck '{}'", template.deck);
    }

    tracing::info!(
        "Exported {} cards from deck '{}' to {}",
        note_ids.len(),
        template.deck,
        path.display()
    );

    Ok(note_ids)
}
