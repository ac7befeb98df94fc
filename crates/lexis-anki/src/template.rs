use serde::{Deserialize, Serialize};

use crate::card::LearningCard;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardTemplate {
    pub deck: String,
    pub model: String,
    pub front_template: String,
    pub back_template: String,
}

impl CardTemplate {
    /// Default layout targeting a specific deck and model
    pub fn for_deck(deck: String, model: String) -> Self {
        Self {
            deck,
            model,
            front_template: "{word}<br><div class=\"context\">{context}</div>".to_string(),
            back_template: "<div class=\"definition\">{definition}</div>\
                <div class=\"ipa\">{ipa} {audio}</div><div class=\"freq\">{freq}</div>"
                .to_string(),
        }
    }

    /// Format the front of the card
    pub fn format_front(&self, card: &LearningCard) -> String {
        render(&self.front_template, card)
    }

    /// Format the back of the card
    pub fn format_back(&self, card: &LearningCard) -> String {
        render(&self.back_template, card)
    }

    pub fn uses_audio_placeholder(&self) -> bool {
        self.front_template.contains("{audio}") || self.back_template.contains("{audio}")
    }
}

fn render(template: &str, card: &LearningCard) -> String {
    let audio = card
        .audio_filename()
        .map(|filename| format!("[sound:{filename}]"))
        .unwrap_or_default();

    template
        .replace("{word}", &card.word)
        .replace("{definition}", &card.definition)
        .replace("{ipa}", &card.ipa)
        .replace("{audio}", &audio)
        .replace("{context}", &card.context)
        .replace("{freq}", &format!("{:.2}", card.frequency))
}
