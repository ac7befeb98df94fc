use std::path::{Component, Path, PathBuf};

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use lexis_anki::{CardTemplate, LearningCard};
use lexis_core::LexisError;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, parse_body};
use crate::state::AppState;

const PACKAGE_EXTENSION: &str = "apkg";

#[derive(Deserialize)]
pub struct ExportRequest {
    /// Package file name, resolved inside the configured export directory
    path: PathBuf,
    deck: Option<String>,
    cards: Vec<LearningCard>,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    note_ids: Vec<u64>,
    path: String,
}

pub async fn export_cards(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ExportResponse>, ApiError> {
    let Some(client) = state.anki.as_ref() else {
        return Err(ApiError::Unavailable("Anki export is disabled".to_string()));
    };
    let request: ExportRequest = parse_body(&body)?;
    let path = export_path(&state.config.anki.export_dir, &request.path)?;

    let template = CardTemplate::for_deck(
        request.deck.unwrap_or_else(|| state.config.anki.deck.clone()),
        state.config.anki.model.clone(),
    );

    let note_ids = lexis_anki::export_deck(client, &template, &request.cards, &path).await?;

    Ok(Json(ExportResponse {
        note_ids,
        path: path.display().to_string(),
    }))
}

/// Resolve a requested package name to an absolute path inside `export_dir`.
///
/// AnkiConnect writes wherever it is told, so only a bare `.apkg` file name
/// is accepted.
fn export_path(export_dir: &Path, requested: &Path) -> Result<PathBuf, ApiError> {
    let mut components = requested.components();
    let name = match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) => name,
        _ => {
            return Err(LexisError::InvalidInput(format!(
                "path must be a file name inside the export directory, got '{}'",
                requested.display()
            ))
            .into());
        }
    };

    if requested.extension().and_then(|ext| ext.to_str()) != Some(PACKAGE_EXTENSION) {
        return Err(LexisError::InvalidInput(format!(
            "path must end in .{PACKAGE_EXTENSION}, got '{}'",
            requested.display()
        ))
        .into());
    }

    let dir = std::path::absolute(export_dir).map_err(|e| {
        anyhow::anyhow!("Failed to resolve export dir {}: {e}", export_dir.display())
    })?;

    Ok(dir.join(name))
}
