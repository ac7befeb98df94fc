use axum::Json;
use axum::extract::{Path, State};
use lexis_core::dictionary::DictionaryRecord;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn lookup_entry(
    State(state): State<AppState>,
    Path((language, entry)): Path<(String, String)>,
) -> Result<Json<DictionaryRecord>, ApiError> {
    let record = state.dictionary.lookup(&language, &entry).await?;
    tracing::debug!(
        "Looked up '{}' ({}): {} definitions, {} verb forms",
        entry,
        language,
        record.definitions.len(),
        record.verb_forms.len()
    );

    Ok(Json(record))
}
