//! Mutations over the overlay style document.

use crate::{
    dao::documents::StyleDocument,
    dto::requests::{LayoutUpdate, MatchInfoUpdate, StyleUpdate},
    error::ServiceError,
    services::ws_events,
    state::SharedState,
};

/// Snapshot of the persisted style document.
pub async fn style_document(state: &SharedState) -> StyleDocument {
    state.store().style_doc().get().await
}

/// Replace colors, opacity and scale. The match info line and layout are
/// left untouched.
pub async fn update_style(
    state: &SharedState,
    update: StyleUpdate,
) -> Result<StyleDocument, ServiceError> {
    mutate(state, |style| {
        style.primary = update.primary;
        style.secondary = update.secondary;
        style.opacity = update.opacity;
        style.scale = update.scale;
    })
    .await
}

/// Replace the free-form match info line.
pub async fn update_match_info(
    state: &SharedState,
    update: MatchInfoUpdate,
) -> Result<StyleDocument, ServiceError> {
    mutate(state, |style| {
        style.match_info = update.text;
    })
    .await
}

/// Move the timer relative to the score row.
pub async fn update_layout(
    state: &SharedState,
    update: LayoutUpdate,
) -> Result<StyleDocument, ServiceError> {
    mutate(state, |style| {
        style.timer_position = update.timer_position;
    })
    .await
}

/// Replace the whole style document. The route validates the payload first.
pub async fn import_document(state: &SharedState, document: StyleDocument) -> StyleDocument {
    state.store().style_doc().replace(document.clone()).await;
    ws_events::broadcast_style(state, document.clone());
    document
}

async fn mutate<F>(state: &SharedState, mutation: F) -> Result<StyleDocument, ServiceError>
where
    F: FnOnce(&mut StyleDocument),
{
    let document = state
        .store()
        .style_doc()
        .update(|style| {
            mutation(style);
            Ok::<_, ServiceError>(style.clone())
        })
        .await?;
    ws_events::broadcast_style(state, document.clone());
    Ok(document)
}
