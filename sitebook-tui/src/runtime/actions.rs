use crate::app::App;
use anyhow::Result;
use sitebook::persistence::{FileStore, PersistenceError};
use std::path::Path;
use tracing::error;

use super::action_queue::Action;

pub(super) async fn run_action(action: Action, app: &mut App, store: &FileStore) -> Result<()> {
    match action {
        Action::Open(path) => {
            handle_open(app, store, &path).await;
        }
        Action::Save => {
            handle_save(app, store).await;
        }
        Action::SaveAs(path) => {
            handle_save_as(app, store, &path).await;
        }
    }
    Ok(())
}

async fn handle_open(app: &mut App, store: &FileStore, path: &Path) {
    match store.open(Some(path)).await {
        Ok(Some(loaded)) => app.apply_loaded(loaded),
        Ok(None) => {}
        Err(e) => report_failure(app, "Could not open the file.", e),
    }
}

async fn handle_save(app: &mut App, store: &FileStore) {
    if !app.can_save() {
        return;
    }
    let result = store
        .save(&mut app.session, app.file.as_ref(), app.file_name.as_deref())
        .await;
    match result {
        Ok(outcome) => app.apply_save_outcome(outcome),
        Err(e) => report_failure(app, "Could not save the file.", e),
    }
}

async fn handle_save_as(app: &mut App, store: &FileStore, path: &Path) {
    if !app.can_save() {
        return;
    }
    match store.save_as(&mut app.session, Some(path)).await {
        Ok(Some(handle)) => app.apply_saved_as(handle),
        Ok(None) => {}
        Err(e) => report_failure(app, "Could not save the file.", e),
    }
}

/// Alert with a generic headline and the underlying cause. The session is left as it
/// was.
fn report_failure(app: &mut App, headline: &str, e: PersistenceError) {
    error!(error = %e, "{headline}");
    app.show_alert(format!("{headline}\n\n{e}"));
}
