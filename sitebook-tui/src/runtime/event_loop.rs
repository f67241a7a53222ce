use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use sitebook::persistence::FileStore;
use std::io;
use std::time::{Duration, Instant};

use super::action_queue::{channel, Action};
use super::actions::run_action;
use super::views::handle_key;

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &FileStore,
    initial: Option<Action>,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();
    if let Some(action) = initial {
        let _ = action_tx.send(action);
    }

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, app, &action_tx);
                }
            }
        }

        // Drained one at a time so file operations never overlap.
        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, store).await?;
        }

        app.expire_status(Instant::now());

        if !app.running {
            break;
        }
    }

    Ok(())
}
