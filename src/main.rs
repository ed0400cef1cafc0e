mod logging;
mod config;
mod controller;
mod model;
mod view;

#[cfg(test)]
mod test_fixtures;

use std::io;
use std::sync::Arc;
use anyhow::Result;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use view::AppView;
use view::utils::grid_columns_for_width;
use config::AppConfig;
use controller::{AppController, SearchAction, SearchCoordinator};
use model::{AppModel, CatalogClient, CatalogError, FavoritesStore, JsonStore, ThemeStore};

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== movies-rs Starting ===");

    let config = AppConfig::from_env();
    let store = JsonStore::open(&config.data_dir);
    let favorites = FavoritesStore::new(store.clone());
    let theme = ThemeStore::load(store);

    let mut app_model = AppModel::new();
    match CatalogClient::new(&config) {
        Ok(client) => app_model.set_catalog_client(client),
        Err(CatalogError::CredentialMissing) => {
            tracing::warn!("TMDB_API_KEY is not set, starting without a catalog");
        }
        Err(e) => return Err(e.into()),
    }

    let model = Arc::new(Mutex::new(app_model));
    let (search, search_actions) = SearchCoordinator::new();
    let controller = AppController::new(model.clone(), favorites, theme, search);

    let controller_for_init = controller.clone();
    tokio::spawn(async move {
        controller_for_init.initialize().await;
    });

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller, search_actions).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("movies-rs shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
    mut search_actions: mpsc::UnboundedReceiver<SearchAction>,
) -> Result<()> {
    loop {
        // Debounced search actions that came due since the last frame
        while let Ok(action) = search_actions.try_recv() {
            let controller = controller.clone();
            tokio::spawn(async move {
                controller.dispatch_search(action).await;
            });
        }

        let size = terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);

        // Get current state
        let (ui_state, content_state, modal_state, should_quit) = {
            let model_guard = model.lock().await;
            model_guard
                .set_grid_columns(grid_columns_for_width(frame_area.width))
                .await;

            (
                model_guard.get_ui_state().await,
                model_guard.get_content_state().await,
                model_guard.get_modal_state().await,
                model_guard.should_quit().await,
            )
        };
        let theme = controller.theme.current().await;

        // Draw UI
        terminal.draw(|f| {
            AppView::render(f, &ui_state, &content_state, &modal_state, theme);
        })?;

        if should_quit {
            break;
        }

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    if let Err(e) = controller.handle_key_event(key).await {
                        tracing::warn!(error = %e, "Key handling failed");
                    }
                }
                Event::Mouse(mouse) => {
                    if let Err(e) = controller.handle_mouse_event(mouse, frame_area).await {
                        tracing::warn!(error = %e, "Mouse handling failed");
                    }
                }
                _ => {}
            }
        }
    }

    Ok(())
}
