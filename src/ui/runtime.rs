use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use crate::cart::Cart;
use crate::catalog::{spawn_catalog_load, CatalogClient};
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: &Config) -> anyhow::Result<()> {
    let client = CatalogClient::new(&config.catalog).context("Failed to build catalog client")?;
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(config);

    app.set_cart_listener(Arc::new(|cart: &Cart| {
        tracing::debug!(
            lines = cart.len(),
            total = %cart.total_price(),
            "Cart synced to product list"
        );
    }));

    let catalog_tx = events.sender();
    tracing::info!(endpoint = %client.endpoint(), "Loading catalog");
    let _catalog_task = spawn_catalog_load(rt.handle(), client, move |products| {
        let _ = catalog_tx.send(AppEvent::CatalogLoaded(products));
    });

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            // Redraw only.
            Ok(AppEvent::Tick | AppEvent::Resize) => {}
            Ok(AppEvent::CatalogLoaded(products)) => app.on_catalog_loaded(products),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    rt.shutdown_background();
    tracing::info!("Shut down");
    Ok(())
}
