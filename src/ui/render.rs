use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::ui::alert::render_alert;
use crate::ui::app::App;
use crate::ui::auth::view::render_auth_form;
use crate::ui::cart::view::render_cart;
use crate::ui::catalog::view::render_product_list;
use crate::ui::detail::render_product_detail;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::nav::{Route, Tab};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);

    // The alert owns the keyboard, so no text cursor underneath it.
    let show_cursor = !app.alert().is_visible();
    match app.tab() {
        Tab::Shop => match app.current_route() {
            Route::ProductList => {
                render_product_list(frame, body, app.product_list(), show_cursor)
            }
            Route::ProductDetail { product } => render_product_detail(frame, body, product),
            Route::Cart => render_cart(frame, body, app.cart_screen()),
        },
        Tab::Login => render_auth_form(frame, body, app.login(), show_cursor),
        Tab::Register => render_auth_form(frame, body, app.register(), show_cursor),
    }

    frame.render_widget(Footer::new().widget(app, footer), footer);
    render_alert(frame, app.alert());
}
