use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::auth::{AuthIntent, FormKind};
use crate::ui::catalog::ProductListIntent;
use crate::ui::cart::CartIntent;
use crate::ui::nav::{Route, Tab};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // Alerts are modal.
    if app.alert().is_visible() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_alert();
        }
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.next_tab();
            return;
        }
        KeyCode::BackTab => {
            app.prev_tab();
            return;
        }
        _ => {}
    }

    match app.tab() {
        Tab::Shop => handle_shop_key(app, key),
        Tab::Login => handle_form_key(app, key, FormKind::Login),
        Tab::Register => handle_form_key(app, key, FormKind::Register),
    }
}

fn handle_shop_key(app: &mut App, key: KeyEvent) {
    if matches!(app.current_route(), Route::ProductList) {
        handle_list_key(app, key);
    } else if matches!(app.current_route(), Route::ProductDetail { .. }) {
        handle_detail_key(app, key);
    } else {
        handle_cart_key(app, key);
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    if app.is_typing() {
        match key.code {
            KeyCode::Esc => app.dispatch_product_list(ProductListIntent::BlurSearch),
            KeyCode::Enter => app.dispatch_product_list(ProductListIntent::SubmitSearch),
            KeyCode::Backspace => app.dispatch_product_list(ProductListIntent::DeleteChar),
            KeyCode::Char(ch) if is_plain(key) => {
                app.dispatch_product_list(ProductListIntent::InsertChar(ch))
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('/') | KeyCode::Char('s') => {
            app.dispatch_product_list(ProductListIntent::FocusSearch)
        }
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_product_list(ProductListIntent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => {
            app.dispatch_product_list(ProductListIntent::MoveDown)
        }
        KeyCode::Left | KeyCode::Char('h') => app.select_prev_category(),
        KeyCode::Right | KeyCode::Char('l') => app.select_next_category(),
        KeyCode::Enter | KeyCode::Char('d') => {
            app.open_selected_detail();
        }
        KeyCode::Char('a') => {
            app.add_selected_to_cart();
        }
        KeyCode::Char('c') => app.open_cart(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => {
            app.go_back();
        }
        KeyCode::Char('b') => app.buy_now(),
        KeyCode::Char('a') => app.detail_add_to_cart(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_cart_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => {
            app.go_back();
        }
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_cart(CartIntent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch_cart(CartIntent::MoveDown),
        KeyCode::Char('+') | KeyCode::Char('=') => app.increase_selected_line(),
        KeyCode::Char('-') => app.decrease_selected_line(),
        KeyCode::Delete | KeyCode::Char('x') => app.remove_selected_line(),
        KeyCode::Char('p') => app.pay_cash(),
        KeyCode::Char('o') => app.pay_online(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent, kind: FormKind) {
    // "Create an account" / "Log in" links.
    if is_ctrl_char(key, 'r') && kind == FormKind::Login {
        app.set_tab(Tab::Register);
        return;
    }
    if is_ctrl_char(key, 'l') && kind == FormKind::Register {
        app.set_tab(Tab::Login);
        return;
    }

    let intent = match key.code {
        KeyCode::Enter => {
            match kind {
                FormKind::Login => app.submit_login(),
                FormKind::Register => app.submit_register(),
            }
            return;
        }
        KeyCode::Esc => {
            app.set_tab(Tab::Shop);
            return;
        }
        KeyCode::Up => AuthIntent::FocusPrev,
        KeyCode::Down => AuthIntent::FocusNext,
        KeyCode::Backspace => AuthIntent::Backspace,
        KeyCode::Char(ch) if is_plain(key) => AuthIntent::Insert(ch),
        _ => return,
    };

    match kind {
        FormKind::Login => app.dispatch_login(intent),
        FormKind::Register => app.dispatch_register(intent),
    }
}

fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::config::Config;
    use rust_decimal::Decimal;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn app_with_products() -> App {
        let mut app = App::new(&Config::default());
        app.on_catalog_loaded(vec![Product {
            id: 1,
            title: "Backpack".to_string(),
            price: Decimal::from(110),
            description: String::new(),
            image: String::new(),
            category: "men's clothing".to_string(),
        }]);
        app
    }

    #[test]
    fn alert_swallows_keys_until_dismissed() {
        let mut app = app_with_products();
        app.show_alert("Title", "Body");
        handle_key(&mut app, press(KeyCode::Char('c')));
        assert_eq!(app.current_route(), &Route::ProductList);
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(!app.alert().is_visible());
    }

    #[test]
    fn q_types_into_search_instead_of_quitting() {
        let mut app = app_with_products();
        handle_key(&mut app, press(KeyCode::Char('/')));
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.product_list().query, "q");
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut app = app_with_products();
        app.set_tab(Tab::Login);
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn list_keys_add_and_open_cart() {
        let mut app = app_with_products();
        handle_key(&mut app, press(KeyCode::Char('a')));
        handle_key(&mut app, press(KeyCode::Char('a')));
        handle_key(&mut app, press(KeyCode::Char('c')));
        assert_eq!(app.current_route(), &Route::Cart);
        assert_eq!(app.cart_screen().cart.len(), 2);
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.current_route(), &Route::ProductList);
    }

    #[test]
    fn login_link_switches_to_register() {
        let mut app = app_with_products();
        app.set_tab(Tab::Login);
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(app.tab(), Tab::Register);
    }
}
