//! Tests for tab switching and the shop's screen stack.

mod common;

use common::{loaded_app, make_app, sample_catalog};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shopterm::catalog::Category;
use shopterm::config::Config;
use shopterm::ui::app::App;
use shopterm::ui::input::handle_key;
use shopterm::ui::nav::{NavStack, Route, Tab};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

#[test]
fn stack_never_pops_root() {
    let mut nav = NavStack::default();
    assert!(nav.pop().is_none());
    assert_eq!(nav.breadcrumb(), vec!["Products"]);
    nav.push(Route::Cart);
    assert_eq!(nav.breadcrumb(), vec!["Products", "Cart"]);
    assert_eq!(nav.pop(), Some(Route::Cart));
    assert_eq!(nav.current(), &Route::ProductList);
}

#[test]
fn tabs_cycle_in_both_directions() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Tab));
    assert_eq!(app.tab(), Tab::Login);
    handle_key(&mut app, press(KeyCode::Tab));
    assert_eq!(app.tab(), Tab::Register);
    handle_key(&mut app, press(KeyCode::Tab));
    assert_eq!(app.tab(), Tab::Shop);
    handle_key(&mut app, KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
    assert_eq!(app.tab(), Tab::Register);
}

#[test]
fn switching_tabs_keeps_shop_stack() {
    let mut app = loaded_app();
    handle_key(&mut app, press(KeyCode::Enter));
    assert!(matches!(app.current_route(), Route::ProductDetail { .. }));

    app.set_tab(Tab::Login);
    app.set_tab(Tab::Shop);
    assert!(matches!(app.current_route(), Route::ProductDetail { .. }));
}

#[test]
fn detail_carries_selected_product() {
    let mut app = loaded_app();
    handle_key(&mut app, press(KeyCode::Down));
    handle_key(&mut app, press(KeyCode::Enter));
    match app.current_route() {
        Route::ProductDetail { product } => assert_eq!(product.id, 2),
        other => panic!("Expected detail, got {:?}", other),
    }

    // Detail buttons never touch the cart.
    handle_key(&mut app, press(KeyCode::Char('a')));
    handle_key(&mut app, press(KeyCode::Char('b')));
    assert_eq!(app.product_list().cart_badge(), 0);

    handle_key(&mut app, press(KeyCode::Esc));
    assert_eq!(app.current_route(), &Route::ProductList);
}

#[test]
fn category_keys_cycle_chips() {
    let mut app = loaded_app();
    handle_key(&mut app, press(KeyCode::Right));
    assert_eq!(app.product_list().category, Category::MensClothing);
    assert_eq!(app.product_list().filtered.len(), 2);

    handle_key(&mut app, press(KeyCode::Left));
    handle_key(&mut app, press(KeyCode::Left));
    assert_eq!(app.product_list().category, Category::Jewelery);
}

#[test]
fn cart_removal_reaches_list_immediately() {
    let mut app = loaded_app();
    handle_key(&mut app, press(KeyCode::Char('a')));
    handle_key(&mut app, press(KeyCode::Char('c')));
    assert_eq!(app.current_route(), &Route::Cart);

    handle_key(&mut app, press(KeyCode::Char('x')));
    assert!(app.cart_screen().cart.is_empty());
    assert_eq!(app.product_list().cart_badge(), 0);
}

#[test]
fn back_to_back_keys_reopen_cart_with_latest_edit() {
    let mut app = loaded_app();
    for code in [
        KeyCode::Char('a'),
        KeyCode::Char('c'),
        KeyCode::Char('+'),
        KeyCode::Esc,
        KeyCode::Char('c'),
    ] {
        handle_key(&mut app, press(code));
    }
    assert_eq!(app.current_route(), &Route::Cart);
    assert_eq!(app.cart_screen().cart.lines()[0].quantity, 2);

    // A second edit builds on the first rather than on a stale copy.
    handle_key(&mut app, press(KeyCode::Char('+')));
    handle_key(&mut app, press(KeyCode::Esc));
    assert_eq!(app.product_list().cart.lines()[0].quantity, 3);
}

#[test]
fn cart_sync_disabled_loses_edits_on_return() {
    let mut config = Config::default();
    config.cart.sync_to_list = false;
    let mut app = App::new(&config);
    app.on_catalog_loaded(sample_catalog());
    for code in [
        KeyCode::Char('a'),
        KeyCode::Char('c'),
        KeyCode::Char('+'),
        KeyCode::Esc,
        KeyCode::Char('c'),
    ] {
        handle_key(&mut app, press(code));
    }
    assert_eq!(app.cart_screen().cart.lines()[0].quantity, 1);
}

#[test]
fn payment_buttons_show_alerts() {
    let mut app = loaded_app();
    app.open_cart();
    handle_key(&mut app, press(KeyCode::Char('p')));
    assert!(app.alert().is_visible());
    handle_key(&mut app, press(KeyCode::Enter));
    handle_key(&mut app, press(KeyCode::Char('o')));
    assert!(app.alert().is_visible());
}
