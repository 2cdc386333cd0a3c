use std::sync::Arc;

use crate::cart::{Cart, CartLine};
use crate::catalog::Product;
use crate::config::Config;
use crate::ui::alert::{AlertIntent, AlertReducer, AlertState};
use crate::ui::auth::{AuthFormState, AuthIntent, AuthReducer};
use crate::ui::cart::{CartIntent, CartReducer, CartScreenState};
use crate::ui::catalog::{ProductListIntent, ProductListReducer, ProductListState};
use crate::ui::mvi::Reducer;
use crate::ui::nav::{NavStack, Route, Tab};

/// Observes the cart screen's cart after every change that reached the list.
pub type CartListener = Arc<dyn Fn(&Cart) + Send + Sync>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    tab: Tab,
    nav: NavStack,
    /// Product list screen state (MVI pattern). Owns the list's cart.
    product_list: ProductListState,
    /// Cart screen state (MVI pattern). Only meaningful while `Route::Cart`
    /// is on the stack.
    cart_screen: CartScreenState,
    login: AuthFormState,
    register: AuthFormState,
    alert: AlertState,
    /// Wired by the runtime.
    cart_listener: Option<CartListener>,
    sync_cart_to_list: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            tab: Tab::Shop,
            nav: NavStack::default(),
            product_list: ProductListState::default(),
            cart_screen: CartScreenState::default(),
            login: AuthFormState::login(),
            register: AuthFormState::register(),
            alert: AlertState::default(),
            cart_listener: None,
            sync_cart_to_list: config.cart.sync_to_list,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn nav(&self) -> &NavStack {
        &self.nav
    }

    pub fn current_route(&self) -> &Route {
        self.nav.current()
    }

    pub fn product_list(&self) -> &ProductListState {
        &self.product_list
    }

    pub fn cart_screen(&self) -> &CartScreenState {
        &self.cart_screen
    }

    pub fn login(&self) -> &AuthFormState {
        &self.login
    }

    pub fn register(&self) -> &AuthFormState {
        &self.register
    }

    pub fn alert(&self) -> &AlertState {
        &self.alert
    }

    /// True when printable keys should go into a text field.
    pub fn is_typing(&self) -> bool {
        match self.tab {
            Tab::Login | Tab::Register => true,
            Tab::Shop => {
                matches!(self.nav.current(), Route::ProductList)
                    && self.product_list.search_focused
            }
        }
    }

    // ========================================================================
    // Tabs and navigation
    // ========================================================================

    pub fn set_tab(&mut self, tab: Tab) {
        tracing::debug!(tab = tab.title(), "Switch tab");
        self.tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.set_tab(self.tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.set_tab(self.tab.prev());
    }

    /// Push the detail screen for the highlighted product.
    pub fn open_selected_detail(&mut self) -> bool {
        let Some(product) = self.product_list.selected_product().cloned() else {
            return false;
        };
        self.nav.push(Route::ProductDetail { product });
        true
    }

    /// Push the cart screen with a snapshot of the list's cart.
    pub fn open_cart(&mut self) {
        let lines = self.product_list.cart.lines().to_vec();
        dispatch_mvi!(self, cart_screen, CartReducer, CartIntent::Load { lines });
        self.nav.push(Route::Cart);
    }

    /// Pop one screen. Returns false at the root.
    pub fn go_back(&mut self) -> bool {
        self.nav.pop().is_some()
    }

    // ========================================================================
    // Product list (MVI pattern)
    // ========================================================================

    pub fn dispatch_product_list(&mut self, intent: ProductListIntent) {
        dispatch_mvi!(self, product_list, ProductListReducer, intent);
    }

    pub fn on_catalog_loaded(&mut self, products: Vec<Product>) {
        self.dispatch_product_list(ProductListIntent::Loaded { products });
    }

    pub fn select_next_category(&mut self) {
        let category = self.product_list.category.next();
        self.dispatch_product_list(ProductListIntent::SelectCategory(category));
    }

    pub fn select_prev_category(&mut self) {
        let category = self.product_list.category.prev();
        self.dispatch_product_list(ProductListIntent::SelectCategory(category));
    }

    pub fn add_selected_to_cart(&mut self) -> bool {
        let Some(product) = self.product_list.selected_product().cloned() else {
            return false;
        };
        self.dispatch_product_list(ProductListIntent::AddToCart { product });
        true
    }

    /// Overwrite the list's cart with a snapshot from the cart screen.
    pub fn apply_cart_snapshot(&mut self, lines: Vec<CartLine>) {
        self.dispatch_product_list(ProductListIntent::ReplaceCart { lines });
    }

    // ========================================================================
    // Product detail
    // ========================================================================

    pub fn buy_now(&self) {
        if let Route::ProductDetail { product } = self.nav.current() {
            tracing::info!(product_id = product.id, title = %product.title, "Buy now");
        }
    }

    /// Detail screen's "Add to cart" only records the request.
    pub fn detail_add_to_cart(&self) {
        if let Route::ProductDetail { product } = self.nav.current() {
            tracing::info!(product_id = product.id, title = %product.title, "Add to cart from detail");
        }
    }

    // ========================================================================
    // Cart screen (MVI pattern)
    // ========================================================================

    pub fn set_cart_listener(&mut self, listener: CartListener) {
        self.cart_listener = Some(listener);
    }

    /// Run a cart intent. With sync on, a changed cart is copied to the list
    /// before this returns, then the listener is notified.
    pub fn dispatch_cart(&mut self, intent: CartIntent) {
        let before = self.cart_screen.cart.clone();
        dispatch_mvi!(self, cart_screen, CartReducer, intent);
        if self.cart_screen.cart == before || !self.sync_cart_to_list {
            return;
        }
        self.apply_cart_snapshot(self.cart_screen.cart.lines().to_vec());
        if let Some(listener) = &self.cart_listener {
            listener(&self.cart_screen.cart);
        }
    }

    pub fn increase_selected_line(&mut self) {
        if let Some(id) = self.cart_screen.selected_line().map(|line| line.id()) {
            self.dispatch_cart(CartIntent::Increase { id });
        }
    }

    pub fn decrease_selected_line(&mut self) {
        if let Some(id) = self.cart_screen.selected_line().map(|line| line.id()) {
            self.dispatch_cart(CartIntent::Decrease { id });
        }
    }

    pub fn remove_selected_line(&mut self) {
        if let Some(id) = self.cart_screen.selected_line().map(|line| line.id()) {
            self.dispatch_cart(CartIntent::Remove { id });
        }
    }

    pub fn pay_cash(&mut self) {
        tracing::info!(total = %self.cart_screen.cart.total_price(), "Cash payment selected");
        self.show_alert("Cash payment", "You chose to pay with cash.");
    }

    pub fn pay_online(&mut self) {
        tracing::info!(total = %self.cart_screen.cart.total_price(), "Online payment selected");
        self.show_alert("Online payment", "You chose to pay online.");
    }

    // ========================================================================
    // Auth forms (MVI pattern)
    // ========================================================================

    pub fn dispatch_login(&mut self, intent: AuthIntent) {
        dispatch_mvi!(self, login, AuthReducer, intent);
    }

    pub fn dispatch_register(&mut self, intent: AuthIntent) {
        dispatch_mvi!(self, register, AuthReducer, intent);
    }

    pub fn submit_login(&mut self) {
        match self.login.login_form().submit() {
            Ok(outcome) => self.show_alert(outcome.title(), &outcome.message()),
            Err(err) => self.show_alert(err.title(), &err.to_string()),
        }
    }

    /// On success, also moves to the Login tab.
    pub fn submit_register(&mut self) {
        match self.register.register_form().submit() {
            Ok(outcome) => {
                self.show_alert(outcome.title(), &outcome.message());
                self.set_tab(Tab::Login);
            }
            Err(err) => self.show_alert(err.title(), &err.to_string()),
        }
    }

    // ========================================================================
    // Alert (MVI pattern)
    // ========================================================================

    pub fn show_alert(&mut self, title: &str, message: &str) {
        dispatch_mvi!(
            self,
            alert,
            AlertReducer,
            AlertIntent::Show {
                title: title.to_string(),
                message: message.to_string(),
            }
        );
    }

    pub fn dismiss_alert(&mut self) {
        dispatch_mvi!(self, alert, AlertReducer, AlertIntent::Dismiss);
    }
}
