//! Top-level tabs and the shop's screen stack.

use crate::catalog::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Shop,
    Login,
    Register,
}

pub const TABS: [Tab; 3] = [Tab::Shop, Tab::Login, Tab::Register];

impl Tab {
    pub fn title(self) -> &'static str {
        match self {
            Tab::Shop => "Shop",
            Tab::Login => "Login",
            Tab::Register => "Register",
        }
    }

    pub fn index(self) -> usize {
        TABS.iter().position(|tab| *tab == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        TABS[(self.index() + 1) % TABS.len()]
    }

    pub fn prev(self) -> Self {
        TABS[(self.index() + TABS.len() - 1) % TABS.len()]
    }
}

/// Screens reachable inside the Shop tab.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    ProductList,
    /// Carries its own copy of the product.
    ProductDetail { product: Product },
    Cart,
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::ProductList => "Products",
            Route::ProductDetail { .. } => "Product Detail",
            Route::Cart => "Cart",
        }
    }
}

/// Linear stack rooted at the product list. The root is never popped.
#[derive(Debug, Clone, PartialEq)]
pub struct NavStack {
    routes: Vec<Route>,
}

impl Default for NavStack {
    fn default() -> Self {
        Self {
            routes: vec![Route::ProductList],
        }
    }
}

impl NavStack {
    pub fn push(&mut self, route: Route) {
        tracing::debug!(route = route.title(), depth = self.routes.len() + 1, "Navigate");
        self.routes.push(route);
    }

    /// Pop the top route. Returns `None` when already at the root.
    pub fn pop(&mut self) -> Option<Route> {
        if self.routes.len() <= 1 {
            return None;
        }
        self.routes.pop()
    }

    pub fn current(&self) -> &Route {
        self.routes.last().unwrap_or(&Route::ProductList)
    }

    /// Route titles from root to top, for the breadcrumb.
    pub fn breadcrumb(&self) -> Vec<&'static str> {
        self.routes.iter().map(Route::title).collect()
    }
}
