//! Global application state

use std::sync::Arc;

use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{AuthEvent, AuthPhase, CredentialVerifier, DemoCredentials};
use crate::catalog::{self, ProductDraft};
use crate::checkout::{self, Cart};
use crate::data::{sample_products, sample_sales};
use crate::session::{BrowserSession, SessionStore};
use crate::types::{Notification, PaymentMethod, Product, Sale, View};

/// Simulated latency of the credential check, so the authenticating
/// state is observable in the UI.
const LOGIN_CHECK_MS: u32 = 450;
/// How long a notification banner stays up.
const NOTICE_DISMISS_MS: u32 = 4000;

/// Global application state: one clonable bundle of signals provided
/// via context. The verifier and session store are swappable
/// collaborators; the UI only ever talks to the traits.
#[derive(Clone)]
pub struct AppState {
    /// Login lifecycle phase
    pub auth: RwSignal<AuthPhase>,
    /// Currently selected view
    pub view: RwSignal<View>,
    /// Product catalog
    pub products: RwSignal<Vec<Product>>,
    /// Completed sales, oldest first
    pub sales: RwSignal<Vec<Sale>>,
    /// In-progress POS cart
    pub cart: RwSignal<Cart>,
    /// Current banner, if any
    pub notification: RwSignal<Option<Notification>>,
    /// Bumped per notification so a stale dismiss timer can tell it lost
    notice_seq: RwSignal<u64>,
    verifier: Arc<dyn CredentialVerifier>,
    session: Arc<dyn SessionStore>,
}

impl AppState {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, session: Arc<dyn SessionStore>) -> Self {
        // The persisted flag decides the initial phase.
        let phase = if session.load() {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Unauthenticated
        };

        Self {
            auth: RwSignal::new(phase),
            view: RwSignal::new(View::Dashboard),
            products: RwSignal::new(sample_products()),
            sales: RwSignal::new(sample_sales()),
            cart: RwSignal::new(Cart::new()),
            notification: RwSignal::new(None),
            notice_seq: RwSignal::new(0),
            verifier,
            session,
        }
    }

    /// Submit a login attempt. The fields are passed to the verifier
    /// untouched; empty input is a failed attempt like any other.
    pub fn login(&self, email: String, password: String) {
        if self.auth.get_untracked() != AuthPhase::Unauthenticated {
            return;
        }
        self.auth.update(|p| *p = p.step(AuthEvent::Submitted));

        let state = self.clone();
        spawn_local(async move {
            TimeoutFuture::new(LOGIN_CHECK_MS).await;

            if state.verifier.verify(&email, &password) {
                state.session.persist();
                state.auth.update(|p| *p = p.step(AuthEvent::Verified));
                state.view.set(View::Dashboard);
                tracing::info!("login succeeded for {}", email);
                state.notify(Notification::success("Welcome back!"));
            } else {
                state.auth.update(|p| *p = p.step(AuthEvent::Rejected));
                tracing::warn!("login rejected for {}", email);
                state.notify(Notification::error("Invalid email or password"));
            }
        });
    }

    pub fn logout(&self) {
        self.session.clear();
        self.auth.update(|p| *p = p.step(AuthEvent::LoggedOut));
        self.cart.set(Cart::new());
        self.view.set(View::Dashboard);
        tracing::info!("logged out");
    }

    /// Show a banner and dismiss it after a few seconds, unless a newer
    /// one has replaced it in the meantime.
    pub fn notify(&self, notification: Notification) {
        let seq = self.notice_seq.get_untracked() + 1;
        self.notice_seq.set(seq);
        self.notification.set(Some(notification));

        let state = self.clone();
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_DISMISS_MS).await;
            if state.notice_seq.get_untracked() == seq {
                state.notification.set(None);
            }
        });
    }

    // ----- catalog -----

    /// Validate and store a product draft. Returns whether it was
    /// accepted, so the form knows when to close.
    pub fn save_product(&self, draft: &ProductDraft) -> bool {
        match draft.validate() {
            Ok(product) => {
                let verb = if draft.id.is_some() { "updated" } else { "added" };
                let name = product.name.clone();
                self.products.update(|ps| catalog::upsert(ps, product));
                tracing::info!("product {} {}", name, verb);
                self.notify(Notification::success(format!("{name} {verb}")));
                true
            }
            Err(err) => {
                self.notify(Notification::error(err.to_string()));
                false
            }
        }
    }

    pub fn delete_product(&self, id: &str) {
        let name = self
            .products
            .with_untracked(|ps| ps.iter().find(|p| p.id == id).map(|p| p.name.clone()));
        let Some(name) = name else { return };

        self.products.update(|ps| catalog::remove(ps, id));
        // A deleted product can't stay in the cart.
        self.cart.update(|c| c.remove(id));
        self.notify(Notification::success(format!("{name} deleted")));
    }

    // ----- POS -----

    /// Put one unit in the cart, capped by the available stock.
    pub fn add_to_cart(&self, product_id: &str) {
        let product = self
            .products
            .with_untracked(|ps| ps.iter().find(|p| p.id == product_id).cloned());
        let Some(product) = product else { return };

        let in_cart = self.cart.with_untracked(|c| c.quantity_of(product_id));
        if in_cart >= product.stock {
            self.notify(Notification::warning(format!(
                "Only {} × {} in stock",
                product.stock, product.name
            )));
            return;
        }

        self.cart.update(|c| c.add(&product));
    }

    pub fn decrease_cart_line(&self, product_id: &str) {
        self.cart.update(|c| c.decrease(product_id));
    }

    pub fn remove_cart_line(&self, product_id: &str) {
        self.cart.update(|c| c.remove(product_id));
    }

    /// Turn the cart into a recorded sale: deduct stock, append the
    /// sale, clear the cart. Failures surface as error banners and
    /// leave everything untouched.
    pub fn complete_sale(&self, payment_method: PaymentMethod) {
        let cart = self.cart.get_untracked();
        let seq = self.sales.with_untracked(|s| s.len()) + 1;
        let mut products = self.products.get_untracked();

        let low_before: Vec<String> = products
            .iter()
            .filter(|p| p.is_low_stock())
            .map(|p| p.id.clone())
            .collect();

        match checkout::checkout(&mut products, &cart, payment_method, Utc::now(), seq) {
            Ok(sale) => {
                let newly_low: Vec<String> = products
                    .iter()
                    .filter(|p| p.is_low_stock() && !low_before.contains(&p.id))
                    .map(|p| p.name.clone())
                    .collect();

                let receipt = sale.receipt_number.clone();
                self.products.set(products);
                self.sales.update(|s| s.push(sale));
                self.cart.set(Cart::new());
                tracing::info!("sale {} completed", receipt);

                if newly_low.is_empty() {
                    self.notify(Notification::success(format!("Sale {receipt} completed")));
                } else {
                    self.notify(Notification::warning(format!(
                        "Sale {receipt} completed. Low stock: {}",
                        newly_low.join(", ")
                    )));
                }
            }
            Err(err) => {
                tracing::warn!("checkout failed: {}", err);
                self.notify(Notification::error(err.to_string()));
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(DemoCredentials), Arc::new(BrowserSession))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySession;

    fn state_with_session(session: MemorySession) -> AppState {
        AppState::new(Arc::new(DemoCredentials), Arc::new(session))
    }

    #[test]
    fn test_initial_phase_follows_persisted_flag() {
        let session = MemorySession::new();
        session.persist();
        let state = state_with_session(session);
        assert_eq!(state.auth.get_untracked(), AuthPhase::Authenticated);
        assert_eq!(state.view.get_untracked(), View::Dashboard);
    }

    #[test]
    fn test_fresh_session_starts_unauthenticated() {
        let state = state_with_session(MemorySession::new());
        assert_eq!(state.auth.get_untracked(), AuthPhase::Unauthenticated);
    }

    #[test]
    fn test_stale_flag_value_is_not_trusted() {
        let state = state_with_session(MemorySession::with_raw_value("yes"));
        assert_eq!(state.auth.get_untracked(), AuthPhase::Unauthenticated);
    }
}
