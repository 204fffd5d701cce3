//! # Session Module
//!
//! One [`Session`] is one browser-tab's worth of storefront state: the
//! catalog, the configuration, and every state type from [`crate::state`].
//! It dispatches [`Intent`] values (one per row of the interaction
//! contract) to the matching command and notifies snapshot listeners
//! after every state change.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Session Dispatch                               │
//! │                                                                     │
//! │  View ──► Intent ──► Session::apply ──► command fn ──► state change │
//! │   ▲                                                        │        │
//! │   │                                                        ▼        │
//! │   └──────── listener(&StorefrontView) ◄──── notify ◄── snapshot     │
//! │                                                                     │
//! │  Transitions run to completion in dispatch order; there is no       │
//! │  queueing and no async boundary anywhere.                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Mutex;

use serde::Deserialize;
use tracing::{debug, info};

use crate::commands;
use crate::commands::browse::StorefrontView;
use crate::error::ApiError;
use crate::state::{
    BrowseState, CartState, ConfigState, OverlayState, PresentationTarget, ThemeState,
};
use grocer_core::{Catalog, Category, ProductId};

// =============================================================================
// Intent
// =============================================================================

/// One user action from the interaction contract.
///
/// A view translates clicks and keystrokes into these and dispatches them
/// through [`Session::apply`]. `Login` is the header's inert control; it
/// exists so a view can wire the button, and it changes nothing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case", tag = "intent")]
pub enum Intent {
    /// Typing in the search box.
    SetQuery { query: String },
    /// The grid's ADD button and its "+" stepper.
    AddToCart { id: ProductId },
    /// The "-" stepper; the view passes quantity - 1.
    SetQuantity { id: ProductId, quantity: u32 },
    /// The Remove button inside the cart overlay.
    RemoveFromCart { id: ProductId },
    /// Load More under a category grid.
    LoadMore { category: Category },
    /// Show Less under a category grid.
    ShowLess { category: Category },
    /// The header cart icon.
    OpenCart,
    /// The cart overlay's close button.
    CloseCart,
    /// Proceed to Payment inside the cart overlay.
    ProceedToPayment,
    /// Continue Shopping on the payment acknowledgment.
    ContinueShopping,
    /// The header theme toggle.
    ToggleTheme,
    /// The header Login button. Inert.
    Login,
}

/// A snapshot listener registered through [`Session::subscribe`].
type Listener = Box<dyn Fn(&StorefrontView) + Send>;

// =============================================================================
// Session
// =============================================================================

/// The state-owning component behind one storefront session.
pub struct Session {
    catalog: Catalog,
    config: ConfigState,
    cart: CartState,
    browse: BrowseState,
    overlay: OverlayState,
    theme: ThemeState,
    listeners: Mutex<Vec<Listener>>,
}

impl Session {
    /// Creates a session over a validated catalog.
    ///
    /// ## Errors
    /// Fails when the catalog violates its data-definition invariants.
    /// That is a bug in the compiled-in data, surfaced at startup.
    pub fn new(
        catalog: Catalog,
        config: ConfigState,
        presentation: Box<dyn PresentationTarget>,
    ) -> Result<Self, ApiError> {
        catalog
            .validate()
            .map_err(|e| ApiError::internal(format!("catalog definition invalid: {e}")))?;

        info!(
            products = catalog.len(),
            store = %config.store_name,
            "session created"
        );

        Ok(Session {
            catalog,
            config,
            cart: CartState::new(),
            browse: BrowseState::new(),
            overlay: OverlayState::new(),
            theme: ThemeState::new(presentation),
            listeners: Mutex::new(Vec::new()),
        })
    }

    /// Registers a listener invoked with a fresh snapshot after every
    /// state change.
    pub fn subscribe(&self, listener: impl Fn(&StorefrontView) + Send + 'static) {
        self.listeners
            .lock()
            .expect("Listener mutex poisoned")
            .push(Box::new(listener));
    }

    /// Applies one intent and returns the snapshot a view should render.
    ///
    /// Successful state changes notify every subscribed listener with the
    /// same snapshot that is returned. A failed intent changes nothing
    /// and notifies nobody.
    pub fn apply(&self, intent: Intent) -> Result<StorefrontView, ApiError> {
        debug!(?intent, "apply intent");

        let mutated = match intent {
            Intent::SetQuery { ref query } => {
                commands::browse::set_query(&self.browse, query)?;
                true
            }
            Intent::AddToCart { id } => {
                commands::cart::add_to_cart(&self.catalog, &self.cart, id)?;
                true
            }
            Intent::SetQuantity { id, quantity } => {
                commands::cart::update_cart_item(&self.cart, id, quantity);
                true
            }
            Intent::RemoveFromCart { id } => {
                commands::cart::remove_from_cart(&self.cart, id);
                true
            }
            Intent::LoadMore { category } => {
                commands::browse::load_more(&self.browse, category);
                true
            }
            Intent::ShowLess { category } => {
                commands::browse::show_less(&self.browse, category);
                true
            }
            Intent::OpenCart => {
                commands::overlay::open_cart(&self.overlay);
                true
            }
            Intent::CloseCart => {
                commands::overlay::close_cart(&self.overlay);
                true
            }
            Intent::ProceedToPayment => {
                commands::overlay::proceed_to_payment(&self.cart, &self.overlay)?;
                true
            }
            Intent::ContinueShopping => {
                commands::overlay::continue_shopping(&self.overlay);
                true
            }
            Intent::ToggleTheme => {
                commands::theme::toggle_theme(&self.theme);
                true
            }
            Intent::Login => false,
        };

        let view = self.snapshot();
        if mutated {
            let listeners = self.listeners.lock().expect("Listener mutex poisoned");
            for listener in listeners.iter() {
                listener(&view);
            }
        }
        Ok(view)
    }

    /// Builds the current render-ready snapshot without changing state.
    pub fn snapshot(&self) -> StorefrontView {
        commands::browse::storefront_view(
            &self.catalog,
            &self.config,
            &self.browse,
            &self.cart,
            &self.theme,
            &self.overlay,
        )
    }

    /// The cart contents, for views that render the overlay body.
    pub fn cart_view(&self) -> commands::cart::CartView {
        commands::cart::get_cart(&self.cart)
    }

    /// Stored quantity for a product, 0 if absent. Views use this to
    /// compute the "-" stepper's `quantity - 1`.
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.cart.with_cart(|c| c.quantity_of(id))
    }

    /// The session configuration.
    pub fn config(&self) -> &ConfigState {
        &self.config
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::state::DarkModeFlag;

    fn session() -> Session {
        Session::new(
            Catalog::builtin(),
            ConfigState::default(),
            Box::new(DarkModeFlag::new()),
        )
        .unwrap()
    }

    #[test]
    fn test_listeners_fire_on_mutation_only() {
        let session = session();
        let fired = Arc::new(AtomicUsize::new(0));
        let seen = fired.clone();
        session.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        session
            .apply(Intent::AddToCart {
                id: ProductId::new(1),
            })
            .unwrap();
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // inert login: no notification
        session.apply(Intent::Login).unwrap();
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // failed intent: no notification
        session
            .apply(Intent::AddToCart {
                id: ProductId::new(999),
            })
            .unwrap_err();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_apply_returns_fresh_snapshot() {
        let session = session();

        let view = session
            .apply(Intent::AddToCart {
                id: ProductId::new(1),
            })
            .unwrap();
        assert_eq!(view.cart_badge, 1);
        assert_eq!(view.sections[0].tiles[0].in_cart, 1);
    }

    #[test]
    fn test_decrement_via_set_quantity() {
        let session = session();
        let id = ProductId::new(1);

        session.apply(Intent::AddToCart { id }).unwrap();
        session.apply(Intent::AddToCart { id }).unwrap();
        assert_eq!(session.quantity_of(id), 2);

        let quantity = session.quantity_of(id) - 1;
        session.apply(Intent::SetQuantity { id, quantity }).unwrap();
        assert_eq!(session.quantity_of(id), 1);

        let quantity = session.quantity_of(id) - 1;
        session.apply(Intent::SetQuantity { id, quantity }).unwrap();
        assert_eq!(session.quantity_of(id), 0);
        assert!(session.cart_view().lines.is_empty());
    }

    #[test]
    fn test_rejects_invalid_catalog() {
        let catalog = Catalog::from_parts(vec![], vec![]);
        let result = Session::new(
            catalog,
            ConfigState::default(),
            Box::new(DarkModeFlag::new()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_intent_deserializes_from_json() {
        let intent: Intent =
            serde_json::from_str(r#"{"intent":"add_to_cart","id":3}"#).unwrap();
        assert_eq!(
            intent,
            Intent::AddToCart {
                id: ProductId::new(3)
            }
        );

        let intent: Intent =
            serde_json::from_str(r#"{"intent":"set_query","query":"milk"}"#).unwrap();
        assert_eq!(
            intent,
            Intent::SetQuery {
                query: "milk".to_string()
            }
        );
    }
}
