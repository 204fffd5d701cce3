//! # State Module
//!
//! Manages session state for the storefront.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, each
//! concern gets its own state type:
//!
//! 1. **Separation of Concerns**: each state type has one responsibility
//! 2. **Testability**: every type can be exercised alone
//! 3. **Clear Command Signatures**: commands declare exactly what they need
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                               │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                        Session                                │  │
//! │  │  owns one of each, plus the Catalog                           │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │        │           │             │            │           │         │
//! │        ▼           ▼             ▼            ▼           ▼         │
//! │  ┌──────────┐ ┌───────────┐ ┌──────────┐ ┌─────────┐ ┌──────────┐  │
//! │  │CartState │ │BrowseState│ │ Overlay  │ │ Theme   │ │ Config   │  │
//! │  │          │ │           │ │ State    │ │ State   │ │ State    │  │
//! │  │Arc<Mutex<│ │ query +   │ │ modal    │ │ flag +  │ │ store    │  │
//! │  │  Cart>>  │ │ 2 pagers  │ │ switch   │ │ effect  │ │ name, ₹  │  │
//! │  └──────────┘ └───────────┘ └──────────┘ └─────────┘ └──────────┘  │
//! │                                                                     │
//! │  THREAD SAFETY:                                                     │
//! │  Session semantics are single-actor (every transition completes     │
//! │  before the next intent). The mutexes exist so the session can be   │
//! │  shared with view callbacks, never for parallel mutation.           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod browse;
mod cart;
mod config;
mod overlay;
mod theme;

pub use browse::BrowseState;
pub use cart::CartState;
pub use config::ConfigState;
pub use overlay::{Overlay, OverlayState};
pub use theme::{DarkModeFlag, PresentationTarget, ThemeState};
