//! # Grocer Storefront Library
//!
//! The session layer for the Grocer storefront, plus the line-oriented
//! text view used as the demo rendering collaborator.
//!
//! ## Module Organization
//! ```text
//! grocer_storefront/
//! ├── lib.rs          ◄─── You are here (startup & REPL view)
//! ├── session.rs      ◄─── Session, Intent dispatch, listeners
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── CartState (Arc<Mutex<Cart>>)
//! │   ├── browse.rs   ◄─── Shared query + per-category pagers
//! │   ├── overlay.rs  ◄─── Cart / payment-success modal switch
//! │   ├── theme.rs    ◄─── Theme flag + presentation effect
//! │   └── config.rs   ◄─── Store name, currency symbol
//! ├── commands/
//! │   ├── browse.rs   ◄─── Search, pagination, storefront view
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── overlay.rs  ◄─── Modal transitions
//! │   ├── theme.rs    ◄─── Dark mode toggle
//! │   └── config.rs   ◄─── Config retrieval
//! ├── render.rs       ◄─── Snapshot → text
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from environment + defaults
//! 3. Validate the built-in catalog (data-definition assertions)
//! 4. Create the session (empty cart, fresh pagers, light theme)
//! 5. Subscribe the renderer and enter the REPL

pub mod commands;
pub mod error;
pub mod render;
pub mod session;
pub mod state;

use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ApiError;
use grocer_core::{Catalog, Category, ProductId};
use session::{Intent, Session};
use state::{ConfigState, DarkModeFlag};

// =============================================================================
// REPL Input
// =============================================================================

/// One parsed REPL line.
///
/// Most lines map straight to an [`Intent`]. `Decrement` is the "-"
/// stepper: the view resolves the current quantity first and dispatches
/// `SetQuantity(quantity - 1)`, mirroring how the grid control works.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Intent(Intent),
    /// The "-" stepper for a product.
    Decrement(ProductId),
    /// Print the cart overlay body.
    ShowCartBody,
    /// Print the snapshot as JSON.
    Dump,
    Help,
    Quit,
    Unknown(String),
}

/// Parses one REPL line.
///
/// Grammar (one command per line, ids are catalog ids):
/// ```text
/// search [text]   add <id>    dec <id>    remove <id>
/// more <produce|dairy>        less <produce|dairy>
/// cart    close    pay    continue    theme    login
/// dump    help     quit
/// ```
pub fn parse_line(line: &str) -> ReplCommand {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    let parse_id = |rest: &str| rest.parse::<u32>().ok().map(ProductId::new);
    let parse_category = |rest: &str| match rest {
        "produce" => Some(Category::Produce),
        "dairy" => Some(Category::Dairy),
        _ => None,
    };

    match word {
        "search" => ReplCommand::Intent(Intent::SetQuery {
            query: rest.to_string(),
        }),
        "add" | "+" => match parse_id(rest) {
            Some(id) => ReplCommand::Intent(Intent::AddToCart { id }),
            None => ReplCommand::Unknown(line.to_string()),
        },
        "dec" | "-" => match parse_id(rest) {
            Some(id) => ReplCommand::Decrement(id),
            None => ReplCommand::Unknown(line.to_string()),
        },
        "remove" => match parse_id(rest) {
            Some(id) => ReplCommand::Intent(Intent::RemoveFromCart { id }),
            None => ReplCommand::Unknown(line.to_string()),
        },
        "more" => match parse_category(rest) {
            Some(category) => ReplCommand::Intent(Intent::LoadMore { category }),
            None => ReplCommand::Unknown(line.to_string()),
        },
        "less" => match parse_category(rest) {
            Some(category) => ReplCommand::Intent(Intent::ShowLess { category }),
            None => ReplCommand::Unknown(line.to_string()),
        },
        "cart" => ReplCommand::ShowCartBody,
        "close" => ReplCommand::Intent(Intent::CloseCart),
        "pay" => ReplCommand::Intent(Intent::ProceedToPayment),
        "continue" => ReplCommand::Intent(Intent::ContinueShopping),
        "theme" => ReplCommand::Intent(Intent::ToggleTheme),
        "login" => ReplCommand::Intent(Intent::Login),
        "dump" => ReplCommand::Dump,
        "help" => ReplCommand::Help,
        "quit" | "exit" => ReplCommand::Quit,
        "" => ReplCommand::Unknown(String::new()),
        _ => ReplCommand::Unknown(line.to_string()),
    }
}

const HELP: &str = "\
commands:
  search [text]        filter both grids by name (empty clears)
  add <id>             add one unit (ADD / the + stepper)
  dec <id>             remove one unit (the - stepper)
  remove <id>          drop the line from the cart
  more <produce|dairy> load one more page
  less <produce|dairy> collapse back to one page
  cart                 open the cart overlay
  close                close the cart overlay
  pay                  proceed to payment (cart must be non-empty)
  continue             dismiss the payment acknowledgment
  theme                toggle dark mode
  login                the inert header button
  dump                 print the snapshot as JSON
  quit                 leave";

// =============================================================================
// Startup
// =============================================================================

/// Runs the storefront REPL.
///
/// ## Startup Sequence
/// Logging first, then configuration, then the session over the validated
/// built-in catalog. A logging listener subscribes to the session; the
/// REPL itself redraws from the snapshot each dispatch returns.
pub fn run() -> Result<(), ApiError> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(store = %config.store_name, "starting Grocer storefront");

    let session = Session::new(Catalog::builtin(), config, Box::new(DarkModeFlag::new()))?;

    // The REPL prints after each dispatch; the subscription keeps a log
    // trail of every state change alongside it.
    session.subscribe(|view| {
        tracing::debug!(
            badge = view.cart_badge,
            query = %view.query,
            "snapshot updated"
        );
    });

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!(
        "{}",
        render::render_storefront(&session.snapshot(), session.config())
    );
    println!("type `help` for commands");

    loop {
        print!("> ");
        let _ = stdout.flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break; // EOF
        }

        match parse_line(&line) {
            ReplCommand::Quit => break,
            ReplCommand::Help => println!("{HELP}"),
            ReplCommand::Dump => {
                let json = serde_json::to_string_pretty(&session.snapshot())
                    .map_err(|e| ApiError::internal(e.to_string()))?;
                println!("{json}");
            }
            ReplCommand::ShowCartBody => {
                session.apply(Intent::OpenCart)?;
                println!(
                    "{}",
                    render::render_cart(&session.cart_view(), session.config())
                );
            }
            ReplCommand::Decrement(id) => {
                let quantity = session.quantity_of(id);
                if quantity == 0 {
                    println!("#{id} is not in the cart");
                    continue;
                }
                dispatch(
                    &session,
                    Intent::SetQuantity {
                        id,
                        quantity: quantity - 1,
                    },
                );
            }
            ReplCommand::Intent(intent) => dispatch(&session, intent),
            ReplCommand::Unknown(line) => {
                if !line.is_empty() {
                    println!("unknown command: {line} (try `help`)");
                }
            }
        }
    }

    Ok(())
}

/// Applies one intent and prints the outcome.
fn dispatch(session: &Session, intent: Intent) {
    match session.apply(intent) {
        Ok(view) => {
            println!("{}", render::render_storefront(&view, session.config()));
            if view.overlay == state::Overlay::Cart {
                println!(
                    "{}",
                    render::render_cart(&session.cart_view(), session.config())
                );
            }
        }
        Err(err) => println!("{err}"),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - show debug messages
/// - `RUST_LOG=grocer=trace` - trace for grocer crates only
/// - Default: info, debug for the grocer crates
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,grocer=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// =============================================================================
// Unit Tests
// =============================================================================
