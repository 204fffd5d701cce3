//! # Config Commands
//!
//! Configuration retrieval for views.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current application configuration.
///
/// ## When Used
/// - View startup (header store name)
/// - Currency formatting
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
