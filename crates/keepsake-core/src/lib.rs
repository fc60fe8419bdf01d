//! keepsake core: the favorites widget.
//!
//! Hosts construct a [`state::FavoritesState`] over an injected storage
//! backend at startup, bind one [`button::FavoriteButton`] per favorite
//! control on the page, and render the favorites gallery and navigation
//! from that state. Only the state writes to storage.

// Re-exports from keepsake-types (foundation types).
pub use keepsake_types::config;
pub use keepsake_types::error;
pub use keepsake_types::lesson;

pub mod button;
pub mod catalog;
pub mod control;
pub mod gallery;
pub mod nav;
pub mod state;
pub use keepsake_store as store;

pub use button::FavoriteButton;
pub use control::Control;
pub use state::FavoritesState;
