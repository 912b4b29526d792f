// Favorites: the persisted set of saved career ids.

pub mod handlers;
pub mod registry;
pub mod store;
