// Browse: filter the catalog by category, interests, salary and free text.

pub mod filter;
pub mod handlers;
