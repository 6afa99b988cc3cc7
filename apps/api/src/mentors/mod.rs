// Mentor directory: seed loading, slug identifiers, filtering and pagination.

pub mod directory;
pub mod handlers;
pub mod models;
pub mod slug;
