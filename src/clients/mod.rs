pub mod paginated;
pub mod resource;

// Re-export key types for convenience
pub use paginated::{Paginated, PaginatedClient};
pub use resource::{ResourceClient, ResourceClientBuilder};
