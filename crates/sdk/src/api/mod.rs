//! Resource-scoped API services.
//!
//! Each service is a stateless view over the client's transport: every
//! method maps to exactly one verb + path + body. Authentication, retry and
//! error normalization all live in the transport.

pub mod categories;
pub mod documents;
pub mod export;
pub mod import;
pub mod search;
pub mod spaces;
pub mod users;

pub use categories::CategoriesApi;
pub use documents::DocumentsApi;
pub use export::ExportApi;
pub use import::ImportApi;
pub use search::SearchApi;
pub use spaces::SpacesApi;
pub use users::UsersApi;
