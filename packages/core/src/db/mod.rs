//! Database Layer
//!
//! Template documents are persisted through the [`TemplateStore`] trait:
//!
//! - [`InMemoryTemplateStore`] - `RwLock<HashMap>` backend, always available
//! - `SurrealTemplateStore` - embedded SurrealDB on RocksDB, behind the
//!   `surrealdb` cargo feature
//!
//! Domain events describing template changes live in [`events`].

mod error;
pub mod events;
mod memory_store;
#[cfg(feature = "surrealdb")]
mod surreal_store;
mod template_store;

pub use error::StoreError;
pub use events::TemplateEvent;
pub use memory_store::InMemoryTemplateStore;
#[cfg(feature = "surrealdb")]
pub use surreal_store::SurrealTemplateStore;
pub use template_store::{DeleteResult, TemplateStore};
