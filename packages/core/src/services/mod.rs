//! Business Services
//!
//! - `TemplateService` - load, save and delete template documents, emit
//!   template events, and open editor sessions
//!
//! Services coordinate between the database layer and the editor.

pub mod error;
pub mod template_service;

pub use error::TemplateServiceError;
pub use template_service::TemplateService;
