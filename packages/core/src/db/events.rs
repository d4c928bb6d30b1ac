//! Template Domain Events
//!
//! Emitted by [`TemplateService`](crate::services::TemplateService) over a
//! tokio broadcast channel whenever a template is created, updated or deleted,
//! or when a save fails. Hosts subscribe to drive transient notifications
//! ("Template saved") and to refresh template lists.

use crate::models::TemplateDocument;

#[derive(Debug, Clone)]
pub enum TemplateEvent {
    /// First save of a template
    TemplateCreated(TemplateDocument),

    /// Save of an existing template
    TemplateUpdated(TemplateDocument),

    TemplateDeleted { id: String },

    /// A save was rejected or the store failed
    SaveFailed { slug: String, message: String },
}

impl TemplateEvent {
    pub fn event_type(&self) -> &str {
        match self {
            TemplateEvent::TemplateCreated(_) => "template:created",
            TemplateEvent::TemplateUpdated(_) => "template:updated",
            TemplateEvent::TemplateDeleted { .. } => "template:deleted",
            TemplateEvent::SaveFailed { .. } => "template:save-failed",
        }
    }

    /// Short user-facing message for a transient notification
    pub fn notification(&self) -> String {
        match self {
            TemplateEvent::TemplateCreated(doc) => format!("Template \"{}\" created", doc.name),
            TemplateEvent::TemplateUpdated(doc) => format!("Template \"{}\" saved", doc.name),
            TemplateEvent::TemplateDeleted { .. } => "Template deleted".to_string(),
            TemplateEvent::SaveFailed { message, .. } => format!("Save failed: {}", message),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TemplateEvent::SaveFailed { .. })
    }
}
