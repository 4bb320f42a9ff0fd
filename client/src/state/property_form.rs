//! Add-property form state and validation.
//!
//! Validation runs before any network call; a failed create keeps the draft so
//! the user can correct and resubmit.

#[cfg(test)]
#[path = "property_form_test.rs"]
mod property_form_test;

use crate::net::types::NewProperty;

pub const CREATE_FAILED_TEXT: &str = "Failed to create property. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,
}

/// Form fields, one per text control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Address,
    Description,
    Specifications,
}

/// Unsubmitted form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyDraft {
    pub address: String,
    pub description: String,
    pub specifications: String,
}

impl PropertyDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Address => &self.address,
            DraftField::Description => &self.description,
            DraftField::Specifications => &self.specifications,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Address => self.address = value,
            DraftField::Description => self.description = value,
            DraftField::Specifications => self.specifications = value,
        }
    }

    /// Build the create payload from trimmed fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] if any field is blank.
    pub fn validate(&self) -> Result<NewProperty, ValidationError> {
        let address = self.address.trim();
        let description = self.description.trim();
        let specifications = self.specifications.trim();
        if address.is_empty() || description.is_empty() || specifications.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(NewProperty {
            address: address.to_owned(),
            description: description.to_owned(),
            specifications: specifications.to_owned(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyFormState {
    pub draft: PropertyDraft,
    pub submitting: bool,
    pub error: Option<String>,
}

impl PropertyFormState {
    /// Validate and enter the submitting state.
    ///
    /// Returns the payload to send, or `None` when validation failed (the
    /// error is set) or a submit is already pending.
    pub fn begin_submit(&mut self) -> Option<NewProperty> {
        if self.submitting {
            return None;
        }
        match self.draft.validate() {
            Ok(payload) => {
                self.submitting = true;
                self.error = None;
                Some(payload)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Reset after a successful create.
    pub fn submit_succeeded(&mut self) {
        *self = Self::default();
    }

    /// Keep the draft and show the retry message.
    pub fn submit_failed(&mut self) {
        self.submitting = false;
        self.error = Some(CREATE_FAILED_TEXT.to_owned());
    }
}
