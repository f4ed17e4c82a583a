use crate::{FormError, FormPhase, FormResult};

use labdesk_client::IdentityCreateBody;
use labdesk_core::{IdentityStatus, PermissionMap, RoleSet};

/// Draft state of the "new identity" modal.
///
/// Starts with empty strings and an all-false role map. The submit predicate
/// is the only gate on required fields - the transport layer does not
/// re-validate.
#[derive(Debug, Default)]
pub struct CreateIdentityForm {
    phase: FormPhase,
    pub email: String,
    pub identity_name: String,
    pub alias: String,
    pub password: String,
    pub roles: RoleSet,
    pub identity_status: IdentityStatus,
    /// Permissions edited as free-form structured text, parsed on submit
    pub permissions_text: String,
    last_error: Option<String>,
}

impl CreateIdentityForm {
    /// Open the modal with a fresh draft
    pub fn open() -> Self {
        Self {
            phase: FormPhase::Editing,
            roles: RoleSet::all_false(),
            ..Default::default()
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether the submit button is enabled.
    ///
    /// All four string fields must be non-empty after trimming, and the form
    /// must be in the editing phase.
    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Editing
            && !self.email.trim().is_empty()
            && !self.identity_name.trim().is_empty()
            && !self.alias.trim().is_empty()
            && !self.password.trim().is_empty()
    }

    /// Build the create request body from the draft.
    ///
    /// A permissions parse failure blocks submission without discarding the
    /// typed text; the form stays editable.
    pub fn build_body(&self) -> FormResult<IdentityCreateBody> {
        let email = non_empty(&self.email, "email")?;
        let identity_name = non_empty(&self.identity_name, "identityName")?;
        let alias = non_empty(&self.alias, "alias")?;
        let password = non_empty(&self.password, "password")?;
        let permissions = parse_permissions(&self.permissions_text)?;

        Ok(IdentityCreateBody {
            email,
            identity_name,
            alias,
            password,
            roles: self.roles.clone(),
            permissions,
            identity_status: self.identity_status,
        })
    }

    /// Editing -> Submitting
    pub fn submit_started(&mut self) -> FormResult<()> {
        if self.phase != FormPhase::Editing {
            return Err(FormError::invalid_phase("Editing", self.phase));
        }
        self.phase = FormPhase::Submitting;
        Ok(())
    }

    /// Submitting -> Closed
    pub fn submit_succeeded(&mut self) {
        self.phase = FormPhase::Closed;
        self.last_error = None;
    }

    /// Submitting -> Editing, draft and typed text retained
    pub fn submit_failed<S: Into<String>>(&mut self, message: S) {
        self.phase = FormPhase::Editing;
        self.last_error = Some(message.into());
    }

    /// Close the modal. An in-flight request is not cancelled; its late
    /// response has no state to update here.
    pub fn close(&mut self) {
        self.phase = FormPhase::Closed;
    }
}

pub(crate) fn non_empty(value: &str, field: &'static str) -> FormResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::missing_field(field));
    }
    Ok(trimmed.to_string())
}

/// Parse the free-form permissions text into a map.
/// Empty text means no permissions, not an error.
pub(crate) fn parse_permissions(text: &str) -> FormResult<PermissionMap> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(PermissionMap::new());
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(_) => Err(FormError::permissions_parse("expected a JSON object")),
        Err(e) => Err(FormError::permissions_parse(e.to_string())),
    }
}
