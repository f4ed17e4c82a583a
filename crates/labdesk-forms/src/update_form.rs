use crate::create_form::{non_empty, parse_permissions};
use crate::{FormError, FormPhase, FormResult};

use labdesk_client::IdentityUpdateBody;
use labdesk_core::{Identity, IdentityStatus, RoleKey, RoleSet};

use log::debug;

/// Draft state of the "edit identity" modal.
///
/// Opening starts a detail fetch; the fetched entity seeds the draft exactly
/// once. Later detail refetches never overwrite in-progress edits: the seed
/// is one-way and subsequent seeds are ignored once editing has begun.
#[derive(Debug)]
pub struct UpdateIdentityForm {
    phase: FormPhase,
    identity_id: String,
    baseline: Option<Identity>,
    baseline_permissions_text: String,
    pub email: String,
    pub identity_name: String,
    pub alias: String,
    /// Empty means "keep current password"
    pub password: String,
    pub roles: RoleSet,
    roles_touched: bool,
    pub identity_status: IdentityStatus,
    pub permissions_text: String,
    last_error: Option<String>,
}

impl UpdateIdentityForm {
    /// Open the modal for an identity; the caller starts the detail fetch
    pub fn open<S: Into<String>>(identity_id: S) -> Self {
        Self {
            phase: FormPhase::Loading,
            identity_id: identity_id.into(),
            baseline: None,
            baseline_permissions_text: String::new(),
            email: String::new(),
            identity_name: String::new(),
            alias: String::new(),
            password: String::new(),
            roles: RoleSet::new(),
            roles_touched: false,
            identity_status: IdentityStatus::default(),
            permissions_text: String::new(),
            last_error: None,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn identity_id(&self) -> &str {
        &self.identity_id
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Seed the draft from the fetched detail. Applied only while loading;
    /// a refetch arriving mid-edit is dropped rather than clobbering the
    /// user's draft.
    pub fn seed(&mut self, identity: Identity) {
        if self.phase != FormPhase::Loading {
            debug!("ignoring seed for {} outside loading phase", self.identity_id);
            return;
        }

        self.email = identity.email.clone();
        self.identity_name = identity.identity_name.clone();
        self.alias = identity.alias.clone().unwrap_or_default();
        self.roles = identity.roles.clone();
        self.identity_status = identity.identity_status;
        self.permissions_text = identity
            .permissions
            .as_ref()
            .map(|p| serde_json::to_string_pretty(p).unwrap_or_default())
            .unwrap_or_default();
        self.baseline_permissions_text = self.permissions_text.clone();
        self.baseline = Some(identity);
        self.roles_touched = false;
        self.phase = FormPhase::Editing;
    }

    pub fn grant_role(&mut self, role: RoleKey) {
        self.roles.grant(role);
        self.roles_touched = true;
    }

    pub fn revoke_role(&mut self, role: RoleKey) {
        self.roles.revoke(role);
        self.roles_touched = true;
    }

    /// Build the partial patch body: only fields that differ from the seeded
    /// baseline are sent. The full roles map is serialized whenever roles
    /// were touched, never a diff.
    pub fn build_body(&self) -> FormResult<IdentityUpdateBody> {
        let Some(baseline) = &self.baseline else {
            return Err(FormError::invalid_phase("Editing", self.phase));
        };

        let email = non_empty(&self.email, "email")?;
        let identity_name = non_empty(&self.identity_name, "identityName")?;

        let permissions = if self.permissions_text.trim() != self.baseline_permissions_text.trim()
        {
            Some(parse_permissions(&self.permissions_text)?)
        } else {
            None
        };

        let alias = self.alias.trim();
        let baseline_alias = baseline.alias.as_deref().unwrap_or("");

        Ok(IdentityUpdateBody {
            identity_id: self.identity_id.clone(),
            email: (email != baseline.email).then_some(email),
            identity_name: (identity_name != baseline.identity_name).then_some(identity_name),
            alias: (alias != baseline_alias).then(|| alias.to_string()),
            password: {
                let p = self.password.trim();
                (!p.is_empty()).then(|| p.to_string())
            },
            roles: self.roles_touched.then(|| self.roles.clone()),
            permissions,
            identity_status: (self.identity_status != baseline.identity_status)
                .then_some(self.identity_status),
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

    /// Submitting -> Editing, draft retained for retry
    pub fn submit_failed<S: Into<String>>(&mut self, message: S) {
        self.phase = FormPhase::Editing;
        self.last_error = Some(message.into());
    }

    pub fn close(&mut self) {
        self.phase = FormPhase::Closed;
    }
}
