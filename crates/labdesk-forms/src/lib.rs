//! Local draft state for the identity create/update modals.
//!
//! Each form owns its draft fields and walks the modal state machine:
//! closed, loading (update only), editing, submitting. Validation happens
//! here, before any transport call; a failed submission returns to editing
//! with the draft intact so the user can retry without re-entering data.

pub(crate) mod create_form;
pub(crate) mod error;
pub(crate) mod form_phase;
pub(crate) mod update_form;

pub use create_form::CreateIdentityForm;
pub use error::{FormError, Result as FormResult};
pub use form_phase::FormPhase;
pub use update_form::UpdateIdentityForm;
