/// Phase of a modal form.
///
/// Legal transitions:
/// `Closed -> Loading` (update) or `Closed -> Editing` (create),
/// `Loading -> Editing` on seed, `Editing -> Submitting` on submit,
/// `Submitting -> Closed` on success, `Submitting -> Editing` on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Closed,
    /// Waiting for the detail fetch that seeds the draft (update only)
    Loading,
    Editing,
    Submitting,
}
