/// Result of a toggle operation on a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The relation did not exist and was created.
    Created,
    /// The relation existed and was removed.
    Removed,
}

impl ToggleOutcome {
    pub fn is_created(self) -> bool {
        matches!(self, ToggleOutcome::Created)
    }
}
