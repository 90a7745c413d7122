/// A lock-free single-slot cell that publishes a reference to readers.
pub trait PublishCell {
    /// What a reader gets back, and what a writer publishes.
    type Ref;

    /// Load the most recently published reference, if any.
    ///
    /// Never blocks. Uses acquire ordering.
    fn load(&self) -> Option<Self::Ref>;

    /// Publish `value`, replacing whatever was held before.
    ///
    /// Uses release ordering.
    fn store(&self, value: Option<Self::Ref>);
}
