/// Trait for the resource-editing page hosting the tagging controls
///
/// Implementations wrap the host toolkit's widgets: the trigger button, the
/// tokenizing tag input, the inline error field, and the collapsible tags
/// section. `commit_tag` covers the host widget's quirk of accepting values
/// one at a time via a confirmation keystroke.
pub trait TagForm {
    /// Disable the trigger and swap its label for a busy indicator
    fn disable_trigger(&mut self);

    /// Re-enable the trigger and restore its original label
    fn restore_trigger(&mut self);

    /// Commit one value into the tag input
    fn commit_tag(&mut self, value: &str);

    /// Show a message in the inline error field, replacing any prior one
    fn show_error(&mut self, message: &str);

    /// Hide the inline error field and clear its content
    fn hide_error(&mut self);

    /// Whether the tags section of the form is currently expanded
    fn tags_section_expanded(&self) -> bool;

    /// Trigger the expand control of the tags section
    fn reveal_tags_section(&mut self);
}

/// Trait for the host transport carrying the tag request
///
/// One awaited call per click; a failed call resolves to the message string
/// the UI will display, whatever the underlying error kind was.
#[async_trait::async_trait]
pub trait TagRpc {
    async fn request_tags(&self, resource_id: u64) -> Result<Vec<String>, String>;
}
