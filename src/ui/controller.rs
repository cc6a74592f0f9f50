use crate::constants::{MAX_TAGS_PER_REQUEST, MAX_TAG_LENGTH};
use crate::ui::{TagForm, TagRpc};

/// Drives the tagging controls on a resource-editing form
///
/// One click runs Idle → Busy → {Success, Failed} → Idle: any prior error
/// is cleared and the trigger disabled on entry, and the trigger is
/// restored on every exit path. The disabled trigger is the only
/// concurrency control: at most one outstanding request per instance.
pub struct TaggingController<F: TagForm, R: TagRpc> {
    form: F,
    rpc: R,
    resource_id: u64,
}

impl<F: TagForm, R: TagRpc> TaggingController<F, R> {
    /// Wire a controller to its page; the error field starts hidden
    pub fn new(mut form: F, rpc: R, resource_id: u64) -> Self {
        form.hide_error();
        Self {
            form,
            rpc,
            resource_id,
        }
    }

    /// Handle one click of the tagging trigger
    pub async fn on_click(&mut self) {
        self.form.hide_error();
        self.form.disable_trigger();

        match self.rpc.request_tags(self.resource_id).await {
            Ok(tags) => {
                for tag in sanitize_tags(tags) {
                    self.form.commit_tag(&tag);
                }
                if !self.form.tags_section_expanded() {
                    self.form.reveal_tags_section();
                }
            }
            Err(message) => self.form.show_error(&message),
        }

        self.form.restore_trigger();
    }

    /// Access the wrapped form, mainly for host glue
    pub fn form(&self) -> &F {
        &self.form
    }
}

/// Bound the returned tag list before it touches the page
///
/// The list is untrusted input: tags are trimmed, control characters are
/// stripped, each tag is length-bounded, empties are dropped, and the
/// count is capped.
fn sanitize_tags(tags: Vec<String>) -> Vec<String> {
    let total = tags.len();
    let sanitized: Vec<String> = tags
        .into_iter()
        .map(|tag| {
            tag.chars()
                .filter(|c| !c.is_control())
                .take(MAX_TAG_LENGTH)
                .collect::<String>()
                .trim()
                .to_string()
        })
        .filter(|tag| !tag.is_empty())
        .take(MAX_TAGS_PER_REQUEST)
        .collect();

    if sanitized.len() < total {
        tracing::warn!(
            received = total,
            committed = sanitized.len(),
            "dropped tags during sanitization"
        );
    }

    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum FormEvent {
        ErrorHidden,
        Disabled,
        Committed(String),
        SectionRevealed,
        ErrorShown(String),
        Restored,
    }

    const IDLE_LABEL: &str = "Launch AutoTag";
    const BUSY_LABEL: &str = "…";

    struct MockForm {
        events: Vec<FormEvent>,
        disabled: bool,
        label: &'static str,
        error: Option<String>,
        section_expanded: bool,
    }

    impl MockForm {
        fn new(section_expanded: bool) -> Self {
            Self {
                events: Vec::new(),
                disabled: false,
                label: IDLE_LABEL,
                error: None,
                section_expanded,
            }
        }
    }

    impl TagForm for MockForm {
        fn disable_trigger(&mut self) {
            self.disabled = true;
            self.label = BUSY_LABEL;
            self.events.push(FormEvent::Disabled);
        }

        fn restore_trigger(&mut self) {
            self.disabled = false;
            self.label = IDLE_LABEL;
            self.events.push(FormEvent::Restored);
        }

        fn commit_tag(&mut self, value: &str) {
            self.events.push(FormEvent::Committed(value.to_string()));
        }

        fn show_error(&mut self, message: &str) {
            self.error = Some(message.to_string());
            self.events.push(FormEvent::ErrorShown(message.to_string()));
        }

        fn hide_error(&mut self) {
            self.error = None;
            self.events.push(FormEvent::ErrorHidden);
        }

        fn tags_section_expanded(&self) -> bool {
            self.section_expanded
        }

        fn reveal_tags_section(&mut self) {
            self.section_expanded = true;
            self.events.push(FormEvent::SectionRevealed);
        }
    }

    struct StubRpc {
        outcome: Result<Vec<String>, String>,
    }

    #[async_trait::async_trait]
    impl TagRpc for StubRpc {
        async fn request_tags(&self, _resource_id: u64) -> Result<Vec<String>, String> {
            self.outcome.clone()
        }
    }

    fn ok_rpc(tags: &[&str]) -> StubRpc {
        StubRpc {
            outcome: Ok(tags.iter().map(|t| t.to_string()).collect()),
        }
    }

    fn failing_rpc(message: &str) -> StubRpc {
        StubRpc {
            outcome: Err(message.to_string()),
        }
    }

    #[tokio::test]
    async fn test_success_commits_tags_in_order_and_reveals_section() {
        let mut controller =
            TaggingController::new(MockForm::new(false), ok_rpc(&["math", "calculus"]), 7);
        controller.on_click().await;

        assert_eq!(
            controller.form().events,
            vec![
                FormEvent::ErrorHidden, // on construction
                FormEvent::ErrorHidden, // on click
                FormEvent::Disabled,
                FormEvent::Committed("math".to_string()),
                FormEvent::Committed("calculus".to_string()),
                FormEvent::SectionRevealed,
                FormEvent::Restored,
            ]
        );
    }

    #[tokio::test]
    async fn test_expanded_section_is_not_toggled_again() {
        let mut controller = TaggingController::new(MockForm::new(true), ok_rpc(&["math"]), 7);
        controller.on_click().await;

        assert!(!controller
            .form()
            .events
            .contains(&FormEvent::SectionRevealed));
    }

    #[tokio::test]
    async fn test_failure_shows_exact_message_and_restores_trigger() {
        let mut controller = TaggingController::new(
            MockForm::new(false),
            failing_rpc("No OpenAI API key provided."),
            7,
        );
        controller.on_click().await;

        let form = controller.form();
        assert_eq!(form.error.as_deref(), Some("No OpenAI API key provided."));
        assert!(!form.disabled);
        assert_eq!(form.label, IDLE_LABEL);
        assert!(!form.events.iter().any(|e| matches!(e, FormEvent::Committed(_))));
    }

    #[tokio::test]
    async fn test_new_attempt_clears_prior_error_first() {
        let mut controller =
            TaggingController::new(MockForm::new(false), failing_rpc("first failure"), 7);
        controller.on_click().await;
        assert_eq!(controller.form().error.as_deref(), Some("first failure"));

        controller.rpc = ok_rpc(&["math"]);
        controller.on_click().await;
        assert_eq!(controller.form().error, None);
    }

    #[tokio::test]
    async fn test_cleanup_is_idempotent_on_both_branches() {
        for rpc in [ok_rpc(&["math"]), failing_rpc("boom")] {
            let mut controller = TaggingController::new(MockForm::new(false), rpc, 7);
            let (disabled_before, label_before) =
                (controller.form().disabled, controller.form().label);

            controller.on_click().await;

            assert_eq!(controller.form().disabled, disabled_before);
            assert_eq!(controller.form().label, label_before);
        }
    }

    #[tokio::test]
    async fn test_busy_state_during_call() {
        // The trigger must be disabled before the RPC resolves; the mock
        // event order proves Disabled precedes any commit or restore.
        let mut controller = TaggingController::new(MockForm::new(false), ok_rpc(&["math"]), 7);
        controller.on_click().await;

        let events = &controller.form().events;
        let disabled_at = events.iter().position(|e| *e == FormEvent::Disabled).unwrap();
        let restored_at = events.iter().position(|e| *e == FormEvent::Restored).unwrap();
        assert!(disabled_at < restored_at);
    }

    #[test]
    fn test_sanitize_trims_and_drops_empty() {
        let tags = sanitize_tags(vec![
            "  math  ".to_string(),
            "".to_string(),
            "   ".to_string(),
            "calculus".to_string(),
        ]);
        assert_eq!(tags, vec!["math", "calculus"]);
    }

    #[test]
    fn test_sanitize_strips_control_characters() {
        let tags = sanitize_tags(vec!["ma\u{0000}th\nrocks".to_string()]);
        assert_eq!(tags, vec!["mathrocks"]);
    }

    #[test]
    fn test_sanitize_bounds_length_and_count() {
        let long = "x".repeat(MAX_TAG_LENGTH * 2);
        let tags = sanitize_tags(vec![long]);
        assert_eq!(tags[0].chars().count(), MAX_TAG_LENGTH);

        let many: Vec<String> = (0..MAX_TAGS_PER_REQUEST * 2)
            .map(|i| format!("tag{}", i))
            .collect();
        assert_eq!(sanitize_tags(many).len(), MAX_TAGS_PER_REQUEST);
    }
}
