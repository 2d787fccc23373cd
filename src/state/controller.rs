use super::data::{Phase, ResultView, Slot, TryOnResult};
use crate::encoder::ImageSelection;
use crate::gemini::{GeneratedImage, TryOnError, TryOnRequest};

/// What happened when the user hit "Try It On!"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// A request is already in flight; nothing changed
    Ignored,
    /// A photo is missing; the validation message is now the result
    Rejected,
    /// In flight now; send this request
    Started(TryOnRequest),
}

/// The try-on state machine.
///
/// Idle/Ready depend only on the selections. InFlight is set between
/// `begin_submit` and `finish`. Success/Failure stick around until the
/// next submission starts, even if a photo is replaced in between.
#[derive(Debug, Default)]
pub struct Controller {
    person: Option<ImageSelection>,
    clothing: Option<ImageSelection>,
    in_flight: bool,
    last_result: Option<TryOnResult>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the photo in a slot. Allowed in any state.
    pub fn select(&mut self, slot: Slot, selection: ImageSelection) {
        match slot {
            Slot::Person => self.person = Some(selection),
            Slot::Clothing => self.clothing = Some(selection),
        }
    }

    pub fn selection(&self, slot: Slot) -> Option<&ImageSelection> {
        match slot {
            Slot::Person => self.person.as_ref(),
            Slot::Clothing => self.clothing.as_ref(),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn last_result(&self) -> Option<&TryOnResult> {
        self.last_result.as_ref()
    }

    fn has_both(&self) -> bool {
        self.person.is_some() && self.clothing.is_some()
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        self.has_both() && !self.in_flight
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight {
            return Phase::InFlight;
        }
        match &self.last_result {
            Some(TryOnResult::Success(_)) => Phase::Success,
            Some(TryOnResult::Failure(_)) => Phase::Failure,
            None if self.has_both() => Phase::Ready,
            None => Phase::Idle,
        }
    }

    /// Start a submission.
    ///
    /// Never contacts the service itself: on `Started` the caller runs the
    /// request and reports back through `finish`.
    pub fn begin_submit(&mut self) -> Submission {
        if self.in_flight {
            tracing::debug!("Submit ignored, a try-on is already in flight");
            return Submission::Ignored;
        }

        let (Some(person), Some(clothing)) = (&self.person, &self.clothing) else {
            tracing::info!("Submit rejected, both photos are required");
            self.last_result = Some(TryOnResult::Failure(TryOnError::Validation.to_string()));
            return Submission::Rejected;
        };

        let request = TryOnRequest::new(person.clone(), clothing.clone());
        self.last_result = None;
        self.in_flight = true;
        Submission::Started(request)
    }

    /// Record the outcome of the in-flight request
    pub fn finish(&mut self, outcome: Result<GeneratedImage, TryOnError>) {
        if !self.in_flight {
            tracing::warn!("Got a try-on result with nothing in flight, ignoring it");
            return;
        }
        self.in_flight = false;
        self.last_result = Some(match outcome {
            Ok(image) => TryOnResult::Success(image),
            Err(e) => {
                tracing::error!("Try-on failed: {}", e);
                TryOnResult::Failure(e.to_string())
            }
        });
    }

    /// What the result panel shows: loading, then error, then image, then placeholder
    pub fn result_view(&self) -> ResultView<'_> {
        if self.in_flight {
            return ResultView::Loading;
        }
        match &self.last_result {
            Some(TryOnResult::Failure(message)) => ResultView::Error(message),
            Some(TryOnResult::Success(image)) => ResultView::Image(image),
            None => ResultView::Placeholder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::tryon::tests::{clothing, person, FakeGenerator};
    use crate::gemini::types::Part;
    use crate::gemini::{ContentGenerator, TryOnClient};
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
    use std::sync::Arc;

    /// begin → try_on → finish, the same sequence the UI runs
    async fn submit<G: ContentGenerator>(controller: &mut Controller, client: &TryOnClient<G>) {
        if let Submission::Started(request) = controller.begin_submit() {
            assert!(controller.is_in_flight());
            let outcome = client.try_on(&request).await;
            controller.finish(outcome);
        }
    }

    fn ready() -> Controller {
        let mut controller = Controller::new();
        controller.select(Slot::Person, person());
        controller.select(Slot::Clothing, clothing());
        controller
    }

    fn image(bytes: &[u8]) -> GeneratedImage {
        GeneratedImage {
            media_type: "image/png".to_string(),
            data: BASE64.encode(bytes),
            bytes: bytes.to_vec(),
        }
    }

    #[test]
    fn test_idle_and_ready() {
        let mut controller = Controller::new();
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(!controller.can_submit());

        controller.select(Slot::Person, person());
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(!controller.can_submit());

        controller.select(Slot::Clothing, clothing());
        assert_eq!(controller.phase(), Phase::Ready);
        assert!(controller.can_submit());
        assert_eq!(controller.result_view(), ResultView::Placeholder);
    }

    #[tokio::test]
    async fn test_only_person_is_rejected_without_a_call() {
        let fake = Arc::new(FakeGenerator::with_parts(vec![]));
        let client = TryOnClient::new(fake.clone());

        let mut controller = Controller::new();
        controller.select(Slot::Person, person());
        submit(&mut controller, &client).await;

        assert_eq!(fake.call_count(), 0);
        assert!(!controller.is_in_flight());
        assert_eq!(controller.phase(), Phase::Failure);
        assert_eq!(
            controller.last_result(),
            Some(&TryOnResult::Failure("Please upload both images before proceeding.".to_string()))
        );
    }

    #[test]
    fn test_nothing_selected_is_rejected() {
        let mut controller = Controller::new();
        assert_eq!(controller.begin_submit(), Submission::Rejected);
        assert_eq!(
            controller.result_view(),
            ResultView::Error("Please upload both images before proceeding.")
        );
    }

    #[tokio::test]
    async fn test_success_stores_exact_image() {
        let client = TryOnClient::new(FakeGenerator::with_parts(vec![Part::inline(
            "image/png",
            BASE64.encode(b"X"),
        )]));
        let mut controller = ready();
        submit(&mut controller, &client).await;

        assert!(!controller.is_in_flight());
        assert_eq!(controller.phase(), Phase::Success);
        match controller.result_view() {
            ResultView::Image(image) => {
                assert_eq!(image.bytes, b"X");
                assert_eq!(BASE64.decode(&image.data).unwrap(), b"X");
            }
            other => panic!("expected an image, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_no_image_becomes_failure() {
        let client = TryOnClient::new(FakeGenerator::with_parts(vec![]));
        let mut controller = ready();
        submit(&mut controller, &client).await;

        assert_eq!(controller.phase(), Phase::Failure);
        match controller.result_view() {
            ResultView::Error(message) => {
                assert!(message.contains("did not return an image"));
                assert!(message.contains("safety policies"));
            }
            other => panic!("expected an error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_service_error_becomes_failure() {
        let client = TryOnClient::new(FakeGenerator::failing("rate limited"));
        let mut controller = ready();
        submit(&mut controller, &client).await;

        assert!(!controller.is_in_flight());
        match controller.last_result() {
            Some(TryOnResult::Failure(message)) => assert!(message.contains("rate limited")),
            other => panic!("expected a failure, got {:?}", other),
        }
    }

    #[test]
    fn test_submit_while_in_flight_is_a_no_op() {
        let mut controller = ready();
        assert!(matches!(controller.begin_submit(), Submission::Started(_)));
        assert_eq!(controller.phase(), Phase::InFlight);
        assert!(!controller.can_submit());
        assert_eq!(controller.result_view(), ResultView::Loading);

        assert_eq!(controller.begin_submit(), Submission::Ignored);
        assert!(controller.is_in_flight());
    }

    #[test]
    fn test_started_request_carries_current_selections() {
        let mut controller = ready();
        match controller.begin_submit() {
            Submission::Started(request) => {
                assert_eq!(request.person, person());
                assert_eq!(request.clothing, clothing());
            }
            other => panic!("expected a started submission, got {:?}", other),
        }
    }

    #[test]
    fn test_new_submission_clears_previous_result() {
        let mut controller = ready();
        controller.begin_submit();
        controller.finish(Err(TryOnError::NoImageReturned));
        assert_eq!(controller.phase(), Phase::Failure);

        assert!(matches!(controller.begin_submit(), Submission::Started(_)));
        assert_eq!(controller.last_result(), None);

        controller.finish(Ok(image(b"Y")));
        assert_eq!(controller.phase(), Phase::Success);
    }

    #[test]
    fn test_reselecting_keeps_result_until_next_submit() {
        let mut controller = ready();
        controller.begin_submit();
        controller.finish(Ok(image(b"X")));

        controller.select(
            Slot::Clothing,
            crate::encoder::ImageSelection::from_bytes("other.webp", "image/webp", b"new".to_vec()),
        );
        assert_eq!(controller.phase(), Phase::Success);
        assert_eq!(controller.selection(Slot::Clothing).unwrap().media_type(), "image/webp");
        assert!(controller.can_submit());
    }

    #[test]
    fn test_stray_finish_is_ignored() {
        let mut controller = ready();
        controller.finish(Ok(image(b"X")));
        assert_eq!(controller.phase(), Phase::Ready);
        assert_eq!(controller.last_result(), None);
    }
}
