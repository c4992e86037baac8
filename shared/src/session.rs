use crate::analysis::AnalysisResult;

/// Where a single upload-and-analyze attempt currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ImageSelected,
    Analyzing,
    Complete,
}

/// Transient client state for one image-analysis attempt.
///
/// Generic over the image payload so the machine carries no platform types;
/// the browser side stores a file handle and preview URL, tests store
/// whatever is convenient. A session holds a result exactly when it is in
/// `Phase::Complete`.
#[derive(Debug, Clone)]
pub struct UploadSession<P> {
    image: Option<P>,
    phase: Phase,
    progress: u8,
    result: Option<AnalysisResult>,
}

impl<P> Default for UploadSession<P> {
    fn default() -> Self {
        Self {
            image: None,
            phase: Phase::Idle,
            progress: 0,
            result: None,
        }
    }
}

impl<P> UploadSession<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Percent complete, 0-100. Non-decreasing while analyzing.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn image(&self) -> Option<&P> {
        self.image.as_ref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Accepts a new image from any phase, discarding prior progress and
    /// any previous result.
    pub fn select_image(&mut self, payload: P) {
        self.image = Some(payload);
        self.phase = Phase::ImageSelected;
        self.progress = 0;
        self.result = None;
    }

    /// Drops the image and returns the session to `Idle`.
    pub fn clear_image(&mut self) {
        self.image = None;
        self.phase = Phase::Idle;
        self.progress = 0;
        self.result = None;
    }

    /// Begins the simulated analysis. No-op unless an image is selected and
    /// analysis has not already started; returns whether the transition
    /// happened.
    pub fn start_analysis(&mut self) -> bool {
        if self.phase != Phase::ImageSelected {
            return false;
        }
        self.phase = Phase::Analyzing;
        self.progress = 0;
        true
    }

    /// Advances simulated progress by `step`, clamped at 100. Returns true
    /// once progress has reached 100. No-op outside `Analyzing`.
    pub fn advance(&mut self, step: u8) -> bool {
        if self.phase != Phase::Analyzing {
            return false;
        }
        self.progress = self.progress.saturating_add(step).min(100);
        self.progress == 100
    }

    /// Attaches the analysis record and moves to `Complete`. Only legal once
    /// progress has reached 100; returns whether the transition happened.
    pub fn complete(&mut self, result: AnalysisResult) -> bool {
        if self.phase != Phase::Analyzing || self.progress < 100 {
            return false;
        }
        self.phase = Phase::Complete;
        self.result = Some(result);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_complete(session: &mut UploadSession<&str>) {
        assert!(session.start_analysis());
        while !session.advance(5) {}
        assert!(session.complete(AnalysisResult::demo()));
    }

    #[test]
    fn result_present_iff_complete() {
        let mut session = UploadSession::new();
        assert!(session.result().is_none());

        session.select_image("debris.jpg");
        assert!(session.result().is_none());

        run_to_complete(&mut session);
        assert_eq!(session.phase(), Phase::Complete);
        assert!(session.result().is_some());

        session.clear_image();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.result().is_none());
    }

    #[test]
    fn selecting_new_image_resets_progress_and_result() {
        let mut session = UploadSession::new();
        session.select_image("first.jpg");
        run_to_complete(&mut session);
        assert!(session.result().is_some());

        session.select_image("second.jpg");
        assert_eq!(session.phase(), Phase::ImageSelected);
        assert_eq!(session.progress(), 0);
        assert!(session.result().is_none());
    }

    #[test]
    fn start_analysis_requires_selected_image() {
        let mut session: UploadSession<&str> = UploadSession::new();
        assert!(!session.start_analysis());
        assert_eq!(session.phase(), Phase::Idle);

        session.select_image("debris.jpg");
        assert!(session.start_analysis());
        // Already analyzing; a second start is a no-op.
        assert!(!session.start_analysis());

        while !session.advance(5) {}
        session.complete(AnalysisResult::demo());
        assert!(!session.start_analysis());
        assert_eq!(session.phase(), Phase::Complete);
    }

    #[test]
    fn progress_is_monotonic_and_reaches_exactly_100() {
        let mut session = UploadSession::new();
        session.select_image("debris.jpg");
        session.start_analysis();

        let mut last = 0;
        loop {
            let full = session.advance(7);
            assert!(session.progress() >= last);
            last = session.progress();
            if full {
                break;
            }
        }
        // 7 does not divide 100; the clamp must land on exactly 100.
        assert_eq!(session.progress(), 100);
        assert_eq!(session.phase(), Phase::Analyzing);

        assert!(session.complete(AnalysisResult::demo()));
        assert_eq!(session.phase(), Phase::Complete);
    }

    #[test]
    fn complete_rejected_before_progress_is_full() {
        let mut session = UploadSession::new();
        session.select_image("debris.jpg");
        session.start_analysis();
        session.advance(5);

        assert!(!session.complete(AnalysisResult::demo()));
        assert_eq!(session.phase(), Phase::Analyzing);
        assert!(session.result().is_none());
    }

    #[test]
    fn advance_ignored_outside_analyzing() {
        let mut session = UploadSession::new();
        session.select_image("debris.jpg");
        assert!(!session.advance(5));
        assert_eq!(session.progress(), 0);
    }
}
