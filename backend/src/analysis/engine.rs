use std::time::Duration;

use rand::Rng;
use shared::AnalysisResult;

/// Stand-in for a real inference engine. Classification always yields the
/// canned demo record after a simulated processing delay; a real model would
/// slot in behind this same type.
#[derive(Debug, Clone)]
pub struct WasteClassifier {
    base_delay_ms: u64,
    jitter_ms: u64,
}

impl Default for WasteClassifier {
    fn default() -> Self {
        // Roughly the two-second "processing" pause users see in the demo.
        Self::new(1500, 1000)
    }
}

impl WasteClassifier {
    pub fn new(base_delay_ms: u64, jitter_ms: u64) -> Self {
        Self {
            base_delay_ms,
            jitter_ms,
        }
    }

    pub async fn classify(&self) -> AnalysisResult {
        let delay = self.base_delay_ms + self.sample_jitter();
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        AnalysisResult::demo()
    }

    fn sample_jitter(&self) -> u64 {
        if self.jitter_ms == 0 {
            return 0;
        }
        rand::rng().random_range(0..=self.jitter_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn classify_returns_the_canned_record() {
        let classifier = WasteClassifier::new(0, 0);
        let result = classifier.classify().await;
        assert_eq!(result, AnalysisResult::demo());
    }

    #[test]
    fn jitter_stays_within_bounds() {
        let classifier = WasteClassifier::new(100, 50);
        for _ in 0..100 {
            let jitter = classifier.sample_jitter();
            assert!(jitter <= 50);
        }
    }
}
