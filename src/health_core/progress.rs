use std::time::Duration;

pub const ANALYSIS_STEPS: [&str; 6] = [
    "🔍 Analyzing symptoms...",
    "🧠 Cross-referencing medical database...",
    "💊 Evaluating treatment options...",
    "👨‍⚕️ Finding specialist doctors...",
    "⚗️ Calculating medication dosages...",
    "📋 Generating treatment plan...",
];

pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisProgress {
    stage: Option<usize>,
}

impl AnalysisProgress {
    pub fn enter(&mut self, stage: usize) {
        self.stage = Some(stage.min(ANALYSIS_STEPS.len() - 1));
    }

    pub fn reset(&mut self) {
        self.stage = None;
    }

    pub fn label(&self) -> Option<&'static str> {
        self.stage.map(|stage| ANALYSIS_STEPS[stage])
    }

    pub fn percent(&self) -> f64 {
        match self.stage {
            Some(stage) => (stage + 1) as f64 * (100.0 / ANALYSIS_STEPS.len() as f64),
            None => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AnalysisPlan {
    step_delay: Duration,
}

impl Default for AnalysisPlan {
    fn default() -> Self {
        AnalysisPlan::new(DEFAULT_STEP_DELAY)
    }
}

impl AnalysisPlan {
    pub fn new(step_delay: Duration) -> AnalysisPlan {
        AnalysisPlan { step_delay }
    }

    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    // A zero delay reports the stages without waiting.
    pub async fn run<F: FnMut(usize)>(&self, mut on_stage: F) {
        for stage in 0..ANALYSIS_STEPS.len() {
            on_stage(stage);
            if !self.step_delay.is_zero() {
                tokio::time::sleep(self.step_delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        let mut progress = AnalysisProgress::default();
        assert_eq!(progress.percent(), 0.0);
        assert_eq!(progress.label(), None);

        progress.enter(0);
        assert!((progress.percent() - 100.0 / 6.0).abs() < 1e-9);
        assert_eq!(progress.label(), Some(ANALYSIS_STEPS[0]));

        progress.enter(5);
        assert!((progress.percent() - 100.0).abs() < 1e-9);

        progress.enter(42);
        assert_eq!(progress.label(), Some(ANALYSIS_STEPS[5]));

        progress.reset();
        assert_eq!(progress, AnalysisProgress::default());
    }

    #[tokio::test]
    async fn test_plan_reports_every_stage() {
        let mut seen = Vec::new();
        AnalysisPlan::new(Duration::ZERO)
            .run(|stage| seen.push(stage))
            .await;
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_plan_holds_each_stage() {
        let started = tokio::time::Instant::now();
        let mut count = 0;
        AnalysisPlan::new(Duration::from_millis(5))
            .run(|_| count += 1)
            .await;
        assert_eq!(count, 6);
        assert!(started.elapsed() >= Duration::from_millis(30));
    }
}
