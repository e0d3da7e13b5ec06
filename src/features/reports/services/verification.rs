use rand::Rng;

use crate::features::reports::models::NewReport;

/// Decides whether a freshly submitted report counts as verified.
///
/// Called exactly once per report, at creation.
pub trait Verifier: Send + Sync {
    fn verify(&self, report: &NewReport) -> bool;
}

/// Stand-in for a real classifier: a weighted coin flip.
pub struct RandomVerifier {
    probability: f64,
}

impl RandomVerifier {
    pub fn new(probability: f64) -> Self {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        Self { probability }
    }
}

impl Verifier for RandomVerifier {
    fn verify(&self, _report: &NewReport) -> bool {
        rand::thread_rng().gen_bool(self.probability)
    }
}
