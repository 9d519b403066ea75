//! Caller-side candidate state for the registration workflow.
//!
//! The generator itself is stateless; the workflow driving it remembers the
//! last region a candidate was produced for and refuses to draw again until
//! the applicant picks a different region. A UX throttle, not a uniqueness
//! guarantee.

use rand::Rng;

use plate_model::PlateCandidate;

use crate::error::SessionError;
use crate::generator::generate_candidate;

#[derive(Debug, Clone, Default)]
pub struct CandidateSession {
    last_region: Option<String>,
}

impl CandidateSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a candidate for the given inputs.
    ///
    /// Refused when a candidate has already been produced for the currently
    /// selected region; switching regions clears the throttle.
    pub fn request<R: Rng>(
        &mut self,
        rng: &mut R,
        vehicle_type: &str,
        plate_type: &str,
        region: &str,
    ) -> Result<PlateCandidate, SessionError> {
        let key = region.trim().to_uppercase();
        if self.last_region.as_deref() == Some(key.as_str()) {
            return Err(SessionError::RegenerationRefused {
                region: region.trim().to_string(),
            });
        }
        let candidate = generate_candidate(rng, vehicle_type, plate_type, region);
        self.last_region = Some(key);
        Ok(candidate)
    }

    /// Forget the last region, re-arming generation for it.
    pub fn reset(&mut self) {
        self.last_region = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn second_request_for_same_region_is_refused() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = CandidateSession::new();
        session
            .request(&mut rng, "Sedan", "Private", "NCR")
            .expect("first request succeeds");
        let refused = session.request(&mut rng, "Sedan", "Private", "NCR");
        assert!(matches!(
            refused,
            Err(SessionError::RegenerationRefused { .. })
        ));
    }

    #[test]
    fn switching_regions_re_arms_generation() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = CandidateSession::new();
        session
            .request(&mut rng, "Sedan", "Private", "NCR")
            .expect("first request succeeds");
        let other = session
            .request(&mut rng, "Sedan", "Private", "R7")
            .expect("different region succeeds");
        assert!(other.plate_number.starts_with('K'));
        // and back again: NCR is allowed once more
        session
            .request(&mut rng, "Sedan", "Private", "ncr ")
            .expect("region switch re-arms the original region");
    }

    #[test]
    fn reset_clears_the_throttle() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = CandidateSession::new();
        session
            .request(&mut rng, "Sedan", "Private", "NCR")
            .expect("first request succeeds");
        session.reset();
        session
            .request(&mut rng, "Sedan", "Private", "NCR")
            .expect("reset re-arms the region");
    }

    #[test]
    fn region_comparison_ignores_case_and_whitespace() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut session = CandidateSession::new();
        session
            .request(&mut rng, "Sedan", "Private", "NCR")
            .expect("first request succeeds");
        let refused = session.request(&mut rng, "Sedan", "Private", " ncr ");
        assert!(refused.is_err());
    }
}
