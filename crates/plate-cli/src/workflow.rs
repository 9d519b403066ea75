//! The registration-workflow glue the CLI drives: candidate generation
//! through a session, and record validation.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use plate_gen::{CandidateSession, SessionError, generate_candidate};
use plate_model::{IssuanceRecord, PlateCandidate, ValidationReport};
use plate_validate::validate_issuance;

/// Inputs for a candidate-generation run.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub vehicle_type: String,
    pub plate_type: String,
    pub region: String,
    pub count: usize,
    pub seed: Option<u64>,
}

/// Outcome of validating one issuance record.
#[derive(Debug, Clone)]
pub struct ValidateOutcome {
    pub record: IssuanceRecord,
    pub vehicle_type: String,
    pub report: ValidationReport,
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Produce candidates for the request.
///
/// A single candidate goes through a [`CandidateSession`], the same path an
/// interactive registration takes; bulk requests draw straight from the
/// generator.
pub fn generate_candidates(
    request: &GenerateRequest,
) -> Result<Vec<PlateCandidate>, SessionError> {
    let mut rng = rng_for(request.seed);
    debug!(
        vehicle_type = %request.vehicle_type,
        plate_type = %request.plate_type,
        region = %request.region,
        count = request.count,
        "generating candidates"
    );

    if request.count <= 1 {
        let mut session = CandidateSession::new();
        let candidate = session.request(
            &mut rng,
            &request.vehicle_type,
            &request.plate_type,
            &request.region,
        )?;
        return Ok(vec![candidate]);
    }

    Ok((0..request.count)
        .map(|_| {
            generate_candidate(
                &mut rng,
                &request.vehicle_type,
                &request.plate_type,
                &request.region,
            )
        })
        .collect())
}

/// Validate a filled record against the format rules for its vehicle type.
pub fn validate_record(record: IssuanceRecord, vehicle_type: &str) -> ValidateOutcome {
    let report = validate_issuance(&record, vehicle_type);
    ValidateOutcome {
        record,
        vehicle_type: vehicle_type.to_string(),
        report,
    }
}
