use anyhow::{Context, Result};
use tracing::info;

use plate_cli::workflow::{GenerateRequest, ValidateOutcome, generate_candidates, validate_record};
use plate_model::IssuanceRecord;
use plate_standards::{VINTAGE_YEAR_CUTOFF, allowed_plate_types, region_list};

use crate::cli::{GenerateArgs, PlateTypesArgs, ValidateArgs};
use crate::summary::{print_candidates, print_plate_types, print_regions, print_validation};

pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    let request = GenerateRequest {
        vehicle_type: args.vehicle_type.clone(),
        plate_type: args.plate_type.clone(),
        region: args.region.clone(),
        count: args.count,
        seed: args.seed,
    };
    let candidates = generate_candidates(&request).context("generate candidates")?;
    info!(count = candidates.len(), "generated candidates");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
    } else {
        print_candidates(&candidates);
    }
    Ok(())
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidateOutcome> {
    let record = IssuanceRecord {
        plate_number: args.plate_number.clone(),
        plate_type: args.plate_type.clone(),
        region: args.region.clone(),
        plate_issue_date: args.plate_issue_date.clone(),
        plate_expiration_date: args.plate_expiration_date.clone(),
    };
    let outcome = validate_record(record, &args.vehicle_type);
    info!(
        errors = outcome.report.error_count(),
        "validated issuance record"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.report)?);
    } else {
        print_validation(&outcome);
    }
    Ok(outcome)
}

pub fn run_regions() -> Result<()> {
    print_regions(region_list());
    Ok(())
}

pub fn run_plate_types(args: &PlateTypesArgs) -> Result<()> {
    let allowed = allowed_plate_types(&args.vehicle_type, args.year.as_deref());
    let vintage_year = args
        .year
        .as_deref()
        .and_then(|year| year.trim().parse::<i32>().ok())
        .is_some_and(|year| year < VINTAGE_YEAR_CUTOFF);
    if vintage_year {
        info!(vehicle_type = %args.vehicle_type, "vintage year rule applied");
    }
    print_plate_types(&args.vehicle_type, allowed);
    Ok(())
}
