//! Candidate plate-number generation.
//!
//! Always produces a syntactically valid plate string; it never fails and it
//! never checks the result against plates already issued. Uniqueness, where
//! required, is a persistence-layer constraint.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use plate_model::{PlateCandidate, PlateType, is_two_wheel};
use plate_standards::region_prefix;

use crate::charset::{
    DIPLOMATIC_COUNTRIES, ELECTRIC_SECOND, ENERGY_THIRD, HYBRID_SECOND, LEGIBLE_ALPHABET,
    VINTAGE_SUFFIXES, pick,
};

/// Generate a candidate plate number, drawing randomness from entropy.
pub fn generate_plate_number(vehicle_type: &str, plate_type: &str, region: &str) -> String {
    let mut rng = StdRng::from_entropy();
    generate(&mut rng, vehicle_type, plate_type, region)
}

/// Generate a candidate plate number from a caller-supplied random source.
///
/// Two-wheel vehicles use the motorcycle formats regardless of plate type.
/// Unrecognized plate types fall back to the default character classes, so
/// this function always returns a plate string.
pub fn generate<R: Rng>(rng: &mut R, vehicle_type: &str, plate_type: &str, region: &str) -> String {
    if is_two_wheel(vehicle_type) {
        return two_wheel(rng, region);
    }

    let parsed = plate_type.parse::<PlateType>().ok();
    if parsed.is_none() {
        debug!(plate_type, "unrecognized plate type, using default character classes");
    }

    match parsed {
        Some(PlateType::Diplomatic) => diplomatic(rng),
        Some(PlateType::Vintage) => vintage(rng, region),
        other => {
            let second = match other {
                Some(PlateType::Government) => 'S',
                Some(PlateType::Trailer) => 'U',
                Some(PlateType::Electric) => pick(rng, ELECTRIC_SECOND),
                Some(PlateType::Hybrid) => pick(rng, HYBRID_SECOND),
                _ => pick(rng, LEGIBLE_ALPHABET),
            };
            let third = match other {
                Some(PlateType::Electric) | Some(PlateType::Hybrid) => pick(rng, ENERGY_THIRD),
                _ => pick(rng, LEGIBLE_ALPHABET),
            };
            let prefix = region_prefix(region);
            format!("{prefix}{second}{third} {}", four_digits(rng))
        }
    }
}

/// Generate a full candidate carrying the inputs it was generated from.
pub fn generate_candidate<R: Rng>(
    rng: &mut R,
    vehicle_type: &str,
    plate_type: &str,
    region: &str,
) -> PlateCandidate {
    PlateCandidate {
        plate_number: generate(rng, vehicle_type, plate_type, region),
        vehicle_type: vehicle_type.to_string(),
        plate_type: plate_type.to_string(),
        region: region.to_string(),
    }
}

fn two_wheel<R: Rng>(rng: &mut R, region: &str) -> String {
    let prefix = region_prefix(region);
    if rng.gen_bool(0.5) {
        // leading three digits of a 4-digit draw
        let number = rng.gen_range(1000..=9999) / 10;
        format!("{prefix}-{number}")
    } else {
        let second = pick(rng, LEGIBLE_ALPHABET);
        let number = rng.gen_range(10_000..=99_999);
        format!("{prefix}{second}-{number}")
    }
}

fn diplomatic<R: Rng>(rng: &mut R) -> String {
    let country = DIPLOMATIC_COUNTRIES[rng.gen_range(0..DIPLOMATIC_COUNTRIES.len())];
    format!("{country}-{}", four_digits(rng))
}

fn vintage<R: Rng>(rng: &mut R, region: &str) -> String {
    let prefix = region_prefix(region);
    let second = pick(rng, LEGIBLE_ALPHABET);
    let suffix = VINTAGE_SUFFIXES[rng.gen_range(0..VINTAGE_SUFFIXES.len())];
    format!("{prefix}{second}{suffix} {}", four_digits(rng))
}

fn four_digits<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(1000..=9999)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn same_seed_produces_same_plates() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(
                generate(&mut a, "Sedan", "Private", "NCR"),
                generate(&mut b, "Sedan", "Private", "NCR")
            );
        }
    }

    #[test]
    fn standard_plates_match_the_stamped_format() {
        let mut rng = seeded();
        let format = Regex::new(r"^[A-Z]{3} \d{4}$").unwrap();
        for plate_type in ["Private", "For Hire", "Government", "Electric", "Hybrid", "Trailer"] {
            for _ in 0..50 {
                let plate = generate(&mut rng, "Sedan", plate_type, "R7");
                assert!(format.is_match(&plate), "{plate_type}: {plate}");
                assert!(plate.starts_with('K'), "{plate}");
            }
        }
    }

    #[test]
    fn government_and_trailer_second_letters_are_fixed() {
        let mut rng = seeded();
        for _ in 0..100 {
            let gov = generate(&mut rng, "Sedan", "Government", "NCR");
            assert_eq!(gov.as_bytes()[1], b'S', "{gov}");
            let trailer = generate(&mut rng, "Sedan", "Trailer", "NCR");
            assert_eq!(trailer.as_bytes()[1], b'U', "{trailer}");
        }
    }

    #[test]
    fn electric_letters_stay_inside_their_bands() {
        let mut rng = seeded();
        for _ in 0..1000 {
            let plate = generate(&mut rng, "Sedan", "Electric", "NCR");
            let second = plate.as_bytes()[1];
            let third = plate.as_bytes()[2];
            assert!(ELECTRIC_SECOND.contains(&second), "{plate}");
            assert!(ENERGY_THIRD.contains(&third), "{plate}");
        }
    }

    #[test]
    fn hybrid_letters_stay_inside_their_bands() {
        let mut rng = seeded();
        for _ in 0..1000 {
            let plate = generate(&mut rng, "SUV", "Hybrid", "R11");
            let second = plate.as_bytes()[1];
            let third = plate.as_bytes()[2];
            assert!(HYBRID_SECOND.contains(&second), "{plate}");
            assert!(ENERGY_THIRD.contains(&third), "{plate}");
        }
    }

    #[test]
    fn diplomatic_plates_carry_a_known_country_code() {
        let mut rng = seeded();
        let format = Regex::new(r"^[A-Z]{3}-\d{4}$").unwrap();
        for _ in 0..200 {
            let plate = generate(&mut rng, "Sedan", "Diplomatic", "R5");
            assert!(format.is_match(&plate), "{plate}");
            let country = &plate[..3];
            assert!(DIPLOMATIC_COUNTRIES.contains(&country), "{plate}");
        }
    }

    #[test]
    fn two_wheel_plates_use_the_motorcycle_formats() {
        let mut rng = seeded();
        let short = Regex::new(r"^[A-Z]-\d{3}$").unwrap();
        let long = Regex::new(r"^[A-Z]{2}-\d{5}$").unwrap();
        let mut saw_short = false;
        let mut saw_long = false;
        for _ in 0..200 {
            let plate = generate(&mut rng, "2-Wheel", "Private", "NCR");
            if short.is_match(&plate) {
                saw_short = true;
            } else if long.is_match(&plate) {
                saw_long = true;
            } else {
                panic!("unexpected motorcycle plate: {plate}");
            }
        }
        assert!(saw_short && saw_long);
    }

    #[test]
    fn vintage_plates_carry_a_two_letter_suffix() {
        let mut rng = seeded();
        let format = Regex::new(r"^[A-Z]{2}(TX|TY|TZ) \d{4}$").unwrap();
        for _ in 0..200 {
            let plate = generate(&mut rng, "Coupe", "Vintage", "NCR");
            assert!(format.is_match(&plate), "{plate}");
        }
    }

    #[test]
    fn unknown_plate_type_falls_back_to_default_classes() {
        let mut rng = seeded();
        let format = Regex::new(r"^[A-Z]{3} \d{4}$").unwrap();
        let plate = generate(&mut rng, "Sedan", "Sidecar", "NCR");
        assert!(format.is_match(&plate), "{plate}");
    }

    #[test]
    fn candidate_carries_its_inputs() {
        let mut rng = seeded();
        let candidate = generate_candidate(&mut rng, "Sedan", "Private", "R3");
        assert_eq!(candidate.vehicle_type, "Sedan");
        assert_eq!(candidate.plate_type, "Private");
        assert_eq!(candidate.region, "R3");
        assert!(candidate.plate_number.starts_with('E'));
    }
}
