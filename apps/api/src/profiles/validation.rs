use crate::models::attributes::{EnergyLevel, Season};
use crate::models::profile::{ProfileDraft, ProfileInput};

/// Sanitises and validates a profile body.
///
/// - `name` is trimmed and must be non-empty
/// - `timeAvailable` defaults to 0 and must be a finite, non-negative number
/// - `energyLevel` must be Low, Medium or High (any casing)
/// - `season` must be Winter, Spring, Summer or Fall (any casing)
///
/// All failures are collected so the client sees every problem at once.
pub fn validate_profile(input: &ProfileInput) -> Result<ProfileDraft, Vec<String>> {
    let mut errors = Vec::new();

    let name = input.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        errors.push("Name is required".to_string());
    }

    let time_available = match &input.time_available {
        None => Some(0.0),
        Some(raw) => raw.as_f64().filter(|t| t.is_finite() && *t >= 0.0),
    };
    if time_available.is_none() {
        errors.push("timeAvailable must be a non-negative number".to_string());
    }

    let energy_level = match input.energy_level.as_deref().map(str::trim) {
        None | Some("") => {
            errors.push("energyLevel is required".to_string());
            None
        }
        Some(raw) => {
            let parsed = EnergyLevel::parse(raw);
            if parsed.is_none() {
                errors.push("energyLevel must be Low, Medium, or High".to_string());
            }
            parsed
        }
    };

    let season = match input.season.as_deref().map(str::trim) {
        None | Some("") => {
            errors.push("season is required".to_string());
            None
        }
        Some(raw) => {
            let parsed = Season::parse(raw);
            if parsed.is_none() {
                errors.push("season must be Winter, Spring, Summer, or Fall".to_string());
            }
            parsed
        }
    };

    match (time_available, energy_level, season) {
        (Some(time_available), Some(energy_level), Some(season)) if errors.is_empty() => {
            Ok(ProfileDraft {
                name: name.to_string(),
                time_available,
                energy_level,
                season,
            })
        }
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NumericInput;

    fn input(name: &str, time: Option<NumericInput>, energy: &str, season: &str) -> ProfileInput {
        ProfileInput {
            name: Some(name.to_string()),
            time_available: time,
            energy_level: Some(energy.to_string()),
            season: Some(season.to_string()),
        }
    }

    #[test]
    fn test_valid_profile_is_canonicalised() {
        let draft = validate_profile(&input(
            "  Weekend  ",
            Some(NumericInput::Number(3.0)),
            "high",
            "FALL",
        ))
        .unwrap();
        assert_eq!(draft.name, "Weekend");
        assert_eq!(draft.time_available, 3.0);
        assert_eq!(draft.energy_level, EnergyLevel::High);
        assert_eq!(draft.season, Season::Fall);
    }

    #[test]
    fn test_missing_time_defaults_to_zero() {
        let draft = validate_profile(&input("Evening", None, "Low", "Winter")).unwrap();
        assert_eq!(draft.time_available, 0.0);
    }

    #[test]
    fn test_time_as_text_is_accepted() {
        let draft = validate_profile(&input(
            "Evening",
            Some(NumericInput::Text("1.5".to_string())),
            "Low",
            "Winter",
        ))
        .unwrap();
        assert_eq!(draft.time_available, 1.5);
    }

    #[test]
    fn test_negative_time_rejected() {
        let errors = validate_profile(&input(
            "Evening",
            Some(NumericInput::Number(-1.0)),
            "Low",
            "Winter",
        ))
        .unwrap_err();
        assert_eq!(errors, vec!["timeAvailable must be a non-negative number"]);
    }

    #[test]
    fn test_all_errors_collected() {
        let errors = validate_profile(&ProfileInput::default()).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Name is required",
                "energyLevel is required",
                "season is required"
            ]
        );
    }

    #[test]
    fn test_out_of_domain_enums_rejected() {
        let errors = validate_profile(&input("Focus", None, "Extreme", "Autumn")).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("Low, Medium, or High"));
        assert!(errors[1].contains("Winter, Spring, Summer, or Fall"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let errors = validate_profile(&input("   ", None, "Low", "Spring")).unwrap_err();
        assert_eq!(errors, vec!["Name is required"]);
    }
}
