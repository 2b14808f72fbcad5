//! Design-case validation logic.

use crate::schema::{DesignCase, LATEST_VERSION};
use ag_core::AgError;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid influent: {0}")]
    Influent(#[from] AgError),

    #[error("Unknown technology: {name}")]
    UnknownTechnology { name: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_case(case: &DesignCase) -> Result<(), ValidationError> {
    if case.version == 0 || case.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    if case.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "name".to_string(),
            value: case.name.clone(),
            reason: "must not be empty".to_string(),
        });
    }

    case.influent.to_influent()?;

    case.selected_technologies()
        .map_err(|e| ValidationError::UnknownTechnology { name: e.0 })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::InfluentDef;

    fn case() -> DesignCase {
        DesignCase {
            version: 1,
            name: "Plant A".to_string(),
            description: None,
            influent: InfluentDef {
                flow: 1.0,
                unit: "MGD".to_string(),
                bod: 250.0,
                tss: 220.0,
                tkn: 40.0,
                tp: 7.0,
            },
            technologies: vec![],
        }
    }

    #[test]
    fn valid_case_passes() {
        validate_case(&case()).unwrap();
    }

    #[test]
    fn bad_unit_is_reported() {
        let mut c = case();
        c.influent.unit = "GPD".to_string();
        let err = validate_case(&c).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Influent(AgError::InvalidUnit { .. })
        ));
    }

    #[test]
    fn negative_concentration_is_reported() {
        let mut c = case();
        c.influent.tkn = -4.0;
        let err = validate_case(&c).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Influent(AgError::InvalidInput { what: "TKN", .. })
        ));
    }

    #[test]
    fn unknown_technology() {
        let mut c = case();
        c.technologies = vec!["CAS".to_string(), "SBR".to_string()];
        let err = validate_case(&c).unwrap_err();
        assert!(err.to_string().contains("SBR"));
    }

    #[test]
    fn future_version_rejected() {
        let mut c = case();
        c.version = 2;
        assert!(matches!(
            validate_case(&c),
            Err(ValidationError::UnsupportedVersion { version: 2 })
        ));
    }

    #[test]
    fn empty_name_rejected() {
        let mut c = case();
        c.name = "  ".to_string();
        assert!(validate_case(&c).is_err());
    }
}
