//! Form validation helpers.
//!
//! Validation collects every violation instead of stopping at the first one,
//! so the editor can mark all offending inputs in a single pass.

use std::fmt;

use crate::ids::GuildId;

/// A single field violation, keyed by the wire field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field_name} is required")]
    Required { field_name: &'static str },

    #[error("{field_name} must be at least {min} (got {value})")]
    BelowMinimum {
        field_name: &'static str,
        min: i32,
        value: i32,
    },

    #[error("required level for guild {guild_id} must be at least 0 (got {value})")]
    NegativeGuildLevel { guild_id: GuildId, value: i32 },
}

impl ValidationError {
    /// Wire field name this error refers to, if it targets a scalar field.
    pub fn field_name(&self) -> Option<&'static str> {
        match self {
            Self::Required { field_name } | Self::BelowMinimum { field_name, .. } => {
                Some(*field_name)
            }
            Self::NegativeGuildLevel { .. } => None,
        }
    }
}

/// All violations found in one validation pass. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Turn collected violations into a result.
    pub fn check(errors: Vec<ValidationError>) -> Result<(), Self> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self(errors))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any violation targets the given wire field.
    pub fn has_field(&self, field_name: &str) -> bool {
        self.0.iter().any(|e| e.field_name() == Some(field_name))
    }

    /// Whether the required level of the given guild was rejected.
    pub fn has_guild(&self, guild_id: GuildId) -> bool {
        self.0.iter().any(|e| {
            matches!(e, ValidationError::NegativeGuildLevel { guild_id: id, .. } if *id == guild_id)
        })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate a string is non-empty after trimming.
pub fn require_non_empty(
    value: &str,
    field_name: &'static str,
    errors: &mut Vec<ValidationError>,
) {
    if value.trim().is_empty() {
        errors.push(ValidationError::Required { field_name });
    }
}

/// Validate a number is not below `min`.
pub fn require_min(value: i32, min: i32, field_name: &'static str, errors: &mut Vec<ValidationError>) {
    if value < min {
        errors.push(ValidationError::BelowMinimum {
            field_name,
            min,
            value,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut errors = Vec::new();
        require_non_empty("   ", "name", &mut errors);
        require_non_empty("Longsword", "type", &mut errors);

        assert_eq!(errors, vec![ValidationError::Required { field_name: "name" }]);
    }

    #[test]
    fn minimum_is_inclusive() {
        let mut errors = Vec::new();
        require_min(0, 0, "defense", &mut errors);
        require_min(-1, 0, "value", &mut errors);

        let errors = ValidationErrors::check(errors).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.has_field("value"));
        assert!(!errors.has_field("defense"));
    }

    #[test]
    fn display_joins_all_violations() {
        let errors = ValidationErrors::check(vec![
            ValidationError::Required { field_name: "name" },
            ValidationError::NegativeGuildLevel {
                guild_id: GuildId::new(3),
                value: -2,
            },
        ])
        .unwrap_err();

        assert_eq!(
            errors.to_string(),
            "name is required; required level for guild 3 must be at least 0 (got -2)"
        );
        assert!(errors.has_guild(GuildId::new(3)));
    }
}
