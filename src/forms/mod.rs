use serde::Serialize;
use validator::ValidationErrors;

pub mod celebrities;
pub mod enquiries;
pub mod import_export;

/// A single field-level validation failure, shown next to the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Flatten validator output into field errors ordered by `fields`.
///
/// `fields` maps struct field names to the names exposed to clients; fields
/// not listed keep their struct name and sort last.
pub(crate) fn collect_field_errors(
    errors: &ValidationErrors,
    fields: &[(&str, &str)],
) -> Vec<FieldError> {
    let position = |name: &str| {
        fields
            .iter()
            .position(|(field, _)| *field == name)
            .unwrap_or(fields.len())
    };

    let mut by_field = errors
        .field_errors()
        .into_iter()
        .map(|(name, errs)| (name.to_string(), errs))
        .collect::<Vec<_>>();
    by_field.sort_by_key(|(name, _)| (position(name.as_str()), name.clone()));

    by_field
        .into_iter()
        .flat_map(|(name, errs)| {
            let exposed = fields
                .iter()
                .find(|(field, _)| *field == name.as_str())
                .map_or_else(|| name.clone(), |(_, exposed)| exposed.to_string());
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map_or_else(|| err.code.to_string(), ToString::to_string);
                FieldError::new(exposed.clone(), message)
            })
        })
        .collect()
}
