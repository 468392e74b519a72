//! Form logic: choice validation/normalization and payload assembly.

pub mod choices;
pub mod payload;

pub use choices::{
    ChoiceLimits, DEFAULT_MAX_CHOICE_CHARS, DEFAULT_UNIQUE_CHOICE_CEILING, Violation,
    ViolationReport, choice_set, normalize, sort_alphabetically, validate,
};
pub use payload::{FieldConfig, SubmitBlocked, build_field_config, missing_required};
