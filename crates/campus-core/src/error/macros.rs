//! Error macros for campus

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::CampusError::invalid_value($context, $value))
    };
}
