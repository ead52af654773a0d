//! Canonical logging macros

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use fieldkit_core::log_op_start;
/// log_op_start!("soft_delete");
/// log_op_start!("soft_delete", model = "pages.Page", pk = 3u64);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = fieldkit_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = fieldkit_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use fieldkit_core::log_op_end;
/// log_op_end!("soft_delete", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = fieldkit_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = fieldkit_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// The error is converted into the structured `FkError` so the event carries
/// the stable kind and code.
///
/// # Example
///
/// ```
/// # use fieldkit_core::{log_op_error, errors::FieldkitError};
/// let err = FieldkitError::RecordNotFound { model: "pages.Page".into(), pk: "9".into() };
/// log_op_error!("restore", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::FkError;
        let fk_err: FkError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = fieldkit_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?fk_err.kind(),
            err.code = fk_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::FkError;
        let fk_err: FkError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = fieldkit_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?fk_err.kind(),
            err.code = fk_err.code(),
            $($field)*
        );
    }};
}
