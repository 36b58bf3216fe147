//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use objscope_core::log_op_start;
/// log_op_start!("load_portable");
/// log_op_start!("load_portable", file = "data.bin");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use objscope_core::log_op_end;
/// log_op_end!("load_portable", bytes = 512);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::EVENT_END,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::EVENT_END,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```
/// # use objscope_core::{log_op_error, errors::ObjScopeError};
/// let err = ObjScopeError::NoSelection;
/// log_op_error!("save_native", err);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr) => {{
        let err: &$crate::errors::ObjScopeError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::EVENT_END_ERROR,
            err_class = ?err.class(),
            err_code = err.code(),
        );
    }};
    ($op:expr, $err:expr, $($field:tt)*) => {{
        let err: &$crate::errors::ObjScopeError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::EVENT_END_ERROR,
            err_class = ?err.class(),
            err_code = err.code(),
            $($field)*
        );
    }};
}
