//! Structured logging helpers.
//!
//! Every event carries a `component` field so JSON logs from different
//! parts of the account stack can be filtered consistently.

/// Helper to create structured log entries with consistent formatting.
#[macro_export]
macro_rules! log_event {
    (info, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };

    (warn, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::warn!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };

    (error, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::error!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };

    (debug, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::debug!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log an account-scoped event with the standard `account` field.
#[macro_export]
macro_rules! log_account_event {
    ($level:ident, $component:expr, $msg:expr, $account:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = $component,
            account = %$account,
            $($($field)*,)?
            $msg
        )
    };
}
