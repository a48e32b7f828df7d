//! Internal logging helpers for structured graphslice events.

/// Single logging target for graphslice.
pub(crate) const LOG_TARGET: &str = "graphslice";

macro_rules! graphslice_log {
    ($level:expr, $event:expr, $fmt:expr $(, $args:expr)* $(,)?) => {{
        if log::log_enabled!(target: crate::logging::LOG_TARGET, $level) {
            log::log!(
                target: crate::logging::LOG_TARGET,
                $level,
                "event={} {}",
                $event,
                format_args!($fmt $(, $args)*)
            );
        }
    }};
}

pub(crate) use graphslice_log;
