//! Precondition checks for operations whose misuse is a caller bug rather
//! than a recoverable error.
//!
//! By default every check is enforced: a violation is logged and the thread
//! panics. Building with the `unchecked-contracts` feature demotes the checks
//! to `debug_assert!`, so release builds skip them. Slice indexing underneath
//! still bounds-checks, so a skipped check never turns into undefined behavior.

/// Panic (after logging) when `$cond` does not hold.
macro_rules! require {
    ($cond:expr, $op:expr, $fmt:expr $(, $args:expr)* $(,)?) => {{
        if cfg!(feature = "unchecked-contracts") {
            debug_assert!($cond, $fmt $(, $args)*);
        } else if !$cond {
            crate::contract::violated($op, format_args!($fmt $(, $args)*));
        }
    }};
}

pub(crate) use require;

#[cold]
#[inline(never)]
pub(crate) fn violated(op: &'static str, detail: std::fmt::Arguments<'_>) -> ! {
    crate::logging::graphslice_log!(
        log::Level::Error,
        "contract_violation",
        "op={} {}",
        op,
        detail
    );
    panic!("{op}: precondition violated: {detail}");
}

#[cfg(all(test, not(feature = "unchecked-contracts")))]
mod tests {
    #[test]
    fn holding_precondition_is_silent() {
        require!(1 < 2, "test", "never fires");
    }

    #[test]
    #[should_panic(expected = "probe: precondition violated: index 4 >= len 2")]
    fn broken_precondition_panics_with_context() {
        let (index, len) = (4usize, 2usize);
        require!(index < len, "probe", "index {} >= len {}", index, len);
    }
}
