//! Tests for tracing subscriber setup

#[cfg(test)]
mod tests {
    use nqueens::io::logging::{default_directive, init_logging};

    // Tests verbose runs log search summaries
    // Verified by swapping the verbose and quiet directives
    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "info");
    }

    // Tests the global subscriber is installed only once
    // Verified by panicking on repeated initialization
    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(false);

        assert!(
            !init_logging(true),
            "second initialization must not replace the subscriber"
        );
    }
}
