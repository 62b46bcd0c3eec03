//! Tracing/logging setup shared by binaries and tests.

/// Initialize process-wide tracing (JSON lines, `RUST_LOG` filtering).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize human-readable tracing routed through the test harness writer.
pub fn init_for_tests() {
    tracing::init_for_tests();
}

/// Tracing configuration (filters, layers).
pub mod tracing;

#[cfg(test)]
mod tests {
    #[test]
    fn repeated_initialization_is_a_no_op() {
        super::init();
        super::init();
        super::init_for_tests();

        ::tracing::info!("subscriber installed once");
    }
}
