//! Helpers for floating-point comparison with absolute tolerances.

/// Standard epsilon used where a caller does not supply a tolerance.
pub const DEFAULT_EPS: f64 = 1e-10;

/// Returns true if `a` and `b` are within `acc` of each other absolutely,
/// or if both are the same infinity.
pub fn almost_eq(a: f64, b: f64, acc: f64) -> bool {
    if a.is_infinite() && b.is_infinite() {
        return a == b;
    }
    (a - b).abs() < acc
}

/// Asserts [`almost_eq`] with a readable failure message.
pub fn assert_almost_eq(a: f64, b: f64, acc: f64) {
    assert!(
        almost_eq(a, b, acc),
        "assertion failed: {a} is not almost equal to {b} (tolerance {acc:e})",
    );
}
