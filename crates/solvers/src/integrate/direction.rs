//! Time comparisons relative to the direction of integration.

use tether_core::Time;

/// Returns `true` if `a` comes strictly before `b` when stepping by `dt`.
///
/// For forward integration (`dt > 0`) this is `a < b`; otherwise it is
/// `a > b`. Equal values are never "before" each other.
pub(crate) fn is_before<T: Time>(a: T, b: T, dt: T) -> bool {
    if dt > T::zero() {
        b - a > T::zero()
    } else {
        a - b > T::zero()
    }
}

/// Returns whichever of `a` and `b` is reached first when stepping by `dt`.
pub(crate) fn first_of<T: Time>(a: T, b: T, dt: T) -> T {
    if is_before(b, a, dt) { b } else { a }
}
