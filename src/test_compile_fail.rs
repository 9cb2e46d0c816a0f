//! Doc-tests not visible as part of the documentation.

/// A producer can only be advanced through exclusive access.
///
/// ```no_run
/// use steprange::{range, Producer};
/// let mut r = range(0_i64, 3);
/// let _ = r.advance();
/// ```
///
/// ```compile_fail
/// use steprange::{range, Producer};
/// let r = range(0_i64, 3);
/// let shared = &r;
/// let _ = shared.advance();
/// ```
pub struct AdvanceRequiresExclusiveAccess;

/// A closure producer is only cloneable if its closure is.
///
/// ```no_run
/// use steprange::{from_fn, Step};
/// let p = from_fn(|| Step::Next(1_i64));
/// let _q = p.clone();
/// ```
///
/// ```compile_fail
/// use steprange::{from_fn, Step};
/// let mut owned = vec![1_i64];
/// let moved = std::sync::Mutex::new(Vec::<i64>::new());
/// let p = from_fn(move || {
///     moved.lock().unwrap().push(1);
///     Step::from(owned.pop())
/// });
/// let _q = p.clone();
/// ```
pub struct FromFnCloneRequiresCloneClosure;

/// Integer producers are only available for the primitive integer types.
///
/// ```compile_fail
/// let _ = steprange::range(0.0_f64, 1.0);
/// ```
///
/// ```compile_fail
/// struct Mine;
/// impl steprange::Integer for Mine {}
/// ```
pub struct IntegerIsSealed;
