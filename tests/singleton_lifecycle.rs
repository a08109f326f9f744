// Runs in its own test binary so no other test touches the instance first.

use pattern_demos::singleton::Singleton;

#[test]
fn singleton_starts_uninitialized_and_stays_initialized() {
    assert!(!Singleton::is_initialized());

    let first = Singleton::instance();
    assert!(Singleton::is_initialized());

    let second = Singleton::instance();
    assert!(std::ptr::eq(first, second));
    assert!(Singleton::is_initialized());
}
