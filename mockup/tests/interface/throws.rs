use std::panic::{catch_unwind, AssertUnwindSafe};

use mockup::{invoked, mock, throw_, when, MockableDefault};

#[derive(Debug, Clone, PartialEq)]
pub struct Failure(pub &'static str);

trait Base {
    fn test(&self, a: i32) -> i32;
}

mock! {
    #[derive(Default)]
    pub struct TestBase;

    impl Base for TestBase {
        fn test(&self, a: i32) -> i32;
    }
}

fn failure<F: FnOnce() -> R, R>(f: F) -> Option<Failure> {
    let payload = catch_unwind(AssertUnwindSafe(f)).err()?;

    payload.downcast_ref::<Failure>().cloned()
}

#[test]
fn action_throws() {
    let tb = TestBase::mock();

    when!(tb, test(42)).will(throw_([Failure("poop")]));

    assert_eq!(Some(Failure("poop")), failure(|| tb.test(42)));
    assert_eq!(0, tb.test(43));
}

#[test]
fn throwing_call_is_recorded() {
    let tb = TestBase::mock();

    when!(tb, test(_)).will(throw_([Failure("poop")]));

    assert!(failure(|| tb.test(1)).is_some());

    assert!(invoked!(tb, test(1)));
    assert_eq!(1, tb.mock_test().invocations());
}

#[test]
fn errors_in_order() {
    let tb = TestBase::mock();

    when!(tb, test(_)).will(throw_([Failure("first"), Failure("second")]));

    assert_eq!(Some(Failure("first")), failure(|| tb.test(1)));
    assert_eq!(Some(Failure("second")), failure(|| tb.test(1)));
    assert_eq!(Some(Failure("second")), failure(|| tb.test(1)));
    assert_eq!(3, tb.mock_test().invocations());
}
