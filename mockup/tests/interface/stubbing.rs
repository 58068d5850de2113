use mockup::{invoke, invoked, mock, return_, when, MockableDefault};

trait Base {
    fn op(&mut self, a: i32, b: i32) -> i32;
    fn test(&self, a: i32) -> i32;
    fn value(&self) -> i32;
    fn name(&self) -> String;
}

mock! {
    #[derive(Default)]
    pub struct TestBase;

    impl Base for TestBase {
        fn op(&mut self, a: i32, b: i32) -> i32;
        fn test(&self, a: i32) -> i32;
        fn value(&self) -> i32;
        fn name(&self) -> String;
    }
}

#[test]
fn function_is_invoked() {
    let tb = TestBase::mock();

    when!(tb, value()).will(return_([1, 2, 4]));

    assert_eq!(1, tb.value());
    assert_eq!(2, tb.value());
    assert_eq!(4, tb.value());
    assert_eq!(4, tb.value());

    assert!(invoked!(tb, value()));
}

#[test]
fn different_arguments() {
    let tb = TestBase::mock();

    when!(tb, test(_)).will(return_([42]));
    when!(tb, test(2)).will(return_([4]));

    assert_eq!(42, tb.test(1));
    assert_eq!(4, tb.test(2));
    assert_eq!(0, tb.value());
    assert_eq!(42, tb.test(3));

    assert!(invoked!(tb, test(3)));
    assert!(invoked!(tb, test(1)));
    assert!(invoked!(tb, test(2)));
    assert!(invoked!(tb, test(_)));
    assert!(!invoked!(tb, test(4)));
    assert!(invoked!(tb, value()));
}

#[test]
fn unmatched_call_uses_default() {
    let tb = TestBase::mock();

    when!(tb, test(42)).will(return_([42]));

    assert_eq!(0, tb.test(1));
    assert_eq!(42, tb.test(42));

    assert!(invoked!(tb, test(42)));
    assert!(invoked!(tb, test(1)));
}

#[test]
fn last_registration_wins() {
    let tb = TestBase::mock();

    when!(tb, test(7)).will(return_([1]));
    when!(tb, test(_)).will(return_([2]));

    assert_eq!(2, tb.test(7));

    when!(tb, test(7)).will(return_([3]));

    assert_eq!(3, tb.test(7));
    assert_eq!(2, tb.test(8));
}

#[test]
fn action_gets_arguments() {
    let mut tb = TestBase::mock();

    when!(tb, op(_, _)).will(|(a, b): (i32, i32)| a + b);
    when!(tb, op(0, _)).will(invoke(|(_, b): (i32, i32)| -b));

    assert_eq!(5, tb.op(2, 3));
    assert_eq!(-3, tb.op(0, 3));

    assert!(invoked!(tb, op(2, 3)));
    assert!(!invoked!(tb, op(3, 2)));
    assert_eq!(2, tb.mock_op().invocations());
}

#[test]
fn default_values() {
    let tb = TestBase::mock();

    assert_eq!(String::new(), tb.name());

    when!(tb, name()).will(return_([String::from("hello, world")]));

    assert_eq!("hello, world", tb.name());
    assert_eq!(2, tb.mock_name().invocations());
}

#[test]
fn instances_are_independent() {
    let a = TestBase::mock();
    let b = TestBase::mock();

    when!(a, value()).will(return_([1]));

    assert_eq!(1, a.value());
    assert_eq!(0, b.value());
    assert_eq!(0, b.value());

    assert_eq!(1, a.mock_value().invocations());
    assert_eq!(2, b.mock_value().invocations());
}
