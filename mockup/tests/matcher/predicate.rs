use mockup::{invoked, matcher::*, mock, when, MockableDefault};

trait Base {
    fn op(&self, a: i32, b: i32) -> i32;
}

mock! {
    #[derive(Default)]
    pub struct TestBase;

    impl Base for TestBase {
        fn op(&self, a: i32, b: i32) -> i32;
    }
}

#[test]
fn custom_predicate() {
    let tb = TestBase::mock();

    tb.op(1, 2);

    assert!(invoked!(tb, op(predicate(|x: &i32| *x < 4), 2)));
    assert!(!invoked!(tb, op(predicate(|x: &i32| *x > 4), 2)));
}

#[test]
fn arguments_are_matched_by_conjunction() {
    let tb = TestBase::mock();

    tb.op(1, 2);

    assert!(invoked!(tb, op(1, 2)));
    assert!(invoked!(tb, op(_, 2)));
    assert!(invoked!(tb, op(1, _)));
    assert!(!invoked!(tb, op(1, 3)));
    assert!(!invoked!(tb, op(2, 2)));
}

#[test]
fn predicate_selects_action() {
    let tb = TestBase::mock();

    when!(tb, op(predicate(|a: &i32| a % 2 == 0), _)).will(|(a, b): (i32, i32)| a * b);

    assert_eq!(8, tb.op(2, 4));
    assert_eq!(0, tb.op(3, 4));
}
