use mockup::{invoked, mock, Sequence};

trait Base {
    fn test(&self, a: i32) -> i32;
    fn value(&self) -> i32;
}

mock! {
    #[derive(Default)]
    pub struct TestBase;

    impl Base for TestBase {
        fn test(&self, a: i32) -> i32;
        fn value(&self) -> i32;
    }
}

#[test]
fn invocations_in_sequence() {
    let tb = TestBaseMock::new();

    tb.test(1);
    tb.test(2);
    tb.value();
    tb.test(3);

    let mut seq = Sequence::new();

    assert!(invoked!(seq, tb, test(1)));
    assert!(invoked!(seq, tb, test(2)));
    assert!(!invoked!(seq, tb, test(1)));
    assert!(invoked!(seq, tb, value()));
    assert!(!invoked!(seq, tb, value()));
    assert!(invoked!(seq, tb, test(3)));
}

#[test]
fn failed_assertion_keeps_position() {
    let tb = TestBaseMock::new();

    tb.test(1);
    tb.test(2);

    let mut seq = Sequence::new();

    assert!(invoked!(seq, tb, test(1)));
    let order = seq.order();

    assert!(!invoked!(seq, tb, test(5)));
    assert_eq!(order, seq.order());

    assert!(invoked!(seq, tb, test(2)));
    assert!(seq.order() > order);
}

#[test]
fn sequence_across_mocks() {
    let a = TestBaseMock::new();
    let b = TestBaseMock::new();

    a.test(1);
    b.test(1);
    a.test(2);

    let mut seq = Sequence::new();

    assert!(invoked!(seq, b, test(1)));
    assert!(!invoked!(seq, a, test(1)));
    assert!(invoked!(seq, a, test(_)));
    assert!(!invoked!(seq, b, test(_)));
}

#[test]
fn independent_sequences() {
    let tb = TestBaseMock::new();

    tb.test(1);
    tb.test(2);

    let mut first = Sequence::new();
    let mut second = Sequence::new();

    assert!(invoked!(first, tb, test(2)));
    assert!(!invoked!(first, tb, test(1)));
    assert!(invoked!(second, tb, test(1)));
    assert!(invoked!(second, tb, test(2)));
}
