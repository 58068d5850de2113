use mockup::{invoked, matcher::*, mock, when, MockableDefault, Ref, Sequence};

#[derive(Debug, Clone, PartialEq)]
pub struct Token(pub u32);

trait Sink {
    fn take(&self, token: &Token);
    fn name(&self, name: &str) -> usize;
}

mock! {
    #[derive(Default)]
    pub struct TestSink;

    impl Sink for TestSink {
        fn take(&self, #[mockup(by_ref)] token: &Token);
        fn name(&self, name: &str) -> usize;
    }
}

#[test]
fn reference_is_recorded() {
    let sink = TestSink::mock();
    let token = Token(42);

    sink.take(&token);

    assert!(invoked!(sink, take(&token)));
    assert!(invoked!(sink, take(&Token(42))));
    assert!(!invoked!(sink, take(&Token(1))));
    assert!(invoked!(sink, take(predicate(|r: &Ref<Token>| r.is(&token)))));
}

#[test]
fn temporary_argument() {
    let sink = TestSink::mock();

    sink.take(&Token(7));

    let _other = vec![Token(0); 16];

    assert!(invoked!(sink, take(&Token(7))));
    assert!(!invoked!(sink, take(&Token(0))));
}

#[test]
fn value_at_call_time_is_recorded() {
    let sink = TestSink::mock();
    let mut token = Token(1);

    sink.take(&token);
    token.0 = 2;
    sink.take(&token);

    let mut seq = Sequence::new();

    assert!(invoked!(seq, sink, take(&Token(1))));
    assert!(invoked!(seq, sink, take(&Token(2))));
    assert!(invoked!(sink, take(predicate(|r: &Ref<Token>| r.is(&token)))));
}

#[test]
fn borrowed_value_is_copied() {
    let sink = TestSink::mock();

    when!(sink, name(str_starts_with("a"))).will(|(name,): (String,)| name.len());

    assert_eq!(5, sink.name("alice"));
    assert_eq!(0, sink.name("bob"));

    assert!(invoked!(sink, name(String::from("bob"))));
    assert!(invoked!(sink, name(eq("alice"))));
    assert!(invoked!(sink, name(str_ends_with("ob"))));
    assert!(!invoked!(sink, name(eq("carol"))));
}
