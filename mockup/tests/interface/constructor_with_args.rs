use mockup::{mock, return_, when, Mockable, Mocked};

trait Count {
    fn next(&mut self) -> u32;
}

mock! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Counter {
        pub start: u32,
    }

    impl Count for Counter {
        fn next(&mut self) -> u32;
    }
}

#[test]
fn state_is_accessible() {
    let mut counter = Counter { start: 5 }.into_mock();

    assert_eq!(5, counter.start);

    counter.start = 7;

    assert_eq!(7, counter.state.start);
    assert_eq!(Counter { start: 7 }, counter.into_state());
}

#[test]
fn from_state() {
    let mut counter = CounterMock::from_state(Counter { start: 1 });

    when!(counter, next()).will(return_([3, 4]));

    assert_eq!(3, counter.next());
    assert_eq!(4, counter.next());
    assert_eq!(1, counter.start);
}
