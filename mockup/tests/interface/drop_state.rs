use std::sync::Arc;

use mockup::{mock, when, MockableDefault};

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

#[test]
fn actions_are_dropped_with_the_mock() {
    let shared = Arc::new(());

    {
        let tb = TestBase::mock();
        let captured = shared.clone();

        when!(tb, test(_)).will(move |(x,): (i32,)| {
            let _captured = &captured;

            x + 1
        });

        assert_eq!(2, tb.test(1));
        assert_eq!(2, Arc::strong_count(&shared));
    }

    assert_eq!(1, Arc::strong_count(&shared));
}
