use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use mockup::{invoke, invoked, mock, when, MockableDefault};

trait Base {
    fn op(&mut self, a: i32, b: i32) -> i32;
    fn notify(&self);
}

mock! {
    #[derive(Default)]
    pub struct TestBase;

    impl Base for TestBase {
        fn op(&mut self, a: i32, b: i32) -> i32;
        fn notify(&self);
    }
}

#[test]
fn closure_gets_arguments() {
    let mut tb = TestBase::mock();

    when!(tb, op(_, _)).will(invoke(|(a, b): (i32, i32)| a - b));

    assert_eq!(-1, tb.op(1, 2));
    assert_eq!(1, tb.op(2, 1));
}

#[test]
fn closure_keeps_state() {
    let mut tb = TestBase::mock();

    let mut calls = 0;
    when!(tb, op(_, _)).will(move |(a, _): (i32, i32)| {
        calls += 1;

        a * calls
    });

    assert_eq!(2, tb.op(2, 0));
    assert_eq!(4, tb.op(2, 0));
    assert_eq!(6, tb.op(2, 0));
}

#[test]
fn side_effects() {
    let tb = TestBase::mock();
    let count = Arc::new(AtomicUsize::new(0));

    {
        let count = count.clone();

        when!(tb, notify()).will(move |()| {
            count.fetch_add(1, Ordering::Relaxed);
        });
    }

    tb.notify();
    tb.notify();

    assert_eq!(2, count.load(Ordering::Relaxed));
    assert!(invoked!(tb, notify()));
}
