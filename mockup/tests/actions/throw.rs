use std::panic::{catch_unwind, AssertUnwindSafe};

use mockup::{mock, throw_, when, MockableDefault};

#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    Timeout,
    Refused,
}

trait Client {
    fn send(&self, data: Vec<u8>) -> usize;
}

mock! {
    #[derive(Default)]
    pub struct TestClient;

    impl Client for TestClient {
        fn send(&self, data: Vec<u8>) -> usize;
    }
}

#[test]
fn errors_in_order_then_last() {
    let client = TestClient::mock();

    when!(client, send(_)).will(throw_([Failure::Timeout, Failure::Refused]));

    let errors = (0..3)
        .map(|_| {
            catch_unwind(AssertUnwindSafe(|| client.send(vec![1, 2, 3])))
                .unwrap_err()
                .downcast::<Failure>()
                .map(|e| *e)
                .unwrap()
        })
        .collect::<Vec<_>>();

    assert_eq!(
        vec![Failure::Timeout, Failure::Refused, Failure::Refused],
        errors
    );
    assert_eq!(3, client.mock_send().invocations());
}

#[test]
#[should_panic(expected = "throw_ needs at least one error")]
fn empty_errors() {
    let _ = throw_(Vec::<Failure>::new());
}
