use mockup::{mock, return_, when, Error, MockableDefault, Mocked};

#[derive(Debug, Clone, PartialEq)]
pub struct NotDefault {
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadError;

trait Factory {
    fn make(&self) -> NotDefault;
    fn load(&self, id: u32) -> Result<String, LoadError>;
}

mock! {
    #[derive(Default)]
    pub struct TestFactory;

    impl Factory for TestFactory {
        #[mockup(no_default)]
        fn make(&self) -> NotDefault;

        #[mockup(no_default)]
        fn load(&self, id: u32) -> Result<String, LoadError>;
    }
}

#[test]
#[should_panic(expected = "No action registered for `Factory::make`")]
fn no_action_registered() {
    let factory = TestFactory::mock();

    factory.make();
}

#[test]
fn action_registered() {
    let factory = TestFactory::mock();

    when!(factory, make()).will(return_([NotDefault { value: 42 }]));

    assert_eq!(42, factory.make().value);
}

#[test]
fn dispatch_returns_error() {
    let factory = TestFactory::mock();

    let err = factory
        .mock_state()
        .dispatch::<mock_test_factory::method::FactoryMake>(())
        .unwrap_err();

    assert_eq!(
        Error::NoActionRegistered {
            method: "Factory::make",
            args: "()".into(),
        },
        err
    );
    assert_eq!(1, factory.mock_make().invocations());
}

#[test]
fn fallible_method() {
    let factory = TestFactory::mock();

    when!(factory, load(_)).will(return_([Err(LoadError)]));
    when!(factory, load(1)).will(return_([Ok(String::from("one"))]));

    assert_eq!(Ok(String::from("one")), factory.load(1));
    assert_eq!(Err(LoadError), factory.load(2));
}
