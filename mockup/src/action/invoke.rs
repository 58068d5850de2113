use super::Action;

/// Creates an [`Invoke`] action that forwards the call arguments to `func`.
pub fn invoke<F>(func: F) -> Invoke<F> {
    Invoke(func)
}

/// Action that calls the wrapped function with the call arguments.
#[derive(Debug)]
pub struct Invoke<F>(pub F);

impl<F, X, T> Action<X, T> for Invoke<F>
where
    F: FnMut(X) -> T,
{
    fn exec(&mut self, args: X) -> T {
        (self.0)(args)
    }
}
