//! The `pipe!` macro.

/// Runs a value through fallible steps from left to right.
///
/// `pipe!(x, f, g)` is `pipe(x).then(f).then(g).run()`: each step returns
/// `Result<T, E>` and the first `Err` stops the pipe.
///
/// # Syntax
///
/// - `pipe!(x)` - No steps; evaluates to `Err(PipeError::Empty)`
/// - `pipe!(x, f)` - Runs `f`
/// - `pipe!(x, f, g, ...)` - Runs `f`, then `g`, ...
///
/// # Examples
///
/// ```
/// use casebox::compose::PipeError;
/// use casebox::pipe;
///
/// fn add_hundred(value: i32) -> Result<i32, String> { Ok(value + 100) }
/// fn double(value: i32) -> Result<i32, String> { Ok(value * 2) }
///
/// assert_eq!(pipe!(1, add_hundred, double), Ok(202));
///
/// let nothing: Result<i32, PipeError<String>> = pipe!(1);
/// assert_eq!(nothing, Err(PipeError::Empty));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $crate::compose::pipe($value).run()
    };

    ($value:expr, $($step:expr),+ $(,)?) => {
        $crate::compose::pipe($value)$(.then($step))+.run()
    };
}

#[cfg(test)]
mod tests {
    use crate::compose::PipeError;
    use rstest::rstest;

    #[rstest]
    fn test_pipe_value_only() {
        let result: Result<i32, PipeError<()>> = pipe!(42);
        assert_eq!(result, Err(PipeError::Empty));
    }

    #[rstest]
    fn test_pipe_single() {
        let double = |value: i32| Ok::<_, ()>(value * 2);
        assert_eq!(pipe!(5, double), Ok(10));
    }

    #[rstest]
    fn test_pipe_three() {
        let square = |value: i32| Ok::<_, String>(value * value);
        let double = |value: i32| Ok(value * 2);
        let add_one = |value: i32| Ok(value + 1);
        assert_eq!(pipe!(3, square, double, add_one), Ok(19));
    }

    #[rstest]
    fn test_pipe_stops_at_error() {
        let fail = |_: i32| Err::<i32, _>("stop");
        let unreachable = |_: i32| -> Result<i32, &str> { panic!("not called") };
        assert_eq!(pipe!(3, fail, unreachable), Err(PipeError::Step("stop")));
    }
}
