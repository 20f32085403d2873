use crate::fatal::{self, Violation};
use crate::Optional;

/// Success or failure, tagged by its variant.
///
/// Exactly one of the two slots exists at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultOf<T, E> {
    Ok(T),
    Err(E),
}

impl<T, E> ResultOf<T, E> {
    #[inline(always)]
    pub fn success(value: T) -> ResultOf<T, E> {
        ResultOf::Ok(value)
    }

    #[inline(always)]
    pub fn failure(error: E) -> ResultOf<T, E> {
        ResultOf::Err(error)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ResultOf::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, ResultOf::Err(_))
    }

    /// The success value, absent on failure.
    pub fn ok(self) -> Optional<T> {
        match self {
            ResultOf::Ok(value) => Optional::of(value),
            ResultOf::Err(_) => Optional::none(),
        }
    }

    /// The failure value, absent on success.
    pub fn err(self) -> Optional<E> {
        match self {
            ResultOf::Ok(_) => Optional::none(),
            ResultOf::Err(error) => Optional::of(error),
        }
    }

    /// Returns the success value, or fails fatally on failure.
    pub fn unwrap(self) -> T {
        match self {
            ResultOf::Ok(value) => value,
            ResultOf::Err(_) => fatal::violation(Violation::BadUnwrap { what: "result" }),
        }
    }

    /// Returns the failure value, or fails fatally on success.
    pub fn unwrap_err(self) -> E {
        match self {
            ResultOf::Ok(_) => fatal::violation(Violation::BadUnwrap { what: "result error" }),
            ResultOf::Err(error) => error,
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for ResultOf<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => ResultOf::Ok(value),
            Err(error) => ResultOf::Err(error),
        }
    }
}

impl<T, E> From<ResultOf<T, E>> for Result<T, E> {
    fn from(value: ResultOf<T, E>) -> Self {
        match value {
            ResultOf::Ok(value) => Ok(value),
            ResultOf::Err(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod result_tests {
    use crate::{Optional, ResultOf};
    use crate::testing::catch_fatal;

    #[test]
    fn success_holds_only_ok_slot() {
        let result: ResultOf<i32, &str> = ResultOf::success(4);
        assert!(result.is_ok());
        assert!(!result.is_err());
        assert_eq!(Optional::of(4), result.ok());
        assert_eq!(Optional::none(), result.err());
        assert_eq!(4, result.unwrap());
    }

    #[test]
    fn failure_holds_only_err_slot() {
        let result: ResultOf<i32, &str> = ResultOf::failure("disk");
        assert!(result.is_err());
        assert_eq!(Optional::none(), result.ok());
        assert_eq!("disk", result.unwrap_err());
    }

    #[test]
    fn unwrap_of_failure_is_fatal() {
        let result: ResultOf<i32, &str> = ResultOf::failure("disk");
        let diagnostic = catch_fatal(|| result.unwrap()).unwrap_err();
        assert_eq!("[claw panicked]: unwrapping a bad result", diagnostic);
    }

    #[test]
    fn unwrap_err_of_success_is_fatal() {
        let result: ResultOf<i32, &str> = ResultOf::success(1);
        assert!(catch_fatal(|| result.unwrap_err()).is_err());
    }

    #[test]
    fn converts_to_and_from_std_result() {
        let result: ResultOf<u8, ()> = Ok(3).into();
        assert_eq!(Ok(3), result.into_result());
        let failed: ResultOf<u8, ()> = Err(()).into();
        assert_eq!(ResultOf::failure(()), failed);
    }
}
