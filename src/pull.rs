//! Result of a single pull on a window engine.

use serde::Serialize;

/// Either the next window or the terminal finished signal.
///
/// Non-wrapping engines return `Finished` once every element has been
/// covered and keep returning it on every later call. Wrapping engines never
/// return it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pull<T> {
    Finished,
    Window(Vec<T>),
}

impl<T> Pull<T> {
    pub fn is_finished(&self) -> bool {
        matches!(self, Pull::Finished)
    }

    /// Converts into `Option`, mapping `Finished` to `None`.
    pub fn into_window(self) -> Option<Vec<T>> {
        match self {
            Pull::Finished => None,
            Pull::Window(window) => Some(window),
        }
    }

    /// Borrows the window, if any.
    pub fn window(&self) -> Option<&[T]> {
        match self {
            Pull::Finished => None,
            Pull::Window(window) => Some(window),
        }
    }
}

impl<T> From<Option<Vec<T>>> for Pull<T> {
    fn from(window: Option<Vec<T>>) -> Self {
        match window {
            Some(window) => Pull::Window(window),
            None => Pull::Finished,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finished_has_no_window() {
        let pull: Pull<i32> = Pull::Finished;
        assert!(pull.is_finished());
        assert_eq!(pull.window(), None);
        assert_eq!(pull.into_window(), None);
    }

    #[test]
    fn window_converts_from_option() {
        let pull = Pull::from(Some(vec![1, 2]));
        assert!(!pull.is_finished());
        assert_eq!(pull.window(), Some(&[1, 2][..]));
        assert_eq!(Pull::<i32>::from(None), Pull::Finished);
    }

    #[test]
    fn serializes_tagged() {
        let json = serde_json::to_value(Pull::Window(vec![1, 2, 3])).unwrap();
        assert_eq!(json, serde_json::json!({"window": [1, 2, 3]}));
        let json = serde_json::to_value(Pull::<i32>::Finished).unwrap();
        assert_eq!(json, serde_json::json!("finished"));
    }
}
