//! Class-name combinator
//!
//! Builds the `class` attribute of a component from conditional pieces and
//! resolves conflicting utility classes so the last one wins.

mod groups;
mod merge;

pub use merge::merge_classes;

/// One argument to [`cn`]: a token string, a set of toggled tokens, a nested
/// list, or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassInput {
    Skip,
    /// May hold several whitespace-separated tokens.
    Token(String),
    /// `(class, enabled)` pairs; only enabled classes are kept.
    Toggle(Vec<(String, bool)>),
    List(Vec<ClassInput>),
}

impl ClassInput {
    // Depth-first, in argument order
    fn flatten_into(&self, out: &mut Vec<String>) {
        match self {
            ClassInput::Skip => {}
            ClassInput::Token(token) => {
                if !token.is_empty() {
                    out.push(token.clone());
                }
            }
            ClassInput::Toggle(pairs) => {
                out.extend(
                    pairs
                        .iter()
                        .filter(|(class, on)| *on && !class.is_empty())
                        .map(|(class, _)| class.clone()),
                );
            }
            ClassInput::List(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }
}

impl From<&str> for ClassInput {
    fn from(token: &str) -> Self {
        ClassInput::Token(token.to_string())
    }
}

impl From<String> for ClassInput {
    fn from(token: String) -> Self {
        ClassInput::Token(token)
    }
}

impl From<&String> for ClassInput {
    fn from(token: &String) -> Self {
        ClassInput::Token(token.clone())
    }
}

// A bare boolean never contributes a class, whatever its value.
impl From<bool> for ClassInput {
    fn from(_: bool) -> Self {
        ClassInput::Skip
    }
}

impl<T: Into<ClassInput>> From<Option<T>> for ClassInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassInput::Skip, Into::into)
    }
}

impl<S: Into<String>> From<(S, bool)> for ClassInput {
    fn from((class, on): (S, bool)) -> Self {
        ClassInput::Toggle(vec![(class.into(), on)])
    }
}

impl<T: Into<ClassInput>> From<Vec<T>> for ClassInput {
    fn from(items: Vec<T>) -> Self {
        ClassInput::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassInput>, const N: usize> From<[T; N]> for ClassInput {
    fn from(items: [T; N]) -> Self {
        ClassInput::List(items.into_iter().map(Into::into).collect())
    }
}

/// Flattens `inputs` and merges the result into one class string.
pub fn cn<I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassInput>,
{
    let mut tokens = Vec::new();
    for input in inputs {
        input.into().flatten_into(&mut tokens);
    }
    merge_classes(&tokens.join(" "))
}

/// Variadic form of [`cn`]: every argument is converted with `ClassInput::from`.
///
/// ```
/// use panasystem_shared::cn;
///
/// let active = true;
/// assert_eq!(cn!["px-2 py-1", ("p-3", active), None::<&str>], "p-3");
/// ```
#[macro_export]
macro_rules! cn {
    ($($input:expr),* $(,)?) => {
        $crate::utils::classes::cn::<::std::vec::Vec<$crate::utils::classes::ClassInput>>(::std::vec![
            $($crate::utils::classes::ClassInput::from($input)),*
        ])
    };
}
