//! This module provides a trait [`Input`] for representing inputs generated for property based
//! testing.

use proptest::{prop_assert_eq, test_runner::TestCaseResult};

/// Represents an input generated for testing purposes.
///
/// An input knows how to print itself as source code and how to check that whatever the
/// tokenizer/parser produced out of that source code matches it.
pub trait Input<Output> {
    /// Verifies that the given output complies with this input.
    ///
    /// # Errors
    /// [`proptest::test_runner::TestCaseError`]: for any reason the assertion fails.
    fn assert(self, output: Output) -> TestCaseResult;
}

impl<'a, 'b, T, U> Input<&'b [T]> for &'a [U]
where
    for<'c, 'd> &'c U: Input<&'d T>,
{
    fn assert(self, output: &'b [T]) -> TestCaseResult {
        prop_assert_eq!(self.len(), output.len());

        for (input, output) in self.iter().zip(output) {
            input.assert(output)?;
        }

        Ok(())
    }
}
