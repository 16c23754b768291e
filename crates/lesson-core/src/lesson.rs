//! Lesson descriptor and output checking.
//!
//! A lesson carries its metadata and a set of test cases. A program's output
//! passes a case when the run succeeded and the output matches the expected
//! output after trimming surrounding whitespace.

use std::fmt::Write;

use crate::constants::LESSON_ID;

/// Expected standard output for the variables lesson.
pub const VARIABLES_EXPECTED_OUTPUT: &str =
    "Age: 25 years\nHeight: 1.75 meters\nWeight: 70.5 kg\nBMI: 23.0\n";

/// Worked C example shown to the learner.
pub const VARIABLES_EXAMPLE_CODE: &str = r#"#include <stdio.h>

int main() {
    int age = 25;
    float height = 1.75;
    float bmi_weight = 70.5;
    float bmi = bmi_weight / (height * height);

    printf("Age: %d years\n", age);
    printf("Height: %.2f meters\n", height);
    printf("Weight: %.1f kg\n", bmi_weight);
    printf("BMI: %.1f\n", bmi);

    return 0;
}
"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Text fed to the program's standard input.
    pub input: String,
    pub expected_output: String,
    pub description: String,
}

impl TestCase {
    /// Compare `actual` against this case's expected output.
    /// A run that did not exit successfully never passes.
    pub fn evaluate(&self, actual: &str, succeeded: bool) -> TestResult {
        TestResult {
            passed: succeeded && actual.trim() == self.expected_output.trim(),
            description: self.description.clone(),
            actual_output: actual.to_string(),
            expected_output: self.expected_output.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    pub passed: bool,
    pub description: String,
    pub actual_output: String,
    pub expected_output: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub example_code: String,
    pub learning_objectives: Vec<String>,
    pub test_cases: Vec<TestCase>,
    /// Lesson ids that must be completed first.
    pub prerequisites: Vec<u32>,
}

impl Lesson {
    /// Lesson 2 of the fundamentals track.
    pub fn variables() -> Self {
        Self {
            id: LESSON_ID,
            title: "Variables and Data Types".to_string(),
            description: "Declare and initialize integer and floating-point variables, \
                          compute a body-mass index from them, and print each value \
                          with a fixed number of decimal places."
                .to_string(),
            example_code: VARIABLES_EXAMPLE_CODE.to_string(),
            learning_objectives: vec![
                "Declare and initialize integer and floating-point variables".to_string(),
                "Perform arithmetic with variables".to_string(),
                "Print values with a fixed number of decimal places".to_string(),
            ],
            test_cases: vec![TestCase {
                input: String::new(),
                expected_output: VARIABLES_EXPECTED_OUTPUT.to_string(),
                description: "Prints age, height, weight, and BMI".to_string(),
            }],
            prerequisites: vec![1],
        }
    }

    /// Run every test case against one captured output and its exit status.
    pub fn check(&self, actual: &str, succeeded: bool) -> Vec<TestResult> {
        let _span = tracing::info_span!("lesson.check", lesson_id = self.id).entered();
        let results: Vec<TestResult> = self
            .test_cases
            .iter()
            .map(|case| case.evaluate(actual, succeeded))
            .collect();
        tracing::debug!(
            passed = results.iter().filter(|r| r.passed).count(),
            total = results.len(),
            "lesson checked"
        );
        results
    }

    /// Lesson info block: title, description, objectives, example code, and
    /// completion steps.
    pub fn readme(&self) -> String {
        let mut out = format!(
            "=== Lesson {}: {} ===\n\nDescription:\n{}\n\nLearning Objectives:\n",
            self.id, self.title, self.description
        );
        // Writing to a String cannot fail.
        for objective in &self.learning_objectives {
            let _ = writeln!(out, "- {objective}");
        }
        let _ = write!(
            out,
            "\nExample Code:\n{}\n\
             To complete this lesson:\n\
             1. Edit solution.c\n\
             2. Run the lesson tests to check your solution\n\
             3. Once all tests pass, you can proceed to the next lesson\n",
            self.example_code
        );
        out
    }
}

/// Summarize a set of results for the learner.
pub fn feedback(results: &[TestResult]) -> String {
    let failed = results.iter().filter(|r| !r.passed).count();
    if failed == 0 {
        "Great job! All tests passed successfully.".to_string()
    } else if failed == results.len() {
        "None of the tests passed. Review your code and try again.".to_string()
    } else {
        format!(
            "{failed} out of {} tests failed. Check the test results and try again.",
            results.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(passed: bool) -> TestResult {
        TestResult {
            passed,
            description: String::new(),
            actual_output: String::new(),
            expected_output: String::new(),
        }
    }

    #[test]
    fn trailing_whitespace_ignored() {
        let lesson = Lesson::variables();
        let results = lesson.check(
            "Age: 25 years\nHeight: 1.75 meters\nWeight: 70.5 kg\nBMI: 23.0\n\n  ",
            true,
        );
        assert_eq!(results.len(), 1);
        assert!(results[0].passed);
    }

    #[test]
    fn wrong_precision_fails() {
        let lesson = Lesson::variables();
        let results = lesson.check(
            "Age: 25 years\nHeight: 1.8 meters\nWeight: 70.5 kg\nBMI: 23.0\n",
            true,
        );
        assert!(!results[0].passed);
        assert_eq!(results[0].expected_output, VARIABLES_EXPECTED_OUTPUT);
    }

    #[test]
    fn failed_run_fails_even_with_matching_output() {
        let results = Lesson::variables().check(VARIABLES_EXPECTED_OUTPUT, false);
        assert!(!results[0].passed);
    }

    #[test]
    fn variables_requires_lesson_one() {
        assert_eq!(Lesson::variables().prerequisites, vec![1]);
    }

    #[test]
    fn feedback_messages() {
        assert_eq!(
            feedback(&[result(true), result(true)]),
            "Great job! All tests passed successfully."
        );
        assert_eq!(
            feedback(&[result(false), result(false)]),
            "None of the tests passed. Review your code and try again."
        );
        assert_eq!(
            feedback(&[result(true), result(false), result(false)]),
            "2 out of 3 tests failed. Check the test results and try again."
        );
    }

    #[test]
    fn readme_lists_objectives() {
        let readme = Lesson::variables().readme();
        assert!(readme.starts_with("=== Lesson 2: Variables and Data Types ===\n"));
        assert!(readme.contains("- Perform arithmetic with variables\n"));
        assert!(readme.contains("\nExample Code:\n#include <stdio.h>\n"));
        assert!(readme.contains("printf(\"BMI: %.1f\\n\", bmi);"));
        assert!(readme.contains("To complete this lesson:\n1. Edit solution.c\n"));
        assert!(readme.ends_with("3. Once all tests pass, you can proceed to the next lesson\n"));
    }
}
