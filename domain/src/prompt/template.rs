//! Prompt templates for comparison queries

/// Templates for generating the per-format prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// Self-contained data analysis prompt.
    ///
    /// Embeds the full dataset and the question verbatim, so no conversation
    /// context is needed to answer it.
    pub fn data_analysis(format_name: &str, data: &str, question: &str) -> String {
        format!(
            r#"You are a data analyst. I will provide you with data in {format_name} format.

DATA:
{data}

TASK: {question}

Please analyze the data and provide a precise answer. Be specific and include all relevant details."#
        )
    }

    /// Sample questions shown before the interactive prompt
    pub fn sample_questions() -> &'static [&'static str] {
        &[
            "Extract all entries where age is greater than 24 and list their names.",
            "Find the department with the most active projects and list the team leads.",
            "What is the total count of active projects across all departments?",
            "List all unique job titles in the dataset.",
            "Find the person with the highest age and provide all their details.",
        ]
    }
}
