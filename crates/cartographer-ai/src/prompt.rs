//! Prompt templates for AI summaries

/// Prompt asking for a bullet-point overview of one file.
pub fn file_summary_prompt(file_name: &str, code: &str) -> String {
    format!(
        r#"
Analyze this code file and provide a clear, concise summary in bullet points. Focus on:

1. Primary purpose and functionality
2. Key components, functions, or classes
3. Dependencies and imports
4. Main algorithms or logic patterns
5. Any notable design patterns or architectural decisions

File: {}

Code:
{}

Please provide the summary in a clear, easy-to-read format with bullet points. Keep it concise but informative.
"#,
        file_name, code
    )
}

/// Prompt sent by the connectivity check; the reply must contain `OK`.
pub const CONNECTION_TEST_PROMPT: &str = "Test connection. Respond with 'OK'.";
