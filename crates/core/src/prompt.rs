/// Instructions placed ahead of the diff.
const INSTRUCTIONS: &str = "\
You are an assistant that writes Git commit messages.
Write a commit message for the staged diff below.

Rules:
- Start with a concise summary line of at most 72 characters, in the imperative mood.
- Follow it with a blank line and a short detail section of two to four lines describing what changed and why.
- Do not use markdown formatting. No code fences, no backticks, no headings, no bold or italic text.
- Output only the commit message, with no preamble or commentary.";

/// Build the model prompt for a staged diff.
///
/// The diff is embedded verbatim after the instructions.
pub fn build_prompt(diff: &str) -> String {
    format!("{INSTRUCTIONS}\n\nStaged diff:\n\n{diff}")
}
