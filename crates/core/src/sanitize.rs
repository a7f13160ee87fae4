use std::sync::OnceLock;

use regex::Regex;

/// Strip markdown out of a model response so it can be used as a commit message.
///
/// Removes fence lines (with or without a language tag), every remaining
/// backtick, `**` bold markers and leading `##`..`######` heading markers,
/// then collapses runs of blank lines and trims the result. A single `#`
/// is kept since it also starts plain text such as `# of retries`.
/// Applying it to its own output returns the same string.
pub fn sanitize_message(raw: &str) -> String {
    // 0. Every CR, alone or before LF, ends a line.
    static RE_LINE_END: OnceLock<Regex> = OnceLock::new();
    let re_line_end = RE_LINE_END.get_or_init(|| Regex::new(r"\r\n?").unwrap());
    let mut result = re_line_end.replace_all(raw, "\n").to_string();

    // 1. Drop whole-line fences such as ```text or ``` so their tags go too.
    static RE_FENCE_LINE: OnceLock<Regex> = OnceLock::new();
    let re_fence_line = RE_FENCE_LINE
        .get_or_init(|| Regex::new(r"(?m)^[ \t]*```[A-Za-z0-9_+.-]*[ \t]*$").unwrap());
    result = re_fence_line.replace_all(&result, "").to_string();

    // 2. Any backtick left over is inline formatting or an inline fence.
    result = result.replace('`', "");

    // 3. Bold markers.
    result = result.replace("**", "");

    // 4. Heading markers at the start of a line.
    static RE_HEADING: OnceLock<Regex> = OnceLock::new();
    let re_heading = RE_HEADING.get_or_init(|| Regex::new(r"(?m)^[^\S\n]*(?:#{2,6}[^\S\n]+)+").unwrap());
    result = re_heading.replace_all(&result, "").to_string();

    // 5. Lines emptied by the steps above leave blank runs behind.
    static RE_BLANK_RUN: OnceLock<Regex> = OnceLock::new();
    let re_blank_run = RE_BLANK_RUN.get_or_init(|| Regex::new(r"\n[ \t]*(?:\n[ \t]*)+\n").unwrap());
    result = re_blank_run.replace_all(&result, "\n\n").to_string();

    result.trim().to_string()
}
