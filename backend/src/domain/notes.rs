//! Placeholder notes generator.
//!
//! Splits a transcript into sentences on `.` and renders each as a bullet
//! under a fixed heading. No language processing happens here.

/// Heading line that opens every generated notes document.
pub const NOTES_HEADING: &str = "# Key Points";

/// Render bullet-point notes for `transcript`.
///
/// Newlines are treated as spaces, fragments are trimmed and empty
/// fragments dropped.
///
/// # Examples
/// ```
/// use lectern::domain::generate_notes;
///
/// assert_eq!(generate_notes("A. B. C."), "# Key Points\n- A\n- B\n- C");
/// ```
pub fn generate_notes(transcript: &str) -> String {
    let flattened = transcript.replace('\n', " ");
    std::iter::once(NOTES_HEADING.to_owned())
        .chain(
            flattened
                .split('.')
                .map(str::trim)
                .filter(|sentence| !sentence.is_empty())
                .map(|sentence| format!("- {sentence}")),
        )
        .collect::<Vec<_>>()
        .join("\n")
}
