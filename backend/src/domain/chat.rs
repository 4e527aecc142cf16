//! Canned chatbot replies.
//!
//! The chat stub performs no retrieval or reasoning: it validates the
//! question, checks the lecture exists and echoes its title in a fixed
//! template.

use serde::Serialize;

use super::Lecture;

/// Reply for a blank question.
pub const EMPTY_QUESTION_REPLY: &str = "Please ask a question.";
/// Reply when the lecture id does not resolve.
pub const LECTURE_NOT_FOUND_REPLY: &str = "Lecture not found.";

const PROTOTYPE_PREAMBLE: &str = "This is a prototype answer. \
In the real system this would use the lecture transcript and notes \
to generate a detailed explanation.\n\nLecture title: ";

/// A question as typed by the student, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatQuestion(String);

impl ChatQuestion {
    /// Trim the raw question; `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for ChatQuestion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Text returned to the chat box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatAnswer {
    answer: String,
}

impl ChatAnswer {
    /// Reply for a blank question.
    pub fn empty_question() -> Self {
        Self::from_text(EMPTY_QUESTION_REPLY)
    }

    /// Reply when the lecture is missing.
    pub fn lecture_not_found() -> Self {
        Self::from_text(LECTURE_NOT_FOUND_REPLY)
    }

    /// Templated reply for an existing lecture.
    ///
    /// # Examples
    /// ```
    /// use lectern::domain::{ChatAnswer, ChatQuestion, LectureDraft, LectureId, NewLecture, Username};
    ///
    /// let draft = LectureDraft::try_from_parts("Graphs", "CS2", "Nodes. Edges.").unwrap();
    /// let lecture = NewLecture::from_draft(draft, Username::new("t").unwrap())
    ///     .into_lecture(LectureId::FIRST);
    /// let question = ChatQuestion::parse("what is a node?").unwrap();
    /// let reply = ChatAnswer::for_lecture(&lecture, &question);
    /// assert!(reply.text().ends_with("Lecture title: Graphs"));
    /// ```
    pub fn for_lecture(lecture: &Lecture, _question: &ChatQuestion) -> Self {
        Self {
            answer: format!("{PROTOTYPE_PREAMBLE}{}", lecture.title()),
        }
    }

    fn from_text(text: &str) -> Self {
        Self {
            answer: text.to_owned(),
        }
    }

    /// Reply text.
    pub fn text(&self) -> &str {
        &self.answer
    }
}
