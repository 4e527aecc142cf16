//! Dashboard and lecture pages.
//!
//! ```text
//! GET  /dashboard        lectures visible to the signed-in user
//! POST /create_lecture   title=..&course=..&transcript=..
//! GET  /lecture/{id}     notes, transcript, chat and personal notes
//! ```

use std::collections::BTreeMap;

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tera::Context;

use crate::domain::ports::TEACHERS_ONLY_MESSAGE;
use crate::domain::{ErrorCode, Lecture, LectureDraft, LectureId, LECTURE_NOT_FOUND_REPLY};
use crate::inbound::http::ApiResult;
use crate::inbound::http::flash::FlashMessage;
use crate::inbound::http::pages::{Page, PageRenderer, redirect};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Flash shown when a lecture form has blank fields.
pub const MISSING_LECTURE_FIELDS_MESSAGE: &str = "Title, course, and transcript are required.";
/// Flash shown after a lecture is stored.
pub const LECTURE_CREATED_MESSAGE: &str = "Lecture created and notes generated.";

/// Lecture authoring form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LectureForm {
    /// Lecture title.
    pub title: String,
    /// Course the lecture belongs to.
    pub course: String,
    /// Raw transcript the notes are derived from.
    pub transcript: String,
}

#[derive(Debug, Serialize)]
struct LectureLink<'a> {
    id: LectureId,
    title: &'a str,
}

#[derive(Debug, Serialize)]
struct CourseGroup<'a> {
    course: &'a str,
    lectures: Vec<LectureLink<'a>>,
}

/// Group lectures by course name, courses sorted, lectures in store order.
fn group_by_course(lectures: &[Lecture]) -> Vec<CourseGroup<'_>> {
    let mut courses: BTreeMap<&str, Vec<LectureLink<'_>>> = BTreeMap::new();
    for lecture in lectures {
        courses.entry(lecture.course()).or_default().push(LectureLink {
            id: lecture.id(),
            title: lecture.title(),
        });
    }
    courses
        .into_iter()
        .map(|(course, lectures)| CourseGroup { course, lectures })
        .collect()
}

/// Lecture list plus, for teachers, the authoring form.
#[get("/dashboard")]
pub async fn dashboard(
    state: web::Data<HttpState>,
    pages: web::Data<PageRenderer>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let Some(user) = session.current_user()? else {
        return Ok(redirect("/login"));
    };
    let lectures = state.lectures_query.visible_lectures(&user).await?;

    let mut context = Context::new();
    context.insert("is_teacher", &user.role().can_author_lectures());
    context.insert("courses", &group_by_course(&lectures));
    pages.respond(Page::Dashboard, &session, context)
}

/// Store a new lecture with generated notes.
#[post("/create_lecture")]
pub async fn create_lecture(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LectureForm>,
) -> ApiResult<HttpResponse> {
    let Some(user) = session.current_user()? else {
        return Ok(redirect("/login"));
    };
    if !user.role().can_author_lectures() {
        session.push_flash(FlashMessage::error(TEACHERS_ONLY_MESSAGE))?;
        return Ok(redirect("/dashboard"));
    }

    let LectureForm {
        title,
        course,
        transcript,
    } = form.into_inner();
    let Ok(draft) = LectureDraft::try_from_parts(&title, &course, &transcript) else {
        session.push_flash(FlashMessage::error(MISSING_LECTURE_FIELDS_MESSAGE))?;
        return Ok(redirect("/dashboard"));
    };

    match state.lectures.create_lecture(&user, draft).await {
        Ok(_) => session.push_flash(FlashMessage::success(LECTURE_CREATED_MESSAGE))?,
        Err(err) if err.code() == ErrorCode::Forbidden => {
            session.push_flash(FlashMessage::error(err.message()))?;
        }
        Err(err) => return Err(err),
    }
    Ok(redirect("/dashboard"))
}

/// Single lecture page.
#[get("/lecture/{id}")]
pub async fn lecture_page(
    state: web::Data<HttpState>,
    pages: web::Data<PageRenderer>,
    session: SessionContext,
    path: web::Path<LectureId>,
) -> ApiResult<HttpResponse> {
    if session.current_user()?.is_none() {
        return Ok(redirect("/login"));
    }
    let Some(lecture) = state.lectures_query.find_lecture(path.into_inner()).await? else {
        session.push_flash(FlashMessage::error(LECTURE_NOT_FOUND_REPLY))?;
        return Ok(redirect("/dashboard"));
    };

    let mut context = Context::new();
    context.insert("lecture", &lecture);
    pages.respond(Page::Lecture, &session, context)
}

#[cfg(test)]
#[path = "lectures_tests.rs"]
mod tests;
