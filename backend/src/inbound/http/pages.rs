//! Server-rendered pages.
//!
//! Templates are compiled into the binary and parsed once at start-up.
//! Every page receives the signed-in user (if any) and the pending flash
//! messages, which are consumed by the render.

use std::time::Instant;

use actix_web::http::header;
use actix_web::HttpResponse;
use tera::{Context, Tera};
use tracing::info;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;

const TEMPLATES: [(&str, &str); 6] = [
    ("base.html", include_str!("../../../templates/base.html")),
    ("index.html", include_str!("../../../templates/index.html")),
    ("signup.html", include_str!("../../../templates/signup.html")),
    ("login.html", include_str!("../../../templates/login.html")),
    ("dashboard.html", include_str!("../../../templates/dashboard.html")),
    ("lecture.html", include_str!("../../../templates/lecture.html")),
];

/// Pages the application renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Landing page.
    Index,
    /// Account creation form.
    Signup,
    /// Sign-in form.
    Login,
    /// Lecture list and, for teachers, the authoring form.
    Dashboard,
    /// Single lecture with notes, transcript and chat.
    Lecture,
}

impl Page {
    fn template(self) -> &'static str {
        match self {
            Self::Index => "index.html",
            Self::Signup => "signup.html",
            Self::Login => "login.html",
            Self::Dashboard => "dashboard.html",
            Self::Lecture => "lecture.html",
        }
    }
}

/// Compiled template set.
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    /// Parse the embedded templates.
    pub fn new() -> Result<Self, tera::Error> {
        let started = Instant::now();
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        info!(elapsed = ?started.elapsed(), "templates compiled");
        Ok(Self { tera })
    }

    /// Render `page` with `context`.
    pub fn render(&self, page: Page, context: &Context) -> Result<String, Error> {
        self.tera
            .render(page.template(), context)
            .map_err(|err| Error::internal(format!("failed to render {}: {err}", page.template())))
    }

    /// Render `page` as an HTML response, adding the session user and
    /// draining pending flashes.
    pub fn respond(
        &self,
        page: Page,
        session: &SessionContext,
        mut context: Context,
    ) -> ApiResult<HttpResponse> {
        if let Some(user) = session.current_user()? {
            context.insert("current_user", &user);
        }
        context.insert("flashes", &session.take_flashes());
        let body = self.render(page, &context)?;
        Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body))
    }
}

/// `302 Found` pointing at `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}
