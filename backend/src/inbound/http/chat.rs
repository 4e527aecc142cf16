//! Chat API handler.
//!
//! ```text
//! POST /api/chat/3 {"question":"what is a node?"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, LectureId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SignedIn;
use crate::inbound::http::state::HttpState;

/// Chat request body. A missing question is treated as blank.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ChatRequest {
    /// Question text; blank asks for a question.
    #[serde(default)]
    #[schema(example = "What is a graph?")]
    pub question: String,
}

/// Chat reply body.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ChatResponse {
    /// Reply text.
    pub answer: String,
}

/// Answer a question about a lecture.
///
/// Blank questions and unknown lectures still answer `200` with an apology
/// in `answer`.
#[utoipa::path(
    post,
    path = "/api/chat/{lecture_id}",
    params(("lecture_id" = u64, Path, description = "Lecture identifier")),
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Answer text", body = ChatResponse),
        (status = 400, description = "Malformed body", body = Error),
        (status = 401, description = "Not signed in", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["chat"],
    operation_id = "askLecture"
)]
#[post("/api/chat/{lecture_id}")]
pub async fn ask(
    _user: SignedIn,
    state: web::Data<HttpState>,
    path: web::Path<LectureId>,
    payload: web::Json<ChatRequest>,
) -> ApiResult<web::Json<ChatResponse>> {
    let reply = state
        .chat
        .answer(path.into_inner(), &payload.into_inner().question)
        .await?;
    Ok(web::Json(ChatResponse {
        answer: reply.text().to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EMPTY_QUESTION_REPLY, LECTURE_NOT_FOUND_REPLY, Role};
    use crate::inbound::http::test_utils::{in_memory_state, sign_in, test_app};
    use actix_web::http::StatusCode;
    use actix_web::http::header::ContentType;
    use actix_web::test;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn ask_request(uri: &str, body: Value) -> test::TestRequest {
        test::TestRequest::post().uri(uri).set_json(body)
    }

    #[actix_web::test]
    async fn requires_a_session() {
        let app = test::init_service(test_app(in_memory_state())).await;
        let res = test::call_service(
            &app,
            ask_request("/api/chat/1", json!({ "question": "hi" })).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["code"], "unauthorized");
        assert_eq!(body["message"], "login required");
    }

    #[rstest]
    #[case(
        test::TestRequest::post()
            .uri("/api/chat/1")
            .insert_header(ContentType::json())
            .set_payload("{\"question\":")
    )]
    #[case(ask_request("/api/chat/not-a-number", json!({ "question": "hi" })))]
    #[actix_web::test]
    async fn anonymous_requests_are_unauthorised_before_parsing(
        #[case] request: test::TestRequest,
    ) {
        let app = test::init_service(test_app(in_memory_state())).await;
        let res = test::call_service(&app, request.to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "login required");
    }

    #[rstest]
    #[case(json!({ "question": "what?" }), LECTURE_NOT_FOUND_REPLY)]
    #[case(json!({ "question": "   " }), EMPTY_QUESTION_REPLY)]
    #[case(json!({}), EMPTY_QUESTION_REPLY)]
    #[actix_web::test]
    async fn canned_replies_for_missing_lecture(#[case] body: Value, #[case] expected: &str) {
        let app = test::init_service(test_app(in_memory_state())).await;
        let cookie = sign_in(&app, "carol", Role::Student).await;

        let res = test::call_service(
            &app,
            ask_request("/api/chat/42", body).cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let reply: ChatResponse = test::read_body_json(res).await;
        assert_eq!(reply.answer, expected);
    }

    #[actix_web::test]
    async fn answer_mentions_the_lecture_title() {
        let app = test::init_service(test_app(in_memory_state())).await;
        let teacher = sign_in(&app, "alice", Role::Teacher).await;
        test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/create_lecture")
                .cookie(teacher.clone())
                .set_form([
                    ("title", "Graphs"),
                    ("course", "CS2"),
                    ("transcript", "Nodes. Edges."),
                ])
                .to_request(),
        )
        .await;

        let res = test::call_service(
            &app,
            ask_request("/api/chat/1", json!({ "question": "what is a node?" }))
                .cookie(teacher)
                .to_request(),
        )
        .await;
        let reply: ChatResponse = test::read_body_json(res).await;
        assert!(reply.answer.starts_with("This is a prototype answer."));
        assert!(reply.answer.ends_with("Lecture title: Graphs"));
    }

    #[actix_web::test]
    async fn malformed_json_is_an_invalid_request() {
        let app = test::init_service(test_app(in_memory_state())).await;
        let cookie = sign_in(&app, "carol", Role::Student).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/chat/1")
                .cookie(cookie)
                .insert_header(("content-type", "application/json"))
                .set_payload("{not json")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["code"], "invalid_request");
    }
}
