use std::sync::Arc;
use axum::{
    body::HttpBody,
    BoxError,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::books::dto::BookFieldsDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::core::command::Command;
use crate::core::controller::{AppState, ServerError};

pub const WELCOME_MESSAGE: &str = "Welcome to the Book REST API!";

pub fn build_router<B>(state: AppState) -> Router<(), B>
where
    B: HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
{
    Router::new()
        .route("/", get(welcome))
        .route("/books", get(list_books).post(add_book))
        .route("/books/", get(list_books).post(add_book))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .route("/books/:id/",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .with_state(state)
}

fn catalog(state: &AppState) -> Arc<dyn CatalogService> {
    Arc::clone(&state.catalog)
}

// A missing, unparsable or non-object body reads as `{}`.
fn parse_body<T: DeserializeOwned + Default>(json: Option<Json<Value>>) -> T {
    match json {
        Some(Json(value)) if value.is_object() => serde_json::from_value(value).unwrap_or_default(),
        _ => T::default(),
    }
}

pub(crate) async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(catalog(&state)).execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Option<Json<Value>>) -> Result<(StatusCode, Json<AddBookCommandResponse>), ServerError> {
    let req = AddBookCommandRequest::new(parse_body(json));
    let res = AddBookCommand::new(catalog(&state)).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest::new(book_id);
    let res = GetBookCommand::new(catalog(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    json: Option<Json<Value>>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let changes: BookFieldsDto = parse_body(json);
    let req = UpdateBookCommandRequest::new(book_id, changes);
    let res = UpdateBookCommand::new(catalog(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<StatusCode, ServerError> {
    let req = RemoveBookCommandRequest::new(book_id);
    let _ = RemoveBookCommand::new(catalog(&state)).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use crate::catalog::controller::build_router;
    use crate::catalog::factory;
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;

    fn app() -> Router {
        let config = Configuration::new("test");
        let catalog = Arc::from(factory::create_catalog_service(&config));
        build_router(AppState::new(config, catalog))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }.expect("should build request");
        let res = app.clone().oneshot(req).await.expect("router should respond");
        let status = res.status();
        let bytes = hyper::body::to_bytes(res.into_body()).await.expect("should read body");
        (status, bytes.to_vec())
    }

    async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = send(app, method, uri, body).await;
        (status, serde_json::from_slice(&bytes).expect("should return json"))
    }

    #[tokio::test]
    async fn test_should_welcome() {
        let (status, body) = send(&app(), Method::GET, "/", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(b"Welcome to the Book REST API!".to_vec(), body);
    }

    #[tokio::test]
    async fn test_should_list_seeded_books() {
        let (status, body) = send_json(&app(), Method::GET, "/books", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!([
            {"id": 1, "title": "The Lord of the Rings", "author": "J.R.R. Tolkien"},
            {"id": 2, "title": "Pride and Prejudice", "author": "Jane Austen"},
            {"id": 3, "title": "To Kill a Mockingbird", "author": "Harper Lee"}
        ]), body);
    }

    #[tokio::test]
    async fn test_should_create_book() {
        let app = app();
        let (status, body) = send_json(&app, Method::POST, "/books", Some(json!({"title": "X", "author": "Y"}))).await;
        assert_eq!(StatusCode::CREATED, status);
        assert_eq!(json!({"id": 4, "title": "X", "author": "Y"}), body);

        let (_, books) = send_json(&app, Method::GET, "/books", None).await;
        assert_eq!(4, books.as_array().expect("should be array").len());
        assert_eq!(json!({"id": 4, "title": "X", "author": "Y"}), books[3]);
    }

    #[tokio::test]
    async fn test_should_reject_create_without_author() {
        let app = app();
        let (status, body) = send_json(&app, Method::POST, "/books", Some(json!({"title": "X"}))).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert_eq!(json!({"error": "Title and author are required."}), body);

        let (status, body) = send_json(&app, Method::POST, "/books", None).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert_eq!(json!({"error": "Title and author are required."}), body);

        let (_, books) = send_json(&app, Method::GET, "/books", None).await;
        assert_eq!(3, books.as_array().expect("should be array").len());
    }

    #[tokio::test]
    async fn test_should_store_truthy_non_string_fields_as_text() {
        let app = app();
        let (status, body) = send_json(&app, Method::POST, "/books", Some(json!({"title": 5, "author": "Y"}))).await;
        assert_eq!(StatusCode::CREATED, status);
        assert_eq!(json!({"id": 4, "title": "5", "author": "Y"}), body);

        let (status, body) = send_json(&app, Method::PUT, "/books/2", Some(json!({"title": true, "author": 0}))).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"id": 2, "title": "true", "author": "Jane Austen"}), body);

        let (status, body) = send_json(&app, Method::POST, "/books", Some(json!({"title": "X", "author": false}))).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert_eq!(json!({"error": "Title and author are required."}), body);
    }

    #[tokio::test]
    async fn test_should_report_missing_book_before_field_types() {
        let app = app();
        let (status, body) = send_json(&app, Method::PUT, "/books/999", Some(json!({"title": 5}))).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!(json!({"error": "Book not found."}), body);

        let (status, body) = send_json(&app, Method::PUT, "/books/999", Some(json!({"title": {"nested": 1}}))).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!(json!({"error": "Book not found."}), body);
    }

    #[tokio::test]
    async fn test_should_accept_trailing_slash() {
        let app = app();
        let (status, body) = send_json(&app, Method::GET, "/books/", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(3, body.as_array().expect("should be array").len());

        let (status, body) = send_json(&app, Method::GET, "/books/3/", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"id": 3, "title": "To Kill a Mockingbird", "author": "Harper Lee"}), body);
    }

    #[tokio::test]
    async fn test_should_patch_book() {
        let app = app();
        let (status, body) = send_json(&app, Method::PUT, "/books/2", Some(json!({"title": "New"}))).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"id": 2, "title": "New", "author": "Jane Austen"}), body);

        let (status, body) = send_json(&app, Method::GET, "/books/2", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"id": 2, "title": "New", "author": "Jane Austen"}), body);
    }

    #[tokio::test]
    async fn test_should_not_update_missing_book() {
        let app = app();
        let (_, before) = send_json(&app, Method::GET, "/books", None).await;
        let (status, body) = send_json(&app, Method::PUT, "/books/999", Some(json!({"title": "New"}))).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!(json!({"error": "Book not found."}), body);
        let (status, _) = send_json(&app, Method::PUT, "/books/abc", Some(json!({"title": "New"}))).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        let (_, after) = send_json(&app, Method::GET, "/books", None).await;
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_should_delete_book_once() {
        let app = app();
        let (status, body) = send(&app, Method::DELETE, "/books/1", None).await;
        assert_eq!(StatusCode::NO_CONTENT, status);
        assert!(body.is_empty());

        let (status, body) = send_json(&app, Method::DELETE, "/books/1", None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!(json!({"error": "Book not found."}), body);

        let (_, books) = send_json(&app, Method::GET, "/books", None).await;
        assert_eq!(2, books.as_array().expect("should be array").len());
    }

    #[tokio::test]
    async fn test_should_reuse_id_after_deleting_max() {
        let app = app();
        let (status, _) = send(&app, Method::DELETE, "/books/3", None).await;
        assert_eq!(StatusCode::NO_CONTENT, status);
        let (status, body) = send_json(&app, Method::POST, "/books", Some(json!({"title": "X", "author": "Y"}))).await;
        assert_eq!(StatusCode::CREATED, status);
        assert_eq!(json!(3), body["id"]);
    }

    #[tokio::test]
    async fn test_should_round_trip_create_and_delete() {
        let app = app();
        let (_, before) = send_json(&app, Method::GET, "/books", None).await;
        let (_, created) = send_json(&app, Method::POST, "/books", Some(json!({"title": "X", "author": "Y"}))).await;
        let uri = format!("/books/{}", created["id"]);
        let (status, _) = send(&app, Method::DELETE, uri.as_str(), None).await;
        assert_eq!(StatusCode::NO_CONTENT, status);
        let (_, after) = send_json(&app, Method::GET, "/books", None).await;
        assert_eq!(before, after);
    }
}
