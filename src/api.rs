//! Todo API Client
//!
//! Frontend bindings for the backend's REST surface, one async function per
//! endpoint. Every call sends `Content-Type: application/json` and decodes
//! the JSON body; non-2xx responses surface as the server-provided message
//! or, failing that, the HTTP status text.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::{Todo, TodoId};

const API_URL: &str = "http://localhost:3001/todos";

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Issue one request and normalize the response: read the body as text,
/// parse JSON when non-empty, and turn non-2xx statuses into errors.
async fn fetch_json(
    method: &str,
    url: &str,
    body: Option<String>,
) -> Result<Option<serde_json::Value>, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or("no window")?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response.dyn_into().map_err(|_| "not a Response")?;

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .unwrap_or_default();

    normalize_response(response.ok(), &response.status_text(), &text)
}

/// Turn a response body into the optional JSON payload. A non-2xx status
/// becomes an error carrying the server's `message` field when the body has
/// one, else the status text; a 2xx body that fails to parse becomes an
/// error carrying the parse failure.
fn normalize_response(
    ok: bool,
    status_text: &str,
    text: &str,
) -> Result<Option<serde_json::Value>, String> {
    let parsed = if text.is_empty() {
        None
    } else {
        Some(serde_json::from_str::<serde_json::Value>(text))
    };

    if !ok {
        let message = parsed
            .as_ref()
            .and_then(|r| r.as_ref().ok())
            .and_then(|v| v.get("message"))
            .and_then(|m| m.as_str())
            .map(String::from)
            .unwrap_or_else(|| status_text.to_string());
        return Err(message);
    }

    match parsed {
        None => Ok(None),
        Some(Ok(value)) => Ok(Some(value)),
        Some(Err(err)) => Err(err.to_string()),
    }
}

fn decode<T: serde::de::DeserializeOwned>(data: Option<serde_json::Value>) -> Result<T, String> {
    let value = data.ok_or("empty response body")?;
    serde_json::from_value(value).map_err(|e| e.to_string())
}

/// `POST /todos` - persist a new todo; the server assigns the id.
pub async fn save_todo(todo: &Todo) -> Result<Todo, String> {
    let body = serde_json::to_string(todo).map_err(|e| e.to_string())?;
    decode(fetch_json("POST", API_URL, Some(body)).await?)
}

/// `GET /todos` - the whole collection in insertion order.
pub async fn get_all_todos() -> Result<Vec<Todo>, String> {
    decode(fetch_json("GET", API_URL, None).await?)
}

/// `GET /todos/:id`
pub async fn get_todo(id: &TodoId) -> Result<Todo, String> {
    decode(fetch_json("GET", &format!("{}/{}", API_URL, id), None).await?)
}

/// `PATCH /todos/:id` - full-body update of one todo.
pub async fn update_todo(todo: &Todo) -> Result<Todo, String> {
    let id = todo.id.as_ref().ok_or("cannot update a todo without an id")?;
    let body = serde_json::to_string(todo).map_err(|e| e.to_string())?;
    decode(fetch_json("PATCH", &format!("{}/{}", API_URL, id), Some(body)).await?)
}

/// `DELETE /todos/:id`
pub async fn delete_todo(id: &TodoId) -> Result<(), String> {
    fetch_json("DELETE", &format!("{}/{}", API_URL, id), None).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn success_body_parses_into_json() {
        let data = normalize_response(true, "OK", r#"{"id":1,"title":"a","completed":false}"#)
            .unwrap()
            .unwrap();
        assert_eq!(data["id"], 1);
    }

    #[test]
    fn success_with_empty_body_yields_no_payload() {
        assert_eq!(normalize_response(true, "OK", "").unwrap(), None);
    }

    #[test]
    fn malformed_success_body_surfaces_the_parse_error() {
        let err = normalize_response(true, "OK", "not json").unwrap_err();
        assert!(err.contains("expected"), "parse detail missing: {}", err);
    }

    #[test]
    fn failure_prefers_the_server_message() {
        let err = normalize_response(false, "Bad Request", r#"{"message":"title required"}"#)
            .unwrap_err();
        assert_eq!(err, "title required");
    }

    #[test]
    fn failure_without_a_message_falls_back_to_status_text() {
        let not_json = normalize_response(false, "Not Found", "<html>404</html>").unwrap_err();
        assert_eq!(not_json, "Not Found");

        let empty = normalize_response(false, "Internal Server Error", "").unwrap_err();
        assert_eq!(empty, "Internal Server Error");
    }
}
