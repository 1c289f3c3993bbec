use crate::helpers::{get_json_response_body, TestApp};
use hello_members::{routes::HelloResponse, ErrorResponse};
use serde_json::json;
use test_context::test_context;

const NAMED_ROUTES: [&str; 3] = ["/hello-mvc", "/hello-string", "/hello-api"];

#[test_context(TestApp)]
#[tokio::test]
async fn hello_should_render_template(app: &mut TestApp) {
    let response = app.get_hello().await;

    assert_eq!(response.status().as_u16(), 200);
    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .unwrap()
        .to_owned();
    assert!(
        content_type.starts_with("text/html"),
        "Unexpected content type: {content_type}"
    );

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("hello!!"), "Body missing data: {body}");
}

#[test_context(TestApp)]
#[tokio::test]
async fn hello_mvc_should_render_name(app: &mut TestApp) {
    let response = app.get_with_name("/hello-mvc", Some("spring")).await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("hello spring"), "Body missing name: {body}");
}

#[test_context(TestApp)]
#[tokio::test]
async fn hello_mvc_should_escape_name(app: &mut TestApp) {
    let response = app
        .get_with_name("/hello-mvc", Some("<script>alert(1)</script>"))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.expect("Failed to read body");
    assert!(
        !body.contains("<script>"),
        "Name should be HTML escaped: {body}"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn hello_string_should_return_plain_text(app: &mut TestApp) {
    let test_cases = [("spring", "hello spring"), ("", "hello ")];

    for (name, expected) in test_cases {
        let response = app.get_with_name("/hello-string", Some(name)).await;
        assert_eq!(
            response.status().as_u16(),
            200,
            "Failed for name: {name:?}"
        );
        assert_eq!(
            response.text().await.expect("Failed to read body"),
            expected
        );
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn hello_api_should_return_json(app: &mut TestApp) {
    let schema = json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "properties": {
        "name": {
          "type": "string"
        }
      },
      "required": [
        "name"
      ],
      "additionalProperties": false
    });

    let response = app.get_with_name("/hello-api", Some("spring")).await;
    assert_eq!(response.status().as_u16(), 200);

    let response_body = get_json_response_body(response).await;
    assert!(
        jsonschema::is_valid(&schema, &response_body),
        "response does not match schema"
    );
    assert_eq!(response_body, json!({"name": "spring"}));

    let parsed: HelloResponse =
        serde_json::from_value(response_body).expect("Invalid response");
    assert_eq!(
        parsed,
        HelloResponse {
            name: "spring".to_owned()
        }
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_if_name_is_missing(app: &mut TestApp) {
    for route in NAMED_ROUTES {
        let response = app.get_with_name(route, None).await;

        assert_eq!(
            response.status().as_u16(),
            400,
            "Should fail with HTTP400 for route: {route}"
        );
        assert_eq!(
            response
                .json::<ErrorResponse>()
                .await
                .expect("Could not deserialise response body to ErrorResponse")
                .error,
            "Missing parameter: name".to_owned()
        );
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_json_400_if_name_is_repeated(app: &mut TestApp) {
    for route in NAMED_ROUTES {
        let response = app
            .get_with_query(route, &[("name", "a"), ("name", "b")])
            .await;

        assert_eq!(
            response.status().as_u16(),
            400,
            "Should fail with HTTP400 for route: {route}"
        );
        let error = response
            .json::<ErrorResponse>()
            .await
            .expect("Could not deserialise response body to ErrorResponse")
            .error;
        assert!(
            error.starts_with("Invalid query:"),
            "Unexpected error message: {error}"
        );
    }
}
