extern crate swift_http;

use std::sync::Arc;

use serde_json::Value;
use swift_http::{routes, HttpConfig};
use swift_node::SwiftNode;

const BOUNDARY: &str = "swift-test-boundary";

fn sample_message() -> String {
    concat!(
        "{1:F01BANKBEBBAXXX2222123456}",
        "{2:I799BANKDEFFXXXXN}",
        "{4:\r\n",
        ":20:REFERENCE123\r\n",
        ":79:Please be advised that the guarantee\r\n",
        "referenced above has been extended.\r\n",
        "-}",
        "{5:{CHK:123456789ABC}}",
    )
    .to_string()
}

fn multipart_body(file_name: &str, content: &str) -> String {
    format!(
        "--{b}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"{f}\"\r\n\
         Content-Type: text/plain\r\n\r\n\
         {c}\r\n\
         --{b}--\r\n",
        b = BOUNDARY,
        f = file_name,
        c = content
    )
}

async fn test_routes(
) -> impl warp::Filter<Extract = impl warp::Reply, Error = std::convert::Infallible> + Clone {
    let node = Arc::new(SwiftNode::new_in_memory().await.unwrap());
    routes(node, &HttpConfig::default())
}

async fn post_file<F>(
    filter: &F,
    file_name: &str,
    content: &str,
) -> warp::http::Response<bytes::Bytes>
where
    F: warp::Filter<Error = std::convert::Infallible> + Clone + Send + Sync + 'static,
    F::Extract: warp::Reply + Send,
{
    warp::test::request()
        .method("POST")
        .path("/api/mt799")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(multipart_body(file_name, content))
        .reply(filter)
        .await
}

#[tokio::test]
async fn test_upload_and_retrieve_mt799() {
    let filter = test_routes().await;

    let response = post_file(&filter, "message.txt", &sample_message()).await;
    assert_eq!(response.status(), 201);

    let record: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(record["reference"], "REFERENCE123");
    assert_eq!(record["basic_header"], "F01BANKBEBBAXXX2222123456");
    let id = record["id"].as_i64().unwrap();

    let response = warp::test::request()
        .method("GET")
        .path(&format!("/api/mt799/{}", id))
        .reply(&filter)
        .await;
    assert_eq!(response.status(), 200);

    let fetched: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(fetched["id"], record["id"]);
    assert_eq!(fetched["narrative"], record["narrative"]);
}

#[tokio::test]
async fn test_upload_rejects_non_txt_file() {
    let filter = test_routes().await;

    let response = post_file(&filter, "message.pdf", &sample_message()).await;
    assert_eq!(response.status(), 400);

    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["error"]["type"], "upload_error");
}

#[tokio::test]
async fn test_upload_rejects_invalid_message() {
    let filter = test_routes().await;

    // No Block 1 in the uploaded file.
    let response = post_file(&filter, "message.txt", "{2:junk}").await;
    assert_eq!(response.status(), 400);

    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["error"]["type"], "validation_error");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Block 1"));
}

#[tokio::test]
async fn test_upload_reports_field_rule_violation() {
    let filter = test_routes().await;

    let raw = "{1:F01BANKBEBBAXXX}{4:\r\n:20:REFERENCETOOLONG1\r\n:79:Hello\r\n-}";
    let response = post_file(&filter, "message.txt", raw).await;
    assert_eq!(response.status(), 400);

    let body: Value = serde_json::from_slice(response.body()).unwrap();
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("Field 20"));
    assert!(message.contains("16"));
}

#[tokio::test]
async fn test_get_unknown_id_returns_404() {
    let filter = test_routes().await;

    let response = warp::test::request()
        .method("GET")
        .path("/api/mt799/12345")
        .reply(&filter)
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_health_endpoint() {
    let filter = test_routes().await;

    let response = warp::test::request()
        .method("GET")
        .path("/health")
        .reply(&filter)
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["status"], "ok");
}
