//! XML conformance tests for the Todo Manager REST API.
//!
//! Tests XML content negotiation, request parsing, and response formatting.

mod common;

use axum::http::{HeaderValue, StatusCode};
use serde_json::{Value, json};

use common::assertions::{assert_content_type, assert_xml_error, xml_values};
use common::harness::{ACCEPT, RestTestHarness};

// =============================================================================
// Content Negotiation Tests
// =============================================================================

mod content_negotiation {
    use super::*;

    #[tokio::test]
    async fn test_accept_xml_returns_xml() {
        let harness = RestTestHarness::seeded();

        let response = harness.get_xml("/todos/1").await;

        response.assert_status_ok();
        assert_content_type(&response, "application/xml");
        assert_eq!(
            response.text(),
            "<todos><todo><id>1</id><title>scan paperwork</title>\
             <doneStatus>false</doneStatus><description/>\
             <tasksof><id>1</id></tasksof><categories><id>1</id></categories>\
             </todo></todos>"
        );
    }

    #[tokio::test]
    async fn test_first_recognised_accept_type_wins() {
        let harness = RestTestHarness::seeded();

        let response = harness
            .server
            .get("/categories")
            .add_header(ACCEPT, HeaderValue::from_static("text/html, application/xml;q=0.9"))
            .await;
        assert_content_type(&response, "application/xml");

        let response = harness
            .server
            .get("/categories")
            .add_header(ACCEPT, HeaderValue::from_static("application/json, application/xml"))
            .await;
        assert_content_type(&response, "application/json");
    }

    #[tokio::test]
    async fn test_no_accept_defaults_to_json() {
        let harness = RestTestHarness::seeded();

        let response = harness.server.get("/projects").await;

        response.assert_status_ok();
        assert_content_type(&response, "application/json");
    }

    #[tokio::test]
    async fn test_wildcard_accept_defaults_to_json() {
        let harness = RestTestHarness::seeded();

        let response = harness
            .server
            .get("/projects")
            .add_header(ACCEPT, HeaderValue::from_static("*/*"))
            .await;

        assert_content_type(&response, "application/json");
    }

    #[tokio::test]
    async fn test_json_body_xml_response() {
        let harness = RestTestHarness::seeded();

        let response = harness
            .server
            .post("/categories")
            .add_header(ACCEPT, HeaderValue::from_static("application/xml"))
            .json(&json!({"title": "Garden"}))
            .await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(
            response.text(),
            "<category><id>3</id><title>Garden</title><description/></category>"
        );
    }
}

// =============================================================================
// XML Request Tests
// =============================================================================

mod xml_requests {
    use super::*;

    #[tokio::test]
    async fn test_create_from_xml() {
        let harness = RestTestHarness::seeded();

        let response = harness
            .post_xml(
                "/projects",
                "<project><title>Garden</title><active>true</active></project>",
            )
            .await;

        response.assert_status(StatusCode::CREATED);
        assert_content_type(&response, "application/xml");
        assert_eq!(
            response.text(),
            "<project><id>2</id><title>Garden</title><completed>false</completed>\
             <active>true</active><description/></project>"
        );
    }

    #[tokio::test]
    async fn test_xml_root_name_is_not_checked() {
        let harness = RestTestHarness::seeded();

        let response = harness
            .post_xml("/todos", "<anything><title>water plants</title></anything>")
            .await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(xml_values(&response.text(), "title"), vec!["water plants"]);
    }

    #[tokio::test]
    async fn test_xml_amend_keeps_other_fields() {
        let harness = RestTestHarness::seeded();

        let response = harness
            .post_xml("/todos/2", "<todo><doneStatus>true</doneStatus></todo>")
            .await;

        response.assert_status_ok();
        let body = response.text();
        assert_eq!(xml_values(&body, "title"), vec!["file paperwork"]);
        assert_eq!(xml_values(&body, "doneStatus"), vec!["true"]);
    }

    #[tokio::test]
    async fn test_xml_escaping_round_trips() {
        let harness = RestTestHarness::seeded();

        let created = harness
            .post_xml("/todos", "<todo><title>a &amp; b &lt;c&gt;</title></todo>")
            .await;
        created.assert_status(StatusCode::CREATED);

        let body: Value = harness.get("/todos/3").await.json();
        assert_eq!(body["todos"][0]["title"], "a & b <c>");
    }

    #[tokio::test]
    async fn test_malformed_xml() {
        let harness = RestTestHarness::seeded();

        let response = harness
            .post_xml("/todos", "<todo><title>x</todo>")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_content_type(&response, "application/xml");
        let messages = xml_values(&response.text(), "errorMessage");
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Malformed XML body"), "{}", messages[0]);
    }
}

// =============================================================================
// XML Error Tests
// =============================================================================

mod xml_errors {
    use super::*;

    #[tokio::test]
    async fn test_missing_entity_xml() {
        let harness = RestTestHarness::seeded();

        let response = harness.get_xml("/todos/-1").await;

        assert_xml_error(
            &response,
            StatusCode::NOT_FOUND,
            "Could not find an instance with todos/-1",
        );
    }

    #[tokio::test]
    async fn test_validation_error_xml() {
        let harness = RestTestHarness::seeded();

        let response = harness
            .post_xml("/todos", "<todo><fakeField>x</fakeField></todo>")
            .await;

        assert_xml_error(
            &response,
            StatusCode::BAD_REQUEST,
            "Could not find field: fakeField",
        );
    }

    #[tokio::test]
    async fn test_unknown_route_xml() {
        let harness = RestTestHarness::seeded();

        let response = harness.get_xml("/projects/1/tasks/1/extra").await;

        assert_xml_error(
            &response,
            StatusCode::NOT_FOUND,
            "Could not find an instance with projects/1/tasks/1/extra",
        );
    }

    #[tokio::test]
    async fn test_delete_missing_xml() {
        let harness = RestTestHarness::seeded();

        let response = harness.delete_xml("/todos/-1").await;

        assert_xml_error(
            &response,
            StatusCode::NOT_FOUND,
            "Could not find any instances with todos/-1",
        );
    }
}
