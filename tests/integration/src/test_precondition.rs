//! Conditional request tests.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use http::StatusCode;
    use wirestack_s3_model::error::S3ErrorCode;
    use wirestack_s3_model::input::{CopyObjectInput, GetObjectInput, HeadObjectInput};

    use crate::s3_client;

    #[tokio::test]
    async fn test_should_send_conditional_headers() {
        let (client, transport) = s3_client();
        transport.respond_with(200, &[("ETag", "\"abc\""), ("Content-Length", "3")], "abc");

        let output = client
            .send(&GetObjectInput {
                bucket: "b".into(),
                key: "k".into(),
                if_match: Some("\"abc\"".into()),
                if_modified_since: Some(Utc.with_ymd_and_hms(2015, 10, 21, 7, 28, 0).unwrap()),
                if_unmodified_since: Some(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()),
                ..Default::default()
            })
            .await
            .expect("get_object");
        assert_eq!(output.e_tag.as_deref(), Some("\"abc\""));

        let req = transport.last_request();
        assert_eq!(req.header("if-match"), Some("\"abc\""));
        assert_eq!(
            req.header("if-modified-since"),
            Some("Wed, 21 Oct 2015 07:28:00 GMT")
        );
        assert_eq!(
            req.header("if-unmodified-since"),
            Some("Tue, 01 Jan 2030 00:00:00 GMT")
        );
        assert_eq!(req.header("if-none-match"), None);
    }

    #[tokio::test]
    async fn test_should_map_precondition_failed() {
        let (client, transport) = s3_client();
        transport.respond(
            412,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<Error>
  <Code>PreconditionFailed</Code>
  <Message>At least one of the pre-conditions you specified did not hold</Message>
  <Condition>If-Match</Condition>
  <RequestId>R1</RequestId>
</Error>"#,
        );

        let err = client
            .send(&GetObjectInput {
                bucket: "b".into(),
                key: "k".into(),
                if_match: Some("\"stale\"".into()),
                ..Default::default()
            })
            .await
            .expect_err("should fail");

        let service = err.service_error().expect("service error");
        assert_eq!(service.code, S3ErrorCode::PreconditionFailed);
        assert_eq!(service.status_code, StatusCode::PRECONDITION_FAILED);
        assert_eq!(service.request_id.as_deref(), Some("R1"));
    }

    #[tokio::test]
    async fn test_should_map_not_modified_head() {
        let (client, transport) = s3_client();
        transport.respond_with(304, &[("ETag", "\"abc\"")], "");

        let err = client
            .send(&HeadObjectInput {
                bucket: "b".into(),
                key: "k".into(),
                if_none_match: Some("\"abc\"".into()),
                ..Default::default()
            })
            .await
            .expect_err("should fail");

        let service = err.service_error().expect("service error");
        assert_eq!(service.code, S3ErrorCode::NotModified);
        assert_eq!(service.status_code, StatusCode::NOT_MODIFIED);
        assert_eq!(
            transport.last_request().header("if-none-match"),
            Some("\"abc\"")
        );
    }

    #[tokio::test]
    async fn test_should_send_copy_source_conditions() {
        let (client, transport) = s3_client();
        transport.respond(
            200,
            "<CopyObjectResult><ETag>\"e\"</ETag></CopyObjectResult>",
        );

        client
            .send(&CopyObjectInput {
                bucket: "dst".into(),
                key: "k".into(),
                copy_source_bucket: "src".into(),
                copy_source_key: "k".into(),
                copy_source_if_none_match: Some("\"old\"".into()),
                copy_source_if_modified_since: Some(
                    Utc.with_ymd_and_hms(1994, 11, 6, 8, 49, 37).unwrap(),
                ),
                ..Default::default()
            })
            .await
            .expect("copy_object");

        let req = transport.last_request();
        assert_eq!(req.header("x-amz-copy-source"), Some("src/k"));
        assert_eq!(
            req.header("x-amz-copy-source-if-none-match"),
            Some("\"old\"")
        );
        assert_eq!(
            req.header("x-amz-copy-source-if-modified-since"),
            Some("Sun, 06 Nov 1994 08:49:37 GMT")
        );
    }
}
