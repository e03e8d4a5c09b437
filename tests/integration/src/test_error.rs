//! Error response tests.

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use wirestack_s3_http::{MarshallError, S3ClientError};
    use wirestack_s3_model::error::S3ErrorCode;
    use wirestack_s3_model::input::{GetBucketAclInput, GetObjectInput, HeadBucketInput};

    use crate::s3_client;

    fn acl_input(bucket: &str) -> GetBucketAclInput {
        GetBucketAclInput {
            bucket: bucket.into(),
            expected_bucket_owner: None,
        }
    }

    #[tokio::test]
    async fn test_should_parse_no_such_bucket() {
        let (client, transport) = s3_client();
        transport.respond(
            404,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<Error>
  <Code>NoSuchBucket</Code>
  <Message>The specified bucket does not exist</Message>
  <BucketName>missing-bucket</BucketName>
  <RequestId>4442587FB7D0A2F9</RequestId>
  <HostId>ZtMPzhbS8ChF3tLxhc0v8R6fnZE8nFjx5hO3bGrp3yw=</HostId>
</Error>"#,
        );

        let err = client
            .send(&acl_input("missing-bucket"))
            .await
            .expect_err("get_bucket_acl should fail");

        let S3ClientError::Service(service) = err else {
            panic!("expected service error, got {err:?}");
        };
        assert_eq!(service.code, S3ErrorCode::NoSuchBucket);
        assert_eq!(service.status_code, StatusCode::NOT_FOUND);
        assert_eq!(
            service.message.as_deref(),
            Some("The specified bucket does not exist")
        );
        assert_eq!(service.bucket_name.as_deref(), Some("missing-bucket"));
        assert_eq!(service.request_id.as_deref(), Some("4442587FB7D0A2F9"));
        assert_eq!(
            service.host_id.as_deref(),
            Some("ZtMPzhbS8ChF3tLxhc0v8R6fnZE8nFjx5hO3bGrp3yw=")
        );
        assert_eq!(
            service.to_string(),
            "S3Error(NoSuchBucket, 404): The specified bucket does not exist"
        );
    }

    #[tokio::test]
    async fn test_should_derive_code_for_bodiless_head_error() {
        let (client, transport) = s3_client();
        transport.respond_with(
            403,
            &[
                ("x-amz-request-id", "0C8C4E9B2D6E8E47"),
                ("x-amz-id-2", "vlR7PnpV2Ce81l0PRw6jlUpck7Jo5ZsQjryTjKlc5aLWGVHPZLj5NeC6qMa0emYBDXOo6QBU0Wo="),
            ],
            "",
        );

        let err = client
            .send(&HeadBucketInput {
                bucket: "locked".into(),
                expected_bucket_owner: None,
            })
            .await
            .expect_err("head_bucket should fail");

        let service = err.service_error().expect("service error");
        assert_eq!(service.code, S3ErrorCode::Forbidden);
        assert_eq!(service.message, None);
        assert_eq!(service.request_id.as_deref(), Some("0C8C4E9B2D6E8E47"));
        assert!(service.host_id.is_some());
    }

    #[tokio::test]
    async fn test_should_keep_unknown_error_code() {
        let (client, transport) = s3_client();
        transport.respond(
            400,
            "<Error><Code>SomethingNew</Code><Message>new failure</Message></Error>",
        );

        let err = client
            .send(&acl_input("b"))
            .await
            .expect_err("should fail");
        let service = err.service_error().expect("service error");
        assert_eq!(service.code, S3ErrorCode::Other("SomethingNew".into()));
        assert_eq!(service.code.as_str(), "SomethingNew");
    }

    #[tokio::test]
    async fn test_should_fall_back_to_status_for_non_xml_error() {
        let (client, transport) = s3_client();
        transport.respond(503, "<html><body>Service Unavailable</body>");

        let err = client
            .send(&GetObjectInput {
                bucket: "b".into(),
                key: "k".into(),
                ..Default::default()
            })
            .await
            .expect_err("should fail");
        let service = err.service_error().expect("service error");
        assert_eq!(service.code, S3ErrorCode::ServiceUnavailable);
        assert_eq!(service.status_code, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_should_report_malformed_success_body() {
        let (client, transport) = s3_client();
        transport.respond(
            200,
            "<AccessControlPolicy><Owner><ID>x</ID></AccessControlList></AccessControlPolicy>",
        );

        let err = client
            .send(&acl_input("b"))
            .await
            .expect_err("should fail");
        assert!(matches!(err, S3ClientError::Xml(_)), "{err:?}");
        assert!(err.service_error().is_none());
    }

    #[tokio::test]
    async fn test_should_reject_empty_bucket_before_sending() {
        let (client, transport) = s3_client();

        let err = client
            .send(&acl_input(""))
            .await
            .expect_err("should fail");
        assert!(
            matches!(
                err,
                S3ClientError::Marshall(MarshallError::MissingParameter("Bucket"))
            ),
            "{err:?}"
        );
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_should_surface_transport_failure() {
        let (client, transport) = s3_client();

        let err = client
            .send(&acl_input("b"))
            .await
            .expect_err("should fail");
        assert!(matches!(err, S3ClientError::Transport(_)), "{err:?}");
        assert!(err.to_string().contains("no scripted response left"));
        assert_eq!(transport.requests().len(), 1);
    }
}
