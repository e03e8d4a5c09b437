//! Bucket versioning tests.

#[cfg(test)]
mod tests {
    use http::Method;
    use wirestack_s3_model::enums::{BucketVersioningStatus, MfaDelete, MfaDeleteStatus};
    use wirestack_s3_model::input::{GetBucketVersioningInput, PutBucketVersioningInput};
    use wirestack_s3_model::types::VersioningConfiguration;

    use crate::virtual_host_client;

    #[tokio::test]
    async fn test_should_enable_versioning() {
        let (client, transport) = virtual_host_client();
        transport.respond(200, "");

        client
            .send(&PutBucketVersioningInput {
                bucket: "b".into(),
                versioning_configuration: VersioningConfiguration {
                    mfa_delete: Some(MfaDelete::Disabled),
                    status: Some(BucketVersioningStatus::Enabled),
                },
                mfa: Some("20899872 301749".into()),
                ..Default::default()
            })
            .await
            .expect("put_bucket_versioning");

        let req = transport.last_request();
        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.uri, "https://b.s3.amazonaws.com/?versioning");
        assert_eq!(req.header("x-amz-mfa"), Some("20899872 301749"));
        assert_eq!(req.header("content-type"), Some("application/xml"));
        let body = req.body_text();
        assert!(
            body.contains(
                "<VersioningConfiguration xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
                 <MfaDelete>Disabled</MfaDelete><Status>Enabled</Status>\
                 </VersioningConfiguration>"
            ),
            "{body}"
        );
        assert_eq!(req.header("content-length"), Some(body.len().to_string().as_str()));
    }

    #[tokio::test]
    async fn test_should_read_versioning_state() {
        let (client, transport) = virtual_host_client();
        transport.respond(
            200,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<VersioningConfiguration xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Status>Suspended</Status>
  <MfaDelete>Enabled</MfaDelete>
</VersioningConfiguration>"#,
        );

        let output = client
            .send(&GetBucketVersioningInput {
                bucket: "b".into(),
                expected_bucket_owner: None,
            })
            .await
            .expect("get_bucket_versioning");

        assert_eq!(output.status, Some(BucketVersioningStatus::Suspended));
        assert_eq!(output.mfa_delete, Some(MfaDeleteStatus::Enabled));
        assert_eq!(
            transport.last_request().uri,
            "https://b.s3.amazonaws.com/?versioning"
        );
    }

    #[tokio::test]
    async fn test_should_read_never_versioned_bucket() {
        let (client, transport) = virtual_host_client();
        transport.respond(
            200,
            r#"<VersioningConfiguration xmlns="http://s3.amazonaws.com/doc/2006-03-01/"/>"#,
        );

        let output = client
            .send(&GetBucketVersioningInput {
                bucket: "b".into(),
                expected_bucket_owner: None,
            })
            .await
            .expect("get_bucket_versioning");

        assert_eq!(output.status, None);
        assert_eq!(output.mfa_delete, None);
    }
}
