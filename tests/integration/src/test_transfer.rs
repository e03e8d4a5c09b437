//! Verified transfers and existence checks.

#[cfg(test)]
mod tests {
    use wirestack_s3_http::{S3ClientError, Transfer};
    use wirestack_s3_model::enums::ServerSideEncryption;
    use wirestack_s3_model::input::{GetObjectInput, PutObjectInput, UploadPartInput};

    use crate::s3_client;

    const HELLO_WORLD_ETAG: &str = "\"5eb63bbbe01eeed093cb22bb8f5acdc3\"";
    const STALE_ETAG: &str = "\"d41d8cd98f00b204e9800998ecf8427e\"";

    fn put_hello_world() -> PutObjectInput {
        PutObjectInput {
            bucket: "bucket".into(),
            key: "greeting.txt".into(),
            body: "hello world".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_should_verify_upload_against_etag() {
        let (client, transport) = s3_client();
        transport.respond_with(200, &[("ETag", HELLO_WORLD_ETAG)], "");

        let output = client.put_object(&put_hello_world()).await.expect("put_object");
        assert_eq!(output.e_tag.as_deref(), Some(HELLO_WORLD_ETAG));
        assert_eq!(transport.last_request().header("content-md5"), None);
    }

    #[tokio::test]
    async fn test_should_fail_upload_with_mismatched_etag() {
        let (client, transport) = s3_client();
        transport.respond_with(200, &[("ETag", STALE_ETAG)], "");

        let err = client
            .put_object(&put_hello_world())
            .await
            .expect_err("digest mismatch");
        let S3ClientError::Integrity {
            transfer,
            client_md5,
            etag,
        } = &err
        else {
            panic!("expected integrity error, got {err:?}");
        };
        assert_eq!(*transfer, Transfer::Upload);
        assert_eq!(client_md5, "XrY7u+Ae7tCTyyK7j1rNww==");
        assert_eq!(etag, STALE_ETAG);
        assert!(
            err.to_string()
                .starts_with("Unable to verify integrity of data upload")
        );
    }

    #[tokio::test]
    async fn test_should_verify_upload_against_caller_md5() {
        let (client, transport) = s3_client();
        transport.respond_with(200, &[("ETag", HELLO_WORLD_ETAG)], "");

        let err = client
            .put_object(&PutObjectInput {
                content_md5: Some("1B2M2Y8AsgTpgAmY7PhCfg==".into()),
                ..put_hello_world()
            })
            .await
            .expect_err("caller digest differs from ETag");
        assert!(matches!(err, S3ClientError::Integrity { .. }));
        assert_eq!(
            transport.last_request().header("content-md5"),
            Some("1B2M2Y8AsgTpgAmY7PhCfg==")
        );
    }

    #[tokio::test]
    async fn test_should_skip_upload_check_for_kms() {
        let (client, transport) = s3_client();
        transport.respond_with(
            200,
            &[
                ("ETag", STALE_ETAG),
                ("x-amz-server-side-encryption", "aws:kms"),
            ],
            "",
        );

        let output = client
            .put_object(&PutObjectInput {
                server_side_encryption: Some(ServerSideEncryption::AwsKms),
                ..put_hello_world()
            })
            .await
            .expect("kms ETag is not a digest");
        assert_eq!(output.server_side_encryption, Some(ServerSideEncryption::AwsKms));
    }

    #[tokio::test]
    async fn test_should_verify_part_upload() {
        let (client, transport) = s3_client();
        transport.respond_with(200, &[("ETag", "\"dede9db222ee612853f44e6e6b1ca792\"")], "");
        transport.respond_with(200, &[("ETag", STALE_ETAG)], "");

        let part = UploadPartInput {
            bucket: "bucket".into(),
            key: "big.bin".into(),
            upload_id: "upload-1".into(),
            part_number: 1,
            body: "part-one".into(),
            ..Default::default()
        };
        client.upload_part(&part).await.expect("matching part");
        let err = client.upload_part(&part).await.expect_err("stale part");
        assert!(matches!(
            err,
            S3ClientError::Integrity {
                transfer: Transfer::Upload,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_should_verify_download_against_etag() {
        let (client, transport) = s3_client();
        transport.respond_with(200, &[("ETag", HELLO_WORLD_ETAG)], "hello world");
        transport.respond_with(200, &[("ETag", HELLO_WORLD_ETAG)], "hello w0rld");

        let input = GetObjectInput {
            bucket: "bucket".into(),
            key: "greeting.txt".into(),
            ..Default::default()
        };
        let output = client.get_object(&input).await.expect("intact download");
        assert_eq!(&output.body.data[..], b"hello world");

        let err = client.get_object(&input).await.expect_err("corrupted download");
        assert!(matches!(
            err,
            S3ClientError::Integrity {
                transfer: Transfer::Download,
                ..
            }
        ));
        assert!(
            err.to_string()
                .starts_with("Unable to verify integrity of data download")
        );
    }

    #[tokio::test]
    async fn test_should_skip_download_check_for_multipart_and_ranges() {
        let (client, transport) = s3_client();
        transport.respond_with(
            200,
            &[("ETag", "\"3858f62230ac3c915f300c664312c11f-9\"")],
            "assembled",
        );
        transport.respond_with(
            206,
            &[
                ("ETag", HELLO_WORLD_ETAG),
                ("Content-Range", "bytes 0-4/11"),
            ],
            "hello",
        );

        let input = GetObjectInput {
            bucket: "bucket".into(),
            key: "greeting.txt".into(),
            ..Default::default()
        };
        client.get_object(&input).await.expect("multipart ETag");
        let output = client
            .get_object(&GetObjectInput {
                range: Some("bytes=0-4".into()),
                ..input
            })
            .await
            .expect("ranged download");
        assert_eq!(output.content_range.as_deref(), Some("bytes 0-4/11"));
    }

    #[tokio::test]
    async fn test_should_check_bucket_existence() {
        let (client, transport) = s3_client();
        transport.respond(200, "");
        transport.respond(403, "");
        transport.respond(301, "");
        transport.respond(404, "");
        transport.respond(500, "");

        assert!(client.does_bucket_exist("mine").await.expect("200"));
        assert!(client.does_bucket_exist("theirs").await.expect("403"));
        assert!(client.does_bucket_exist("elsewhere").await.expect("301"));
        assert!(!client.does_bucket_exist("missing").await.expect("404"));
        let err = client
            .does_bucket_exist("flaky")
            .await
            .expect_err("500 is not an answer");
        assert_eq!(err.service_error().map(|e| e.status_code.as_u16()), Some(500));

        let req = transport.last_request();
        assert_eq!(req.method, http::Method::HEAD);
        assert_eq!(req.uri, "http://localhost:4566/flaky");
    }

    #[tokio::test]
    async fn test_should_check_object_existence() {
        let (client, transport) = s3_client();
        transport.respond_with(200, &[("ETag", HELLO_WORLD_ETAG)], "");
        transport.respond(404, "");
        transport.respond(403, "");

        assert!(client.does_object_exist("bucket", "a.txt").await.expect("200"));
        assert!(!client.does_object_exist("bucket", "b.txt").await.expect("404"));
        let err = client
            .does_object_exist("bucket", "c.txt")
            .await
            .expect_err("403 is surfaced for objects");
        assert_eq!(err.service_error().map(|e| e.status_code.as_u16()), Some(403));

        let requests = transport.requests();
        assert_eq!(requests[1].method, http::Method::HEAD);
        assert_eq!(requests[1].uri, "http://localhost:4566/bucket/b.txt");
    }
}
