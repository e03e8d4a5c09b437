//! Object read/write tests.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::{TimeZone, Utc};
    use http::Method;
    use wirestack_s3_http::S3ClientError;
    use wirestack_s3_model::StreamingBlob;
    use wirestack_s3_model::enums::{ServerSideEncryption, StorageClass};
    use wirestack_s3_model::error::S3ErrorCode;
    use wirestack_s3_model::input::{
        CopyObjectInput, DeleteObjectInput, DeleteObjectsInput, GetObjectInput,
        GetObjectTaggingInput, HeadObjectInput, PutObjectInput,
    };
    use wirestack_s3_model::types::{Delete, ObjectIdentifier, Tag, Tagging};

    use crate::{s3_client, virtual_host_client};

    #[tokio::test]
    async fn test_should_put_object_with_metadata_and_tags() {
        let (client, transport) = virtual_host_client();
        transport.respond_with(
            200,
            &[
                ("ETag", "\"1b2cf535f27731c974343645a3985328\""),
                ("x-amz-version-id", "pmWSyICn6KOjEw7OEXAMPLE"),
                ("x-amz-server-side-encryption", "AES256"),
            ],
            "",
        );

        let output = client
            .send(&PutObjectInput {
                bucket: "examplebucket".into(),
                key: "photos/2006/February/sample.jpg".into(),
                body: StreamingBlob::new("hello world"),
                content_type: Some("image/jpeg".into()),
                metadata: HashMap::from([
                    ("reviewer".to_owned(), "alice".to_owned()),
                    ("album".to_owned(), "winter".to_owned()),
                ]),
                tagging: Some(Tagging {
                    tag_set: vec![Tag::new("key1", "value 1"), Tag::new("key2", "a&b")],
                }),
                storage_class: Some(StorageClass::StandardIa),
                ..Default::default()
            })
            .await
            .expect("put_object");

        assert_eq!(
            output.e_tag.as_deref(),
            Some("\"1b2cf535f27731c974343645a3985328\"")
        );
        assert_eq!(output.version_id.as_deref(), Some("pmWSyICn6KOjEw7OEXAMPLE"));
        assert_eq!(output.server_side_encryption, Some(ServerSideEncryption::Aes256));

        let req = transport.last_request();
        assert_eq!(req.method, Method::PUT);
        assert_eq!(
            req.uri,
            "https://examplebucket.s3.amazonaws.com/photos/2006/February/sample.jpg"
        );
        assert_eq!(req.header("x-amz-meta-reviewer"), Some("alice"));
        assert_eq!(req.header("x-amz-meta-album"), Some("winter"));
        assert_eq!(req.header("x-amz-tagging"), Some("key1=value+1&key2=a%26b"));
        assert_eq!(req.header("x-amz-storage-class"), Some("STANDARD_IA"));
        assert_eq!(req.header("content-type"), Some("image/jpeg"));
        assert_eq!(req.header("content-length"), Some("11"));
        assert_eq!(req.header("content-md5"), None);
        assert_eq!(req.body.as_ref(), b"hello world");
    }

    #[tokio::test]
    async fn test_should_get_object_range_with_body_and_headers() {
        let (client, transport) = s3_client();
        transport.respond_with(
            206,
            &[
                ("Content-Range", "bytes 0-9/43"),
                ("Content-Length", "10"),
                ("Content-Type", "text/plain"),
                ("ETag", "\"0d94420ffd0bc68cd3d152506b97a9cc\""),
                ("Last-Modified", "Thu, 09 Oct 2014 22:57:28 GMT"),
                ("x-amz-meta-owner", "docs"),
                ("x-amz-tagging-count", "2"),
                ("x-amz-missing-meta", "1"),
            ],
            "The quick ",
        );

        let output = client
            .send(&GetObjectInput {
                bucket: "examplebucket".into(),
                key: "SampleFile.txt".into(),
                range: Some("bytes=0-9".into()),
                response_content_type: Some("text/plain".into()),
                version_id: Some("v 1".into()),
                ..Default::default()
            })
            .await
            .expect("get_object");

        assert_eq!(output.body.data.as_ref(), b"The quick ");
        assert_eq!(output.content_range.as_deref(), Some("bytes 0-9/43"));
        assert_eq!(output.content_length, Some(10));
        assert_eq!(
            output.last_modified,
            Some(Utc.with_ymd_and_hms(2014, 10, 9, 22, 57, 28).unwrap())
        );
        assert_eq!(output.metadata.get("owner").map(String::as_str), Some("docs"));
        assert_eq!(output.tag_count, Some(2));
        assert_eq!(output.missing_meta, Some(1));

        let req = transport.last_request();
        assert_eq!(req.method, Method::GET);
        assert_eq!(
            req.uri,
            "http://localhost:4566/examplebucket/SampleFile.txt?response-content-type=text%2Fplain&versionId=v%201"
        );
        assert_eq!(req.header("range"), Some("bytes=0-9"));
        assert!(req.body.is_empty());
    }

    #[tokio::test]
    async fn test_should_map_head_object_not_found_without_body() {
        let (client, transport) = s3_client();
        transport.respond_with(404, &[("x-amz-request-id", "4442587FB7D0A2F9")], "");

        let err = client
            .send(&HeadObjectInput {
                bucket: "b".into(),
                key: "missing".into(),
                ..Default::default()
            })
            .await
            .expect_err("head_object should fail");

        let service = err.service_error().expect("service error");
        assert_eq!(service.code, S3ErrorCode::NotFound);
        assert_eq!(service.request_id.as_deref(), Some("4442587FB7D0A2F9"));
        assert_eq!(transport.last_request().method, Method::HEAD);
    }

    #[tokio::test]
    async fn test_should_copy_object_with_encoded_source() {
        let (client, transport) = s3_client();
        transport.respond_with(
            200,
            &[("x-amz-copy-source-version-id", "3/L4kqtJlcpXroDTDmJ+rmSpXd3dIbrHY")],
            r#"<?xml version="1.0" encoding="UTF-8"?>
<CopyObjectResult>
  <LastModified>2009-10-28T22:32:00.000Z</LastModified>
  <ETag>"9b2cf535f27731c974343645a3985328"</ETag>
</CopyObjectResult>"#,
        );

        let output = client
            .send(&CopyObjectInput {
                bucket: "destination".into(),
                key: "copy.txt".into(),
                copy_source_bucket: "source".into(),
                copy_source_key: "dir/my file+1.txt".into(),
                copy_source_version_id: Some("abc".into()),
                ..Default::default()
            })
            .await
            .expect("copy_object");

        let result = output.copy_object_result.expect("copy result");
        assert_eq!(
            result.e_tag.as_deref(),
            Some("\"9b2cf535f27731c974343645a3985328\"")
        );
        assert_eq!(
            result.last_modified,
            Some(Utc.with_ymd_and_hms(2009, 10, 28, 22, 32, 0).unwrap())
        );
        assert_eq!(
            output.copy_source_version_id.as_deref(),
            Some("3/L4kqtJlcpXroDTDmJ+rmSpXd3dIbrHY")
        );

        let req = transport.last_request();
        assert_eq!(
            req.header("x-amz-copy-source"),
            Some("source/dir/my%20file%2B1.txt?versionId=abc")
        );
    }

    #[tokio::test]
    async fn test_should_fail_copy_with_error_in_ok_response() {
        let (client, transport) = s3_client();
        transport.respond(
            200,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<Error>
  <Code>InternalError</Code>
  <Message>We encountered an internal error. Please try again.</Message>
  <RequestId>656c76696e6727732072657175657374</RequestId>
</Error>"#,
        );

        let err = client
            .send(&CopyObjectInput {
                bucket: "destination".into(),
                key: "copy.txt".into(),
                copy_source_bucket: "source".into(),
                copy_source_key: "big.bin".into(),
                ..Default::default()
            })
            .await
            .expect_err("copy_object should fail");

        let service = err.service_error().expect("service error");
        assert_eq!(service.code, S3ErrorCode::InternalError);
        assert_eq!(
            service.request_id.as_deref(),
            Some("656c76696e6727732072657175657374")
        );
    }

    #[tokio::test]
    async fn test_should_reject_copy_without_source() {
        let (client, transport) = s3_client();
        let err = client
            .send(&CopyObjectInput {
                bucket: "destination".into(),
                key: "copy.txt".into(),
                ..Default::default()
            })
            .await
            .expect_err("copy_object should fail");

        assert!(matches!(err, S3ClientError::Marshall(_)), "{err:?}");
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_should_delete_objects_in_batch() {
        let (client, transport) = s3_client();
        transport.respond(
            200,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<DeleteResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Deleted>
    <Key>sample1.txt</Key>
  </Deleted>
  <Deleted>
    <Key>sample2.txt</Key>
    <DeleteMarker>true</DeleteMarker>
    <DeleteMarkerVersionId>NeQt5xeFTfgPJD8B4CGWnkSLtluMr11s</DeleteMarkerVersionId>
  </Deleted>
  <Error>
    <Key>sample3.txt</Key>
    <Code>AccessDenied</Code>
    <Message>Access Denied</Message>
  </Error>
</DeleteResult>"#,
        );

        let output = client
            .send(&DeleteObjectsInput {
                bucket: "examplebucket".into(),
                delete: Delete {
                    objects: vec![
                        ObjectIdentifier::new("sample1.txt"),
                        ObjectIdentifier::new("sample2.txt"),
                        ObjectIdentifier::new("sample3.txt"),
                    ],
                    quiet: Some(false),
                },
                ..Default::default()
            })
            .await
            .expect("delete_objects");

        assert_eq!(output.deleted.len(), 2);
        assert_eq!(output.deleted[1].delete_marker, Some(true));
        assert_eq!(
            output.deleted[1].delete_marker_version_id.as_deref(),
            Some("NeQt5xeFTfgPJD8B4CGWnkSLtluMr11s")
        );
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].code.as_deref(), Some("AccessDenied"));

        let req = transport.last_request();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.uri, "http://localhost:4566/examplebucket?delete");
        assert_eq!(req.header("content-md5").map(str::len), Some(24));
        let body = req.body_text();
        assert!(body.contains("<Object><Key>sample1.txt</Key></Object>"), "{body}");
        assert!(body.contains("<Quiet>false</Quiet>"), "{body}");
    }

    #[tokio::test]
    async fn test_should_delete_object_version() {
        let (client, transport) = s3_client();
        transport.respond_with(
            204,
            &[("x-amz-delete-marker", "true"), ("x-amz-version-id", "v2")],
            "",
        );

        let output = client
            .send(&DeleteObjectInput {
                bucket: "examplebucket".into(),
                key: "objectkey.jpg".into(),
                version_id: Some("v1".into()),
                ..Default::default()
            })
            .await
            .expect("delete_object");

        assert_eq!(output.delete_marker, Some(true));
        assert_eq!(output.version_id.as_deref(), Some("v2"));
        assert_eq!(
            transport.last_request().uri,
            "http://localhost:4566/examplebucket/objectkey.jpg?versionId=v1"
        );
    }

    #[tokio::test]
    async fn test_should_read_object_tag_set() {
        let (client, transport) = s3_client();
        transport.respond_with(
            200,
            &[("x-amz-version-id", "ydlaNkwWm0SfKJR.T1b1fIdPRbldTYRI")],
            r#"<?xml version="1.0" encoding="UTF-8"?>
<Tagging xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <TagSet>
    <Tag><Key>Key4</Key><Value>Value4</Value></Tag>
    <Tag><Key>Key3</Key><Value>Value3</Value></Tag>
  </TagSet>
</Tagging>"#,
        );

        let output = client
            .send(&GetObjectTaggingInput {
                bucket: "examplebucket".into(),
                key: "HappyFace.jpg".into(),
                ..Default::default()
            })
            .await
            .expect("get_object_tagging");

        assert_eq!(
            output.tag_set,
            vec![Tag::new("Key4", "Value4"), Tag::new("Key3", "Value3")]
        );
        assert_eq!(
            output.version_id.as_deref(),
            Some("ydlaNkwWm0SfKJR.T1b1fIdPRbldTYRI")
        );
        assert_eq!(
            transport.last_request().uri,
            "http://localhost:4566/examplebucket/HappyFace.jpg?tagging"
        );
    }
}
