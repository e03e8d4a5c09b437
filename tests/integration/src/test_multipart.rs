//! Multipart upload tests.

#[cfg(test)]
mod tests {
    use http::Method;
    use wirestack_s3_model::StreamingBlob;
    use wirestack_s3_model::error::S3ErrorCode;
    use wirestack_s3_model::input::{
        AbortMultipartUploadInput, CompleteMultipartUploadInput, CreateMultipartUploadInput,
        ListPartsInput, UploadPartInput,
    };
    use wirestack_s3_model::types::{CompletedMultipartUpload, CompletedPart};

    use crate::s3_client;

    const UPLOAD_ID: &str =
        "VXBsb2FkIElEIGZvciA2aWWpbmcncyBteS1tb3ZpZS5tMnRzIHVwbG9hZA";

    fn completed_part(part_number: i32, e_tag: &str) -> CompletedPart {
        CompletedPart {
            e_tag: Some(e_tag.to_owned()),
            part_number: Some(part_number),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_should_run_multipart_upload() {
        let (client, transport) = s3_client();
        transport.respond(
            200,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<InitiateMultipartUploadResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Bucket>example-bucket</Bucket>
  <Key>example-object</Key>
  <UploadId>VXBsb2FkIElEIGZvciA2aWWpbmcncyBteS1tb3ZpZS5tMnRzIHVwbG9hZA</UploadId>
</InitiateMultipartUploadResult>"#,
        );
        transport.respond_with(200, &[("ETag", "\"b54357faf0632cce46e942fa68356b38\"")], "");
        transport.respond_with(
            200,
            &[("x-amz-version-id", "v-final")],
            r#"<?xml version="1.0" encoding="UTF-8"?>
<CompleteMultipartUploadResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Location>http://example-bucket.s3.amazonaws.com/example-object</Location>
  <Bucket>example-bucket</Bucket>
  <Key>example-object</Key>
  <ETag>"3858f62230ac3c915f300c664312c11f-9"</ETag>
</CompleteMultipartUploadResult>"#,
        );

        let created = client
            .send(&CreateMultipartUploadInput {
                bucket: "example-bucket".into(),
                key: "example-object".into(),
                content_type: Some("video/mp2t".into()),
                ..Default::default()
            })
            .await
            .expect("create_multipart_upload");
        let upload_id = created.upload_id.expect("upload id");
        assert_eq!(upload_id, UPLOAD_ID);
        assert_eq!(created.key.as_deref(), Some("example-object"));

        let part = client
            .send(&UploadPartInput {
                bucket: "example-bucket".into(),
                key: "example-object".into(),
                upload_id: upload_id.clone(),
                part_number: 1,
                body: StreamingBlob::new("part-one"),
                ..Default::default()
            })
            .await
            .expect("upload_part");
        let e_tag = part.e_tag.expect("etag");

        let completed = client
            .send(&CompleteMultipartUploadInput {
                bucket: "example-bucket".into(),
                key: "example-object".into(),
                upload_id: upload_id.clone(),
                multipart_upload: Some(CompletedMultipartUpload {
                    parts: vec![completed_part(1, &e_tag)],
                }),
                ..Default::default()
            })
            .await
            .expect("complete_multipart_upload");
        assert_eq!(
            completed.e_tag.as_deref(),
            Some("\"3858f62230ac3c915f300c664312c11f-9\"")
        );
        assert_eq!(completed.version_id.as_deref(), Some("v-final"));
        assert_eq!(
            completed.location.as_deref(),
            Some("http://example-bucket.s3.amazonaws.com/example-object")
        );

        let requests = transport.requests();
        assert_eq!(requests.len(), 3);

        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(
            requests[0].uri,
            "http://localhost:4566/example-bucket/example-object?uploads"
        );
        assert_eq!(requests[0].header("content-type"), Some("video/mp2t"));
        assert_eq!(requests[0].header("content-length"), Some("0"));

        assert_eq!(requests[1].method, Method::PUT);
        assert_eq!(
            requests[1].uri,
            format!(
                "http://localhost:4566/example-bucket/example-object?partNumber=1&uploadId={UPLOAD_ID}"
            )
        );
        assert_eq!(requests[1].body.as_ref(), b"part-one");
        assert_eq!(requests[1].header("content-length"), Some("8"));

        assert_eq!(requests[2].method, Method::POST);
        assert_eq!(
            requests[2].uri,
            format!("http://localhost:4566/example-bucket/example-object?uploadId={UPLOAD_ID}")
        );
        let body = requests[2].body_text();
        assert!(body.starts_with("<?xml"), "{body}");
        assert!(body.contains("<CompleteMultipartUpload"), "{body}");
        assert!(body.contains("<Part><ETag>"), "{body}");
        assert!(body.contains("<PartNumber>1</PartNumber></Part>"), "{body}");
    }

    #[tokio::test]
    async fn test_should_fail_complete_with_error_in_ok_response() {
        let (client, transport) = s3_client();
        transport.respond(
            200,
            r#"<?xml version="1.0" encoding="UTF-8"?>

<Error>
  <Code>EntityTooSmall</Code>
  <Message>Your proposed upload is smaller than the minimum allowed object size.</Message>
</Error>"#,
        );

        let err = client
            .send(&CompleteMultipartUploadInput {
                bucket: "b".into(),
                key: "k".into(),
                upload_id: "u".into(),
                multipart_upload: Some(CompletedMultipartUpload {
                    parts: vec![completed_part(1, "\"a\""), completed_part(2, "\"b\"")],
                }),
                ..Default::default()
            })
            .await
            .expect_err("complete should fail");

        let service = err.service_error().expect("service error");
        assert_eq!(service.code, S3ErrorCode::EntityTooSmall);
        assert_eq!(
            service.message.as_deref(),
            Some("Your proposed upload is smaller than the minimum allowed object size.")
        );
    }

    #[tokio::test]
    async fn test_should_list_parts() {
        let (client, transport) = s3_client();
        transport.respond(
            200,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<ListPartsResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Bucket>example-bucket</Bucket>
  <Key>example-object</Key>
  <UploadId>XXBsb2FkIElEIGZvciBlbHZpbmcncyVcdS1tb3ZpZS5tMnRzEEEwbG9hZA</UploadId>
  <Initiator>
    <ID>arn:aws:iam::111122223333:user/some-user-11116a31-17b5-4fb7-9df5-b288870f11xx</ID>
    <DisplayName>umat-user-11116a31-17b5-4fb7-9df5-b288870f11xx</DisplayName>
  </Initiator>
  <Owner>
    <ID>75aa57f09aa0c8caeab4f8c24e99d10f8e7faeebf76c078efc7c6caea54ba06a</ID>
    <DisplayName>someName</DisplayName>
  </Owner>
  <StorageClass>STANDARD</StorageClass>
  <PartNumberMarker>1</PartNumberMarker>
  <NextPartNumberMarker>3</NextPartNumberMarker>
  <MaxParts>2</MaxParts>
  <IsTruncated>true</IsTruncated>
  <Part>
    <PartNumber>2</PartNumber>
    <LastModified>2010-11-10T20:48:34.000Z</LastModified>
    <ETag>"7778aef83f66abc1fa1e8477f296d394"</ETag>
    <Size>10485760</Size>
  </Part>
  <Part>
    <PartNumber>3</PartNumber>
    <LastModified>2010-11-10T20:48:33.000Z</LastModified>
    <ETag>"aaaa18db4cc2f85cedef654fccc4a4x8"</ETag>
    <Size>10485760</Size>
  </Part>
</ListPartsResult>"#,
        );

        let output = client
            .send(&ListPartsInput {
                bucket: "example-bucket".into(),
                key: "example-object".into(),
                upload_id: "XXBsb2FkIElEIGZvciBlbHZpbmcncyVcdS1tb3ZpZS5tMnRzEEEwbG9hZA".into(),
                max_parts: Some(2),
                part_number_marker: Some("1".into()),
                ..Default::default()
            })
            .await
            .expect("list_parts");

        assert_eq!(output.parts.len(), 2);
        assert_eq!(output.parts[0].part_number, Some(2));
        assert_eq!(output.parts[1].size, Some(10_485_760));
        assert_eq!(output.next_part_number_marker.as_deref(), Some("3"));
        assert_eq!(output.is_truncated, Some(true));
        let initiator = output.initiator.expect("initiator");
        assert_eq!(
            initiator.display_name.as_deref(),
            Some("umat-user-11116a31-17b5-4fb7-9df5-b288870f11xx")
        );
        assert_eq!(
            output.owner.and_then(|o| o.display_name).as_deref(),
            Some("someName")
        );

        assert_eq!(
            transport.last_request().uri,
            "http://localhost:4566/example-bucket/example-object?max-parts=2&part-number-marker=1&uploadId=XXBsb2FkIElEIGZvciBlbHZpbmcncyVcdS1tb3ZpZS5tMnRzEEEwbG9hZA"
        );
    }

    #[tokio::test]
    async fn test_should_require_upload_id() {
        let (client, transport) = s3_client();
        let err = client
            .send(&AbortMultipartUploadInput {
                bucket: "b".into(),
                key: "k".into(),
                ..Default::default()
            })
            .await
            .expect_err("abort should fail");

        assert!(err.to_string().contains("UploadId"), "{err}");
        assert!(transport.requests().is_empty());
    }
}
