//! Listing tests.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use wirestack_s3_model::enums::{EncodingType, StorageClass};
    use wirestack_s3_http::{MarshallError, S3ClientError};
    use wirestack_s3_model::input::{ListObjectVersionsInput, ListObjectsInput, ListObjectsV2Input};
    use wirestack_s3_model::output::{ListObjectVersionsOutput, ListObjectsOutput};

    use crate::s3_client;

    #[tokio::test]
    async fn test_should_list_objects_v2_page() {
        let (client, transport) = s3_client();
        transport.respond(
            200,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>bucket</Name>
  <Prefix/>
  <KeyCount>2</KeyCount>
  <MaxKeys>2</MaxKeys>
  <IsTruncated>true</IsTruncated>
  <NextContinuationToken>1ueGcxLPRx1Tr/XYExHnhbYLgveDs2J/wm36Hy4vbOwM=</NextContinuationToken>
  <Contents>
    <Key>happyface.jpg</Key>
    <LastModified>2014-11-21T19:40:05.000Z</LastModified>
    <ETag>"70ee1738b6b21e2c8a43f3a5ab0eee71"</ETag>
    <Size>11</Size>
    <StorageClass>STANDARD</StorageClass>
  </Contents>
  <Contents>
    <Key>happyface2.jpg</Key>
    <LastModified>2014-11-21T19:40:05.000Z</LastModified>
    <ETag>"70ee1738b6b21e2c8a43f3a5ab0eee71"</ETag>
    <Size>34202</Size>
    <StorageClass>GLACIER</StorageClass>
  </Contents>
</ListBucketResult>"#,
        );

        let output = client
            .send(&ListObjectsV2Input {
                bucket: "bucket".into(),
                max_keys: Some(2),
                start_after: Some("a b".into()),
                ..Default::default()
            })
            .await
            .expect("list_objects_v2");

        assert_eq!(output.name.as_deref(), Some("bucket"));
        assert_eq!(output.key_count, Some(2));
        assert_eq!(output.is_truncated, Some(true));
        assert_eq!(
            output.next_continuation_token.as_deref(),
            Some("1ueGcxLPRx1Tr/XYExHnhbYLgveDs2J/wm36Hy4vbOwM=")
        );
        assert_eq!(output.contents.len(), 2);
        assert_eq!(output.contents[0].size, Some(11));
        assert_eq!(
            output.contents[0].last_modified,
            Some(Utc.with_ymd_and_hms(2014, 11, 21, 19, 40, 5).unwrap())
        );
        assert_eq!(output.contents[1].storage_class, Some(StorageClass::Glacier));

        assert_eq!(
            transport.last_request().uri,
            "http://localhost:4566/bucket?list-type=2&max-keys=2&start-after=a%20b"
        );
    }

    #[tokio::test]
    async fn test_should_decode_url_encoded_listing() {
        let (client, transport) = s3_client();
        transport.respond(
            200,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>bucket</Name>
  <Prefix>my+photos%2F</Prefix>
  <Delimiter>%2F</Delimiter>
  <EncodingType>url</EncodingType>
  <IsTruncated>false</IsTruncated>
  <Contents>
    <Key>my+photos%2Fsummer+%26+sun.jpg</Key>
    <Size>5</Size>
  </Contents>
  <CommonPrefixes>
    <Prefix>my+photos%2F2024%2F</Prefix>
  </CommonPrefixes>
</ListBucketResult>"#,
        );

        let output = client
            .send(&ListObjectsV2Input {
                bucket: "bucket".into(),
                prefix: Some("my photos/".into()),
                delimiter: Some("/".into()),
                encoding_type: Some(EncodingType::Url),
                ..Default::default()
            })
            .await
            .expect("list_objects_v2");

        assert_eq!(output.encoding_type, Some(EncodingType::Url));
        assert_eq!(output.prefix.as_deref(), Some("my photos/"));
        assert_eq!(output.delimiter.as_deref(), Some("/"));
        assert_eq!(
            output.contents[0].key.as_deref(),
            Some("my photos/summer & sun.jpg")
        );
        assert_eq!(
            output.common_prefixes[0].prefix.as_deref(),
            Some("my photos/2024/")
        );
        assert_eq!(
            transport.last_request().uri,
            "http://localhost:4566/bucket?list-type=2&delimiter=%2F&encoding-type=url&prefix=my%20photos%2F"
        );
    }

    #[tokio::test]
    async fn test_should_keep_plus_signs_without_url_encoding() {
        let (client, transport) = s3_client();
        transport.respond(
            200,
            r"<ListBucketResult>
  <Contents><Key>c++/notes.txt</Key></Contents>
</ListBucketResult>",
        );

        let output = client
            .send(&ListObjectsV2Input {
                bucket: "bucket".into(),
                ..Default::default()
            })
            .await
            .expect("list_objects_v2");

        assert_eq!(output.contents[0].key.as_deref(), Some("c++/notes.txt"));
    }

    #[tokio::test]
    async fn test_should_list_versions_and_delete_markers() {
        let (client, transport) = s3_client();
        transport.respond(
            200,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<ListVersionsResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>bucket</Name>
  <Prefix>my</Prefix>
  <KeyMarker/>
  <VersionIdMarker/>
  <MaxKeys>5</MaxKeys>
  <IsTruncated>false</IsTruncated>
  <Version>
    <Key>my-image.jpg</Key>
    <VersionId>3/L4kqtJl40Nr8X8gdRQBpUMLUo</VersionId>
    <IsLatest>true</IsLatest>
    <LastModified>2009-10-12T17:50:30.000Z</LastModified>
    <ETag>"fba9dede5f27731c9771645a39863328"</ETag>
    <Size>434234</Size>
    <StorageClass>STANDARD</StorageClass>
    <Owner>
      <ID>75aa57f09aa0c8caeab4f8c24e99d10f8e7faeebf76c078efc7c6caea54ba06a</ID>
      <DisplayName>mtd@amazon.com</DisplayName>
    </Owner>
  </Version>
  <DeleteMarker>
    <Key>my-second-image.jpg</Key>
    <VersionId>03jpff543dhffds434rfdsFDN943fdsFkdmqnh892</VersionId>
    <IsLatest>true</IsLatest>
    <LastModified>2009-11-12T17:50:30.000Z</LastModified>
  </DeleteMarker>
  <Version>
    <Key>my-second-image.jpg</Key>
    <VersionId>QUpfdndhfd8438MNFDN93jdnJFkdmqnh893</VersionId>
    <IsLatest>false</IsLatest>
    <LastModified>2009-10-10T17:50:30.000Z</LastModified>
    <Size>166434</Size>
  </Version>
</ListVersionsResult>"#,
        );

        let output = client
            .send(&ListObjectVersionsInput {
                bucket: "bucket".into(),
                prefix: Some("my".into()),
                max_keys: Some(5),
                ..Default::default()
            })
            .await
            .expect("list_object_versions");

        assert_eq!(output.versions.len(), 2);
        assert_eq!(output.versions[0].is_latest, Some(true));
        assert_eq!(output.versions[0].size, Some(434_234));
        let owner = output.versions[0].owner.as_ref().expect("owner");
        assert_eq!(owner.display_name.as_deref(), Some("mtd@amazon.com"));
        assert_eq!(
            output.versions[1].version_id.as_deref(),
            Some("QUpfdndhfd8438MNFDN93jdnJFkdmqnh893")
        );
        assert_eq!(output.delete_markers.len(), 1);
        assert_eq!(
            output.delete_markers[0].key.as_deref(),
            Some("my-second-image.jpg")
        );
        assert_eq!(output.max_keys, Some(5));

        assert_eq!(
            transport.last_request().uri,
            "http://localhost:4566/bucket?versions&max-keys=5&prefix=my"
        );
    }

    #[tokio::test]
    async fn test_should_page_objects_with_next_marker() {
        let (client, transport) = s3_client();
        transport.respond(
            200,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>bucket</Name>
  <Prefix>photos/</Prefix>
  <NextMarker>photos/2006/February/</NextMarker>
  <MaxKeys>2</MaxKeys>
  <Delimiter>/</Delimiter>
  <IsTruncated>true</IsTruncated>
  <Contents><Key>photos/index.html</Key><Size>10</Size></Contents>
  <CommonPrefixes><Prefix>photos/2006/February/</Prefix></CommonPrefixes>
</ListBucketResult>"#,
        );
        transport.respond(
            200,
            r#"<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>bucket</Name>
  <Prefix>photos/</Prefix>
  <Marker>photos/2006/February/</Marker>
  <MaxKeys>2</MaxKeys>
  <Delimiter>/</Delimiter>
  <IsTruncated>false</IsTruncated>
  <Contents><Key>photos/zebra.jpg</Key><Size>20</Size></Contents>
</ListBucketResult>"#,
        );

        let first = client
            .send(&ListObjectsInput {
                bucket: "bucket".into(),
                prefix: Some("photos/".into()),
                delimiter: Some("/".into()),
                max_keys: Some(2),
                ..Default::default()
            })
            .await
            .expect("first page");
        let second = client
            .list_next_batch_of_objects(&first)
            .await
            .expect("second page");

        assert_eq!(
            transport.last_request().uri,
            "http://localhost:4566/bucket?delimiter=%2F&marker=photos%2F2006%2FFebruary%2F\
             &max-keys=2&prefix=photos%2F"
        );
        assert_eq!(second.contents.len(), 1);
        assert_eq!(second.contents[0].key.as_deref(), Some("photos/zebra.jpg"));
        assert_eq!(second.is_truncated, Some(false));

        let last = client
            .list_next_batch_of_objects(&second)
            .await
            .expect("end of listing");
        assert_eq!(transport.requests().len(), 2);
        assert_eq!(last.name.as_deref(), Some("bucket"));
        assert_eq!(last.prefix.as_deref(), Some("photos/"));
        assert_eq!(last.delimiter.as_deref(), Some("/"));
        assert_eq!(last.max_keys, Some(2));
        assert_eq!(last.marker, None);
        assert_eq!(last.is_truncated, Some(false));
        assert!(last.contents.is_empty());
        assert!(last.common_prefixes.is_empty());
    }

    #[tokio::test]
    async fn test_should_continue_after_last_key_without_next_marker() {
        let (client, transport) = s3_client();
        transport.respond(200, "<ListBucketResult><Name>bucket</Name></ListBucketResult>");

        let previous = ListObjectsOutput {
            name: Some("bucket".into()),
            max_keys: Some(2),
            is_truncated: Some(true),
            contents: vec![
                wirestack_s3_model::types::Object {
                    key: Some("a.txt".into()),
                    ..Default::default()
                },
                wirestack_s3_model::types::Object {
                    key: Some("b.txt".into()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        client
            .list_next_batch_of_objects(&previous)
            .await
            .expect("next page");

        assert_eq!(
            transport.last_request().uri,
            "http://localhost:4566/bucket?marker=b.txt&max-keys=2"
        );
    }

    #[tokio::test]
    async fn test_should_require_bucket_name_to_page() {
        let (client, transport) = s3_client();
        let err = client
            .list_next_batch_of_objects(&ListObjectsOutput {
                is_truncated: Some(true),
                ..Default::default()
            })
            .await
            .expect_err("no bucket");
        assert!(matches!(
            err,
            S3ClientError::Marshall(MarshallError::MissingParameter("Bucket"))
        ));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_should_page_versions_with_markers() {
        let (client, transport) = s3_client();
        transport.respond(
            200,
            r#"<ListVersionsResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>bucket</Name>
  <KeyMarker>key3</KeyMarker>
  <VersionIdMarker>t46ZenlYTZBnj</VersionIdMarker>
  <MaxKeys>1</MaxKeys>
  <IsTruncated>false</IsTruncated>
  <Version><Key>key3</Key><VersionId>null</VersionId><IsLatest>true</IsLatest></Version>
</ListVersionsResult>"#,
        );

        let previous = ListObjectVersionsOutput {
            name: Some("bucket".into()),
            max_keys: Some(1),
            is_truncated: Some(true),
            next_key_marker: Some("key3".into()),
            next_version_id_marker: Some("t46ZenlYTZBnj".into()),
            ..Default::default()
        };
        let next = client
            .list_next_batch_of_versions(&previous)
            .await
            .expect("next page");

        assert_eq!(
            transport.last_request().uri,
            "http://localhost:4566/bucket?versions&key-marker=key3&max-keys=1\
             &version-id-marker=t46ZenlYTZBnj"
        );
        assert_eq!(next.versions.len(), 1);
        assert_eq!(next.key_marker.as_deref(), Some("key3"));
    }

    #[tokio::test]
    async fn test_should_carry_version_markers_when_not_truncated() {
        let (client, transport) = s3_client();
        let previous = ListObjectVersionsOutput {
            name: Some("bucket".into()),
            prefix: Some("logs/".into()),
            max_keys: Some(100),
            is_truncated: Some(false),
            next_key_marker: Some("logs/9".into()),
            next_version_id_marker: Some("v9".into()),
            encoding_type: Some(EncodingType::Url),
            ..Default::default()
        };

        let empty = client
            .list_next_batch_of_versions(&previous)
            .await
            .expect("empty listing");

        assert!(transport.requests().is_empty());
        assert_eq!(empty.name.as_deref(), Some("bucket"));
        assert_eq!(empty.prefix.as_deref(), Some("logs/"));
        assert_eq!(empty.key_marker.as_deref(), Some("logs/9"));
        assert_eq!(empty.version_id_marker.as_deref(), Some("v9"));
        assert_eq!(empty.max_keys, Some(100));
        assert_eq!(empty.encoding_type, Some(EncodingType::Url));
        assert_eq!(empty.is_truncated, Some(false));
        assert!(empty.versions.is_empty());
        assert!(empty.delete_markers.is_empty());
    }
}
