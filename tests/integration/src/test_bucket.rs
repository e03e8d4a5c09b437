//! Bucket lifecycle tests.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use http::Method;
    use wirestack_s3_model::enums::{GranteeType, Permission};
    use wirestack_s3_model::input::{
        CreateBucketInput, DeleteBucketInput, GetBucketAclInput, GetBucketLocationInput,
        HeadBucketInput, ListBucketsInput,
    };
    use wirestack_s3_model::types::CreateBucketConfiguration;

    use crate::{s3_client, virtual_host_client};

    #[tokio::test]
    async fn test_should_create_bucket_with_location_constraint() {
        let (client, transport) = s3_client();
        transport.respond_with(200, &[("Location", "/examplebucket")], "");

        let output = client
            .send(&CreateBucketInput {
                bucket: "examplebucket".into(),
                create_bucket_configuration: Some(CreateBucketConfiguration {
                    location_constraint: Some("eu-west-1".into()),
                }),
                object_lock_enabled_for_bucket: Some(true),
                ..Default::default()
            })
            .await
            .expect("create_bucket");
        assert_eq!(output.location.as_deref(), Some("/examplebucket"));

        let req = transport.last_request();
        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.uri, "http://localhost:4566/examplebucket");
        assert_eq!(req.header("x-amz-bucket-object-lock-enabled"), Some("true"));
        assert_eq!(req.header("content-type"), Some("application/xml"));
        let body = req.body_text();
        assert!(body.contains("<CreateBucketConfiguration"), "{body}");
        assert!(
            body.contains("<LocationConstraint>eu-west-1</LocationConstraint>"),
            "{body}"
        );
    }

    #[tokio::test]
    async fn test_should_create_bucket_without_body() {
        let (client, transport) = s3_client();
        transport.respond(200, "");

        client
            .send(&CreateBucketInput {
                bucket: "plain".into(),
                ..Default::default()
            })
            .await
            .expect("create_bucket");

        let req = transport.last_request();
        assert!(req.body.is_empty());
        assert_eq!(req.header("content-type"), None);
        assert_eq!(req.header("content-length"), Some("0"));
    }

    #[tokio::test]
    async fn test_should_list_buckets() {
        let (client, transport) = s3_client();
        transport.respond(
            200,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<ListAllMyBucketsResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Buckets>
    <Bucket>
      <CreationDate>2019-12-11T23:32:47+00:00</CreationDate>
      <Name>DOC-EXAMPLE-BUCKET</Name>
    </Bucket>
    <Bucket>
      <CreationDate>2019-11-10T23:32:13+00:00</CreationDate>
      <Name>DOC-EXAMPLE-BUCKET2</Name>
    </Bucket>
  </Buckets>
  <Owner>
    <DisplayName>Account+Name</DisplayName>
    <ID>AIDACKCEVSQ6C2EXAMPLE</ID>
  </Owner>
</ListAllMyBucketsResult>"#,
        );

        let output = client
            .send(&ListBucketsInput::default())
            .await
            .expect("list_buckets");

        let names: Vec<_> = output
            .buckets
            .iter()
            .filter_map(|b| b.name.as_deref())
            .collect();
        assert_eq!(names, vec!["DOC-EXAMPLE-BUCKET", "DOC-EXAMPLE-BUCKET2"]);
        assert_eq!(
            output.buckets[0].creation_date,
            Some(Utc.with_ymd_and_hms(2019, 12, 11, 23, 32, 47).unwrap())
        );
        let owner = output.owner.expect("owner");
        assert_eq!(owner.id.as_deref(), Some("AIDACKCEVSQ6C2EXAMPLE"));
        assert_eq!(owner.display_name.as_deref(), Some("Account+Name"));
        assert_eq!(transport.last_request().uri, "http://localhost:4566/");
    }

    #[tokio::test]
    async fn test_should_read_head_bucket_headers() {
        let (client, transport) = virtual_host_client();
        transport.respond_with(
            200,
            &[
                ("x-amz-bucket-region", "us-west-2"),
                ("x-amz-access-point-alias", "false"),
            ],
            "",
        );

        let output = client
            .send(&HeadBucketInput {
                bucket: "my-bucket".into(),
                expected_bucket_owner: Some("111122223333".into()),
            })
            .await
            .expect("head_bucket");
        assert_eq!(output.bucket_region.as_deref(), Some("us-west-2"));
        assert_eq!(output.access_point_alias, Some(false));

        let req = transport.last_request();
        assert_eq!(req.method, Method::HEAD);
        assert_eq!(req.uri, "https://my-bucket.s3.amazonaws.com/");
        assert_eq!(req.header("x-amz-expected-bucket-owner"), Some("111122223333"));
    }

    #[tokio::test]
    async fn test_should_treat_empty_location_as_us_east_1() {
        let (client, transport) = s3_client();
        transport.respond(
            200,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<LocationConstraint xmlns="http://s3.amazonaws.com/doc/2006-03-01/"/>"#,
        );
        transport.respond(
            200,
            r#"<LocationConstraint xmlns="http://s3.amazonaws.com/doc/2006-03-01/">eu-central-1</LocationConstraint>"#,
        );

        let input = GetBucketLocationInput {
            bucket: "b1".into(),
            expected_bucket_owner: None,
        };
        let first = client.send(&input).await.expect("get_bucket_location");
        let second = client.send(&input).await.expect("get_bucket_location");
        assert_eq!(first.location_constraint, None);
        assert_eq!(second.location_constraint.as_deref(), Some("eu-central-1"));
    }

    #[tokio::test]
    async fn test_should_read_bucket_acl_grantee_types() {
        let (client, transport) = s3_client();
        transport.respond(
            200,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<AccessControlPolicy xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Owner>
    <ID>75aa57f09aa0c8caeab4f8c24e99d10f8e7faeebf76c078efc7c6caea54ba06a</ID>
    <DisplayName>CustomersName@amazon.com</DisplayName>
  </Owner>
  <AccessControlList>
    <Grant>
      <Grantee xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:type="CanonicalUser">
        <ID>75aa57f09aa0c8caeab4f8c24e99d10f8e7faeebf76c078efc7c6caea54ba06a</ID>
        <DisplayName>CustomersName@amazon.com</DisplayName>
      </Grantee>
      <Permission>FULL_CONTROL</Permission>
    </Grant>
    <Grant>
      <Grantee xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:type="Group">
        <URI>http://acs.amazonaws.com/groups/global/AllUsers</URI>
      </Grantee>
      <Permission>READ</Permission>
    </Grant>
  </AccessControlList>
</AccessControlPolicy>"#,
        );

        let output = client
            .send(&GetBucketAclInput {
                bucket: "acl-bucket".into(),
                expected_bucket_owner: None,
            })
            .await
            .expect("get_bucket_acl");

        assert_eq!(output.grants.len(), 2);
        let owner_grant = output.grants[0].grantee.as_ref().expect("grantee");
        assert_eq!(owner_grant.grantee_type, Some(GranteeType::CanonicalUser));
        assert_eq!(output.grants[0].permission, Some(Permission::FullControl));
        let group = output.grants[1].grantee.as_ref().expect("grantee");
        assert_eq!(group.grantee_type, Some(GranteeType::Group));
        assert_eq!(
            group.uri.as_deref(),
            Some("http://acs.amazonaws.com/groups/global/AllUsers")
        );
        assert_eq!(output.grants[1].permission, Some(Permission::Read));
        assert_eq!(transport.last_request().uri, "http://localhost:4566/acl-bucket?acl");
    }

    #[tokio::test]
    async fn test_should_delete_bucket() {
        let (client, transport) = s3_client();
        transport.respond(204, "");

        client
            .send(&DeleteBucketInput {
                bucket: "gone".into(),
                expected_bucket_owner: None,
            })
            .await
            .expect("delete_bucket");

        let req = transport.last_request();
        assert_eq!(req.method, Method::DELETE);
        assert_eq!(req.uri, "http://localhost:4566/gone");
    }
}
