//! Bucket CORS tests.

#[cfg(test)]
mod tests {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use http::Method;
    use md5::{Digest, Md5};
    use wirestack_s3_model::input::{DeleteBucketCorsInput, GetBucketCorsInput, PutBucketCorsInput};
    use wirestack_s3_model::types::{CorsConfiguration, CorsRule};

    use crate::s3_client;

    #[tokio::test]
    async fn test_should_put_cors_with_content_md5() {
        let (client, transport) = s3_client();
        transport.respond(200, "");

        client
            .send(&PutBucketCorsInput {
                bucket: "cors-bucket".into(),
                cors_configuration: CorsConfiguration {
                    cors_rules: vec![
                        CorsRule {
                            allowed_headers: vec!["*".into()],
                            allowed_methods: vec!["PUT".into(), "POST".into(), "DELETE".into()],
                            allowed_origins: vec!["http://www.example.com".into()],
                            expose_headers: vec!["x-amz-server-side-encryption".into()],
                            max_age_seconds: Some(3000),
                            ..Default::default()
                        },
                        CorsRule {
                            allowed_methods: vec!["GET".into()],
                            allowed_origins: vec!["*".into()],
                            ..Default::default()
                        },
                    ],
                },
                ..Default::default()
            })
            .await
            .expect("put_bucket_cors");

        let req = transport.last_request();
        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.uri, "http://localhost:4566/cors-bucket?cors");

        let expected_md5 = STANDARD.encode(Md5::digest(&req.body));
        assert_eq!(req.header("content-md5"), Some(expected_md5.as_str()));

        let body = req.body_text();
        assert!(
            body.contains(
                "<CORSRule><AllowedHeader>*</AllowedHeader>\
                 <AllowedMethod>PUT</AllowedMethod><AllowedMethod>POST</AllowedMethod>\
                 <AllowedMethod>DELETE</AllowedMethod>\
                 <AllowedOrigin>http://www.example.com</AllowedOrigin>\
                 <ExposeHeader>x-amz-server-side-encryption</ExposeHeader>\
                 <MaxAgeSeconds>3000</MaxAgeSeconds></CORSRule>"
            ),
            "{body}"
        );
        assert!(
            body.contains(
                "<CORSRule><AllowedMethod>GET</AllowedMethod>\
                 <AllowedOrigin>*</AllowedOrigin></CORSRule>"
            ),
            "{body}"
        );
    }

    #[tokio::test]
    async fn test_should_keep_caller_content_md5() {
        let (client, transport) = s3_client();
        transport.respond(200, "");

        client
            .send(&PutBucketCorsInput {
                bucket: "cors-bucket".into(),
                cors_configuration: CorsConfiguration {
                    cors_rules: vec![CorsRule {
                        allowed_methods: vec!["GET".into()],
                        allowed_origins: vec!["*".into()],
                        ..Default::default()
                    }],
                },
                content_md5: Some("precomputed==".into()),
                ..Default::default()
            })
            .await
            .expect("put_bucket_cors");

        assert_eq!(
            transport.last_request().header("content-md5"),
            Some("precomputed==")
        );
    }

    #[tokio::test]
    async fn test_should_read_cors_rules() {
        let (client, transport) = s3_client();
        transport.respond(
            200,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<CORSConfiguration xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <CORSRule>
    <ID>upload-rule</ID>
    <AllowedHeader>Authorization</AllowedHeader>
    <AllowedMethod>GET</AllowedMethod>
    <AllowedMethod>PUT</AllowedMethod>
    <AllowedOrigin>http://www.example.com</AllowedOrigin>
    <MaxAgeSeconds>3000</MaxAgeSeconds>
  </CORSRule>
  <CORSRule>
    <AllowedMethod>GET</AllowedMethod>
    <AllowedOrigin>*</AllowedOrigin>
  </CORSRule>
</CORSConfiguration>"#,
        );

        let output = client
            .send(&GetBucketCorsInput {
                bucket: "cors-bucket".into(),
                expected_bucket_owner: None,
            })
            .await
            .expect("get_bucket_cors");

        assert_eq!(output.cors_rules.len(), 2);
        let first = &output.cors_rules[0];
        assert_eq!(first.id.as_deref(), Some("upload-rule"));
        assert_eq!(first.allowed_headers, vec!["Authorization"]);
        assert_eq!(first.allowed_methods, vec!["GET", "PUT"]);
        assert_eq!(first.max_age_seconds, Some(3000));
        assert_eq!(output.cors_rules[1].allowed_origins, vec!["*"]);
        assert!(output.cors_rules[1].expose_headers.is_empty());
    }

    #[tokio::test]
    async fn test_should_delete_cors() {
        let (client, transport) = s3_client();
        transport.respond(204, "");

        client
            .send(&DeleteBucketCorsInput {
                bucket: "cors-bucket".into(),
                expected_bucket_owner: None,
            })
            .await
            .expect("delete_bucket_cors");

        let req = transport.last_request();
        assert_eq!(req.method, Method::DELETE);
        assert_eq!(req.uri, "http://localhost:4566/cors-bucket?cors");
        assert!(req.body.is_empty());
    }
}
