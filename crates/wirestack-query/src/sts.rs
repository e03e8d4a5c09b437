//! STS credential-vending shapes (API version `2011-06-15`).

use chrono::{DateTime, Utc};
use serde::Serialize;
use wirestack_xml::stax_struct;

use crate::writer::{ListStyle, QueryMarshall, QueryRequest, QueryValue, QueryWriter};

/// STS API version.
pub const STS_VERSION: &str = "2011-06-15";

/// A managed policy ARN passed as a session policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyDescriptorType {
    /// Policy ARN.
    pub arn: Option<String>,
}

impl QueryValue for PolicyDescriptorType {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.string(&format!("{key}.arn"), self.arn.as_deref());
    }
}

/// A session tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    /// Tag key.
    pub key: String,
    /// Tag value.
    pub value: String,
}

impl Tag {
    /// Create a tag.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl QueryValue for Tag {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.string(&format!("{key}.Key"), Some(&self.key));
        writer.string(&format!("{key}.Value"), Some(&self.value));
    }
}

/// `AssumeRole` request.
#[derive(Debug, Clone, Default)]
pub struct AssumeRoleRequest {
    /// ARN of the role to assume.
    pub role_arn: Option<String>,
    /// Identifier for the assumed-role session.
    pub role_session_name: Option<String>,
    /// Managed session policies.
    pub policy_arns: Vec<PolicyDescriptorType>,
    /// Inline session policy JSON.
    pub policy: Option<String>,
    /// Session duration in seconds.
    pub duration_seconds: Option<i32>,
    /// Session tags.
    pub tags: Vec<Tag>,
    /// Tag keys that persist through role chaining.
    pub transitive_tag_keys: Vec<String>,
    /// External id required by the role's trust policy.
    pub external_id: Option<String>,
    /// MFA device serial number.
    pub serial_number: Option<String>,
    /// MFA token code.
    pub token_code: Option<String>,
    /// Source identity.
    pub source_identity: Option<String>,
}

impl QueryMarshall for AssumeRoleRequest {
    fn marshall(&self) -> QueryRequest {
        let mut w = QueryWriter::new("AssumeRole", STS_VERSION);
        w.string("RoleArn", self.role_arn.as_deref());
        w.string("RoleSessionName", self.role_session_name.as_deref());
        w.list("PolicyArns", ListStyle::MEMBER, &self.policy_arns);
        w.string("Policy", self.policy.as_deref());
        w.display("DurationSeconds", self.duration_seconds);
        w.list("Tags", ListStyle::MEMBER, &self.tags);
        w.list("TransitiveTagKeys", ListStyle::MEMBER, &self.transitive_tag_keys);
        w.string("ExternalId", self.external_id.as_deref());
        w.string("SerialNumber", self.serial_number.as_deref());
        w.string("TokenCode", self.token_code.as_deref());
        w.string("SourceIdentity", self.source_identity.as_deref());
        w.finish()
    }
}

/// `AssumeRoleWithSAML` request.
#[derive(Debug, Clone, Default)]
pub struct AssumeRoleWithSamlRequest {
    /// ARN of the role to assume.
    pub role_arn: Option<String>,
    /// ARN of the SAML provider.
    pub principal_arn: Option<String>,
    /// Base64-encoded SAML assertion.
    pub saml_assertion: Option<String>,
    /// Managed session policies.
    pub policy_arns: Vec<PolicyDescriptorType>,
    /// Inline session policy JSON.
    pub policy: Option<String>,
    /// Session duration in seconds.
    pub duration_seconds: Option<i32>,
}

impl QueryMarshall for AssumeRoleWithSamlRequest {
    fn marshall(&self) -> QueryRequest {
        let mut w = QueryWriter::new("AssumeRoleWithSAML", STS_VERSION);
        w.string("RoleArn", self.role_arn.as_deref());
        w.string("PrincipalArn", self.principal_arn.as_deref());
        w.string("SAMLAssertion", self.saml_assertion.as_deref());
        w.list("PolicyArns", ListStyle::MEMBER, &self.policy_arns);
        w.string("Policy", self.policy.as_deref());
        w.display("DurationSeconds", self.duration_seconds);
        w.finish()
    }
}

/// `GetSessionToken` request.
#[derive(Debug, Clone, Default)]
pub struct GetSessionTokenRequest {
    /// Session duration in seconds.
    pub duration_seconds: Option<i32>,
    /// MFA device serial number.
    pub serial_number: Option<String>,
    /// MFA token code.
    pub token_code: Option<String>,
}

impl QueryMarshall for GetSessionTokenRequest {
    fn marshall(&self) -> QueryRequest {
        let mut w = QueryWriter::new("GetSessionToken", STS_VERSION);
        w.display("DurationSeconds", self.duration_seconds);
        w.string("SerialNumber", self.serial_number.as_deref());
        w.string("TokenCode", self.token_code.as_deref());
        w.finish()
    }
}

/// Temporary security credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Access key id.
    pub access_key_id: Option<String>,
    /// Secret access key.
    pub secret_access_key: Option<String>,
    /// Session token.
    pub session_token: Option<String>,
    /// Expiration time.
    pub expiration: Option<DateTime<Utc>>,
}

stax_struct!(Credentials {
    "AccessKeyId" => opt access_key_id,
    "SecretAccessKey" => opt secret_access_key,
    "SessionToken" => opt session_token,
    "Expiration" => opt expiration,
});

/// Identity of an assumed-role session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssumedRoleUser {
    /// `ROLE_ID:SESSION_NAME`.
    pub assumed_role_id: Option<String>,
    /// ARN of the session.
    pub arn: Option<String>,
}

stax_struct!(AssumedRoleUser {
    "AssumedRoleId" => opt assumed_role_id,
    "Arn" => opt arn,
});

/// `AssumeRole` result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssumeRoleResult {
    /// Temporary credentials.
    pub credentials: Option<Credentials>,
    /// Assumed-role identity.
    pub assumed_role_user: Option<AssumedRoleUser>,
    /// Packed size of the session policies and tags, as a percentage.
    pub packed_policy_size: Option<i32>,
    /// Source identity.
    pub source_identity: Option<String>,
}

stax_struct!(AssumeRoleResult {
    "Credentials" => opt credentials,
    "AssumedRoleUser" => opt assumed_role_user,
    "PackedPolicySize" => opt packed_policy_size,
    "SourceIdentity" => opt source_identity,
});

/// `AssumeRoleWithSAML` result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssumeRoleWithSamlResult {
    /// Temporary credentials.
    pub credentials: Option<Credentials>,
    /// Assumed-role identity.
    pub assumed_role_user: Option<AssumedRoleUser>,
    /// Packed size of the session policies, as a percentage.
    pub packed_policy_size: Option<i32>,
    /// `NameID` of the assertion.
    pub subject: Option<String>,
    /// Format of the `NameID`.
    pub subject_type: Option<String>,
    /// Issuer of the assertion.
    pub issuer: Option<String>,
    /// `Recipient` of the assertion's subject confirmation.
    pub audience: Option<String>,
    /// Hash identifying the user.
    pub name_qualifier: Option<String>,
    /// Source identity.
    pub source_identity: Option<String>,
}

stax_struct!(AssumeRoleWithSamlResult {
    "Credentials" => opt credentials,
    "AssumedRoleUser" => opt assumed_role_user,
    "PackedPolicySize" => opt packed_policy_size,
    "Subject" => opt subject,
    "SubjectType" => opt subject_type,
    "Issuer" => opt issuer,
    "Audience" => opt audience,
    "NameQualifier" => opt name_qualifier,
    "SourceIdentity" => opt source_identity,
});

/// `GetSessionToken` result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetSessionTokenResult {
    /// Temporary credentials.
    pub credentials: Option<Credentials>,
}

stax_struct!(GetSessionTokenResult {
    "Credentials" => opt credentials,
});
