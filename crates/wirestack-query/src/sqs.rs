//! SQS queue-attribute and batch-send shapes (API version `2012-11-05`).
//!
//! SQS flattens its lists and maps: `AttributeName.1`,
//! `Attribute.1.Name`/`Attribute.1.Value`, `SendMessageBatchRequestEntry.1.Id`.

use std::collections::HashMap;

use bytes::Bytes;
use serde::Serialize;
use wirestack_xml::unmarshall::read_struct;
use wirestack_xml::{StaxUnmarshall, StaxUnmarshallerContext, XmlError, stax_struct};

use crate::writer::{ListStyle, MapStyle, QueryMarshall, QueryRequest, QueryValue, QueryWriter};

/// SQS API version.
pub const SQS_VERSION: &str = "2012-11-05";

/// `GetQueueAttributes` request.
#[derive(Debug, Clone, Default)]
pub struct GetQueueAttributesRequest {
    /// Queue URL.
    pub queue_url: Option<String>,
    /// Attribute names to return, or `All`.
    pub attribute_names: Vec<String>,
}

impl QueryMarshall for GetQueueAttributesRequest {
    fn marshall(&self) -> QueryRequest {
        let mut w = QueryWriter::new("GetQueueAttributes", SQS_VERSION);
        w.string("QueueUrl", self.queue_url.as_deref());
        w.list("AttributeName", ListStyle::Flattened, &self.attribute_names);
        w.finish()
    }
}

/// `SetQueueAttributes` request.
#[derive(Debug, Clone, Default)]
pub struct SetQueueAttributesRequest {
    /// Queue URL.
    pub queue_url: Option<String>,
    /// Attributes to set.
    pub attributes: HashMap<String, String>,
}

impl QueryMarshall for SetQueueAttributesRequest {
    fn marshall(&self) -> QueryRequest {
        let mut w = QueryWriter::new("SetQueueAttributes", SQS_VERSION);
        w.string("QueueUrl", self.queue_url.as_deref());
        w.map(
            "Attribute",
            MapStyle::FLATTENED_NAME_VALUE,
            &self.attributes,
        );
        w.finish()
    }
}

/// A typed message attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageAttributeValue {
    /// `String` or `Number` payload.
    pub string_value: Option<String>,
    /// `Binary` payload, sent base64-encoded.
    pub binary_value: Option<Bytes>,
    /// Reserved list payload.
    pub string_list_values: Vec<String>,
    /// Reserved list payload.
    pub binary_list_values: Vec<Bytes>,
    /// `String`, `Number`, `Binary` or a custom `Type.Label`.
    pub data_type: Option<String>,
}

impl MessageAttributeValue {
    /// A `String` attribute.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            string_value: Some(value.into()),
            data_type: Some("String".to_owned()),
            ..Self::default()
        }
    }

    /// A `Binary` attribute.
    #[must_use]
    pub fn binary(value: impl Into<Bytes>) -> Self {
        Self {
            binary_value: Some(value.into()),
            data_type: Some("Binary".to_owned()),
            ..Self::default()
        }
    }
}

impl QueryValue for MessageAttributeValue {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.string(&format!("{key}.StringValue"), self.string_value.as_deref());
        writer.value(&format!("{key}.BinaryValue"), self.binary_value.as_ref());
        writer.list(
            &format!("{key}.StringListValue"),
            ListStyle::Flattened,
            &self.string_list_values,
        );
        writer.list(
            &format!("{key}.BinaryListValue"),
            ListStyle::Flattened,
            &self.binary_list_values,
        );
        writer.string(&format!("{key}.DataType"), self.data_type.as_deref());
    }
}

/// One message of a `SendMessageBatch` call.
#[derive(Debug, Clone, Default)]
pub struct SendMessageBatchRequestEntry {
    /// Batch-unique entry id.
    pub id: String,
    /// Message body.
    pub message_body: String,
    /// Delivery delay in seconds.
    pub delay_seconds: Option<i32>,
    /// Message attributes.
    pub message_attributes: HashMap<String, MessageAttributeValue>,
    /// FIFO deduplication id.
    pub message_deduplication_id: Option<String>,
    /// FIFO group id.
    pub message_group_id: Option<String>,
}

impl QueryValue for SendMessageBatchRequestEntry {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.string(&format!("{key}.Id"), Some(&self.id));
        writer.string(&format!("{key}.MessageBody"), Some(&self.message_body));
        writer.display(&format!("{key}.DelaySeconds"), self.delay_seconds);
        writer.map(
            &format!("{key}.MessageAttribute"),
            MapStyle::FLATTENED_NAME_VALUE,
            &self.message_attributes,
        );
        writer.string(
            &format!("{key}.MessageDeduplicationId"),
            self.message_deduplication_id.as_deref(),
        );
        writer.string(
            &format!("{key}.MessageGroupId"),
            self.message_group_id.as_deref(),
        );
    }
}

/// `SendMessageBatch` request.
#[derive(Debug, Clone, Default)]
pub struct SendMessageBatchRequest {
    /// Queue URL.
    pub queue_url: Option<String>,
    /// Messages to send.
    pub entries: Vec<SendMessageBatchRequestEntry>,
}

impl QueryMarshall for SendMessageBatchRequest {
    fn marshall(&self) -> QueryRequest {
        let mut w = QueryWriter::new("SendMessageBatch", SQS_VERSION);
        w.string("QueueUrl", self.queue_url.as_deref());
        w.list(
            "SendMessageBatchRequestEntry",
            ListStyle::Flattened,
            &self.entries,
        );
        w.finish()
    }
}

/// `GetQueueAttributes` result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetQueueAttributesResult {
    /// Attribute values by name.
    pub attributes: HashMap<String, String>,
}

#[derive(Debug, Default)]
struct AttributeEntry {
    name: Option<String>,
    value: Option<String>,
}

stax_struct!(AttributeEntry {
    "Name" => opt name,
    "Value" => opt value,
});

impl StaxUnmarshall for GetQueueAttributesResult {
    fn unmarshall(ctx: &mut StaxUnmarshallerContext<'_>) -> Result<Self, XmlError> {
        read_struct(ctx, |result: &mut Self, ctx, depth| {
            if ctx.test_expression("Attribute", depth) {
                let entry = AttributeEntry::unmarshall(ctx)?;
                if let Some(name) = entry.name {
                    result
                        .attributes
                        .insert(name, entry.value.unwrap_or_default());
                }
                return Ok(true);
            }
            Ok(false)
        })
    }
}

/// `SetQueueAttributes` result; the response carries only metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetQueueAttributesResult {}

impl StaxUnmarshall for SetQueueAttributesResult {
    fn unmarshall(ctx: &mut StaxUnmarshallerContext<'_>) -> Result<Self, XmlError> {
        read_struct(ctx, |_: &mut Self, _, _| Ok(false))
    }
}

/// A message accepted by `SendMessageBatch`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SendMessageBatchResultEntry {
    /// Entry id from the request.
    pub id: Option<String>,
    /// Assigned message id.
    pub message_id: Option<String>,
    /// MD5 of the message body.
    pub md5_of_message_body: Option<String>,
    /// MD5 of the message attributes.
    pub md5_of_message_attributes: Option<String>,
    /// MD5 of the system attributes.
    pub md5_of_message_system_attributes: Option<String>,
    /// FIFO sequence number.
    pub sequence_number: Option<String>,
}

stax_struct!(SendMessageBatchResultEntry {
    "Id" => opt id,
    "MessageId" => opt message_id,
    "MD5OfMessageBody" => opt md5_of_message_body,
    "MD5OfMessageAttributes" => opt md5_of_message_attributes,
    "MD5OfMessageSystemAttributes" => opt md5_of_message_system_attributes,
    "SequenceNumber" => opt sequence_number,
});

/// A message rejected by `SendMessageBatch`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchResultErrorEntry {
    /// Entry id from the request.
    pub id: Option<String>,
    /// Whether the caller is at fault.
    pub sender_fault: Option<bool>,
    /// Error code.
    pub code: Option<String>,
    /// Error message.
    pub message: Option<String>,
}

stax_struct!(BatchResultErrorEntry {
    "Id" => opt id,
    "SenderFault" => opt sender_fault,
    "Code" => opt code,
    "Message" => opt message,
});

/// `SendMessageBatch` result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SendMessageBatchResult {
    /// Accepted messages.
    pub successful: Vec<SendMessageBatchResultEntry>,
    /// Rejected messages.
    pub failed: Vec<BatchResultErrorEntry>,
}

stax_struct!(SendMessageBatchResult {
    "SendMessageBatchResultEntry" => list successful,
    "BatchResultErrorEntry" => list failed,
});
