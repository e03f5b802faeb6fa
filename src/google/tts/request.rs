use super::{
    AudioConfig, ListVoicesRequest, SynthesisInput, SynthesizeSpeechRequest, VoiceSelectionParams,
};
use crate::{Error, Result};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::{any::Any, collections::BTreeMap, fmt};

/// Everything a call site may pass as the request of an rpc.
///
/// `R` is the request message of that rpc.
#[derive(Debug)]
pub enum RequestArg<R> {
    /// No argument, all fields at their defaults.
    Empty,
    /// Field names mapped to values, coerced into `R`.
    Fields(Fields),
    /// Already built request, used as is.
    Typed(R),
    /// Something that is none of the above. Rejected on dispatch.
    Invalid(Value),
}

/// A request message that a [`Fields`] mapping can be coerced into.
pub trait MessageFields: DeserializeOwned + Default {
    /// Puts an already typed sub-message into the field `name`. Hands the
    /// value back when there is no such field or its type differs.
    fn set_message(
        &mut self,
        name: &str,
        value: Box<dyn Any + Send + Sync>,
    ) -> std::result::Result<(), Box<dyn Any + Send + Sync>>;
}

macro_rules! message_fields {
    ($request: ty { $($field: ident: $message: ty),* }) => {
        impl MessageFields for $request {
            #[allow(unused_variables, unused_mut)]
            fn set_message(
                &mut self,
                name: &str,
                mut value: Box<dyn Any + Send + Sync>,
            ) -> std::result::Result<(), Box<dyn Any + Send + Sync>> {
                $(
                    if name == stringify!($field) {
                        value = match value.downcast::<$message>() {
                            Ok(message) => {
                                self.$field = Some(*message);
                                return Ok(());
                            }
                            Err(value) => value,
                        };
                    }
                )*
                Err(value)
            }
        }

        impl From<$request> for RequestArg<$request> {
            fn from(request: $request) -> Self {
                RequestArg::Typed(request)
            }
        }
    };
}

message_fields!(ListVoicesRequest {});
message_fields!(SynthesizeSpeechRequest {
    input: SynthesisInput,
    voice: VoiceSelectionParams,
    audio_config: AudioConfig
});

impl<R: MessageFields> RequestArg<R> {
    /// Turns the argument into the request message.
    pub fn into_request(self) -> Result<R> {
        match self {
            RequestArg::Empty => Ok(R::default()),
            RequestArg::Typed(request) => Ok(request),
            RequestArg::Fields(fields) => fields.coerce(),
            RequestArg::Invalid(value) => Err(Error::ArgumentShape(format!(
                "expected a request message, a field mapping or nothing, got {}",
                kind(&value)
            ))),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}

impl<R> From<()> for RequestArg<R> {
    fn from(_: ()) -> Self {
        RequestArg::Empty
    }
}

impl<R> From<Value> for RequestArg<R> {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RequestArg::Empty,
            Value::Object(fields) => RequestArg::Fields(fields.into()),
            other => RequestArg::Invalid(other),
        }
    }
}

impl<R> From<Map<String, Value>> for RequestArg<R> {
    fn from(fields: Map<String, Value>) -> Self {
        RequestArg::Fields(fields.into())
    }
}

impl<R> From<Fields> for RequestArg<R> {
    fn from(fields: Fields) -> Self {
        RequestArg::Fields(fields)
    }
}

/// Builder for the mapping form of a request.
///
/// [`Fields::set`] takes plain values and nested mappings,
/// [`Fields::message`] takes sub-messages that are already typed and keeps
/// them as they are:
///
/// ```
/// use tomoru_tts_rs::google::tts::{Fields, VoiceSelectionParams};
///
/// let fields = Fields::new()
///     .set("input", serde_json::json!({ "text": "hello" }))
///     .message("voice", VoiceSelectionParams {
///         language_code: "en-US".to_owned(),
///         ..Default::default()
///     });
/// ```
#[derive(Default)]
pub struct Fields {
    values: Map<String, Value>,
    messages: BTreeMap<String, Box<dyn Any + Send + Sync>>,
    error: Option<String>,
}

impl Fields {
    pub fn new() -> Fields {
        Fields::default()
    }

    /// Sets `name` to the serialized `value`.
    ///
    /// A value serializing to `null`, such as `None`, leaves the field at its
    /// default. A value that fails to serialize makes the whole mapping
    /// invalid. Floats JSON can't hold (NaN, infinities) serialize to `null`,
    /// pass sub-messages carrying them through [`Fields::message`].
    pub fn set<V: Serialize>(mut self, name: &str, value: V) -> Fields {
        self.messages.remove(name);
        match serde_json::to_value(value) {
            Ok(Value::Null) => {
                self.values.remove(name);
            }
            Ok(value) => {
                self.values.insert(name.to_owned(), value);
            }
            Err(e) => {
                self.values.remove(name);
                if self.error.is_none() {
                    self.error = Some(format!("field `{}`: {}", name, e));
                }
            }
        }
        self
    }

    /// Sets the sub-message field `name` to `message` without converting it.
    pub fn message<M: Any + Send + Sync>(mut self, name: &str, message: M) -> Fields {
        self.values.remove(name);
        self.messages.insert(name.to_owned(), Box::new(message));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.messages.is_empty() && self.error.is_none()
    }

    fn coerce<R: MessageFields>(self) -> Result<R> {
        if let Some(error) = self.error {
            return Err(Error::ArgumentShape(error));
        }
        let mut request: R = serde_json::from_value(Value::Object(self.values))
            .map_err(|e| Error::ArgumentShape(e.to_string()))?;
        for (name, message) in self.messages {
            if request.set_message(&name, message).is_err() {
                return Err(Error::ArgumentShape(format!(
                    "`{}` is not a sub-message field of this type",
                    name
                )));
            }
        }
        Ok(request)
    }
}

impl From<Map<String, Value>> for Fields {
    fn from(values: Map<String, Value>) -> Self {
        Fields {
            values,
            ..Fields::default()
        }
    }
}

impl fmt::Debug for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fields")
            .field("values", &self.values)
            .field("messages", &self.messages.keys().collect::<Vec<_>>())
            .field("error", &self.error)
            .finish()
    }
}
