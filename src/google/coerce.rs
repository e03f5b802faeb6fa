//! serde glue used when a field mapping is coerced into one of the request
//! messages. Enum fields take either the wire number or the proto name.

use super::generated::google::cloud::texttospeech::v1beta1::{
    synthesis_input::InputSource, synthesize_speech_request::TimepointType, AudioEncoding,
    SsmlVoiceGender, SynthesisInput,
};
use serde::{de, ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum EnumValue {
    Number(i32),
    Name(String),
}

impl EnumValue {
    fn resolve<E: de::Error>(
        self,
        enum_name: &str,
        by_name: fn(&str) -> Option<i32>,
    ) -> Result<i32, E> {
        match self {
            EnumValue::Number(number) => Ok(number),
            EnumValue::Name(name) => by_name(&name)
                .ok_or_else(|| E::custom(format!("unknown {} value `{}`", enum_name, name))),
        }
    }
}

macro_rules! by_name {
    ($fn_name: ident, { $($name: literal => $variant: expr),+ $(,)? }) => {
        fn $fn_name(name: &str) -> Option<i32> {
            match name {
                $($name => Some($variant as i32),)+
                _ => None,
            }
        }
    };
}

by_name!(ssml_voice_gender_by_name, {
    "SSML_VOICE_GENDER_UNSPECIFIED" => SsmlVoiceGender::Unspecified,
    "MALE" => SsmlVoiceGender::Male,
    "FEMALE" => SsmlVoiceGender::Female,
    "NEUTRAL" => SsmlVoiceGender::Neutral,
});

by_name!(audio_encoding_by_name, {
    "AUDIO_ENCODING_UNSPECIFIED" => AudioEncoding::Unspecified,
    "LINEAR16" => AudioEncoding::Linear16,
    "MP3" => AudioEncoding::Mp3,
    "MP3_64_KBPS" => AudioEncoding::Mp364Kbps,
    "OGG_OPUS" => AudioEncoding::OggOpus,
    "MULAW" => AudioEncoding::Mulaw,
});

by_name!(timepoint_type_by_name, {
    "TIMEPOINT_TYPE_UNSPECIFIED" => TimepointType::Unspecified,
    "SSML_MARK" => TimepointType::SsmlMark,
});

pub(crate) fn ssml_voice_gender<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    EnumValue::deserialize(deserializer)?.resolve("SsmlVoiceGender", ssml_voice_gender_by_name)
}

pub(crate) fn audio_encoding<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    EnumValue::deserialize(deserializer)?.resolve("AudioEncoding", audio_encoding_by_name)
}

pub(crate) fn timepoint_types<'de, D>(deserializer: D) -> Result<Vec<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<EnumValue>::deserialize(deserializer)?
        .into_iter()
        .map(|value| value.resolve("TimepointType", timepoint_type_by_name))
        .collect()
}

// `input_source` is a oneof, so the mapping form flattens it the way the
// proto JSON mapping does: `{ "text": ... }` or `{ "ssml": ... }`.

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SynthesisInputFields {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    ssml: Option<String>,
}

impl<'de> Deserialize<'de> for SynthesisInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = SynthesisInputFields::deserialize(deserializer)?;
        let input_source = match (fields.text, fields.ssml) {
            (Some(_), Some(_)) => {
                return Err(de::Error::custom(
                    "only one of `text` or `ssml` may be set on SynthesisInput",
                ))
            }
            (Some(text), None) => Some(InputSource::Text(text)),
            (None, Some(ssml)) => Some(InputSource::Ssml(ssml)),
            (None, None) => None,
        };
        Ok(SynthesisInput { input_source })
    }
}

impl Serialize for SynthesisInput {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = if self.input_source.is_some() { 1 } else { 0 };
        let mut map = serializer.serialize_map(Some(len))?;
        match &self.input_source {
            Some(InputSource::Text(text)) => map.serialize_entry("text", text)?,
            Some(InputSource::Ssml(ssml)) => map.serialize_entry("ssml", ssml)?,
            None => {}
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::super::generated::google::cloud::texttospeech::v1beta1::*;
    use serde_json::json;

    #[test]
    fn enum_fields_accept_names_and_numbers() {
        let config: AudioConfig =
            serde_json::from_value(json!({ "audio_encoding": "OGG_OPUS" })).unwrap();
        assert_eq!(config.audio_encoding, AudioEncoding::OggOpus as i32);

        let voice: VoiceSelectionParams =
            serde_json::from_value(json!({ "ssml_gender": 2 })).unwrap();
        assert_eq!(voice.ssml_gender, SsmlVoiceGender::Female as i32);
    }

    #[test]
    fn unknown_enum_number_is_kept() {
        let config: AudioConfig =
            serde_json::from_value(json!({ "audio_encoding": 99 })).unwrap();
        assert_eq!(config.audio_encoding, 99);
        assert_eq!(AudioEncoding::from_i32(config.audio_encoding), None);
    }

    #[test]
    fn unknown_enum_name_is_rejected() {
        let result =
            serde_json::from_value::<AudioConfig>(json!({ "audio_encoding": "FLAC" }));
        assert!(result.is_err());
    }

    #[test]
    fn timepoint_list_is_coerced() {
        let request: SynthesizeSpeechRequest =
            serde_json::from_value(json!({ "enable_time_pointing": ["SSML_MARK", 0] })).unwrap();
        assert_eq!(
            request.enable_time_pointing,
            vec![synthesize_speech_request::TimepointType::SsmlMark as i32, 0]
        );
    }

    #[test]
    fn synthesis_input_oneof() {
        let input: SynthesisInput = serde_json::from_value(json!({ "ssml": "<speak/>" })).unwrap();
        assert_eq!(
            input.input_source,
            Some(synthesis_input::InputSource::Ssml("<speak/>".to_owned()))
        );

        let empty: SynthesisInput = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty, SynthesisInput::default());

        let both = serde_json::from_value::<SynthesisInput>(json!({ "text": "a", "ssml": "b" }));
        assert!(both.is_err());
    }

    #[test]
    fn synthesis_input_serializes_back() {
        let input = SynthesisInput {
            input_source: Some(synthesis_input::InputSource::Text("hi".to_owned())),
        };
        assert_eq!(serde_json::to_value(&input).unwrap(), json!({ "text": "hi" }));
    }
}
