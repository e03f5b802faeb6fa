// Messages of `google/cloud/texttospeech/v1beta1/cloud_tts.proto`, package
// `google.cloud.texttospeech.v1beta1`, as prost-build 0.7 emits them.
//
// The serde derives and `#[serde(..)]` attributes are not part of the prost
// output. They go through `prost_build::Config::type_attribute` and
// `field_attribute` on `ListVoicesRequest`, `SynthesizeSpeechRequest`,
// `VoiceSelectionParams` and `AudioConfig`, and have to be added back if this
// file is regenerated. `SynthesisInput` gets its serde impls from `coerce.rs`.

pub mod google {
    pub mod cloud {
        pub mod texttospeech {
            pub mod v1beta1 {
                /// The top-level message sent by the client for the `ListVoices` method.
                #[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
                #[serde(default, deny_unknown_fields)]
                pub struct ListVoicesRequest {
                    /// Optional. Recommended.
                    /// \[BCP-47\](<https://www.rfc-editor.org/rfc/bcp/bcp47.txt>) language tag. If
                    /// specified, the ListVoices call will only return voices that can be used to
                    /// synthesize this language_code. E.g. when specifying "en-NZ", you will get
                    /// supported "en-\*" voices; when specifying "no", you will get supported
                    /// "no-\*" (Norwegian) and "nb-\*" (Norwegian Bokmal) voices; specifying "zh"
                    /// will also get supported "cmn-\*" voices; specifying "zh-hk" will also get
                    /// supported "yue-\*" voices.
                    #[prost(string, tag = "1")]
                    pub language_code: ::std::string::String,
                }
                /// The message returned to the client by the `ListVoices` method.
                #[derive(Clone, PartialEq, ::prost::Message)]
                pub struct ListVoicesResponse {
                    /// The list of voices.
                    #[prost(message, repeated, tag = "1")]
                    pub voices: ::std::vec::Vec<Voice>,
                }
                /// Description of a voice supported by the TTS service.
                #[derive(Clone, PartialEq, ::prost::Message)]
                pub struct Voice {
                    /// The languages that this voice supports, expressed as
                    /// \[BCP-47\](<https://www.rfc-editor.org/rfc/bcp/bcp47.txt>) language tags (e.g.
                    /// "en-US", "es-419", "cmn-tw").
                    #[prost(string, repeated, tag = "1")]
                    pub language_codes: ::std::vec::Vec<::std::string::String>,
                    /// The name of this voice.  Each distinct voice has a unique name.
                    #[prost(string, tag = "2")]
                    pub name: ::std::string::String,
                    /// The gender of this voice.
                    #[prost(enumeration = "SsmlVoiceGender", tag = "3")]
                    pub ssml_gender: i32,
                    /// The natural sample rate (in hertz) for this voice.
                    #[prost(int32, tag = "4")]
                    pub natural_sample_rate_hertz: i32,
                }
                /// The top-level message sent by the client for the `SynthesizeSpeech` method.
                #[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
                #[serde(default, deny_unknown_fields)]
                pub struct SynthesizeSpeechRequest {
                    /// Required. The Synthesizer requires either plain text or SSML as input.
                    #[prost(message, optional, tag = "1")]
                    #[serde(skip_serializing_if = "Option::is_none")]
                    pub input: ::core::option::Option<SynthesisInput>,
                    /// Required. The desired voice of the synthesized audio.
                    #[prost(message, optional, tag = "2")]
                    #[serde(skip_serializing_if = "Option::is_none")]
                    pub voice: ::core::option::Option<VoiceSelectionParams>,
                    /// Required. The configuration of the synthesized audio.
                    #[prost(message, optional, tag = "3")]
                    #[serde(skip_serializing_if = "Option::is_none")]
                    pub audio_config: ::core::option::Option<AudioConfig>,
                    /// Whether and what timepoints should be returned in the response.
                    #[prost(
                        enumeration = "synthesize_speech_request::TimepointType",
                        repeated,
                        tag = "4"
                    )]
                    #[serde(deserialize_with = "crate::google::coerce::timepoint_types")]
                    pub enable_time_pointing: ::std::vec::Vec<i32>,
                }
                /// Nested message and enum types in `SynthesizeSpeechRequest`.
                pub mod synthesize_speech_request {
                    /// The type of timepoint information that is returned in the response.
                    #[derive(
                        Clone,
                        Copy,
                        Debug,
                        PartialEq,
                        Eq,
                        Hash,
                        PartialOrd,
                        Ord,
                        ::prost::Enumeration,
                    )]
                    #[repr(i32)]
                    pub enum TimepointType {
                        /// Not specified. No timepoint information will be returned.
                        Unspecified = 0,
                        /// Timepoint information of `<mark>` tags in SSML input will be returned.
                        SsmlMark = 1,
                    }
                }
                /// Contains text input to be synthesized. Either `text` or `ssml` must be
                /// supplied. Supplying both or neither returns
                /// \[google.rpc.Code.INVALID_ARGUMENT\]\[\]. The input size is limited to 5000
                /// characters.
                #[derive(Clone, PartialEq, ::prost::Message)]
                pub struct SynthesisInput {
                    /// The input source, which is either plain text or SSML.
                    #[prost(oneof = "synthesis_input::InputSource", tags = "1, 2")]
                    pub input_source: ::core::option::Option<synthesis_input::InputSource>,
                }
                /// Nested message and enum types in `SynthesisInput`.
                pub mod synthesis_input {
                    /// The input source, which is either plain text or SSML.
                    #[derive(Clone, PartialEq, ::prost::Oneof)]
                    pub enum InputSource {
                        /// The raw text to be synthesized.
                        #[prost(string, tag = "1")]
                        Text(::std::string::String),
                        /// The SSML document to be synthesized. The SSML document must be valid
                        /// and well-formed. Otherwise the RPC will fail and return
                        /// \[google.rpc.Code.INVALID_ARGUMENT\]\[\].
                        #[prost(string, tag = "2")]
                        Ssml(::std::string::String),
                    }
                }
                /// Description of which voice to use for a synthesis request.
                #[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
                #[serde(default, deny_unknown_fields)]
                pub struct VoiceSelectionParams {
                    /// Required. The language (and potentially also the region) of the voice
                    /// expressed as a \[BCP-47\](<https://www.rfc-editor.org/rfc/bcp/bcp47.txt>)
                    /// language tag, e.g. "en-US".
                    #[prost(string, tag = "1")]
                    pub language_code: ::std::string::String,
                    /// The name of the voice. If not set, the service will choose a
                    /// voice based on the other parameters such as language_code and gender.
                    #[prost(string, tag = "2")]
                    pub name: ::std::string::String,
                    /// The preferred gender of the voice. If not set, the service will
                    /// choose a voice based on the other parameters such as language_code and
                    /// name.
                    #[prost(enumeration = "SsmlVoiceGender", tag = "3")]
                    #[serde(deserialize_with = "crate::google::coerce::ssml_voice_gender")]
                    pub ssml_gender: i32,
                }
                /// Description of audio data to be synthesized.
                #[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
                #[serde(default, deny_unknown_fields)]
                pub struct AudioConfig {
                    /// Required. The format of the audio byte stream.
                    #[prost(enumeration = "AudioEncoding", tag = "1")]
                    #[serde(deserialize_with = "crate::google::coerce::audio_encoding")]
                    pub audio_encoding: i32,
                    /// Optional. Input only. Speaking rate/speed, in the range [0.25, 4.0]. 1.0 is
                    /// the normal native speed supported by the specific voice.
                    #[prost(double, tag = "2")]
                    pub speaking_rate: f64,
                    /// Optional. Input only. Speaking pitch, in the range [-20.0, 20.0]. 20 means
                    /// increase 20 semitones from the original pitch. -20 means decrease 20
                    /// semitones from the original pitch.
                    #[prost(double, tag = "3")]
                    pub pitch: f64,
                    /// Optional. Input only. Volume gain (in dB) of the normal native volume
                    /// supported by the specific voice, in the range [-96.0, 16.0].
                    #[prost(double, tag = "4")]
                    pub volume_gain_db: f64,
                    /// Optional. The synthesis sample rate (in hertz) for this audio.
                    #[prost(int32, tag = "5")]
                    pub sample_rate_hertz: i32,
                    /// Optional. Input only. An identifier which selects 'audio effects' profiles
                    /// that are applied on (post synthesized) text to speech. Effects are applied
                    /// on top of each other in the order they are given.
                    #[prost(string, repeated, tag = "6")]
                    pub effects_profile_id: ::std::vec::Vec<::std::string::String>,
                }
                /// The message returned to the client by the `SynthesizeSpeech` method.
                #[derive(Clone, PartialEq, ::prost::Message)]
                pub struct SynthesizeSpeechResponse {
                    /// The audio data bytes encoded as specified in the request, including the
                    /// header for encodings that are wrapped in containers (e.g. MP3, OGG_OPUS).
                    /// For LINEAR16 audio, we include the WAV header.
                    #[prost(bytes = "vec", tag = "1")]
                    pub audio_content: ::std::vec::Vec<u8>,
                    /// A link between a position in the original request input and a
                    /// corresponding time in the output audio. It's only supported via `<mark>`
                    /// of SSML input.
                    #[prost(message, repeated, tag = "2")]
                    pub timepoints: ::std::vec::Vec<Timepoint>,
                    /// The audio metadata of `audio_content`.
                    #[prost(message, optional, tag = "4")]
                    pub audio_config: ::core::option::Option<AudioConfig>,
                }
                /// This contains a mapping between a certain point in the input text and a
                /// corresponding time in the output audio.
                #[derive(Clone, PartialEq, ::prost::Message)]
                pub struct Timepoint {
                    /// Timepoint name as received from the client within `<mark>` tag.
                    #[prost(string, tag = "4")]
                    pub mark_name: ::std::string::String,
                    /// Time offset in seconds from the start of the synthesized audio.
                    #[prost(double, tag = "3")]
                    pub time_seconds: f64,
                }
                /// Gender of the voice as described in
                /// [SSML voice element](<https://www.w3.org/TR/speech-synthesis11/#edef_voice>).
                #[derive(
                    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
                )]
                #[repr(i32)]
                pub enum SsmlVoiceGender {
                    /// An unspecified gender.
                    Unspecified = 0,
                    /// A male voice.
                    Male = 1,
                    /// A female voice.
                    Female = 2,
                    /// A gender-neutral voice.
                    Neutral = 3,
                }
                /// Configuration to set up audio encoder. The encoding determines the output
                /// audio format that we'd like.
                #[derive(
                    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
                )]
                #[repr(i32)]
                pub enum AudioEncoding {
                    /// Not specified. Will return result \[google.rpc.Code.INVALID_ARGUMENT\]\[google.rpc.Code.INVALID_ARGUMENT\].
                    Unspecified = 0,
                    /// Uncompressed 16-bit signed little-endian samples (Linear PCM).
                    /// Audio content returned as LINEAR16 also contains a WAV header.
                    Linear16 = 1,
                    /// MP3 audio at 32kbps.
                    Mp3 = 2,
                    /// MP3 at 64kbps.
                    Mp364Kbps = 4,
                    /// Opus encoded audio wrapped in an ogg container. The result will be a
                    /// file which can be played natively on Android, and in browsers (at least
                    /// Chrome and Firefox). The quality of the encoding is considerably higher
                    /// than MP3 while using approximately the same bitrate.
                    OggOpus = 3,
                    /// 8-bit samples that compand 14-bit audio samples using G.711 PCMU/mu-law.
                    /// Audio content returned as MULAW also contains a WAV header.
                    Mulaw = 5,
                }
            }
        }
    }
}
