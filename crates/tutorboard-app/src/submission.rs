//! The drawing handed to the chat after a successful commit.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use tutorboard_render::EncodedImage;

/// Message kind the chat uses for whiteboard drawings.
pub const WHITEBOARD_MESSAGE_TYPE: &str = "whiteboard";

/// Rendered image plus its caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub image: EncodedImage,
    /// Trimmed caption, empty when unset.
    pub caption: String,
}

impl Submission {
    /// `data:<mime>;base64,...` URL of the image.
    pub fn data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.image.mime_type(),
            STANDARD.encode(&self.image.bytes)
        )
    }

    /// Build the chat message payload.
    pub fn to_message(&self) -> WhiteboardMessage {
        WhiteboardMessage {
            kind: WHITEBOARD_MESSAGE_TYPE.to_string(),
            content: self.data_url(),
            caption: self.caption.clone(),
        }
    }

    /// Serialize the chat message payload to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_message())
    }
}

/// Payload the messaging layer stores and sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhiteboardMessage {
    #[serde(rename = "type")]
    pub kind: String,
    /// Image as a data URL.
    pub content: String,
    pub caption: String,
}
