//! Text Grabber Common Library
//!
//! CLIとWeb(WASM)で共有されるウィジェットの状態機械と型

pub mod config;
pub mod error;
pub mod notification;
pub mod parser;
pub mod preview;
pub mod types;
pub mod validation;
pub mod widget;

pub use config::{EndpointConfig, BASE_URL_ENV};
pub use error::{Error, Result};
pub use notification::{Notification, NotificationLevel};
pub use parser::{parse_extract_response, ExtractError};
pub use preview::{NoPreview, PreviewStore};
pub use types::{
    CandidateFile, ExtractedNotes, ExtractionResult, SelectedImage, NO_SUMMARY_PLACEHOLDER,
    NO_TEXT_PLACEHOLDER,
};
pub use validation::{ImageRules, RejectReason, MAX_IMAGE_SIZE};
pub use widget::{ExtractTicket, UploadWidget, WidgetState};
