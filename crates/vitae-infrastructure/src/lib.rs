pub mod config_service;
pub mod dto;
pub mod http_user_record_service;
pub mod image_editor;
pub mod logging;
pub mod paths;
pub mod session_provider;

pub use crate::config_service::ConfigService;
pub use crate::http_user_record_service::HttpUserRecordService;
pub use crate::image_editor::FileImageEditor;
pub use crate::session_provider::WatchSessionProvider;
