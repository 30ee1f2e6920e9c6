//! Data transfer objects for the backend wire format.

pub mod user_record;

pub use user_record::{
    AvatarDto, CarreiraDto, EditDraftDto, ErrorBodyDto, LinkDto, PublicacaoDto, UserRecordDto,
};
