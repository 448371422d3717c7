//! Application services - orchestrate use cases.
//!
//! One service per aggregate. Each service receives its gateways at
//! construction, fails fast when the target aggregate does not exist and
//! otherwise accumulates reference and field failures into one notification
//! before touching any store.

pub mod cast_member_service;
pub mod category_service;
pub mod genre_service;
mod media_attachment;
pub mod video_service;

pub use cast_member_service::{CastMemberService, CreateCastMember, UpdateCastMember};
pub use category_service::{CategoryService, CreateCategory, UpdateCategory};
pub use genre_service::{CreateGenre, GenreService, UpdateGenre};
pub use media_attachment::MediaUploads;
pub use video_service::{CreateVideo, UpdateMediaStatus, UpdateVideo, VideoService};
