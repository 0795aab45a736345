pub mod domain;
pub use self::domain::{Story, StoryDraft, StoryId};

pub(crate) mod repository;

pub(crate) mod routes;
