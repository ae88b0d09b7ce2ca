//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CommentRepository, ContentRepository, PageQuery, ReactionRepository, RepoResult,
};
