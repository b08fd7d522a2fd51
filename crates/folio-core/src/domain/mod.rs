//! Domain entities - the core business objects.

mod history;
mod input;
mod post;

pub use history::{LinkSuggestion, RedirectRule, VersionRecord};
pub use input::{PostInput, RobotsInput, SeoInput};
pub use post::{
    FeaturedImage, OpenGraph, Post, PostFilter, PostStatus, Robots, RobotsFollow, RobotsIndex,
    SchemaType, SeoMeta, TocEntry,
};

#[cfg(test)]
pub(crate) use post::fixtures;
