pub mod commands;
pub mod feed;

pub use feed::{time_ago, CommunityFeed, LOCAL_AUTHOR};
