use serde::Serialize;

use crate::{
    community::{time_ago, LOCAL_AUTHOR},
    content::community::{Challenge, LeaderboardEntry, CHALLENGES, LEADERBOARD},
    lock,
    models::Post,
    SiteState,
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    #[serde(flatten)]
    pub post: Post,
    pub time_ago: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunitySection {
    pub posts: Vec<PostView>,
    pub challenges: &'static [Challenge],
    pub leaderboard: &'static [LeaderboardEntry],
}

fn post_views(state: &SiteState) -> Result<Vec<PostView>, String> {
    let now = state.clock.now();
    Ok(lock(&state.feed)?
        .posts()
        .iter()
        .map(|post| PostView {
            time_ago: time_ago(post.created_at, now),
            post: post.clone(),
        })
        .collect())
}

pub fn get_community_section(state: &SiteState) -> Result<CommunitySection, String> {
    Ok(CommunitySection {
        posts: post_views(state)?,
        challenges: CHALLENGES,
        leaderboard: LEADERBOARD,
    })
}

pub fn list_posts(state: &SiteState) -> Result<Vec<PostView>, String> {
    post_views(state)
}

/// Posts as the local user. `None` when the text is blank.
pub fn send_post(state: &SiteState, text: String) -> Result<Option<Post>, String> {
    let now = state.clock.now();
    Ok(lock(&state.feed)?.post(LOCAL_AUTHOR, &text, now).cloned())
}

/// New like count, or `None` if the post does not exist.
pub fn like_post(state: &SiteState, post_id: String) -> Result<Option<u64>, String> {
    Ok(lock(&state.feed)?.like(&post_id))
}
