use chrono::{DateTime, Duration, Utc};

use crate::{
    clock::new_entity_id,
    content::community::SEED_POSTS,
    log_debug,
    models::Post,
};

const ENABLE_LOGS: bool = true;

/// Author label for posts written in this session.
pub const LOCAL_AUTHOR: &str = "You";

/// Posts ordered newest first.
#[derive(Debug, Clone, Default)]
pub struct CommunityFeed {
    posts: Vec<Post>,
}

impl CommunityFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo conversation, aged relative to `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let posts = SEED_POSTS
            .iter()
            .map(|seed| Post {
                id: seed.id.to_string(),
                author: seed.author.to_string(),
                text: seed.text.to_string(),
                likes: seed.likes,
                created_at: now - Duration::seconds(seed.age_secs),
            })
            .collect();
        Self { posts }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Puts a new post at the front. Blank text is ignored.
    pub fn post(&mut self, author: &str, text: &str, now: DateTime<Utc>) -> Option<&Post> {
        if text.trim().is_empty() {
            log_debug!("Ignoring blank post from {}", author);
            return None;
        }

        self.posts.insert(
            0,
            Post {
                id: new_entity_id(),
                author: author.to_string(),
                text: text.to_string(),
                likes: 0,
                created_at: now,
            },
        );
        self.posts.first()
    }

    /// Adds one like. There is no per-user limit. Returns the new count, or
    /// `None` for an unknown post.
    pub fn like(&mut self, post_id: &str) -> Option<u64> {
        let post = self.posts.iter_mut().find(|p| p.id == post_id)?;
        post.likes = post.likes.saturating_add(1);
        Some(post.likes)
    }
}

/// Coarse relative time: "just now", then minutes, then hours. No days.
pub fn time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - created_at).num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    format!("{}h ago", minutes / 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 8, 9, 30, 0).unwrap()
    }

    #[test]
    fn seeded_feed_matches_demo() {
        let feed = CommunityFeed::seeded(now());
        let authors: Vec<_> = feed.posts().iter().map(|p| p.author.as_str()).collect();
        assert_eq!(authors, vec!["Sarah G.", "Mike R.", "Emma L."]);
        assert_eq!(time_ago(feed.posts()[0].created_at, now()), "1h ago");
        assert_eq!(time_ago(feed.posts()[2].created_at, now()), "3h ago");
    }

    #[test]
    fn blank_posts_are_ignored() {
        let mut feed = CommunityFeed::seeded(now());
        assert!(feed.post(LOCAL_AUTHOR, "", now()).is_none());
        assert!(feed.post(LOCAL_AUTHOR, "   \n\t", now()).is_none());
        assert_eq!(feed.len(), 3);
    }

    #[test]
    fn new_post_goes_first() {
        let mut feed = CommunityFeed::seeded(now());
        let post = feed.post(LOCAL_AUTHOR, "Hello", now()).cloned().unwrap();
        assert_eq!(feed.len(), 4);
        assert_eq!(feed.posts()[0], post);
        assert_eq!(post.text, "Hello");
        assert_eq!(post.likes, 0);
        assert_eq!(post.author, "You");
        assert_eq!(post.created_at, now());
    }

    #[test]
    fn post_ids_are_unique() {
        let mut feed = CommunityFeed::new();
        feed.post(LOCAL_AUTHOR, "one", now());
        feed.post(LOCAL_AUTHOR, "two", now());
        assert_ne!(feed.posts()[0].id, feed.posts()[1].id);
        assert_eq!(feed.posts()[0].text, "two");
    }

    #[test]
    fn likes_accumulate_without_limit() {
        let mut feed = CommunityFeed::seeded(now());
        for n in 1..=25u64 {
            assert_eq!(feed.like("2"), Some(8 + n));
        }
        assert_eq!(feed.posts()[1].likes, 33);
        assert_eq!(feed.posts()[0].likes, 12);
    }

    #[test]
    fn liking_unknown_post_changes_nothing() {
        let mut feed = CommunityFeed::seeded(now());
        let before = feed.posts().to_vec();
        assert_eq!(feed.like("missing"), None);
        assert_eq!(feed.posts(), before.as_slice());
    }

    #[test]
    fn time_ago_buckets() {
        let at = now();
        assert_eq!(time_ago(at, at), "just now");
        assert_eq!(time_ago(at - Duration::seconds(59), at), "just now");
        assert_eq!(time_ago(at - Duration::seconds(60), at), "1m ago");
        assert_eq!(time_ago(at - Duration::minutes(59), at), "59m ago");
        assert_eq!(time_ago(at - Duration::minutes(60), at), "1h ago");
        assert_eq!(time_ago(at - Duration::hours(50), at), "50h ago");
    }

    #[test]
    fn future_timestamps_read_just_now() {
        let at = now();
        assert_eq!(time_ago(at + Duration::minutes(5), at), "just now");
    }
}
