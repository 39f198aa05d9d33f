use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub participants: u32,
    pub points: u32,
    pub icon: &'static str,
}

pub const CHALLENGES: &[Challenge] = &[
    Challenge {
        id: "1",
        title: "Zero-Waste Week",
        description: "Eliminate single-use plastics for 7 days",
        participants: 1247,
        points: 500,
        icon: "♻️",
    },
    Challenge {
        id: "2",
        title: "Digital Detox Weekend",
        description: "Reduce screen time by 50% this weekend",
        participants: 892,
        points: 300,
        icon: "📱",
    },
    Challenge {
        id: "3",
        title: "Meditation Marathon",
        description: "Complete 7 days of daily meditation",
        participants: 1534,
        points: 400,
        icon: "🧘",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: &'static str,
    pub points: u32,
    pub badge: &'static str,
}

/// Ranked best first.
pub const LEADERBOARD: &[LeaderboardEntry] = &[
    LeaderboardEntry { rank: 1, name: "Alex Chen", points: 2450, badge: "🏆" },
    LeaderboardEntry { rank: 2, name: "Jordan Smith", points: 2280, badge: "🥈" },
    LeaderboardEntry { rank: 3, name: "Taylor Brown", points: 2100, badge: "🥉" },
    LeaderboardEntry { rank: 4, name: "Casey Wilson", points: 1950, badge: "⭐" },
    LeaderboardEntry { rank: 5, name: "Riley Davis", points: 1820, badge: "⭐" },
];

/// Demo post shown in the feed before anyone writes anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPost {
    pub id: &'static str,
    pub author: &'static str,
    pub text: &'static str,
    pub likes: u64,
    /// How long before "now" the post was written.
    pub age_secs: i64,
}

/// Newest first, matching feed order.
pub const SEED_POSTS: &[SeedPost] = &[
    SeedPost {
        id: "1",
        author: "Sarah G.",
        text: "Just completed my first zero-waste week! Feeling amazing! 🌱",
        likes: 12,
        age_secs: 3_600,
    },
    SeedPost {
        id: "2",
        author: "Mike R.",
        text: "Does anyone have tips for composting in a small apartment?",
        likes: 8,
        age_secs: 7_200,
    },
    SeedPost {
        id: "3",
        author: "Emma L.",
        text: "Love the productivity tracker! Hit all my goals this week 🎯",
        likes: 15,
        age_secs: 10_800,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaderboard_is_ranked() {
        for pair in LEADERBOARD.windows(2) {
            assert_eq!(pair[0].rank + 1, pair[1].rank);
            assert!(pair[0].points > pair[1].points);
        }
    }

    #[test]
    fn seed_posts_are_newest_first() {
        assert!(SEED_POSTS.windows(2).all(|p| p[0].age_secs < p[1].age_secs));
    }
}
