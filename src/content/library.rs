//! Blog previews and the external resource directory.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "10 Simple Steps to a Zero-Waste Kitchen",
        excerpt: "Discover practical ways to eliminate waste in your kitchen and save money while helping the planet.",
        author: "Emma Green",
        date: "Nov 5, 2025",
        category: "Sustainable Living",
        read_time: "5 min read",
    },
    BlogPost {
        id: 2,
        title: "Mindfulness Practices for Daily Stress Relief",
        excerpt: "Learn how to incorporate mindfulness into your daily routine to reduce stress and improve mental clarity.",
        author: "Dr. Sarah Martinez",
        date: "Nov 3, 2025",
        category: "Mental Health",
        read_time: "7 min read",
    },
    BlogPost {
        id: 3,
        title: "The Pomodoro Technique: Boost Your Productivity",
        excerpt: "Master this time management method to enhance focus and accomplish more in less time.",
        author: "Mike Chen",
        date: "Nov 1, 2025",
        category: "Productivity",
        read_time: "6 min read",
    },
    BlogPost {
        id: 4,
        title: "Sustainable Fashion: Building an Eco-Friendly Wardrobe",
        excerpt: "Tips for creating a sustainable wardrobe that looks great and minimizes environmental impact.",
        author: "Lisa Taylor",
        date: "Oct 28, 2025",
        category: "Sustainable Living",
        read_time: "8 min read",
    },
    BlogPost {
        id: 5,
        title: "Understanding Anxiety: A Complete Guide",
        excerpt: "Comprehensive information about anxiety disorders, symptoms, and evidence-based treatment options.",
        author: "Dr. James Wilson",
        date: "Oct 25, 2025",
        category: "Mental Health",
        read_time: "10 min read",
    },
    BlogPost {
        id: 6,
        title: "Digital Minimalism: Reclaiming Your Time",
        excerpt: "Strategies to reduce digital clutter and create a more intentional relationship with technology.",
        author: "Alex Kim",
        date: "Oct 22, 2025",
        category: "Productivity",
        read_time: "6 min read",
    },
];

pub fn posts_in_category(category: &str) -> impl Iterator<Item = &'static BlogPost> + '_ {
    BLOG_POSTS.iter().filter(move |p| p.category == category)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceItem {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCategory {
    pub category: &'static str,
    pub items: &'static [ResourceItem],
}

pub const RESOURCE_DIRECTORY: &[ResourceCategory] = &[
    ResourceCategory {
        category: "Eco-Friendly Products",
        items: &[
            ResourceItem { name: "Package Free Shop", description: "Zero-waste essentials and sustainable alternatives", url: "#", tags: &["Zero Waste", "Shopping"] },
            ResourceItem { name: "EarthHero", description: "Curated sustainable products for every need", url: "#", tags: &["Eco Products", "Verified"] },
            ResourceItem { name: "Grove Collaborative", description: "Natural home and personal care products", url: "#", tags: &["Home", "Personal Care"] },
        ],
    },
    ResourceCategory {
        category: "Mental Health Apps",
        items: &[
            ResourceItem { name: "Headspace", description: "Meditation and mindfulness for everyday life", url: "#", tags: &["Meditation", "Sleep"] },
            ResourceItem { name: "Calm", description: "Reduce anxiety and improve sleep quality", url: "#", tags: &["Relaxation", "Anxiety"] },
            ResourceItem { name: "BetterHelp", description: "Online therapy with licensed professionals", url: "#", tags: &["Therapy", "Counseling"] },
        ],
    },
    ResourceCategory {
        category: "Productivity Tools",
        items: &[
            ResourceItem { name: "Notion", description: "All-in-one workspace for notes and tasks", url: "#", tags: &["Organization", "Collaboration"] },
            ResourceItem { name: "Forest", description: "Stay focused and plant real trees", url: "#", tags: &["Focus", "Eco-Friendly"] },
            ResourceItem { name: "RescueTime", description: "Track and optimize your digital habits", url: "#", tags: &["Time Tracking", "Analytics"] },
        ],
    },
    ResourceCategory {
        category: "Educational Resources",
        items: &[
            ResourceItem { name: "Coursera - Sustainability", description: "Free courses on environmental sustainability", url: "#", tags: &["Courses", "Certificates"] },
            ResourceItem { name: "Project Drawdown", description: "Climate solutions research and resources", url: "#", tags: &["Climate", "Research"] },
            ResourceItem { name: "The Minimalists Podcast", description: "Living meaningfully with less", url: "#", tags: &["Podcast", "Minimalism"] },
        ],
    },
    ResourceCategory {
        category: "Sustainable Living Apps",
        items: &[
            ResourceItem { name: "Good On You", description: "Ethical fashion brand ratings", url: "#", tags: &["Fashion", "Ethics"] },
            ResourceItem { name: "Too Good To Go", description: "Save food from going to waste", url: "#", tags: &["Food Waste", "Deals"] },
            ResourceItem { name: "JouleBug", description: "Track your eco-friendly actions", url: "#", tags: &["Tracking", "Gamification"] },
        ],
    },
];

/// Case-insensitive tag lookup across every category.
pub fn resources_tagged(tag: &str) -> Vec<&'static ResourceItem> {
    RESOURCE_DIRECTORY
        .iter()
        .flat_map(|c| c.items)
        .filter(|item| item.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
        .collect()
}
