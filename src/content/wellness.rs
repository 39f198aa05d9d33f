use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    pub text: &'static str,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: &'static [QuizOption],
}

impl QuizQuestion {
    pub fn max_score(&self) -> u8 {
        self.options.iter().map(|o| o.score).max().unwrap_or(0)
    }

    pub fn accepts(&self, score: u8) -> bool {
        self.options.iter().any(|o| o.score == score)
    }
}

pub const QUIZ_QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        prompt: "How often do you feel overwhelmed by daily tasks?",
        options: &[
            QuizOption { text: "Rarely or never", score: 0 },
            QuizOption { text: "Sometimes", score: 1 },
            QuizOption { text: "Often", score: 2 },
            QuizOption { text: "Almost always", score: 3 },
        ],
    },
    QuizQuestion {
        prompt: "How well do you sleep at night?",
        options: &[
            QuizOption { text: "Very well", score: 0 },
            QuizOption { text: "Fairly well", score: 1 },
            QuizOption { text: "Poorly", score: 2 },
            QuizOption { text: "Very poorly", score: 3 },
        ],
    },
    QuizQuestion {
        prompt: "Do you feel you have enough support from others?",
        options: &[
            QuizOption { text: "Yes, definitely", score: 0 },
            QuizOption { text: "Mostly", score: 1 },
            QuizOption { text: "Not really", score: 2 },
            QuizOption { text: "No, not at all", score: 3 },
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrisisResource {
    pub title: &'static str,
    pub description: &'static str,
    pub contact: &'static str,
}

pub const CRISIS_RESOURCES: &[CrisisResource] = &[
    CrisisResource {
        title: "National Suicide Prevention Lifeline",
        description: "24/7 free and confidential support",
        contact: "988",
    },
    CrisisResource {
        title: "Crisis Text Line",
        description: "Text support for those in crisis",
        contact: "Text HOME to 741741",
    },
    CrisisResource {
        title: "NAMI Helpline",
        description: "Mental health information and support",
        contact: "1-800-950-NAMI",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationTopic {
    pub title: &'static str,
    pub description: &'static str,
}

pub const EDUCATION_TOPICS: &[EducationTopic] = &[
    EducationTopic {
        title: "Understanding Depression",
        description: "Learn about symptoms, causes, and treatment options for depression.",
    },
    EducationTopic {
        title: "Managing Anxiety",
        description: "Discover techniques to cope with anxiety and panic attacks.",
    },
    EducationTopic {
        title: "Stress Management",
        description: "Practical strategies to reduce and manage daily stress.",
    },
];
