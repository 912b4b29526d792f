use serde::Serialize;

pub const INTERESTS: &str = "interests";
pub const ENVIRONMENT: &str = "environment";
pub const SKILLS: &str = "skills";
pub const SALARY: &str = "salary";
pub const GROWTH: &str = "growth";

/// Growth answer that switches on the outlook component.
pub const GROWTH_VERY_IMPORTANT: &str = "very";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Single,
    Multiple,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuizOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    pub options: &'static [QuizOption],
}

impl Question {
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}

const fn opt(value: &'static str, label: &'static str) -> QuizOption {
    QuizOption { value, label }
}

/// The quiz, in the order it is asked.
pub static QUESTIONS: [Question; 5] = [
    Question {
        id: INTERESTS,
        prompt: "What activities do you enjoy most?",
        kind: QuestionKind::Multiple,
        options: &[
            opt("problem-solving", "Solving complex problems"),
            opt("creativity", "Creating and designing things"),
            opt("technology", "Working with technology"),
            opt("communication", "Communicating with people"),
            opt("analysis", "Analyzing data and patterns"),
            opt("hands-on", "Building things with my hands"),
        ],
    },
    Question {
        id: ENVIRONMENT,
        prompt: "What work environment appeals to you?",
        kind: QuestionKind::Single,
        options: &[
            opt("office", "Office or remote"),
            opt("creative", "Creative studio"),
            opt("lab", "Laboratory or research facility"),
            opt("outdoor", "Outdoor or field work"),
            opt("flexible", "Flexible/Startup environment"),
        ],
    },
    Question {
        id: SKILLS,
        prompt: "Which skills do you want to develop?",
        kind: QuestionKind::Multiple,
        options: &[
            opt("programming", "Programming and coding"),
            opt("design", "Visual design"),
            opt("mathematics", "Mathematics and statistics"),
            opt("leadership", "Leadership and management"),
            opt("innovation", "Innovation and strategy"),
            opt("engineering", "Engineering and building"),
        ],
    },
    Question {
        id: SALARY,
        prompt: "What salary range are you targeting?",
        kind: QuestionKind::Single,
        options: &[
            opt("50-75", "$50k - $75k"),
            opt("75-100", "$75k - $100k"),
            opt("100-150", "$100k - $150k"),
            opt("150+", "$150k+"),
        ],
    },
    Question {
        id: GROWTH,
        prompt: "How important is job growth to you?",
        kind: QuestionKind::Single,
        options: &[
            opt(GROWTH_VERY_IMPORTANT, "Very important - I want high growth"),
            opt("moderate", "Moderately important"),
            opt("stable", "Stability is more important"),
        ],
    },
];

pub fn find_question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}
