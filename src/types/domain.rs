//! Life domains used as the coarse compatibility filter.
//!
//! Two goals can only contribute to a compatibility score when they belong
//! to the same domain.

use serde::{Deserialize, Serialize};

/// A fixed life-area category.
///
/// Serialized by name, e.g. `MENTAL_HEALTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Domain {
    Career,
    Investing,
    Fitness,
    Academics,
    MentalHealth,
    Philosophy,
    CultureHobbies,
    IntimacyRomance,
    FriendshipSocial,
}

impl Domain {
    /// Every domain, in declaration order
    pub const ALL: [Domain; 9] = [
        Domain::Career,
        Domain::Investing,
        Domain::Fitness,
        Domain::Academics,
        Domain::MentalHealth,
        Domain::Philosophy,
        Domain::CultureHobbies,
        Domain::IntimacyRomance,
        Domain::FriendshipSocial,
    ];

    /// Human-readable label
    pub fn display_name(self) -> &'static str {
        match self {
            Domain::Career => "Career",
            Domain::Investing => "Investing / Financial Growth",
            Domain::Fitness => "Fitness",
            Domain::Academics => "Academics",
            Domain::MentalHealth => "Mental Health",
            Domain::Philosophy => "Philosophical Development",
            Domain::CultureHobbies => "Culture / Hobbies / Creative Pursuits",
            Domain::IntimacyRomance => "Intimacy / Romantic Exploration",
            Domain::FriendshipSocial => "Friendship / Social Engagement",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Domain::Career => "💼",
            Domain::Investing => "💰",
            Domain::Fitness => "💪",
            Domain::Academics => "📚",
            Domain::MentalHealth => "🧠",
            Domain::Philosophy => "🤔",
            Domain::CultureHobbies => "🎨",
            Domain::IntimacyRomance => "❤️",
            Domain::FriendshipSocial => "👥",
        }
    }

    /// Suggested goal names offered during onboarding
    pub fn templates(self) -> &'static [&'static str] {
        match self {
            Domain::Fitness => &[
                "Strength Training",
                "Cardio",
                "Yoga",
                "Weight Loss",
                "Muscle Gain",
            ],
            Domain::Career => &[
                "Promotion",
                "Skill Learning",
                "Networking",
                "Start Business",
                "Career Change",
            ],
            Domain::MentalHealth => &["Meditation", "Therapy", "Stress Management", "Better Sleep"],
            Domain::Academics => &[
                "Learn New Language",
                "Get Degree",
                "Online Course",
                "Read More",
            ],
            Domain::Philosophy => &["Study Stoicism", "Existentialism", "Ethics", "Mindfulness"],
            Domain::Investing => &[
                "Save Money",
                "Invest in Stocks",
                "Financial Independence",
                "Budget Better",
            ],
            Domain::CultureHobbies => &["Learn Instrument", "Photography", "Painting", "Writing"],
            Domain::IntimacyRomance => &["Find Partner", "Improve Communication", "Date More"],
            Domain::FriendshipSocial => &[
                "Make New Friends",
                "Reconnect",
                "Join Community",
                "Be More Social",
            ],
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
