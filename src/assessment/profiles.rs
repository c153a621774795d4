//! Static descriptive metadata for each of the 16 types.

use super::types::PersonalityType;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeProfile {
    pub title: &'static str,
    pub description: &'static str,
    pub traits: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub work_style: &'static str,
}

/// Metadata for `personality_type`. Exhaustive over all 16 types.
pub fn profile_for(personality_type: PersonalityType) -> TypeProfile {
    match personality_type {
        PersonalityType::INTJ => TypeProfile {
            title: "The Architect",
            description: "Imaginative and strategic thinkers, with a plan for everything.",
            traits: &["Strategic", "Independent", "Decisive", "Hard-working", "Determined"],
            strengths: &["Quick to understand complex theoretical concepts", "Highly independent", "Natural leaders", "High standards", "Work well alone"],
            challenges: &["Can be overly critical", "Impatient with inefficiency", "May ignore emotions", "Can be too theoretical"],
            work_style: "Prefer working independently on complex projects with long-term vision and strategic planning.",
        },
        PersonalityType::INTP => TypeProfile {
            title: "The Thinker",
            description: "Innovative inventors with an unquenchable thirst for knowledge.",
            traits: &["Logical", "Abstract", "Independent", "Curious", "Theoretical"],
            strengths: &["Excellent analytical abilities", "Original thinking", "Objective", "Value precision"],
            challenges: &["May neglect practical matters", "Can be insensitive", "Difficulty with emotions"],
            work_style: "Thrive in flexible environments that allow for independent thinking and creative problem-solving.",
        },
        PersonalityType::ENTJ => TypeProfile {
            title: "The Commander",
            description: "Bold, imaginative and strong-willed leaders.",
            traits: &["Efficient", "Energetic", "Self-confident", "Strong-willed", "Strategic"],
            strengths: &["Natural born leaders", "Self-assured", "Well-informed", "Excellent communicators"],
            challenges: &["Impatient", "Arrogant", "Poor handling of emotions", "Cold and ruthless"],
            work_style: "Excel in leadership positions with opportunities to implement long-term strategies and manage teams.",
        },
        PersonalityType::ENTP => TypeProfile {
            title: "The Debater",
            description: "Smart and curious thinkers who cannot resist an intellectual challenge.",
            traits: &["Inventive", "Enthusiastic", "Strategic", "Enterprising", "Versatile"],
            strengths: &["Excellent brainstormers", "Charismatic", "Energetic", "Good at many things"],
            challenges: &["Very argumentative", "Insensitive", "Intolerant", "Can find it difficult to focus"],
            work_style: "Prefer dynamic environments with variety, intellectual challenges, and opportunities for innovation.",
        },
        PersonalityType::INFJ => TypeProfile {
            title: "The Advocate",
            description: "Creative and insightful, inspired and independent perfectionists.",
            traits: &["Insightful", "Inspiring", "Decisive", "Determined", "Passionate"],
            strengths: &["Creative", "Insightful", "Principled", "Passionate", "Altruistic"],
            challenges: &["Sensitive to criticism", "Reluctant to open up", "Perfectionist", "Always need to have a cause"],
            work_style: "Work best in quiet environments focused on helping others and making a meaningful impact.",
        },
        PersonalityType::INFP => TypeProfile {
            title: "The Mediator",
            description: "Poetic, kind and altruistic people, always eager to help a good cause.",
            traits: &["Idealistic", "Loyal", "Adaptive", "Curious", "Caring"],
            strengths: &["Passionate and energetic", "Flexible and laid-back", "Loyal and devoted", "Hard-working"],
            challenges: &["Too idealistic", "Too altruistic", "Impractical", "Dislike dealing with data"],
            work_style: "Thrive in collaborative environments that align with personal values and allow creative expression.",
        },
        PersonalityType::ENFJ => TypeProfile {
            title: "The Protagonist",
            description: "Charismatic and inspiring leaders, able to mesmerize listeners.",
            traits: &["Tolerant", "Reliable", "Charismatic", "Altruistic", "Natural leader"],
            strengths: &["Tolerant", "Reliable", "Charismatic", "Altruistic", "Natural born leaders"],
            challenges: &["Overly idealistic", "Too selfless", "Too sensitive", "Fluctuating self-esteem"],
            work_style: "Excel in people-focused roles with opportunities to inspire and develop others.",
        },
        PersonalityType::ENFP => TypeProfile {
            title: "The Campaigner",
            description: "Enthusiastic, creative and sociable free spirits.",
            traits: &["Enthusiastic", "Creative", "Sociable", "Energetic", "Independent"],
            strengths: &["Enthusiastic and energetic", "Creative", "People-focused", "Excellent communication skills"],
            challenges: &["Poor practical skills", "Find it difficult to focus", "Overthink things", "Get stressed easily"],
            work_style: "Prefer flexible, people-oriented environments with variety and opportunities for creativity.",
        },
        PersonalityType::ISTJ => TypeProfile {
            title: "The Logistician",
            description: "Practical and fact-minded, reliable and responsible.",
            traits: &["Honest", "Direct", "Strong-willed", "Dutiful", "Responsible"],
            strengths: &["Honest and direct", "Strong-willed and dutiful", "Very responsible", "Calm and practical"],
            challenges: &["Stubborn", "Insensitive", "Always by the book", "Judgmental"],
            work_style: "Excel in structured environments with clear procedures, deadlines, and established systems.",
        },
        PersonalityType::ISFJ => TypeProfile {
            title: "The Protector",
            description: "Warm-hearted and dedicated, always ready to protect loved ones.",
            traits: &["Supportive", "Reliable", "Patient", "Imaginative", "Observant"],
            strengths: &["Supportive", "Reliable and patient", "Imaginative and observant", "Enthusiastic"],
            challenges: &["Too modest", "Take things too personally", "Repress their feelings", "Overload themselves"],
            work_style: "Work best in supportive roles where they can help others in practical, tangible ways.",
        },
        PersonalityType::ESTJ => TypeProfile {
            title: "The Executive",
            description: "Excellent administrators, unsurpassed at managing things or people.",
            traits: &["Dedicated", "Strong-willed", "Direct", "Honest", "Loyal"],
            strengths: &["Dedicated", "Strong-willed", "Direct and honest", "Loyal, patient and reliable"],
            challenges: &["Inflexible and stubborn", "Uncomfortable with unconventional situations", "Judgmental"],
            work_style: "Thrive in leadership roles with clear authority, established processes, and measurable results.",
        },
        PersonalityType::ESFJ => TypeProfile {
            title: "The Consul",
            description: "Extraordinarily caring, social and popular people, always eager to help.",
            traits: &["Strong practical skills", "Loyal", "Sensitive", "Warm-hearted", "Good at connecting"],
            strengths: &["Strong practical skills", "Strong sense of duty", "Very loyal", "Sensitive and warm"],
            challenges: &["Worried about their social status", "Inflexible", "Reluctant to innovate", "Vulnerable to criticism"],
            work_style: "Excel in people-focused environments where they can provide support and maintain harmony.",
        },
        PersonalityType::ISTP => TypeProfile {
            title: "The Virtuoso",
            description: "Bold and practical experimenters, masters of all kinds of tools.",
            traits: &["Tolerant", "Flexible", "Quiet", "Reserved", "Practical"],
            strengths: &["Optimistic and energetic", "Creative and practical", "Spontaneous and rational", "Know how to prioritize"],
            challenges: &["Stubborn", "Insensitive", "Private and reserved", "Easily bored"],
            work_style: "Prefer hands-on work with flexibility, independence, and practical problem-solving opportunities.",
        },
        PersonalityType::ISFP => TypeProfile {
            title: "The Adventurer",
            description: "Flexible and charming artists, always ready to explore new possibilities.",
            traits: &["Charming", "Sensitive", "Imaginative", "Passionate", "Curious"],
            strengths: &["Charming", "Sensitive to others", "Imaginative and artistic", "Passionate"],
            challenges: &["Fiercely independent", "Unpredictable", "Easily stressed", "Overly competitive"],
            work_style: "Thrive in creative, flexible environments that allow personal expression and align with values.",
        },
        PersonalityType::ESTP => TypeProfile {
            title: "The Entrepreneur",
            description: "Smart, energetic and perceptive people, truly enjoy living on the edge.",
            traits: &["Tolerant", "Energetic", "Creative", "Perceptive", "Spontaneous"],
            strengths: &["Tolerant and flexible", "Original", "Excellent people skills", "Practical"],
            challenges: &["Sensitive", "Conflict-averse", "Easily bored", "Poor long-term planning"],
            work_style: "Excel in dynamic, people-oriented environments with immediate results and variety.",
        },
        PersonalityType::ESFP => TypeProfile {
            title: "The Entertainer",
            description: "Spontaneous, energetic and enthusiastic people - life is never boring.",
            traits: &["Spontaneous", "Energetic", "Enthusiastic", "People-focused", "Warm"],
            strengths: &["Bold", "Original", "Aesthetics and showcase", "Practical", "Observant"],
            challenges: &["Sensitive", "Conflict-averse", "Easily bored", "Poor long-term planning"],
            work_style: "Prefer people-centered environments with creativity, flexibility, and immediate feedback.",
        },
    }
}
