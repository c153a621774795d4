//! The fixed 48-item forced-choice question bank.
//!
//! Twelve items per dimension, in dimension order. Each item names the trait
//! letter that option A and option B contribute.

use super::types::{Choice, Dimension, Trait};

pub const QUESTION_COUNT: usize = 48;
pub const QUESTIONS_PER_DIMENSION: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// 1-based ordinal.
    pub id: u8,
    pub prompt: &'static str,
    pub option_a: &'static str,
    pub option_b: &'static str,
    pub dimension: Dimension,
    pub a_value: Trait,
    pub b_value: Trait,
}

impl Question {
    const fn new(
        id: u8,
        prompt: &'static str,
        option_a: &'static str,
        option_b: &'static str,
        dimension: Dimension,
        a_value: Trait,
        b_value: Trait,
    ) -> Self {
        Self {
            id,
            prompt,
            option_a,
            option_b,
            dimension,
            a_value,
            b_value,
        }
    }

    /// Trait letter contributed by picking `choice`.
    pub fn trait_for(&self, choice: Choice) -> Trait {
        match choice {
            Choice::A => self.a_value,
            Choice::B => self.b_value,
        }
    }

    pub fn label_for(&self, choice: Choice) -> &'static str {
        match choice {
            Choice::A => self.option_a,
            Choice::B => self.option_b,
        }
    }
}

/// Look up a question by 0-based index.
pub fn question_at(index: usize) -> Option<&'static Question> {
    QUESTIONS.get(index)
}

pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    // Extraversion vs Introversion
    Question::new(1, "At a party, you would rather:", "Interact with many people", "Talk to a few close friends", Dimension::EI, Trait::E, Trait::I),
    Question::new(2, "You feel more energized by:", "Being around people", "Spending time alone", Dimension::EI, Trait::E, Trait::I),
    Question::new(3, "When making decisions, you:", "Talk it through with others", "Think it through privately", Dimension::EI, Trait::E, Trait::I),
    Question::new(4, "In group projects, you prefer to:", "Lead discussions", "Work independently first", Dimension::EI, Trait::E, Trait::I),
    Question::new(5, "You are more comfortable with:", "Speaking in public", "Writing your thoughts", Dimension::EI, Trait::E, Trait::I),
    Question::new(6, "After a long day, you prefer to:", "Go out with friends", "Stay home and relax", Dimension::EI, Trait::E, Trait::I),
    Question::new(7, "You tend to:", "Think out loud", "Think before speaking", Dimension::EI, Trait::E, Trait::I),
    Question::new(8, "In conversations, you:", "Share personal details easily", "Keep personal matters private", Dimension::EI, Trait::E, Trait::I),
    Question::new(9, "You work better:", "With background noise", "In complete silence", Dimension::EI, Trait::E, Trait::I),
    Question::new(10, "When stressed, you:", "Seek support from others", "Deal with it alone", Dimension::EI, Trait::E, Trait::I),
    Question::new(11, "You prefer to:", "Have many acquaintances", "Have few close friends", Dimension::EI, Trait::E, Trait::I),
    Question::new(12, "In meetings, you:", "Speak up frequently", "Listen more than talk", Dimension::EI, Trait::E, Trait::I),

    // Sensing vs Intuition
    Question::new(13, "You prefer information that is:", "Concrete and factual", "Abstract and theoretical", Dimension::SN, Trait::S, Trait::N),
    Question::new(14, "You focus more on:", "Present realities", "Future possibilities", Dimension::SN, Trait::S, Trait::N),
    Question::new(15, "You trust more in:", "Experience", "Intuition", Dimension::SN, Trait::S, Trait::N),
    Question::new(16, "You prefer to work with:", "Proven methods", "New approaches", Dimension::SN, Trait::S, Trait::N),
    Question::new(17, "You are more interested in:", "Details and specifics", "The big picture", Dimension::SN, Trait::S, Trait::N),
    Question::new(18, "You prefer instructions that are:", "Step-by-step", "General guidelines", Dimension::SN, Trait::S, Trait::N),
    Question::new(19, "You are more drawn to:", "Practical applications", "Theoretical concepts", Dimension::SN, Trait::S, Trait::N),
    Question::new(20, "When learning, you prefer:", "Hands-on experience", "Conceptual understanding", Dimension::SN, Trait::S, Trait::N),
    Question::new(21, "You notice more:", "What is actually there", "What could be there", Dimension::SN, Trait::S, Trait::N),
    Question::new(22, "You value more:", "Common sense", "Innovation", Dimension::SN, Trait::S, Trait::N),
    Question::new(23, "You prefer to:", "Follow established procedures", "Explore new possibilities", Dimension::SN, Trait::S, Trait::N),
    Question::new(24, "You are more likely to:", "Remember facts and details", "Remember impressions and meanings", Dimension::SN, Trait::S, Trait::N),

    // Thinking vs Feeling
    Question::new(25, "When making decisions, you rely more on:", "Logic and analysis", "Personal values and feelings", Dimension::TF, Trait::T, Trait::F),
    Question::new(26, "You are more concerned with:", "Being right", "Being tactful", Dimension::TF, Trait::T, Trait::F),
    Question::new(27, "You value more:", "Justice and fairness", "Mercy and compassion", Dimension::TF, Trait::T, Trait::F),
    Question::new(28, "In conflicts, you focus on:", "The issues at hand", "The people involved", Dimension::TF, Trait::T, Trait::F),
    Question::new(29, "You prefer to be seen as:", "Competent", "Caring", Dimension::TF, Trait::T, Trait::F),
    Question::new(30, "When giving feedback, you:", "Focus on improvement areas", "Consider the person's feelings", Dimension::TF, Trait::T, Trait::F),
    Question::new(31, "You make decisions based on:", "Objective criteria", "Personal impact", Dimension::TF, Trait::T, Trait::F),
    Question::new(32, "You are more motivated by:", "Achievement", "Appreciation", Dimension::TF, Trait::T, Trait::F),
    Question::new(33, "In debates, you:", "Argue the facts", "Consider all viewpoints", Dimension::TF, Trait::T, Trait::F),
    Question::new(34, "You prefer to:", "Be firm and tough-minded", "Be gentle and tender-hearted", Dimension::TF, Trait::T, Trait::F),
    Question::new(35, "You are more interested in:", "Principles and laws", "People and their stories", Dimension::TF, Trait::T, Trait::F),
    Question::new(36, "When criticized, you:", "Focus on the validity", "Feel personally affected", Dimension::TF, Trait::T, Trait::F),

    // Judging vs Perceiving
    Question::new(37, "You prefer to:", "Plan ahead", "Be spontaneous", Dimension::JP, Trait::J, Trait::P),
    Question::new(38, "You work better with:", "Deadlines", "Open-ended timeframes", Dimension::JP, Trait::J, Trait::P),
    Question::new(39, "You prefer your life to be:", "Structured and organized", "Flexible and adaptable", Dimension::JP, Trait::J, Trait::P),
    Question::new(40, "When starting a project, you:", "Make a detailed plan", "Jump right in", Dimension::JP, Trait::J, Trait::P),
    Question::new(41, "You prefer to:", "Settle matters quickly", "Keep options open", Dimension::JP, Trait::J, Trait::P),
    Question::new(42, "Your workspace tends to be:", "Neat and organized", "Flexible and varied", Dimension::JP, Trait::J, Trait::P),
    Question::new(43, "You prefer to:", "Follow a schedule", "Go with the flow", Dimension::JP, Trait::J, Trait::P),
    Question::new(44, "When making plans, you:", "Stick to them", "Change as needed", Dimension::JP, Trait::J, Trait::P),
    Question::new(45, "You feel better when things are:", "Decided and settled", "Open to change", Dimension::JP, Trait::J, Trait::P),
    Question::new(46, "You prefer assignments that are:", "Clear and specific", "Open to interpretation", Dimension::JP, Trait::J, Trait::P),
    Question::new(47, "In your daily routine, you:", "Follow a set pattern", "Vary your activities", Dimension::JP, Trait::J, Trait::P),
    Question::new(48, "You are more comfortable with:", "Having everything planned", "Leaving room for surprises", Dimension::JP, Trait::J, Trait::P),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        for (idx, q) in QUESTIONS.iter().enumerate() {
            assert_eq!(q.id as usize, idx + 1);
        }
    }

    #[test]
    fn twelve_questions_per_dimension() {
        for d in Dimension::ALL {
            let count = QUESTIONS.iter().filter(|q| q.dimension == d).count();
            assert_eq!(count, QUESTIONS_PER_DIMENSION, "dimension {}", d.code());
        }
    }

    #[test]
    fn options_name_one_letter_from_each_pole() {
        for q in QUESTIONS.iter() {
            let (first, second) = q.dimension.poles();
            assert_eq!(q.a_value.dimension(), q.dimension, "question {}", q.id);
            assert_eq!(q.b_value.dimension(), q.dimension, "question {}", q.id);
            assert!(
                (q.a_value == first && q.b_value == second)
                    || (q.a_value == second && q.b_value == first),
                "question {} must split its poles across A/B",
                q.id
            );
        }
    }

    #[test]
    fn choice_maps_to_option() {
        let q = question_at(0).unwrap();
        assert_eq!(q.trait_for(Choice::A), Trait::E);
        assert_eq!(q.trait_for(Choice::B), Trait::I);
        assert_eq!(q.label_for(Choice::B), "Talk to a few close friends");
        assert!(question_at(QUESTION_COUNT).is_none());
    }
}
