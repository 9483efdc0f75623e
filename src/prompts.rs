// Prompt strings and fixed texts for the generative-text flows.

use crate::models::Inspiration;

pub const INSPIRATION_PROMPT: &str = "Generate a creative design challenge for a communication design \
student who loves typography, UX/UI, 3D, and web development. Keep it brief and inspiring.";

pub const FALLBACK_TOPIC: &str = "Default Inspiration";
pub const FALLBACK_CHALLENGE: &str = "Design a new way to visualize your daily screen time habits.";

pub fn fallback_inspiration() -> Inspiration {
    Inspiration {
        topic: FALLBACK_TOPIC.to_string(),
        challenge: FALLBACK_CHALLENGE.to_string(),
    }
}

pub const CHAT_GREETING: &str = "Hi! I'm Rajeev's design assistant. Ask me about his work, skills, \
or how he approaches a project.";

pub const CHAT_ERROR_REPLY: &str = "Sorry, I'm having trouble connecting right now. Please try again \
in a moment.";

pub fn chat_system_instruction(owner: &str, skills: &[&str]) -> String {
    format!(
        r#"You are the portfolio assistant for {owner}, a communication design student.
Answer as a professional, friendly assistant in at most 3 sentences.
Keep every answer anchored to {owner}'s skills and work: {skills}.
If a question is unrelated, steer the conversation back to the portfolio or suggest using the contact form."#,
        owner = owner,
        skills = skills.join(", "),
    )
}
