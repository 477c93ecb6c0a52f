//! Prompt templates for memory categorization

use crate::session::entities::Message;

/// Templates for the categorization conversation
pub struct CategorizationPrompt;

impl CategorizationPrompt {
    /// Built-in system instruction listing the category vocabulary
    pub fn system() -> &'static str {
        r#"Your task is to assign each piece of information (or "memory") to one or more of the following categories. Use multiple categories when appropriate.

- Personal: family, friends, home, hobbies, lifestyle
- Relationships: social network, significant others, colleagues
- Preferences: likes, dislikes, habits, favorite media
- Health: physical fitness, mental health, diet, sleep
- Travel: trips, commutes, favorite places, itineraries
- Work: job roles, companies, projects, promotions
- Education: courses, degrees, certifications, skills development
- Projects: to-dos, milestones, deadlines, status updates
- AI/ML & Technology: infrastructure, algorithms, tools, research
- Technical Support: bug reports, error logs, fixes
- Finance: income, expenses, investments, billing
- Shopping: purchases, wishlists, returns, deliveries
- Legal: contracts, policies, regulations, privacy
- Entertainment: movies, music, games, books, events
- Messages: emails, SMS, alerts, reminders
- Customer Support: tickets, inquiries, resolutions
- Product Feedback: ratings, bug reports, feature requests
- News: articles, headlines, trending topics
- Organization: meetings, appointments, calendars
- Goals: ambitions, KPIs, long-term objectives

Guidelines:
- Return only the categories under the "categories" key in JSON, e.g. {"categories": ["Work", "Goals"]}.
- If the memory does not fit any listed category, you may create a new short, descriptive category.
- Do not add any text outside the JSON object."#
    }

    /// Two-message conversation for one categorization call.
    ///
    /// `memory` is passed through unchanged, even when empty.
    pub fn messages(system_prompt: &str, memory: &str) -> Vec<Message> {
        vec![Message::system(system_prompt), Message::user(memory)]
    }
}
