use super::provider::CompletionRequest;
use crate::models::Mode;

const TEMPERATURE: f32 = 0.7;
const COMPOSE_TEMPERATURE: f32 = 0.8;

const LIST_INSTRUCTION: &str =
    "Return only the questions, one per line, without numbering or extra text.";

pub fn reflection_questions(daily_summary: &str, mode: Mode) -> CompletionRequest {
    let prompt = match mode {
        Mode::Quick => format!(
            "You are a warm, supportive journaling companion. Based on this person's day: \"{daily_summary}\"\n\n\
             Generate exactly 3 personalized reflection questions that feel like they're coming from a caring friend who knows them well.\n\n\
             Guidelines:\n\
             - Make questions specific to their actual experiences and activities mentioned\n\
             - Use warm, conversational language (\"How did that feel?\" vs \"What emotions did you experience?\")\n\
             - Focus on emotional processing and self-discovery\n\
             - Avoid overly clinical or therapy-like language\n\
             - Make them feel seen and understood\n\
             - Reference specific events or activities they mentioned\n\
             - Ask about emotional transitions or mood changes they might have experienced\n\n\
             {LIST_INSTRUCTION}"
        ),
        Mode::Detailed => format!(
            "You are a thoughtful journaling companion helping someone do deep self-reflection. Based on their day: \"{daily_summary}\"\n\n\
             Generate exactly 5 personalized questions that encourage profound self-exploration.\n\n\
             Guidelines:\n\
             - Make questions deeply personal and specific to their situation\n\
             - Use warm, encouraging language that invites vulnerability\n\
             - Focus on emotional depth, personal growth, and life insights\n\
             - Help them connect their experiences to broader life patterns\n\
             - Encourage self-compassion and understanding\n\
             - Make questions that feel like they're coming from someone who truly cares\n\n\
             {LIST_INSTRUCTION}"
        ),
    };
    CompletionRequest::new(prompt, 200, TEMPERATURE)
}

pub fn insights(daily_summary: &str, journal_content: &str, mode: Mode) -> CompletionRequest {
    let prompt = match mode {
        Mode::Quick => format!(
            "Daily Summary: {daily_summary}\n\
             Journal Content: {journal_content}\n\n\
             Provide 2-3 brief insights or observations about this journal entry. Focus on:\n\
             - Emotional patterns\n\
             - Growth opportunities\n\
             - Positive aspects\n\n\
             Keep insights concise and encouraging. Return only the insights, one per line."
        ),
        Mode::Detailed => format!(
            "Daily Summary: {daily_summary}\n\
             Journal Content: {journal_content}\n\n\
             Provide 3-5 thoughtful insights about this journal entry. Focus on:\n\
             - Emotional depth and patterns\n\
             - Personal growth and learning\n\
             - Relationship insights\n\
             - Life wisdom and lessons\n\
             - Future considerations\n\n\
             Make insights meaningful and actionable. Return only the insights, one per line."
        ),
    };
    CompletionRequest::new(prompt, 300, TEMPERATURE)
}

pub fn journal_summary(daily_summary: &str, mode: Mode) -> CompletionRequest {
    let length = match mode {
        Mode::Quick => "Keep it to 2-3 sentences for quick mode",
        Mode::Detailed => "4-5 sentences for detailed mode",
    };
    let prompt = format!(
        "You're helping someone create a meaningful summary of their day: \"{daily_summary}\"\n\n\
         Write a thoughtful summary that captures the essence of their experience.\n\n\
         Guidelines:\n\
         - Focus on what matters most to them emotionally and personally\n\
         - Highlight key moments, feelings, and insights\n\
         - Use warm, reflective language that honors their experience\n\
         - Help them see patterns or growth in their day\n\
         - Make it feel like a caring friend's perspective on their day\n\
         - Avoid being overly clinical or generic\n\n\
         Write as if you're helping them remember and appreciate their day. {length}."
    );
    CompletionRequest::new(prompt, 200, TEMPERATURE)
}

pub fn assistant_response(daily_summary: &str, journal_content: &str) -> CompletionRequest {
    let prompt = format!(
        "You're a warm, supportive friend who just read someone's journal entry about their day.\n\n\
         Their day: {daily_summary}\n\
         What they wrote: {journal_content}\n\n\
         Respond as a caring friend would:\n\
         - Show genuine understanding and empathy\n\
         - Reflect back what you heard with warmth\n\
         - Offer gentle insights or observations\n\
         - Ask one thoughtful follow-up question if appropriate\n\
         - Validate their experience and feelings\n\
         - Be encouraging without being overly positive\n\n\
         Sound like someone who truly cares about them, not an AI or therapist.\n\
         Keep it conversational and heartfelt."
    );
    CompletionRequest::new(prompt, 300, TEMPERATURE)
}

pub fn mood_response(daily_summary: &str, journal_content: &str, mood: &str) -> CompletionRequest {
    let prompt = format!(
        "Daily Summary: {daily_summary}\n\
         Journal Content: {journal_content}\n\
         Current Mood: {mood}\n\n\
         As a supportive journaling assistant, respond to their mood change:\n\
         - Acknowledge their emotional state with empathy\n\
         - Help them explore why they might be feeling this way\n\
         - Connect their mood to the events they described\n\
         - Offer gentle guidance for emotional processing\n\n\
         Be warm, understanding, and helpful. Help them gain insight into their emotions."
    );
    CompletionRequest::new(prompt, 250, TEMPERATURE)
}

pub fn conversational_questions(daily_summary: &str, mode: Mode) -> CompletionRequest {
    let prompt = match mode {
        Mode::Quick => format!(
            "You're having a heartfelt conversation with someone about their day: \"{daily_summary}\"\n\n\
             Ask exactly 3 follow-up questions that show you're really listening and care about their experience.\n\n\
             Guidelines:\n\
             - Be genuinely curious about their emotional experience\n\
             - Use natural, conversational language (\"That sounds...\" \"I'm curious about...\")\n\
             - Acknowledge both positive and difficult emotions\n\
             - Make them feel heard and validated\n\
             - Avoid generic questions - be specific to their situation\n\n\
             {LIST_INSTRUCTION}"
        ),
        Mode::Detailed => format!(
            "You're having a deep, meaningful conversation with someone about their day: \"{daily_summary}\"\n\n\
             Ask exactly 5 thoughtful follow-up questions that help them process their experience more deeply.\n\n\
             Guidelines:\n\
             - Show genuine empathy and understanding\n\
             - Use warm, supportive language that invites sharing\n\
             - Help them explore the emotional layers of their experience\n\
             - Encourage self-reflection and personal growth\n\
             - Validate their feelings while gently encouraging deeper exploration\n\
             - Make questions that feel like they're coming from someone who truly understands\n\n\
             {LIST_INSTRUCTION}"
        ),
    };
    CompletionRequest::new(prompt, 300, TEMPERATURE)
}

pub fn conversational_summary(
    daily_summary: &str,
    user_answers: &[String],
    mode: Mode,
) -> CompletionRequest {
    let answers = user_answers
        .iter()
        .enumerate()
        .map(|(i, answer)| format!("Q{}: {}", i + 1, answer))
        .collect::<Vec<_>>()
        .join("\n");
    let length = match mode {
        Mode::Quick => "3-4 sentences for quick mode",
        Mode::Detailed => "5-6 sentences for detailed mode",
    };
    let prompt = format!(
        "You're a caring friend who just listened to someone share about their day. Here's what they told you:\n\n\
         Daily Summary: {daily_summary}\n\n\
         Their responses to your questions:\n\
         {answers}\n\n\
         Write a warm, empathetic summary that:\n\
         - Reflects back what you heard with genuine understanding\n\
         - Honors their emotional experience without judgment\n\
         - Uses their own words and emotional tone when possible\n\
         - Shows you truly listened and care about their experience\n\
         - Validates their feelings while highlighting any growth or insights\n\
         - Sounds like a supportive friend, not a therapist or AI\n\n\
         Keep it conversational and heartfelt. {length}."
    );
    CompletionRequest::new(prompt, 400, TEMPERATURE)
}

const COMPOSE_SYSTEM: &str = "You are a journaling assistant. Create natural, authentic journal entries that:\n\
1. Sound like the user actually wrote them - conversational and personal\n\
2. Only include details that were actually mentioned - never assume or add things\n\
3. Capture genuine emotions and thoughts - including negative ones\n\
4. Include the date naturally\n\
5. Focus on the user's actual experience, not generic journaling\n\
6. Don't force positivity - reflect the user's true feelings, even if negative\n\
7. Add reflective insights and personal growth moments\n\
8. Show emotional processing - how they're working through their feelings";

pub fn journal_composition(
    daily_summary: &str,
    questions: &[String],
    answers: &[String],
    date: &str,
    mode: Mode,
) -> CompletionRequest {
    let pairs = questions
        .iter()
        .zip(answers)
        .map(|(question, answer)| format!("Q: {question}\nA: {answer}"))
        .collect::<Vec<_>>()
        .join("\n\n");
    let (length, max_tokens) = match mode {
        Mode::Quick => ("Keep it concise (200-300 words max).", 400),
        Mode::Detailed => ("Keep it focused (300-400 words max).", 800),
    };
    let prompt = format!(
        "Using this daily summary and the user's answers to follow-up questions, write a natural, authentic journal entry. \
         Write it like the person actually wrote it themselves, ONLY including what they actually shared. \
         Bridge gaps naturally without adding assumptions. {length} \
         Include today's date ({date}) naturally in the entry.\n\n\
         Daily Summary: {daily_summary}\n\n\
         Follow-up Answers:\n{pairs}"
    );
    CompletionRequest::new(prompt, max_tokens, COMPOSE_TEMPERATURE).with_system(COMPOSE_SYSTEM)
}
