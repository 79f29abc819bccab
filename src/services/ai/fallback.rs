//! Canned text served whenever the completion provider is unavailable or
//! fails. Pure functions of their inputs.

use crate::models::Mode;

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

/// First `max_chars` characters of `text`.
fn prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn reflection_questions(mode: Mode) -> Vec<String> {
    match mode {
        Mode::Quick => owned(&[
            "What was the highlight of your day?",
            "What challenged you today?",
            "What are you grateful for?",
            "How did you feel overall?",
        ]),
        Mode::Detailed => owned(&[
            "What emotions did you experience today?",
            "What did you learn about yourself?",
            "How did you handle challenges?",
            "What would you do differently?",
            "What are you looking forward to tomorrow?",
        ]),
    }
}

pub fn insights(mode: Mode) -> Vec<String> {
    match mode {
        Mode::Quick => owned(&[
            "Thank you for taking time to reflect on your day.",
            "Every reflection brings new insights and growth.",
        ]),
        Mode::Detailed => owned(&[
            "Your detailed reflection shows deep self-awareness.",
            "This kind of introspection leads to meaningful growth.",
            "You're building valuable self-knowledge through journaling.",
        ]),
    }
}

pub fn journal_summary(daily_summary: &str, mode: Mode) -> String {
    let about = prefix(daily_summary, 30);
    match mode {
        Mode::Quick => format!(
            "Based on your summary about {about}..., you've had an eventful day. \
             Your reflection shows thoughtful consideration of your experiences."
        ),
        Mode::Detailed => format!(
            "Your detailed summary about {about}... reveals a day filled with meaningful experiences. \
             Your thoughtful reflection demonstrates deep self-awareness and emotional intelligence."
        ),
    }
}

pub fn assistant_response(mode: Mode) -> String {
    match mode {
        Mode::Quick => "I'm reading your journal entry and finding it very insightful. \
                        Your reflection shows good self-awareness. \
                        Consider what patterns you notice in your experiences."
            .to_string(),
        Mode::Detailed => "Your detailed reflection is impressive! \
                           I can see you're really processing your experiences deeply. \
                           What connections do you see between today's events and your broader life journey?"
            .to_string(),
    }
}

pub const GENERIC_MOOD_RESPONSE: &str = "Your mood is an important part of your journaling experience. \
     How does this emotional state relate to what happened today?";

/// Keyed by mood label; mode does not change the acknowledgment.
pub fn mood_response(mood: &str, _mode: Mode) -> String {
    let response = match mood {
        "happy" => "It's wonderful that you're feeling happy! This positive mood can really enhance your reflection. \
                    What contributed to this happiness today?",
        "calm" => "Feeling calm is such a valuable state for reflection. \
                   Your peaceful mood suggests you're in a good space to process your experiences.",
        "neutral" => "A neutral mood can actually be perfect for objective reflection. \
                      You're able to look at your day with balanced perspective.",
        "anxious" => "I notice you're feeling anxious. This emotion can provide important insights into what matters to you. \
                      What's underlying this anxiety?",
        "sad" => "I hear that you're feeling sad. This emotion is valid and can teach us important things about ourselves. \
                  What's bringing up these feelings?",
        _ => GENERIC_MOOD_RESPONSE,
    };
    response.to_string()
}

pub fn conversational_questions(mode: Mode) -> Vec<String> {
    match mode {
        Mode::Quick => owned(&[
            "How did you feel about what happened today?",
            "What was the most challenging part of your day?",
            "What would you do differently if you could?",
        ]),
        Mode::Detailed => owned(&[
            "How did you feel about what happened today?",
            "What was the most challenging part of your day?",
            "What emotions came up during these events?",
            "How did you handle any difficult situations?",
            "What did you learn about yourself today?",
            "What would you do differently if you could?",
        ]),
    }
}

pub fn conversational_summary(daily_summary: &str, user_answers: &[String], mode: Mode) -> String {
    let mut summary = format!("Today you experienced: {}... ", prefix(daily_summary, 100));

    if !user_answers.is_empty() {
        summary.push_str("You reflected on your feelings and responses to these events. ");
        summary.push_str(match mode {
            Mode::Detailed => "Your detailed answers show deep consideration of your emotional experience and personal growth.",
            Mode::Quick => "Your answers show thoughtful consideration of your experiences.",
        });
    }

    summary
}

/// Stitches the user's own words into an entry: date, summary, then the
/// answers (quick) or question/answer pairs (detailed).
pub fn journal_composition(
    daily_summary: &str,
    questions: &[String],
    answers: &[String],
    date: &str,
    mode: Mode,
) -> String {
    let mut parts = vec![date.to_string(), daily_summary.trim().to_string()];
    for (question, answer) in questions.iter().zip(answers) {
        let answer = answer.trim();
        if answer.is_empty() {
            continue;
        }
        match mode {
            Mode::Quick => parts.push(answer.to_string()),
            Mode::Detailed => parts.push(format!("{}\n{}", question.trim(), answer)),
        }
    }
    parts.join("\n\n")
}
