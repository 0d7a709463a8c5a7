//! Prompt construction
//!
//! Each prompt tells the model which language to answer in and which
//! Markdown conventions to use, so the reply classifies cleanly in the
//! content renderer (`#`, `##`, `*`, `1.` and standalone `**` lines).

use lstudio_core::{Language, StepIcon};

const FORMAT_RULES: &str = "\
Formatting:
- Use Markdown.
- Use main headings (#), subheadings (##), bullet lists (*) or numbered lists (1.).
- Put each list item on its own line.
- Use bold (**) for key words and important terms.";

fn language_directive(language: Language) -> String {
    format!("Write the entire answer in {}.", language.prompt_name())
}

/// Instruction for a full lesson plan
pub fn plan_prompt(title: &str, strategy_name: &str, language: Language) -> String {
    format!(
        "\
You are an expert lesson designer and a creative content writer.
Your task is to write a detailed, interactive and active lesson plan for the topic: \"{title}\".

The plan must follow the \"{strategy_name}\" strategy strictly and creatively.

Plan requirements:
1. **Title:** the lesson title and the strategy used.
2. **Objectives:** clear, measurable objectives (knowledge, skills and attitudes).
3. **Materials:** the materials and tools needed to run the lesson.
4. **Procedure:** detailed, ordered steps showing how to apply \"{strategy_name}\" to \"{title}\". Describe the role of the teacher and of the students in each step.
5. **Interactive activities:** concrete, original activities that make the lesson engaging.
6. **Assessment:** varied assessment methods (diagnostic, formative, summative) that measure the objectives.
7. **Homework (optional):** an enrichment task that deepens understanding.

{FORMAT_RULES}

{directive}",
        directive = language_directive(language),
    )
}

/// Instruction for a plain-language explanation of a strategy
pub fn strategy_prompt(strategy_name: &str, language: Language) -> String {
    format!(
        "\
As an expert in modern teaching methods, explain the \"{strategy_name}\" strategy to teachers simply and clearly.

Required:
1. **Definition:** what the strategy is, in plain words.
2. **Main goal:** why it is used in the classroom.
3. **Value for students:** why it is effective for developing students' skills.
4. **Steps:** how a teacher applies it, in 3-4 short practical steps.
5. **Example:** a short, practical example of the strategy in a lesson.

{FORMAT_RULES}
- Keep the language clear and direct.

{directive}",
        directive = language_directive(language),
    )
}

/// Instruction for a step-by-step interactive explanation (JSON reply)
pub fn interactive_prompt(title: &str, strategy_name: &str, language: Language) -> String {
    let icons = StepIcon::known_tags()
        .map(|tag| format!("\"{tag}\""))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "\
You are a creative teacher and an expert in designing interactive activities.
Your task is to build an interactive explanation of the topic \"{title}\" using the \"{strategy_name}\" strategy.
The reply must be JSON **only**.

Rules:
1. Break \"{strategy_name}\" into its essential practical, interactive steps. **The number of steps must match the nature of the strategy** (for example, Six Thinking Hats has exactly 6 steps, one per hat).
2. Return a JSON object with the key \"interactive_steps\".
3. \"interactive_steps\" is an array of objects, one object per step.
4. Every object has:
   a. \"title\": a short, clear step title (for example \"White Hat: Facts\").
   b. \"icon\": exactly one icon name, in English, from this list, that best describes the step: [{icons}]
   c. \"content\": a detailed, interactive explanation of the step applied directly to \"{title}\", addressed to students, written in Markdown.

Example reply for Six Thinking Hats:
{{
  \"interactive_steps\": [
    {{ \"title\": \"White Hat: Facts\", \"icon\": \"white_hat\", \"content\": \"Let's think like scientists! What **facts** do we know about '{title}'?\" }},
    {{ \"title\": \"Red Hat: Feelings\", \"icon\": \"red_hat\", \"content\": \"How do you **feel** about '{title}'?\" }}
  ]
}}

Do not add any text outside the JSON object. Titles and content are written in {language}; keys and icon names stay in English.",
        language = language.prompt_name(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_prompt_mentions_inputs_and_language() {
        let prompt = plan_prompt("Plant life cycle", "Six Thinking Hats", Language::Arabic);
        assert!(prompt.contains("\"Plant life cycle\""));
        assert!(prompt.contains("\"Six Thinking Hats\""));
        assert!(prompt.contains("Write the entire answer in Arabic."));
        assert!(prompt.contains("Assessment"));
    }

    #[test]
    fn test_strategy_prompt_asks_for_steps() {
        let prompt = strategy_prompt("Brainstorming", Language::English);
        assert!(prompt.contains("\"Brainstorming\""));
        assert!(prompt.contains("3-4"));
        assert!(prompt.ends_with("Write the entire answer in English."));
    }

    #[test]
    fn test_interactive_prompt_lists_every_icon() {
        let prompt = interactive_prompt("Fractions", "Six Thinking Hats", Language::English);
        for tag in StepIcon::known_tags() {
            assert!(prompt.contains(&format!("\"{tag}\"")), "missing {tag}");
        }
        assert!(prompt.contains("interactive_steps"));
        assert!(prompt.contains("JSON **only**"));
    }
}
