//! The fixed grading prompt.

/// Criteria the model scores, in prompt order.
pub const GRADING_CRITERIA: [&str; 5] = [
    "Clarity & Readability",
    "Structure & Formatting",
    "Tone & Voice",
    "SEO Best Practices",
    "Value & Relevance",
];

pub const POINTS_PER_CRITERION: u16 = 20;

pub const MAX_SCORE: u16 = POINTS_PER_CRITERION * GRADING_CRITERIA.len() as u16;

/// Builds the grading prompt with `content` embedded verbatim between `"""`.
pub fn build_grading_prompt(content: &str) -> String {
    let criteria = GRADING_CRITERIA
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {}", i + 1, name))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a content analyst. Grade the following content on five areas \
         (each out of {per} points):\n\
         \n\
         {criteria}\n\
         \n\
         Then:\n\
         - Return a total score out of {max}\n\
         - Provide 4-6 bullet-point suggestions for improvement\n\
         \n\
         Content to grade:\n\
         \"\"\"{content}\"\"\"\n",
        per = POINTS_PER_CRITERION,
        criteria = criteria,
        max = MAX_SCORE,
        content = content,
    )
}
