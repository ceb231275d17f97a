use crate::domain::{ReviewRequest, VariantCount, MAX_REVIEW_COMMENTS};

/// Used when the caller selects no focus areas.
pub const DEFAULT_FOCUS: &str = "general academic quality";

/// System message for review requests.
pub const REVIEW_SYSTEM_PROMPT: &str =
    "You are a meticulous academic reviewer. You answer only with valid JSON.";

/// System message for trim and paraphrase requests.
pub const REWRITE_SYSTEM_PROMPT: &str =
    "You are an expert academic editor. You answer only with the requested text.";

const REVIEW_FORMAT: &str = "\
Respond with a single JSON object of exactly this shape:
{
  \"comments\": [
    {
      \"quote\": \"exact passage copied from the text\",
      \"comment\": \"short, actionable feedback\",
      \"severity\": \"info\" | \"suggestion\" | \"warning\"
    }
  ],
  \"summary\": \"optional overall assessment\"
}";

/// Build the review prompt for `request`.
///
/// The layout is fixed: role, focus areas, optional custom instructions, the
/// required JSON shape, formatting rules, and finally the text itself.
pub fn build_review_prompt(request: &ReviewRequest) -> String {
    let focus = if request.focus_areas().is_empty() {
        DEFAULT_FOCUS.to_string()
    } else {
        request.focus_areas().join(", ")
    };

    let mut prompt = String::new();
    prompt.push_str(
        "You are reviewing a piece of academic writing. Read the text below and point out \
         the passages that most need attention.\n",
    );
    prompt.push_str(&format!("Focus on: {focus}.\n"));

    let instructions = request.custom_instructions();
    if !instructions.trim().is_empty() {
        prompt.push_str(&format!("Additional instructions: {instructions}\n"));
    }

    prompt.push('\n');
    prompt.push_str(REVIEW_FORMAT);
    prompt.push_str("\n\nRules:\n");
    prompt.push_str("- Do not wrap the JSON in code fences.\n");
    prompt.push_str("- Do not write any prose outside the JSON object.\n");
    prompt.push_str("- Keep every comment short and actionable.\n");
    prompt.push_str(&format!(
        "- Return at most {MAX_REVIEW_COMMENTS} comments.\n"
    ));
    prompt.push_str("- Copy each quote verbatim from the text so it can be located.\n");
    prompt.push_str("\nText:\n");
    prompt.push_str(request.text());

    prompt
}

/// Build the prompt asking for a shorter version of `text`.
pub fn build_trim_prompt(text: &str) -> String {
    format!(
        "Shorten the following text while preserving its meaning, tone and any citations. \
         Remove redundancy and filler. Return only the revised text, with no commentary, \
         no quotes and no code fences.\n\nText:\n{text}"
    )
}

/// Build the prompt asking for `count` paraphrases of `text`, one per
/// `Variant <n>:` line.
pub fn build_paraphrase_prompt(text: &str, count: VariantCount) -> String {
    let count = count.get();
    let plural = if count == 1 { "" } else { "s" };
    format!(
        "Paraphrase the following text. Provide exactly {count} alternative version{plural} \
         that keep the original meaning but vary wording and sentence structure.\n\
         Write each version on its own line, starting with \"Variant <number>:\", \
         for example \"Variant 1: ...\". Do not add any other commentary.\n\nText:\n{text}"
    )
}
