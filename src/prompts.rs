//! Prompt composition for the AI customisation call.
//!
//! Centralising every prompt string here serves two purposes:
//!
//! 1. **Single source of truth** — the section markers below are load-bearing:
//!    the splicer parses the model's response by searching for exactly these
//!    strings, so prompt and parser must never drift apart.
//!
//! 2. **Testability** — unit tests can inspect the composed prompt directly
//!    without a live model.

/// Marker the model is asked to put before the rewritten intro paragraph.
pub const INTRO_MARKER: &str = "INTRO:";

/// Marker the model is asked to put before the important-notes section.
pub const NOTES_MARKER: &str = "IMPORTANT_NOTES:";

/// Compose the customisation prompt.
///
/// Embeds the original template verbatim plus the operator's free-text
/// campaign instructions, then pins down the response format: two labelled
/// sections (intro first, notes second) and preservation of the `X`
/// mail-merge placeholders.
pub fn customization_prompt(template: &str, instructions: &str) -> String {
    format!(
        r#"You are helping customize a communication template for a market research task.

Original template:
{template}

Special instructions for this specific campaign:
{instructions}

Please provide:
1. A customized intro paragraph (keep it friendly and brief, 2-3 sentences max)
2. Customized important notes/instructions based on the special instructions provided

Format your response as:
{INTRO_MARKER}
[Your intro paragraph here]

{NOTES_MARKER}
[Your important notes here, as bullet points if needed]

Keep all X placeholders intact for mail merge. Match the tone and style of the original."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_template_and_instructions_verbatim() {
        let p = customization_prompt("Hi!\n🍽️ Important: X", "Stress the deadline.");
        assert!(p.contains("Hi!\n🍽️ Important: X"));
        assert!(p.contains("Stress the deadline."));
    }

    #[test]
    fn prompt_requests_both_markers_in_order() {
        let p = customization_prompt("t", "i");
        let intro = p.find(INTRO_MARKER).expect("intro marker");
        let notes = p.find(NOTES_MARKER).expect("notes marker");
        assert!(intro < notes);
    }

    #[test]
    fn prompt_asks_to_keep_placeholders() {
        let p = customization_prompt("t", "i");
        assert!(p.contains("Keep all X placeholders intact"));
    }
}
