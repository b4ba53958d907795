//! Built-in communication templates.
//!
//! Centralising the template texts here keeps them out of the CLI and makes
//! the anchor contract auditable in one place: every built-in carries the
//! `Hi!` greeting anchor and the `🍽️` section anchor the splicer keys on,
//! and uses a literal `X` wherever a mail-merge field goes.
//!
//! Custom templates (loaded from a file) are free to omit the anchors — the
//! splicer then silently keeps their original intro.

/// The mail-merge placeholder character used by the built-in templates.
pub const MERGE_PLACEHOLDER: char = 'X';

/// In-store taste-test campaign template.
pub const IN_STORE_PASTA_TASTE_TEST: &str = r#"In-Store Pasta X – You've Been Selected! 🍝

Hi!

We're delighted to let you know that you've been selected to take part in our latest In-Store X, for which you'll receive £X upon completion.

🍽️ Important:
* This is an in-store taste testing task, so you must visit a X
* You must purchase the X specified in the task — failure to do so may result in non-payment.

📅 Deadline: X  (If you need an extension, please reach out — we're happy to help.)

💡 Before you begin: Make sure to check the map to confirm you're visiting an eligible Sainsbury's store before heading out.

📋 Here are the links to your task briefs (please complete them in order or you will not be paid):

1. Instructions Brief
2. In Store – Taste Test
3. At Home – Pre-Cooking
4. At Home – Post-Cooking

If you experience any technical issues (e.g. broken uploads or app errors), please check our FAQs first — most common questions are answered there.

📩 Still need help? Email me at support@smg.com and include your reference code: X so I can assist you faster."#;

/// Generic in-store campaign template.
pub const GENERIC_IN_STORE_TASK: &str = r#"In-Store X – You've Been Selected!

Hi!

We're delighted to let you know that you've been selected to take part in our latest In-Store X, for which you'll receive £X upon completion.

🍽️ Important:
* This is an in-store task, so you must visit a X
* You must complete all required activities specified in the task — failure to do so may result in non-payment.

📅 Deadline: X  (If you need an extension, please reach out — we're happy to help.)

📋 Here are the links to your task briefs (please complete them in order or you will not be paid):

1. Instructions Brief
2. In Store Task

If you experience any technical issues (e.g. broken uploads or app errors), please check our FAQs first — most common questions are answered there.

📩 Still need help? Email me at support@smg.com and include your reference code: X so I can assist you faster."#;

/// (name, text) pairs of every built-in, in menu order.
const BUILTINS: [(&str, &str); 2] = [
    ("In-Store Pasta Taste Test", IN_STORE_PASTA_TASTE_TEST),
    ("Generic In-Store Task", GENERIC_IN_STORE_TASK),
];

/// Names of the built-in templates, in menu order.
pub fn builtin_names() -> Vec<&'static str> {
    BUILTINS.iter().map(|(name, _)| *name).collect()
}

/// Look up a built-in template by name (case-insensitive).
pub fn builtin(name: &str) -> Option<&'static str> {
    BUILTINS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name.trim()))
        .map(|(_, text)| *text)
}
