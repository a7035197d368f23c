//! Prompt construction for the two report drafts.
//!
//! Both prompts embed the name and the numbered QA block; they differ only in
//! the structure the model is asked to follow.

use crate::models::report::ReportKind;
use crate::models::request::{QaItem, ReportRequest};

const CLIENT_INSTRUCTIONS: &str = r#"You are DreamScape AI GPT.

Generate a Client Assessment Report using this structure:
- No greeting (e.g., don't use "Dear")
- No signature (e.g., avoid "Warm regards")
- Tone should be human, professional, and warm

STRUCTURE:

1. Opening paragraph (begin with the name and reflectively set the tone)

2. For each question:
Q: [insert question]
- Client Response: (verbatim)
- DreamScape AI Reflection: (thoughtful response)

3. Closing Summary:
- Bullet list: What the Neuro Change Method Can Do
- Paragraph: Why Now, Why You, and Why a Neuro Change Practitioner?"#;

const PRACTITIONER_INSTRUCTIONS: &str = r#"You are DreamScape AI GPT.

Generate a Practitioner Case Report using this structure:
1. Client Summary
2. Transformation Theme
3. 4 Phases:
   - Phase Name
   - Focus
   - Tools
   - Goal
4. 12-Week Milestone Table (Respond as valid HTML <table> with 3 columns: Milestone | Target Week | Tools & Focus)
5. Practitioner Notes
6. Projected Outcomes (as bullet list)
7. Best Practices (as bullet list)"#;

/// The two prompts issued for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub client: String,
    pub practitioner: String,
}

/// Render the QA pairs as numbered `Qn:`/`An:` blocks separated by a blank line.
pub fn format_qa(items: &[QaItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "Q{i}: {q}\nA{i}: {a}",
                i = item.index,
                q = item.question,
                a = item.answer
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn build_prompt(kind: ReportKind, request: &ReportRequest) -> String {
    let instructions = match kind {
        ReportKind::Client => CLIENT_INSTRUCTIONS,
        ReportKind::Practitioner => PRACTITIONER_INSTRUCTIONS,
    };
    let prompt = format!(
        "{instructions}\n\nName: {name}\n\n{qa}",
        name = request.name(),
        qa = format_qa(request.qa())
    );
    prompt.trim().to_string()
}

pub fn build_prompts(request: &ReportRequest) -> PromptPair {
    PromptPair {
        client: build_prompt(ReportKind::Client, request),
        practitioner: build_prompt(ReportKind::Practitioner, request),
    }
}
