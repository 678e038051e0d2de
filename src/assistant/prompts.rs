// Prompt templates for the onboarding assistant
//
// Every prompt embeds its instructions, grounding context, and question in
// one text block; there is no structured request schema beyond this.

use crate::domain::section::InductionSection;

/// Concatenates every section's title and content into one context block
pub fn build_context(sections: &[InductionSection]) -> String {
    sections
        .iter()
        .map(|s| format!("{}: {}", s.title, s.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Prompt for answering an employee question grounded in the curriculum
pub fn induction_answer(question: &str, sections: &[InductionSection]) -> String {
    format!(
        "You are the AI Assistant for Best Pacific Textiles Lanka Private Limited.\n\
         Use the following company induction information to answer the employee's question.\n\
         If the answer isn't in the context, politely say you don't have that specific \
         information and suggest they contact HR.\n\n\
         Company Info:\n\
         {context}\n\n\
         Question: {question}",
        context = build_context(sections),
    )
}

/// Prompt for a two-bullet summary of a single section
pub fn section_summary(section: &InductionSection) -> String {
    format!(
        "Summarize this company induction section in 2 bullet points:\n\n{}",
        section.content,
    )
}
