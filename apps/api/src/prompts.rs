// Prompt Builder — the fixed resume extraction template.
// The template carries exactly one placeholder, filled with the full document text.

pub const RESUME_TEXT_PLACEHOLDER: &str = "{resume_text}";

pub const RESUME_EXTRACTION_PROMPT: &str = r#"You are an expert resume parser. Given the resume text, extract the following fields and return a single valid JSON object:

{
  "Name": "...",
  "Email": "...",
  "Phone": "...",
  "LinkedIn": "...",
  "Skills": [...],
  "Education": [...],
  "Experience": [...],
  "Projects": [...],
  "Certifications": [...],
  "Languages": [...]
}

Rules:
- If Name, Email, Phone or LinkedIn cannot be found, set its value to "No idea".
- If a list field cannot be found, set its value to an empty array [].
- Return ONLY valid JSON (no extra commentary).
- Keep lists as arrays, and keep Experience/Projects as arrays of short strings.

Resume text:
{resume_text}
"#;

/// Substitutes `document_text` into the extraction template, verbatim.
pub fn build_prompt(document_text: &str) -> String {
    RESUME_EXTRACTION_PROMPT.replacen(RESUME_TEXT_PLACEHOLDER, document_text, 1)
}
