// Prompt constants for roadmap generation.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::roadmap::models::RoadmapInput;

/// Roadmap prompt template. Replace `{domain}`, `{current_year}`,
/// `{experience_level}` and `{json_only}` before sending.
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"You are a career guidance AI. Generate a comprehensive, personalized career roadmap for a student with the following details:

Domain: {domain}
Current Year: {current_year}
Experience Level: {experience_level}

{json_only}

{
  "semesterPlan": {
    "semester1": {
      "title": "Semester 1 Focus",
      "description": "What to focus on in this semester",
      "skills": ["skill1", "skill2"],
      "projects": ["project1", "project2"]
    },
    "semester2": {
      "title": "Semester 2 Focus",
      "description": "What to focus on in this semester",
      "skills": ["skill1", "skill2"],
      "projects": ["project1", "project2"]
    }
  },
  "certifications": [
    {
      "name": "Certification Name",
      "organization": "Issuing Organization",
      "description": "Why this certification is valuable",
      "timeline": "When to take it"
    }
  ],
  "internships": [
    {
      "type": "Internship Type",
      "description": "What to look for",
      "timeline": "When to apply",
      "companies": ["Company 1", "Company 2"]
    }
  ],
  "learningResources": [
    {
      "category": "Resource Category",
      "resources": [
        {
          "name": "Resource Name",
          "type": "Course/Book/Platform",
          "description": "What you'll learn",
          "link": "URL if applicable"
        }
      ]
    }
  ],
  "careerAdvice": "General career advice and tips for this domain"
}

Provide practical, actionable steps tailored to the specific domain and experience level. Focus on real-world skills and resources."#;

/// Builds the roadmap prompt for a validated request.
pub fn build_roadmap_prompt(input: &RoadmapInput) -> String {
    render(
        ROADMAP_PROMPT_TEMPLATE,
        &[
            ("domain", input.domain.as_str()),
            ("current_year", input.current_year.as_str()),
            ("experience_level", input.experience_level.as_str()),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

/// Single-pass `{name}` substitution. Substituted values are never rescanned,
/// and braces that do not name a variable are copied through.
fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let candidate = &rest[start + 1..];
        let hit = vars.iter().find(|(name, _)| {
            candidate.starts_with(name) && candidate[name.len()..].starts_with('}')
        });
        match hit {
            Some((name, value)) => {
                out.push_str(value);
                rest = &candidate[name.len() + 1..];
            }
            None => {
                out.push('{');
                rest = candidate;
            }
        }
    }
    out.push_str(rest);
    out
}
