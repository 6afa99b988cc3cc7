//! Fallback Generator — the template roadmap served when the model's answer is unusable.
//!
//! Only the domain is interpolated. Output is fully deterministic.

use indexmap::IndexMap;

use crate::roadmap::models::{
    Certification, Internship, LearningResource, ResourceCategory, RoadmapResult, SemesterPlan,
};

const COURSE_LINK: &str = "https://www.coursera.org";
const PRACTICE_LINK: &str = "https://github.com/explore";
const DOCS_LINK: &str = "https://developer.mozilla.org";

pub fn fallback_roadmap(domain: &str) -> RoadmapResult {
    let d = domain;

    let semester_plan = IndexMap::from([
        (
            "semester1".to_string(),
            SemesterPlan {
                title: format!("{d} Foundations"),
                description: format!(
                    "Build a solid grounding in the core concepts and tools of {d}."
                ),
                skills: vec![
                    format!("{d} fundamentals"),
                    "Version control with Git".to_string(),
                    "Problem solving and data structures".to_string(),
                ],
                projects: vec![
                    format!("Beginner {d} project"),
                    format!("Personal notes site documenting your {d} learning"),
                ],
            },
        ),
        (
            "semester2".to_string(),
            SemesterPlan {
                title: format!("Applied {d}"),
                description: format!(
                    "Apply {d} concepts to realistic problems and start collaborating."
                ),
                skills: vec![
                    format!("Intermediate {d} techniques"),
                    "Testing and debugging".to_string(),
                    "Working in a team codebase".to_string(),
                ],
                projects: vec![
                    format!("End-to-end {d} application"),
                    format!("Open-source contribution in the {d} ecosystem"),
                ],
            },
        ),
        (
            "semester3".to_string(),
            SemesterPlan {
                title: format!("Advanced {d}"),
                description: format!(
                    "Go deeper into {d} and learn how it is practised in industry."
                ),
                skills: vec![
                    format!("Advanced {d} concepts"),
                    "System design basics".to_string(),
                    "Performance and reliability".to_string(),
                ],
                projects: vec![
                    format!("Production-grade {d} project"),
                    format!("{d} case study write-up"),
                ],
            },
        ),
        (
            "semester4".to_string(),
            SemesterPlan {
                title: format!("{d} Specialization and Career Prep"),
                description: format!(
                    "Specialize within {d}, polish your portfolio and prepare for interviews."
                ),
                skills: vec![
                    format!("{d} specialization topic of your choice"),
                    "Technical interviewing".to_string(),
                    "Communicating your work".to_string(),
                ],
                projects: vec![
                    format!("Capstone {d} project"),
                    format!("{d} portfolio showcase"),
                ],
            },
        ),
    ]);

    let certifications = vec![
        Certification {
            name: format!("{d} Certification"),
            organization: "Industry-recognized certification provider".to_string(),
            description: format!("Validates your core {d} knowledge for recruiters."),
            timeline: "After completing the foundation semesters".to_string(),
        },
        Certification {
            name: format!("Advanced {d} Professional Certificate"),
            organization: "Industry-recognized certification provider".to_string(),
            description: format!("Demonstrates hands-on, job-ready {d} skills."),
            timeline: "Before final-year placements".to_string(),
        },
    ];

    let internships = vec![
        Internship {
            kind: format!("{d} Internship"),
            description: format!(
                "Look for roles where you ship real {d} work alongside experienced engineers."
            ),
            timeline: "Apply 3-6 months before the summer break".to_string(),
            companies: vec![
                "Google".to_string(),
                "Microsoft".to_string(),
                "Amazon".to_string(),
                "Early-stage startups".to_string(),
            ],
        },
        Internship {
            kind: format!("{d} Research Internship"),
            description: format!("Work with a faculty or lab group on an open {d} problem."),
            timeline: "Any semester, reach out to professors early".to_string(),
            companies: vec![
                "University research labs".to_string(),
                "Corporate research groups".to_string(),
            ],
        },
    ];

    let learning_resources = vec![
        ResourceCategory {
            category: "Online Courses".to_string(),
            resources: vec![LearningResource {
                name: format!("{d} Fundamentals Course"),
                kind: "Course".to_string(),
                description: format!("Structured introduction to {d}."),
                link: Some(COURSE_LINK.to_string()),
            }],
        },
        ResourceCategory {
            category: "Practice".to_string(),
            resources: vec![LearningResource {
                name: format!("{d} Open-Source Projects"),
                kind: "Platform".to_string(),
                description: format!("Read and contribute to real {d} codebases."),
                link: Some(PRACTICE_LINK.to_string()),
            }],
        },
        ResourceCategory {
            category: "Documentation".to_string(),
            resources: vec![LearningResource {
                name: format!("{d} Reference Documentation"),
                kind: "Documentation".to_string(),
                description: format!("Authoritative reference material for {d}."),
                link: Some(DOCS_LINK.to_string()),
            }],
        },
    ];

    let career_advice = format!(
        "Focus on building real {d} projects, share them publicly, and talk to seniors who \
         work in {d}. Consistent practice matters more than the number of courses you finish."
    );

    RoadmapResult {
        semester_plan,
        certifications,
        internships,
        learning_resources,
        career_advice,
    }
}
