// src/catalog.rs
//! Fixed role, skill and location lists shared by every view

/// Sent in place of an empty skill selection when refreshing the lab's ranking.
pub const DEFAULT_MATCH_SKILLS: [&str; 2] = ["Python", "SQL"];

pub const DEFAULT_TOP_N: u32 = 10;
pub const MIN_TOP_N: u32 = 5;
pub const MAX_TOP_N: u32 = 50;

pub const DEFAULT_ROLE: &str = "Data Scientist";
pub const DEFAULT_LOCATION: &str = "Remote";
pub const DEFAULT_EXPERIENCE_YEARS: u32 = 5;
pub const MAX_EXPERIENCE_YEARS: u32 = 30;

pub const JOB_ROLES: [&str; 30] = [
    "Data Scientist",
    "ML Engineer",
    "Software Engineer",
    "Data Analyst",
    "Backend Developer",
    "Frontend Developer",
    "Full Stack Developer",
    "DevOps Engineer",
    "Cloud Architect",
    "AI Researcher",
    "Data Engineer",
    "Product Manager (Tech)",
    "UX Designer",
    "Cybersecurity Analyst",
    "Blockchain Developer",
    "Mobile App Developer",
    "Embedded Systems Engineer",
    "QA Automation Engineer",
    "NOC Engineer",
    "Solutions Architect",
    "Technical Support Engineer",
    "Database Administrator",
    "Systems Analyst",
    "Game Developer",
    "AR/VR Developer",
    "Big Data Engineer",
    "Scrum Master",
    "Site Reliability Engineer",
    "Computer Vision Engineer",
    "NLP Scientist",
];

pub const LOCATIONS: [&str; 10] = [
    "Remote",
    "Bangalore, India",
    "San Francisco, CA",
    "Austin, TX",
    "London, UK",
    "Berlin, Germany",
    "Singapore",
    "New York, NY",
    "Sydney, Australia",
    "Toronto, Canada",
];

pub const SKILL_CATEGORIES: [(&str, &[&str]); 6] = [
    (
        "Languages",
        &[
            "Python", "Java", "C++", "C#", "JavaScript", "TypeScript", "Go", "Rust", "Swift",
            "Kotlin", "PHP", "Ruby", "R", "SQL", "HTML/CSS", "Shell Scripting",
        ],
    ),
    (
        "Data Science & AI",
        &[
            "Machine Learning", "Deep Learning", "NLP", "Computer Vision", "TensorFlow",
            "PyTorch", "Pandas", "NumPy", "Scikit-learn", "Keras", "OpenCV", "Generative AI",
            "LLMs", "Data Visualization", "Tableau", "PowerBI",
        ],
    ),
    (
        "Web & Mobile",
        &[
            "React", "Angular", "Vue.js", "Node.js", "Django", "Flask", "Spring Boot",
            "ASP.NET", "Flutter", "React Native", "Android", "iOS", "GraphQL", "REST APIs",
            "Tailwind CSS",
        ],
    ),
    (
        "Cloud & DevOps",
        &[
            "AWS", "Azure", "Google Cloud", "Docker", "Kubernetes", "Jenkins", "Terraform",
            "Ansible", "CI/CD", "Linux", "Nginx", "Microservices", "Serverless",
        ],
    ),
    (
        "Tools & Platforms",
        &[
            "Git", "Jira", "Confluence", "Slack", "Figma", "Adobe XD", "Unity",
            "Unreal Engine", "Blender", "Salesforce", "SAP",
        ],
    ),
    (
        "Soft Skills",
        &[
            "Communication", "Leadership", "Teamwork", "Problem Solving", "Critical Thinking",
            "Time Management", "Project Management", "Agile", "Scrum", "Adaptability",
            "Creativity",
        ],
    ),
];

/// Every skill in the taxonomy, in category order.
pub fn all_skills() -> Vec<&'static str> {
    SKILL_CATEGORIES
        .iter()
        .flat_map(|(_, skills)| skills.iter().copied())
        .collect()
}

pub fn default_match_skills() -> Vec<String> {
    DEFAULT_MATCH_SKILLS.iter().map(|s| s.to_string()).collect()
}

pub fn is_known_role(role: &str) -> bool {
    JOB_ROLES.contains(&role)
}

/// Toggle `item` in an ordered selection: remove it if present, append otherwise.
pub fn toggle_in(selection: &mut Vec<String>, item: &str) {
    if let Some(pos) = selection.iter().position(|s| s == item) {
        selection.remove(pos);
    } else {
        selection.push(item.to_string());
    }
}
