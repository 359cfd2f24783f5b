use bevy::log::warn;
use bevy::prelude::Resource;
use serde::Deserialize;
use stargen::StarfieldSettings;

/// Everything the sections display, loaded from `assets/portfolio.toml`.
///
/// The core never inspects this beyond handing it to the section builders;
/// it is presentation data. Every field has a built-in default so a partial
/// file (or none at all) still yields a complete page.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub about: About,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub experience: Vec<Job>,
    pub contact: Vec<ContactLink>,
    pub starfield: StarfieldSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub greeting: String,
    pub name: String,
    pub tagline: String,
    pub call_to_action: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct About {
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub tech: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    pub role: String,
    pub company: String,
    pub period: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

impl PortfolioContent {
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let parsed: PortfolioContent = toml::from_str(&content)?;
        Ok(parsed)
    }

    pub fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(content) => content,
            Err(err) => {
                warn!("failed to load {path}: {err}; using built-in content");
                Self::default()
            }
        }
    }
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            about: About::default(),
            skills: default_skills(),
            projects: default_projects(),
            experience: default_experience(),
            contact: default_contact(),
            starfield: StarfieldSettings::default(),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            greeting: "Hi there".into(),
            name: "I am Nova Ray".into(),
            tagline: "A Frontend Developer".into(),
            call_to_action: "Explore the Portfolio".into(),
        }
    }
}

impl Default for About {
    fn default() -> Self {
        Self {
            paragraphs: vec![
                "Greetings, earthlings! I'm a web developer with a knack for \
                 building out-of-this-world digital experiences."
                    .into(),
                "When I'm not coding you can find me stargazing, playing retro \
                 video games, or tinkering with a ham radio."
                    .into(),
            ],
        }
    }
}

fn default_skills() -> Vec<SkillGroup> {
    vec![
        SkillGroup {
            name: "Frontend Development".into(),
            skills: vec!["React".into(), "Next.js".into()],
        },
        SkillGroup {
            name: "Backend Development".into(),
            skills: vec!["Node.js".into(), "Express".into(), "Firebase".into()],
        },
        SkillGroup {
            name: "Languages".into(),
            skills: vec![
                "Rust".into(),
                "TypeScript".into(),
                "Python".into(),
                "C++".into(),
            ],
        },
        SkillGroup {
            name: "Design".into(),
            skills: vec!["Tailwind CSS".into(), "Framer Motion".into()],
        },
    ]
}

fn default_projects() -> Vec<Project> {
    vec![
        Project {
            name: "NoteNinja".into(),
            description: "AI powered notes app".into(),
            tech: vec!["React".into(), "TypeScript".into(), "Firebase".into()],
            link: "https://example.com/noteninja".into(),
        },
        Project {
            name: "Triply".into(),
            description: "AI powered travel planner".into(),
            tech: vec!["React".into(), "Google Cloud".into()],
            link: "https://example.com/triply".into(),
        },
        Project {
            name: "MovieHub".into(),
            description: "Search your favorite movies".into(),
            tech: vec!["React".into(), "OMDb API".into()],
            link: "https://example.com/moviehub".into(),
        },
        Project {
            name: "JobFinder".into(),
            description: "Search your dream job".into(),
            tech: vec!["React".into(), "Firebase".into()],
            link: "https://example.com/jobfinder".into(),
        },
    ]
}

fn default_experience() -> Vec<Job> {
    vec![Job {
        role: "Frontend Developer".into(),
        company: "RefRelay".into(),
        period: "2024 - Present".into(),
        achievements: vec![
            "Developed and maintained responsive UI pages.".into(),
            "Integrated global state management across components.".into(),
            "Collaborated with backend teams on interactive components.".into(),
        ],
    }]
}

fn default_contact() -> Vec<ContactLink> {
    vec![
        ContactLink {
            label: "GitHub".into(),
            url: "https://github.com".into(),
        },
        ContactLink {
            label: "LinkedIn".into(),
            url: "https://linkedin.com".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_content_file_parses() {
        let content: PortfolioContent =
            toml::from_str(include_str!("../assets/portfolio.toml")).unwrap();
        assert!(!content.profile.name.is_empty());
        assert!(!content.skills.is_empty());
        assert!(!content.projects.is_empty());
        assert!(!content.experience.is_empty());
        assert!(!content.contact.is_empty());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let content = PortfolioContent::load_or_default("does/not/exist.toml");
        assert_eq!(content.profile.call_to_action, "Explore the Portfolio");
        assert_eq!(content.starfield.count, stargen::constants::DEFAULT_STAR_COUNT);
    }

    #[test]
    fn partial_file_keeps_field_defaults() {
        let content: PortfolioContent = toml::from_str(
            r#"
            [profile]
            name = "I am Someone Else"

            [starfield]
            count = 1234
            "#,
        )
        .unwrap();
        assert_eq!(content.profile.name, "I am Someone Else");
        // unspecified profile fields and sections fall back
        assert_eq!(content.profile.call_to_action, "Explore the Portfolio");
        assert!(!content.projects.is_empty());
        assert_eq!(content.starfield.count, 1234);
        assert_eq!(
            content.starfield.radius,
            stargen::constants::DEFAULT_FIELD_RADIUS
        );
    }
}
