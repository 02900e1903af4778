use thiserror::Error;

pub mod profile {
    pub const OWNER: &str = "Anant Bhardwaj";
    pub const HEADLINE: &str = "Hi, I'm ANANT BHARDWAJ";
    pub const ROLE: &str = "Full Stack Developer";
    pub const PHOTO: &str = "/images/about.svg";
    pub const ABOUT_BLURB: &str = "I'm a passionate Full Stack Developer with 1 year of experience in building web applications. I love turning complex problems into simple, beautiful, and intuitive solutions.";
    pub const PROJECTS_BLURB: &str = "Here are some of my recent projects that showcase my skills and experience in building complex applications with modern technologies.";
    pub const CONTACT_BLURB: &str = "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your visions.";
    pub const CONNECT_BLURB: &str = "Feel free to reach out through any of these platforms. I typically respond within 24 hours.";
}

/// Every glyph the site renders, mapped to an icon font class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Code,
    Server,
    Mobile,
    Database,
    GraduationCap,
    Briefcase,
    Award,
    Github,
    Linkedin,
    Twitter,
    Envelope,
    ExternalLink,
    Search,
    Close,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Icon::Code => "fa-solid fa-code",
            Icon::Server => "fa-solid fa-server",
            Icon::Mobile => "fa-solid fa-mobile-screen",
            Icon::Database => "fa-solid fa-database",
            Icon::GraduationCap => "fa-solid fa-graduation-cap",
            Icon::Briefcase => "fa-solid fa-briefcase",
            Icon::Award => "fa-solid fa-award",
            Icon::Github => "fa-brands fa-github",
            Icon::Linkedin => "fa-brands fa-linkedin",
            Icon::Twitter => "fa-brands fa-twitter",
            Icon::Envelope => "fa-solid fa-envelope",
            Icon::ExternalLink => "fa-solid fa-up-right-from-square",
            Icon::Search => "fa-solid fa-magnifying-glass",
            Icon::Close => "fa-solid fa-xmark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillEntry {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub icon: Icon,
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub github: &'static str,
    pub live: &'static str,
    pub highlights: &'static [&'static str],
    pub long_description: &'static str,
}

impl ProjectRecord {
    /// Case-insensitive substring match against the title or any tag.
    /// An empty needle matches everything.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("No project titled '{0}'")]
    UnknownProject(String),
}

pub fn project_by_title(
    catalog: &'static [ProjectRecord],
    title: &str,
) -> Result<&'static ProjectRecord, ContentError> {
    catalog
        .iter()
        .find(|p| p.title == title)
        .ok_or_else(|| ContentError::UnknownProject(title.to_string()))
}

pub fn copyright_notice(year: i32) -> String {
    format!("© {year} {}. All rights reserved.", profile::OWNER)
}

pub static NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Home",
        href: "#",
    },
    NavLink {
        label: "About",
        href: "#about",
    },
    NavLink {
        label: "Projects",
        href: "#projects",
    },
    NavLink {
        label: "Contact",
        href: "#contact",
    },
];

pub static HERO_LINKS: [SocialLink; 3] = [
    SocialLink {
        icon: Icon::Github,
        label: "GitHub",
        url: "https://github.com/Anantbhardwaj2003",
    },
    SocialLink {
        icon: Icon::Linkedin,
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/anant-bhardwaj-b34417292/",
    },
    SocialLink {
        icon: Icon::Envelope,
        label: "Email",
        url: "mailto:araabh6565@gmail.com",
    },
];

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        icon: Icon::Github,
        label: "GitHub",
        url: "https://github.com/Anantbhardwaj2003",
    },
    SocialLink {
        icon: Icon::Linkedin,
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/anant-bhardwaj-b34417292/",
    },
    SocialLink {
        icon: Icon::Twitter,
        label: "Twitter",
        url: "https://x.com/home",
    },
];

pub static SKILLS: [SkillEntry; 4] = [
    SkillEntry {
        icon: Icon::Code,
        title: "Frontend Development",
        description: "Expertise in React, Tailwind and modern JavaScript. Creating responsive and interactive user interfaces.",
        technologies: &["React", "TypeScript", "Tailwind CSS"],
    },
    SkillEntry {
        icon: Icon::Server,
        title: "Backend Development",
        description: "Building scalable server-side applications and RESTful APIs.",
        technologies: &["Python", "Java"],
    },
    SkillEntry {
        icon: Icon::Mobile,
        title: "Mobile-Development",
        description: "Developing cross-platform mobile applications with modern frameworks.",
        technologies: &["Flutter"],
    },
    SkillEntry {
        icon: Icon::Database,
        title: "Database Management",
        description: "Designing and optimizing database structures for performance.",
        technologies: &["PostgreSQL", "MySQL"],
    },
];

pub static TIMELINE: [TimelineEntry; 4] = [
    TimelineEntry {
        icon: Icon::GraduationCap,
        year: "2018-2019",
        title: "10th Class",
        description: "Completed 10th class from Modern International Sr. Sec. School",
    },
    TimelineEntry {
        icon: Icon::Briefcase,
        year: "2020-2021",
        title: "12th Class",
        description: "Completed 12th class from Modern International Sr. Sec. School",
    },
    TimelineEntry {
        icon: Icon::Award,
        year: "2021-2024",
        title: "Bachelor Degree in Computer Science",
        description: "Completed graduation from Bhaskaracharya College of Applied Sciences (DU)",
    },
    TimelineEntry {
        icon: Icon::Award,
        year: "2024-2025",
        title: "Minor in AI",
        description: "Pursuing Course from IIT ROPAR",
    },
];

pub static PROJECTS: [ProjectRecord; 3] = [
    ProjectRecord {
        title: "Food-Website",
        description: "A full-featured Food-Website with proper menu, cart system and payment method",
        image: "/images/header_img.svg",
        tags: &["React", "Tailwind.Css"],
        github: "https://github.com/Anantbhardwaj2003/Food-delivery-website",
        live: "https://food-pieces.netlify.app/",
        highlights: &[
            "Implemented well-developed frontend",
            "Add to Cart Functionality",
            "Payment Interface",
        ],
        long_description: "A well defind food-website using multiple functionalities and user interactive website which is easy to use and interact with it more effciently.",
    },
    ProjectRecord {
        title: "Ezymetrics-Dashboard",
        description: "A Dashboard system with real-time updates of stocks,lifetime revenue,orders and charts using recharts with interactive dashboard2",
        image: "/images/dashboard.svg",
        tags: &["React", "Tailwind", "Recharts"],
        github: "https://github.com/Anantbhardwaj2003/frontend",
        live: "https://dashboard-ezymetrics.netlify.app/",
        highlights: &[
            "Real-time collaboration",
            "Appealing Dashboard",
            "Team chat functionality",
            "Performance optimization",
        ],
        long_description: "A powerful task management system designed for remote teams. Includes features like real-time updates, revenue, team chat, and orders. The system is optimized for performance and scalability.",
    },
    ProjectRecord {
        title: "Portfolio",
        description: "A descriptive portfolio with all skills and projects.",
        image: "/images/portfolio.svg",
        tags: &["React", "Tailwind"],
        github: "https://github.com/Anantbhardwaj2003/Portfolio",
        live: "https://portfolio-ab-1.netlify.app/",
        highlights: &["User friendly website", "Skills and Projects Showcase"],
        long_description: "A well-designed portfolio using React.js, animations and Tailwind",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_titles_are_unique() {
        let titles = PROJECTS.iter().map(|p| p.title).collect::<HashSet<_>>();
        assert_eq!(titles.len(), PROJECTS.len());
    }

    #[test]
    fn test_project_matches_title_and_tags() {
        let dashboard = &PROJECTS[1];
        assert!(dashboard.matches(""));
        assert!(dashboard.matches("EZY"));
        assert!(dashboard.matches("recharts"));
        assert!(dashboard.matches("wind"));
        assert!(!dashboard.matches("flutter"));
    }

    #[test]
    fn test_project_by_title() {
        let p = project_by_title(&PROJECTS, "Portfolio").expect("Portfolio should exist");
        assert_eq!(p.live, "https://portfolio-ab-1.netlify.app/");

        // lookup is exact, not a filter
        assert_eq!(
            project_by_title(&PROJECTS, "portfolio"),
            Err(ContentError::UnknownProject("portfolio".to_string()))
        );
    }

    #[test]
    fn test_outbound_links_are_absolute() {
        let urls = HERO_LINKS
            .iter()
            .chain(SOCIAL_LINKS.iter())
            .map(|l| l.url)
            .chain(PROJECTS.iter().flat_map(|p| [p.github, p.live]));
        for url in urls {
            assert!(
                url.starts_with("https://") || url.starts_with("mailto:"),
                "unexpected link: {url}"
            );
        }
    }

    #[test]
    fn test_copyright_notice_uses_given_year() {
        assert_eq!(
            copyright_notice(2031),
            "© 2031 Anant Bhardwaj. All rights reserved."
        );
    }

    #[test]
    fn test_nav_links_target_sections() {
        let hrefs = NAV_LINKS.iter().map(|l| l.href).collect::<Vec<_>>();
        assert_eq!(hrefs, vec!["#", "#about", "#projects", "#contact"]);
    }
}
