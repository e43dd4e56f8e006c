//! The content catalog: every piece of copy the site renders.
//!
//! Everything except the blog posts is a literal in this file. Posts live as
//! markdown files under `blog/` and are parsed when the catalog is first
//! touched. The catalog is built once per process and only ever handed out by
//! shared reference.

use std::collections::HashSet;
use std::sync::LazyLock;

use thiserror::Error;

use crate::blog::{load_posts, BlogPost, PostId};

pub static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    let catalog = Catalog::load().expect("embedded blog posts should form a valid catalog");
    log::info!(
        "catalog loaded: {} posts, {} projects, {} skill categories",
        catalog.posts.len(),
        catalog.projects.len(),
        catalog.skill_categories.len()
    );
    catalog
});

/// Process-wide catalog.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Couldn't parse blog post {file}")]
    Parse { file: String },
    #[error("Blog post id {0} is used more than once")]
    DuplicateId(PostId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub greeting: &'static str,
    pub name: &'static str,
    pub roles: &'static [&'static str],
    pub tagline: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutFeature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct About {
    pub headline: &'static str,
    pub paragraphs: &'static [&'static str],
    pub features: &'static [AboutFeature],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationRecord {
    pub institution: &'static str,
    pub degree: &'static str,
    pub dates: &'static str,
    pub summary: &'static str,
    pub coursework: &'static [&'static str],
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed level out of 100.
    pub proficiency: u8,
    pub detail: Option<&'static str>,
}

impl Skill {
    pub fn percent(&self) -> u8 {
        self.proficiency.min(100)
    }

    pub fn label(&self) -> String {
        format!("{}%", self.percent())
    }

    /// CSS width of the filled part of the bar. The bar stays empty until its
    /// section has been revealed so the fill animates in.
    pub fn bar_width(&self, revealed: bool) -> String {
        if revealed {
            format!("{}%", self.percent())
        } else {
            "0%".to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub gradient: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowcaseCard {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub offset: (f64, f64),
}

impl ShowcaseCard {
    /// Horizontal shift in px while some card is hovered. Only the cards that
    /// are *not* hovered move out of the way.
    pub fn shift(&self, hovered: Option<&str>) -> f64 {
        match hovered {
            Some(id) if id != self.id => self.offset.0 * 0.5,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
    pub source_url: &'static str,
    pub features: &'static [&'static str],
    pub gradient: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
    pub external: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub headline: &'static str,
    pub blurb: &'static str,
    pub links: &'static [ContactLink],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    hero: Hero,
    about: About,
    education: &'static [EducationRecord],
    skill_categories: &'static [SkillCategory],
    other_technologies: &'static [&'static str],
    showcase: &'static [ShowcaseCard],
    projects: &'static [Project],
    contact: Contact,
    posts: Vec<BlogPost>,
}

impl Catalog {
    pub fn load() -> Result<Self, CatalogError> {
        Self::with_posts(load_posts()?)
    }

    /// Builds a catalog around an explicit post list, rejecting repeated ids.
    pub fn with_posts(posts: Vec<BlogPost>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        if let Some(dup) = posts.iter().find(|p| !seen.insert(p.id)) {
            return Err(CatalogError::DuplicateId(dup.id));
        }
        Ok(Self {
            hero: HERO,
            about: ABOUT,
            education: EDUCATION,
            skill_categories: SKILL_CATEGORIES,
            other_technologies: OTHER_TECHNOLOGIES,
            showcase: SHOWCASE,
            projects: PROJECTS,
            contact: CONTACT,
            posts,
        })
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn about(&self) -> &About {
        &self.about
    }

    pub fn education(&self) -> &[EducationRecord] {
        self.education
    }

    pub fn skill_categories(&self) -> &[SkillCategory] {
        self.skill_categories
    }

    pub fn other_technologies(&self) -> &[&'static str] {
        self.other_technologies
    }

    pub fn showcase(&self) -> &[ShowcaseCard] {
        self.showcase
    }

    pub fn projects(&self) -> &[Project] {
        self.projects
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn post(&self, id: PostId) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.id == id)
    }
}

const HERO: Hero = Hero {
    greeting: "Hi there! 👋",
    name: "Ravisha Abeysekara",
    roles: &[
        "Software Engineering Undergraduate",
        "Full-Stack Developer",
        "MERN Stack Specialist",
        "UI/UX Enthusiast",
    ],
    tagline: "I build scalable full-stack applications with modern technologies, focusing on clean code, exceptional user experiences, and robust architecture.",
};

const ABOUT: About = About {
    headline: "Software Engineering Undergraduate",
    paragraphs: &[
        "I'm a Software Engineering undergraduate at SLTC Research University (2023–2027) who has developed scalable web applications that improve usability and system performance. Through applying MERN stack, React, Next.js, and UI/UX principles, I've successfully solved complex problems in both academic and personal projects.",
        "My passion lies in creating efficient, user-centered solutions that bridge the gap between technical complexity and intuitive design. I'm driven to bring the same impact and innovation to my role as a Software Engineer Intern, contributing to meaningful projects that make a difference.",
    ],
    features: &[
        AboutFeature {
            icon: "💻",
            title: "Full-Stack Development",
            description: "Proficient in MERN stack with modern frameworks and tools",
        },
        AboutFeature {
            icon: "🤝",
            title: "Collaborative",
            description: "Strong teamwork and communication skills in project environments",
        },
        AboutFeature {
            icon: "💡",
            title: "Problem Solver",
            description: "Analytical approach to complex technical challenges",
        },
        AboutFeature {
            icon: "🎯",
            title: "Results Driven",
            description: "Focus on delivering impactful solutions and measurable improvements",
        },
    ],
};

const EDUCATION: &[EducationRecord] = &[EducationRecord {
    institution: "SLTC Research University",
    degree: "BSc (Hons) in Software Engineering",
    dates: "2023 - 2027 (Expected)",
    summary: "A comprehensive 4-year program focusing on modern software development practices, system design, and emerging technologies. The curriculum combines theoretical foundations with hands-on project experience, preparing students for the evolving demands of the software industry.",
    coursework: &[
        "Data Structures & Algorithms",
        "Object-Oriented Programming",
        "Software Architecture",
        "Business Analysis",
        "Software Engineering Methods",
        "Database Management Systems",
        "Web Technologies",
        "Systems Analysis & Design",
    ],
    achievements: &[
        "Strong foundation in software engineering principles and methodologies",
        "Hands-on experience with modern development frameworks and tools",
        "Project-based learning with real-world application development",
        "Focus on clean code practices and scalable system architecture",
    ],
}];

const fn skill(name: &'static str, proficiency: u8) -> Skill {
    Skill {
        name,
        proficiency,
        detail: None,
    }
}

const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend Development",
        gradient: "from-blue-500 to-cyan-500",
        skills: &[
            skill("React.js", 90),
            skill("Next.js", 85),
            skill("TypeScript", 88),
            skill("JavaScript", 92),
            skill("Tailwind CSS", 90),
            skill("Shadcn UI", 85),
        ],
    },
    SkillCategory {
        title: "Backend Development",
        gradient: "from-green-500 to-emerald-500",
        skills: &[
            skill("Node.js", 88),
            skill("Express.js", 85),
            skill("MongoDB", 82),
            skill("SQL", 78),
            skill("REST APIs", 90),
            skill("Python", 75),
        ],
    },
    SkillCategory {
        title: "Tools & Cloud",
        gradient: "from-purple-500 to-pink-500",
        skills: &[
            skill("Git & GitHub", 90),
            skill("Vercel", 88),
            skill("Render", 82),
            skill("Cloudflare R2", 80),
            skill("AWS S3", 78),
            skill("Java", 75),
        ],
    },
];

const OTHER_TECHNOLOGIES: &[&str] = &[
    "Clerk Auth",
    "Stripe",
    "Framer Motion",
    "React Query",
    "Vite",
    "Clean Architecture",
    "Responsive Design",
    "UI/UX Design",
    "Problem Solving",
    "Team Collaboration",
];

const SHOWCASE: &[ShowcaseCard] = &[
    ShowcaseCard {
        id: "frontend",
        icon: "⌨️",
        title: "Frontend",
        subtitle: "React, Next.js, TypeScript",
        description: "Crafting pixel-perfect, responsive interfaces",
        offset: (-200.0, -100.0),
    },
    ShowcaseCard {
        id: "design",
        icon: "🎨",
        title: "UI/UX Design",
        subtitle: "Figma, Design Systems",
        description: "Creating intuitive user experiences",
        offset: (200.0, -50.0),
    },
    ShowcaseCard {
        id: "performance",
        icon: "⚡",
        title: "Performance",
        subtitle: "Optimization, Best Practices",
        description: "Building lightning-fast applications",
        offset: (-150.0, 100.0),
    },
    ShowcaseCard {
        id: "architecture",
        icon: "🧱",
        title: "Architecture",
        subtitle: "Clean Code, Scalability",
        description: "Designing maintainable systems",
        offset: (150.0, 80.0),
    },
];

const PROJECTS: &[Project] = &[
    Project {
        title: "Mebius - Digital Shopping Ecosystem",
        description: "A comprehensive e-commerce platform built with modern technologies. Features include user authentication, payment processing, admin dashboard, and cloud storage integration.",
        technologies: &[
            "Node.js",
            "Express",
            "TypeScript",
            "MongoDB",
            "Clerk Auth",
            "Stripe",
            "AWS S3",
            "React",
        ],
        live_url: "https://my-react-node-app.vercel.app",
        source_url: "https://github.com/ravishanamina174/my-react-node-app",
        features: &[
            "Full-stack architecture with clean code principles",
            "Secure authentication and authorization",
            "Payment processing with Stripe integration",
            "Cloud storage for media files",
            "Responsive admin dashboard",
            "REST API design and implementation",
        ],
        gradient: "from-purple-500 to-pink-500",
    },
    Project {
        title: "ParkNet - Smart Parking Management",
        description: "An intelligent parking management system with real-time IoT sensor simulation, interactive maps, and modern UI/UX design for smart city solutions.",
        technologies: &[
            "React",
            "TypeScript",
            "Clerk OAuth",
            "Google Maps API",
            "Vite",
            "Tailwind CSS",
            "Shadcn UI",
        ],
        live_url: "https://parknet-smarter-cities.vercel.app",
        source_url: "https://github.com/ravishanamina174/parknet-smarter-cities",
        features: &[
            "Real-time parking availability tracking",
            "IoT sensor simulation for smart parking",
            "Interactive Google Maps integration",
            "OAuth authentication with Clerk",
            "Protected routes and user management",
            "Responsive design with modern UI components",
        ],
        gradient: "from-blue-500 to-cyan-500",
    },
];

const CONTACT: Contact = Contact {
    headline: "Let's Work Together",
    blurb: "Whether you want to talk about a project, an internship opportunity, or just share an idea, I'd love to hear from you.",
    links: &[
        ContactLink {
            icon: "🐙",
            label: "GitHub",
            href: "https://github.com/ravishanamina174",
            external: true,
        },
        ContactLink {
            icon: "📝",
            label: "Read the blog",
            href: "/blog",
            external: false,
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads_embedded_posts() {
        let catalog = Catalog::load().expect("embedded posts should parse");
        assert_eq!(catalog.posts().len(), 3);
        let ids = catalog.posts().iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_projects_keep_display_order() {
        let titles = catalog()
            .projects()
            .iter()
            .map(|p| p.title)
            .collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec![
                "Mebius - Digital Shopping Ecosystem",
                "ParkNet - Smart Parking Management"
            ]
        );
    }

    #[test]
    fn test_skill_categories_keep_display_order() {
        let catalog = catalog();
        let titles = catalog
            .skill_categories()
            .iter()
            .map(|c| c.title)
            .collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec!["Frontend Development", "Backend Development", "Tools & Cloud"]
        );
        let backend = catalog.skill_categories()[1]
            .skills
            .iter()
            .map(|s| s.name)
            .collect::<Vec<_>>();
        assert_eq!(
            backend,
            vec!["Node.js", "Express.js", "MongoDB", "SQL", "REST APIs", "Python"]
        );
    }

    #[test]
    fn test_skill_bar_matches_label() {
        let mongo = skill("MongoDB", 82);
        assert_eq!(mongo.label(), "82%");
        assert_eq!(mongo.bar_width(true), "82%");
        assert_eq!(mongo.bar_width(false), "0%");
    }

    #[test]
    fn test_skill_proficiency_is_clamped() {
        let overdone = skill("Everything", 140);
        assert_eq!(overdone.percent(), 100);
        assert_eq!(overdone.label(), "100%");
        assert_eq!(overdone.bar_width(true), "100%");
    }

    #[test]
    fn test_post_lookup() {
        let catalog = catalog();
        let post = catalog.post(2).expect("post 2 should exist");
        assert_eq!(post.title, "Lessons from My First Backend Project");
        assert!(catalog.post(42).is_none());
    }

    #[test]
    fn test_duplicate_post_ids_rejected() {
        let mut posts = catalog().posts().to_vec();
        let mut copy = posts[0].clone();
        copy.title = "Another title".to_string();
        posts.push(copy);
        assert_eq!(
            Catalog::with_posts(posts),
            Err(CatalogError::DuplicateId(1))
        );
    }

    #[test]
    fn test_catalog_error_surfaces_through_question_mark() {
        fn start() -> Result<usize, Box<dyn std::error::Error>> {
            let post = catalog().posts()[0].clone();
            Ok(Catalog::with_posts(vec![post.clone(), post])?.posts().len())
        }
        let err = start().expect_err("duplicate ids should fail");
        assert_eq!(err.to_string(), "Blog post id 1 is used more than once");
    }

    #[test]
    fn test_showcase_shift_only_moves_other_cards() {
        let cards = catalog().showcase();
        let frontend = &cards[0];
        let design = &cards[1];

        assert_eq!(frontend.shift(None), 0.0);
        assert_eq!(frontend.shift(Some("frontend")), 0.0);
        assert_eq!(design.shift(Some("frontend")), 100.0);
        assert_eq!(frontend.shift(Some("design")), -100.0);
    }

    #[test]
    fn test_education_lists_are_ordered() {
        let record = &catalog().education()[0];
        assert_eq!(record.coursework.len(), 8);
        assert_eq!(record.coursework[0], "Data Structures & Algorithms");
        assert_eq!(record.coursework[7], "Systems Analysis & Design");
        assert_eq!(record.achievements.len(), 4);
    }
}
