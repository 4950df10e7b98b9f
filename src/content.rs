// SPDX-License-Identifier: MPL-2.0
//! Static portfolio content.
//!
//! Projects, skills, trophies and contact links are plain data rendered
//! into cards by the section views. Colors are expressed as an [`Accent`]
//! so the palette stays in `ui::design_tokens`.

/// Neon accent a piece of content is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Cyan,
    Blue,
    Purple,
    Gold,
}

impl Accent {
    /// Blue, purple, cyan repeating: the default rotation for lists.
    #[must_use]
    pub fn cycle(index: usize) -> Self {
        match index % 3 {
            0 => Accent::Blue,
            1 => Accent::Purple,
            _ => Accent::Cyan,
        }
    }
}

// =============================================================================
// Projects
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Single-glyph badge shown in the card corner.
    pub glyph: &'static str,
    pub accent: Accent,
}

pub const FULL_STACK_PROJECTS: [Project; 3] = [
    Project {
        title: "Certificate Generator",
        description: "Automated certificate generation system with customizable templates. \
                      Generates professional certificates from name, domain, and other \
                      parameters with real-time preview.",
        glyph: "✦",
        accent: Accent::Blue,
    },
    Project {
        title: "Student Helper Toolkit",
        description: "Comprehensive smart assistant with essential tools for students \
                      including calculator, reminder system, notes manager, and task scheduler.",
        glyph: "▣",
        accent: Accent::Purple,
    },
    Project {
        title: "Password Generator Extension",
        description: "Browser extension for generating secure passwords with customizable \
                      parameters. Features include password history, auto-save, and \
                      strength analyzer.",
        glyph: "⚿",
        accent: Accent::Cyan,
    },
];

pub const GAME_PROJECTS: [Project; 2] = [
    Project {
        title: "Idle Clicker Tycoon",
        description: "2D Tycoon Game built with Pygame featuring retro pixel art aesthetics, \
                      incremental progression system, and multiple upgrade paths. Collect \
                      coins, build your empire!",
        glyph: "◈",
        accent: Accent::Purple,
    },
    Project {
        title: "Claustrophobia: The One Way Exit",
        description: "Horror survival game built using Godot & Blender. Navigate through dark \
                      corridors, solve puzzles, and escape the nightmare. Features atmospheric \
                      lighting and sound design.",
        glyph: "☗",
        accent: Accent::Cyan,
    },
];

/// Lines printed by the full-stack terminal panel.
pub const TERMINAL_LINES: [&str; 4] = [
    "> Node.js Server Running...",
    "> Connection to MongoDB: Successful",
    "> Frontend Compiled: OK",
    "> API Routes: Active",
];

/// `(layer, technologies)` rows of the full-stack tech table.
pub const STACK_ROWS: [(&str, &str); 4] = [
    ("Frontend", "React, Tailwind, HTML/CSS"),
    ("Backend", "Node.js, Django, Flask"),
    ("Database", "MongoDB, SQL, PostgreSQL"),
    ("Tools", "Git, APIs, Docker"),
];

/// Engine or tool with a proficiency level in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proficiency {
    pub name: &'static str,
    pub level: u8,
}

pub const GAME_TOOLS: [Proficiency; 4] = [
    Proficiency { name: "Godot", level: 90 },
    Proficiency { name: "Unity", level: 75 },
    Proficiency { name: "Blender", level: 85 },
    Proficiency { name: "Pygame", level: 80 },
];

// =============================================================================
// Hero / About
// =============================================================================

pub const HERO_ROLE_LINE: &str = "Full Stack Developer | Game Developer | AI Explorer";

pub const HERO_ORBIT_CHIPS: [&str; 3] = ["Creator", "Innovator", "Hacker"];

pub const MARQUEE_SKILLS: [&str; 18] = [
    "HTML",
    "CSS",
    "JavaScript",
    "Python",
    "React",
    "Node.js",
    "Godot",
    "Blender",
    "Unity",
    "MongoDB",
    "SQL",
    "Django",
    "TailwindCSS",
    "Flask",
    "APIs",
    "Git",
    "ML",
    "AI",
];

pub const ABOUT_TECH_STACK: [&str; 12] = [
    "Godot",
    "Unity",
    "Blender",
    "Python",
    "Node.js",
    "React",
    "TailwindCSS",
    "MongoDB",
    "SQL",
    "Django",
    "Flask",
    "AI/ML",
];

// =============================================================================
// AI
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modality {
    pub name: &'static str,
    pub glyph: &'static str,
    pub accent: Accent,
}

pub const AI_MODALITIES: [Modality; 6] = [
    Modality { name: "Text", glyph: "¶", accent: Accent::Blue },
    Modality { name: "Image", glyph: "▨", accent: Accent::Purple },
    Modality { name: "Video", glyph: "▶", accent: Accent::Cyan },
    Modality { name: "Code", glyph: "</>", accent: Accent::Blue },
    Modality { name: "Website", glyph: "✧", accent: Accent::Purple },
    Modality { name: "Audio", glyph: "♫", accent: Accent::Cyan },
];

pub const AI_CAPABILITIES: [&str; 7] = [
    "Text-to-Text Generation",
    "Image Synthesis & Editing",
    "Video Generation",
    "Code Completion & Generation",
    "Website Creation",
    "Resume Builder",
    "Audio & Music Generation",
];

pub const AI_TECHNOLOGIES: [&str; 7] = [
    "Transformer Architecture",
    "Neural Network Models",
    "Natural Language Processing",
    "Computer Vision",
    "Generative Adversarial Networks",
    "Deep Learning Frameworks",
    "Multi-Modal Integration",
];

// =============================================================================
// Achievements
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub rank: &'static str,
    pub description: &'static str,
    pub glyph: &'static str,
    pub accent: Accent,
}

pub const ACHIEVEMENTS: [Achievement; 4] = [
    Achievement {
        title: "Smart India Hackathon 2024",
        rank: "Top 3",
        description: "Secured Top 3 position with innovative problem statement solution",
        glyph: "🏆",
        accent: Accent::Gold,
    },
    Achievement {
        title: "Smart India Hackathon 2025",
        rank: "Top 4",
        description: "Achieved Top 4 with two problem statements showcasing versatility",
        glyph: "🏅",
        accent: Accent::Blue,
    },
    Achievement {
        title: "AI & Game Design Recognition",
        rank: "Multiple",
        description: "Various project recognitions in AI innovation and Game Design categories",
        glyph: "✪",
        accent: Accent::Purple,
    },
    Achievement {
        title: "Innovation Award",
        rank: "Excellence",
        description: "Recognition for outstanding innovation in software development",
        glyph: "⚡",
        accent: Accent::Cyan,
    },
];

// =============================================================================
// Skills
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    GameDev,
    Other,
}

impl SkillCategory {
    /// Declared display order.
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::GameDev,
        SkillCategory::Other,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::GameDev => "Game Dev",
            SkillCategory::Other => "Other",
        }
    }

    #[must_use]
    pub fn accent(self) -> Accent {
        match self {
            SkillCategory::Frontend => Accent::Blue,
            SkillCategory::Backend => Accent::Purple,
            SkillCategory::GameDev => Accent::Cyan,
            SkillCategory::Other => Accent::Gold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub category: SkillCategory,
}

const fn skill(name: &'static str, category: SkillCategory) -> Skill {
    Skill { name, category }
}

pub const SKILLS: [Skill; 18] = [
    skill("HTML", SkillCategory::Frontend),
    skill("CSS", SkillCategory::Frontend),
    skill("JavaScript", SkillCategory::Frontend),
    skill("React", SkillCategory::Frontend),
    skill("Tailwind", SkillCategory::Frontend),
    skill("Node.js", SkillCategory::Backend),
    skill("Django", SkillCategory::Backend),
    skill("Flask", SkillCategory::Backend),
    skill("MongoDB", SkillCategory::Backend),
    skill("SQL", SkillCategory::Backend),
    skill("Godot", SkillCategory::GameDev),
    skill("Unity", SkillCategory::GameDev),
    skill("Blender", SkillCategory::GameDev),
    skill("Pygame", SkillCategory::GameDev),
    skill("Python", SkillCategory::Other),
    skill("Git", SkillCategory::Other),
    skill("APIs", SkillCategory::Other),
    skill("AI/ML", SkillCategory::Other),
];

/// Skills grouped by category, categories in declared order, skills in
/// list order. Empty categories are omitted.
#[must_use]
pub fn skills_by_category() -> Vec<(SkillCategory, Vec<&'static Skill>)> {
    SkillCategory::ALL
        .into_iter()
        .map(|category| {
            let skills: Vec<&'static Skill> =
                SKILLS.iter().filter(|s| s.category == category).collect();
            (category, skills)
        })
        .filter(|(_, skills)| !skills.is_empty())
        .collect()
}

// =============================================================================
// Resume / Contact
// =============================================================================

/// `(label, value)` stat tiles of the resume vault.
pub const RESUME_STATS: [(&str, &str, Accent); 3] = [
    ("Projects", "15+", Accent::Blue),
    ("Technologies", "20+", Accent::Purple),
    ("Achievements", "10+", Accent::Cyan),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub handle: &'static str,
    pub glyph: &'static str,
    pub accent: Accent,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { name: "LinkedIn", handle: "@surya", glyph: "in", accent: Accent::Blue },
    SocialLink { name: "GitHub", handle: "@surya", glyph: "⌥", accent: Accent::Purple },
    SocialLink {
        name: "Email",
        handle: "surya@example.com",
        glyph: "✉",
        accent: Accent::Cyan,
    },
];

pub const AVAILABILITY: [&str; 3] = [
    "Available for freelance projects",
    "Open to collaboration",
    "Accepting new opportunities",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skills_group_in_declared_order() {
        let groups = skills_by_category();
        let order: Vec<_> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, SkillCategory::ALL.to_vec());

        let total: usize = groups.iter().map(|(_, s)| s.len()).sum();
        assert_eq!(total, SKILLS.len());

        let frontend: Vec<_> = groups[0].1.iter().map(|s| s.name).collect();
        assert_eq!(frontend, ["HTML", "CSS", "JavaScript", "React", "Tailwind"]);
    }

    #[test]
    fn accent_cycle_repeats_every_three() {
        assert_eq!(Accent::cycle(0), Accent::Blue);
        assert_eq!(Accent::cycle(1), Accent::Purple);
        assert_eq!(Accent::cycle(2), Accent::Cyan);
        assert_eq!(Accent::cycle(3), Accent::Blue);
    }

    #[test]
    fn proficiency_levels_are_percentages() {
        assert!(GAME_TOOLS.iter().all(|tool| tool.level <= 100));
    }
}
