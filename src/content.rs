// Static portfolio content. Loaded once, never mutated.

use crate::models::{CaseStudy, Category, Hobby, ProcessShot, Project, Skill};

pub const OWNER_NAME: &str = "Rajeev Kumar";
pub const OWNER_MARK: &str = "RAJEEV";
pub const OWNER_ROLE: &str = "COMMUNICATION DESIGN STUDENT";
pub const OWNER_EMAIL: &str = "hello@rajeevkumar.design";

pub const HERO_HEADLINE: &str = "Crafting digital narratives through design and code.";
pub const HERO_INTRO: &str = "I'm Rajeev Kumar, a designer specializing in bridging the gap between \
aesthetics and functionality. Based in the intersection of Typography, UX, and 3D.";

pub const ABOUT_HEADLINE: &str = "Beyond the pixels.";
pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I believe that great design is not just about how it looks, but how it communicates and \
solves problems. My journey in communication design has led me to explore the intersection of \
traditional typography and modern web technologies.",
    "When I'm not pushing pixels or debugging code, you can find me wandering the streets with my \
camera or writing about the latest trends in technology and design on my blog.",
];
pub const PORTRAIT_URL: &str = "https://picsum.photos/seed/rajeev/800/800";

pub const CONTACT_HEADLINE: &str = "Let's build something extraordinary.";
pub const CONTACT_PITCH: &str = "Always looking for new challenges and creative collaborations. \
Feel free to reach out for a project or just a coffee chat.";

pub const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("Instagram", "https://instagram.com"),
    ("LinkedIn", "https://linkedin.com"),
    ("Twitter", "https://twitter.com"),
];

pub static SKILLS: &[Skill] = &[
    Skill {
        name: "Typography",
        icon: "Palette",
        description: "Expertise in font pairing, typesetting, and custom letterform design for brand identities.",
    },
    Skill {
        name: "UX/UI Design",
        icon: "Layers",
        description: "Crafting user-centric interfaces with focus on accessibility, flow, and pixel-perfect execution.",
    },
    Skill {
        name: "3D Design",
        icon: "Box",
        description: "Visualizing concepts in 3D space, from abstract compositions to realistic product mockups.",
    },
    Skill {
        name: "Web Development",
        icon: "Code",
        description: "Building modern, responsive, and high-performance web applications using React and Tailwind.",
    },
];

pub static HOBBIES: &[Hobby] = &[
    Hobby {
        name: "Photography",
        icon: "Camera",
        description: "Capturing street life and architectural geometries.",
    },
    Hobby {
        name: "Tech Blogging",
        icon: "BookOpen",
        description: "Writing about the intersection of design systems and frontend engineering.",
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        id: "1",
        title: "Modern Sans Revival",
        category: Category::Typography,
        image_url: "https://picsum.photos/seed/typo1/800/600",
        description: "A contemporary take on grotesque typefaces optimized for digital screens.",
        case_study: Some(CaseStudy {
            role: "Type Designer",
            timeline: "12 weeks",
            tools: &["Glyphs", "Figma", "FontLab"],
            concept_title: "Grotesque, re-read for pixels",
            concept_description: "Nineteenth-century grotesques were cut for lead and paper. The revival \
rebalances apertures, stroke contrast and spacing so the family stays crisp at small sizes on \
low-density screens.",
            grid_title: "Spacing on a 4-unit grid",
            grid_description: "Sidebearings and vertical metrics snap to a 4-unit grid, which keeps \
baselines aligned with UI layouts built on the same rhythm.",
            process_gallery: &[
                ProcessShot {
                    url: "https://picsum.photos/seed/typo1-sketch/800/600",
                    caption: "Pencil sketches of the lowercase a, g and s",
                },
                ProcessShot {
                    url: "https://picsum.photos/seed/typo1-proof/800/600",
                    caption: "Screen proofs at 12, 14 and 16 px",
                },
                ProcessShot {
                    url: "https://picsum.photos/seed/typo1-specimen/800/600",
                    caption: "Final specimen poster",
                },
            ],
        }),
    },
    Project {
        id: "2",
        title: "Eco-System App",
        category: Category::UxUi,
        image_url: "https://picsum.photos/seed/ux1/800/600",
        description: "A mobile platform connecting local farmers with sustainable consumers.",
        case_study: Some(CaseStudy {
            role: "UX/UI Designer",
            timeline: "8 weeks",
            tools: &["Figma", "Maze", "Miro"],
            concept_title: "Shorter supply chains, fewer taps",
            concept_description: "Interviews with twelve farmers showed that listing produce took \
longer than harvesting it. The app reduces a listing to a photo, a price and a pickup window.",
            grid_title: "A card system for seasonal produce",
            grid_description: "A two-column card grid adapts to what is in season, with the \
pickup map one swipe away.",
            process_gallery: &[
                ProcessShot {
                    url: "https://picsum.photos/seed/ux1-map/800/600",
                    caption: "Journey map from the farmer interviews",
                },
                ProcessShot {
                    url: "https://picsum.photos/seed/ux1-wire/800/600",
                    caption: "Low-fidelity wireframes",
                },
            ],
        }),
    },
    Project {
        id: "3",
        title: "Neon Abstract Series",
        category: Category::ThreeD,
        image_url: "https://picsum.photos/seed/3d1/800/600",
        description: "Exploration of light and transparency through abstract 3D glass compositions.",
        case_study: None,
    },
    Project {
        id: "4",
        title: "Architect Portfolio",
        category: Category::WebDevelopment,
        image_url: "https://picsum.photos/seed/web1/800/600",
        description: "A minimalist portfolio site with complex grid layouts and smooth transitions.",
        case_study: None,
    },
    Project {
        id: "5",
        title: "Typographic Posters",
        category: Category::Typography,
        image_url: "https://picsum.photos/seed/typo2/800/600",
        description: "A series of posters exploring the intersection of Swiss style and digital glitches.",
        case_study: None,
    },
    Project {
        id: "6",
        title: "Fintech Dashboard",
        category: Category::UxUi,
        image_url: "https://picsum.photos/seed/ux2/800/600",
        description: "Simplifying complex financial data through intuitive visualization and hierarchy.",
        case_study: None,
    },
];

pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

/// Glyph for a skill or hobby icon name.
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "Palette" => "✎",
        "Layers" => "▤",
        "Box" => "◈",
        "Code" => "</>",
        "Camera" => "◉",
        "BookOpen" => "▥",
        _ => "•",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_ids_are_unique() {
        let ids: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn find_project_by_id() {
        assert_eq!(find_project("5").map(|p| p.title), Some("Typographic Posters"));
        assert!(find_project("missing").is_none());
    }

    #[test]
    fn every_skill_icon_has_a_glyph() {
        for skill in SKILLS {
            assert_ne!(icon_glyph(skill.icon), "•", "{} has no glyph", skill.name);
        }
    }
}
