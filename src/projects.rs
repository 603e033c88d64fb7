// Static project catalog.
// Portfolio entries rendered in the list pane; language data is fetched live.

use ratatui::style::Color;

/// GitHub account the portfolio repositories live under.
pub const GITHUB_OWNER: &str = "benz206";

/// A portfolio project.
#[derive(Debug)]
pub struct Project {
    pub title: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub link: &'static str,
    /// Repository name under [`GITHUB_OWNER`], when one exists.
    pub repo: Option<&'static str>,
    pub tech: &'static [&'static str],
    pub accent: Color,
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "EVENT VIEWER",
        tagline: "MULTI-FUNCTIONAL EVENT VIEWER",
        summary: "Hackathon event viewer with live schedules, GraphQL-backed search, \
                  and a responsive interface for browsing everything happening on site.",
        link: "https://ben-htn.netlify.app",
        repo: Some("htn2025-challenge"),
        tech: &["NextJS", "TypeScript", "GraphQL", "TailwindCSS"],
        accent: Color::Rgb(245, 158, 11),
    },
    Project {
        title: "STYLEIT",
        tagline: "REALTIME DRESSING ROOM",
        summary: "Real-time virtual dressing room: clothing images are processed into a \
                  wardrobe, then overlaid live on your body with Mediapipe so outfits \
                  can be tried on from any screen.",
        link: "https://github.com/benz206/StyleIt",
        repo: Some("StyleIt"),
        tech: &["NextJS", "TypeScript", "MongoDB", "TailwindCSS"],
        accent: Color::Rgb(99, 102, 241),
    },
    Project {
        title: "LINKCOM",
        tagline: "BIDIRECTIONAL COMMUNICATION DEVICE",
        summary: "Embedded device pair for low-bandwidth two-way messaging, written in C \
                  with a custom framing protocol over serial radio links.",
        link: "https://github.com/benz206/LinkCom",
        repo: Some("LinkCom"),
        tech: &["C", "Git", "GitLab"],
        accent: Color::Rgb(20, 184, 166),
    },
    Project {
        title: "GOOSE ON THE LOOSE",
        tagline: "HACK THE NORTH 2024 WINNER",
        summary: "Campus-wide scavenger hunt where players photograph geese to capture \
                  territory, with live leaderboards synced through MongoDB.",
        link: "https://devpost.com/software/goosehunt",
        repo: None,
        tech: &["MongoDB", "TypeScript", "NextJS", "Google Cloud"],
        accent: Color::Rgb(244, 63, 94),
    },
    Project {
        title: "RAPIDRX",
        tagline: "RAPID DIAGNOSIS TOOL FOR SYMPTOMS",
        summary: "Symptom triage tool that matches free-text descriptions against a \
                  clinical knowledge base and suggests next steps within seconds.",
        link: "https://github.com/benz206/RapidRx",
        repo: Some("RapidRx"),
        tech: &["Firebase", "SAP", "TypeScript", "Cloudflare"],
        accent: Color::Rgb(5, 150, 105),
    },
    Project {
        title: "SPOTIFY MACROBOARD",
        tagline: "FULLY CUSTOM MACROBOARD FOR SPOTIFY",
        summary: "Hand-built Arduino macroboard that drives Spotify playback over a \
                  custom serial bridge, with per-key RGB feedback for play state.",
        link: "https://github.com/benz206/SpotifyMacroboard",
        repo: Some("SpotifyMacroboard"),
        tech: &["Arduino", "TypeScript", "C++", "NextJS"],
        accent: Color::Rgb(251, 191, 36),
    },
    Project {
        title: "EUREKAHACKS 2024",
        tagline: "RESPONSIVE MODERN HACKATHON WEBSITE",
        summary: "Landing site for a 300-person high-school hackathon, covering \
                  registration, sponsors, and schedule on every screen size.",
        link: "https://eurekahacks.ca",
        repo: None,
        tech: &["NextJS", "JavaScript", "Netlify", "Figma"],
        accent: Color::Rgb(232, 121, 249),
    },
    Project {
        title: "FLASHNOTES",
        tagline: "PROFESSIONAL AI VISION BASED NOTE SUMMARIZATION",
        summary: "Photographs of handwritten notes are run through vision models and \
                  condensed into clean, searchable study summaries.",
        link: "https://github.com/benz206/flashnotes",
        repo: Some("flashnotes"),
        tech: &["NextJS", "TypeScript", "TailwindCSS", "OpenAI"],
        accent: Color::Rgb(249, 115, 22),
    },
    Project {
        title: "APHS MAKERS COMPETITION",
        tagline: "CLUB WEBSITE USING NEXT.JS & TAILWIND",
        summary: "Competition hub for the school makers club, with challenge listings, \
                  submission forms, and results.",
        link: "https://apmc.vercel.app/",
        repo: None,
        tech: &["NextJS", "TypeScript", "TailwindCSS", "React"],
        accent: Color::Rgb(192, 132, 252),
    },
    Project {
        title: "BTAGSCRIPT PLAYGROUND",
        tagline: "DYNAMICALLY TYPED INTERPRETER AND DEBUGGER",
        summary: "Browser playground for the bTagScript templating language, with an \
                  interpreter, step debugger, and shareable snippets.",
        link: "https://benz206.github.io/bTagScriptPlayground/",
        repo: Some("bTagScript"),
        tech: &["Python", "JavaScript", "HTML5", "CSS"],
        accent: Color::Rgb(239, 68, 68),
    },
    Project {
        title: "SPHINX EXTENSION",
        tagline: "Custom extension for Sphinx",
        summary: "Sphinx extension rendering ANSI terminal output inside generated \
                  documentation, used by the bTagScript docs.",
        link: "https://btagscript.readthedocs.io/en/latest/index.html",
        repo: Some("tagscript-ansi"),
        tech: &["Python", "HTML5", "CSS", "Read The Docs"],
        accent: Color::Rgb(250, 204, 21),
    },
    Project {
        title: "BENNY BOT",
        tagline: "Custom Discord Bot",
        summary: "Discord bot with music playback from Spotify links, near-instant OCR, \
                  AI-based hurtful message detection, and a custom command maker built \
                  on bTagScript. Hosted around the clock on a Linux VPS.",
        link: "https://github.com/benz206/Benny",
        repo: Some("Benny"),
        tech: &["Linux", "Python", "Discord", "Oracle"],
        accent: Color::Rgb(2, 132, 199),
    },
    Project {
        title: "SCHOOL ANNOUNCEMENTS",
        tagline: "Automated School Announcement Forwarder",
        summary: "Scrapes the school's 96-page announcements document on a schedule, \
                  parses it with regex, and forwards new announcements to subscribed \
                  Discord channels.",
        link: "https://github.com/benz206/SchoolAnnouncements",
        repo: Some("SchoolAnnouncements"),
        tech: &["Google Cloud", "Python", "Discord", "Google Sheets"],
        accent: Color::Rgb(74, 222, 128),
    },
    Project {
        title: "THIS WEBSITE!",
        tagline: "MY OWN PERSONAL WEBSITE",
        summary: "The portfolio site itself: NextJS, TypeScript, and TailwindCSS, kept \
                  simple and elegant.",
        link: "https://github.com/benz206/ben-portfolio",
        repo: Some("ben-portfolio"),
        tech: &["NextJS", "TypeScript", "TailwindCSS", "React"],
        accent: Color::Rgb(103, 232, 249),
    },
];
