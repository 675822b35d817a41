#[derive(Debug, Clone, Copy)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Philosophy {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SUMMARY: &str = "Security researcher focused on low-level systems: how memory is laid out, how it breaks, and how to build tooling that makes that work faster.";

pub const TIMELINE: &[Milestone] = &[
    Milestone {
        year: "2023",
        title: "Security Research Journey Begins",
        description: "Started deep dive into binary exploitation and reverse engineering, focusing on low-level system vulnerabilities and memory corruption techniques.",
    },
    Milestone {
        year: "2024",
        title: "AI-Powered Security Tools",
        description: "Developed Pwndbg-MCP, integrating Large Language Models with GDB debugging workflows.",
    },
    Milestone {
        year: "2025",
        title: "Advanced Vulnerability Research",
        description: "Expanding research into use-after-free, type confusion, and kernel exploitation techniques.",
    },
];

pub const PHILOSOPHIES: &[Philosophy] = &[
    Philosophy {
        title: "Si Vis Pacem, Para Bellum",
        description: "If you want peace, prepare for war. Understanding offensive techniques is essential for building effective defenses.",
    },
    Philosophy {
        title: "Continuous Learning",
        description: "The security landscape evolves daily: new exploitation techniques, research papers, and hands-on practice in controlled environments.",
    },
    Philosophy {
        title: "Open Source Contribution",
        description: "Sharing tools, knowledge, and research to elevate the whole security community.",
    },
];
