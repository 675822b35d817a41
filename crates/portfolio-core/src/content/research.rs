//! Research areas, papers and disclosures.

use super::Accent;

#[derive(Debug, Clone, Copy)]
pub struct ResearchArea {
    pub title: &'static str,
    pub description: &'static str,
    pub techniques: &'static [&'static str],
    pub accent: Accent,
}

pub const AREAS: &[ResearchArea] = &[
    ResearchArea {
        title: "Memory Corruption",
        description: "Heap and stack vulnerabilities in modern allocators",
        techniques: &["Use-After-Free", "Heap Overflow", "Type Confusion", "Double Free"],
        accent: Accent::Pink,
    },
    ResearchArea {
        title: "Exploit Mitigations",
        description: "Analysis and bypass of modern protections",
        techniques: &["ASLR Bypass", "CFI Analysis", "Stack Canaries", "Safe Linking"],
        accent: Accent::Neon,
    },
    ResearchArea {
        title: "AI-Augmented Analysis",
        description: "Language models in vulnerability research workflows",
        techniques: &["LLM Debugging", "Automated Triage", "Pattern Detection", "MCP Tooling"],
        accent: Accent::Cyan,
    },
    ResearchArea {
        title: "Kernel Security",
        description: "Linux kernel internals and privilege escalation",
        techniques: &["Race Conditions", "Driver Bugs", "SLUB Exploitation", "KASLR"],
        accent: Accent::Purple,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperStatus {
    Draft,
    Research,
    Planning,
    Published,
}

impl PaperStatus {
    pub fn label(self) -> &'static str {
        match self {
            PaperStatus::Draft => "Draft",
            PaperStatus::Research => "Research Phase",
            PaperStatus::Planning => "Planning",
            PaperStatus::Published => "Published",
        }
    }
}

impl std::fmt::Display for PaperStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Paper {
    pub title: &'static str,
    pub summary: &'static str,
    pub status: PaperStatus,
    pub year: &'static str,
}

pub const PAPERS: &[Paper] = &[
    Paper {
        title: "MCP Protocol Applications in Security Research",
        summary: "Using the Model Context Protocol to connect debuggers and analysis tools to language models.",
        status: PaperStatus::Draft,
        year: "2025",
    },
    Paper {
        title: "Modern Heap Exploitation: glibc 2.35+",
        summary: "Exploitation techniques that survive safe linking and the removal of malloc hooks.",
        status: PaperStatus::Research,
        year: "2025",
    },
    Paper {
        title: "Automated Vulnerability Detection Using LLMs",
        summary: "Evaluating language models as first-pass triage for memory safety bugs.",
        status: PaperStatus::Planning,
        year: "2025-2026",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Medium,
    High,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Disclosure {
    pub title: &'static str,
    pub severity: Severity,
    pub status: &'static str,
    pub identifier: &'static str,
}

pub const DISCLOSURES: &[Disclosure] = &[
    Disclosure {
        title: "Heap overflow in network service parser",
        severity: Severity::High,
        status: "Coordinated Disclosure",
        identifier: "CVE Pending",
    },
    Disclosure {
        title: "Use-after-free in plugin loader",
        severity: Severity::Medium,
        status: "Vendor Notified",
        identifier: "CVE Pending",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Methodology {
    pub title: &'static str,
    pub steps: &'static [&'static str],
}

pub const METHODOLOGIES: &[Methodology] = &[
    Methodology {
        title: "Vulnerability Discovery",
        steps: &[
            "Attack surface mapping",
            "Fuzzing campaign design",
            "Crash triage",
            "Root cause analysis",
            "Exploitability assessment",
        ],
    },
    Methodology {
        title: "Exploit Development",
        steps: &[
            "Primitive identification",
            "Mitigation analysis",
            "Heap or stack grooming",
            "Control flow hijack",
            "Reliability testing",
        ],
    },
    Methodology {
        title: "Responsible Disclosure",
        steps: &[
            "Proof of concept",
            "Vendor contact",
            "Coordinated timeline",
            "Patch verification",
            "Public advisory",
        ],
    },
];
