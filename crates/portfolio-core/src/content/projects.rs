//! Featured and upcoming projects.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Active,
    InDevelopment,
    Beta,
    Planning,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::InDevelopment => "In Development",
            ProjectStatus::Beta => "Beta",
            ProjectStatus::Planning => "Planning",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub features: &'static [&'static str],
    pub stars: u32,
    pub forks: u32,
    pub url: &'static str,
    pub status: ProjectStatus,
}

pub const FEATURED: &[Project] = &[
    Project {
        id: "pwndbg-mcp",
        title: "Pwndbg-MCP",
        tagline: "AI-Powered Binary Exploitation Assistant",
        description: "Model Context Protocol server that bridges pwndbg and GDB with language models, turning a debugging session into a conversation.",
        tech: &["Python", "GDB", "MCP", "AsyncIO", "pwndbg"],
        features: &[
            "Natural language debugging commands",
            "Automated heap analysis",
            "Memory layout visualization",
            "Exploit primitive detection",
            "ROP gadget discovery",
            "Register state interpretation",
            "Breakpoint management",
            "Session history and replay",
        ],
        stars: 12,
        forks: 3,
        url: "https://github.com/M3thy1/pwndbg-mcp",
        status: ProjectStatus::Active,
    },
    Project {
        id: "security-research-framework",
        title: "Security Research Framework",
        tagline: "Modular toolkit for vulnerability research",
        description: "Pluggable framework for reproducing, triaging and documenting memory corruption bugs across targets.",
        tech: &["Python", "C", "Docker", "Ghidra"],
        features: &[
            "Crash triage pipeline",
            "Reproducible lab environments",
            "Target fingerprinting",
            "Fuzzing harness templates",
            "Coverage reports",
            "Patch diffing helpers",
            "Disclosure report generator",
            "Plugin API",
        ],
        stars: 8,
        forks: 2,
        url: "https://github.com/M3thy1/security-research-framework",
        status: ProjectStatus::Active,
    },
    Project {
        id: "binary-analysis-platform",
        title: "Binary Analysis Platform",
        tagline: "Static and dynamic analysis in one workflow",
        description: "Combines disassembly, emulation and tracing so a single binary can be inspected from every angle without switching tools.",
        tech: &["Rust", "Python", "Unicorn", "Capstone"],
        features: &[
            "Multi-architecture disassembly",
            "Emulation-based tracing",
            "Control flow graph export",
            "Symbol recovery",
            "String and constant extraction",
            "Diffing between builds",
            "Scriptable analysis passes",
            "Report export",
        ],
        stars: 15,
        forks: 5,
        url: "https://github.com/M3thy1/binary-analysis-platform",
        status: ProjectStatus::Active,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct UpcomingProject {
    pub title: &'static str,
    pub description: &'static str,
    pub status: ProjectStatus,
}

pub const UPCOMING: &[UpcomingProject] = &[
    UpcomingProject {
        title: "Exploit Development Kit",
        description: "Reusable primitives for heap and stack exploitation",
        status: ProjectStatus::InDevelopment,
    },
    UpcomingProject {
        title: "CTF Automation Suite",
        description: "Scaffolding, solvers and writeup generation for CTF play",
        status: ProjectStatus::Beta,
    },
    UpcomingProject {
        title: "Vulnerability Scanner",
        description: "Lightweight scanner for common binary misconfigurations",
        status: ProjectStatus::Planning,
    },
];

pub fn find(id: &str) -> Option<&'static Project> {
    FEATURED.iter().find(|project| project.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_projects_are_addressable_by_id() {
        for project in FEATURED {
            assert_eq!(find(project.id).map(|p| p.title), Some(project.title));
            assert_eq!(project.features.len(), 8);
        }
        assert!(find("missing").is_none());
    }
}
