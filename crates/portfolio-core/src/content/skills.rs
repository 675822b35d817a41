//! Skill categories, certifications and the tech stack strip.

use super::{Accent, CategoryMeta};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub details: &'static str,
}

const fn skill(name: &'static str, level: u8, details: &'static str) -> Skill {
    Skill {
        name,
        level,
        details,
    }
}

/// Tabs of the skills panel. Adding a variant forces a metadata entry and a
/// skill list below.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    #[default]
    Offensive,
    Defensive,
    Technical,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Offensive,
        SkillCategory::Defensive,
        SkillCategory::Technical,
        SkillCategory::Tools,
    ];

    pub fn meta(self) -> CategoryMeta {
        match self {
            SkillCategory::Offensive => CategoryMeta {
                title: "Offensive Security",
                description: "Exploitation techniques and attack methodologies",
                accent: Accent::Pink,
            },
            SkillCategory::Defensive => CategoryMeta {
                title: "Defensive Security",
                description: "Protection mechanisms and security hardening",
                accent: Accent::Neon,
            },
            SkillCategory::Technical => CategoryMeta {
                title: "Technical Skills",
                description: "Programming and system-level expertise",
                accent: Accent::Cyan,
            },
            SkillCategory::Tools => CategoryMeta {
                title: "Security Tools",
                description: "Proficiency with industry-standard tools",
                accent: Accent::Purple,
            },
        }
    }

    pub fn skills(self) -> &'static [Skill] {
        match self {
            SkillCategory::Offensive => OFFENSIVE,
            SkillCategory::Defensive => DEFENSIVE,
            SkillCategory::Technical => TECHNICAL,
            SkillCategory::Tools => TOOLS,
        }
    }
}

const OFFENSIVE: &[Skill] = &[
    skill("Binary Exploitation", 85, "Stack/heap overflows, ROP chains, format strings"),
    skill("Reverse Engineering", 80, "x86/x64 disassembly, malware analysis, patching"),
    skill("Web Application Security", 75, "SQLi, XSS, SSRF, deserialization attacks"),
    skill("Network Security", 70, "Packet analysis, MITM, protocol exploitation"),
    skill("Social Engineering", 65, "Phishing analysis, OSINT, pretexting"),
];

const DEFENSIVE: &[Skill] = &[
    skill("Vulnerability Assessment", 80, "Code review, fuzzing, static analysis"),
    skill("Exploit Mitigation", 75, "ASLR, DEP, stack canaries, CFI analysis"),
    skill("Incident Response", 65, "Forensics, log analysis, threat hunting"),
    skill("Secure Development", 70, "Secure coding practices, threat modeling"),
    skill("Security Hardening", 72, "System configuration, attack surface reduction"),
];

const TECHNICAL: &[Skill] = &[
    skill("Python", 90, "Exploit development, automation, tooling"),
    skill("C/C++", 85, "Systems programming, memory management"),
    skill("Assembly (x86/x64)", 80, "Shellcode, low-level analysis"),
    skill("Linux Internals", 82, "Kernel, syscalls, process memory"),
    skill("JavaScript", 70, "Web exploitation, browser internals"),
];

const TOOLS: &[Skill] = &[
    skill("GDB / pwndbg", 90, "Dynamic analysis, exploit debugging"),
    skill("Ghidra / IDA", 82, "Static analysis, decompilation"),
    skill("Burp Suite", 75, "Web proxy, request manipulation"),
    skill("pwntools", 88, "Exploit scripting and automation"),
    skill("Wireshark", 72, "Traffic capture and protocol analysis"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertStatus {
    InProgress,
    Planned,
    Earned,
}

impl CertStatus {
    pub fn label(self) -> &'static str {
        match self {
            CertStatus::InProgress => "In Progress",
            CertStatus::Planned => "Planned",
            CertStatus::Earned => "Earned",
        }
    }
}

impl std::fmt::Display for CertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub name: &'static str,
    pub status: CertStatus,
    pub note: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "OSCP",
        status: CertStatus::InProgress,
        note: "Preparing for exam",
    },
    Certification {
        name: "eJPT",
        status: CertStatus::Planned,
        note: "Planned for 2025",
    },
    Certification {
        name: "Burp Suite Certified",
        status: CertStatus::Planned,
        note: "Planned for 2025",
    },
];

pub const TECH_STACK: &[&str] = &[
    "Python", "C", "C++", "Assembly", "Rust", "Go", "Linux", "GDB", "Ghidra", "IDA Pro",
    "Burp Suite", "Docker",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_metadata_and_skills() {
        for category in SkillCategory::ALL {
            let meta = category.meta();
            assert!(!meta.title.is_empty());
            assert!(!meta.description.is_empty());
            assert_eq!(category.skills().len(), 5);
            assert!(category.skills().iter().all(|s| s.level <= 100));
        }
    }

    #[test]
    fn default_tab_is_offensive() {
        assert_eq!(SkillCategory::default(), SkillCategory::Offensive);
        assert_eq!(CertStatus::InProgress.to_string(), "In Progress");
    }
}
