//! Capture-the-flag stats, categories and writeups.

use super::{Accent, CategoryMeta};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Challenge {
    pub name: &'static str,
    pub difficulty: Difficulty,
    pub points: u32,
    pub solved: bool,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CtfCategory {
    #[default]
    Pwn,
    Rev,
    Web,
    Crypto,
}

impl CtfCategory {
    pub const ALL: [CtfCategory; 4] = [
        CtfCategory::Pwn,
        CtfCategory::Rev,
        CtfCategory::Web,
        CtfCategory::Crypto,
    ];

    pub fn meta(self) -> CategoryMeta {
        match self {
            CtfCategory::Pwn => CategoryMeta {
                title: "Binary Exploitation",
                description: "Memory corruption and control flow hijacking",
                accent: Accent::Pink,
            },
            CtfCategory::Rev => CategoryMeta {
                title: "Reverse Engineering",
                description: "Binary analysis and deobfuscation",
                accent: Accent::Purple,
            },
            CtfCategory::Web => CategoryMeta {
                title: "Web Exploitation",
                description: "Web application vulnerabilities",
                accent: Accent::Cyan,
            },
            CtfCategory::Crypto => CategoryMeta {
                title: "Cryptography",
                description: "Cryptographic attacks and analysis",
                accent: Accent::Neon,
            },
        }
    }

    pub fn challenges(self) -> &'static [Challenge] {
        match self {
            CtfCategory::Pwn => PWN,
            CtfCategory::Rev => REV,
            CtfCategory::Web => WEB,
            CtfCategory::Crypto => CRYPTO,
        }
    }

    pub fn solved_count(self) -> usize {
        self.challenges().iter().filter(|c| c.solved).count()
    }
}

const PWN: &[Challenge] = &[
    Challenge {
        name: "Heap Arena",
        difficulty: Difficulty::Hard,
        points: 500,
        solved: true,
        description: "Tcache poisoning to arbitrary write on glibc 2.35",
    },
    Challenge {
        name: "ROP Emporium",
        difficulty: Difficulty::Medium,
        points: 300,
        solved: true,
        description: "Return-oriented programming with limited gadgets",
    },
    Challenge {
        name: "Stack Overflow Pro",
        difficulty: Difficulty::Medium,
        points: 250,
        solved: true,
        description: "Canary leak and ret2libc",
    },
];

const REV: &[Challenge] = &[
    Challenge {
        name: "VM Protect",
        difficulty: Difficulty::Hard,
        points: 450,
        solved: true,
        description: "Custom virtual machine bytecode analysis",
    },
    Challenge {
        name: "Anti-Debug Master",
        difficulty: Difficulty::Hard,
        points: 400,
        solved: false,
        description: "Bypass layered anti-debugging checks",
    },
];

const WEB: &[Challenge] = &[
    Challenge {
        name: "JWT Madness",
        difficulty: Difficulty::Medium,
        points: 300,
        solved: true,
        description: "Algorithm confusion in token verification",
    },
    Challenge {
        name: "GraphQL Injection",
        difficulty: Difficulty::Medium,
        points: 250,
        solved: true,
        description: "Introspection abuse and batched query injection",
    },
];

const CRYPTO: &[Challenge] = &[Challenge {
    name: "RSA Oracle",
    difficulty: Difficulty::Hard,
    points: 400,
    solved: false,
    description: "Padding oracle against textbook RSA",
}];

#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    pub value: &'static str,
    pub label: &'static str,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        value: "50+",
        label: "Challenges Solved",
    },
    Achievement {
        value: "8,500",
        label: "Total Points",
    },
    Achievement {
        value: "4",
        label: "Categories",
    },
    Achievement {
        value: "500+",
        label: "Hours Practiced",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Platform {
    pub name: &'static str,
    pub handle: &'static str,
}

pub const PLATFORMS: &[Platform] = &[
    Platform {
        name: "Hack The Box",
        handle: "M3thy1",
    },
    Platform {
        name: "TryHackMe",
        handle: "M3thy1",
    },
    Platform {
        name: "picoCTF",
        handle: "M3thy1",
    },
    Platform {
        name: "CTFtime",
        handle: "M3thy1",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Writeup {
    pub title: &'static str,
    pub category: CtfCategory,
    pub date: &'static str,
}

pub const WRITEUPS: &[Writeup] = &[
    Writeup {
        title: "Heap Arena: Tcache Poisoning Walkthrough",
        category: CtfCategory::Pwn,
        date: "2024-12",
    },
    Writeup {
        title: "VM Protect: Lifting a Custom ISA",
        category: CtfCategory::Rev,
        date: "2024-11",
    },
    Writeup {
        title: "GraphQL Injection: Batching Past Rate Limits",
        category: CtfCategory::Web,
        date: "2024-10",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_metadata_and_challenges() {
        for category in CtfCategory::ALL {
            assert!(!category.meta().title.is_empty());
            assert!(!category.challenges().is_empty());
        }
    }

    #[test]
    fn solved_counts() {
        assert_eq!(CtfCategory::Pwn.solved_count(), 3);
        assert_eq!(CtfCategory::Rev.solved_count(), 1);
        assert_eq!(CtfCategory::Crypto.solved_count(), 0);
    }
}
