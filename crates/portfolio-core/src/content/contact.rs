//! Contact methods and the inquiry form vocabulary.

#[derive(Debug, Clone, Copy)]
pub struct ContactMethod {
    pub name: &'static str,
    pub handle: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

pub const METHODS: &[ContactMethod] = &[
    ContactMethod {
        name: "GitHub",
        handle: "@M3thy1",
        url: "https://github.com/M3thy1",
        description: "Open source projects and security tools",
    },
    ContactMethod {
        name: "Telegram",
        handle: "@m3thy1",
        url: "https://t.me/m3thy1",
        description: "Direct messages and quick questions",
    },
    ContactMethod {
        name: "HackerOne",
        handle: "M3thy1",
        url: "https://hackerone.com/m3thy1",
        description: "Bug bounty profile and disclosures",
    },
];

pub const RESPONSE_TIME: &str = "24-48 hours";

pub const NAME_PLACEHOLDER: &str = "Your name";
pub const EMAIL_PLACEHOLDER: &str = "your@email.com";
pub const SUBJECT_PLACEHOLDER: &str = "What is this regarding?";
pub const MESSAGE_PLACEHOLDER: &str = "Your message...";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InquiryType {
    #[default]
    General,
    Research,
    Vulnerability,
    Speaking,
    Consulting,
}

impl InquiryType {
    pub const ALL: [InquiryType; 5] = [
        InquiryType::General,
        InquiryType::Research,
        InquiryType::Vulnerability,
        InquiryType::Speaking,
        InquiryType::Consulting,
    ];

    pub fn id(self) -> &'static str {
        match self {
            InquiryType::General => "general",
            InquiryType::Research => "research",
            InquiryType::Vulnerability => "vulnerability",
            InquiryType::Speaking => "speaking",
            InquiryType::Consulting => "consulting",
        }
    }
}

impl std::fmt::Display for InquiryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            InquiryType::General => "General Inquiry",
            InquiryType::Research => "Research Collaboration",
            InquiryType::Vulnerability => "Vulnerability Report",
            InquiryType::Speaking => "Speaking Opportunity",
            InquiryType::Consulting => "Security Consulting",
        };
        write!(f, "{}", label)
    }
}
