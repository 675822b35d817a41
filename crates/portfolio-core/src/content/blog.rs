//! Blog articles. Bodies are plain paragraphs separated by blank lines.

#[derive(Debug, Clone, Copy)]
pub struct Article {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub tags: &'static [&'static str],
    pub views: u32,
    pub body: &'static str,
}

impl Article {
    pub fn paragraphs(&self) -> impl Iterator<Item = &'static str> {
        self.body
            .split("\n\n")
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
    }
}

pub const ARTICLES: &[Article] = &[
    Article {
        id: 1,
        title: "Introduction to Binary Exploitation: From Stack Overflows to ROP",
        excerpt: "A comprehensive guide for beginners looking to understand the fundamentals of binary exploitation. We cover stack-based buffer overflows, modern mitigation techniques, and how to construct your first ROP chain.",
        date: "2025-01-15",
        read_time: "12 min read",
        tags: &["Binary Exploitation", "ROP", "Beginner"],
        views: 1240,
        body: "Binary exploitation is the art of turning a program bug into control over its execution. Most journeys start with the stack.

A stack buffer overflow writes past the end of a local buffer and over the saved return address. When the function returns, execution continues wherever the attacker pointed it.

Modern systems fight back with stack canaries, non-executable stacks and address space layout randomization. Each mitigation raises the bar without closing the door.

Return-oriented programming chains short instruction sequences ending in ret. With enough gadgets, a chain can call system or mprotect without injecting a single byte of code.",
    },
    Article {
        id: 2,
        title: "AI-Powered Debugging: Integrating LLMs with GDB through MCP",
        excerpt: "Exploring how the Model Context Protocol enables natural language interaction with debuggers, revolutionizing the reverse engineering workflow for security researchers.",
        date: "2025-01-08",
        read_time: "10 min read",
        tags: &["AI", "MCP", "GDB", "Debugging"],
        views: 890,
        body: "Debuggers expose an enormous amount of state, and most of the work is deciding which part of it matters.

The Model Context Protocol gives a language model a typed set of tools. Wrapping pwndbg commands as tools lets the model inspect registers, walk the heap and set breakpoints on request.

The result is a conversation: ask why a crash happened and get the faulting instruction, the corrupted chunk and the write that caused it.",
    },
    Article {
        id: 3,
        title: "Understanding Modern Heap Exploitation: Tcache and Beyond",
        excerpt: "Deep dive into the evolution of heap exploitation techniques, from the original dlmalloc to modern ptmalloc2 with tcache, and the techniques used to bypass contemporary protections.",
        date: "2024-12-20",
        read_time: "15 min read",
        tags: &["Heap", "Exploitation", "Advanced"],
        views: 1560,
        body: "The glibc allocator has grown from dlmalloc into ptmalloc2, adding arenas, bins and finally the per-thread cache.

Tcache made allocation fast and, early on, exploitation easy: a corrupted next pointer was enough for an arbitrary allocation.

Safe linking now mangles those pointers with the chunk address. Bypassing it usually starts with a heap leak, after which the classic poisoning techniques still apply.",
    },
    Article {
        id: 4,
        title: "Web Application Security: Beyond the OWASP Top 10",
        excerpt: "Modern web applications face sophisticated attacks that go far beyond traditional injection vulnerabilities. This article explores emerging threat vectors and defensive strategies.",
        date: "2024-12-05",
        read_time: "12 min read",
        tags: &["Web Security", "GraphQL", "API"],
        views: 720,
        body: "The OWASP Top 10 is a starting point, not a checklist that ends the assessment.

GraphQL introspection, batched queries and deeply nested selections open attack paths that REST scanners never exercise.

Token handling deserves the same scrutiny: algorithm confusion and missing audience checks remain common in JWT deployments.",
    },
    Article {
        id: 5,
        title: "Building a Security Research Lab: Tools and Infrastructure",
        excerpt: "A practical guide to setting up an effective security research environment, from hardware selection to virtualization and tooling configuration.",
        date: "2024-11-18",
        read_time: "14 min read",
        tags: &["Lab", "Tools", "Infrastructure"],
        views: 2100,
        body: "A good lab is disposable. Snapshots and containers make it cheap to break things and start over.

Isolate target networks from the host, keep a clean image per target family and script the setup so it can be rebuilt from scratch.

On the tooling side, a debugger with heap awareness, a disassembler and a scripting framework cover most day-to-day work.",
    },
];

pub fn find(id: u32) -> Option<&'static Article> {
    ARTICLES.iter().find(|article| article.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn articles_are_findable_and_split_into_paragraphs() {
        let article = find(3).expect("heap article");
        assert!(article.title.contains("Tcache"));
        assert_eq!(article.paragraphs().count(), 3);
        assert!(find(99).is_none());
    }
}
