//! Hard-coded portfolio content.
//!
//! Everything in here is static data. State machines refer to it by index or
//! identifier; only the [`crate::screen`] module turns it into cells.

pub mod resume;
pub mod showcase;

/// GitHub profile opened by `ssh git@github.com`.
pub const GITHUB_PROFILE: &str = "https://github.com/TheBitty";

/// Tags that put a project on the `netstat -a` panel.
pub const NETWORK_TAGS: [&str; 4] = ["Network Security", "Port Scanner", "Nmap", "Reconnaissance"];

/// A showcased project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub tags: &'static [&'static str],
}

impl Project {
    /// Whether the project carries any networking tag.
    #[must_use]
    pub fn is_network_tool(&self) -> bool {
        self.tags.iter().any(|tag| NETWORK_TAGS.contains(tag))
    }
}

/// All projects, in display order.
pub const PROJECTS: &[Project] = &[
    Project {
        id: "gopherstrike",
        name: "GopherStrike",
        description: "A developing red team framework written in Go, featuring a port scanner with plans to add OSINT tools, multiple vulnerability scanners, and subdomain enumeration for comprehensive offensive security operations.",
        link: "https://github.com/TheBitty/GopherStrike",
        tags: &["Go", "Python", "Cybersecurity", "Red Team", "Port Scanner", "OSINT"],
    },
    Project {
        id: "pythmap",
        name: "Pythmap",
        description: "A comprehensive network scanning and analysis tool built in Python that combines nmap, banner grabbing, and logging capabilities for network reconnaissance and security assessment.",
        link: "https://github.com/TheBitty/Pythmap",
        tags: &["Python", "Nmap", "Network Security", "Banner Grabbing", "Reconnaissance"],
    },
    Project {
        id: "binaryripper",
        name: "BinaryRipper",
        description: "A specialized tool for binary analysis and reverse engineering, focused on extracting and examining components from executable files for security research.",
        link: "https://github.com/TheBitty/BinaryRipper",
        tags: &["C++", "Reverse Engineering", "Binary Analysis", "Security Research"],
    },
    Project {
        id: "bitstrike",
        name: "BitStrike",
        description: "Post-exploitation framework designed to complement GopherStrike, providing advanced tools for security professionals during offensive operations.",
        link: "https://github.com/TheBitty/BitStrike",
        tags: &["Red Team", "Security", "Post-Exploitation", "Offensive Security"],
    },
    Project {
        id: "rustcc",
        name: "RustCC",
        description: "A project exploring Rust programming language capabilities, likely for systems programming or security applications.",
        link: "https://github.com/TheBitty/RustCC",
        tags: &["Rust", "Systems Programming", "Security Applications"],
    },
    Project {
        id: "kairosalgo",
        name: "KairosAlgo",
        description: "A collection of algorithms and data structures implementations, likely for educational or performance analysis purposes.",
        link: "https://github.com/TheBitty/KairosAlgo",
        tags: &["Algorithms", "Data Structures", "Education", "Performance Analysis"],
    },
];

/// Projects shown on the network tools panel.
pub fn network_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|project| project.is_network_tool())
}
