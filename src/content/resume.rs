//! Static data for the resume terminal.
//!
//! Bio fields are placeholders.

/// Which layout the screen uses for a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Template {
    Summary,
    Skills,
    Experience,
    Education,
    Projects,
    Contact,
}

/// One page of the resume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub template: Template,
}

/// Resume sections, in navigation order. `contact` is last so the
/// `contact` shortcut lands on it.
pub const SECTIONS: &[Section] = &[
    Section {
        id: "summary",
        title: "Summary",
        template: Template::Summary,
    },
    Section {
        id: "skills",
        title: "Skills",
        template: Template::Skills,
    },
    Section {
        id: "experience",
        title: "Experience",
        template: Template::Experience,
    },
    Section {
        id: "education",
        title: "Education",
        template: Template::Education,
    },
    Section {
        id: "projects",
        title: "Projects",
        template: Template::Projects,
    },
    Section {
        id: "contact",
        title: "Contact",
        template: Template::Contact,
    },
];

pub const PROMPT: &str = "guest@resume:~$";

pub const WELCOME: [&str; 2] = [
    "Welcome to TheBitty's terminal resume.",
    "Type 'help' to list commands, or use the arrow keys to browse sections.",
];

pub const HELP: &str = "Available commands:
  help          Show this help
  ls            List resume sections
  cd <section>  Open a section
  contact       Jump to contact details
  clear         Clear the terminal
  exit          Log out and restart
Use ArrowUp/ArrowDown to move between sections.";

pub const LOGOUT: &str = "Logging out... session will restart.";

pub const NAME: &str = "TheBitty";
pub const ROLE: &str = "Cybersecurity Professional & Developer";
pub const LOCATION: &str = "Somewhere, Earth";

pub const SUMMARY: &str = "Security engineer focused on offensive tooling, network reconnaissance and reverse engineering. Builds practical frameworks for red team operations and enjoys turning research into tools other people can use.";

/// Skill groups as (heading, entries).
pub const SKILLS: [(&str, &[&str]); 3] = [
    (
        "Security",
        &["Penetration Testing", "Red Team Operations", "OSINT", "Reverse Engineering"],
    ),
    ("Languages", &["Go", "Python", "C++", "Rust", "Bash", "JavaScript"]),
    ("Tooling", &["Nmap", "Burp Suite", "Ghidra", "Docker", "CI/CD"]),
];

/// A dated entry in the experience or education list.
#[derive(Clone, Copy, Debug)]
pub struct Entry {
    pub heading: &'static str,
    pub place: &'static str,
    pub period: &'static str,
    pub details: &'static [&'static str],
}

pub const EXPERIENCE: [Entry; 2] = [
    Entry {
        heading: "Security Engineer",
        place: "Example Corp",
        period: "2022 - Present",
        details: &[
            "Ran internal red team exercises against production networks.",
            "Built scanners and reporting tooling in Go and Python.",
        ],
    },
    Entry {
        heading: "Junior Penetration Tester",
        place: "Placeholder Security LLC",
        period: "2020 - 2022",
        details: &[
            "Performed web and network assessments for client engagements.",
            "Automated recon workflows and evidence collection.",
        ],
    },
];

pub const EDUCATION: [Entry; 1] = [Entry {
    heading: "B.S. Computer Science",
    place: "Your University",
    period: "2016 - 2020",
    details: &["Focus on networks, operating systems and security."],
}];

pub const CONTACTS: [(&str, &str); 3] = [
    ("GitHub", "github.com/TheBitty"),
    ("Email", "youremail@example.com"),
    ("LinkedIn", "linkedin.com/in/yourprofile"),
];

/// Index of the section with `id`, ignoring ASCII case.
#[must_use]
pub fn find_section(sections: &[Section], id: &str) -> Option<usize> {
    sections
        .iter()
        .position(|section| section.id.eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_is_last() {
        assert_eq!(SECTIONS.last().map(|s| s.id), Some("contact"));
    }

    #[test]
    fn test_find_section_ignores_case() {
        assert_eq!(find_section(SECTIONS, "SKILLS"), Some(1));
        assert_eq!(find_section(SECTIONS, "nope"), None);
    }
}
