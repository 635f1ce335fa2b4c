//! Static text for the project showcase.

/// Lines typed out by the intro animation.
pub const INTRO_LINES: [&str; 6] = [
    "Initializing system...",
    "Loading security modules...",
    "Establishing secure connection...",
    "Deploying project database...",
    "System ready. Welcome to TheBitty's Project Showcase.",
    "Type 'help' or click a command below to navigate.",
];

/// Header banner.
pub const BANNER: [&str; 6] = [
    "████████╗██╗  ██╗███████╗██████╗ ██╗████████╗████████╗██╗   ██╗",
    "╚══██╔══╝██║  ██║██╔════╝██╔══██╗██║╚══██╔══╝╚══██╔══╝╚██╗ ██╔╝",
    "   ██║   ███████║█████╗  ██████╔╝██║   ██║      ██║    ╚████╔╝ ",
    "   ██║   ██╔══██║██╔══╝  ██╔══██╗██║   ██║      ██║     ╚██╔╝  ",
    "   ██║   ██║  ██║███████╗██████╔╝██║   ██║      ██║      ██║   ",
    "   ╚═╝   ╚═╝  ╚═╝╚══════╝╚═════╝ ╚═╝   ╚═╝      ╚═╝      ╚═╝   ",
];

/// Shell prompt shown in front of echoed commands.
pub const PROMPT: &str = "thebitty@projects:~$";

pub const HOME_TITLE: &str = "Welcome to TheBitty's Project Showcase";

pub const HOME_BODY: &str = "This interactive terminal-themed showcase highlights my cybersecurity and development projects. Use the commands above to explore different sections and learn more about my work.";

pub const HOME_FEATURED: &str = "Featured projects include penetration testing tools, network scanners, red team frameworks, and more. All projects reflect my expertise in cybersecurity and software development.";

/// `cat README.md` as (heading, paragraph) pairs.
pub const README: [(&str, &str); 3] = [
    (
        "# About TheBitty",
        "I am a cybersecurity professional and developer specializing in offensive security tools and frameworks. My work focuses on creating powerful, efficient solutions for security testing, penetration testing, and red team operations.",
    ),
    (
        "# Project Philosophy",
        "I believe in building tools that are both practical and educational. Each project aims to solve real-world security challenges while also serving as a learning resource for the community.",
    ),
    (
        "# Technologies",
        "My projects utilize a variety of languages and frameworks, with a focus on Go, Python, C++, and Rust for their performance, safety, and expressiveness in systems programming contexts.",
    ),
];

/// One row of the fake `nmap -sV` output.
#[derive(Clone, Copy, Debug)]
pub struct ScanResult {
    pub port: &'static str,
    pub service: &'static str,
    pub details: &'static str,
}

pub const TECHNOLOGY_SCAN: [ScanResult; 5] = [
    ScanResult {
        port: "PORT 22/tcp open  ssh",
        service: "Service: Go (GopherStrike)",
        details: "Details: Red team framework, port scanning, OSINT",
    },
    ScanResult {
        port: "PORT 80/tcp open  http",
        service: "Service: Python (Pythmap)",
        details: "Details: Network scanning, banner grabbing, service detection",
    },
    ScanResult {
        port: "PORT 443/tcp open  https",
        service: "Service: C++ (BinaryRipper)",
        details: "Details: Binary analysis, reverse engineering, component extraction",
    },
    ScanResult {
        port: "PORT 8080/tcp open  http-proxy",
        service: "Service: Rust (RustCC)",
        details: "Details: Systems programming, security applications",
    },
    ScanResult {
        port: "PORT 9000/tcp open  cslistener",
        service: "Service: Mixed (BitStrike)",
        details: "Details: Post-exploitation framework, offensive security tools",
    },
];

pub const AUTHOR_ASCII: [&str; 6] = [
    "  .---.",
    " /     \\",
    "| () () |",
    " \\  ^  /",
    "  '---'",
    "THEBITTY",
];

/// `whoami` label/value pairs.
pub const AUTHOR_FIELDS: [(&str, &str); 4] = [
    ("ROLE:", "Cybersecurity Professional & Developer"),
    ("FOCUS:", "Offensive Security, Tool Development"),
    ("EXPERTISE:", "Red Team Operations, Penetration Testing"),
    ("LANGUAGES:", "Go, Python, C++, Rust, JavaScript"),
];

pub const AUTHOR_BIO: &str = "Security enthusiast with a passion for developing tools that help identify and mitigate vulnerabilities. Specialized in creating practical frameworks for security testing and research, with experience across multiple programming languages and security domains.";

pub const SKILLS_HEXDUMP: [&str; 14] = [
    "00000000  43 79 62 65 72 73 65 63  75 72 69 74 79 20 53 6b  |Cybersecurity Sk|",
    "00000010  69 6c 6c 73 3a 20 50 65  6e 65 74 72 61 74 69 6f  |ills: Penetratio|",
    "00000020  6e 20 54 65 73 74 69 6e  67 2c 20 52 65 64 20 54  |n Testing, Red T|",
    "00000030  65 61 6d 2c 20 4e 65 74  77 6f 72 6b 20 53 65 63  |eam, Network Sec|",
    "00000040  75 72 69 74 79 2c 20 4f  53 49 4e 54 2c 20 52 65  |urity, OSINT, Re|",
    "00000050  76 65 72 73 65 20 45 6e  67 69 6e 65 65 72 69 6e  |verse Engineerin|",
    "00000060  67 2c 20 52 69 73 6b 20  41 73 73 65 73 73 6d 65  |g, Risk Assessme|",
    "00000070  6e 74 2c 20 49 6e 63 69  64 65 6e 74 20 52 65 73  |nt, Incident Res|",
    "00000080  70 6f 6e 73 65 20 20 20  20 20 20 20 20 20 20 20  |ponse           |",
    "00000090  50 72 6f 67 72 61 6d 6d  69 6e 67 20 4c 61 6e 67  |Programming Lang|",
    "000000a0  75 61 67 65 73 3a 20 47  6f 2c 20 50 79 74 68 6f  |uages: Go, Pytho|",
    "000000b0  6e 2c 20 43 2b 2b 2c 20  52 75 73 74 2c 20 42 61  |n, C++, Rust, Ba|",
    "000000c0  73 68 2c 20 4a 61 76 61  53 63 72 69 70 74 2c 20  |sh, JavaScript, |",
    "000000d0  52 65 61 63 74 20 20 20  20 20 20 20 20 20 20 20  |React           |",
];

pub const CYBER_SKILLS: [&str; 8] = [
    "Penetration Testing",
    "Red Team Operations",
    "Network Security",
    "OSINT (Open Source Intelligence)",
    "Reverse Engineering",
    "Risk Assessment",
    "Incident Response",
    "Vulnerability Research",
];

pub const TECH_SKILLS: [&str; 8] = [
    "Go Programming",
    "Python Development",
    "C++ Development",
    "Rust Programming",
    "Bash Scripting",
    "Web Development (JS, React)",
    "System Administration",
    "CI/CD & DevSecOps",
];

/// Contact label/value pairs.
pub const CONTACTS: [(&str, &str); 3] = [
    ("GitHub:", "github.com/TheBitty"),
    ("Email:", "youremail@example.com"),
    ("LinkedIn:", "linkedin.com/in/yourprofile"),
];

pub const PUBLIC_KEY: &str = "ssh-rsa AAAAB3NzaC1yc2EAAAADA... thebitty@projects";
