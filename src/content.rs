//! Static page content.

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub short_name: &'static str,
    pub full_name: &'static str,
    pub greeting: &'static str,
    pub headline: &'static [&'static str],
    pub roles: &'static [&'static str],
    pub tagline: &'static str,
    pub availability: &'static str,
    pub page_title: &'static str,
}

pub const PROFILE: Profile = Profile {
    short_name: "Aksayaa",
    full_name: "Aksayaa S V",
    greeting: "Hey, there",
    headline: &["I AM", "AKSAYAA"],
    roles: &["DIGITAL", "PRODUCT", "DESIGNER"],
    tagline: "Specialized in UI/UX Design, Frontend Development, and exploring new technologies with a passion for creating engaging user experiences.",
    availability: "Available for new opportunities",
    page_title: "UI/UX Designer & Full-Stack Developer",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection { id: "home", label: "home" },
    NavSection { id: "about", label: "about" },
    NavSection { id: "experience", label: "experience" },
    NavSection { id: "skills", label: "skills" },
    NavSection { id: "portfolio", label: "portfolio" },
    NavSection { id: "contact", label: "contact" },
];

pub struct AboutParagraph {
    pub text: &'static str,
    pub highlight: bool,
}

pub const ABOUT: &[AboutParagraph] = &[
    AboutParagraph {
        text: "Hello! I'm Aksayaa S V, a passionate Computer Science and Design student at Rajalakshmi Engineering College. I'm on a mission to bridge the gap between technology and creativity, crafting digital experiences that are not just functional, but truly memorable.",
        highlight: true,
    },
    AboutParagraph {
        text: "My journey began with a simple fascination for how things work behind the screen. This curiosity evolved into a deep passion for both the technical intricacies of development and the artistic nuances of design. I believe that great software is born at the intersection of robust engineering and thoughtful user experience.",
        highlight: false,
    },
    AboutParagraph {
        text: "What sets me apart is my ability to wear multiple hats - from conceptualizing user flows and designing interfaces to architecting databases and optimizing performance. I'm constantly learning, always questioning, and perpetually excited about the next challenge.",
        highlight: false,
    },
    AboutParagraph {
        text: "When I'm not coding or designing, you'll find me exploring the latest tech trends, contributing to open-source projects, or mentoring fellow students. I believe in the power of community and the importance of giving back to the ecosystem that has given me so much.",
        highlight: false,
    },
    AboutParagraph {
        text: "My technical expertise spans across modern web technologies including React, Node.js, Python, and various design tools. I'm particularly passionate about creating accessible, user-centered designs that solve real-world problems while maintaining aesthetic appeal.",
        highlight: false,
    },
];

pub const TRAITS: &[&str] = &[
    "Problem Solver",
    "Creative Thinker",
    "Team Player",
    "Tech Enthusiast",
    "UI/UX Designer",
    "Full-Stack Developer",
];

pub struct Education {
    pub school: &'static str,
    pub period: &'static str,
    pub degree: &'static str,
    pub description: &'static str,
}

pub const EDUCATION: &[Education] = &[
    Education {
        school: "Rajalakshmi Engineering College",
        period: "2022 - 2026",
        degree: "B.E. Computer Science and Design",
        description: "Specializing in the intersection of technology and design, with focus on user experience, software engineering, and innovative problem-solving.",
    },
    Education {
        school: "Chettinad Vidyashram",
        period: "2020 - 2022",
        degree: "Higher Secondary Education",
        description: "Graduated with distinction in the Science stream, laying a strong foundation in mathematics, physics, and computer science.",
    },
    Education {
        school: "Professional Development",
        period: "Ongoing",
        degree: "Continuous Learning",
        description: "Pursuing certifications in cloud technologies, advanced React patterns, and design systems, and a regular at tech meetups and workshops.",
    },
];

pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        title: "Product Design Virtual Internship",
        company: "Accenture",
        period: "Dec 2024",
        description: "Conducted market analysis and executed design iterations using Figma. Collaborated with cross-functional teams to create user-centered design solutions.",
    },
    Experience {
        title: "Machine Learning for Signal Processing",
        company: "ABV-IITM",
        period: "July 2024",
        description: "Applied machine learning techniques to signal processing challenges, developing models for pattern recognition and data analysis.",
    },
    Experience {
        title: "Hackathon Participant",
        company: "PES University - Synapse'2.0",
        period: "April 2024",
        description: "Participated in a 24-hour hackathon focused on developing innovative technology solutions to real-world problems.",
    },
    Experience {
        title: "Web Development Intern",
        company: "NSIC Chennai",
        period: "Jan 2024",
        description: "Contributed to front-end development projects, implementing responsive designs and optimizing web performance.",
    },
];

pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Programming Languages",
        skills: &["Python", "Java", "C", "HTML/CSS", "JavaScript", "SQL"],
    },
    SkillGroup {
        title: "Technologies & Tools",
        skills: &[
            "VS Code",
            "Google Cloud",
            "AWS",
            "React",
            "Express",
            "MongoDB",
            "Matlab",
            "Unity",
            "Blender",
            "Maya",
        ],
    },
];

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "UI/UX Design",
        description: "Creating intuitive, visually appealing interfaces that enhance user experience through thoughtful design, user research, and prototyping with tools like Figma.",
    },
    Service {
        title: "Full-Stack Development",
        description: "Building complete web applications with responsive front-end interfaces and robust back-end systems, utilizing modern frameworks and best practices.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub year: &'static str,
    pub image: &'static str,
    pub github: &'static str,
    pub demo: &'static str,
}

pub const CARD_TECH_LIMIT: usize = 3;

impl Project {
    pub fn visible_technologies(&self) -> &'static [&'static str] {
        let n = self.technologies.len().min(CARD_TECH_LIMIT);
        &self.technologies[..n]
    }

    pub fn hidden_technology_count(&self) -> usize {
        self.technologies.len().saturating_sub(CARD_TECH_LIMIT)
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Accident Detection, Alert & Assistance System",
        description: "ML-based real-time vehicle accident and helmet detection system with immediate alerts",
        technologies: &["Python", "OpenCV", "Flask", "SQLite", "Twilio", "SendGrid"],
        year: "2025",
        image: "https://i.ibb.co/3mznxWPh/image.png",
        github: "https://github.com/aksayaa745/Accident_Detection_ml",
        demo: "https://accidentdetection.demo.app",
    },
    Project {
        title: "3D Endless Runner Game",
        description: "Developed in Unity using Mixamo animations, showcased at college game expo",
        technologies: &["Unity", "C#", "Mixamo", "3D Modeling"],
        year: "2025",
        image: "https://i.ibb.co/1tDgG0ZS/Screenshot-2025-04-23-213907.png",
        github: "https://github.com/aksayaa/endless-runner",
        demo: "https://endlessrunner.demo.app",
    },
    Project {
        title: "WheelWhiz",
        description: "A smart vehicle record at your finger tips",
        technologies: &["React Native", "TensorFlow", "Firebase", "Node.js"],
        year: "2025",
        image: "https://i.ibb.co/YBDksxXk/Screenshot-2025-05-12-114634.png",
        github: "https://github.com/aksayaa/wheelwhiz",
        demo: "https://wheelwhiz.demo.app",
    },
    Project {
        title: "Airline Reservation System",
        description: "Web application with CRUD operations for flight bookings and user management",
        technologies: &["Flask", "MySQL", "HTML/CSS", "JavaScript"],
        year: "2024",
        image: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6",
        github: "https://github.com/aksayaa/airline-reservations",
        demo: "https://airlinereservation.demo.app",
    },
    Project {
        title: "Habit Tracker Mobile App",
        description: "Mobile application to track daily habits and personal goals",
        technologies: &["React Native", "Firebase", "Redux"],
        year: "2023",
        image: "https://images.unsplash.com/photo-1649972904349-6e44c42644a7",
        github: "https://github.com/aksayaa/habit-tracker",
        demo: "https://habittracker.demo.app",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    LinkedIn,
    GitHub,
    Email,
}

impl SocialKind {
    /// Devicon / extra icon class.
    pub fn icon_class(self) -> &'static str {
        match self {
            SocialKind::LinkedIn => "devicon-linkedin-plain",
            SocialKind::GitHub => "devicon-github-plain",
            SocialKind::Email => "extra-email",
        }
    }
}

pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        kind: SocialKind::LinkedIn,
        label: "linkedin.com/in/aksayaa-s-v",
        href: "https://www.linkedin.com/in/aksayaa-s-v-a80b962a8/",
    },
    SocialLink {
        kind: SocialKind::GitHub,
        label: "github.com/aksayaa745",
        href: "https://github.com/aksayaa745",
    },
    SocialLink {
        kind: SocialKind::Email,
        label: "aksayaa745@gmail.com",
        href: "mailto:aksayaa745@gmail.com",
    },
];

pub struct ContactDetails {
    pub heading: &'static str,
    pub blurb: &'static str,
    pub email: &'static str,
}

pub const CONTACT: ContactDetails = ContactDetails {
    heading: "Let's Connect",
    blurb: "Feel free to reach out for collaborations, opportunities, or just to say hello! I'm always open to discussing new projects and ideas.",
    email: "aksayaa745@gmail.com",
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_ids_are_unique() {
        let ids: HashSet<_> = NAV_SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), NAV_SECTIONS.len());
        assert_eq!(NAV_SECTIONS.last().map(|s| s.id), Some("contact"));
    }

    #[test]
    fn card_tech_overflow() {
        let accident = &PROJECTS[0];
        assert_eq!(accident.visible_technologies(), &["Python", "OpenCV", "Flask"]);
        assert_eq!(accident.hidden_technology_count(), 3);
        let habits = &PROJECTS[4];
        assert_eq!(habits.visible_technologies().len(), 3);
        assert_eq!(habits.hidden_technology_count(), 0);
    }

    #[test]
    fn project_links_are_absolute() {
        for p in PROJECTS {
            assert!(p.github.starts_with("https://"), "{}", p.title);
            assert!(p.demo.starts_with("https://"), "{}", p.title);
        }
    }
}
