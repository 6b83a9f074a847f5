use crate::models::{Filter, Topic};

pub const TOPIC_FILTERS: &[Filter] = &[
    Filter::all("All Topics"),
    Filter::topics("frontend", "Frontend", &["nextjs", "styling"]),
    Filter::topics("backend", "Backend", &["express", "databases", "authentication"]),
    Filter::topics("tools", "Tools", &["git", "library", "deployment"]),
];

pub const TOPICS: &[Topic] = &[
    Topic {
        id: "nextjs",
        title: "Next.js",
        description: "Complete Next.js configuration with TypeScript, Tailwind, Auth, Database, and more.",
        tags: &["Next.js", "React", "TypeScript", "Tailwind", "Auth"],
        snippet_count: 24,
        last_updated: "2 days ago",
        page: Some("nextjs"),
    },
    Topic {
        id: "express",
        title: "Express.js Setup & API Development",
        description: "Express.js server setup, middleware, routing, authentication, and REST API patterns.",
        tags: &["Express", "Node.js", "REST API", "Middleware", "Authentication"],
        snippet_count: 18,
        last_updated: "1 week ago",
        page: Some("express"),
    },
    Topic {
        id: "git",
        title: "Git & GitHub Commands",
        description: "Essential Git commands, workflows, branching strategies, and GitHub best practices.",
        tags: &["Git", "GitHub", "Version Control", "Commands", "Workflow"],
        snippet_count: 32,
        last_updated: "3 days ago",
        page: None,
    },
    Topic {
        id: "library",
        title: "Web Development Library",
        description: "Collection of useful libraries, tools, components, and development resources.",
        tags: &["Libraries", "Tools", "Components", "Resources"],
        snippet_count: 45,
        last_updated: "Yesterday",
        page: None,
    },
    Topic {
        id: "databases",
        title: "Database Integration",
        description: "MongoDB, PostgreSQL setup, ORMs, connection pooling, and query optimization.",
        tags: &["MongoDB", "PostgreSQL", "ORM", "Database", "Queries"],
        snippet_count: 28,
        last_updated: "4 days ago",
        page: None,
    },
    Topic {
        id: "authentication",
        title: "Authentication & Security",
        description: "NextAuth, JWT, OAuth, sessions, role-based access control, and security best practices.",
        tags: &["Auth", "Security", "NextAuth", "JWT", "OAuth"],
        snippet_count: 16,
        last_updated: "1 week ago",
        page: None,
    },
    Topic {
        id: "styling",
        title: "Styling & UI Components",
        description: "Tailwind CSS, component libraries, animation libraries, and responsive design patterns.",
        tags: &["Tailwind", "CSS", "UI", "Components", "Animation"],
        snippet_count: 22,
        last_updated: "2 days ago",
        page: None,
    },
    Topic {
        id: "deployment",
        title: "Deployment & DevOps",
        description: "Vercel, Docker, CI/CD, environment variables, monitoring, and performance optimization.",
        tags: &["Deployment", "DevOps", "Docker", "CI/CD", "Vercel"],
        snippet_count: 19,
        last_updated: "5 days ago",
        page: None,
    },
];
