/// Category catalog inserted by the idempotent seed
pub const DEFAULT_CATEGORIES: [&str; 10] = [
    "Web Development",
    "Graphic Design",
    "Content Writing",
    "Social Media",
    "Teaching",
    "Event Planning",
    "Photography",
    "Translation",
    "First Aid",
    "Project Management",
];

/// Message returned for every failed login, whatever the cause
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
