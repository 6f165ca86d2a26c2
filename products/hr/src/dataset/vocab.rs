//! Fixed vocabularies the generator draws from.

pub const MALE_FIRST_NAMES: &[&str] = &[
    "James", "Robert", "John", "Michael", "David", "William", "Richard", "Joseph", "Thomas",
    "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Steven", "Paul", "Andrew", "Kevin",
    "Brian", "George", "Omar", "Luis", "Hiroshi", "Mateo",
];

pub const FEMALE_FIRST_NAMES: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica", "Sarah",
    "Karen", "Lisa", "Nancy", "Sandra", "Ashley", "Emily", "Donna", "Michelle", "Laura", "Grace",
    "Amina", "Sofia", "Yuki", "Priya", "Elena",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Thomas", "Taylor", "Moore",
    "Jackson", "Martin", "Lee", "Thompson", "White", "Harris", "Clark", "Lewis", "Walker",
    "Hall", "Young", "King", "Wright", "Nguyen", "Patel", "Kowalski", "Okafor",
];

pub const EMAIL_DOMAINS: &[&str] = &["example.com", "mail.test", "inbox.test", "post.test"];

pub const STREET_NAMES: &[&str] = &[
    "Maple", "Oak", "Cedar", "Pine", "Elm", "Washington", "Lake", "Hill", "Park", "Main",
    "Sunset", "Ridge", "River", "Mill", "Church",
];

pub const STREET_SUFFIXES: &[&str] = &["Street", "Avenue", "Road", "Lane", "Drive", "Court"];

pub const RELATIONSHIPS: &[&str] = &["Spouse", "Parent", "Sibling", "Friend"];

pub const EMPLOYEE_SKILLS: &[&str] = &[
    "Leadership",
    "Problem Solving",
    "Communication",
    "Technical Skills",
    "Project Management",
    "Quality Control",
    "Safety Protocols",
    "Equipment Operation",
];

pub const CERTIFICATIONS: &[&str] = &[
    "ISO 9001",
    "Six Sigma",
    "PMP",
    "OSHA 30",
    "Lean Manufacturing",
    "First Aid",
    "Forklift Operation",
    "Welding Certification",
];

pub const TRAINING_TITLES: &[&str] = &[
    "Safety Training Workshop",
    "Leadership Development",
    "Technical Skills Enhancement",
    "Quality Management System",
    "Lean Manufacturing Principles",
    "Emergency Response Training",
    "Communication Skills",
    "Project Management Fundamentals",
    "Equipment Operation Training",
    "Health and Safety Protocols",
];

pub const ATTENDANCE_LOCATIONS: &[&str] =
    &["Main Factory", "Office Building", "Warehouse", "Remote"];

pub const REVIEW_PERIODS: &[&str] = &["Q1 2025", "Q2 2024", "Q3 2024", "Q4 2024"];

pub const GOALS: &[&str] = &[
    "Improve production efficiency",
    "Complete safety certification",
    "Lead team training sessions",
    "Reduce equipment downtime",
    "Enhance quality control processes",
    "Develop new procedures",
];

pub const ACHIEVEMENTS: &[&str] = &[
    "Exceeded production targets",
    "Zero safety incidents",
    "Successful project completion",
    "Team leadership excellence",
    "Process improvement implementation",
    "Cost reduction initiative",
];

pub const IMPROVEMENT_AREAS: &[&str] = &[
    "Communication skills",
    "Time management",
    "Technical knowledge",
    "Leadership development",
    "Problem-solving approach",
    "Documentation practices",
];

pub const JOB_LOCATIONS: &[&str] = &["Main Plant", "Office Building", "Remote", "Warehouse"];

pub const JOB_REQUIREMENTS: &[&str] = &[
    "Bachelor's degree in relevant field",
    "3+ years experience",
    "Safety certification required",
    "Leadership experience",
    "Technical expertise in manufacturing",
    "Strong communication skills",
    "Problem-solving abilities",
    "Team collaboration skills",
];

pub const CANDIDATE_SKILLS: &[&str] = &[
    "Manufacturing",
    "Quality Control",
    "Safety Management",
    "Leadership",
    "Project Management",
    "Technical Skills",
    "Problem Solving",
    "Team Work",
    "Communication",
];

pub const INSURERS: &[&str] = &[
    "Northwind Mutual",
    "Harbor Life Group",
    "Summit Health Partners",
    "Bluegate Assurance",
    "Crescent Benefits Co",
    "Keystone Insurance",
];

pub const ACCIDENT_LOCATIONS: &[&str] =
    &["Assembly Line 3", "Warehouse B", "Loading Dock", "Maintenance Shop"];

pub const POLICY_NUMBER_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const FILLER_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua",
    "enim", "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris",
    "nisi", "aliquip", "ex", "ea", "commodo", "consequat",
];
