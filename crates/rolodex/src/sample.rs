//! Sample datasets for every screen.
//!
//! The records are fixed. Dates are chosen relative to [`today`], which
//! stands in for the current date when the samples are displayed.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::Record;

/// The date the sample data treats as "now".
pub fn today() -> NaiveDate {
    day(2024, 3, 20)
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Connections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Record)]
pub struct Connection {
    pub id: u32,
    #[field(Text)]
    pub name: String,
    #[field(Text)]
    pub title: String,
    #[field(Text)]
    pub company: String,
    /// founder, engineer, researcher, investor, designer
    #[field(Text)]
    pub role: String,
    #[field(Text)]
    pub location: String,
    #[field(Number, rename = "mutual")]
    pub mutual_connections: u32,
    #[field(Timestamp)]
    pub connected_at: NaiveDate,
    pub avatar: String,
}

pub fn connections() -> Vec<Connection> {
    #[allow(clippy::too_many_arguments)]
    fn connection(
        id: u32,
        name: &str,
        title: &str,
        company: &str,
        role: &str,
        location: &str,
        mutual: u32,
        connected_at: NaiveDate,
    ) -> Connection {
        Connection {
            id,
            name: name.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            role: role.to_string(),
            location: location.to_string(),
            mutual_connections: mutual,
            connected_at,
            avatar: format!("/avatars/{}.jpg", id),
        }
    }

    vec![
        connection(
            1,
            "Sarah Al-Rashid",
            "Founder & CEO",
            "Nuqta Labs",
            "founder",
            "Dubai, UAE",
            24,
            day(2024, 3, 12),
        ),
        connection(
            2,
            "Omar Haddad",
            "Senior Software Engineer",
            "Careem",
            "engineer",
            "Amman, Jordan",
            12,
            day(2024, 2, 20),
        ),
        connection(
            3,
            "Dr. Fatima Al-Zahra",
            "AI Research Lead",
            "KAUST",
            "researcher",
            "Riyadh, Saudi Arabia",
            31,
            day(2024, 1, 15),
        ),
        connection(
            4,
            "Layla Kassem",
            "Co-founder",
            "Tamra Health",
            "founder",
            "Abu Dhabi, UAE",
            8,
            day(2023, 11, 2),
        ),
        connection(
            5,
            "Youssef Mansour",
            "Partner",
            "Gulf Ventures",
            "investor",
            "Doha, Qatar",
            17,
            day(2024, 3, 1),
        ),
    ]
}

// ============================================================================
// Connection requests
// ============================================================================

#[derive(Debug, Clone, PartialEq, Record)]
pub struct ConnectionRequest {
    pub id: u32,
    #[field(Text)]
    pub name: String,
    #[field(Text)]
    pub title: String,
    #[field(Text)]
    pub company: String,
    /// "received" or "sent"
    #[field(Text)]
    pub direction: String,
    #[field(Text, optional)]
    pub message: Option<String>,
    #[field(Number, rename = "mutual")]
    pub mutual_connections: u32,
    #[field(Timestamp)]
    pub sent_at: NaiveDate,
}

pub fn connection_requests() -> Vec<ConnectionRequest> {
    #[allow(clippy::too_many_arguments)]
    fn request(
        id: u32,
        name: &str,
        title: &str,
        company: &str,
        direction: &str,
        message: Option<&str>,
        mutual: u32,
        sent_at: NaiveDate,
    ) -> ConnectionRequest {
        ConnectionRequest {
            id,
            name: name.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            direction: direction.to_string(),
            message: message.map(str::to_string),
            mutual_connections: mutual,
            sent_at,
        }
    }

    vec![
        request(
            1,
            "Hana Saleh",
            "Product Manager",
            "Talabat",
            "received",
            Some("Loved your talk at Step Dubai"),
            6,
            day(2024, 3, 19),
        ),
        request(
            2,
            "Karim Nasser",
            "Data Scientist",
            "Anghami",
            "received",
            None,
            3,
            day(2024, 3, 14),
        ),
        request(
            3,
            "Rania Aziz",
            "VC Associate",
            "BECO Capital",
            "sent",
            Some("Would love to connect about climate tech"),
            9,
            day(2024, 3, 8),
        ),
        request(
            4,
            "Tariq Bensalem",
            "Frontend Engineer",
            "Yassir",
            "received",
            None,
            1,
            day(2024, 2, 2),
        ),
    ]
}

// ============================================================================
// Discover profiles
// ============================================================================

#[derive(Debug, Clone, PartialEq, Record)]
pub struct Profile {
    pub id: u32,
    #[field(Text)]
    pub name: String,
    #[field(Text)]
    pub headline: String,
    #[field(Text)]
    pub company: String,
    #[field(Text)]
    pub industry: String,
    #[field(Text)]
    pub location: String,
    #[field(Tags)]
    pub skills: Vec<String>,
    #[field(Number, rename = "mutual")]
    pub mutual_connections: u32,
    #[field(Bool)]
    pub open_to_work: bool,
}

pub fn profiles() -> Vec<Profile> {
    #[allow(clippy::too_many_arguments)]
    fn profile(
        id: u32,
        name: &str,
        headline: &str,
        company: &str,
        industry: &str,
        location: &str,
        skills: &[&str],
        mutual: u32,
        open_to_work: bool,
    ) -> Profile {
        Profile {
            id,
            name: name.to_string(),
            headline: headline.to_string(),
            company: company.to_string(),
            industry: industry.to_string(),
            location: location.to_string(),
            skills: strings(skills),
            mutual_connections: mutual,
            open_to_work,
        }
    }

    vec![
        profile(
            1,
            "Nour El-Din",
            "Machine Learning Engineer",
            "G42",
            "Technology",
            "Abu Dhabi, UAE",
            &["Python", "PyTorch", "MLOps"],
            14,
            false,
        ),
        profile(
            2,
            "Mariam Farouk",
            "Growth Marketer",
            "Noon",
            "E-commerce",
            "Cairo, Egypt",
            &["SEO", "Analytics"],
            5,
            true,
        ),
        profile(
            3,
            "Ahmed Zaki",
            "Fintech Founder",
            "Tabby",
            "Finance",
            "Riyadh, Saudi Arabia",
            &["Payments", "Fundraising"],
            22,
            false,
        ),
        profile(
            4,
            "Salma Haddad",
            "UX Designer",
            "Property Finder",
            "Technology",
            "Dubai, UAE",
            &["Figma", "User Research"],
            9,
            true,
        ),
        profile(
            5,
            "José Martínez",
            "Cloud Architect",
            "AWS",
            "Technology",
            "Manama, Bahrain",
            &["AWS", "Kubernetes"],
            2,
            false,
        ),
    ]
}

// ============================================================================
// Communities
// ============================================================================

#[derive(Debug, Clone, PartialEq, Record)]
pub struct Community {
    pub id: u32,
    #[field(Text)]
    pub name: String,
    #[field(Text)]
    pub category: String,
    #[field(Text)]
    pub description: String,
    #[field(Number)]
    pub members: u64,
    #[field(Tags)]
    pub topics: Vec<String>,
    #[field(Bool)]
    pub joined: bool,
    #[field(Timestamp)]
    pub created_at: NaiveDate,
}

pub fn communities() -> Vec<Community> {
    #[allow(clippy::too_many_arguments)]
    fn community(
        id: u32,
        name: &str,
        category: &str,
        description: &str,
        members: u64,
        topics: &[&str],
        joined: bool,
        created_at: NaiveDate,
    ) -> Community {
        Community {
            id,
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            members,
            topics: strings(topics),
            joined,
            created_at,
        }
    }

    vec![
        community(
            1,
            "MENA Founders Circle",
            "Entrepreneurship",
            "Peer support for founders across the region",
            2_400,
            &["startups", "fundraising"],
            true,
            day(2022, 5, 10),
        ),
        community(
            2,
            "Women in Tech Gulf",
            "Technology",
            "Mentorship and career growth for women in tech",
            1_850,
            &["diversity", "careers"],
            false,
            day(2021, 9, 1),
        ),
        community(
            3,
            "Product Managers Arabia",
            "Product",
            "Product craft, discovery and delivery",
            890,
            &["product", "roadmaps"],
            true,
            day(2023, 2, 14),
        ),
        community(
            4,
            "AI Research Collective",
            "Technology",
            "Reading group and paper discussions",
            3_200,
            &["machine learning", "research"],
            false,
            day(2023, 8, 21),
        ),
        community(
            5,
            "Climate Tech MENA",
            "Sustainability",
            "Builders working on energy, water and food",
            640,
            &["climate", "energy"],
            false,
            day(2024, 1, 9),
        ),
    ]
}

// ============================================================================
// Events
// ============================================================================

#[derive(Debug, Clone, PartialEq, Record)]
pub struct Event {
    pub id: u32,
    #[field(Text)]
    pub title: String,
    #[field(Text)]
    pub organizer: String,
    /// "online" or "in-person"
    #[field(Text)]
    pub format: String,
    /// Online events have no venue.
    #[field(Text, optional)]
    pub venue: Option<String>,
    #[field(Timestamp)]
    pub starts_at: DateTime<Utc>,
    #[field(Number)]
    pub attendees: u32,
    #[field(Tags)]
    pub tags: Vec<String>,
    #[field(Bool)]
    pub registered: bool,
}

pub fn events() -> Vec<Event> {
    #[allow(clippy::too_many_arguments)]
    fn event(
        id: u32,
        title: &str,
        organizer: &str,
        format: &str,
        venue: Option<&str>,
        starts_at: DateTime<Utc>,
        attendees: u32,
        tags: &[&str],
        registered: bool,
    ) -> Event {
        Event {
            id,
            title: title.to_string(),
            organizer: organizer.to_string(),
            format: format.to_string(),
            venue: venue.map(str::to_string),
            starts_at,
            attendees,
            tags: strings(tags),
            registered,
        }
    }

    vec![
        event(
            1,
            "Step Conference 2024",
            "Step",
            "in-person",
            Some("Dubai Internet City, UAE"),
            at(2024, 3, 27, 9, 0),
            8_500,
            &["startups", "conference"],
            true,
        ),
        event(
            2,
            "Fundraising Office Hours",
            "MENA Founders Circle",
            "online",
            None,
            at(2024, 3, 21, 16, 0),
            120,
            &["fundraising"],
            false,
        ),
        event(
            3,
            "LEAP Tech Summit",
            "LEAP",
            "in-person",
            Some("Riyadh Front, Saudi Arabia"),
            at(2024, 3, 4, 9, 30),
            1_200,
            &["conference", "ai"],
            false,
        ),
        event(
            4,
            "Design Systems Meetup",
            "Product Managers Arabia",
            "in-person",
            Some("Amman, Jordan"),
            at(2024, 4, 11, 18, 30),
            85,
            &["design", "product"],
            false,
        ),
        event(
            5,
            "Paper Club: Retrieval",
            "AI Research Collective",
            "online",
            None,
            at(2024, 3, 22, 19, 0),
            64,
            &["research", "machine learning"],
            true,
        ),
    ]
}

// ============================================================================
// Feed posts
// ============================================================================

#[derive(Debug, Clone, PartialEq, Record)]
pub struct Post {
    pub id: u32,
    #[field(Text)]
    pub author: String,
    #[field(Text)]
    pub author_title: String,
    #[field(Text)]
    pub content: String,
    #[field(Tags)]
    pub hashtags: Vec<String>,
    #[field(Number)]
    pub likes: u32,
    #[field(Number)]
    pub comments: u32,
    #[field(Timestamp)]
    pub posted_at: DateTime<Utc>,
}

pub fn posts() -> Vec<Post> {
    #[allow(clippy::too_many_arguments)]
    fn post(
        id: u32,
        author: &str,
        author_title: &str,
        content: &str,
        hashtags: &[&str],
        likes: u32,
        comments: u32,
        posted_at: DateTime<Utc>,
    ) -> Post {
        Post {
            id,
            author: author.to_string(),
            author_title: author_title.to_string(),
            content: content.to_string(),
            hashtags: strings(hashtags),
            likes,
            comments,
            posted_at,
        }
    }

    vec![
        post(
            1,
            "Sarah Al-Rashid",
            "Founder & CEO at Nuqta Labs",
            "We just closed our seed round. Grateful to everyone who believed early.",
            &["startups", "fundraising"],
            1_200,
            86,
            at(2024, 3, 19, 8, 15),
        ),
        post(
            2,
            "Dr. Fatima Al-Zahra",
            "AI Research Lead at KAUST",
            "Our paper on Arabic language models was accepted. Preprint below.",
            &["ai", "research"],
            890,
            42,
            at(2024, 3, 18, 13, 40),
        ),
        post(
            3,
            "Omar Haddad",
            "Senior Software Engineer at Careem",
            "Hiring two backend engineers in Amman. Rust experience a plus.",
            &["hiring", "engineering"],
            310,
            27,
            at(2024, 3, 20, 7, 5),
        ),
        post(
            4,
            "Layla Kassem",
            "Co-founder at Tamra Health",
            "Three lessons from building a healthtech company in Abu Dhabi.",
            &["healthtech", "startups"],
            2_450,
            133,
            at(2024, 2, 28, 10, 0),
        ),
    ]
}
