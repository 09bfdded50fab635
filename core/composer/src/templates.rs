//! Fixed word tables behind the chat responder.

/// Domains the classifier scores, in tie-break order
pub const CHAT_DOMAINS: [&str; 8] = [
    "technology",
    "sustainability",
    "education",
    "health",
    "creativity",
    "business",
    "social_impact",
    "art",
];

pub const GENERAL_DOMAIN: &str = "general";

/// Matching any term in the list adds the weight once
pub type KeywordRule = (&'static [&'static str], u32);

/// Scored for every domain
pub const GENERAL_KEYWORDS: [KeywordRule; 6] = [
    (&["app", "application"], 2),
    (&["platform", "system"], 2),
    (&["solution", "solve"], 2),
    (&["help", "assist"], 1),
    (&["community", "people"], 1),
    (&["learn", "education"], 1),
];

pub fn domain_keywords(domain: &str) -> &'static [KeywordRule] {
    match domain {
        "technology" => &[
            (&["ai", "artificial intelligence"], 3),
            (&["blockchain", "crypto"], 3),
            (&["mobile", "app"], 2),
            (&["iot", "internet of things"], 3),
            (&["data", "algorithm"], 2),
        ],
        "sustainability" => &[
            (&["sustainable", "eco"], 3),
            (&["environment", "green"], 3),
            (&["waste", "zero"], 2),
            (&["energy", "renewable"], 2),
            (&["circular", "reuse"], 2),
        ],
        "education" => &[
            (&["learn", "teach"], 3),
            (&["school", "student"], 2),
            (&["course", "training"], 2),
            (&["knowledge", "skill"], 2),
            (&["classroom", "study"], 2),
        ],
        "health" => &[
            (&["health", "wellness"], 3),
            (&["fitness", "exercise"], 2),
            (&["mental", "therapy"], 2),
            (&["nutrition", "diet"], 2),
            (&["medical", "patient"], 2),
        ],
        "creativity" => &[
            (&["creative", "artistic"], 3),
            (&["design", "creative"], 2),
            (&["music", "visual"], 2),
            (&["writing", "story"], 2),
            (&["maker", "craft"], 2),
        ],
        "business" => &[
            (&["business", "startup"], 3),
            (&["market", "customer"], 2),
            (&["revenue", "profit"], 2),
            (&["service", "product"], 2),
            (&["entrepreneur", "venture"], 2),
        ],
        "social_impact" => &[
            (&["impact", "change"], 3),
            (&["community", "social"], 2),
            (&["nonprofit", "charity"], 2),
            (&["advocacy", "awareness"], 2),
            (&["equity", "accessibility"], 2),
        ],
        "art" => &[
            (&["art", "artist"], 3),
            (&["gallery", "exhibition"], 2),
            (&["creative", "expression"], 2),
            (&["culture", "heritage"], 2),
            (&["performance", "theater"], 2),
        ],
        _ => &[],
    }
}

pub fn related_domains(domain: &str) -> &'static [&'static str] {
    match domain {
        "technology" => &["business", "education"],
        "sustainability" => &["social_impact", "health"],
        "education" => &["technology", "creativity"],
        "health" => &["sustainability", "social_impact"],
        "creativity" => &["art", "education"],
        "business" => &["technology", "social_impact"],
        "social_impact" => &["sustainability", "education"],
        "art" => &["creativity", "education"],
        _ => &[],
    }
}

/// `{domain}` is replaced with the user's key term. `general` has no table.
pub fn idea_templates(domain: &str) -> Option<&'static [&'static str]> {
    let templates: &'static [&'static str] = match domain {
        "technology" => &[
            "AI-powered solution to optimize {domain}",
            "Blockchain-based platform for {domain}",
            "IoT system to monitor and improve {domain}",
            "Mobile app to help users with {domain}",
            "AR/VR experience for {domain} education",
        ],
        "sustainability" => &[
            "Circular economy approach to {domain}",
            "Zero-waste solution for {domain}",
            "Renewable energy application in {domain}",
            "Community-driven {domain} initiative",
            "Upcycling project focused on {domain}",
        ],
        "education" => &[
            "Interactive learning platform for {domain}",
            "Gamified approach to teaching {domain}",
            "Peer-to-peer knowledge sharing in {domain}",
            "Virtual reality classroom for {domain}",
            "AI tutor specializing in {domain}",
        ],
        "health" => &[
            "Preventive care approach to {domain}",
            "Mental wellness program for {domain}",
            "Fitness tracking solution for {domain}",
            "Telemedicine platform for {domain}",
            "Nutrition-focused app for {domain}",
        ],
        "creativity" => &[
            "Collaborative workspace for {domain} creators",
            "AI-assisted {domain} generation tool",
            "Cross-media storytelling for {domain}",
            "Creative challenge platform for {domain}",
            "Digital archive for {domain} works",
        ],
        "business" => &[
            "Subscription model for {domain} services",
            "Marketplace connecting {domain} providers",
            "Freemium tool for {domain} professionals",
            "Consulting service specializing in {domain}",
            "White-label solution for {domain} businesses",
        ],
        "social_impact" => &[
            "Non-profit organization addressing {domain}",
            "Crowdfunding platform for {domain} projects",
            "Volunteer network focused on {domain}",
            "Awareness campaign for {domain} issues",
            "Policy advocacy around {domain}",
        ],
        "art" => &[
            "Interactive {domain} installation",
            "Digital gallery for {domain} artists",
            "Collaborative {domain} project platform",
            "{domain} workshop series",
            "Augmented reality {domain} experience",
        ],
        _ => return None,
    };
    Some(templates)
}

const GENERAL_QUESTIONS: &[&str] = &[
    "What specific problem are you trying to solve?",
    "Who would benefit most from this?",
    "What resources do you currently have available?",
    "How would you measure success?",
    "What excites you most about this direction?",
];

/// Domains without their own list fall back to the general questions
pub fn followup_questions(domain: &str) -> &'static [&'static str] {
    match domain {
        "technology" => &[
            "What technology stack interests you most?",
            "Are you targeting consumers or businesses?",
            "What's your technical background?",
            "Do you prefer mobile or web solutions?",
        ],
        "sustainability" => &[
            "Which environmental issue concerns you most?",
            "Do you want to focus on individual or systemic change?",
            "Are you interested in policy or direct action?",
            "What sustainable practices do you already follow?",
        ],
        "education" => &[
            "What age group interests you most?",
            "Do you prefer formal or informal learning?",
            "What subjects do you feel passionate about?",
            "Are you interested in traditional or innovative methods?",
        ],
        _ => GENERAL_QUESTIONS,
    }
}

/// Extra questions keyed on the domain of the first suggested idea
pub fn idea_questions(domain: &str) -> &'static [&'static str] {
    match domain {
        "technology" => &[
            "What's your development experience?",
            "Do you have a technical co-founder in mind?",
        ],
        "sustainability" => &[
            "Have you researched existing solutions?",
            "What's your budget for initial development?",
        ],
        _ => &[],
    }
}

pub fn response_text(domain: &str) -> &'static str {
    match domain {
        "technology" => {
            "Technology is a great field with lots of opportunities! Here are some ideas based on your interest:"
        }
        "sustainability" => {
            "Sustainability is such an important area! Here are some impactful ideas for you:"
        }
        "education" => {
            "Education is fundamental to progress! Here are some learning-focused ideas:"
        }
        "health" => "Health and wellness are crucial! Here are some ideas in this space:",
        "creativity" => "Creativity drives innovation! Here are some creative project ideas:",
        "business" => {
            "Business innovation can create real impact! Here are some entrepreneurial ideas:"
        }
        "social_impact" => {
            "Social impact work is very meaningful! Here are some ways you can make a difference:"
        }
        "art" => "Art enriches our lives! Here are some creative art-related ideas:",
        _ => "That sounds interesting! Here are some ideas based on your input:",
    }
}

/// (trigger terms, tags added)
pub const TAG_RULES: [(&[&str], [&str; 2]); 7] = [
    (&["ai", "artificial intelligence"], ["ai", "automation"]),
    (&["blockchain", "crypto"], ["blockchain", "decentralized"]),
    (&["mobile", "app"], ["mobile", "application"]),
    (&["sustainable", "eco"], ["sustainability", "environmental"]),
    (&["learn", "education"], ["education", "learning"]),
    (&["health", "wellness"], ["health", "wellness"]),
    (&["creative", "art"], ["creativity", "artistic"]),
];

pub const STOP_WORDS: [&str; 14] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

pub const FALLBACK_KEY_TERM: &str = "your area of interest";
