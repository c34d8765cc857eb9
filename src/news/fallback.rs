use super::NewsCandidate;

const FALLBACK: [(&str, &str, &str, &str); 5] = [
    (
        "fallback-1",
        "AI Technology Continues to Transform Industries",
        "Latest developments in artificial intelligence are reshaping how businesses operate across various sectors, from healthcare to finance.",
        "https://example.com/ai-transformation",
    ),
    (
        "fallback-2",
        "Machine Learning Breakthroughs in 2025",
        "Researchers announce significant advances in machine learning algorithms that could revolutionize data processing and analysis.",
        "https://example.com/ml-breakthroughs",
    ),
    (
        "fallback-3",
        "The Future of Generative AI in Content Creation",
        "Exploring how generative AI tools are changing the landscape of content creation and creative industries.",
        "https://example.com/generative-ai-future",
    ),
    (
        "fallback-4",
        "AI Ethics and Responsible Development",
        "Industry leaders discuss the importance of ethical AI development and responsible deployment of artificial intelligence systems.",
        "https://example.com/ai-ethics",
    ),
    (
        "fallback-5",
        "Automation and the Future of Work",
        "How AI-powered automation is reshaping job markets and creating new opportunities for workers in the digital age.",
        "https://example.com/automation-future-work",
    ),
];

/// Fixed list shown whenever the feed cannot be fetched or parsed.
pub fn fallback_candidates() -> Vec<NewsCandidate> {
    FALLBACK
        .iter()
        .map(|(id, title, description, link)| NewsCandidate {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            link: link.to_string(),
            published_at: None,
        })
        .collect()
}
