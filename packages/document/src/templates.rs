//! Prefilled content for newly added blocks and list items.

use crate::node::Node;
use serde_json::json;

/// Template names offered by the "add block" menu
pub const BLOCK_TEMPLATES: [&str; 18] = [
    "hero-video",
    "features",
    "features-gradient",
    "gallery",
    "testimonials",
    "timeline",
    "process",
    "team",
    "steps",
    "manifesto",
    "value-proposition",
    "philosophy",
    "pull-quotes",
    "two-column-info",
    "content",
    "ticker",
    "cta",
    "contactForm",
];

/// Prefilled fields for a block template, if the template is known
pub fn template_data(template: &str) -> Option<Node> {
    let value = match template {
        "features" => json!({
            "title": "Our Advantages",
            "description": "We combine technology and design to deliver the best solutions on the market.",
            "items": [
                {"title": "High Speed", "description": "Instant loading and optimized resources.", "icon": "Zap"},
                {"title": "Security", "description": "Your data is protected by strong encryption.", "icon": "Shield"},
                {"title": "24/7 Support", "description": "Our team is always ready to help.", "icon": "LifeBuoy"},
                {"title": "Scalability", "description": "Grow without limits together with us.", "icon": "TrendingUp"}
            ]
        }),
        "features-gradient" => json!({
            "title": "Premium Features",
            "subtitle": "Experience the next level of design with glassmorphism and vibrant gradients.",
            "backgroundType": "linear",
            "gradientStart": "#4f46e5",
            "gradientEnd": "#9333ea",
            "bgDirection": "135",
            "textColor": "#ffffff",
            "cardStyle": "glass",
            "itemTitleColor": "#ffffff",
            "itemDescColor": "rgba(255,255,255,0.8)",
            "items": [
                {"title": "Glass UI", "description": "Elegant semi-transparent cards that blend with the background.", "icon": "Layers"},
                {"title": "Vibrant Style", "description": "Dynamic linear gradients for high visual impact.", "icon": "Zap"},
                {"title": "Precision", "description": "Clean typography optimized for dark environments.", "icon": "Award"}
            ]
        }),
        "gallery" => json!({
            "title": "Our Work",
            "description": "A look at our latest projects.",
            "layout": "grid",
            "items": [
                {"url": "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&w=800&q=80", "title": "Office"},
                {"url": "https://images.unsplash.com/photo-1551434678-e076c223a692?auto=format&fit=crop&w=800&q=80", "title": "Team"},
                {"url": "https://images.unsplash.com/photo-1522071820081-009f0129c71c?auto=format&fit=crop&w=800&q=80", "title": "Meeting"}
            ]
        }),
        "testimonials" => json!({
            "title": "Client Reviews",
            "description": "What industry leaders say about us.",
            "items": [
                {"name": "Alex Peterson", "role": "CEO, TechCorp", "content": "The best tool we have used. Productivity grew by 200%.", "avatar": "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&w=150&q=80"},
                {"name": "Maria Ivanova", "role": "CMO", "content": "Stunning design and great usability.", "avatar": "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&w=150&q=80"}
            ]
        }),
        "timeline" => json!({
            "title": "Our Story",
            "description": "How we have grown over the last years.",
            "items": [
                {"title": "Founded", "date": "2021", "description": "We started with a small office and a big dream."},
                {"title": "First Million", "date": "2022", "description": "Reached a landmark number of users."},
                {"title": "Going Global", "date": "2023", "description": "Opened offices in Europe and Asia."}
            ]
        }),
        "process" => json!({
            "title": "How We Work",
            "description": "A simple and transparent process.",
            "items": [
                {"title": "Analysis", "description": "We study your goals.", "icon": "Search"},
                {"title": "Strategy", "description": "We build a plan.", "icon": "Map"},
                {"title": "Delivery", "description": "We create the product.", "icon": "Cpu"},
                {"title": "Launch", "description": "We bring it to market.", "icon": "Rocket"}
            ]
        }),
        "team" => json!({
            "title": "Our Team",
            "description": "The experts behind our success.",
            "items": [
                {"name": "Dmitry Volkov", "role": "Founder", "bio": "Visionary with 15 years of experience.", "avatar": "https://images.unsplash.com/photo-1560250097-0b93528c311a?auto=format&fit=crop&w=400&q=80"},
                {"name": "Elena Sokolova", "role": "Art Director", "bio": "Creates inspiring styles.", "avatar": "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&w=400&q=80"}
            ]
        }),
        "steps" => json!({
            "title": "Steps to Success",
            "description": "A few simple actions stand between you and your goal.",
            "items": [
                {"title": "Sign Up", "description": "Create an account in 30 seconds."},
                {"title": "Configure", "description": "Tell us your preferences."},
                {"title": "Result", "description": "Get a ready-made solution."}
            ]
        }),
        "manifesto" => json!({
            "title": "Our Manifesto",
            "items": [
                {"text": "We believe in simplicity.", "highlight": true},
                {"text": "Quality over quantity.", "highlight": false},
                {"text": "Innovation is key.", "highlight": true},
                {"text": "Customer first.", "highlight": false}
            ]
        }),
        "value-proposition" => json!({
            "title": "Why Us?",
            "description": "Value for your business.",
            "items": [
                {"text": "Save time up to 40%", "icon": "Clock"},
                {"text": "2x conversion growth", "icon": "TrendingUp"},
                {"text": "Process automation", "icon": "Zap"},
                {"text": "Result guarantee", "icon": "CheckCircle"}
            ]
        }),
        "philosophy" => json!({
            "title": "Our Philosophy",
            "description": "Principles we live by.",
            "items": [
                {"title": "Transparency", "content": "Openness in everything.", "icon": "Sun", "backgroundColor": "#FEF3C7", "titleColor": "#92400E", "textColor": "#92400E"},
                {"title": "Growth", "content": "Continuous learning.", "icon": "TrendingUp", "backgroundColor": "#DBEAFE", "titleColor": "#1E40AF", "textColor": "#1E40AF"},
                {"title": "Empathy", "content": "We value people.", "icon": "Heart", "backgroundColor": "#FCE7F3", "titleColor": "#9D174D", "textColor": "#9D174D"}
            ]
        }),
        "pull-quotes" => json!({
            "title": "Quote",
            "items": [
                {"quote": "Design is not just what it looks like and feels like. Design is how it works.", "author": "Steve Jobs", "role": "Visionary"}
            ]
        }),
        "two-column-info" => json!({
            "title": "About Project",
            "description": "Mission details.",
            "content": "We build the tools of the future today. Join thousands of satisfied users.",
            "image": "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?auto=format&fit=crop&w=800&q=80",
            "imagePosition": "right"
        }),
        "content" => json!({
            "title": "Text Block",
            "content": "Add any content here. Easily editable and formatable.",
            "image": "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?auto=format&fit=crop&w=800&q=80"
        }),
        "ticker" => json!({
            "tickerSpeed": "20",
            "tickerDirection": "left",
            "tickerSeparator": "•",
            "tickerBg": "#000000",
            "tickerText": "#ffffff",
            "tickerFontSize": "24",
            "items": [
                {"title": "BREAKING NEWS"},
                {"title": "SPECIAL OFFER"},
                {"title": "LIMITED TIME ONLY"},
                {"title": "SUBSCRIBE NOW"}
            ]
        }),
        "cta" => json!({
            "title": "Ready to Start?",
            "subtitle": "Join today",
            "ctaText": "Get Started Free",
            "ctaLink": "#"
        }),
        "contactForm" => json!({
            "title": "Contact Us",
            "subtitle": "We will respond within an hour"
        }),
        "hero-video" => json!({
            "title": "Cinematic Experience",
            "subtitle": "Captivate your audience with stunning high-quality video backgrounds.",
            "layout": "video",
            "backgroundImage": "https://assets.mixkit.co/videos/preview/mixkit-starry-night-sky-over-a-calm-lake-4315-large.mp4",
            "ctaText": "Explore More",
            "ctaLink": "#",
            "show": true
        }),
        _ => return None,
    };

    Some(Node::from(value))
}

/// Renderer type of a block created from `template` (text before the first `-`)
pub fn block_type(template: &str) -> &str {
    template.split_once('-').map_or(template, |(head, _)| head)
}

/// Build a new content block from a template.
///
/// Unknown templates produce a bare block. Template fields win over the
/// generic defaults.
pub fn new_block(template: &str, id: &str) -> Node {
    let data = template_data(template).unwrap_or_else(Node::empty_map);

    let title = data.get("title").cloned().unwrap_or_else(|| Node::from("New Block"));
    let description = data
        .get("description")
        .cloned()
        .unwrap_or_else(|| Node::from("Description..."));
    let items = data.get("items").cloned().unwrap_or_else(|| Node::list(vec![]));

    let mut fields = vec![
        ("id".to_string(), Node::from(id)),
        ("type".to_string(), Node::from(block_type(template))),
        ("title".to_string(), title),
        ("show".to_string(), Node::Bool(true)),
        ("description".to_string(), description),
        ("items".to_string(), items),
    ];
    if let Some(extra) = data.as_map() {
        fields.extend(
            extra
                .iter()
                .filter(|(key, _)| key.as_str() != "items")
                .map(|(key, value)| (key.clone(), value.clone())),
        );
    }

    Node::map(fields)
}

/// Default item appended to a content block's `items`
pub fn new_block_item(block_type: &str) -> Node {
    let value = match block_type {
        "features" | "features-gradient" => {
            json!({"title": "Feature", "description": "Description", "icon": "Zap"})
        }
        "gallery" => json!({"title": "Image", "url": "https://placehold.co/600x400"}),
        _ => json!({"title": "New Item", "description": "Description"}),
    };
    Node::from(value)
}

/// Default item appended to a singleton section's collection
pub fn new_section_item(section: &str) -> Node {
    let value = match section {
        "navbar" => json!({"label": "New Link", "href": "#"}),
        _ => json!({"title": "New Item", "description": "Description"}),
    };
    Node::from(value)
}
