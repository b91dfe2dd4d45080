//! Initial document for a fresh editing session.

use crate::node::Node;
use crate::schema::{CONTENT_BLOCKS_KEY, SECTION_ORDER_KEY};
use serde_json::json;

/// Records merged field by field (defaults first) by [`merge_over_defaults`]
pub const MERGED_RECORDS: [&str; 10] = [
    "navbar",
    "hero",
    "personalHero",
    "features",
    "gallery",
    "testimonials",
    "cta",
    "contactForm",
    "footer",
    "design",
];

/// Default landing page shown when the editor starts
pub fn default_document() -> Node {
    Node::from(json!({
        "theme": "light",
        "primaryColor": "#2563eb",
        "secondaryColor": "#4f46e5",
        "buttonTextColor": "#ffffff",
        "backgroundColor": "#ffffff",
        "backgroundType": "solid",
        "gradientStart": "#ffffff",
        "gradientEnd": "#f3f4f6",
        "surfaceColor": "#f3f4f6",
        "fontHeading": "Inter",
        "fontBody": "Inter",
        "borderRadius": "lg",
        "enableAnimations": true,
        "scrollBehavior": "smooth",
        "design": {
            "animation": "slide-up",
            "animationDuration": "normal",
            "buttonStyle": "rounded",
            "buttonEffect": "none",
            "cardStyle": "flat",
            "cardHover": "lift",
            "scrollWidth": 10,
            "scrollRadius": 10
        },
        "sectionOrder": ["navbar", "hero", "features", "gallery", "testimonials", "cta", "contactForm", "footer"],
        "navbar": {
            "id": "navbar", "type": "navbar", "show": true,
            "logoText": "LandingGen",
            "links": [
                {"label": "Features", "href": "#features"},
                {"label": "Gallery", "href": "#gallery"},
                {"label": "Testimonials", "href": "#testimonials"}
            ],
            "showLanguageSwitcher": true,
            "showThemeToggle": true,
            "supportedLanguages": ["en", "ua", "ru"],
            "behavior": "sticky",
            "glassEffect": true,
            "transparentOnTop": false
        },
        "hero": {
            "id": "hero", "type": "hero", "show": true,
            "title": "Build Faster with AI",
            "subtitle": "Generate high-converting landing pages in seconds.",
            "ctaText": "Get Started Free",
            "ctaLink": "#",
            "showButton": true,
            "image": "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&w=800&q=80",
            "imageSize": "large",
            "imageAspectRatio": "auto",
            "imageEffect": "shadow",
            "imageBorder": false,
            "imagePosition": "right",
            "enableFloatingAnimation": false,
            "imageAnimation": "none",
            "imageAnimationDuration": "normal"
        },
        "personalHero": {"id": "personalHero", "type": "personalHero", "show": false, "items": []},
        "features": {
            "id": "features", "type": "features", "show": true,
            "title": "Why Choose Us",
            "subtitle": "Everything you need to build your website.",
            "items": [
                {"title": "Fast Performance", "description": "Optimized for speed and efficiency.", "icon": "Zap"},
                {"title": "Secure", "description": "Built with security in mind.", "icon": "Shield"},
                {"title": "Responsive", "description": "Looks great on all devices.", "icon": "Smartphone"}
            ]
        },
        "gallery": {
            "id": "gallery", "type": "gallery", "show": true,
            "title": "Our Work",
            "subtitle": "A glimpse into our recent projects.",
            "items": [
                {"url": "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&w=800&q=80", "title": "Office Space"},
                {"url": "https://images.unsplash.com/photo-1551434678-e076c223a692?auto=format&fit=crop&w=800&q=80", "title": "Team Meeting"},
                {"url": "https://images.unsplash.com/photo-1522071820081-009f0129c71c?auto=format&fit=crop&w=800&q=80", "title": "Collaboration"}
            ]
        },
        "testimonials": {
            "id": "testimonials", "type": "testimonials", "show": true,
            "title": "What Clients Say",
            "items": [
                {"name": "John Doe", "role": "CEO", "content": "Amazing service! Highly recommended.", "avatar": "https://randomuser.me/api/portraits/men/32.jpg"},
                {"name": "Jane Smith", "role": "Designer", "content": "The best tool I've used.", "avatar": "https://randomuser.me/api/portraits/women/44.jpg"}
            ]
        },
        "cta": {
            "id": "cta", "type": "cta", "show": true,
            "title": "Ready to Start?",
            "description": "Join thousands of satisfied users today.",
            "buttonText": "Sign Up Now",
            "buttonLink": "#signup"
        },
        "contactForm": {
            "id": "contactForm", "type": "contactForm", "show": true,
            "title": "Contact Us",
            "subtitle": "We'd love to hear from you.",
            "buttonText": "Send Message",
            "successMessage": "Thank you! We'll get back to you soon.",
            "namePlaceholder": "Your Name",
            "emailPlaceholder": "Your Email",
            "messagePlaceholder": "Your Message",
            "showNameField": true,
            "showPhoneField": false,
            "showSubjectField": false,
            "formLayout": "centered",
            "showMap": false
        },
        "footer": {
            "id": "footer", "type": "footer", "show": true,
            "companyName": "LandingGen",
            "copyright": "© 2024 LandingGen. All rights reserved.",
            "links": [
                {"label": "Privacy Policy", "href": "#"},
                {"label": "Terms of Service", "href": "#"}
            ]
        },
        "timeline": {"id": "timeline", "type": "timeline", "show": false, "title": "Our Journey", "subtitle": "Milestones", "items": []},
        "team": {"id": "team", "type": "team", "show": false, "title": "Meet the Team", "subtitle": "Our Experts", "items": []},
        "twoColumnInfo": {
            "id": "twoColumnInfo", "type": "twoColumnInfo", "show": false,
            "title": "About Us", "subtitle": "Our Mission",
            "description": "Details about our mission.",
            "image": "", "imagePosition": "right"
        },
        "steps": {"id": "steps", "type": "steps", "show": false, "title": "How It Works", "subtitle": "Simple Steps", "items": []},
        "process": {"id": "process", "type": "process", "show": false, "title": "Our Process", "subtitle": "Workflow", "items": []},
        "manifesto": {"id": "manifesto", "type": "manifesto", "show": false, "items": []},
        "valueProposition": {"id": "valueProposition", "type": "valueProposition", "show": false, "title": "Value Prop", "description": "Why us?", "items": []},
        "philosophy": {"id": "philosophy", "type": "philosophy", "show": false, "title": "Our Philosophy", "description": "Core values", "items": []},
        "pullQuotes": {"id": "pullQuotes", "type": "pullQuotes", "show": false, "items": []},
        "contentBlocks": []
    }))
}

/// Fill in the `design` record for documents saved before it existed.
///
/// Returns `doc` itself when it already has one.
pub fn with_default_design(doc: &Node) -> Node {
    match doc.get("design") {
        Some(design) if !design.is_null() => doc.clone(),
        _ => doc.with_field(
            "design",
            Node::from(json!({
                "animation": "slide-up",
                "buttonStyle": "rounded",
                "animationDuration": "normal"
            })),
        ),
    }
}

/// Complete a generated page with the default document.
///
/// Top-level fields of `generated` replace the defaults. The records in
/// [`MERGED_RECORDS`] are merged one level deep instead, so a generated
/// `hero` only overrides the fields it carries. A missing `sectionOrder`
/// falls back to the default order and a missing `contentBlocks` to `[]`.
///
/// A non-record `generated` is returned unchanged.
pub fn merge_over_defaults(generated: &Node) -> Node {
    let Some(fields) = generated.as_map() else {
        return generated.clone();
    };

    let defaults = default_document();
    let merged = defaults.with_fields(fields.iter().map(|(k, v)| (k.as_str(), v.clone())));

    let mut updates: Vec<(&str, Node)> = Vec::new();
    for key in MERGED_RECORDS {
        let base = defaults.get(key).cloned().unwrap_or_else(Node::empty_map);
        let section = match generated.get(key).and_then(Node::as_map) {
            Some(overrides) => base.with_fields(overrides.iter().map(|(k, v)| (k.as_str(), v.clone()))),
            None => base,
        };
        updates.push((key, section));
    }

    let order = match generated.get(SECTION_ORDER_KEY) {
        Some(order) if !order.is_null() => order.clone(),
        _ => defaults.get(SECTION_ORDER_KEY).cloned().unwrap_or_else(|| Node::list(vec![])),
    };
    updates.push((SECTION_ORDER_KEY, order));

    let blocks = match generated.get(CONTENT_BLOCKS_KEY) {
        Some(blocks) if !blocks.is_null() => blocks.clone(),
        _ => Node::list(vec![]),
    };
    updates.push((CONTENT_BLOCKS_KEY, blocks));

    merged.with_fields(updates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SectionKind;
    use crate::validate::validate_import;

    #[test]
    fn test_default_has_every_singleton() {
        let doc = default_document();
        for kind in SectionKind::ALL {
            let section = doc.get(kind.as_str()).expect("section present");
            assert_eq!(section.get("id").and_then(Node::as_str), Some(kind.as_str()));
        }
    }

    #[test]
    fn test_default_passes_import_validation() {
        assert!(validate_import(&default_document()).is_ok());
    }

    #[test]
    fn test_with_default_design() {
        let doc = default_document();
        assert!(with_default_design(&doc).ptr_eq(&doc));

        let legacy = doc.without_field("design");
        let filled = with_default_design(&legacy);
        assert_eq!(
            filled.get("design").unwrap().to_json(),
            json!({"animation": "slide-up", "buttonStyle": "rounded", "animationDuration": "normal"})
        );
        assert!(filled.get("hero").unwrap().ptr_eq(doc.get("hero").unwrap()));
    }

    #[test]
    fn test_merge_fills_missing_sections() {
        let defaults = default_document();
        let merged = merge_over_defaults(&Node::from(json!({"hero": {"title": "Lift"}})));

        assert_eq!(merged.get("hero").and_then(|h| h.get("title")), Some(&Node::from("Lift")));
        assert_eq!(merged.get("hero").and_then(|h| h.get("subtitle")), defaults.get("hero").and_then(|h| h.get("subtitle")));
        assert_eq!(merged.get("navbar"), defaults.get("navbar"));
        assert_eq!(merged.get(SECTION_ORDER_KEY), defaults.get(SECTION_ORDER_KEY));
        assert_eq!(merged.get(CONTENT_BLOCKS_KEY).unwrap().to_json(), json!([]));
        assert_eq!(merged.get("team"), defaults.get("team"));
        assert!(validate_import(&merged).is_ok());
    }

    #[test]
    fn test_merge_keeps_generated_fields() {
        let generated = Node::from(json!({
            "primaryColor": "#000000",
            "navbar": {"logoText": "Gym"},
            "design": {"cardStyle": "glass"},
            "team": {"title": "Coaches"},
            "sectionOrder": ["hero", "navbar"],
            "contentBlocks": [{"id": "b1", "type": "content"}]
        }));
        let merged = merge_over_defaults(&generated);

        assert_eq!(merged.get("primaryColor"), Some(&Node::from("#000000")));
        assert_eq!(merged.get("navbar").and_then(|n| n.get("logoText")), Some(&Node::from("Gym")));
        assert!(merged.get("navbar").and_then(|n| n.get("links")).is_some());
        assert_eq!(merged.get("design").and_then(|d| d.get("cardStyle")), Some(&Node::from("glass")));
        assert_eq!(merged.get("design").and_then(|d| d.get("animation")), Some(&Node::from("slide-up")));
        // Records outside the merged set are replaced wholesale
        assert_eq!(merged.get("team").unwrap().to_json(), json!({"title": "Coaches"}));
        assert!(merged.get(SECTION_ORDER_KEY).unwrap().ptr_eq(generated.get(SECTION_ORDER_KEY).unwrap()));
        assert!(merged.get(CONTENT_BLOCKS_KEY).unwrap().ptr_eq(generated.get(CONTENT_BLOCKS_KEY).unwrap()));
    }

    #[test]
    fn test_merge_leaves_non_record_alone() {
        let generated = Node::list(vec![Node::from(1)]);
        assert!(merge_over_defaults(&generated).ptr_eq(&generated));
    }
}
