//! Static copy for the landing page sections.

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Interior Design",
        description: "Complete interior design solutions from concept to completion, tailored to your lifestyle and preferences.",
        features: ["Concept Development", "Material Selection", "Color Schemes", "Lighting Design"],
    },
    Service {
        title: "Space Planning",
        description: "Optimize your space with intelligent layouts that maximize functionality while maintaining aesthetic appeal.",
        features: ["Floor Plan Design", "Traffic Flow", "Storage Solutions", "Zoning"],
    },
    Service {
        title: "Furniture & Décor",
        description: "Curated furniture and décor pieces that perfectly complement your design vision and budget.",
        features: ["Custom Furniture", "Décor Selection", "Art Curation", "Textile Coordination"],
    },
    Service {
        title: "Renovation Support",
        description: "End-to-end renovation management ensuring your project runs smoothly from start to finish.",
        features: ["Project Management", "Vendor Coordination", "Timeline Planning", "Quality Control"],
    },
];

/// (step, title, description)
pub const PROCESS_STEPS: &[(&str, &str, &str)] = &[
    ("01", "Consultation", "Understanding your vision and requirements"),
    ("02", "Design", "Creating detailed plans and 3D visualizations"),
    ("03", "Execution", "Managing the implementation process"),
    ("04", "Completion", "Final styling and handover"),
];

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Modern Living Space",
        category: "Living Room",
        image: "https://images.unsplash.com/photo-1705321963943-de94bb3f0dd3?fit=max&fm=jpg&q=80&w=1080",
        description: "A contemporary living room blending comfort with elegance",
    },
    Project {
        title: "Elegant Bedroom Suite",
        category: "Bedroom",
        image: "https://images.unsplash.com/photo-1704428382616-d8c65fdd76f4?fit=max&fm=jpg&q=80&w=1080",
        description: "Serene bedroom design with luxurious finishes",
    },
    Project {
        title: "Minimalist Kitchen",
        category: "Kitchen",
        image: "https://images.unsplash.com/photo-1669046222569-a7672da06e12?fit=max&fm=jpg&q=80&w=1080",
        description: "Clean lines and functional design for modern cooking",
    },
    Project {
        title: "Luxury Dining Room",
        category: "Dining",
        image: "https://images.unsplash.com/photo-1704383014609-747c5afc2bc1?fit=max&fm=jpg&q=80&w=1080",
        description: "Sophisticated dining space for memorable gatherings",
    },
    Project {
        title: "Executive Office",
        category: "Office",
        image: "https://images.unsplash.com/photo-1718220216044-006f43e3a9b1?fit=max&fm=jpg&q=80&w=1080",
        description: "Professional workspace designed for productivity",
    },
    Project {
        title: "Contemporary Bathroom",
        category: "Bathroom",
        image: "https://images.unsplash.com/photo-1704428381342-ea9df943619e?fit=max&fm=jpg&q=80&w=1080",
        description: "Spa-like bathroom retreat with modern amenities",
    },
];

pub const ALL_CATEGORIES: &str = "All";

/// "All" followed by each project category in first-seen order.
pub fn portfolio_categories() -> Vec<&'static str> {
    let mut categories = vec![ALL_CATEGORIES];
    for project in PROJECTS {
        if !categories.contains(&project.category) {
            categories.push(project.category);
        }
    }
    categories
}

pub fn filter_projects(category: &str) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category == category)
        .collect()
}

pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub rating: u8,
    pub text: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Priya Sharma",
        location: "Salt Lake, Kolkata",
        rating: 5,
        text: "EasyDecor transformed our 2BHK apartment into a beautiful modern home while respecting our traditional values. The team understood our needs perfectly and delivered beyond our expectations.",
    },
    Testimonial {
        name: "Rajesh Chatterjee",
        location: "Park Street, Kolkata",
        rating: 5,
        text: "The attention to detail and quality of work is exceptional. They managed to create a luxurious feel within our budget. Highly recommend EasyDecor for anyone looking to renovate their home.",
    },
    Testimonial {
        name: "Ananya Banerjee",
        location: "Ballygunge, Kolkata",
        rating: 5,
        text: "From concept to completion, the entire process was smooth and professional. They turned our outdated kitchen into a modern, functional space that we absolutely love cooking in.",
    },
    Testimonial {
        name: "Amit Kumar",
        location: "New Town, Kolkata",
        rating: 5,
        text: "EasyDecor helped us design our new apartment with a perfect blend of contemporary and traditional elements. The team was responsive, creative, and delivered on time.",
    },
    Testimonial {
        name: "Shreya Das",
        location: "Alipore, Kolkata",
        rating: 5,
        text: "Working with EasyDecor was a delightful experience. They listened to our ideas and created a beautiful home office space that's both functional and inspiring. Excellent work!",
    },
];

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

/// Filled and empty stars for a 5-point rating.
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// (label, href) pairs shared by the header and footer.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("About", "#about"),
    ("Services", "#services"),
    ("Portfolio", "#portfolio"),
    ("Testimonials", "#testimonials"),
    ("Contact", "#contact"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_category_returns_every_project() {
        assert_eq!(filter_projects(ALL_CATEGORIES).len(), PROJECTS.len());
    }

    #[test]
    fn category_filter_keeps_declared_order() {
        let kitchens = filter_projects("Kitchen");
        assert_eq!(kitchens.len(), 1);
        assert_eq!(kitchens[0].title, "Minimalist Kitchen");
        assert!(filter_projects("Garage").is_empty());
    }

    #[test]
    fn categories_start_with_all_and_are_unique() {
        let categories = portfolio_categories();
        assert_eq!(categories[0], "All");
        assert_eq!(categories.len(), PROJECTS.len() + 1);
    }

    #[test]
    fn carousel_wraps_both_ways() {
        assert_eq!(next_index(4, 5), 0);
        assert_eq!(prev_index(0, 5), 4);
        assert_eq!(next_index(1, 5), 2);
        assert_eq!(prev_index(0, 0), 0);
    }

    #[test]
    fn stars_are_capped_at_five() {
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(9), "★★★★★");
    }
}
