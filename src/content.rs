//! Stock page content.
//!
//! The tables below are the copy and imagery the site ships with. They are
//! read-only: [`crate::config::SiteConfig::default`] turns them into owned
//! values once, and a user `config.toml` can replace any list wholesale.

use crate::types::{
    Collection, CompanyInfo, Faq, FooterSection, HeroImage, ImageLoading, InfoGridItem, NavItem,
    Project, ProjectImage, Stat, Testimonial, TrustIndicator, Value,
};

const UNSPLASH: &str = "https://images.unsplash.com";

fn image(path: &str) -> String {
    format!("{UNSPLASH}/{path}")
}

fn links(items: &[(&str, &str)]) -> Vec<NavItem> {
    items
        .iter()
        .map(|(label, href)| NavItem {
            label: label.to_string(),
            href: href.to_string(),
        })
        .collect()
}

pub const KOREAN_SITE_URL: &str = "https://eastern-edition.co.kr";
pub const LOGIN_URL: &str = "http://localhost/myapp/public/login.php";

pub fn company() -> CompanyInfo {
    CompanyInfo {
        name: "Eastern Edition".to_string(),
        address: "17, Eonju-ro 133-gil, Gangnam-gu, Seoul".to_string(),
        email: "contact@eastern-edition.com".to_string(),
    }
}

/// Main navigation, shared by the desktop bar and the mobile drawer.
pub fn nav_items() -> Vec<NavItem> {
    links(&[
        ("Products", "#products"),
        ("Project", "#project"),
        ("About", "#about"),
        ("Bespoke", "#bespoke"),
        ("Store", "#store"),
    ])
}

/// Top-bar shortcuts next to the language switch.
pub fn quick_links() -> Vec<NavItem> {
    links(&[("Contact", "#contact"), ("Store", "#store")])
}

pub fn hero_images() -> Vec<HeroImage> {
    const TABLE: &[(&str, &str, ImageLoading)] = &[
        (
            "photo-1549187774-b4e9b0445b69?w=1200&q=80",
            "Modern furniture piece showcasing Eastern Edition craftsmanship",
            ImageLoading::Eager,
        ),
        (
            "photo-1543292630-3c2a4b4b6b07?w=1200&q=80",
            "Contemporary design with traditional Korean elements",
            ImageLoading::Lazy,
        ),
        (
            "photo-1524758631624-e2822e304c36?w=1200&q=80",
            "Handcrafted wooden furniture detail",
            ImageLoading::Lazy,
        ),
        (
            "photo-1545239351-1141bd82e8a6?w=1200&q=80",
            "Minimalist furniture design in modern setting",
            ImageLoading::Lazy,
        ),
    ];
    TABLE
        .iter()
        .map(|(path, alt, loading)| HeroImage {
            src: image(path),
            alt: alt.to_string(),
            loading: *loading,
        })
        .collect()
}

pub fn collections() -> Vec<Collection> {
    const TABLE: &[(&str, &str, &str, &str)] = &[
        (
            "Sofa",
            "photo-1549187774-b4e9b0445b69?w=800&q=60",
            "A modern sofa with a minimalist design.",
            "#sofa",
        ),
        (
            "Chair",
            "photo-1524758631624-e2822e304c36?w=800&q=60",
            "A handcrafted wooden chair in a light-filled room.",
            "#chair",
        ),
        (
            "Table",
            "photo-1545239351-1141bd82e8a6?w=800&q=60",
            "A sleek, modern coffee table with simple lines.",
            "#table",
        ),
        (
            "Bed",
            "photo-1484154218962-a197022b5858?w=800&q=60",
            "A luxurious bed with a minimalist frame and soft bedding.",
            "#bed",
        ),
    ];
    TABLE
        .iter()
        .map(|(title, path, alt, href)| Collection {
            title: title.to_string(),
            img: image(path),
            alt: alt.to_string(),
            href: href.to_string(),
        })
        .collect()
}

pub fn projects() -> Vec<Project> {
    [
        "Blue Bottle Seoul Studio",
        "UN Village Lanuvo Hannam",
        "Luxembourg Embassy Residence",
    ]
    .iter()
    .map(|title| Project {
        title: title.to_string(),
        description: "Design and installation focused on material authenticity.".to_string(),
        image_url: image("photo-1523413651479-597eb2da0ad6?w=1200&q=60"),
    })
    .collect()
}

pub fn info_items() -> Vec<InfoGridItem> {
    const TABLE: &[(&str, &str, &str)] = &[
        (
            "philosophy",
            "Philosophy",
            "Bridging the past to the future: natural materials and slow craft.",
        ),
        (
            "archive",
            "Archive",
            "Press, exhibitions and collaborations across the years.",
        ),
        (
            "bespoke",
            "Bespoke",
            "Custom furniture and consulting for private and commercial spaces.",
        ),
    ];
    TABLE
        .iter()
        .map(|(id, title, description)| InfoGridItem {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            href: format!("#{id}"),
            link_text: Some("Learn more".to_string()),
        })
        .collect()
}

pub fn testimonials() -> Vec<Testimonial> {
    struct Row {
        name: &'static str,
        title: &'static str,
        company: &'static str,
        content: &'static str,
        project: Option<&'static str>,
        avatar: &'static str,
    }
    const TABLE: &[Row] = &[
        Row {
            name: "Sarah Kim",
            title: "Interior Designer",
            company: "Studio Minimal",
            content: "Eastern Edition's approach to furniture design is truly exceptional. Their ability to blend traditional Korean craftsmanship with contemporary aesthetics creates pieces that are both timeless and relevant. The attention to detail in every piece reflects their deep respect for heritage.",
            project: Some("Blue Bottle Seoul Studio"),
            avatar: "photo-1544005313-94efcd1e4860?q=80&fm=jpg",
        },
        Row {
            name: "Michael Chen",
            title: "Architect",
            company: "Chen & Associates",
            content: "Working with Eastern Edition on our Luxembourg Embassy project was remarkable. Their understanding of space, materiality, and cultural sensitivity resulted in furniture that perfectly complemented our architectural vision. Each piece tells a story.",
            project: Some("Luxembourg Embassy Residence"),
            avatar: "photo-1547425260-76bc06429c3f?q=80&fm=jpg",
        },
        Row {
            name: "Elena Rodriguez",
            title: "Creative Director",
            company: "Artisan Spaces",
            content: "The philosophy of slow craft and natural materials resonates deeply with our values. Eastern Edition doesn't just create furniture; they create experiences that connect people to the authenticity of traditional making processes.",
            project: Some("UN Village Lanuvo Hannam"),
            avatar: "photo-1438761681033-6461ffad8d80?q=80&fm=jpg",
        },
        Row {
            name: "James Park",
            title: "Hotel Manager",
            company: "Boutique Hotels Seoul",
            content: "Our guests consistently comment on the beautiful furniture throughout our property. Eastern Edition's pieces have become conversation starters, embodying the perfect balance between comfort and artistic expression.",
            project: None,
            avatar: "photo-1560250097-0b93528c311a?q=80&fm=jpg",
        },
        Row {
            name: "Anna Sato",
            title: "Private Collector",
            company: "Tokyo",
            content: "Each piece I've acquired from Eastern Edition has become a centerpiece in my home. The quality is unmatched, and the story behind each creation adds profound meaning to daily living.",
            project: None,
            avatar: "photo-1507003211169-0a561c289e65?q=80&fm=jpg",
        },
    ];
    TABLE
        .iter()
        .zip(1..)
        .map(|(row, id)| Testimonial {
            id,
            name: row.name.to_string(),
            title: row.title.to_string(),
            company: row.company.to_string(),
            content: row.content.to_string(),
            project: row.project.map(str::to_string),
            avatar: Some(image(row.avatar)),
            avatar_alt: Some(format!("Portrait of {}", row.name)),
        })
        .collect()
}

pub fn featured_projects() -> Vec<ProjectImage> {
    const TABLE: &[(&str, &str, &str)] = &[
        (
            "photo-1523413651479-597eb2da0ad6?w=600&q=60",
            "Interior of the Blue Bottle Seoul Studio project",
            "Blue Bottle Seoul Studio",
        ),
        (
            "photo-1504624467554-15950005781a?w=600&q=60",
            "Bespoke furniture in the UN Village Lanuvo Hannam project",
            "UN Village Lanuvo Hannam",
        ),
        (
            "photo-1521782294436-bc17f69466c4?w=600&q=60",
            "Custom furniture in the Luxembourg Embassy Residence",
            "Luxembourg Embassy Residence",
        ),
    ];
    TABLE
        .iter()
        .map(|(path, alt, title)| ProjectImage {
            src: image(path),
            alt: alt.to_string(),
            title: title.to_string(),
        })
        .collect()
}

pub fn trust_indicators() -> Vec<TrustIndicator> {
    [
        ("consultation", "Free consultation"),
        ("solutions", "Custom solutions"),
        ("craftsmanship", "Heritage craftsmanship"),
    ]
    .iter()
    .map(|(id, text)| TrustIndicator {
        id: id.to_string(),
        text: text.to_string(),
    })
    .collect()
}

/// About-section story, one markdown paragraph per entry.
pub fn about_story() -> Vec<String> {
    [
        "Founded in Seoul in 2018, Eastern Edition emerged from a deep respect for Korean craftsmanship traditions and a vision to bridge the gap between heritage and modern living.",
        "Our studio approach focuses on the careful selection of natural materials and the preservation of time-honored techniques, while creating furniture that speaks to contemporary needs and spaces.",
        "Each piece tells a story of slow craft, sustainable practices, and the quiet elegance that defines Korean design philosophy. We believe in creating furniture that not only serves its function but also carries the soul of its makers.",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}

pub fn about_image() -> String {
    image("photo-1578662996442-48f60103fc96?w=800&q=80")
}

pub fn stats() -> Vec<Stat> {
    [
        ("2018", "Founded in Seoul", "Founded in"),
        ("50+", "Bespoke projects completed", "Projects completed"),
        ("100%", "Natural materials", "Material sustainability"),
        ("3", "Generations of craft knowledge", "Generations of knowledge"),
    ]
    .iter()
    .map(|(number, label, aria_label)| Stat {
        number: number.to_string(),
        label: label.to_string(),
        aria_label: aria_label.to_string(),
    })
    .collect()
}

pub fn values() -> Vec<Value> {
    [
        (
            "Heritage",
            "Preserving traditional Korean woodworking techniques and passing them to future generations.",
        ),
        (
            "Sustainability",
            "Using only responsibly sourced materials and creating furniture built to last generations.",
        ),
        (
            "Innovation",
            "Adapting traditional methods for contemporary living without compromising craftsmanship quality.",
        ),
    ]
    .iter()
    .map(|(title, description)| Value {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub fn faqs() -> Vec<Faq> {
    const TABLE: &[(&str, &str)] = &[
        (
            "What materials do you use in your furniture?",
            "We primarily use natural materials including solid wood, natural leather, and organic fabrics. Our commitment to sustainability means we source materials locally when possible and focus on durability over trends.",
        ),
        (
            "How long does custom furniture take to complete?",
            "Custom pieces typically take 8-12 weeks from design approval to completion. This timeline allows for careful craftsmanship and quality control. We'll provide regular updates throughout the process.",
        ),
        (
            "Do you offer international shipping?",
            "Yes, we ship internationally. Shipping costs and timelines vary by location. For large furniture pieces, we work with specialized freight partners to ensure safe delivery.",
        ),
        (
            "Can I visit your Seoul studio?",
            "Absolutely! We welcome visits to our Seoul studio by appointment. Contact us at contact@eastern-edition.com to schedule a visit where you can see our craftsmanship process and materials firsthand.",
        ),
        (
            "What is your approach to sustainability?",
            "Sustainability is central to our philosophy. We use responsibly sourced materials, focus on creating timeless designs that last generations, and work with local artisans to reduce our environmental impact.",
        ),
        (
            "Do you provide design consultation services?",
            "Yes, we offer comprehensive design consultation for both residential and commercial spaces. Our bespoke service includes space planning, material selection, and custom furniture design.",
        ),
    ];
    TABLE
        .iter()
        .zip(1..)
        .map(|((question, answer), id)| Faq {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
        })
        .collect()
}

pub fn footer_sections() -> Vec<FooterSection> {
    vec![
        FooterSection {
            title: "Products".to_string(),
            links: links(&[
                ("Sofa", "#sofa"),
                ("Chair", "#chair"),
                ("Table", "#table"),
                ("Bed", "#bed"),
            ]),
        },
        FooterSection {
            title: "Company".to_string(),
            links: links(&[
                ("Philosophy", "#philosophy"),
                ("Archive", "#archive"),
                ("Bespoke", "#bespoke"),
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn stock_lists_have_unique_keys() {
        let titles: HashSet<_> = collections().into_iter().map(|c| c.title).collect();
        assert_eq!(titles.len(), 4);
        let ids: HashSet<_> = faqs().into_iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), 6);
        let ids: HashSet<_> = testimonials().into_iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn testimonials_number_from_one() {
        let ids: Vec<u32> = testimonials().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn only_first_hero_image_is_eager() {
        let loading: Vec<_> = hero_images().iter().map(|i| i.loading).collect();
        assert_eq!(loading[0], ImageLoading::Eager);
        assert!(loading[1..].iter().all(|l| *l == ImageLoading::Lazy));
    }

    #[test]
    fn images_point_at_content_host() {
        assert!(collections().iter().all(|c| c.img.starts_with(UNSPLASH)));
        assert!(about_image().starts_with(UNSPLASH));
    }
}
