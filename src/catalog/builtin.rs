use crate::catalog::model::{
    AspectRatio, Catalog, Category, CategoryInfo, Certification, Media, Profile, Project, Skill,
    SkillGroup, SkillSet, Subcategory, SubcategoryInfo,
};
use crate::foundation::core::Rgb8;

fn sub(id: Subcategory, name: &str, icon: &str) -> SubcategoryInfo {
    SubcategoryInfo {
        id,
        name: name.to_owned(),
        icon: icon.to_owned(),
    }
}

fn image(src: &str) -> Media {
    Media::Image { src: src.to_owned() }
}

fn project(
    title: &str,
    description: &str,
    tools: &[&str],
    media: Media,
    subcategory: Subcategory,
) -> Project {
    Project {
        title: title.to_owned(),
        description: description.to_owned(),
        tools: tools.iter().map(|t| (*t).to_owned()).collect(),
        media,
        link: "#".to_owned(),
        category: subcategory.category(),
        subcategory,
    }
}

fn skill(name: &str, level: u8, icon: &str) -> Skill {
    Skill {
        name: name.to_owned(),
        level,
        icon: icon.to_owned(),
    }
}

fn cert(name: &str, issuer: &str, year: u16) -> Certification {
    Certification {
        name: name.to_owned(),
        issuer: issuer.to_owned(),
        year,
    }
}

impl Catalog {
    /// The portfolio's own content.
    pub fn builtin() -> Self {
        let categories = vec![
            CategoryInfo {
                id: Category::WebDevelopment,
                name: "Web Development".to_owned(),
                icon: "code".to_owned(),
                color: Rgb8::new(0x3b, 0x82, 0xf6),
                subcategories: vec![
                    sub(Subcategory::ReactApps, "React Apps", "atom"),
                    sub(Subcategory::Websites, "Websites", "globe"),
                    sub(Subcategory::WordPress, "WordPress", "layout"),
                    sub(Subcategory::LandingPages, "Landing Pages", "rocket"),
                ],
            },
            CategoryInfo {
                id: Category::DigitalMarketing,
                name: "Digital Marketing".to_owned(),
                icon: "trending-up".to_owned(),
                color: Rgb8::new(0xa8, 0x55, 0xf7),
                subcategories: vec![
                    sub(Subcategory::Seo, "SEO & Content", "search"),
                    sub(Subcategory::PaidAds, "Paid Advertising", "megaphone"),
                    sub(Subcategory::SocialMedia, "Social Media", "share"),
                    sub(Subcategory::EmailMarketing, "Email Marketing", "mail"),
                    sub(Subcategory::LocalSeo, "Local SEO", "map-pin"),
                ],
            },
        ];

        let projects = vec![
            project(
                "Personal Portfolio Website",
                "Modern, responsive portfolio built with HTML5, CSS3, and JavaScript featuring dark mode and smooth animations.",
                &["HTML5", "CSS3", "JavaScript", "Responsive Design"],
                image("https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400&h=250&fit=crop"),
                Subcategory::Websites,
            ),
            project(
                "Task Board",
                "Drag-and-drop kanban board with local persistence and keyboard shortcuts.",
                &["React", "TypeScript", "Tailwind CSS"],
                image("/projects/task-board.png"),
                Subcategory::ReactApps,
            ),
            project(
                "Weather Dashboard",
                "City forecasts with animated charts and geolocation lookup.",
                &["React", "Chart.js", "OpenWeather API"],
                image("/projects/weather-dashboard.png"),
                Subcategory::ReactApps,
            ),
            project(
                "SEO-Optimized Blog",
                "WordPress blog with advanced SEO optimization, achieving 95+ PageSpeed score and top search rankings.",
                &["WordPress", "Yoast SEO", "Google Analytics", "PageSpeed"],
                image("https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?w=400&h=250&fit=crop"),
                Subcategory::Seo,
            ),
            project(
                "Google Ads Campaign",
                "Comprehensive PPC campaign setup with conversion tracking, achieving 150% ROI improvement.",
                &["Google Ads", "Analytics", "Tag Manager", "Conversion Tracking"],
                image("https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=400&h=250&fit=crop"),
                Subcategory::PaidAds,
            ),
            project(
                "Social Media Strategy",
                "Complete social media marketing plan with content calendar and Meta Ads implementation.",
                &["Canva", "Meta Ads", "Content Strategy", "Analytics"],
                image("https://images.unsplash.com/photo-1611162617474-5b21e879e113?w=400&h=250&fit=crop"),
                Subcategory::SocialMedia,
            ),
            project(
                "Product Launch Reel",
                "Short-form vertical video series promoting a product launch across Instagram and YouTube Shorts.",
                &["Canva", "CapCut", "Meta Ads"],
                Media::Video {
                    src: "/projects/launch-reel.mp4".to_owned(),
                    aspect: AspectRatio::Portrait,
                },
                Subcategory::SocialMedia,
            ),
            project(
                "Welcome Email Journey",
                "Five-step onboarding sequence with segmentation and A/B tested subject lines.",
                &["Mailchimp", "Email Automation", "Copywriting"],
                image("/projects/email-journey.png"),
                Subcategory::EmailMarketing,
            ),
            project(
                "Local Business Optimization",
                "Google My Business optimization project resulting in 200% increase in local visibility.",
                &["Google My Business", "Local SEO", "Schema Markup", "Citations"],
                image("https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=400&h=250&fit=crop"),
                Subcategory::LocalSeo,
            ),
        ];

        let skills = vec![
            SkillSet {
                group: SkillGroup::Frontend,
                skills: vec![
                    skill("HTML5", 95, "🌐"),
                    skill("CSS3", 90, "🎨"),
                    skill("JavaScript", 85, "⚡"),
                    skill("Bootstrap", 80, "📱"),
                    skill("WordPress", 88, "📝"),
                    skill("Responsive Design", 92, "📐"),
                ],
            },
            SkillSet {
                group: SkillGroup::Marketing,
                skills: vec![
                    skill("Google Analytics", 90, "📊"),
                    skill("Tag Manager", 85, "🏷️"),
                    skill("Canva", 95, "🎪"),
                    skill("Chatbots", 75, "🤖"),
                    skill("Email Automation", 88, "📧"),
                    skill("Meta Ads", 82, "📢"),
                ],
            },
            SkillSet {
                group: SkillGroup::Soft,
                skills: vec![
                    skill("Content Strategy", 93, "📋"),
                    skill("Branding", 87, "✨"),
                    skill("Conversion Optimization", 85, "🎯"),
                    skill("SEO", 90, "🔍"),
                    skill("PPC Management", 80, "💰"),
                ],
            },
        ];

        let certifications = vec![
            cert("Webfame Digital Marketing Certificate", "Webfame Academy", 2024),
            cert("Google Ads Certified", "Google", 2024),
            cert("SEO Fundamentals", "SEMrush", 2024),
            cert("Canva Pro Design", "Canva", 2024),
        ];

        let profile = Profile {
            name: "Nahush Patel".to_owned(),
            headline: "Web Developer & Digital Marketer".to_owned(),
            tagline: "Creating beautiful, functional websites and driving digital growth through strategic marketing solutions.".to_owned(),
            about: "I'm a passionate web developer and digital marketing specialist with expertise in creating stunning websites and driving online growth.".to_owned(),
            modules: [
                "SEO Optimization",
                "Google Ads",
                "Social Media Marketing",
                "Content Strategy",
                "Email Marketing",
                "Analytics & Tracking",
            ]
            .iter()
            .map(|m| (*m).to_owned())
            .collect(),
            photo: "/images/profile.jpg".to_owned(),
            resume: "/resume.pdf".to_owned(),
            email: "your.email@example.com".to_owned(),
        };

        Self {
            profile,
            categories,
            projects,
            skills,
            certifications,
        }
    }
}
