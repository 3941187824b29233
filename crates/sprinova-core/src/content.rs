//! Static site content: brand metadata, navigation, contact details, and the
//! services catalogue. Served verbatim by the JSON API; copy changes happen
//! here, not in the pages.

use serde::Serialize;

// ---------------------------------------------------------------------------
// SiteMeta / NavLink / ContactInfo
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct SiteMeta {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
}

pub fn site_meta() -> SiteMeta {
    SiteMeta {
        name: "Sprinova Digital",
        tagline: "Your strategic partner for digital transformation",
        description: "We boost your business through technology and digital marketing.",
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink {
            href: "/",
            label: "Home",
        },
        NavLink {
            href: "/about",
            label: "About Us",
        },
        NavLink {
            href: "/#services",
            label: "Services",
        },
        NavLink {
            href: "/contact",
            label: "Contact Us",
        },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
}

pub fn contact_info() -> ContactInfo {
    ContactInfo {
        email: "contact@sprinova.digital",
        phone: "+1 (555) 123-4567",
        address: "123 Innovation Drive, Tech City, 12345",
    }
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Icon name the frontend maps to its icon set.
    pub icon: &'static str,
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            slug: "web-development",
            title: "Web Development",
            description: "Modern, responsive, and user-friendly websites that convert visitors into customers.",
            icon: "code",
        },
        Service {
            slug: "growth-performance",
            title: "Growth & Performance",
            description: "Data-driven strategies to accelerate your growth and improve performance.",
            icon: "trending-up",
        },
        Service {
            slug: "content-seo",
            title: "Content & SEO",
            description: "High-quality content and SEO strategies to improve rankings and drive organic traffic.",
            icon: "pen-tool",
        },
        Service {
            slug: "paid-media",
            title: "Paid Media",
            description: "Targeted advertising campaigns on platforms like Google, Facebook, and LinkedIn.",
            icon: "dollar-sign",
        },
        Service {
            slug: "marketing-automation",
            title: "Marketing Automation",
            description: "Automate marketing tasks to nurture leads and engage customers effectively.",
            icon: "bot",
        },
        Service {
            slug: "social-media",
            title: "Social Media",
            description: "Engaging content and strategic campaigns to grow your social media presence.",
            icon: "users",
        },
        Service {
            slug: "branding",
            title: "Branding",
            description: "Create a strong brand identity that resonates with your target audience.",
            icon: "palette",
        },
        Service {
            slug: "audiovisual-production",
            title: "Audiovisual Production",
            description: "Professional video and photo content to showcase your brand and products.",
            icon: "film",
        },
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
