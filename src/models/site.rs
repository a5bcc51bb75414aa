//! Static page content: everything the brochure pages show besides the
//! searchable catalogs.

use serde::Serialize;

/// Closed set of icons the pages reference. Rendering is up to the client;
/// the API only names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Award,
    BookOpen,
    Building,
    Clock,
    DollarSign,
    Grid,
    Home,
    Info,
    Mail,
    MapPin,
    Phone,
    Search,
    Settings,
    Shield,
    Star,
    TrendingUp,
    Users,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub icon: Icon,
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub experience: &'static str,
    pub specialties: Vec<&'static str>,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyValue {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceOffering {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub features: Vec<&'static str>,
    pub highlight: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactChannel {
    pub icon: Icon,
    pub title: &'static str,
    pub details: Vec<&'static str>,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutContent {
    pub hero: Hero,
    pub stats: Vec<Stat>,
    pub mission: &'static str,
    pub quote: &'static str,
    pub team: Vec<TeamMember>,
    pub values: Vec<CompanyValue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServicesContent {
    pub hero: Hero,
    pub services: Vec<ServiceOffering>,
    pub testimonials: Vec<Testimonial>,
    pub process: Vec<ProcessStep>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactContent {
    pub hero: Hero,
    pub channels: Vec<ContactChannel>,
    pub service_interests: Vec<&'static str>,
    pub contact_methods: Vec<ContactMethodOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactMethodOption {
    pub value: &'static str,
    pub label: &'static str,
}
